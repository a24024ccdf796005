//! Z-order block reordering between the user matrix and scratch.
//!
//! Blocks are laid out in scratch in the same 2x2-recursive order the
//! driver visits them, so every recursion subtree owns one contiguous
//! stretch of memory.
//!
//! Values are negated on the way in and negated again on the way out: the
//! user's problem is a minimization, but the kernel runs in max-plus form
//! so that its one conditional-store primitive is `chmax_store`, which is
//! cheaper than the chmin form on at least one supported width. All
//! intermediate values then live in `[-2*INF, 0]`, comfortably inside the
//! representable range.

use apsp_types::Weight;

use super::{BlockGrid, BLOCK};

/// Recursively copy between the user matrix `user` (row-major, `src_n`
/// wide) and the block at the current scratch cursor.
///
/// Forward (`rev == false`): writes the negated user values into scratch,
/// pads slots outside the user matrix with `-INF`, and records each block's
/// offset in the grid table. Reverse (`rev == true`): writes the negated
/// scratch values back over the user matrix; padding slots have no user
/// counterpart and are left alone.
///
/// `scale` is the power-of-two recursion extent in blocks; quadrants are
/// visited in the fixed order (0,0), (0,1), (1,0), (1,1), threading the
/// element cursor through and returning its final value. Block coordinates
/// outside the grid are skipped without advancing the cursor.
///
/// # Safety
/// `user` must be valid for `src_n * src_n` elements, readable when
/// `rev == false` and writable when `rev == true`.
pub(crate) unsafe fn reorder<E: Weight>(
    src_n: usize,
    scale: usize,
    user: *mut E,
    grid: &mut BlockGrid<E>,
    block_row: usize,
    block_col: usize,
    cursor: usize,
    rev: bool,
) -> usize {
    let g = grid.grid();
    if block_row >= g || block_col >= g {
        return cursor;
    }
    if scale > 1 {
        let half = scale >> 1;
        let mut cursor = cursor;
        for i in 0..2 {
            for j in 0..2 {
                cursor = reorder(
                    src_n,
                    half,
                    user,
                    grid,
                    block_row + i * half,
                    block_col + j * half,
                    cursor,
                    rev,
                );
            }
        }
        return cursor;
    }

    let dst = grid.base().add(cursor);
    let src_base = user.add(block_row * BLOCK * src_n + block_col * BLOCK);
    for i in 0..BLOCK {
        if block_row * BLOCK + i < src_n {
            let cols = BLOCK.min(src_n - block_col * BLOCK);
            if !rev {
                for j in 0..cols {
                    *dst.add(i * BLOCK + j) = (*src_base.add(i * src_n + j)).wrapping_neg();
                }
                for j in cols..BLOCK {
                    *dst.add(i * BLOCK + j) = E::INF.wrapping_neg();
                }
            } else {
                for j in 0..cols {
                    *src_base.add(i * src_n + j) = (*dst.add(i * BLOCK + j)).wrapping_neg();
                }
            }
        } else if !rev {
            for j in 0..BLOCK {
                *dst.add(i * BLOCK + j) = E::INF.wrapping_neg();
            }
        }
    }
    grid.set_offset(block_row, block_col, cursor);
    cursor + BLOCK * BLOCK
}
