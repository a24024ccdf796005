//! Recursive 2x2x2 decomposition of the blocked Floyd–Warshall.

use apsp_types::Weight;
use dense_apsp_simd::SimdVec;

use super::update::fw_update;
use super::{BlockGrid, BLOCK};

/// Recursive Floyd–Warshall over the block grid.
///
/// `scale` is the current recursion extent in blocks (a power of two);
/// `(i0, i1, i2)` are the target-row, pivot and target-column block
/// coordinates. On return, every path `i -> k -> j` with `i` in the target
/// rows, `k` in the pivot range and `j` in the target columns has been
/// relaxed.
///
/// The eight sub-calls are ordered so that each octant reads only regions
/// already finalized by the preceding octants; the symmetric variant (valid
/// only on diagonal triples of a symmetric matrix) replaces the two
/// mirrored octants with block transposes of their twins.
///
/// # Safety
/// Every in-grid block of `grid` must be populated, and `scale` must cover
/// the grid (`scale >= grid.grid()` at the root call).
pub(crate) unsafe fn fw_recurse<V: SimdVec, const UNROLL: usize>(
    scale: usize,
    grid: &BlockGrid<V::Elem>,
    i0: usize,
    i1: usize,
    i2: usize,
    symmetric: bool,
) {
    let g = grid.grid();
    if i0 >= g || i1 >= g || i2 >= g {
        return;
    }
    if scale == 1 {
        fw_update::<V, UNROLL>(
            grid.block_ptr(i0, i2),
            grid.block_ptr(i0, i1),
            grid.block_ptr(i1, i2),
        );
        return;
    }

    let h = scale >> 1;
    if !symmetric {
        fw_recurse::<V, UNROLL>(h, grid, i0, i1, i2, false);
        fw_recurse::<V, UNROLL>(h, grid, i0, i1, i2 + h, false);
        fw_recurse::<V, UNROLL>(h, grid, i0 + h, i1, i2, false);
        fw_recurse::<V, UNROLL>(h, grid, i0 + h, i1, i2 + h, false);
        fw_recurse::<V, UNROLL>(h, grid, i0 + h, i1 + h, i2 + h, false);
        fw_recurse::<V, UNROLL>(h, grid, i0 + h, i1 + h, i2, false);
        fw_recurse::<V, UNROLL>(h, grid, i0, i1 + h, i2 + h, false);
        fw_recurse::<V, UNROLL>(h, grid, i0, i1 + h, i2, false);
    } else {
        // Symmetric calls only occur with i0 == i1 == i2; the off-diagonal
        // quadrants mirror each other, so two of the eight octants reduce
        // to transposes of already-finalized twins.
        fw_recurse::<V, UNROLL>(h, grid, i0, i1, i2, true);
        fw_recurse::<V, UNROLL>(h, grid, i0, i1, i2 + h, false);
        transpose_copy(h, grid, i0, i0 + h);
        fw_recurse::<V, UNROLL>(h, grid, i0 + h, i1, i2 + h, false);
        fw_recurse::<V, UNROLL>(h, grid, i0 + h, i1 + h, i2 + h, true);
        fw_recurse::<V, UNROLL>(h, grid, i0 + h, i1 + h, i2, false);
        transpose_copy(h, grid, i0 + h, i0);
        fw_recurse::<V, UNROLL>(h, grid, i0, i1 + h, i2, false);
    }
}

/// Copy the `scale x scale` block range at `(block_row, block_col)` to its
/// transposed position, transposing each block. Source blocks outside the
/// grid are skipped.
unsafe fn transpose_copy<E: Weight>(
    scale: usize,
    grid: &BlockGrid<E>,
    block_row: usize,
    block_col: usize,
) {
    let g = grid.grid();
    for r in block_row..(block_row + scale).min(g) {
        for c in block_col..(block_col + scale).min(g) {
            let src = grid.block_ptr(r, c);
            let dst = grid.block_ptr(c, r);
            for y in 0..BLOCK {
                for x in 0..BLOCK {
                    *dst.add(x * BLOCK + y) = *src.add(y * BLOCK + x);
                }
            }
        }
    }
}
