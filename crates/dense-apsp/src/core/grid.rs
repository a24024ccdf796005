//! Aligned scratch storage and the block offset table.

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use apsp_types::Weight;

use super::BLOCK;

/// Alignment of the scratch region; also the widest supported vector.
const SCRATCH_ALIGN: usize = 64;

/// Offset table entry for a block the grid does not contain.
const NO_BLOCK: usize = usize::MAX;

/// A contiguous, 64-byte-aligned scratch allocation of `len` elements.
///
/// Freed on drop; an out-of-memory condition aborts via
/// [`handle_alloc_error`], matching the engine's no-partial-result contract.
struct Scratch<E> {
    ptr: NonNull<E>,
    layout: Layout,
    _marker: PhantomData<E>,
}

impl<E: Weight> Scratch<E> {
    fn new(len: usize) -> Self {
        let layout = Self::layout(len);
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<E>()) else {
            handle_alloc_error(layout);
        };
        Self {
            ptr,
            layout,
            _marker: PhantomData,
        }
    }

    fn layout(len: usize) -> Layout {
        let size = len
            .checked_mul(std::mem::size_of::<E>())
            .expect("scratch size overflows usize");
        match Layout::from_size_align(size, SCRATCH_ALIGN) {
            Ok(layout) => layout,
            Err(_) => panic!("scratch layout of {} bytes is invalid", size),
        }
    }

    #[inline]
    fn as_ptr(&self) -> *mut E {
        self.ptr.as_ptr()
    }
}

impl<E> Drop for Scratch<E> {
    fn drop(&mut self) {
        unsafe { dealloc(self.ptr.as_ptr().cast(), self.layout) };
    }
}

/// The solver's working set: all blocks of the reordered matrix plus the
/// table mapping grid coordinates to their position in scratch.
///
/// Each in-grid `(row, col)` names exactly one `BLOCK x BLOCK` region;
/// out-of-grid coordinates have no entry and are pruned by index before any
/// pointer is formed.
pub(crate) struct BlockGrid<E: Weight> {
    scratch: Scratch<E>,
    grid: usize,
    offsets: Box<[usize]>,
}

impl<E: Weight> BlockGrid<E> {
    /// Allocate scratch and an empty offset table for a `grid x grid` block
    /// grid. The scratch contents are undefined until the forward reorder
    /// has populated every block.
    pub(crate) fn new(grid: usize) -> Self {
        let side = grid * BLOCK;
        Self {
            scratch: Scratch::new(side * side),
            grid,
            offsets: vec![NO_BLOCK; grid * grid].into_boxed_slice(),
        }
    }

    /// Number of blocks per side.
    #[inline]
    pub(crate) fn grid(&self) -> usize {
        self.grid
    }

    /// Base pointer of the scratch region.
    #[inline]
    pub(crate) fn base(&self) -> *mut E {
        self.scratch.as_ptr()
    }

    /// Record where the `(row, col)` block lives in scratch.
    #[inline]
    pub(crate) fn set_offset(&mut self, row: usize, col: usize, offset: usize) {
        debug_assert!(row < self.grid && col < self.grid);
        self.offsets[row * self.grid + col] = offset;
    }

    /// Pointer to the first element of the `(row, col)` block.
    ///
    /// Callers must have pruned out-of-grid coordinates already; every
    /// in-grid entry is populated by the forward reorder.
    #[inline]
    pub(crate) fn block_ptr(&self, row: usize, col: usize) -> *mut E {
        debug_assert!(row < self.grid && col < self.grid);
        let offset = self.offsets[row * self.grid + col];
        debug_assert_ne!(offset, NO_BLOCK, "block ({}, {}) was never placed", row, col);
        unsafe { self.base().add(offset) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_is_64_byte_aligned() {
        for grid in [1usize, 2, 3, 5] {
            let g: BlockGrid<i32> = BlockGrid::new(grid);
            assert_eq!(g.base() as usize % SCRATCH_ALIGN, 0);
        }
        let g16: BlockGrid<i16> = BlockGrid::new(2);
        assert_eq!(g16.base() as usize % SCRATCH_ALIGN, 0);
        let g64: BlockGrid<i64> = BlockGrid::new(2);
        assert_eq!(g64.base() as usize % SCRATCH_ALIGN, 0);
    }

    #[test]
    fn block_pointers_stay_aligned() {
        let mut g: BlockGrid<i16> = BlockGrid::new(3);
        let mut offset = 0;
        for row in 0..3 {
            for col in 0..3 {
                g.set_offset(row, col, offset);
                offset += BLOCK * BLOCK;
            }
        }
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(g.block_ptr(row, col) as usize % SCRATCH_ALIGN, 0);
            }
        }
    }
}
