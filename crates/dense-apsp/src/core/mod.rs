//! The blocked-recursive Floyd–Warshall engine.
//!
//! Everything in here operates on the negated, block-reordered scratch image
//! of the user's matrix (see [`layout`]) and is driven through raw block
//! pointers owned by [`grid::BlockGrid`]. The public crate surface wraps
//! this in safe entry points.

mod grid;
mod kernel;
mod layout;
mod recurse;
mod update;

pub(crate) use grid::BlockGrid;
pub(crate) use layout::reorder;
pub(crate) use recurse::fw_recurse;

/// Block side length in elements.
///
/// A multiple of every supported lane count, and `BLOCK^2 * size_of::<T>()`
/// is a multiple of 64 bytes for every supported `T`, so consecutive blocks
/// in scratch stay 64-byte aligned.
pub(crate) const BLOCK: usize = 64;
