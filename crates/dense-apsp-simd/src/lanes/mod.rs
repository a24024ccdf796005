//! The lane vector trait and its per-width implementations.

use apsp_types::Weight;

mod scalar;
mod wide_lanes;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
mod avx512;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f", target_feature = "avx512bw"))]
pub use avx512::I16x32;
#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub use avx512::{I32x16, I64x8};

/// A fixed-width vector of signed integer lanes.
///
/// This is the abstraction the block kernel is written against; picking an
/// implementing type picks the instruction-set width and element type of the
/// whole solver at monomorphization time. There is no per-lane dispatch at
/// runtime.
///
/// All arithmetic is lanewise and wrapping; comparisons are signed. `load`
/// and `store` use aligned accesses: the solver only ever points them at
/// 64-byte-aligned scratch blocks, at offsets that are multiples of the
/// vector width.
pub trait SimdVec: Copy + 'static {
    /// The lane element type.
    type Elem: Weight;

    /// Number of lanes in the vector.
    const LANES: usize;

    /// Width tag used in strategy descriptions.
    const ISA: &'static str;

    /// Load `LANES` elements from `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for reading `LANES` elements and aligned to the
    /// vector width.
    unsafe fn load(ptr: *const Self::Elem) -> Self;

    /// Store `LANES` elements to `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for writing `LANES` elements and aligned to the
    /// vector width.
    unsafe fn store(self, ptr: *mut Self::Elem);

    /// A vector with every lane equal to `value`.
    fn splat(value: Self::Elem) -> Self;

    /// Lanewise wrapping addition.
    fn vadd(self, rhs: Self) -> Self;

    /// Lanewise wrapping subtraction.
    fn vsub(self, rhs: Self) -> Self;

    /// Lanewise wrapping negation.
    fn vneg(self) -> Self;

    /// Lanewise signed minimum.
    fn vmin(self, rhs: Self) -> Self;

    /// Lanewise signed maximum.
    fn vmax(self, rhs: Self) -> Self;

    /// `mem[i] = max(mem[i], self[i])` for every lane.
    ///
    /// This is the hot primitive of the block kernel. The default
    /// load-max-store form is correct everywhere; implementations override
    /// it where the target has a cheaper compare-against-memory form (the
    /// AVX-512 lanes use a mask-register store).
    ///
    /// # Safety
    /// Same requirements as [`SimdVec::store`].
    #[inline(always)]
    unsafe fn chmax_store(self, ptr: *mut Self::Elem) {
        Self::load(ptr).vmax(self).store(ptr);
    }
}
