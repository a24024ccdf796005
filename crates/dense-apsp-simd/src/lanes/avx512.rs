//! 512-bit lane implementations on raw AVX-512 intrinsics.
//!
//! `wide` stops at 256 bits, so these wrap `__m512i` directly. The module is
//! compile-time gated on `avx512f` (the 16-bit lanes additionally on
//! `avx512bw`), so every intrinsic below is statically available; builds
//! without the features fall back to the narrower widths.
//!
//! `chmax_store` here is a genuine conditional store: a `cmpgt` into a mask
//! register followed by a masked store, which beats the load-max-store form
//! because the compare can take its second operand from memory.

use core::arch::x86_64::*;

use super::SimdVec;

/// 32 lanes of `i16` in one AVX-512 register.
#[cfg(target_feature = "avx512bw")]
#[derive(Clone, Copy)]
pub struct I16x32(__m512i);

/// 16 lanes of `i32` in one AVX-512 register.
#[derive(Clone, Copy)]
pub struct I32x16(__m512i);

/// 8 lanes of `i64` in one AVX-512 register.
#[derive(Clone, Copy)]
pub struct I64x8(__m512i);

#[cfg(target_feature = "avx512bw")]
impl SimdVec for I16x32 {
    type Elem = i16;
    const LANES: usize = 32;
    const ISA: &'static str = "w512";

    #[inline(always)]
    unsafe fn load(ptr: *const i16) -> Self {
        // No aligned epi16 load exists; the unaligned form is equivalent on
        // the 64-byte-aligned pointers the solver passes.
        Self(_mm512_loadu_epi16(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i16) {
        _mm512_storeu_epi16(ptr, self.0)
    }

    #[inline(always)]
    fn splat(value: i16) -> Self {
        Self(unsafe { _mm512_set1_epi16(value) })
    }

    #[inline(always)]
    fn vadd(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_add_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vsub(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_sub_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vneg(self) -> Self {
        Self(unsafe { _mm512_sub_epi16(_mm512_setzero_si512(), self.0) })
    }

    #[inline(always)]
    fn vmin(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_min_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vmax(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_max_epi16(self.0, rhs.0) })
    }

    #[inline(always)]
    unsafe fn chmax_store(self, ptr: *mut i16) {
        let mask = _mm512_cmpgt_epi16_mask(self.0, _mm512_loadu_epi16(ptr));
        _mm512_mask_storeu_epi16(ptr, mask, self.0);
    }
}

impl SimdVec for I32x16 {
    type Elem = i32;
    const LANES: usize = 16;
    const ISA: &'static str = "w512";

    #[inline(always)]
    unsafe fn load(ptr: *const i32) -> Self {
        Self(_mm512_load_epi32(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i32) {
        _mm512_store_epi32(ptr, self.0)
    }

    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self(unsafe { _mm512_set1_epi32(value) })
    }

    #[inline(always)]
    fn vadd(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vsub(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_sub_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vneg(self) -> Self {
        Self(unsafe { _mm512_sub_epi32(_mm512_setzero_si512(), self.0) })
    }

    #[inline(always)]
    fn vmin(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_min_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vmax(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_max_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    unsafe fn chmax_store(self, ptr: *mut i32) {
        let mask = _mm512_cmpgt_epi32_mask(self.0, _mm512_load_epi32(ptr));
        _mm512_mask_store_epi32(ptr, mask, self.0);
    }
}

impl SimdVec for I64x8 {
    type Elem = i64;
    const LANES: usize = 8;
    const ISA: &'static str = "w512";

    #[inline(always)]
    unsafe fn load(ptr: *const i64) -> Self {
        Self(_mm512_load_epi64(ptr))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut i64) {
        _mm512_store_epi64(ptr, self.0)
    }

    #[inline(always)]
    fn splat(value: i64) -> Self {
        Self(unsafe { _mm512_set1_epi64(value) })
    }

    #[inline(always)]
    fn vadd(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_add_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vsub(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_sub_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vneg(self) -> Self {
        Self(unsafe { _mm512_sub_epi64(_mm512_setzero_si512(), self.0) })
    }

    #[inline(always)]
    fn vmin(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_min_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    fn vmax(self, rhs: Self) -> Self {
        Self(unsafe { _mm512_max_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    unsafe fn chmax_store(self, ptr: *mut i64) {
        let mask = _mm512_cmpgt_epi64_mask(self.0, _mm512_load_epi64(ptr));
        _mm512_mask_store_epi64(ptr, mask, self.0);
    }
}
