//! 128- and 256-bit lane implementations on `wide`'s integer vectors.
//!
//! `wide` compiles these to SSE/AVX2/NEON when the build enables the
//! features, and to an equivalent portable form otherwise, so both widths
//! are safe to select on any CPU.

use super::SimdVec;
use wide::{i16x16, i16x8, i32x4, i32x8, i64x2, i64x4, CmpGt};

macro_rules! impl_wide_lane_common {
    ($vec:ty, $elem:ty, $lanes:expr, $isa:expr) => {
        type Elem = $elem;
        const LANES: usize = $lanes;
        const ISA: &'static str = $isa;

        #[inline(always)]
        unsafe fn load(ptr: *const $elem) -> Self {
            ptr.cast::<$vec>().read()
        }

        #[inline(always)]
        unsafe fn store(self, ptr: *mut $elem) {
            ptr.cast::<$vec>().write(self)
        }

        #[inline(always)]
        fn splat(value: $elem) -> Self {
            <$vec>::splat(value)
        }

        #[inline(always)]
        fn vadd(self, rhs: Self) -> Self {
            self + rhs
        }

        #[inline(always)]
        fn vsub(self, rhs: Self) -> Self {
            self - rhs
        }

        #[inline(always)]
        fn vneg(self) -> Self {
            <$vec>::splat(0) - self
        }
    };
}

macro_rules! impl_wide_lane {
    ($vec:ty, $elem:ty, $lanes:expr, $isa:expr) => {
        impl SimdVec for $vec {
            impl_wide_lane_common!($vec, $elem, $lanes, $isa);

            #[inline(always)]
            fn vmin(self, rhs: Self) -> Self {
                <$vec>::min(self, rhs)
            }

            #[inline(always)]
            fn vmax(self, rhs: Self) -> Self {
                <$vec>::max(self, rhs)
            }
        }
    };
}

// SSE/AVX2 have no packed 64-bit signed min/max; compare-and-blend is the
// standard substitute.
macro_rules! impl_wide_lane_i64 {
    ($vec:ty, $lanes:expr, $isa:expr) => {
        impl SimdVec for $vec {
            impl_wide_lane_common!($vec, i64, $lanes, $isa);

            #[inline(always)]
            fn vmin(self, rhs: Self) -> Self {
                self.cmp_gt(rhs).blend(rhs, self)
            }

            #[inline(always)]
            fn vmax(self, rhs: Self) -> Self {
                self.cmp_gt(rhs).blend(self, rhs)
            }
        }
    };
}

impl_wide_lane!(i16x8, i16, 8, "w128");
impl_wide_lane!(i32x4, i32, 4, "w128");
impl_wide_lane_i64!(i64x2, 2, "w128");

impl_wide_lane!(i16x16, i16, 16, "w256");
impl_wide_lane!(i32x8, i32, 8, "w256");
impl_wide_lane_i64!(i64x4, 4, "w256");
