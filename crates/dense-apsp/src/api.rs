//! Runtime-dispatched entry points.
//!
//! [`solve_auto`] picks the widest lane implementation the running CPU
//! supports and forwards to the matching monomorphized
//! [`BlockedApsp`](crate::BlockedApsp). The choice happens once per call,
//! outside every loop; all hot code is statically specialized.

use apsp_types::Weight;
use dense_apsp_simd::{simd_level, SimdLevel};

use crate::solver::BlockedApsp;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f", target_feature = "avx512bw"))]
use dense_apsp_simd::I16x32;
#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
use dense_apsp_simd::{I32x16, I64x8};
use dense_apsp_simd::{i16x16, i16x8, i32x4, i32x8, i64x2, i64x4};

/// Register-blocking strategy used by the auto-dispatched entry points.
pub const DEFAULT_UNROLL: usize = 3;

/// Weight types with a runtime-dispatched solver.
///
/// One impl per element type, each matching the detected
/// [`SimdLevel`](dense_apsp_simd::SimdLevel) to a lane vector, the same
/// shape as a BLAS kernel dispatch table. The w512 arm exists only in
/// builds compiled with the AVX-512 target features; everywhere else an
/// AVX-512 CPU simply gets the 256-bit variant.
pub trait SolverDispatch: Weight {
    /// Solve into a separate output buffer with the best available variant.
    fn dispatch(n: usize, input: &[Self], output: &mut [Self], symmetric: bool);

    /// Solve a matrix in place with the best available variant.
    fn dispatch_in_place(n: usize, matrix: &mut [Self], symmetric: bool);

    /// Description of the variant dispatch would select, e.g.
    /// `opt<w256, int32_t, 3>`.
    fn strategy() -> String;
}

/// All-pairs shortest paths with runtime strategy selection.
///
/// ```
/// use dense_apsp::{solve_auto, Weight};
///
/// let inf = i32::INF;
/// let input = vec![
///     0, 5, inf,
///     inf, 0, 3,
///     2, inf, 0,
/// ];
/// let mut output = vec![0; 9];
/// solve_auto(3, &input, &mut output, false);
/// assert_eq!(output, vec![0, 5, 8, 5, 0, 3, 2, 7, 0]);
/// ```
pub fn solve_auto<E: SolverDispatch>(n: usize, input: &[E], output: &mut [E], symmetric: bool) {
    log::debug!("solve_auto: {}", E::strategy());
    E::dispatch(n, input, output, symmetric)
}

/// In-place counterpart of [`solve_auto`].
pub fn solve_auto_in_place<E: SolverDispatch>(n: usize, matrix: &mut [E], symmetric: bool) {
    log::debug!("solve_auto_in_place: {}", E::strategy());
    E::dispatch_in_place(n, matrix, symmetric)
}

impl SolverDispatch for i16 {
    fn dispatch(n: usize, input: &[Self], output: &mut [Self], symmetric: bool) {
        #[cfg(all(
            target_arch = "x86_64",
            target_feature = "avx512f",
            target_feature = "avx512bw"
        ))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I16x32, DEFAULT_UNROLL>::solve(n, input, output, symmetric);
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i16x16, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i16x8, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
            SimdLevel::Scalar => {
                BlockedApsp::<i16, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
        }
    }

    fn dispatch_in_place(n: usize, matrix: &mut [Self], symmetric: bool) {
        #[cfg(all(
            target_arch = "x86_64",
            target_feature = "avx512f",
            target_feature = "avx512bw"
        ))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I16x32, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric);
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i16x16, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i16x8, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
            SimdLevel::Scalar => {
                BlockedApsp::<i16, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
        }
    }

    fn strategy() -> String {
        #[cfg(all(
            target_arch = "x86_64",
            target_feature = "avx512f",
            target_feature = "avx512bw"
        ))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I16x32, DEFAULT_UNROLL>::description();
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i16x16, DEFAULT_UNROLL>::description()
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i16x8, DEFAULT_UNROLL>::description()
            }
            SimdLevel::Scalar => BlockedApsp::<i16, DEFAULT_UNROLL>::description(),
        }
    }
}

impl SolverDispatch for i32 {
    fn dispatch(n: usize, input: &[Self], output: &mut [Self], symmetric: bool) {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I32x16, DEFAULT_UNROLL>::solve(n, input, output, symmetric);
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i32x8, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i32x4, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
            SimdLevel::Scalar => {
                BlockedApsp::<i32, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
        }
    }

    fn dispatch_in_place(n: usize, matrix: &mut [Self], symmetric: bool) {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I32x16, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric);
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i32x8, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i32x4, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
            SimdLevel::Scalar => {
                BlockedApsp::<i32, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
        }
    }

    fn strategy() -> String {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I32x16, DEFAULT_UNROLL>::description();
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i32x8, DEFAULT_UNROLL>::description()
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i32x4, DEFAULT_UNROLL>::description()
            }
            SimdLevel::Scalar => BlockedApsp::<i32, DEFAULT_UNROLL>::description(),
        }
    }
}

impl SolverDispatch for i64 {
    fn dispatch(n: usize, input: &[Self], output: &mut [Self], symmetric: bool) {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I64x8, DEFAULT_UNROLL>::solve(n, input, output, symmetric);
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i64x4, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i64x2, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
            SimdLevel::Scalar => {
                BlockedApsp::<i64, DEFAULT_UNROLL>::solve(n, input, output, symmetric)
            }
        }
    }

    fn dispatch_in_place(n: usize, matrix: &mut [Self], symmetric: bool) {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I64x8, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric);
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i64x4, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i64x2, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
            SimdLevel::Scalar => {
                BlockedApsp::<i64, DEFAULT_UNROLL>::solve_in_place(n, matrix, symmetric)
            }
        }
    }

    fn strategy() -> String {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
        if simd_level() == SimdLevel::Avx512 {
            return BlockedApsp::<I64x8, DEFAULT_UNROLL>::description();
        }
        match simd_level() {
            SimdLevel::Avx | SimdLevel::Avx2 | SimdLevel::Avx512 => {
                BlockedApsp::<i64x4, DEFAULT_UNROLL>::description()
            }
            SimdLevel::Sse2 | SimdLevel::Neon => {
                BlockedApsp::<i64x2, DEFAULT_UNROLL>::description()
            }
            SimdLevel::Scalar => BlockedApsp::<i64, DEFAULT_UNROLL>::description(),
        }
    }
}
