//! SIMD lane abstraction for the dense-apsp solver.
//!
//! The solver's hot loop is a tropical (max-plus) multiply-accumulate over
//! 64x64 blocks. This crate provides the [`SimdVec`] trait it is written
//! against, with implementations at four widths:
//!
//! | ISA tag  | Vector types | Backing |
//! |----------|--------------|---------|
//! | `scalar` | `i16`, `i32`, `i64` | plain integers (reference semantics) |
//! | `w128`   | `i16x8`, `i32x4`, `i64x2` | [`wide`] |
//! | `w256`   | `i16x16`, `i32x8`, `i64x4` | [`wide`] |
//! | `w512`   | `I16x32`, `I32x16`, `I64x8` | `core::arch` AVX-512, compile-time gated |
//!
//! The scalar implementations are the authoritative reference: every other
//! implementation must produce lane-for-lane identical results, and the unit
//! tests compare them op by op.
//!
//! The w512 variants exist only when the build enables the corresponding
//! target features (`avx512f`, plus `avx512bw` for the 16-bit lanes), e.g.
//! via `-C target-cpu=native`. A build without them simply offers the
//! narrower widths.

mod detect;
mod lanes;

pub use detect::{simd_level, SimdLevel};
pub use lanes::SimdVec;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f", target_feature = "avx512bw"))]
pub use lanes::I16x32;
#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub use lanes::{I32x16, I64x8};

// Re-export the wide vector types so downstream crates can name static
// solver configurations without depending on `wide` directly.
pub use wide::{i16x16, i16x8, i32x4, i32x8, i64x2, i64x4};
