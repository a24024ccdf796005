//! Cache-blocked, SIMD-accelerated all-pairs shortest paths.
//!
//! This library computes APSP on dense, directed, non-negatively weighted
//! graphs of up to 65535 vertices, using a recursive blocked Floyd–Warshall
//! whose inner step is a tropical (min-plus) matrix multiply over 64x64
//! tiles.
//!
//! # Weight model
//!
//! Weights are signed integers (`i16`, `i32` or `i64`). Unreachability is
//! the sentinel [`Weight::INF`]` = MAX / 2`; finite edges must satisfy
//! `0 <= w <= INF`, so no path sum can overflow. The output entry `(i, j)`
//! is the cheapest path weight from `i` to `j`, or `INF` when there is no
//! path; it is never anything between `INF` and `MAX`.
//!
//! # Quick start
//!
//! ```
//! use dense_apsp::{solve_auto_in_place, Weight};
//!
//! let inf = i32::INF;
//! let mut dist = vec![
//!     0, 5, inf,
//!     inf, 0, 3,
//!     2, inf, 0,
//! ];
//! solve_auto_in_place(3, &mut dist, false);
//! assert_eq!(dist, vec![0, 5, 8, 5, 0, 3, 2, 7, 0]);
//! ```
//!
//! [`solve_auto`] and [`solve_auto_in_place`] pick the widest SIMD variant
//! the running CPU supports. For benchmarking or reproducibility you can
//! pin a strategy statically instead:
//!
//! ```
//! use dense_apsp::BlockedApsp;
//! use dense_apsp::simd::i32x8;
//!
//! // 256-bit lanes, register-blocking strategy 1.
//! type Solver = BlockedApsp<i32x8, 1>;
//!
//! let mut dist = vec![0i32];
//! Solver::solve_in_place(1, &mut dist, false);
//! assert_eq!(Solver::description(), "opt<w256, int32_t, 1>");
//! ```
//!
//! The scalar-lane variant (`BlockedApsp<i32, U>` etc.) is always available
//! and is the bitwise reference for every vectorized one, as is the
//! unblocked [`NaiveApsp`].
//!
//! # Symmetric graphs
//!
//! If the input matrix is symmetric (an undirected graph), passing
//! `symmetric = true` lets the recursion replace two of its eight octant
//! passes with block transposes. The flag is advisory: outputs are
//! identical either way, it is purely a speedup.
//!
//! # How it works
//!
//! The matrix is permuted into 64x64 blocks stored in the Z-order the
//! 2x2x2 recursion visits, so each recursion subtree works on contiguous
//! memory. Weights are negated on entry and the engine maximizes, which
//! turns the hot update into a single `chmax_store` vector primitive; the
//! de-permutation negates back on exit.

mod core;

mod api;
mod backend;
mod naive;
mod solver;

pub use api::{solve_auto, solve_auto_in_place, SolverDispatch, DEFAULT_UNROLL};
pub use backend::{version_info, Backend};
pub use naive::NaiveApsp;
pub use solver::BlockedApsp;

// Re-export the building blocks so downstream code can name static solver
// configurations without extra dependencies.
pub use apsp_types::Weight;
pub use dense_apsp_simd as simd;
pub use dense_apsp_simd::{simd_level, SimdLevel, SimdVec};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        solve_auto, solve_auto_in_place, Backend, BlockedApsp, NaiveApsp, SimdVec,
        SolverDispatch, Weight,
    };
}
