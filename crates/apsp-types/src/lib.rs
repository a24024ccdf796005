//! Scalar weight model for dense all-pairs shortest path solvers.
//!
//! Edge weights are signed integers (`i16`, `i32` or `i64`) with a dedicated
//! unreachability sentinel [`Weight::INF`]` = MAX / 2`. The halved sentinel
//! guarantees that the sum of any two in-range weights stays representable,
//! so path relaxation never overflows:
//!
//! ```
//! use apsp_types::Weight;
//!
//! assert_eq!(i32::INF, i32::MAX / 2);
//! assert!(i32::INF.wrapping_add(i32::INF) < i32::MAX);
//! ```
//!
//! Valid finite weights satisfy `0 <= w <= INF`; non-edges carry exactly
//! `INF`. The engine trusts this contract and does not validate it.

mod weight;

pub use weight::Weight;
