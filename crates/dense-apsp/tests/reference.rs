//! Bit-for-bit equivalence of every (width, element, unroll) strategy
//! against the naive reference, over the three random graph families.

use dense_apsp::prelude::*;
use dense_apsp::simd::{i16x16, i16x8, i32x4, i32x8, i64x2, i64x4};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Sizes straddling the block size (64) and the power-of-two grid scales.
const SIZES: &[usize] = &[1, 2, 3, 7, 13, 31, 32, 33, 63, 64, 65, 96, 127, 128, 129];

macro_rules! apsp_suite {
    ($mod:ident, $t:ty, $w128:ty, $w256:ty) => {
        mod $mod {
            use super::*;

            type E = $t;

            const INF: E = <E as Weight>::INF;

            // Largest weight that keeps every path sum strictly below INF.
            fn max_uniform(n: usize) -> E {
                let divisor = (n as i64 - 1).max(1);
                ((INF as i64 - 1) / divisor) as E
            }

            fn gen_dense(rng: &mut StdRng, n: usize, symmetric: bool) -> Vec<E> {
                let hi = max_uniform(n);
                let mut m = vec![<E as Weight>::ZERO; n * n];
                if symmetric {
                    for i in 0..n {
                        for j in 0..i {
                            let w = rng.gen_range(1..=hi);
                            m[i * n + j] = w;
                            m[j * n + i] = w;
                        }
                    }
                } else {
                    for i in 0..n {
                        for j in 0..n {
                            m[i * n + j] = rng.gen_range(1..=hi);
                        }
                    }
                }
                m
            }

            fn gen_path(rng: &mut StdRng, n: usize, symmetric: bool, max_weight: bool) -> Vec<E> {
                let hi = max_uniform(n);
                let mut m = vec![INF; n * n];
                let mut perm: Vec<usize> = (0..n).collect();
                perm.shuffle(rng);
                for i in 0..n.saturating_sub(1) {
                    let w = if max_weight { hi } else { rng.gen_range(1..=hi) };
                    m[perm[i] * n + perm[i + 1]] = w;
                    if symmetric {
                        m[perm[i + 1] * n + perm[i]] = w;
                    }
                }
                m
            }

            fn run_strategy<V: SimdVec<Elem = E>, const U: usize>(
                n: usize,
                matrix: &[E],
                symmetric: bool,
                correct: &[E],
            ) {
                let mut out = matrix.to_vec();
                BlockedApsp::<V, U>::solve_in_place(n, &mut out, symmetric);
                assert_eq!(
                    out.as_slice(),
                    correct,
                    "{} disagrees with {} (n = {}, symmetric = {})",
                    BlockedApsp::<V, U>::description(),
                    NaiveApsp::<E>::description(),
                    n,
                    symmetric
                );
            }

            // Every width and unroll strategy against the naive reference,
            // run in place like the reference harness does.
            fn check(n: usize, matrix: &[E], symmetric: bool) {
                let mut correct = matrix.to_vec();
                NaiveApsp::<E>::solve_in_place(n, &mut correct, symmetric);

                run_strategy::<E, 0>(n, matrix, symmetric, &correct);
                run_strategy::<E, 1>(n, matrix, symmetric, &correct);
                run_strategy::<E, 2>(n, matrix, symmetric, &correct);
                run_strategy::<E, 3>(n, matrix, symmetric, &correct);
                run_strategy::<$w128, 0>(n, matrix, symmetric, &correct);
                run_strategy::<$w128, 1>(n, matrix, symmetric, &correct);
                run_strategy::<$w128, 2>(n, matrix, symmetric, &correct);
                run_strategy::<$w128, 3>(n, matrix, symmetric, &correct);
                run_strategy::<$w256, 0>(n, matrix, symmetric, &correct);
                run_strategy::<$w256, 1>(n, matrix, symmetric, &correct);
                run_strategy::<$w256, 2>(n, matrix, symmetric, &correct);
                run_strategy::<$w256, 3>(n, matrix, symmetric, &correct);

                let mut auto_out = matrix.to_vec();
                solve_auto_in_place(n, &mut auto_out, symmetric);
                assert_eq!(auto_out, correct, "solve_auto (n = {})", n);
            }

            #[test]
            fn random_dense_directed() {
                let mut rng = StdRng::seed_from_u64(101);
                for &n in SIZES {
                    let m = gen_dense(&mut rng, n, false);
                    check(n, &m, false);
                }
            }

            #[test]
            fn random_dense_symmetric() {
                let mut rng = StdRng::seed_from_u64(102);
                for &n in SIZES {
                    let m = gen_dense(&mut rng, n, true);
                    check(n, &m, true);
                }
            }

            #[test]
            fn random_path_directed() {
                let mut rng = StdRng::seed_from_u64(103);
                for &n in SIZES {
                    let m = gen_path(&mut rng, n, false, false);
                    check(n, &m, false);
                }
            }

            #[test]
            fn random_path_symmetric() {
                let mut rng = StdRng::seed_from_u64(104);
                for &n in SIZES {
                    let m = gen_path(&mut rng, n, true, false);
                    check(n, &m, true);
                }
            }

            #[test]
            fn max_weight_path_directed() {
                let mut rng = StdRng::seed_from_u64(105);
                for &n in SIZES {
                    let m = gen_path(&mut rng, n, false, true);
                    check(n, &m, false);
                }
            }

            #[test]
            fn max_weight_path_symmetric() {
                let mut rng = StdRng::seed_from_u64(106);
                for &n in SIZES {
                    let m = gen_path(&mut rng, n, true, true);
                    check(n, &m, true);
                }
            }

            #[test]
            fn symmetric_flag_is_advisory() {
                let mut rng = StdRng::seed_from_u64(107);
                for &n in &[33usize, 65, 129] {
                    let m = gen_dense(&mut rng, n, true);

                    let mut with_flag = m.clone();
                    BlockedApsp::<$w256, 1>::solve_in_place(n, &mut with_flag, true);
                    let mut without_flag = m.clone();
                    BlockedApsp::<$w256, 1>::solve_in_place(n, &mut without_flag, false);
                    assert_eq!(with_flag, without_flag, "n = {}", n);

                    // Symmetric input, symmetric output.
                    for i in 0..n {
                        for j in 0..i {
                            assert_eq!(with_flag[i * n + j], with_flag[j * n + i]);
                        }
                    }
                }
            }

            #[test]
            fn aliasing_matches_disjoint_buffers() {
                let mut rng = StdRng::seed_from_u64(108);
                for &n in &[13usize, 64, 129] {
                    let m = gen_dense(&mut rng, n, false);
                    let mut disjoint = vec![<E as Weight>::ZERO; n * n];
                    BlockedApsp::<$w256, 3>::solve(n, &m, &mut disjoint, false);
                    let mut aliased = m.clone();
                    BlockedApsp::<$w256, 3>::solve_in_place(n, &mut aliased, false);
                    assert_eq!(aliased, disjoint, "n = {}", n);
                }
            }

            #[test]
            fn solved_matrices_are_fixpoints() {
                let mut rng = StdRng::seed_from_u64(109);
                for &n in &[31usize, 65] {
                    let mut m = gen_dense(&mut rng, n, false);
                    solve_auto_in_place(n, &mut m, false);
                    let once = m.clone();
                    solve_auto_in_place(n, &mut m, false);
                    assert_eq!(m, once, "n = {}", n);
                }
            }

            #[test]
            #[ignore = "full-size sweep, run with --ignored"]
            fn random_dense_directed_large() {
                let mut rng = StdRng::seed_from_u64(110);
                for &n in &[300usize, 600] {
                    let m = gen_dense(&mut rng, n, false);
                    let mut correct = m.clone();
                    NaiveApsp::<E>::solve_in_place(n, &mut correct, false);
                    run_strategy::<$w256, 3>(n, &m, false, &correct);
                    run_strategy::<E, 0>(n, &m, false, &correct);
                }
            }
        }
    };
}

apsp_suite!(int16, i16, i16x8, i16x16);
apsp_suite!(int32, i32, i32x4, i32x8);
apsp_suite!(int64, i64, i64x2, i64x4);
