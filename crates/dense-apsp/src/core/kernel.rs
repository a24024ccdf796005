//! Register-blocked max-plus multiply kernels over one block triple.
//!
//! Each kernel computes, for a destination block `a` and source blocks
//! `b`, `c` (all `BLOCK x BLOCK`, row-major, 64-byte aligned):
//!
//! ```text
//! a[i][j] = max(a[i][j], max over k of b[i][k] + c[k][j])
//! ```
//!
//! The four variants differ only in register blocking: how many `(i, k)`
//! coefficient broadcasts are held live per pass over a `j` stripe.
//!
//! | unroll | i-tile | k-tile | broadcasts |
//! |--------|--------|--------|------------|
//! | 0      | 2      | 2      | 4          |
//! | 1      | 2      | 4      | 8          |
//! | 2      | 4      | 2      | 8          |
//! | 3      | 4      | 4      | 16         |
//!
//! All produce identical results; which one is fastest depends on the
//! register file of the target. `BLOCK` is divisible by both tile sizes.

use dense_apsp_simd::SimdVec;

use super::BLOCK;

/// Unroll 0: 2x2 coefficient tile.
///
/// # Safety
/// `a`, `b` and `c` must each point to `BLOCK * BLOCK` elements, be 64-byte
/// aligned, and be pairwise disjoint.
pub(crate) unsafe fn max_plus_mul0<V: SimdVec>(
    a: *mut V::Elem,
    b: *const V::Elem,
    c: *const V::Elem,
) {
    let n = BLOCK;
    for k in (0..n).step_by(2) {
        for i in (0..n).step_by(2) {
            let coef00 = V::splat(*b.add(i * n + k));
            let coef01 = V::splat(*b.add(i * n + k + 1));
            let coef10 = V::splat(*b.add((i + 1) * n + k));
            let coef11 = V::splat(*b.add((i + 1) * n + k + 1));

            let aa = a.add(i * n);
            let cc = c.add(k * n);
            for j in (0..n).step_by(V::LANES) {
                let t0 = V::load(cc.add(j));
                let t1 = V::load(cc.add(n + j));
                t0.vadd(coef00).vmax(t1.vadd(coef01)).chmax_store(aa.add(j));
                t0.vadd(coef10).vmax(t1.vadd(coef11)).chmax_store(aa.add(n + j));
            }
        }
    }
}

/// Unroll 1: 2x4 coefficient tile.
///
/// # Safety
/// Same requirements as [`max_plus_mul0`].
pub(crate) unsafe fn max_plus_mul1<V: SimdVec>(
    a: *mut V::Elem,
    b: *const V::Elem,
    c: *const V::Elem,
) {
    let n = BLOCK;
    for k in (0..n).step_by(4) {
        for i in (0..n).step_by(2) {
            let coef00 = V::splat(*b.add(i * n + k));
            let coef01 = V::splat(*b.add(i * n + k + 1));
            let coef02 = V::splat(*b.add(i * n + k + 2));
            let coef03 = V::splat(*b.add(i * n + k + 3));
            let coef10 = V::splat(*b.add((i + 1) * n + k));
            let coef11 = V::splat(*b.add((i + 1) * n + k + 1));
            let coef12 = V::splat(*b.add((i + 1) * n + k + 2));
            let coef13 = V::splat(*b.add((i + 1) * n + k + 3));

            let aa = a.add(i * n);
            let cc = c.add(k * n);
            for j in (0..n).step_by(V::LANES) {
                let t0 = V::load(cc.add(j));
                let t1 = V::load(cc.add(n + j));
                let t2 = V::load(cc.add(2 * n + j));
                let t3 = V::load(cc.add(3 * n + j));
                t0.vadd(coef00)
                    .vmax(t1.vadd(coef01))
                    .vmax(t2.vadd(coef02).vmax(t3.vadd(coef03)))
                    .chmax_store(aa.add(j));
                t0.vadd(coef10)
                    .vmax(t1.vadd(coef11))
                    .vmax(t2.vadd(coef12).vmax(t3.vadd(coef13)))
                    .chmax_store(aa.add(n + j));
            }
        }
    }
}

/// Unroll 2: 4x2 coefficient tile.
///
/// # Safety
/// Same requirements as [`max_plus_mul0`].
pub(crate) unsafe fn max_plus_mul2<V: SimdVec>(
    a: *mut V::Elem,
    b: *const V::Elem,
    c: *const V::Elem,
) {
    let n = BLOCK;
    for k in (0..n).step_by(2) {
        for i in (0..n).step_by(4) {
            let coef00 = V::splat(*b.add(i * n + k));
            let coef01 = V::splat(*b.add(i * n + k + 1));
            let coef10 = V::splat(*b.add((i + 1) * n + k));
            let coef11 = V::splat(*b.add((i + 1) * n + k + 1));
            let coef20 = V::splat(*b.add((i + 2) * n + k));
            let coef21 = V::splat(*b.add((i + 2) * n + k + 1));
            let coef30 = V::splat(*b.add((i + 3) * n + k));
            let coef31 = V::splat(*b.add((i + 3) * n + k + 1));

            let aa = a.add(i * n);
            let cc = c.add(k * n);
            for j in (0..n).step_by(V::LANES) {
                let t0 = V::load(cc.add(j));
                let t1 = V::load(cc.add(n + j));
                t0.vadd(coef00).vmax(t1.vadd(coef01)).chmax_store(aa.add(j));
                t0.vadd(coef10).vmax(t1.vadd(coef11)).chmax_store(aa.add(n + j));
                t0.vadd(coef20).vmax(t1.vadd(coef21)).chmax_store(aa.add(2 * n + j));
                t0.vadd(coef30).vmax(t1.vadd(coef31)).chmax_store(aa.add(3 * n + j));
            }
        }
    }
}

/// Unroll 3: 4x4 coefficient tile.
///
/// # Safety
/// Same requirements as [`max_plus_mul0`].
pub(crate) unsafe fn max_plus_mul3<V: SimdVec>(
    a: *mut V::Elem,
    b: *const V::Elem,
    c: *const V::Elem,
) {
    let n = BLOCK;
    for k in (0..n).step_by(4) {
        for i in (0..n).step_by(4) {
            let coef00 = V::splat(*b.add(i * n + k));
            let coef01 = V::splat(*b.add(i * n + k + 1));
            let coef02 = V::splat(*b.add(i * n + k + 2));
            let coef03 = V::splat(*b.add(i * n + k + 3));
            let coef10 = V::splat(*b.add((i + 1) * n + k));
            let coef11 = V::splat(*b.add((i + 1) * n + k + 1));
            let coef12 = V::splat(*b.add((i + 1) * n + k + 2));
            let coef13 = V::splat(*b.add((i + 1) * n + k + 3));
            let coef20 = V::splat(*b.add((i + 2) * n + k));
            let coef21 = V::splat(*b.add((i + 2) * n + k + 1));
            let coef22 = V::splat(*b.add((i + 2) * n + k + 2));
            let coef23 = V::splat(*b.add((i + 2) * n + k + 3));
            let coef30 = V::splat(*b.add((i + 3) * n + k));
            let coef31 = V::splat(*b.add((i + 3) * n + k + 1));
            let coef32 = V::splat(*b.add((i + 3) * n + k + 2));
            let coef33 = V::splat(*b.add((i + 3) * n + k + 3));

            let aa = a.add(i * n);
            let cc = c.add(k * n);
            for j in (0..n).step_by(V::LANES) {
                let t0 = V::load(cc.add(j));
                let t1 = V::load(cc.add(n + j));
                let t2 = V::load(cc.add(2 * n + j));
                let t3 = V::load(cc.add(3 * n + j));
                t0.vadd(coef00)
                    .vmax(t1.vadd(coef01))
                    .vmax(t2.vadd(coef02).vmax(t3.vadd(coef03)))
                    .chmax_store(aa.add(j));
                t0.vadd(coef10)
                    .vmax(t1.vadd(coef11))
                    .vmax(t2.vadd(coef12).vmax(t3.vadd(coef13)))
                    .chmax_store(aa.add(n + j));
                t0.vadd(coef20)
                    .vmax(t1.vadd(coef21))
                    .vmax(t2.vadd(coef22).vmax(t3.vadd(coef23)))
                    .chmax_store(aa.add(2 * n + j));
                t0.vadd(coef30)
                    .vmax(t1.vadd(coef31))
                    .vmax(t2.vadd(coef32).vmax(t3.vadd(coef33)))
                    .chmax_store(aa.add(3 * n + j));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::BlockGrid;
    use super::*;
    use apsp_types::Weight;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Three disjoint aligned blocks inside one scratch allocation.
    fn block_triple(rng: &mut StdRng) -> (BlockGrid<i32>, Vec<i32>, Vec<i32>, Vec<i32>) {
        let mut grid: BlockGrid<i32> = BlockGrid::new(2);
        let a: Vec<i32> = (0..BLOCK * BLOCK).map(|_| rng.gen_range(-1000..0)).collect();
        let b: Vec<i32> = (0..BLOCK * BLOCK).map(|_| rng.gen_range(-1000..0)).collect();
        let c: Vec<i32> = (0..BLOCK * BLOCK).map(|_| rng.gen_range(-1000..0)).collect();
        grid.set_offset(0, 0, 0);
        grid.set_offset(0, 1, BLOCK * BLOCK);
        grid.set_offset(1, 0, 2 * BLOCK * BLOCK);
        unsafe {
            std::ptr::copy_nonoverlapping(a.as_ptr(), grid.block_ptr(0, 0), BLOCK * BLOCK);
            std::ptr::copy_nonoverlapping(b.as_ptr(), grid.block_ptr(0, 1), BLOCK * BLOCK);
            std::ptr::copy_nonoverlapping(c.as_ptr(), grid.block_ptr(1, 0), BLOCK * BLOCK);
        }
        (grid, a, b, c)
    }

    fn reference(a: &mut [i32], b: &[i32], c: &[i32]) {
        for i in 0..BLOCK {
            for j in 0..BLOCK {
                let mut best = a[i * BLOCK + j];
                for k in 0..BLOCK {
                    best = best.max(b[i * BLOCK + k] + c[k * BLOCK + j]);
                }
                a[i * BLOCK + j] = best;
            }
        }
    }

    fn check_kernel(run: unsafe fn(*mut i32, *const i32, *const i32)) {
        let mut rng = StdRng::seed_from_u64(7);
        let (grid, mut a, b, c) = block_triple(&mut rng);
        reference(&mut a, &b, &c);
        unsafe {
            run(grid.block_ptr(0, 0), grid.block_ptr(0, 1), grid.block_ptr(1, 0));
            let got = std::slice::from_raw_parts(grid.block_ptr(0, 0), BLOCK * BLOCK);
            assert_eq!(got, a.as_slice());
        }
    }

    #[test]
    fn unroll0_matches_reference() {
        check_kernel(max_plus_mul0::<i32>);
        check_kernel(max_plus_mul0::<dense_apsp_simd::i32x4>);
        check_kernel(max_plus_mul0::<dense_apsp_simd::i32x8>);
    }

    #[test]
    fn unroll1_matches_reference() {
        check_kernel(max_plus_mul1::<i32>);
        check_kernel(max_plus_mul1::<dense_apsp_simd::i32x8>);
    }

    #[test]
    fn unroll2_matches_reference() {
        check_kernel(max_plus_mul2::<i32>);
        check_kernel(max_plus_mul2::<dense_apsp_simd::i32x8>);
    }

    #[test]
    fn unroll3_matches_reference() {
        check_kernel(max_plus_mul3::<i32>);
        check_kernel(max_plus_mul3::<dense_apsp_simd::i32x8>);
    }

    #[test]
    fn sentinel_rows_never_win() {
        // A block padded with -INF must not contribute to any maximum.
        let mut grid: BlockGrid<i32> = BlockGrid::new(2);
        grid.set_offset(0, 0, 0);
        grid.set_offset(0, 1, BLOCK * BLOCK);
        grid.set_offset(1, 0, 2 * BLOCK * BLOCK);
        unsafe {
            for idx in 0..BLOCK * BLOCK {
                *grid.block_ptr(0, 0).add(idx) = -5;
                *grid.block_ptr(0, 1).add(idx) = i32::INF.wrapping_neg();
                *grid.block_ptr(1, 0).add(idx) = i32::INF.wrapping_neg();
            }
            max_plus_mul0::<dense_apsp_simd::i32x8>(
                grid.block_ptr(0, 0),
                grid.block_ptr(0, 1),
                grid.block_ptr(1, 0),
            );
            let got = std::slice::from_raw_parts(grid.block_ptr(0, 0), BLOCK * BLOCK);
            assert!(got.iter().all(|&x| x == -5));
        }
    }
}
