//! Floyd–Warshall step over a single block triple.

use dense_apsp_simd::SimdVec;

use super::kernel::{max_plus_mul0, max_plus_mul1, max_plus_mul2, max_plus_mul3};
use super::BLOCK;

/// Relax block `a` through pivot row block `b` and pivot column block `c`.
///
/// When the three blocks are distinct this is exactly the register-blocked
/// kernel selected by `UNROLL`. When any of them alias (the pivot block
/// updating itself, or an edge block sharing a row or column with the
/// pivot), the relaxation must observe its own partial results, so it runs
/// a form serialized on `k`: every `k` iteration finishes before the next
/// reads `a`.
///
/// # Safety
/// `a`, `b` and `c` must each point to `BLOCK * BLOCK` elements, 64-byte
/// aligned; each pair is either identical or disjoint.
pub(crate) unsafe fn fw_update<V: SimdVec, const UNROLL: usize>(
    a: *mut V::Elem,
    b: *const V::Elem,
    c: *const V::Elem,
) {
    let n = BLOCK;
    if !std::ptr::eq(a.cast_const(), b) && !std::ptr::eq(a.cast_const(), c) && !std::ptr::eq(b, c)
    {
        // Resolved at monomorphization; there is no branch at runtime.
        match UNROLL {
            0 => max_plus_mul0::<V>(a, b, c),
            1 => max_plus_mul1::<V>(a, b, c),
            2 => max_plus_mul2::<V>(a, b, c),
            _ => max_plus_mul3::<V>(a, b, c),
        }
        return;
    }

    for k in 0..n {
        for i in 0..n {
            let coef = V::splat(*b.add(i * n + k));

            let aa = a.add(i * n);
            let cc = c.add(k * n);
            for j in (0..n).step_by(V::LANES) {
                V::load(cc.add(j)).vadd(coef).chmax_store(aa.add(j));
            }
        }
    }
}
