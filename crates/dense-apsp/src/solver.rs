//! Blocked-recursive solver entry points.

use std::marker::PhantomData;

use apsp_types::Weight;
use dense_apsp_simd::SimdVec;

use crate::core::{fw_recurse, reorder, BlockGrid, BLOCK};

/// All-pairs shortest paths over a dense weight matrix, specialized at
/// compile time over a lane vector `V` (instruction-set width and element
/// type) and a register-blocking strategy `UNROLL` in `0..=3`.
///
/// The input is an `n x n` row-major matrix with `0 <= w <= INF` on finite
/// edges and exactly [`Weight::INF`] on non-edges; the output entry `(i, j)`
/// is the weight of the cheapest path from `i` to `j`, or `INF` when `j` is
/// unreachable. The contract on the input range is trusted, not checked.
///
/// ```
/// use dense_apsp::{BlockedApsp, Weight};
/// use dense_apsp::simd::i32x8;
///
/// let inf = i32::INF;
/// let mut m = vec![
///     0, 5, inf,
///     inf, 0, 3,
///     2, inf, 0,
/// ];
/// BlockedApsp::<i32x8, 1>::solve_in_place(3, &mut m, false);
/// assert_eq!(m, vec![0, 5, 8, 5, 0, 3, 2, 7, 0]);
/// ```
pub struct BlockedApsp<V: SimdVec, const UNROLL: usize> {
    _marker: PhantomData<V>,
}

impl<V: SimdVec, const UNROLL: usize> BlockedApsp<V, UNROLL> {
    // Checked once per instantiation; a bad (V, UNROLL) pairing fails the
    // build of whoever names it.
    const CONFIG_OK: () = {
        assert!(UNROLL <= 3, "unroll strategy must be in 0..=3");
        assert!(
            BLOCK % V::LANES == 0,
            "block side must be a multiple of the vector lane count"
        );
    };

    /// Strategy tag for logs, e.g. `opt<w256, int32_t, 1>`.
    pub fn description() -> String {
        format!(
            "opt<{}, int{}_t, {}>",
            V::ISA,
            <V::Elem as Weight>::BITS,
            UNROLL
        )
    }

    /// Solve into a separate output buffer.
    ///
    /// Both slices must hold `n * n` elements, `n < 65536`. `n == 0`
    /// returns without touching `output`. Pass `symmetric = true` only if
    /// the input matrix is symmetric; the solver may then exploit it.
    pub fn solve(n: usize, input: &[V::Elem], output: &mut [V::Elem], symmetric: bool) {
        let () = Self::CONFIG_OK;
        assert!(n < 65536, "vertex count {} out of range", n);
        assert_eq!(input.len(), n * n, "input dimensions mismatch");
        assert_eq!(output.len(), n * n, "output dimensions mismatch");
        if n == 0 {
            return;
        }
        unsafe { Self::run(n, input.as_ptr(), output.as_mut_ptr(), symmetric) }
    }

    /// Solve a matrix in place.
    pub fn solve_in_place(n: usize, matrix: &mut [V::Elem], symmetric: bool) {
        let () = Self::CONFIG_OK;
        assert!(n < 65536, "vertex count {} out of range", n);
        assert_eq!(matrix.len(), n * n, "matrix dimensions mismatch");
        if n == 0 {
            return;
        }
        unsafe { Self::run(n, matrix.as_ptr(), matrix.as_mut_ptr(), symmetric) }
    }

    /// # Safety
    /// `input` and `output` must each be valid for `n * n` elements; they
    /// are either disjoint or identical. `input` is only read (before any
    /// write to `output`), `output` only written.
    unsafe fn run(n: usize, input: *const V::Elem, output: *mut V::Elem, symmetric: bool) {
        let g = n.div_ceil(BLOCK);
        let mut scale = 1;
        while scale * BLOCK < n {
            scale *= 2;
        }
        log::debug!(
            "{}: n={} grid={} scale={} symmetric={}",
            Self::description(),
            n,
            g,
            scale,
            symmetric
        );

        let mut grid: BlockGrid<V::Elem> = BlockGrid::new(g);
        reorder(n, scale, input.cast_mut(), &mut grid, 0, 0, 0, false);
        fw_recurse::<V, UNROLL>(scale, &grid, 0, 0, 0, symmetric);
        reorder(n, scale, output, &mut grid, 0, 0, 0, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dense_apsp_simd::{i16x16, i32x8, i64x4};

    #[test]
    fn description_strings() {
        assert_eq!(BlockedApsp::<i32, 0>::description(), "opt<scalar, int32_t, 0>");
        assert_eq!(BlockedApsp::<i32x8, 1>::description(), "opt<w256, int32_t, 1>");
        assert_eq!(BlockedApsp::<i16x16, 3>::description(), "opt<w256, int16_t, 3>");
        assert_eq!(BlockedApsp::<i64x4, 2>::description(), "opt<w256, int64_t, 2>");
    }

    #[test]
    fn empty_matrix_is_a_no_op() {
        let input: Vec<i32> = vec![];
        let mut output: Vec<i32> = vec![];
        BlockedApsp::<i32x8, 3>::solve(0, &input, &mut output, false);
    }

    #[test]
    fn single_vertex_is_unchanged() {
        let mut m = vec![0i64];
        BlockedApsp::<i64x4, 0>::solve_in_place(1, &mut m, false);
        assert_eq!(m, vec![0]);
    }

    #[test]
    #[should_panic(expected = "dimensions mismatch")]
    fn wrong_length_panics() {
        let input = vec![0i32; 8];
        let mut output = vec![0i32; 9];
        BlockedApsp::<i32, 0>::solve(3, &input, &mut output, false);
    }
}
