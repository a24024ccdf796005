//! Minimal usage: one solve, plus the strategy the dispatcher picked.

use dense_apsp::prelude::*;

fn main() {
    println!("{}", dense_apsp::version_info());
    println!("auto strategy for i32: {}", <i32 as SolverDispatch>::strategy());
    println!("reference: {}", NaiveApsp::<i32>::description());

    let inf = i32::INF;
    let mut dist = vec![
        0, 5, inf, //
        inf, 0, 3, //
        2, inf, 0,
    ];
    solve_auto_in_place(3, &mut dist, false);
    println!("solved: {:?}", dist);
    assert_eq!(dist, vec![0, 5, 8, 5, 0, 3, 2, 7, 0]);
}
