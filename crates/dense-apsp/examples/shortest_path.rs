//! All-pairs shortest paths on a small directed road graph.

use dense_apsp::prelude::*;

fn main() {
    let inf = i32::INF;

    // Distance matrix: dist[i][j] = direct edge weight from i to j.
    #[rustfmt::skip]
    let mut dist = vec![
        0,   3,   inf, 7,   inf, // from node 0
        inf, 0,   2,   inf, inf, // from node 1
        inf, inf, 0,   1,   5,   // from node 2
        inf, inf, inf, 0,   2,   // from node 3
        inf, inf, inf, inf, 0,   // from node 4
    ];

    println!("Backend: {}", Backend::description());
    println!("\nDirect edge weights:");
    print_matrix(&dist, 5);

    solve_auto_in_place(5, &mut dist, false);

    println!("\nAll-pairs shortest path weights:");
    print_matrix(&dist, 5);

    println!("\nSpot checks:");
    println!("  0 -> 4: {} (path 0->1->2->3->4 = 3+2+1+2)", dist[4]);
    println!("  0 -> 2: {} (path 0->1->2 = 3+2)", dist[2]);
    println!("  1 -> 4: {} (path 1->2->3->4 = 2+1+2)", dist[5 + 4]);
}

fn print_matrix(data: &[i32], n: usize) {
    print!("     ");
    for j in 0..n {
        print!("{:5} ", j);
    }
    println!();
    println!("   {}", "-".repeat(n * 6 + 1));

    for i in 0..n {
        print!("{:2} | ", i);
        for j in 0..n {
            let val = data[i * n + j];
            if val == i32::INF {
                print!("  inf ");
            } else {
                print!("{:5} ", val);
            }
        }
        println!();
    }
}
