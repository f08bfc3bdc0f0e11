//! Exact minimum-cost bipartite matching on a square, non-negative cost
//! matrix, via Kuhn–Munkres.

use pathfinding::prelude::{Matrix, kuhn_munkres_min};

/// `pathfinding`'s Kuhn–Munkres implementation requires integer weights, so
/// real-valued costs are scaled by this factor before solving. Gating costs
/// up to `cost::BIG` times this factor must stay well inside `i64::MAX`.
const SCALE: f64 = 1_000_000.0;

/// Solves a minimum-cost perfect matching on an `N x N` matrix of
/// non-negative, finite real costs. Returns, for each row index, the column
/// it is assigned to. Ties break by row index, which is the order
/// `kuhn_munkres_min` itself resolves them in.
///
/// # Panics
///
/// Panics if any cost is negative, non-finite, or the matrix is not square —
/// all of which indicate a caller bug rather than recoverable input.
pub fn solve(costs: &[Vec<f64>]) -> Vec<usize> {
    let n = costs.len();
    for row in costs {
        assert_eq!(row.len(), n, "cost matrix must be square");
    }

    if n == 0 {
        return Vec::new();
    }

    let mut matrix = Matrix::new(n, n, 0i64);
    for (i, row) in costs.iter().enumerate() {
        for (j, &cost) in row.iter().enumerate() {
            assert!(
                cost.is_finite() && cost >= 0.0,
                "assignment costs must be finite and non-negative"
            );
            matrix[(i, j)] = (cost * SCALE).round() as i64;
        }
    }

    let (_total_cost, assignment) = kuhn_munkres_min(&matrix);
    assignment
}
