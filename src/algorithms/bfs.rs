//! Breadth-first search by frontier expansion.
//!
//! A consumer of the core primitives: the traversal is expressed entirely
//! through `matrix_vector_multiply`, a visited-vector mask and the
//! element-wise vector add, with no access to container internals.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::mask::VectorMask;
use crate::matrix::{Matrix, MatrixBase, NumericOps, Vector};
use crate::operators::{element_wise_vector_add_assign, matrix_vector_multiply};
use crate::sparse::SparseVector;

/// Frontier-expansion search over the adjacency matrix `graph`, where
/// `graph[r][c]` non-default encodes the edge `r -> c`.
///
/// Each step multiplies the adjacency matrix by the current frontier,
/// masked by the visited set, so the next frontier holds exactly the
/// unvisited nodes with an edge into the current one. The search stops when
/// `stop` approves a frontier, the frontier empties, or `ctx` cancels; the
/// frontier that triggered the stop is returned with each reached node
/// marked with one.
pub fn search<T, A, F>(
    ctx: &Context,
    graph: &A,
    source: usize,
    stop: F,
) -> Result<SparseVector<T>>
where
    T: NumericOps,
    A: Matrix<T> + ?Sized,
    F: Fn(&SparseVector<T>) -> bool,
{
    let n = graph.rows();
    if graph.columns() != n {
        return Err(Error::DimensionMismatch {
            expected: (n, n),
            found: (graph.rows(), graph.columns()),
        });
    }
    Error::check_index(source, n)?;

    let mut frontier = SparseVector::new(n);
    frontier.set_vec(source, T::one())?;
    let mut visited = frontier.clone();

    for depth in 1..n {
        if ctx.is_cancelled() {
            log::debug!("search cancelled at depth {depth}");
            break;
        }

        let mut next = SparseVector::new(n);
        {
            let mask = VectorMask::new(&visited);
            matrix_vector_multiply(ctx, graph, &frontier, Some(&mask), &mut next)?;
        }
        // Multiple paths into a node yield counts; flatten to markers.
        next.map_inplace(&mut |_, _, _| T::one());

        element_wise_vector_add_assign(ctx, &mut visited, &next, None)?;
        frontier = next;

        if frontier.values() == 0 || stop(&frontier) {
            break;
        }
    }
    Ok(frontier)
}
