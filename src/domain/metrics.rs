//! Metrics computed over an orbit graph

use std::collections::HashSet;

use super::body::Body;
use super::graph::{GraphError, OrbitGraph};

/// Sums direct and indirect orbits over every body in the graph.
///
/// Equivalent to the sum of all body depths, with the root at depth 0.
pub fn total_orbits(graph: &OrbitGraph) -> Result<usize, GraphError> {
    graph.bodies().map(|body| graph.depth(body)).sum()
}

/// Finds the nearest ancestor shared by `from` and `to`
pub fn common_ancestor(graph: &OrbitGraph, from: &Body, to: &Body) -> Result<Body, GraphError> {
    let chain_from = graph.chain(from, None)?;
    let chain_to = graph.chain(to, None)?;
    let reachable: HashSet<&Body> = chain_to.iter().collect();

    // Chains run nearest first, so the first shared body is the lowest one
    chain_from
        .into_iter()
        .find(|body| reachable.contains(body))
        .ok_or_else(|| GraphError::NoCommonAncestor(from.clone(), to.clone()))
}

/// Counts the orbital transfers needed to move from the body `from` orbits
/// to the body `to` orbits.
pub fn transfer_hops(graph: &OrbitGraph, from: &Body, to: &Body) -> Result<usize, GraphError> {
    let common = common_ancestor(graph, from, to)?;

    let dist_from = graph.chain(from, Some(&common))?.len();
    let dist_to = graph.chain(to, Some(&common))?.len();

    Ok((dist_from - 1) + (dist_to - 1))
}
