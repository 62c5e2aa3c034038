//! Orbit graph
//!
//! Indexes relations as a tree of bodies rooted at a single center.
//! Uses petgraph for storage; edges point from center to satellite.
//!
//! Every body has at most one direct parent. A map that names the same
//! satellite twice is rejected rather than resolved by insertion order.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use std::iter::successors;
use thiserror::Error;

use super::body::{Body, Relation};

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Body {body} orbits both {first} and {second}")]
    DuplicateParent { body: Body, first: Body, second: Body },

    #[error("Orbit cycle detected while walking ancestors of {0}")]
    CycleDetected(Body),

    #[error("No common ancestor between {0} and {1}")]
    NoCommonAncestor(Body, Body),

    #[error("Body not found: {0}")]
    BodyNotFound(Body),
}

/// A read-only index over a set of orbit relations
#[derive(Debug, Default)]
pub struct OrbitGraph {
    /// The underlying directed graph (center -> satellite)
    graph: DiGraph<Body, ()>,

    /// Map from body to node index
    node_map: HashMap<Body, NodeIndex>,
}

impl OrbitGraph {
    /// Builds a graph from relations, failing if a body has two parents
    pub fn from_relations<'a>(
        relations: impl IntoIterator<Item = &'a Relation>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::default();

        for relation in relations {
            let center = graph.add_body(&relation.center);
            let satellite = graph.add_body(&relation.satellite);

            if let Some(existing) = graph.parent_index(satellite) {
                return Err(GraphError::DuplicateParent {
                    body: relation.satellite.clone(),
                    first: graph.graph[existing].clone(),
                    second: relation.center.clone(),
                });
            }

            graph.graph.add_edge(center, satellite, ());
        }

        Ok(graph)
    }

    fn add_body(&mut self, body: &Body) -> NodeIndex {
        if let Some(idx) = self.node_map.get(body) {
            return *idx;
        }

        let idx = self.graph.add_node(body.clone());
        self.node_map.insert(body.clone(), idx);
        idx
    }

    fn index_of(&self, body: &Body) -> Result<NodeIndex, GraphError> {
        self.node_map
            .get(body)
            .copied()
            .ok_or_else(|| GraphError::BodyNotFound(body.clone()))
    }

    fn parent_index(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
    }

    /// Walks parent links upward from `body`, nearest first
    fn ancestors(&self, body: &Body) -> Result<impl Iterator<Item = NodeIndex> + '_, GraphError> {
        let start = self.index_of(body)?;
        Ok(successors(self.parent_index(start), move |&idx| {
            self.parent_index(idx)
        }))
    }

    /// Returns the body that `body` directly orbits, if any
    pub fn parent_of(&self, body: &Body) -> Option<&Body> {
        let idx = *self.node_map.get(body)?;
        self.parent_index(idx).map(|parent| &self.graph[parent])
    }

    /// Returns the ancestors of `body`, nearest first.
    ///
    /// The walk ends at the root, or right after appending `stop` when it is
    /// reached. The body itself is never part of its chain, so a root yields
    /// an empty chain.
    pub fn chain(&self, body: &Body, stop: Option<&Body>) -> Result<Vec<Body>, GraphError> {
        // An acyclic walk visits at most len() - 1 ancestors
        let limit = self.len();
        let mut chain = Vec::new();

        for idx in self.ancestors(body)? {
            if chain.len() == limit {
                return Err(GraphError::CycleDetected(body.clone()));
            }

            let ancestor = &self.graph[idx];
            chain.push(ancestor.clone());

            if stop == Some(ancestor) {
                break;
            }
        }

        Ok(chain)
    }

    /// Returns the number of bodies `body` orbits directly or indirectly
    pub fn depth(&self, body: &Body) -> Result<usize, GraphError> {
        let limit = self.len();
        let mut depth = 0;

        for _ in self.ancestors(body)? {
            if depth == limit {
                return Err(GraphError::CycleDetected(body.clone()));
            }
            depth += 1;
        }

        Ok(depth)
    }

    /// Returns bodies that orbit nothing, in order of first appearance
    pub fn roots(&self) -> Vec<&Body> {
        self.graph
            .node_indices()
            .filter(|idx| self.parent_index(*idx).is_none())
            .map(|idx| &self.graph[idx])
            .collect()
    }

    /// Returns true if the graph contains the body
    pub fn contains(&self, body: &Body) -> bool {
        self.node_map.contains_key(body)
    }

    /// Returns the number of bodies in the graph
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Returns true if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Returns all bodies in order of first appearance
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.graph.node_weights()
    }
}
