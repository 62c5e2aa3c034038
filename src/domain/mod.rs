//! Domain models for orbit maps
//!
//! Contains the parsing, graph and metric logic without any I/O concerns.

mod body;
mod graph;
mod metrics;

pub use body::{parse_relations, render_relations, Body, ParseError, Relation, SEPARATOR};
pub use graph::{GraphError, OrbitGraph};
pub use metrics::{common_ancestor, total_orbits, transfer_hops};
