//! Orbit Map - counts orbits and orbital transfers in a map of bodies
//!
//! An orbit map lists `CENTER)SATELLITE` records. The map is indexed as a
//! tree rooted at a single center, which answers how many direct and
//! indirect orbits exist and how many transfers separate two bodies.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Body, GraphError, OrbitGraph, ParseError, Relation};
