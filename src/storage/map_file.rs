//! Orbit map files
//!
//! A map file holds one `CENTER)SATELLITE` record per line. Surrounding
//! whitespace and blank lines are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::{parse_relations, OrbitGraph, Relation};

/// An orbit map on disk
pub struct MapFile {
    path: PathBuf,
}

impl MapFile {
    /// Creates a handle for the map at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the map file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses every relation in the map
    pub fn read_relations(&self) -> Result<Vec<Relation>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read orbit map: {}", self.path.display()))?;

        parse_relations(&content)
            .with_context(|| format!("Failed to parse orbit map: {}", self.path.display()))
    }

    /// Reads the map and builds its orbit graph
    pub fn load_graph(&self) -> Result<OrbitGraph> {
        let relations = self.read_relations()?;

        OrbitGraph::from_relations(&relations)
            .with_context(|| format!("Invalid orbit map: {}", self.path.display()))
    }
}
