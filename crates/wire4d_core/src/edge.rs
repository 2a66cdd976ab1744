//! Undirected edges and their extraction from face loops

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shape::Face;

/// An undirected edge between two vertex indices
///
/// Always stored in canonical form (`a < b`) so it can be used directly as a
/// deduplication key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Create an edge, sorting the endpoints into canonical order
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// The smaller endpoint
    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    /// The larger endpoint
    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    /// Both endpoints, smaller first
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// True if both endpoints are the same vertex
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Collect the unique edges of a face list
///
/// Every consecutive index pair of every face contributes an edge, including
/// the wraparound pair from the last index back to the first. Each canonical
/// edge appears once, in order of first discovery.
pub fn extract_edges(faces: &[Face]) -> Vec<Edge> {
    let mut seen: HashSet<Edge> = HashSet::new();
    let mut edges = Vec::new();

    for face in faces {
        for edge in face.edges() {
            if edge.is_loop() {
                continue;
            }
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }

    edges
}
