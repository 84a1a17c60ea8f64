//! Undirected weighted graphs on the vertices `0 .. n`.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::Weight;

/// An undirected weighted edge.
///
/// Edges produced by this crate always have `u < v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<W = i64> {
    /// The smaller endpoint.
    pub u: usize,
    /// The larger endpoint.
    pub v: usize,
    /// The edge’s weight.
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge, putting the endpoints in canonical order.
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        if u <= v {
            Edge { u, v, weight }
        } else {
            Edge { u: v, v: u, weight }
        }
    }

    /// Does this edge touch the given vertex?
    pub fn is_incident(&self, vertex: usize) -> bool {
        self.u == vertex || self.v == vertex
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{} -- {} == {}", self.u, self.v, self.weight)
    }
}

/// An undirected graph with weighted edges.
///
/// Weights are stored sparsely by vertex pair, so a pair with no entry
/// has weight zero, meaning “no edge”. The vertex count is fixed at
/// construction.
///
/// # Examples
///
/// ```
/// use spanning_forest::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4).unwrap();
/// graph.add_edge(2, 1, 7).unwrap();
///
/// assert_eq!(7, graph.weight(1, 2).unwrap());
/// assert_eq!(0, graph.weight(0, 2).unwrap());
/// assert!(graph.add_edge(1, 1, 3).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<W = i64> {
    vertex_count: usize,
    weights: BTreeMap<(usize, usize), W>,
}
// Invariant: every key (u, v) has u < v < vertex_count and a non-zero
// weight.

impl<W: Weight> Default for Graph<W> {
    fn default() -> Self {
        Graph::new(0)
    }
}

impl<W: Weight> Graph<W> {
    /// Creates a graph of `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            vertex_count,
            weights: BTreeMap::new(),
        }
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The number of vertex pairs with a non-zero weight.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Sets the weight of the edge between `u` and `v`.
    ///
    /// The pair is unordered. A later call for the same pair replaces
    /// the earlier weight, and a weight of zero removes the edge.
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is not a vertex of this graph, or if
    /// `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        if u == v {
            return Err(Error::SelfLoop { vertex: u });
        }

        let key = if u < v { (u, v) } else { (v, u) };

        if weight.is_zero() {
            if self.weights.remove(&key).is_some() {
                debug!("removed edge {} -- {}", key.0, key.1);
            }
        } else if let Some(old) = self.weights.insert(key, weight) {
            warn!("edge {} -- {} reweighted from {} to {}",
                  key.0, key.1, old, weight);
        }

        Ok(())
    }

    /// The weight between `u` and `v`, or zero if they are not adjacent.
    pub fn weight(&self, u: usize, v: usize) -> Result<W> {
        self.check(u)?;
        self.check(v)?;
        let key = if u < v { (u, v) } else { (v, u) };
        Ok(self.weights.get(&key).cloned().unwrap_or_else(W::zero))
    }

    /// All edges, each pair once with `u < v`, ordered by `u` then `v`.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.weights.iter().map(|(&(u, v), &weight)| Edge { u, v, weight })
    }

    fn check(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}
