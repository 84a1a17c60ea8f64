//! Kruskal’s algorithm.

use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::traits::Weight;
use crate::union_find::UnionFind;

/// A minimum spanning forest: the edges Kruskal’s algorithm accepted, in
/// the order it accepted them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ForestParts<W>",
                                     bound(deserialize = "W: Deserialize<'de>")))]
pub struct SpanningForest<W = i64> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}
// Invariant: self.edges is acyclic, every endpoint is below
// vertex_count, and self.edges.len() < vertex_count (or both are 0).

// Unchecked fields of a `SpanningForest`, as read from outside.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
struct ForestParts<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W> TryFrom<ForestParts<W>> for SpanningForest<W> {
    type Error = String;

    fn try_from(parts: ForestParts<W>) -> std::result::Result<Self, String> {
        let ForestParts { vertex_count, edges } = parts;
        let mut uf = UnionFind::new(vertex_count);

        for edge in &edges {
            if edge.u >= edge.v || edge.v >= vertex_count {
                return Err(format!("edge {} -- {} is not a canonical pair below {}",
                                   edge.u, edge.v, vertex_count));
            }
            if !uf.union_unchecked(edge.u, edge.v) {
                return Err(format!("edge {} -- {} closes a cycle", edge.u, edge.v));
            }
        }

        Ok(SpanningForest { vertex_count, edges })
    }
}

impl<W: Weight> SpanningForest<W> {
    /// The selected edges in order of acceptance: non-decreasing weight,
    /// ties in `Graph::edges` order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Iterates over the selected edges.
    pub fn iter(&self) -> slice::Iter<Edge<W>> {
        self.edges.iter()
    }

    /// The number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Were no edges selected?
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The number of vertices of the graph this forest spans.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The number of trees in the forest, counting isolated vertices.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Is this a single tree reaching every vertex?
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() <= 1
    }

    /// The sum of the selected weights.
    ///
    /// # Errors
    ///
    /// `Error::WeightOverflow` if the sum does not fit in `W`.
    pub fn total_weight(&self) -> Result<W> {
        self.edges.iter().try_fold(W::zero(), |total, edge| {
            total.checked_add(edge.weight).ok_or(Error::WeightOverflow)
        })
    }

    /// Consumes the forest, returning its edges.
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

impl<'a, W: Weight> IntoIterator for &'a SpanningForest<W> {
    type Item = &'a Edge<W>;
    type IntoIter = slice::Iter<'a, Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// One line per edge, `u -- v == weight`.
impl<W: Weight> fmt::Display for SpanningForest<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for edge in &self.edges {
            writeln!(formatter, "{}", edge)?;
        }
        Ok(())
    }
}

/// Computes a minimum spanning forest of `graph`.
///
/// Edges are considered by ascending weight; the sort is stable, so equal
/// weights keep the order of [`Graph::edges`](struct.Graph.html#method.edges).
/// An edge is accepted when its endpoints are still in different trees.
/// For a connected graph the result is a spanning tree with
/// `vertex_count - 1` edges; otherwise it has one tree per component.
///
/// # Examples
///
/// ```
/// use spanning_forest::{kruskal, Edge, Graph};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 10).unwrap();
/// graph.add_edge(0, 2, 6).unwrap();
/// graph.add_edge(0, 3, 5).unwrap();
/// graph.add_edge(1, 3, 15).unwrap();
/// graph.add_edge(2, 3, 4).unwrap();
///
/// let forest = kruskal(&graph);
/// assert_eq!(&[Edge::new(2, 3, 4), Edge::new(0, 3, 5), Edge::new(0, 1, 10)],
///            forest.edges());
/// assert_eq!(19, forest.total_weight().unwrap());
/// ```
pub fn kruskal<W: Weight>(graph: &Graph<W>) -> SpanningForest<W> {
    let mut edges: Vec<Edge<W>> = graph.edges().collect();
    edges.sort_by_key(|edge| edge.weight);

    let mut uf = UnionFind::new(graph.vertex_count());
    let capacity = cmp::min(graph.edge_count(), graph.vertex_count().saturating_sub(1));
    let mut selected = Vec::with_capacity(capacity);

    for edge in edges {
        if uf.union_unchecked(edge.u, edge.v) {
            debug!("accepted {}", edge);
            selected.push(edge);
        } else {
            debug!("rejected {} (would close a cycle)", edge);
        }
    }

    debug!("spanning forest: {} edges over {} vertices in {} trees",
           selected.len(), graph.vertex_count(), uf.set_count());

    SpanningForest {
        vertex_count: graph.vertex_count(),
        edges: selected,
    }
}
