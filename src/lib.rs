#![doc(html_root_url = "https://docs.rs/spanning-forest/0.1.0")]
//! Minimum spanning forests by Kruskal’s algorithm.
//!
//! A [`Graph`](struct.Graph.html) holds a fixed number of vertices and
//! weighted undirected edges between them. [`kruskal`](fn.kruskal.html)
//! picks edges in ascending weight order, using a rank-balanced,
//! path-compressing [`UnionFind`](struct.UnionFind.html) to skip any
//! edge that would close a cycle. The result is a
//! [`SpanningForest`](struct.SpanningForest.html): one minimum spanning
//! tree per connected component.
//!
//! The [`input`](input/index.html) module reads graphs from text, and
//! [`render`](render/index.html) writes the result as a plain edge list,
//! Graphviz DOT, or an SVG drawing.
//!
//! # Examples
//!
//! ```
//! use spanning_forest::{kruskal, Edge, Graph};
//!
//! // Graph to use:
//! //
//! //  0 ------ 1 ------ 2
//! //  |    6   |    5   |
//! //  | 8      | 1      | 4
//! //  |        |        |
//! //  3 ------ 4 ------ 5
//! //  |    7   |    2   |
//! //  | 3      | 12     | 11
//! //  |        |        |
//! //  6 ------ 7 ------ 8
//! //       9        10
//! let mut graph = Graph::new(9);
//! for &(u, v, weight) in &[(0, 1, 6), (0, 3, 8), (1, 2, 5), (1, 4, 1),
//!                          (2, 5, 4), (3, 4, 7), (3, 6, 3), (4, 5, 2),
//!                          (4, 7, 12), (5, 8, 11), (6, 7, 9), (7, 8, 10)] {
//!     graph.add_edge(u, v, weight).unwrap();
//! }
//!
//! let forest = kruskal(&graph);
//! assert!(forest.is_spanning_tree());
//! assert_eq!(42, forest.total_weight().unwrap());
//! assert_eq!(Edge::new(1, 4, 1), forest.edges()[0]);
//! ```
//!
//! # Features
//!
//! With the `serde` feature, edges, spanning forests, and union-finds
//! implement `Serialize` and `Deserialize`.
//!
//! # Logging
//!
//! Edge decisions are logged at `debug` and union steps at `trace`
//! through the [`log`](https://docs.rs/log) facade.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod error;
mod graph;
mod kruskal;
mod traits;
mod union_find;

pub mod input;
pub mod layout;
pub mod render;

pub use error::*;
pub use graph::*;
pub use kruskal::*;
pub use traits::*;
pub use union_find::*;
