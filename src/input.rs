//! Reading graphs from text.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::traits::Weight;

/// Parses a graph from whitespace-separated integers.
///
/// The input is the vertex count, the edge count, then one
/// `u v weight` triple per edge. Line breaks carry no meaning.
///
/// ```text
/// 4 5
/// 0 1 10
/// 0 2 6
/// 0 3 5
/// 1 3 15
/// 2 3 4
/// ```
///
/// Triples go through [`Graph::add_edge`](struct.Graph.html#method.add_edge),
/// so a repeated pair keeps its last weight and a weight of zero adds no
/// edge.
///
/// # Errors
///
/// Fails on missing or non-numeric tokens, negative counts, vertex ids
/// outside the graph, self-loops, and anything after the last triple.
pub fn from_str<W>(input: &str) -> Result<Graph<W>>
    where W: Weight + FromStr
{
    let mut tokens = Tokens(input.split_whitespace());

    let vertex_count: usize = tokens.next("vertex count")?;
    let edge_count: usize = tokens.next("edge count")?;
    debug!("reading {} edges over {} vertices", edge_count, vertex_count);

    let mut graph = Graph::new(vertex_count);
    for _ in 0 .. edge_count {
        let u: usize = tokens.next("vertex id")?;
        let v: usize = tokens.next("vertex id")?;
        let weight: W = tokens.next("edge weight")?;
        graph.add_edge(u, v, weight)?;
    }

    if let Some(token) = tokens.0.next() {
        return Err(Error::TrailingInput { token: token.to_owned() });
    }

    Ok(graph)
}

/// Reads a graph in the [`from_str`](fn.from_str.html) format.
pub fn from_reader<W, R>(mut reader: R) -> Result<Graph<W>>
    where W: Weight + FromStr,
          R: Read
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    from_str(&input)
}

/// Reads a graph in the [`from_str`](fn.from_str.html) format from a file.
pub fn from_file<W, P>(path: P) -> Result<Graph<W>>
    where W: Weight + FromStr,
          P: AsRef<Path>
{
    from_reader(File::open(path)?)
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.0.next().ok_or(Error::UnexpectedEnd { expected })?;
        token.parse().map_err(|_| Error::InvalidToken {
            token: token.to_owned(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_example() {
        let graph: Graph<i64> =
            from_str("4 5\n0 1 10\n0 2 6\n0 3 5\n1 3 15\n2 3 4\n").unwrap();
        assert_eq!(4, graph.vertex_count());
        assert_eq!(5, graph.edge_count());
        assert_eq!(15, graph.weight(3, 1).unwrap());
    }

    #[test]
    fn layout_is_free_form() {
        let graph: Graph<u32> = from_str("  3 2 0 1 5   1\t2 6").unwrap();
        assert_eq!(2, graph.edge_count());
    }

    #[test]
    fn zero_edges() {
        let graph: Graph<u32> = from_str("5 0").unwrap();
        assert_eq!(5, graph.vertex_count());
        assert_eq!(0, graph.edge_count());
    }

    #[test]
    fn truncated() {
        match from_str::<i64>("3 2 0 1 5 1 2") {
            Err(Error::UnexpectedEnd { expected: "edge weight" }) => {}
            other => panic!("unexpected: {:?}", other),
        }
        assert!(from_str::<i64>("").is_err());
    }

    #[test]
    fn negative_count() {
        let err = from_str::<i64>("-3 0").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn bad_vertex() {
        let err = from_str::<i64>("3 1 0 3 1").unwrap_err();
        match err {
            Error::VertexOutOfRange { vertex: 3, vertex_count: 3 } => {}
            other => panic!("unexpected: {:?}", other),
        }
        assert!(from_str::<i64>("3 1 1 1 4").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn trailing() {
        match from_str::<i64>("2 1 0 1 3 9") {
            Err(Error::TrailingInput { ref token }) if token == "9" => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn from_reader_reads_bytes() {
        let graph: Graph<i64> = from_reader(&b"2 1 0 1 3"[..]).unwrap();
        assert_eq!(3, graph.weight(0, 1).unwrap());
    }
}
