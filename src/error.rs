use std::io;

use thiserror::Error;

/// Errors raised while building graphs, querying union-finds, or reading
/// input.
#[derive(Debug, Error)]
pub enum Error {
    /// A vertex id was not below the graph’s vertex count.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// An edge joined a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// The vertex on both ends.
        vertex: usize,
    },

    /// A union-find element was not below the union-find’s length.
    #[error("element {element} is out of range for a union-find of {len} elements")]
    ElementOutOfRange {
        /// The offending element.
        element: usize,
        /// Number of elements.
        len: usize,
    },

    /// The input stopped before a value was read.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What was being read.
        expected: &'static str,
    },

    /// A token could not be read as the value in that position.
    #[error("invalid token `{token}`, expected {expected}")]
    InvalidToken {
        /// The token as written.
        token: String,
        /// What was being read.
        expected: &'static str,
    },

    /// Tokens remained after the last edge.
    #[error("unexpected trailing input `{token}`")]
    TrailingInput {
        /// The first extra token.
        token: String,
    },

    /// The sum of the selected weights does not fit the weight type.
    #[error("total weight overflows the weight type")]
    WeightOverflow,

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Is this a malformed argument (bad vertex, element, or count)?
    pub fn is_invalid_argument(&self) -> bool {
        match *self {
            Error::VertexOutOfRange { .. }
            | Error::SelfLoop { .. }
            | Error::ElementOutOfRange { .. }
            | Error::InvalidToken { .. } => true,
            _ => false,
        }
    }
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
