//! Writing a graph and its spanning forest for people to read.
//!
//! Three formats are available: the plain edge list, Graphviz DOT, and a
//! standalone SVG drawing with the vertices on a circle.

use std::collections::HashSet;
use std::fmt::{self, Write as FmtWrite};
use std::io::Write;
use std::str::FromStr;

use dot::{Edges, GraphWalk, Labeller, Nodes, Style};

use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::kruskal::SpanningForest;
use crate::layout::LayoutConfig;
use crate::traits::Weight;

/// An output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One `u -- v == weight` line per forest edge.
    Text,
    /// Graphviz DOT, forest edges bold and the rest dashed.
    Dot,
    /// SVG drawing of the forest on the circular layout.
    Svg,
}

impl Default for Format {
    fn default() -> Self {
        Format::Text
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s {
            "text" => Ok(Format::Text),
            "dot"  => Ok(Format::Dot),
            "svg"  => Ok(Format::Svg),
            _      => Err(format!("unknown format `{}` (expected text, dot, or svg)", s)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(match *self {
            Format::Text => "text",
            Format::Dot  => "dot",
            Format::Svg  => "svg",
        })
    }
}

/// Writes `forest` over `graph` in the given format.
pub fn render<W, O>(format: Format,
                    graph: &Graph<W>,
                    forest: &SpanningForest<W>,
                    config: &LayoutConfig,
                    out: &mut O) -> Result<()>
    where W: Weight,
          O: Write
{
    match format {
        Format::Text => write_text(forest, out),
        Format::Dot  => write_dot(graph, forest, out),
        Format::Svg  => write_svg(graph, forest, config, out),
    }
}

/// Writes the forest’s edges one per line, in order of acceptance.
pub fn write_text<W: Weight, O: Write>(forest: &SpanningForest<W>, out: &mut O) -> Result<()> {
    write!(out, "{}", forest)?;
    Ok(())
}

#[derive(Clone, Debug)]
struct DotEdge<W> {
    edge: Edge<W>,
    in_forest: bool,
}

struct DotGraph<W> {
    vertices: Vec<usize>,
    edges: Vec<DotEdge<W>>,
}

impl<'a, W: Weight> Labeller<'a, usize, DotEdge<W>> for DotGraph<W> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("mst").expect("`mst` is a valid DOT identifier")
    }

    fn node_id(&self, n: &usize) -> dot::Id<'_> {
        dot::Id::new(format!("v{}", n)).expect("`v<n>` is a valid DOT identifier")
    }

    fn node_label(&self, n: &usize) -> dot::LabelText<'a> {
        dot::LabelText::label(n.to_string())
    }

    fn edge_label(&self, e: &DotEdge<W>) -> dot::LabelText<'a> {
        dot::LabelText::label(e.edge.weight.to_string())
    }

    fn edge_style(&self, e: &DotEdge<W>) -> Style {
        if e.in_forest { Style::Bold } else { Style::Dashed }
    }

    fn kind(&self) -> dot::Kind {
        dot::Kind::Graph
    }
}

impl<'a, W: Weight> GraphWalk<'a, usize, DotEdge<W>> for DotGraph<W> {
    fn nodes(&self) -> Nodes<'_, usize> {
        self.vertices.as_slice().into()
    }

    fn edges(&self) -> Edges<'_, DotEdge<W>> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &DotEdge<W>) -> usize {
        e.edge.u
    }

    fn target(&self, e: &DotEdge<W>) -> usize {
        e.edge.v
    }
}

/// Writes the whole graph as an undirected Graphviz graph.
///
/// Every edge is labelled with its weight. Forest edges are bold and the
/// others dashed.
pub fn write_dot<W: Weight, O: Write>(graph: &Graph<W>,
                                      forest: &SpanningForest<W>,
                                      out: &mut O) -> Result<()> {
    let selected = forest_pairs(forest);
    let dot_graph = DotGraph {
        vertices: (0 .. graph.vertex_count()).collect(),
        edges: graph.edges().map(|edge| DotEdge {
            in_forest: selected.contains(&(edge.u, edge.v)),
            edge,
        }).collect(),
    };

    dot::render(&dot_graph, out)?;
    Ok(())
}

/// Draws the graph on its circular layout as SVG.
///
/// Forest edges are white lines and the other edges faint dashes, over a
/// black background; vertices are green discs labelled with their ids.
pub fn write_svg<W: Weight, O: Write>(graph: &Graph<W>,
                                      forest: &SpanningForest<W>,
                                      config: &LayoutConfig,
                                      out: &mut O) -> Result<()> {
    let selected = forest_pairs(forest);
    let points = config.circle(graph.vertex_count());
    let mut svg = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        config.width, config.height, config.width, config.height);
    let _ = writeln!(svg, "  <rect width=\"100%\" height=\"100%\" fill=\"black\"/>");

    for edge in graph.edges() {
        let (a, b) = (points[edge.u], points[edge.v]);
        let style = if selected.contains(&(edge.u, edge.v)) {
            "stroke=\"white\" stroke-width=\"2\""
        } else {
            "stroke=\"gray\" stroke-width=\"1\" stroke-dasharray=\"4 4\""
        };
        let _ = writeln!(svg,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            a.x, a.y, b.x, b.y, style);
    }

    for (vertex, point) in points.iter().enumerate() {
        let _ = writeln!(svg,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"green\"/>",
            point.x, point.y, config.vertex_radius);
        let _ = writeln!(svg,
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"24\" fill=\"black\" \
             text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            point.x, point.y, vertex);
    }

    svg.push_str("</svg>\n");
    out.write_all(svg.as_bytes())?;
    Ok(())
}

fn forest_pairs<W: Weight>(forest: &SpanningForest<W>) -> HashSet<(usize, usize)> {
    forest.iter().map(|edge| (edge.u, edge.v)).collect()
}
