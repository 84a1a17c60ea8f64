extern crate spanning_forest;

#[macro_use]
extern crate quickcheck;

use spanning_forest::{kruskal, Edge, Graph, UnionFind};

// The largest graph we'll generate; small enough to enumerate every
// subset of its edges.
const MAX_VERTICES: usize = 6;

// The most edge triples we'll feed into a graph.
const MAX_EDGES: usize = 12;

quickcheck! {
    fn prop_forest_is_minimal(size: u8, triples: Vec<(u8, u8, u8)>) -> bool {
        let graph = build(size, &triples);
        let forest = kruskal(&graph);
        Some(forest.total_weight().unwrap()) == brute_force_minimum(&graph)
    }

    fn prop_forest_is_acyclic_and_spanning(size: u8, triples: Vec<(u8, u8, u8)>) -> bool {
        let graph = build(size, &triples);
        let forest = kruskal(&graph);

        let mut uf = UnionFind::new(graph.vertex_count());
        let acyclic = forest.iter().all(|e| uf.union(e.u, e.v).unwrap());
        let from_graph = forest.iter()
            .all(|e| graph.weight(e.u, e.v).unwrap() == e.weight);

        acyclic && from_graph
            && forest.len() == graph.vertex_count() - components(&graph)
            && forest.component_count() == components(&graph)
    }

    fn prop_weights_never_decrease(size: u8, triples: Vec<(u8, u8, u8)>) -> bool {
        let forest = kruskal(&build(size, &triples));
        forest.edges().windows(2).all(|pair| pair[0].weight <= pair[1].weight)
    }

    fn prop_deterministic(size: u8, triples: Vec<(u8, u8, u8)>) -> bool {
        let graph = build(size, &triples);
        kruskal(&graph) == kruskal(&graph.clone())
    }

    fn prop_find_is_idempotent(pairs: Vec<(u8, u8)>) -> bool {
        let len = 32;
        let mut uf = UnionFind::new(len);
        for &(a, b) in &pairs {
            uf.union(a as usize % len, b as usize % len).unwrap();
        }

        let first = uf.to_vec();
        let second: Vec<_> = (0 .. len).map(|i| uf.find(i).unwrap()).collect();
        first == second
    }
}

fn build(size: u8, triples: &[(u8, u8, u8)]) -> Graph<i64> {
    let n = 1 + size as usize % MAX_VERTICES;
    let mut graph = Graph::new(n);

    for &(a, b, weight) in triples.iter().take(MAX_EDGES) {
        let (u, v) = (a as usize % n, b as usize % n);
        if u != v {
            graph.add_edge(u, v, weight as i64).unwrap();
        }
    }

    graph
}

fn components(graph: &Graph<i64>) -> usize {
    let mut uf = UnionFind::new(graph.vertex_count());
    for edge in graph.edges() {
        uf.union(edge.u, edge.v).unwrap();
    }
    uf.set_count()
}

// Tries every subset of edges and returns the least total weight of
// those that form a spanning forest.
fn brute_force_minimum(graph: &Graph<i64>) -> Option<i64> {
    let edges: Vec<Edge<i64>> = graph.edges().collect();
    let wanted = graph.vertex_count() - components(graph);
    let mut best = None;

    for mask in 0u32 .. 1 << edges.len() {
        if mask.count_ones() as usize != wanted {
            continue;
        }

        let mut uf = UnionFind::new(graph.vertex_count());
        let mut total = 0;
        let mut acyclic = true;

        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                acyclic &= uf.union(edge.u, edge.v).unwrap();
                total += edge.weight;
            }
        }

        if acyclic {
            best = Some(best.map_or(total, |b: i64| b.min(total)));
        }
    }

    best
}

#[test]
fn worked_examples() {
    let mut graph = Graph::new(4);
    for &(u, v, w) in &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)] {
        graph.add_edge(u, v, w).unwrap();
    }
    let forest = kruskal(&graph);
    assert_eq!(&[Edge::new(2, 3, 4), Edge::new(0, 3, 5), Edge::new(0, 1, 10)],
               forest.edges());
    assert_eq!(19, forest.total_weight().unwrap());

    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(2, 3, 1).unwrap();
    assert_eq!(&[Edge::new(0, 1, 1), Edge::new(2, 3, 1)], kruskal(&graph).edges());

    assert!(kruskal(&Graph::<i64>::new(5)).is_empty());
}

#[test]
fn from_text_to_report() {
    let graph: Graph<i64> =
        spanning_forest::input::from_str("4 5 0 1 10 0 2 6 0 3 5 1 3 15 2 3 4").unwrap();
    assert_eq!("2 -- 3 == 4\n0 -- 3 == 5\n0 -- 1 == 10\n", kruskal(&graph).to_string());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    extern crate serde_json;
    use spanning_forest::SpanningForest;

    let mut graph = Graph::new(3);
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    let forest = kruskal(&graph);

    let json = serde_json::to_string(&forest).unwrap();
    let back: SpanningForest<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(forest, back);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_broken_forests() {
    extern crate serde_json;
    use spanning_forest::SpanningForest;

    let too_few_vertices = r#"{"vertex_count":1,"edges":[{"u":0,"v":1,"weight":2}]}"#;
    assert!(serde_json::from_str::<SpanningForest<i64>>(too_few_vertices).is_err());

    let cycle = r#"{"vertex_count":3,"edges":[
        {"u":0,"v":1,"weight":1},{"u":1,"v":2,"weight":1},{"u":0,"v":2,"weight":1}]}"#;
    assert!(serde_json::from_str::<SpanningForest<i64>>(cycle).is_err());

    let fine = r#"{"vertex_count":3,"edges":[{"u":0,"v":2,"weight":5}]}"#;
    let forest: SpanningForest<i64> = serde_json::from_str(fine).unwrap();
    assert_eq!(2, forest.component_count());
}
