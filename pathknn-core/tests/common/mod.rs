use pathknn_core::{AdjacencyRow, Graph, VertexId};

/// Builds a graph from `(source, target, raw weight)` triples followed by
/// isolated vertex declarations.
#[must_use]
pub fn graph(edges: &[(u64, u64, i64)], isolated: &[u64]) -> Graph {
    let rows = edges
        .iter()
        .map(|&(source, target, weight)| {
            AdjacencyRow::new(VertexId::new(source), vec![(VertexId::new(target), weight)])
        })
        .chain(isolated.iter().map(|&id| AdjacencyRow::isolated(VertexId::new(id))));
    Graph::build(rows).expect("test graph must build")
}

/// Ring of `size` vertices with a chord every third vertex and a detached
/// pair, so rows mix long paths, ties, and padding.
#[must_use]
pub fn ring_with_chords(size: u64) -> Graph {
    let mut edges = Vec::new();
    for vertex in 0..size {
        edges.push((vertex, (vertex + 1) % size, 1 + (vertex % 4) as i64));
        if vertex % 3 == 0 {
            edges.push((vertex, (vertex + size / 2) % size, 2));
        }
    }
    edges.push((size + 10, size + 11, 5));
    graph(&edges, &[size + 20])
}
