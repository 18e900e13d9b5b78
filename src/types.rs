/// Vertex identifier as given in the input. Any non-negative integer,
/// not required to be contiguous.
pub type VertexId = u32;

/// Wrapper for petgraph's graph type.
///
/// Node weights carry the caller's vertex ids, petgraph assigns its own
/// indices. Every call to `add_edge` stores a distinct edge instance, so
/// parallel edges survive construction. Self-loops are rejected at parse
/// time and never reach the graph.
pub type MultiGraph = petgraph::graph::UnGraph<VertexId, ()>;
