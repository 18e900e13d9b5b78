use crate::{MultiGraph, VertexId};
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use thiserror::Error;

/// Why a line of input was rejected before any graph was built.
///
/// Every variant carries enough of the offending text to point the user at
/// the exact token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Vertex ids are integers, `1.5` is not a vertex.
    #[error("float values are not allowed, vertex ids must be non-negative integers (got {0:?})")]
    FloatVertex(String),
    /// A minus sign in front of a vertex id.
    #[error("negative vertex ids are not allowed (got {0:?})")]
    NegativeVertex(String),
    /// A token that is not two vertex ids joined by a single comma.
    #[error("expected a single 'u,v' pair, got {0:?}")]
    MalformedPair(String),
    /// A vertex id that does not parse as a non-negative integer.
    #[error("vertex id {0:?} is not a non-negative integer")]
    MalformedVertex(String),
    /// Both ends of a rod at the same joint.
    #[error("rod from vertex {0} to itself is not allowed")]
    SelfLoop(VertexId),
}

fn parse_vertex(raw: &str) -> Result<VertexId, ValidationError> {
    if raw.contains('.') {
        return Err(ValidationError::FloatVertex(raw.to_string()));
    }
    if raw.starts_with('-') {
        return Err(ValidationError::NegativeVertex(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| ValidationError::MalformedVertex(raw.to_string()))
}

/// Validates one line of text and turns it into an edge list.
///
/// Expected format: whitespace-separated tokens, each token a pair of
/// distinct non-negative integers joined by one comma.
///
/// Example input:
/// ```text
/// 1,2 3,4 4,5 5,1
/// ```
///
/// An empty (or all-whitespace) line is a valid empty graph. Any other
/// deviation is reported as a [`ValidationError`], so only well-formed
/// edge lists ever reach graph construction.
pub fn parse_edge_list(line: &str) -> Result<Vec<(VertexId, VertexId)>, ValidationError> {
    let mut edges = Vec::new();
    for token in line.split_whitespace() {
        let mut halves = token.split(',');
        let (Some(u), Some(v), None) = (halves.next(), halves.next(), halves.next()) else {
            return Err(ValidationError::MalformedPair(token.to_string()));
        };
        let u = parse_vertex(u)?;
        let v = parse_vertex(v)?;
        if u == v {
            return Err(ValidationError::SelfLoop(u));
        }
        edges.push((u, v));
    }
    Ok(edges)
}

/// Builds the multigraph from a validated edge list.
///
/// Vertices are created on first occurrence in any pair. One edge instance
/// is added per pair, so duplicates in the input stay duplicates in the
/// graph.
pub fn build_graph(edges: &[(VertexId, VertexId)]) -> MultiGraph {
    let mut graph = MultiGraph::new_undirected();
    let mut node_of: HashMap<VertexId, NodeIndex> = HashMap::new();

    for &(u, v) in edges {
        let u_idx = *node_of.entry(u).or_insert_with(|| graph.add_node(u));
        let v_idx = *node_of.entry(v).or_insert_with(|| graph.add_node(v));
        graph.add_edge(u_idx, v_idx, ());
    }

    graph
}

/// This is [`parse_edge_list`] followed by [`build_graph`].
pub fn from_str(line: &str) -> Result<MultiGraph, ValidationError> {
    Ok(build_graph(&parse_edge_list(line)?))
}
