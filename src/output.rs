use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::components::ConnectedComponents;
use crate::MultiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
}

struct DotView<'a> {
    graph: &'a MultiGraph,
    components: &'a ConnectedComponents,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for DotView<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("rods").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let node = NodeIndex::new(*n);
        dot::LabelText::label(format!(
            "{}\ncomponent {}",
            self.graph[node],
            self.components.component_of(node)
        ))
    }

    fn edge_label(&self, _e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label("")
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for DotView<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the multigraph in DOT format.
///
/// It shows your vertex ids, not petgraph's internal indices, together with
/// the component each vertex landed in. Parallel edges show up as parallel
/// arrows.
///
/// Intended to be used with `neato`.
pub fn draw_graph(graph: &MultiGraph, components: &ConnectedComponents) -> String {
    let view = DotView {
        graph,
        components,
        nodes: (0..graph.node_count()).collect(),
        edges: graph
            .edge_references()
            .map(|e| Edge {
                source: e.source().index(),
                target: e.target().index(),
            })
            .collect(),
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&view, &mut buffer).expect("Rendering to an in-memory buffer should not fail");
    String::from_utf8(buffer.into_inner()).expect("DOT output should be valid UTF-8")
}

/// Writes the multigraph to a file in DOT format.
pub fn to_dot_file(graph: &MultiGraph, components: &ConnectedComponents, path: &str) {
    let dot_str = draw_graph(graph, components);
    to_file(&dot_str, path);
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) {
    std::fs::write(path, content).expect("Rust should write to file");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::connected_components;
    use crate::input::from_str;

    #[test]
    fn test_draw_keeps_parallel_edges() {
        let graph = from_str("1,2 3,4 3,4").unwrap();
        let components = connected_components(&graph);
        let rendered = draw_graph(&graph, &components);

        assert!(rendered.contains("component 0"));
        assert!(rendered.contains("component 1"));
        // one line per edge instance
        assert_eq!(rendered.matches("->").count(), graph.edge_count());
    }
}
