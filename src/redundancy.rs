use crate::components::{ConnectedComponents, connected_components};
use crate::input::{ValidationError, from_str};
use crate::{MultiGraph, VertexId};
use petgraph::visit::EdgeRef;

/// Edge bookkeeping for one connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSurplus {
    /// Vertex ids of the component, sorted ascending.
    pub vertices: Vec<VertexId>,
    /// All edge instances inside the component, parallel duplicates included.
    pub edge_count: usize,
    /// Edges a spanning tree of the component needs, `vertices - 1`.
    pub spanning_tree_edges: usize,
}

impl ComponentSurplus {
    /// Edges of this component that can be cut without splitting it.
    ///
    /// Never underflows: a connected component on k vertices has at least
    /// k - 1 edges, and a singleton has zero of each.
    pub fn surplus(&self) -> usize {
        self.edge_count - self.spanning_tree_edges
    }
}

/// Computes the edge bookkeeping of every component in one pass over the
/// edge list.
///
/// Both endpoints of an edge always live in the same component, so looking
/// up one endpoint is enough to charge the edge to its component. This
/// replaces the obvious scan-all-edges-per-component loop, which is
/// quadratic.
pub fn surplus_per_component(
    graph: &MultiGraph,
    components: &ConnectedComponents,
) -> Vec<ComponentSurplus> {
    let mut edge_counts = vec![0usize; components.count()];
    for edge in graph.edge_references() {
        edge_counts[components.component_of(edge.source())] += 1;
    }

    components
        .vertex_sets()
        .iter()
        .zip(edge_counts)
        .map(|(vertices, edge_count)| ComponentSurplus {
            vertices: vertices.clone(),
            edge_count,
            spanning_tree_edges: vertices.len() - 1,
        })
        .collect()
}

/// Maximum number of edges removable from the multigraph without changing
/// which vertex pairs are connected.
pub fn count_removable_edges(graph: &MultiGraph) -> usize {
    let components = connected_components(graph);
    surplus_per_component(graph, &components)
        .iter()
        .map(ComponentSurplus::surplus)
        .sum()
}

/// The whole pipeline on one line of text: validate, build the multigraph,
/// count removable rods.
pub fn rods_to_cut(line: &str) -> Result<usize, ValidationError> {
    let graph = from_str(line)?;
    Ok(count_removable_edges(&graph))
}
