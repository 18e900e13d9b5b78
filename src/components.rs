use crate::{MultiGraph, VertexId};
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

/// The connected components of a multigraph, computed once and read-only
/// afterwards.
///
/// A component is identified by its vertex set, kept here as a sorted
/// sequence of vertex ids, so equality is structural and independent of the
/// order edges were listed in. Components themselves are ordered by their
/// smallest vertex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    // node index -> component index
    comp_of: Vec<usize>,
    vertex_sets: Vec<Vec<VertexId>>,
}

impl ConnectedComponents {
    /// Number of components. Zero for the empty graph.
    pub fn count(&self) -> usize {
        self.vertex_sets.len()
    }

    /// Component index of a node of the underlying graph.
    pub fn component_of(&self, node: NodeIndex) -> usize {
        self.comp_of[node.index()]
    }

    /// Vertex sets of the components, each sorted ascending.
    pub fn vertex_sets(&self) -> &[Vec<VertexId>] {
        &self.vertex_sets
    }
}

/// Partitions the vertices of a multigraph into connected components.
///
/// Multiplicity plays no role here, a parallel bundle connects its endpoints
/// exactly like a single edge would. Vertices of degree zero come out as
/// singleton components. Always succeeds, the empty graph has zero
/// components.
///
/// Uses petgraph's path-compressed union-find, one `union` per edge, so the
/// whole partition costs near-linear time in the size of the graph.
pub fn connected_components(graph: &MultiGraph) -> ConnectedComponents {
    let node_count = graph.node_count();
    let mut forest = UnionFind::new(node_count);
    for edge in graph.edge_references() {
        forest.union(edge.source().index(), edge.target().index());
    }
    let labels = forest.into_labeling();

    // group nodes by their union-find root
    let mut root_to_component: HashMap<usize, usize> = HashMap::new();
    let mut members: Vec<Vec<NodeIndex>> = Vec::new();
    for node in graph.node_indices() {
        let root = labels[node.index()];
        let idx = *root_to_component.entry(root).or_insert_with(|| {
            members.push(Vec::new());
            members.len() - 1
        });
        members[idx].push(node);
    }

    let mut vertex_sets: Vec<Vec<VertexId>> = members
        .iter()
        .map(|nodes| {
            let mut ids: Vec<VertexId> = nodes.iter().map(|&n| graph[n]).collect();
            radsort::sort(&mut ids);
            ids
        })
        .collect();

    // reorder by smallest vertex id so the result does not depend on the
    // order nodes were interned in
    let mut order: Vec<usize> = (0..vertex_sets.len()).collect();
    order.sort_by_key(|&i| vertex_sets[i][0]);

    let mut comp_of = vec![usize::MAX; node_count];
    for (new_idx, &old_idx) in order.iter().enumerate() {
        for &node in &members[old_idx] {
            comp_of[node.index()] = new_idx;
        }
    }
    vertex_sets = order.iter().map(|&i| std::mem::take(&mut vertex_sets[i])).collect();

    ConnectedComponents { comp_of, vertex_sets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_str;
    use crate::testing::oracle::reachable_from;

    fn sets_of(line: &str) -> Vec<Vec<VertexId>> {
        let graph = from_str(line).unwrap();
        connected_components(&graph).vertex_sets().to_vec()
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let components = connected_components(&MultiGraph::new_undirected());
        assert_eq!(components.count(), 0);
    }

    #[test]
    fn test_disjoint_edges() {
        assert_eq!(sets_of("1,2 3,4"), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_parallel_edges_collapse_for_reachability() {
        assert_eq!(sets_of("3,4 3,4 3,4"), vec![vec![3, 4]]);
    }

    #[test]
    fn test_sparse_vertex_ids() {
        assert_eq!(
            sets_of("10,2 30,400 400,5 5,10"),
            vec![vec![2, 5, 10, 30, 400]]
        );
    }

    #[test]
    fn test_isolated_vertex_is_singleton() {
        let mut graph = from_str("1,2").unwrap();
        graph.add_node(7);
        let components = connected_components(&graph);
        assert_eq!(components.vertex_sets(), &[vec![1, 2], vec![7]]);
    }

    #[test]
    fn test_partition_invariant() {
        let graph = from_str("1,2 3,4 4,5 8,9 9,8").unwrap();
        let components = connected_components(&graph);

        // every node sits in exactly the component that claims its id
        for node in graph.node_indices() {
            let idx = components.component_of(node);
            assert!(components.vertex_sets()[idx].contains(&graph[node]));
        }

        // the sets are disjoint and cover the whole vertex set
        let total: usize = components.vertex_sets().iter().map(|s| s.len()).sum();
        assert_eq!(total, graph.node_count());
    }

    #[test]
    fn test_edge_order_does_not_matter() {
        assert_eq!(sets_of("1,2 2,3 4,5"), sets_of("4,5 3,2 2,1"));
    }

    #[test]
    fn test_matches_bfs_reachability() {
        let graph = crate::testing::random_graphs::random_multigraph(12, 18, 42);
        let components = connected_components(&graph);

        for node in graph.node_indices() {
            let reachable = reachable_from(&graph, node);
            for other in graph.node_indices() {
                assert_eq!(
                    reachable.contains(other.index()),
                    components.component_of(node) == components.component_of(other),
                );
            }
        }
    }
}
