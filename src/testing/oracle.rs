use crate::MultiGraph;
use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use std::collections::VecDeque;

/// Marks every node reachable from `start` with a plain BFS over the simple
/// view of the multigraph.
///
/// Independent of the union-find code on purpose, this is the reference the
/// partitioner is tested against.
pub fn reachable_from(graph: &MultiGraph, start: NodeIndex) -> FixedBitSet {
    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    let mut queue = VecDeque::new();
    visited.insert(start.index());
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors(node) {
            if !visited.contains(neighbor.index()) {
                visited.insert(neighbor.index());
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Number of connected components, counted by repeated BFS.
pub fn component_count_by_bfs(graph: &MultiGraph) -> usize {
    let mut seen = FixedBitSet::with_capacity(graph.node_count());
    let mut count = 0;

    for node in graph.node_indices() {
        if seen.contains(node.index()) {
            continue;
        }
        seen.union_with(&reachable_from(graph, node));
        count += 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_str;

    #[test]
    fn test_reachable_ignores_other_components() {
        let graph = from_str("1,2 2,3 4,5").unwrap();
        let reachable = reachable_from(&graph, NodeIndex::new(0));
        assert_eq!(reachable.count_ones(..), 3);
    }

    #[test]
    fn test_component_count() {
        let graph = from_str("1,2 2,3 4,5").unwrap();
        assert_eq!(component_count_by_bfs(&graph), 2);
        assert_eq!(component_count_by_bfs(&MultiGraph::new_undirected()), 0);
    }
}
