use crate::MultiGraph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random multigraph on `n` vertices (ids `0..n`) with exactly `m` edges.
///
/// Endpoint pairs are drawn uniformly and may repeat, so parallel edges are
/// common at higher densities. Self-loops are rerolled, the library never
/// sees them. No connectivity is guaranteed, isolated vertices happen.
///
/// `n` must be at least 2 whenever `m > 0`.
pub fn random_multigraph(n: usize, m: usize, seed: u64) -> MultiGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = MultiGraph::new_undirected();

    let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i as u32)).collect();

    let mut added = 0;
    while added < m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s == t {
            continue;
        }
        graph.add_edge(nodes[s], nodes[t], ());
        added += 1;
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_size() {
        let graph = random_multigraph(6, 10, 7);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = random_multigraph(8, 12, 3);
        let b = random_multigraph(8, 12, 3);
        let edges = |g: &MultiGraph| {
            g.raw_edges()
                .iter()
                .map(|e| (e.source().index(), e.target().index()))
                .collect::<Vec<_>>()
        };
        assert_eq!(edges(&a), edges(&b));
    }
}
