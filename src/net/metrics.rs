use crate::data::model::{GENE_PAIRS, GENES};

use super::graph::GeneNetwork;

// ---------------------------------------------------------------------------
// Strong-subgraph metrics
// ---------------------------------------------------------------------------

/// Aggregate statistics over a network's strong-edge subgraph.  Nodes with
/// no strong edge stay in the subgraph as isolated nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkMetrics {
    /// Number of strong edges.
    pub strong_edges: usize,
    /// Strong-edge count relative to the complete graph (36 pairs).
    pub density: f64,
    /// Mean node degree in the strong subgraph.
    pub avg_degree: f64,
    /// Mean local clustering coefficient over all nine nodes.
    pub avg_clustering: f64,
}

impl NetworkMetrics {
    /// Compute the metrics of `net`'s strong-edge subgraph.
    pub fn from_network(net: &GeneNetwork) -> Self {
        let n = GENES.len();

        // Adjacency lists over strong edges only.
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut strong_edges = 0usize;
        for e in net.strong_edges() {
            adjacency[e.a].push(e.b);
            adjacency[e.b].push(e.a);
            strong_edges += 1;
        }

        let density = strong_edges as f64 / GENE_PAIRS as f64;
        let avg_degree =
            adjacency.iter().map(|nb| nb.len() as f64).sum::<f64>() / n as f64;
        let avg_clustering = adjacency
            .iter()
            .map(|nb| local_clustering(&adjacency, nb))
            .sum::<f64>()
            / n as f64;

        NetworkMetrics {
            strong_edges,
            density,
            avg_degree,
            avg_clustering,
        }
    }
}

/// Local clustering coefficient of one node: closed neighbour pairs over
/// possible neighbour pairs.  Zero for degree < 2.
fn local_clustering(adjacency: &[Vec<usize>], neighbours: &[usize]) -> f64 {
    let k = neighbours.len();
    if k < 2 {
        return 0.0;
    }
    let mut closed = 0usize;
    for (i, &u) in neighbours.iter().enumerate() {
        for &v in &neighbours[i + 1..] {
            if adjacency[u].contains(&v) {
                closed += 1;
            }
        }
    }
    closed as f64 / (k * (k - 1) / 2) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::graph::{Edge, Strength};

    fn network_with_strong(pairs: &[(usize, usize)]) -> GeneNetwork {
        let mut edges = Vec::new();
        for a in 0..GENES.len() {
            for b in (a + 1)..GENES.len() {
                let strong = pairs.contains(&(a, b));
                edges.push(Edge {
                    a,
                    b,
                    tau: if strong { 0.8 } else { 0.1 },
                    strength: if strong { Strength::Strong } else { Strength::Weak },
                });
            }
        }
        GeneNetwork::from_edges(edges)
    }

    #[test]
    fn all_weak_network_scores_zero_everywhere() {
        let m = NetworkMetrics::from_network(&network_with_strong(&[]));
        assert_eq!(m.strong_edges, 0);
        assert_eq!(m.density, 0.0);
        assert_eq!(m.avg_degree, 0.0);
        assert_eq!(m.avg_clustering, 0.0);
    }

    #[test]
    fn triangle_metrics() {
        let m = NetworkMetrics::from_network(&network_with_strong(&[(0, 1), (1, 2), (0, 2)]));
        assert_eq!(m.strong_edges, 3);
        assert!((m.density - 3.0 / 36.0).abs() < 1e-12);
        // Degrees: 2, 2, 2 and six isolated nodes.
        assert!((m.avg_degree - 6.0 / 9.0).abs() < 1e-12);
        // Each triangle node is fully clustered; the rest contribute zero.
        assert!((m.avg_clustering - 3.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn open_chain_has_no_clustering() {
        let m = NetworkMetrics::from_network(&network_with_strong(&[(0, 1), (1, 2)]));
        assert_eq!(m.strong_edges, 2);
        assert!((m.avg_degree - 4.0 / 9.0).abs() < 1e-12);
        assert_eq!(m.avg_clustering, 0.0);
    }

    #[test]
    fn density_is_strong_count_over_36() {
        let m = NetworkMetrics::from_network(&network_with_strong(&[(0, 3), (4, 7)]));
        assert!((m.density - 2.0 / 36.0).abs() < 1e-12);
    }
}
