use std::collections::VecDeque;

use crate::data::model::GENES;

use super::graph::GeneNetwork;

// ---------------------------------------------------------------------------
// Shared 2-D layout
// ---------------------------------------------------------------------------

/// Relaxation sweeps.  Fixed so reruns give identical coordinates.
const SWEEPS: usize = 250;
/// Displacement step per sweep.
const STEP: f64 = 0.1;

/// One 2-D coordinate per panel gene, shared by every figure so the same
/// gene lands in the same place across conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: Vec<(f64, f64)>,
}

impl Layout {
    /// Compute one layout from the union of edges across all networks.
    ///
    /// Kamada-Kawai-style stress relaxation: target distances are BFS
    /// shortest paths on the union graph, initial placement is a circle,
    /// then a fixed number of deterministic spring sweeps.  Coordinates are
    /// rescaled to span [-1, 1].
    pub fn shared(networks: &[GeneNetwork]) -> Layout {
        let n = GENES.len();

        let mut connected = vec![vec![false; n]; n];
        for net in networks {
            for e in net.edges() {
                connected[e.a][e.b] = true;
                connected[e.b][e.a] = true;
            }
        }

        let dist = all_pairs_bfs(&connected);

        // Circular start keeps the relaxation deterministic.
        let mut pos: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                (angle.cos(), angle.sin())
            })
            .collect();

        for _ in 0..SWEEPS {
            for i in 0..n {
                let (mut fx, mut fy) = (0.0, 0.0);
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let dx = pos[i].0 - pos[j].0;
                    let dy = pos[i].1 - pos[j].1;
                    let d = (dx * dx + dy * dy).sqrt().max(1e-9);
                    let target = dist[i][j];
                    // Spring toward the graph distance, weighted 1/target².
                    let f = (d - target) / (target * target * d);
                    fx -= f * dx;
                    fy -= f * dy;
                }
                pos[i].0 += STEP * fx;
                pos[i].1 += STEP * fy;
            }
        }

        rescale_unit(&mut pos);
        Layout { positions: pos }
    }

    /// Coordinate of the panel gene at `idx`.
    pub fn position(&self, idx: usize) -> (f64, f64) {
        self.positions[idx]
    }
}

/// BFS shortest-path distance between every node pair.  Unreachable pairs
/// fall back to the node count, which keeps disconnected components apart.
fn all_pairs_bfs(connected: &[Vec<bool>]) -> Vec<Vec<f64>> {
    let n = connected.len();
    let mut dist = vec![vec![n as f64; n]; n];

    for s in 0..n {
        let mut seen = vec![false; n];
        let mut queue = VecDeque::new();
        seen[s] = true;
        dist[s][s] = 0.0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            for w in 0..n {
                if connected[v][w] && !seen[w] {
                    seen[w] = true;
                    dist[s][w] = dist[s][v] + 1.0;
                    queue.push_back(w);
                }
            }
        }
    }

    dist
}

/// Centre on the centroid and scale the largest coordinate magnitude to 1.
fn rescale_unit(pos: &mut [(f64, f64)]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;

    let mut extent = 0.0f64;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        extent = extent.max(p.0.abs()).max(p.1.abs());
    }
    if extent == 0.0 {
        return;
    }
    for p in pos.iter_mut() {
        p.0 /= extent;
        p.1 /= extent;
    }
}
