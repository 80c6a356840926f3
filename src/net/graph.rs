use crate::data::group::GeneMatrix;
use crate::data::model::{GENE_PAIRS, GENES};
use crate::stats::correlation::{StatsError, kendall_tau};

// ---------------------------------------------------------------------------
// Edge classification
// ---------------------------------------------------------------------------

/// Tau threshold separating strong from weak association.
pub const STRONG_TAU: f64 = 0.5;

/// Binary association class of a gene pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
}

impl Strength {
    /// Strong iff `tau >= STRONG_TAU`.  An undefined (NaN) tau is weak.
    pub fn classify(tau: f64) -> Self {
        if tau >= STRONG_TAU {
            Strength::Strong
        } else {
            Strength::Weak
        }
    }
}

/// One unordered gene pair with its coefficient and classification.
/// `a` and `b` are panel indices with `a < b`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub tau: f64,
    pub strength: Strength,
}

// ---------------------------------------------------------------------------
// GeneNetwork – complete graph over the panel
// ---------------------------------------------------------------------------

/// A complete co-occurrence graph over the nine panel genes: every pair is
/// present as exactly one edge, tagged strong or weak.  Built once, never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct GeneNetwork {
    edges: Vec<Edge>,
}

impl GeneNetwork {
    /// Score all C(9,2) gene pairs of a group matrix.
    pub fn from_matrix(matrix: &GeneMatrix) -> Result<Self, StatsError> {
        let mut edges = Vec::with_capacity(GENE_PAIRS);
        for a in 0..GENES.len() {
            for b in (a + 1)..GENES.len() {
                let tau = kendall_tau(matrix.column(a), matrix.column(b))?;
                edges.push(Edge {
                    a,
                    b,
                    tau,
                    strength: Strength::classify(tau),
                });
            }
        }
        Ok(GeneNetwork { edges })
    }

    #[cfg(test)]
    pub(crate) fn from_edges(edges: Vec<Edge>) -> Self {
        GeneNetwork { edges }
    }

    /// All edges, panel-pair order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The strong-edge subset.
    pub fn strong_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| e.strength == Strength::Strong)
    }

    /// The weak-edge subset.
    pub fn weak_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.strength == Strength::Weak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every column is a strictly increasing sequence, so every pair is
    /// perfectly concordant.
    fn concordant_matrix() -> GeneMatrix {
        let columns = (0..GENES.len())
            .map(|g| (1..=4).map(|s| ((g + 1) * s) as f64).collect())
            .collect();
        GeneMatrix::from_columns(columns)
    }

    #[test]
    fn network_is_always_complete() {
        let net = GeneNetwork::from_matrix(&concordant_matrix()).unwrap();
        assert_eq!(net.edges().len(), GENE_PAIRS);
        assert_eq!(net.strong_edges().count() + net.weak_edges().count(), GENE_PAIRS);
    }

    #[test]
    fn concordant_pairs_are_strong_with_tau_one() {
        let net = GeneNetwork::from_matrix(&concordant_matrix()).unwrap();
        for e in net.edges() {
            assert!((e.tau - 1.0).abs() < 1e-12);
            assert_eq!(e.strength, Strength::Strong);
        }
    }

    #[test]
    fn classification_boundary_is_inclusive() {
        assert_eq!(Strength::classify(0.5), Strength::Strong);
        assert_eq!(Strength::classify(1.0), Strength::Strong);
        assert_eq!(Strength::classify(0.4999), Strength::Weak);
        assert_eq!(Strength::classify(-1.0), Strength::Weak);
        assert_eq!(Strength::classify(f64::NAN), Strength::Weak);
    }

    #[test]
    fn rescoring_the_same_matrix_is_deterministic() {
        let matrix = concordant_matrix();
        let first = GeneNetwork::from_matrix(&matrix).unwrap();
        let second = GeneNetwork::from_matrix(&matrix).unwrap();
        for (a, b) in first.edges().iter().zip(second.edges()) {
            assert_eq!(a.a, b.a);
            assert_eq!(a.b, b.b);
            assert_eq!(a.tau.to_bits(), b.tau.to_bits());
            assert_eq!(a.strength, b.strength);
        }
    }
}
