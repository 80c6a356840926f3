/// Statistics layer: rank-correlation primitives for pairwise gene
/// association scoring.

pub mod correlation;
