/// Network layer: complete co-occurrence graphs over the gene panel,
/// strong-subgraph metrics, and the shared 2-D layout.

pub mod graph;
pub mod layout;
pub mod metrics;
