/// Data layer: core types, loading, and group extraction.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ObservationTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ ObservationTable  │  Vec<Observation>, column index
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group    │  label predicate → GeneMatrix (9 columns)
///   └──────────┘
/// ```

pub mod group;
pub mod loader;
pub mod model;
