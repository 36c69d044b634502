/// Data layer: core types, loading, filtering and derived view-state.
///
/// Architecture:
/// ```text
///  professionals.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  worker thread: parse file → Vec<Profile>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  full dataset → option lists, counts
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  search + facet predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered profiles → CSV
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
