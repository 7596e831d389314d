/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  nama_10_gdp CSV
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalise → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Observation>, vocabularies
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  exact-match predicates → chart series
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
