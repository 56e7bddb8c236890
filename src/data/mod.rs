/// Data layer: core types, loading, and regime selection.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ContractionTable (headers trimmed)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ ContractionTable │  Vec<MeasurementRow>, column names
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  scour regime → row indices / subset
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
