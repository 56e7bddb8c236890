/// Scour model evaluation: the four live-bed equations, the per-study
/// comparison built from them, and simple agreement statistics.
///
/// ```text
///  HydraulicRow (live-bed)
///        │
///        ▼
///   ┌────────────┐
///   │ comparison │  group by study → ScourInputs per row
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ equations  │  Straub / Komura / Gill / Lim & Cheng → y2
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │    fit     │  RMSE, mean computed/measured
///   └────────────┘
/// ```

pub mod comparison;
pub mod equations;
pub mod fit;
