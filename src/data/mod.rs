/// Data layer: core types, profile file parsing, and channel discovery.
///
/// Architecture:
/// ```text
///   channel1/5mm_1.hst, 5mm_2.hst, 10mm_1.hst …
///        │
///        ▼
///   ┌───────────┐
///   │ discovery │  list *.hst → DistanceGroup per `{distance}mm_`
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  sniff format → RawProfile
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │  analysis::*  │  trim → normalise → resample → median
///   └───────────────┘
/// ```

pub mod discovery;
pub mod loader;
pub mod model;
pub mod output;
