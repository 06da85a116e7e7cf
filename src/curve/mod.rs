/// Curve layer: reference table, interpolant and resampled output.
///
/// ```text
///   klam.dat
///      │
///      ▼
///  ┌──────────┐
///  │  loader  │  parse + sort + reject duplicates → ReferenceCurve
///  └──────────┘
///      │
///      ▼
///  ┌──────────┐
///  │  interp  │  LinearInterpolant, evaluated on a TargetGrid
///  └──────────┘
///      │
///      ▼
///  ResampledCurve  (`%.3f %.5f` rows)
/// ```

pub mod interp;
pub mod loader;
pub mod model;
