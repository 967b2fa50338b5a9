/// Data layer: record types, errors, and the loaders.
///
/// Architecture:
/// ```text
///  uspop.csv
///      │
///      ▼
///   ┌──────────┐
///   │  loader  │  skip header, split on ',', take fields 3 and 4
///   └──────────┘
///      │
///      ▼
///   ┌───────────────┐
///   │ ColumnBuffers │  Vec<String> lat, Vec<String> long
///   └───────────────┘
///      │
///      ▼
///   ┌─────────────┐
///   │ Coordinates │  Array1<f64> lat, Array1<f64> long
///   └─────────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::LoadError;
pub use loader::{load, LoadOutcome, Strategy};
pub use model::{ColumnBuffers, Coordinates};
