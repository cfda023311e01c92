/// Data layer: reference tables, criteria types and the estimate.
///
/// Architecture:
/// ```text
///   embedded literals ──┐        tables .json
///                       │             │
///                       ▼             ▼
///                  ┌──────────────────────┐
///                  │ tables / loader      │  DistributionTables (validated)
///                  └──────────────────────┘
///                             │ &DistributionTables
///                             ▼
///   FilterSpec ──────► ┌──────────┐
///                      │ estimate │  multiply independent factors
///                      └──────────┘
///                             │
///                             ▼
///                   Estimate { probability, count, factors }
/// ```

pub mod estimate;
pub mod loader;
pub mod model;
pub mod tables;
