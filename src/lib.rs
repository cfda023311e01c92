//! Estimate the share of US men meeting a set of demographic criteria.
//!
//! ```
//! use reality_check::data::estimate::estimate;
//! use reality_check::data::model::{FilterSpec, Height, Race};
//! use reality_check::data::tables::DistributionTables;
//!
//! let tables = DistributionTables::default();
//! let spec = FilterSpec {
//!     min_age: 25,
//!     max_age: 35,
//!     race: Race::Any,
//!     min_height: Some(Height::new(6, 0)),
//!     ..FilterSpec::default()
//! };
//! let est = estimate(&tables, &spec);
//! assert!(est.probability > 0.0 && est.probability < 0.05);
//! ```

pub mod data;
pub mod format;
pub mod verdict;

pub use data::estimate::estimate;
pub use data::model::{Estimate, Factors, FilterSpec, Height, Race};
pub use data::tables::{DistributionTables, TableError};
