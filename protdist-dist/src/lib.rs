//! Protein abundance distributions.
//!
//! This crate normalizes the abundances of one measurement run and summarizes
//! them along three axes:
//!
//! - molecular weight, binned with a [BinSchema]
//! - isoelectric point, binned with a second [BinSchema]
//! - function label, summed per label
//!
//! # Example
//!
//! ```no_run
//! use protdist_core::models::{AbundanceStore, RecordStore};
//! use protdist_dist::{AbundanceDistributions, DistConfig};
//!
//! let config = DistConfig::default();
//! let records = RecordStore::try_from("proteins.txt").unwrap();
//! let abundances = AbundanceStore::from_path("abundances.txt", config.transform).unwrap();
//!
//! let report = abundances.distributions(&records, &config).unwrap();
//! println!("{:?}", report.mw_histogram.values());
//! ```

pub mod bins;
pub mod config;
pub mod consts;
pub mod distributions;
pub mod errors;
pub mod models;

// re-exports
pub use bins::BinSchema;
pub use config::DistConfig;
pub use distributions::AbundanceDistributions;
pub use errors::DistError;
pub use models::{DistributionReport, FunctionAggregator, Histogram};
