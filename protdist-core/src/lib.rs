//! Core data model for protdist.
//!
//! Holds the two read-only inputs of a distribution run:
//!
//! - [RecordStore]: per-protein molecular weight, isoelectric point and function label
//! - [AbundanceStore]: per-protein abundances after an [AbundanceTransform], plus their total
//!
//! # Example
//!
//! ```no_run
//! use protdist_core::models::{AbundanceStore, AbundanceTransform, RecordStore};
//!
//! let records = RecordStore::try_from("proteins.txt").unwrap();
//! let abundances =
//!     AbundanceStore::from_path("abundances.txt", AbundanceTransform::Log2ToLinear).unwrap();
//!
//! for id in abundances.sorted_ids() {
//!     println!("{} -> {:?}", id, records.get(id));
//! }
//! ```

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::ProteinDataError;
pub use models::{AbundanceStore, AbundanceTransform, ProteinRecord, RecordStore};
