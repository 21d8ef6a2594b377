pub mod abundance;
pub mod protein;
pub mod record_store;

// re-export for cleaner imports
pub use self::abundance::{AbundanceEntry, AbundanceStore, AbundanceTransform};
pub use self::protein::ProteinRecord;
pub use self::record_store::RecordStore;
