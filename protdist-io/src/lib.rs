//! # Report output for protein abundance distributions.
//!
//! Renders a [protdist_dist::DistributionReport] as three small comma separated
//! text reports (isoelectric point histogram, molecular weight histogram and
//! function breakdown) and writes them next to the abundance file they came from.
//!
pub mod consts;
pub mod error;
pub mod report;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use report::*;
