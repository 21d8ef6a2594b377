use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DistError {
    #[error("Invalid bin schema: {0}")]
    InvalidBinSchema(String),

    #[error("No protein data found for abundance entry {0}")]
    MissingRecord(String),

    #[error("Total abundance is zero; cannot normalize abundances")]
    ZeroTotalAbundance,

    #[error("Total abundance is not finite ({0}); cannot normalize abundances")]
    NonFiniteTotalAbundance(f64),

    #[error("Value {value} of protein {id} falls in no bin")]
    UnbinnableValue { id: String, value: f64 },

    #[error("Abundance of {id} is negative ({amount})")]
    NegativeAbundance { id: String, amount: f64 },

    #[error("Cannot merge histograms over different bin schemas")]
    SchemaMismatch,
}
