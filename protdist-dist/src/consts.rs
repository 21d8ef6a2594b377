// Molecular weight bin thresholds in Daltons: < 20 kDa, 20-40, ..., >= 100 kDa.
// The final threshold is repeated to mark the overflow bin.
pub const MW_BINS: [f64; 6] = [20000.0, 40000.0, 60000.0, 80000.0, 100000.0, 100000.0];

// Isoelectric point bin thresholds in pH units: < 4, 4-5, ..., >= 10.
pub const PI_BINS: [f64; 8] = [4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 10.0];

// Normalized values sum to 1.0; reports show percentages.
pub const DEFAULT_SCALE: f64 = 100.0;

pub const OTHER_LABEL: &str = "other";
