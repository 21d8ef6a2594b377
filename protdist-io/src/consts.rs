pub const PI_HIST_SUFFIX: &str = "-pi_hist.out.txt";
pub const MW_HIST_SUFFIX: &str = "-mw_hist.out.txt";
pub const FUNCTIONS_SUFFIX: &str = "-proc_hist.out.txt";

// Molecular weight thresholds are reported in kDa.
pub const MW_LABEL_DIVISOR: f64 = 1000.0;
pub const PI_LABEL_DIVISOR: f64 = 1.0;
