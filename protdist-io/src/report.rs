use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use protdist_dist::{DistConfig, DistributionReport, FunctionAggregator, Histogram};

use crate::consts::{FUNCTIONS_SUFFIX, MW_HIST_SUFFIX, MW_LABEL_DIVISOR, PI_HIST_SUFFIX, PI_LABEL_DIVISOR};
use crate::error::{ReportError, Result};

///
/// Output locations of the three reports of one run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub pi_hist: PathBuf,
    pub mw_hist: PathBuf,
    pub functions: PathBuf,
}

impl ReportPaths {
    ///
    /// Place the reports next to the abundance file, named after it with its
    /// extension (and a trailing `.gz`) removed, e.g. `run1.txt` gives
    /// `run1-pi_hist.out.txt`.
    ///
    pub fn from_abundance_path(path: &Path) -> ReportPaths {
        let path = match path.extension().is_some_and(|ext| ext == "gz") {
            true => path.with_extension(""),
            false => path.to_owned(),
        };
        let base = path.with_extension("");

        let with_suffix = |suffix: &str| {
            let mut name: OsString = base.clone().into_os_string();
            name.push(suffix);
            PathBuf::from(name)
        };

        ReportPaths {
            pi_hist: with_suffix(PI_HIST_SUFFIX),
            mw_hist: with_suffix(MW_HIST_SUFFIX),
            functions: with_suffix(FUNCTIONS_SUFFIX),
        }
    }
}

fn threshold_label(threshold: f64, divisor: f64) -> i64 {
    (threshold / divisor).trunc() as i64
}

///
/// Render a histogram, one bucket per line.
///
/// Thresholds are divided by `divisor` and truncated for the labels; values
/// are multiplied by `scale`.
///
/// # Arguments
/// - hist: the histogram to render
/// - divisor: unit conversion applied to the thresholds
/// - scale: factor applied to every value
pub fn render_histogram(hist: &Histogram, divisor: f64, scale: f64) -> String {
    let t = hist.schema().thresholds();
    let values = hist.values();
    let n = t.len();

    let mut out = format!(
        "< {}, {:8.3}\n",
        threshold_label(t[0], divisor),
        values[0] * scale
    );

    for i in 0..n - 2 {
        out.push_str(&format!(
            "{}-{}, {:8.3}\n",
            threshold_label(t[i], divisor),
            threshold_label(t[i + 1], divisor),
            values[i + 1] * scale
        ));
    }

    out.push_str(&format!(
        "> {}, {:8.3}\n",
        threshold_label(t[n - 1], divisor),
        values[n - 1] * scale
    ));

    out
}

///
/// Render the function aggregation, sorted by label with `other_label` last.
///
pub fn render_functions(functions: &FunctionAggregator, other_label: &str, scale: f64) -> String {
    functions
        .sorted_with_other_last(other_label)
        .into_iter()
        .map(|(label, value)| format!("{}, {:8.3}\n", label, value * scale))
        .collect()
}

///
/// The three reports of a run, fully rendered.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReports {
    pub pi_hist: String,
    pub mw_hist: String,
    pub functions: String,
}

impl RenderedReports {
    pub fn render(report: &DistributionReport, config: &DistConfig) -> RenderedReports {
        RenderedReports {
            pi_hist: render_histogram(&report.pi_histogram, PI_LABEL_DIVISOR, config.scale),
            mw_hist: render_histogram(&report.mw_histogram, MW_LABEL_DIVISOR, config.scale),
            functions: render_functions(&report.functions, &config.other_label, config.scale),
        }
    }

    ///
    /// Write all three reports, or none of them.
    ///
    /// Every report is first written to a temporary file next to its target.
    /// Only once all three are staged are they moved into place; if a move
    /// fails, the reports already moved are removed again.
    ///
    pub fn write(&self, paths: &ReportPaths) -> Result<()> {
        let targets = [
            (&paths.pi_hist, &self.pi_hist),
            (&paths.mw_hist, &self.mw_hist),
            (&paths.functions, &self.functions),
        ];

        let mut staged = Vec::with_capacity(targets.len());
        for (path, contents) in targets {
            staged.push((path, stage_file(path, contents)?));
        }

        let mut persisted: Vec<&PathBuf> = Vec::with_capacity(staged.len());
        for (path, file) in staged {
            if let Err(e) = file.persist(path) {
                for done in &persisted {
                    if let Err(remove_err) = fs::remove_file(done) {
                        log::warn!("Could not remove report {}: {}", done.display(), remove_err);
                    }
                }
                return Err(ReportError::Write {
                    path: path.to_owned(),
                    source: e.error,
                });
            }
            persisted.push(path);
        }

        for path in persisted {
            log::info!("Report written to {}", path.display());
        }
        Ok(())
    }
}

fn stage_file(path: &Path, contents: &str) -> Result<NamedTempFile> {
    let to_report_error = |source| ReportError::Write {
        path: path.to_owned(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(to_report_error)?;
    file.write_all(contents.as_bytes()).map_err(to_report_error)?;
    file.flush().map_err(to_report_error)?;

    Ok(file)
}

pub trait ReportWrite {
    ///
    /// Render every report, then write them to disk.
    ///
    /// Either all three reports end up on disk or none do.
    ///
    /// # Arguments
    /// - config: scale and "other" label used for rendering
    /// - paths: where each report goes
    fn write_reports(&self, config: &DistConfig, paths: &ReportPaths) -> Result<()>;
}

impl ReportWrite for DistributionReport {
    fn write_reports(&self, config: &DistConfig, paths: &ReportPaths) -> Result<()> {
        RenderedReports::render(self, config).write(paths)
    }
}
