//! Binning and aggregation of abundances against protein properties.
//!
//! Each abundance entry is normalized by the run's total abundance and the
//! resulting weight is added to one molecular weight bucket, one isoelectric
//! point bucket and the entry of its function label.

use protdist_core::models::{AbundanceStore, RecordStore};

use crate::bins::BinSchema;
use crate::config::DistConfig;
use crate::errors::DistError;
use crate::models::{DistributionReport, FunctionAggregator, Histogram};

/// Trait for computing normalized distributions of protein abundances.
pub trait AbundanceDistributions {
    /// Fold every abundance entry into the two histograms and the function
    /// aggregator.
    ///
    /// Entries are processed in ascending identifier order so repeated runs
    /// sum in the same order. Fails if the total abundance is zero or not
    /// finite, if an amount is negative, or if an entry has no matching
    /// protein record.
    fn bin_and_aggregate(
        &self,
        records: &RecordStore,
        mw_bins: &BinSchema,
        pi_bins: &BinSchema,
    ) -> Result<DistributionReport, DistError>;

    /// [AbundanceDistributions::bin_and_aggregate] with the bins of `config`.
    fn distributions(
        &self,
        records: &RecordStore,
        config: &DistConfig,
    ) -> Result<DistributionReport, DistError> {
        self.bin_and_aggregate(records, &config.mw_bins, &config.pi_bins)
    }
}

impl AbundanceDistributions for AbundanceStore {
    fn bin_and_aggregate(
        &self,
        records: &RecordStore,
        mw_bins: &BinSchema,
        pi_bins: &BinSchema,
    ) -> Result<DistributionReport, DistError> {
        let total = self.total();
        if total == 0.0 {
            return Err(DistError::ZeroTotalAbundance);
        }
        if !total.is_finite() {
            return Err(DistError::NonFiniteTotalAbundance(total));
        }

        let mut mw_histogram = Histogram::new(mw_bins.clone());
        let mut pi_histogram = Histogram::new(pi_bins.clone());
        let mut functions = FunctionAggregator::default();

        let entries = self.sorted_entries();
        for entry in &entries {
            let record = records
                .get(&entry.id)
                .ok_or_else(|| DistError::MissingRecord(entry.id.clone()))?;

            if entry.amount < 0.0 {
                return Err(DistError::NegativeAbundance {
                    id: entry.id.clone(),
                    amount: entry.amount,
                });
            }
            let weight = entry.amount / total;

            mw_histogram
                .add(record.molecular_weight, weight)
                .ok_or_else(|| DistError::UnbinnableValue {
                    id: record.id.clone(),
                    value: record.molecular_weight,
                })?;
            pi_histogram
                .add(record.isoelectric_point, weight)
                .ok_or_else(|| DistError::UnbinnableValue {
                    id: record.id.clone(),
                    value: record.isoelectric_point,
                })?;
            functions.add(&record.function, weight);
        }

        log::debug!(
            "binned {} abundance entries against {} protein records",
            entries.len(),
            records.len()
        );

        Ok(DistributionReport {
            mw_histogram,
            pi_histogram,
            functions,
            processed: entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use protdist_core::models::{AbundanceEntry, AbundanceTransform, ProteinRecord};

    use crate::consts::{MW_BINS, PI_BINS};

    const TOLERANCE: f64 = 1e-9;

    fn abundances(data: &str, transform: AbundanceTransform) -> AbundanceStore {
        AbundanceStore::from_reader(Cursor::new(data), "inline", transform).unwrap()
    }

    #[fixture]
    fn config() -> DistConfig {
        DistConfig::default()
    }

    #[fixture]
    fn records() -> RecordStore {
        RecordStore::from(vec![
            ProteinRecord::new("P69905", 15258.0, 8.72, "oxygen transport"),
            ProteinRecord::new("P68871", 15998.0, 6.75, "oxygen transport"),
            ProteinRecord::new("P02768", 66472.0, 5.92, "transport"),
            ProteinRecord::new("P00533", 134277.0, 6.26, "signaling"),
            ProteinRecord::new("P04637", 43653.0, 6.33, "transcription regulation"),
            ProteinRecord::new("Q9XYZ1", 20000.0, 10.0, "other"),
        ])
    }

    #[rstest]
    fn test_two_record_scenario() {
        let records = RecordStore::from(vec![
            ProteinRecord::new("A", 15000.0, 5.0, "transport"),
            ProteinRecord::new("B", 20000.0, 5.0, "transport"),
        ]);
        let abundances = abundances("A 1.0\nB 1.0\n", AbundanceTransform::Identity);
        let mw_bins = BinSchema::try_from(&MW_BINS[..]).unwrap();
        let pi_bins = BinSchema::try_from(&PI_BINS[..]).unwrap();

        let report = abundances
            .bin_and_aggregate(&records, &mw_bins, &pi_bins)
            .unwrap();

        assert_eq!(report.mw_histogram.values(), &[0.5, 0.5, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(report.functions.get("transport"), Some(1.0));
        assert_eq!(report.processed, 2);
    }

    #[rstest]
    fn test_log2_abundances(records: RecordStore, config: DistConfig) {
        // 2^3, 2^1, 2^1, 2^0, 2^0, 2^1 -> total of 16
        let abundances = abundances(
            "P69905 3\nP68871 1\nP02768 1\nP00533 0\nP04637 0\nQ9XYZ1 1\n",
            AbundanceTransform::Log2ToLinear,
        );

        let report = abundances.distributions(&records, &config).unwrap();

        assert_eq!(
            report.mw_histogram.values(),
            &[0.625, 0.125, 0.0625, 0.125, 0.0, 0.0625]
        );
        assert_eq!(
            report.pi_histogram.values(),
            &[0.0, 0.0, 0.125, 0.25, 0.0, 0.5, 0.0, 0.125]
        );
        assert_eq!(report.functions.get("oxygen transport"), Some(0.625));
        assert_eq!(report.functions.get("other"), Some(0.125));
        assert_eq!(report.functions.len(), 5);
    }

    #[rstest]
    fn test_normalization(records: RecordStore, config: DistConfig) {
        let abundances = abundances(
            "P69905 21.3\nP68871 19.7\nP02768 25.1\nP00533 17.02\nP04637 18.5\nQ9XYZ1 22.9\n",
            AbundanceTransform::Log2ToLinear,
        );

        let report = abundances.distributions(&records, &config).unwrap();

        assert!((report.mw_histogram.total() - 1.0).abs() < TOLERANCE);
        assert!((report.pi_histogram.total() - 1.0).abs() < TOLERANCE);
        assert!((report.functions.total() - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn test_determinism(records: RecordStore, config: DistConfig) {
        let data = "Q9XYZ1 0.3\nP04637 0.7\nP69905 0.1\nP00533 0.9\nP02768 0.2\nP68871 0.6\n";
        let first = abundances(data, AbundanceTransform::Identity)
            .distributions(&records, &config)
            .unwrap();
        let second = abundances(data, AbundanceTransform::Identity)
            .distributions(&records, &config)
            .unwrap();

        assert_eq!(first.mw_histogram, second.mw_histogram);
        assert_eq!(first.pi_histogram, second.pi_histogram);
        assert_eq!(
            first.functions.sorted_with_other_last("other"),
            second.functions.sorted_with_other_last("other")
        );
    }

    #[rstest]
    fn test_missing_record_names_identifier(records: RecordStore, config: DistConfig) {
        let abundances = abundances("P69905 1\nP99999 1\n", AbundanceTransform::Identity);

        let err = abundances.distributions(&records, &config).unwrap_err();

        assert_eq!(err, DistError::MissingRecord("P99999".to_string()));
        assert!(err.to_string().contains("P99999"));
    }

    #[rstest]
    fn test_zero_total_is_an_error(records: RecordStore, config: DistConfig) {
        let abundances = abundances("P69905 0\nP68871 0\n", AbundanceTransform::Identity);

        assert_eq!(
            abundances.distributions(&records, &config).unwrap_err(),
            DistError::ZeroTotalAbundance
        );
    }

    #[rstest]
    fn test_negative_amounts_never_reach_the_histograms(config: DistConfig) {
        let records = RecordStore::from(vec![
            ProteinRecord::new("A", 15000.0, 5.0, "transport"),
            ProteinRecord::new("B", 50000.0, 5.0, "transport"),
        ]);
        let abundances = abundances("A 2\nB -1\n", AbundanceTransform::Identity);

        let report = abundances.distributions(&records, &config).unwrap();

        assert_eq!(report.mw_histogram.values(), &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(report.processed, 1);
    }

    #[rstest]
    fn test_negative_entry_is_an_error(records: RecordStore, config: DistConfig) {
        let mut abundances = AbundanceStore::new(AbundanceTransform::Identity);
        abundances.insert(AbundanceEntry {
            id: "P69905".to_string(),
            raw_amount: 3.0,
            amount: 3.0,
        });
        abundances.insert(AbundanceEntry {
            id: "P68871".to_string(),
            raw_amount: -1.0,
            amount: -1.0,
        });

        assert_eq!(
            abundances.distributions(&records, &config).unwrap_err(),
            DistError::NegativeAbundance {
                id: "P68871".to_string(),
                amount: -1.0
            }
        );
    }

    #[rstest]
    fn test_nan_property_is_unbinnable(config: DistConfig) {
        let records = RecordStore::from(vec![
            ProteinRecord::new("A", 15000.0, 5.0, "transport"),
            ProteinRecord::new("X", f64::NAN, 7.0, "other"),
        ]);
        let abundances = abundances("A 1\nX 1\n", AbundanceTransform::Identity);

        let err = abundances.distributions(&records, &config).unwrap_err();

        assert!(matches!(
            &err,
            DistError::UnbinnableValue { id, value } if id == "X" && value.is_nan()
        ));
        assert!(err.to_string().contains("X"));
    }

    #[rstest]
    fn test_empty_abundances_is_an_error(records: RecordStore, config: DistConfig) {
        let abundances = AbundanceStore::default();

        assert_eq!(
            abundances.distributions(&records, &config).unwrap_err(),
            DistError::ZeroTotalAbundance
        );
    }

    #[rstest]
    fn test_non_finite_total_is_an_error(records: RecordStore, config: DistConfig) {
        let abundances = abundances("P69905 1e308\nP68871 1e308\n", AbundanceTransform::Identity);

        assert!(matches!(
            abundances.distributions(&records, &config),
            Err(DistError::NonFiniteTotalAbundance(_))
        ));
    }
}
