use fxhash::FxHashMap as HashMap;

use crate::bins::BinSchema;
use crate::errors::DistError;

/// Normalized abundance accumulated per bucket of one [BinSchema].
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    schema: BinSchema,
    values: Vec<f64>,
}

impl Histogram {
    pub fn new(schema: BinSchema) -> Self {
        let values = vec![0.0; schema.n_buckets()];
        Histogram { schema, values }
    }

    ///
    /// Add `weight` to the bucket that `x` falls in.
    ///
    /// Returns the bucket index, or `None` (adding nothing) when `x` is NaN.
    pub fn add(&mut self, x: f64, weight: f64) -> Option<usize> {
        let bucket = self.schema.assign(x)?;
        self.values[bucket] += weight;
        Some(bucket)
    }

    ///
    /// Fold another histogram over the same schema into this one.
    ///
    /// Fails, leaving `self` untouched, when the schemas differ.
    pub fn merge(&mut self, other: &Histogram) -> Result<(), DistError> {
        if self.schema != other.schema {
            return Err(DistError::SchemaMismatch);
        }
        for (value, other_value) in self.values.iter_mut().zip(&other.values) {
            *value += other_value;
        }
        Ok(())
    }

    pub fn schema(&self) -> &BinSchema {
        &self.schema
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Normalized abundance accumulated per function label.
#[derive(Debug, Clone, Default)]
pub struct FunctionAggregator {
    values: HashMap<String, f64>,
}

impl FunctionAggregator {
    pub fn add(&mut self, label: &str, weight: f64) {
        match self.values.get_mut(label) {
            Some(value) => *value += weight,
            None => {
                self.values.insert(label.to_string(), weight);
            }
        }
    }

    pub fn merge(&mut self, other: &FunctionAggregator) {
        for (label, weight) in &other.values {
            self.add(label, *weight);
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.values.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    ///
    /// Labels with their values, sorted ascending by label except for
    /// `other_label`, which always comes last when present.
    ///
    pub fn sorted_with_other_last(&self, other_label: &str) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .values
            .iter()
            .filter(|(label, _)| label.as_str() != other_label)
            .map(|(label, value)| (label.as_str(), *value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        if let Some((label, value)) = self.values.get_key_value(other_label) {
            entries.push((label.as_str(), *value));
        }

        entries
    }
}

/// Everything a single binning pass produces.
#[derive(Debug, Clone)]
pub struct DistributionReport {
    pub mw_histogram: Histogram,
    pub pi_histogram: Histogram,
    pub functions: FunctionAggregator,
    /// Number of abundance entries folded into the accumulators
    pub processed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::consts::OTHER_LABEL;

    #[rstest]
    fn test_histogram_add() {
        let schema = BinSchema::new(vec![1.0, 2.0, 2.0]).unwrap();
        let mut hist = Histogram::new(schema);

        assert_eq!(hist.add(0.5, 0.25), Some(0));
        assert_eq!(hist.add(1.0, 0.25), Some(1));
        assert_eq!(hist.add(7.0, 0.5), Some(2));
        assert_eq!(hist.add(f64::NAN, 0.5), None);

        assert_eq!(hist.values(), &[0.25, 0.25, 0.5]);
        assert_eq!(hist.total(), 1.0);
    }

    #[rstest]
    fn test_histogram_merge() {
        let schema = BinSchema::new(vec![1.0, 2.0, 2.0]).unwrap();
        let mut left = Histogram::new(schema.clone());
        let mut right = Histogram::new(schema);
        left.add(0.0, 0.5);
        right.add(0.0, 0.25);
        right.add(3.0, 0.25);

        left.merge(&right).unwrap();
        assert_eq!(left.values(), &[0.75, 0.0, 0.25]);
    }

    #[rstest]
    fn test_histogram_merge_rejects_other_schema() {
        let mut left = Histogram::new(BinSchema::new(vec![1.0, 2.0, 2.0]).unwrap());
        let mut right = Histogram::new(BinSchema::new(vec![1.0, 5.0, 5.0]).unwrap());
        left.add(0.0, 0.5);
        right.add(3.0, 0.25);

        assert_eq!(left.merge(&right), Err(DistError::SchemaMismatch));
        assert_eq!(left.values(), &[0.5, 0.0, 0.0]);

        let mut shorter = Histogram::new(BinSchema::new(vec![1.0, 1.0]).unwrap());
        assert_eq!(shorter.merge(&left), Err(DistError::SchemaMismatch));
    }

    #[rstest]
    fn test_aggregator_creates_entries_lazily() {
        let mut functions = FunctionAggregator::default();
        assert!(functions.is_empty());

        functions.add("transport", 0.25);
        functions.add("transport", 0.25);
        functions.add("signaling", 0.5);

        assert_eq!(functions.len(), 2);
        assert_eq!(functions.get("transport"), Some(0.5));
        assert_eq!(functions.get("kinase"), None);
        assert_eq!(functions.total(), 1.0);
    }

    #[rstest]
    fn test_other_label_sorted_last() {
        let mut functions = FunctionAggregator::default();
        for label in ["zinc finger", "other", "apoptosis", "metabolism"] {
            functions.add(label, 0.25);
        }

        let labels: Vec<&str> = functions
            .sorted_with_other_last(OTHER_LABEL)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["apoptosis", "metabolism", "zinc finger", "other"]);
    }

    #[rstest]
    fn test_sorted_without_other_label() {
        let mut functions = FunctionAggregator::default();
        functions.add("b", 0.5);
        functions.add("a", 0.5);

        assert_eq!(
            functions.sorted_with_other_last(OTHER_LABEL),
            vec![("a", 0.5), ("b", 0.5)]
        );
    }

    #[rstest]
    fn test_aggregator_merge() {
        let mut left = FunctionAggregator::default();
        let mut right = FunctionAggregator::default();
        left.add("a", 0.5);
        right.add("a", 0.25);
        right.add("b", 0.25);

        left.merge(&right);
        assert_eq!(left.get("a"), Some(0.75));
        assert_eq!(left.get("b"), Some(0.25));
    }
}
