use std::io::BufRead;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap as HashMap;

use crate::errors::ProteinDataError;
use crate::utils::{get_dynamic_reader, strip_comment};

///
/// Transform applied to every raw abundance before normalization.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AbundanceTransform {
    /// `2^x`: turns log2 intensities into linear abundances
    #[default]
    Log2ToLinear,
    /// leaves abundances as-is
    Identity,
}

impl AbundanceTransform {
    pub fn apply(&self, raw: f64) -> f64 {
        match self {
            AbundanceTransform::Log2ToLinear => raw.exp2(),
            AbundanceTransform::Identity => raw,
        }
    }
}

///
/// One successfully parsed line of an abundance list.
///
#[derive(PartialEq, Debug, Clone)]
pub struct AbundanceEntry {
    pub id: String,
    pub raw_amount: f64,
    /// `raw_amount` after the store's transform
    pub amount: f64,
}

impl AbundanceEntry {
    ///
    /// Parse a comment-stripped `<id> <amount>` line.
    ///
    /// Returns `None` for anything that is not exactly two fields with a numeric
    /// amount, for amounts that are (or become, once transformed) non-finite,
    /// and for negative transformed amounts.
    pub fn parse(line: &str, transform: AbundanceTransform) -> Option<AbundanceEntry> {
        let mut fields = line.split_whitespace();
        let (id, amount) = (fields.next()?, fields.next()?);
        if fields.next().is_some() {
            return None;
        }

        let raw_amount = amount.parse::<f64>().ok().filter(|v| v.is_finite())?;
        let amount = Some(transform.apply(raw_amount)).filter(|v| v.is_finite() && *v >= 0.0)?;

        Some(AbundanceEntry {
            id: id.to_string(),
            raw_amount,
            amount,
        })
    }
}

///
/// AbundanceStore struct, the transformed abundances of one measurement run
/// together with their grand total.
///
#[derive(Clone, Debug)]
pub struct AbundanceStore {
    entries: HashMap<String, AbundanceEntry>,
    total: f64,
    transform: AbundanceTransform,
    pub path: Option<PathBuf>,
}

impl AbundanceStore {
    pub fn new(transform: AbundanceTransform) -> Self {
        AbundanceStore {
            entries: HashMap::default(),
            total: 0.0,
            transform,
            path: None,
        }
    }

    ///
    /// Parse an abundance list from disk.
    ///
    /// # Arguments:
    /// - path: path to the abundance file, optionally gzipped
    /// - transform: transform applied to each amount as it is read
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        transform: AbundanceTransform,
    ) -> Result<Self, ProteinDataError> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path)?;
        let mut store = AbundanceStore::from_reader(reader, &path.display().to_string(), transform)?;
        store.path = Some(path.to_owned());

        Ok(store)
    }

    ///
    /// Parse an abundance list stream.
    ///
    /// Lines that fail to parse are dropped; only read failures are errors.
    pub fn from_reader<R: BufRead>(
        reader: R,
        source_name: &str,
        transform: AbundanceTransform,
    ) -> Result<Self, ProteinDataError> {
        let mut store = AbundanceStore::new(transform);

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ProteinDataError::FileReadError {
                path: PathBuf::from(source_name),
                source,
            })?;

            let Some(content) = strip_comment(&line) else {
                continue;
            };

            match AbundanceEntry::parse(content, transform) {
                Some(entry) => {
                    if let Some(previous) = store.insert(entry) {
                        log::warn!(
                            "{}: duplicate protein id {} on line {}, replacing earlier amount",
                            source_name,
                            previous.id,
                            idx + 1
                        );
                    }
                }
                None => {
                    log::debug!("{}: skipping line {}: {:?}", source_name, idx + 1, content);
                }
            }
        }

        Ok(store)
    }

    ///
    /// Add an entry and count its amount towards the total.
    ///
    /// An entry for an id already present replaces the earlier one, but the
    /// total keeps every amount ever added.
    pub fn insert(&mut self, entry: AbundanceEntry) -> Option<AbundanceEntry> {
        self.total += entry.amount;
        self.entries.insert(entry.id.clone(), entry)
    }

    /// Transformed amount for `id`
    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries.get(id).map(|e| e.amount)
    }

    pub fn entry(&self, id: &str) -> Option<&AbundanceEntry> {
        self.entries.get(id)
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn transform(&self) -> AbundanceTransform {
        self.transform
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// Entries in ascending lexical order of their identifiers.
    ///
    pub fn sorted_entries(&self) -> Vec<&AbundanceEntry> {
        let mut entries: Vec<&AbundanceEntry> = self.entries.values().collect();
        entries.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        entries
    }

    pub fn sorted_ids(&self) -> Vec<&str> {
        self.sorted_entries()
            .into_iter()
            .map(|e| e.id.as_str())
            .collect()
    }
}

impl Default for AbundanceStore {
    fn default() -> Self {
        AbundanceStore::new(AbundanceTransform::default())
    }
}
