use std::io::BufRead;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap as HashMap;

use crate::errors::ProteinDataError;
use crate::models::ProteinRecord;
use crate::utils::{get_dynamic_reader, strip_comment};

///
/// RecordStore struct, the in-memory representation of an annotated
/// protein data file, keyed by protein identifier.
///
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: HashMap<String, ProteinRecord>,
    pub path: Option<PathBuf>,
}

impl RecordStore {
    ///
    /// Parse an annotated protein data stream.
    ///
    /// Any data line that fails to parse aborts the whole parse.
    ///
    /// # Arguments:
    /// - reader: buffered reader over the protein data
    /// - source_name: name used in error messages, usually the file path
    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Self, ProteinDataError> {
        let mut store = RecordStore::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ProteinDataError::FileReadError {
                path: PathBuf::from(source_name),
                source,
            })?;

            let Some(content) = strip_comment(&line) else {
                continue;
            };

            let record: ProteinRecord =
                content
                    .parse()
                    .map_err(|e: ProteinDataError| ProteinDataError::RecordParseError {
                        source_name: source_name.to_string(),
                        line_number: idx + 1,
                        reason: e.to_string(),
                    })?;

            if let Some(previous) = store.insert(record) {
                log::warn!(
                    "{}: duplicate protein id {} on line {}, replacing earlier entry",
                    source_name,
                    previous.id,
                    idx + 1
                );
            }
        }

        Ok(store)
    }

    ///
    /// Add a record, returning the one it replaced if the id was already present.
    ///
    pub fn insert(&mut self, record: ProteinRecord) -> Option<ProteinRecord> {
        self.records.insert(record.id.clone(), record)
    }

    pub fn get(&self, id: &str) -> Option<&ProteinRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProteinRecord> {
        self.records.values()
    }
}

impl TryFrom<&Path> for RecordStore {
    type Error = ProteinDataError;

    ///
    /// Create a new [RecordStore] from a protein data file.
    ///
    /// # Arguments:
    /// - value: path to the protein data file on disk, optionally gzipped.
    fn try_from(value: &Path) -> Result<Self, ProteinDataError> {
        let reader = get_dynamic_reader(value)?;
        let mut store = RecordStore::from_reader(reader, &value.display().to_string())?;
        store.path = Some(value.to_owned());

        Ok(store)
    }
}

impl TryFrom<&str> for RecordStore {
    type Error = ProteinDataError;

    fn try_from(value: &str) -> Result<Self, ProteinDataError> {
        RecordStore::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for RecordStore {
    type Error = ProteinDataError;

    fn try_from(value: PathBuf) -> Result<Self, ProteinDataError> {
        RecordStore::try_from(value.as_path())
    }
}

impl From<Vec<ProteinRecord>> for RecordStore {
    fn from(records: Vec<ProteinRecord>) -> Self {
        let mut store = RecordStore::default();
        for record in records {
            store.insert(record);
        }
        store
    }
}
