//! Generic CSV-backed registry store.

use std::{
    collections::HashSet,
    fs::{File, OpenOptions},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use crate::{RegistryError, RegistryRecord};

/// A file-backed registry of records of type `R`.
///
/// The store owns its file and is the sole writer. Appends are cheap;
/// deletion rewrites the whole file (header plus remaining rows). None of the
/// operations lock the file: the design assumes a single active process, and
/// a crash mid-rewrite can truncate the registry.
#[derive(Debug, Clone)]
pub struct Registry<R> {
    /// Path to the backing CSV file.
    path: PathBuf,
    /// Marker for the record type stored in this registry.
    _record: PhantomData<R>,
}

impl<R: RegistryRecord> Registry<R> {
    /// Creates a handle for the registry file at `path`.
    ///
    /// The file is not touched until an operation runs; call
    /// [`Self::ensure_initialized`] to create it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the registry file with its canonical header if it does not exist.
    ///
    /// Idempotent: an existing file is left untouched, rows included.
    pub fn ensure_initialized(&self) -> Result<(), RegistryError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| RegistryError::from_io(&self.path, e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| RegistryError::from_csv(&self.path, e))?;
        writer
            .write_record(R::HEADERS)
            .map_err(|e| RegistryError::from_csv(&self.path, e))?;
        writer
            .flush()
            .map_err(|e| RegistryError::from_io(&self.path, e))?;
        Ok(())
    }

    /// Returns a lazy iterator over all records in file order.
    ///
    /// Each call re-opens the file from the start, so the scan is restartable.
    pub fn scan(&self) -> Result<Scan<R>, RegistryError> {
        let reader = csv::Reader::from_path(&self.path)
            .map_err(|e| RegistryError::from_csv(&self.path, e))?;
        Ok(Scan {
            inner: reader.into_deserialize(),
            path: self.path.clone(),
        })
    }

    /// Reads all records into memory, in file order.
    pub fn records(&self) -> Result<Vec<R>, RegistryError> {
        self.scan()?.collect()
    }

    /// Reads all records matching `predicate`, in file order.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Result<Vec<R>, RegistryError> {
        let mut matches = Vec::new();
        for record in self.scan()? {
            let record = record?;
            if predicate(&record) {
                matches.push(record);
            }
        }
        Ok(matches)
    }

    /// Returns the set of primary keys of all live records.
    pub fn keys(&self) -> Result<HashSet<String>, RegistryError> {
        let mut keys = HashSet::new();
        for record in self.scan()? {
            keys.insert(record?.key().to_string());
        }
        Ok(keys)
    }

    /// Appends one record to the end of the file.
    ///
    /// The caller is responsible for having checked uniqueness invariants;
    /// there is no transactional check-then-append.
    pub fn append(&self, record: &R) -> Result<(), RegistryError> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| RegistryError::from_io(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|e| RegistryError::from_csv(&self.path, e))?;
        writer
            .flush()
            .map_err(|e| RegistryError::from_io(&self.path, e))?;
        Ok(())
    }

    /// Removes every record whose `field` equals `value`, preserving the order
    /// and content of all other rows. Returns the number of removed records.
    ///
    /// The file is rewritten in full (header plus remaining rows). A missing
    /// key removes nothing and leaves the records unchanged.
    pub fn delete_by_key(
        &self,
        field: impl Fn(&R) -> &str,
        value: &str,
    ) -> Result<usize, RegistryError> {
        let records = self.records()?;
        let before = records.len();
        let remaining: Vec<R> = records.into_iter().filter(|r| field(r) != value).collect();
        let removed = before - remaining.len();

        self.rewrite(&remaining)?;
        Ok(removed)
    }

    /// Returns `max(existing numeric primary key) + 1`, or 1 for an empty
    /// registry. Non-numeric keys are skipped.
    pub fn next_sequential_index(&self) -> Result<u64, RegistryError> {
        let mut max = 0u64;
        for record in self.scan()? {
            if let Ok(n) = record?.key().parse::<u64>() {
                max = max.max(n);
            }
        }
        Ok(max + 1)
    }

    /// Rewrites the whole file as header plus `records`, in order.
    fn rewrite(&self, records: &[R]) -> Result<(), RegistryError> {
        let file = File::create(&self.path).map_err(|e| RegistryError::from_io(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(R::HEADERS)
            .map_err(|e| RegistryError::from_csv(&self.path, e))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| RegistryError::from_csv(&self.path, e))?;
        }
        writer
            .flush()
            .map_err(|e| RegistryError::from_io(&self.path, e))?;
        Ok(())
    }
}

/// Lazy record iterator returned by [`Registry::scan`].
pub struct Scan<R: RegistryRecord> {
    /// Underlying CSV deserialization iterator.
    inner: csv::DeserializeRecordsIntoIter<File, R>,
    /// Registry path, for error context.
    path: PathBuf,
}

impl<R: RegistryRecord> std::fmt::Debug for Scan<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scan").field("path", &self.path).finish()
    }
}

impl<R: RegistryRecord> Iterator for Scan<R> {
    type Item = Result<R, RegistryError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|item| item.map_err(|e| RegistryError::from_csv(&self.path, e)))
    }
}
