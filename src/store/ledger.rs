//! Append-only flat-file record store
//!
//! The backing file is the source of truth. The in-memory list mirrors it
//! and is only mutated after the disk operation has succeeded.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::record::PhoneRecord;

/// Default backing file name
pub const DEFAULT_LEDGER_FILE: &str = "Mobile.txt";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Ledger of phone records backed by a single text file
#[derive(Debug)]
pub struct RecordStore {
    /// Backing file
    path: PathBuf,
    /// Records in file order
    records: Vec<PhoneRecord>,
    /// Lines dropped by the last load because they were unreadable
    skipped_on_load: usize,
}

impl RecordStore {
    /// Create a store with an empty view. The file is not read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            skipped_on_load: 0,
        }
    }

    /// Create a store and load whatever the backing file already holds.
    ///
    /// A missing file is an empty ledger. Each line is decoded on its own;
    /// lines that are not UTF-8, do not split into six fields, or fail
    /// validation are skipped and counted. Blank lines are ignored.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = Self::new(path);

        let bytes = match fs::read(&store.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No ledger at {}, starting empty", store.path.display());
                return Ok(store);
            }
            Err(e) => {
                log::warn!("Failed to read ledger {}: {}", store.path.display(), e);
                return Err(e.into());
            }
        };

        for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            match parse_stored_line(raw, idx + 1) {
                Ok(Some(record)) => store.records.push(record),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Skipping line in {}: {}", store.path.display(), e);
                    store.skipped_on_load += 1;
                }
            }
        }

        log::info!(
            "Loaded {} records from {} ({} skipped)",
            store.records.len(),
            store.path.display(),
            store.skipped_on_load
        );
        Ok(store)
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current records, oldest first
    pub fn records(&self) -> &[PhoneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of unreadable lines dropped by `open`
    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }

    /// Validate and append one record to the file, then to the view.
    ///
    /// On any error neither the file nor the view gains the record.
    pub fn append(&mut self, record: PhoneRecord) -> Result<(), StoreError> {
        record.validate()?;

        let mut line = record.to_line();
        line.push_str(LINE_ENDING);

        if let Err(e) = write_append(&self.path, &line) {
            log::warn!("Failed to append to {}: {}", self.path.display(), e);
            return Err(e.into());
        }

        log::info!("Appended record {} {}", record.name, record.model);
        self.records.push(record);
        Ok(())
    }

    /// Truncate the backing file and clear the view.
    ///
    /// The view is only cleared once truncation succeeded, so a failure
    /// leaves the displayed rows matching what is still on disk.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        if let Err(e) = File::create(&self.path) {
            log::warn!("Failed to clear {}: {}", self.path.display(), e);
            return Err(e.into());
        }

        log::info!("Cleared {} ({} records dropped)", self.path.display(), self.records.len());
        self.records.clear();
        self.skipped_on_load = 0;
        Ok(())
    }
}

/// Decode and check one raw line. `None` for blank lines.
fn parse_stored_line(raw: &[u8], line_no: usize) -> Result<Option<PhoneRecord>, StoreError> {
    let text = std::str::from_utf8(raw).map_err(|_| StoreError::Encoding { line: line_no })?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    let record = PhoneRecord::from_numbered_line(text, line_no)?;
    record.validate()?;
    Ok(Some(record))
}

/// Open in append mode, write, flush. The handle is dropped on every path.
fn write_append(path: &Path, line: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(line.as_bytes())?;
    writer.flush()
}
