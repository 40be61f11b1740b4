//! JSON-lines session journal.
//!
//! Journal failures never stop the simulation: the first failed write disables
//! the journal and reports once on stderr.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::event::SessionEvent;

pub struct SessionJournal {
    file: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl SessionJournal {
    /// A journal that records nothing
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
        }
    }

    /// Open (append) a journal file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;

        Ok(Self {
            file: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(1024),
        })
    }

    /// Open `path` if given; on failure report and fall back to disabled
    pub fn open_or_disabled(path: Option<&str>) -> Self {
        match path {
            Some(path) => Self::open(path).unwrap_or_else(|e| {
                eprintln!("[Journal] {:#}; journaling disabled", e);
                Self::disabled()
            }),
            None => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Append one event line
    pub fn record(&mut self, event: &SessionEvent) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, event).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = file.write_all(&self.buf) {
            eprintln!("[Journal] write failed: {}; journaling disabled", e);
            self.file = None;
        }
    }

    /// Flush buffered lines to disk
    pub fn flush(&mut self) {
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.flush() {
                eprintln!("[Journal] flush failed: {}; journaling disabled", e);
                self.file = None;
            }
        }
    }
}

impl Drop for SessionJournal {
    fn drop(&mut self) {
        self.flush();
    }
}
