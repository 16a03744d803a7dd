// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) persistence for replica state.
//!
//! Records are appended one per line and fsynced. A crash mid-append can
//! leave a torn final line without its newline; readers drop that line and
//! keep everything before it. A malformed line anywhere else is corruption.
//! Writers that append after a crash call [`repair_tail`] first, so the next
//! record never lands on the end of a torn line.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Appends a record to a JSONL file with fsync for durability.
pub fn append<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(record)?;
    writeln!(file, "{json}")?;
    file.sync_all()?;

    Ok(())
}

/// Settles a final line that lacks its newline.
///
/// A tail that parses as JSON gets its newline; anything else is truncated
/// away. Returns true if the file changed.
pub fn repair_tail(path: &Path) -> Result<bool> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    if content.is_empty() || content.ends_with(b"\n") {
        return Ok(false);
    }

    let start = content.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    let mut file = OpenOptions::new().write(true).open(path)?;
    if serde_json::from_slice::<serde_json::Value>(&content[start..]).is_ok() {
        file.seek(SeekFrom::End(0))?;
        file.write_all(b"\n")?;
    } else {
        tracing::warn!(path = %path.display(), bytes = content.len() - start, "truncating torn trailing record");
        file.set_len(start as u64)?;
    }
    file.sync_all()?;

    Ok(true)
}

/// Reads all records from a JSONL file.
///
/// Returns an empty vec if the file doesn't exist.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut content = String::new();
    match File::open(path) {
        Ok(mut file) => {
            file.read_to_string(&mut content)?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    }

    let complete = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(record) => records.push(record),
            Err(e) if index + 1 == lines.len() && !complete => {
                tracing::warn!(path = %path.display(), error = %e, "dropping torn trailing record");
            }
            Err(e) => {
                return Err(Error::CorruptedData(format!(
                    "{} line {}: {e}",
                    path.display(),
                    index + 1
                )));
            }
        }
    }

    Ok(records)
}

/// Replaces the file's content with `records`.
///
/// Writes a sibling temp file and renames it over the target, so readers
/// see either the old content or the new content, never a mix.
pub fn write_all<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let tmp_path = path.with_extension("jsonl.tmp");
    {
        let mut file = File::create(&tmp_path)?;
        for record in records {
            let json = serde_json::to_string(record)?;
            writeln!(file, "{json}")?;
        }
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
