use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;
use crate::literal::{parse_offset, parse_size};

const COMMENT_MARKER: char = '#';
const MIN_FIELDS: usize = 5;

/// One partition table row, fields trimmed. Literal fields are kept raw;
/// parsing happens during resolution.
#[derive(Debug)]
pub struct PartitionRow {
    pub name: String,
    /// Partition type descriptor, carried verbatim and not interpreted.
    pub part_type: String,
    /// Partition subtype descriptor, carried verbatim and not interpreted.
    pub subtype: String,
    /// Explicit offset literal; empty when the offset is implicit.
    pub raw_offset: String,
    pub raw_size: String,
}

impl PartitionRow {
    /// Splits one table line into a row. Returns `Ok(None)` for blank lines
    /// and full-row comments.
    pub fn from_line(line: &str) -> Result<Option<Self>, Error> {
        if line.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields[0].starts_with(COMMENT_MARKER) {
            return Ok(None);
        }
        if fields.len() < MIN_FIELDS {
            return Err(Error::MalformedRow(line.to_string()));
        }

        // Trailing fields beyond the fifth are ignored.
        Ok(Some(Self {
            name: fields[0].to_string(),
            part_type: fields[1].to_string(),
            subtype: fields[2].to_string(),
            raw_offset: fields[3].to_string(),
            raw_size: fields[4].to_string(),
        }))
    }
}

/// Walks the table until `target` is found, accumulating each row's size
/// into a running offset and checking any explicit offset against it.
///
/// The scan stops at the first name match, so a duplicated name resolves to
/// its first occurrence and later rows are never validated.
pub fn resolve_offset<R: BufRead>(reader: R, target: &str) -> Result<u64, Error> {
    let mut computed_offset: Option<u64> = None;

    for line in reader.lines() {
        let line = line?;
        let Some(row) = PartitionRow::from_line(&line)? else {
            continue;
        };

        let size = parse_size(&row.raw_size)?;

        let offset = match computed_offset {
            // The first data row anchors the accumulation.
            None => {
                if row.raw_offset.is_empty() {
                    return Err(Error::MissingFirstOffset);
                }
                parse_offset(&row.raw_offset)?
            }
            Some(expected) => {
                if !row.raw_offset.is_empty() {
                    let explicit = parse_offset(&row.raw_offset)?;
                    if explicit != expected {
                        log::error!(
                            "partition {} declares offset {:#x} but accumulation puts it at {:#x}",
                            row.name,
                            explicit,
                            expected
                        );
                        return Err(Error::OffsetMismatch {
                            name: row.name,
                            expected,
                            actual: explicit,
                        });
                    }
                }
                expected
            }
        };

        log::debug!("partition {} at {:#x}, size {:#x}", row.name, offset, size);

        if row.name == target {
            return Ok(offset);
        }

        computed_offset = Some(
            offset
                .checked_add(size)
                .ok_or_else(|| Error::OffsetOverflow(row.name))?,
        );
    }

    Err(Error::PartitionNotFound(target.to_string()))
}

/// Opens `path` and resolves `target` against its contents. The file handle
/// is held for the duration of the scan and dropped on every exit path.
pub fn resolve_offset_in_file<P: AsRef<Path>>(path: P, target: &str) -> Result<u64, Error> {
    let file = File::open(path)?;
    resolve_offset(BufReader::new(file), target)
}
