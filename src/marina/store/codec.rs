//! Line format of the boat data file.
//!
//! ```text
//! name,length,type,payload,amountOwed
//! Sea Breeze,22.00,slip,27,150.00
//! Blue Moon,18.50,land,B,0.00
//! Tow Me,16.00,trailer,KZ1234,37.25
//! Attic,12.00,storage,8,11.20
//! Mystery,30.00,unknown,,0.00
//! ```
//!
//! Lengths and amounts are written with two decimals. Boats whose type was not recognized
//! are written with the `unknown` token and an empty payload. Older files may carry
//! unknown boats without the payload column (`Mystery,30.00,unknown,0.00`), which the
//! reader also accepts.

use crate::error::ParseError;
use crate::inventory::{BoatStore, MAX_BOATS};
use crate::model::{BoatRecord, StorageLocation};

const FIELDS: usize = 5;

/// A line the reader could not use.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub line_no: usize,
    pub reason: String,
}

/// What happened while reading a data file, beyond the boats themselves.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
    /// Lines past the capacity of the store, not read.
    pub ignored: usize,
}

/// Parses one record, either a file line or the text typed for the add command.
pub fn decode_record(text: &str) -> Result<BoatRecord, ParseError> {
    let fields: Vec<&str> = text
        .trim_end_matches(['\r', '\n'])
        .split(',')
        .map(str::trim)
        .collect();

    let (name, length, type_text, payload, owed) = match fields.as_slice() {
        [name, length, type_text, payload, owed] => (*name, *length, *type_text, *payload, *owed),
        [name, length, type_text, owed] => {
            // Only unknown boats may omit the payload column.
            if StorageLocation::is_known_type(type_text) {
                return Err(ParseError::FieldCount {
                    expected: FIELDS,
                    found: 4,
                });
            }
            (*name, *length, *type_text, "", *owed)
        }
        other => {
            return Err(ParseError::FieldCount {
                expected: FIELDS,
                found: other.len(),
            })
        }
    };

    let length = parse_decimal("length", length)?;
    let location = StorageLocation::parse(type_text, payload)?;
    let owed = parse_decimal("amount owed", owed)?;
    BoatRecord::new(name, length, location, owed)
}

pub fn encode_record(record: &BoatRecord) -> String {
    format!(
        "{},{:.2},{},{},{:.2}",
        record.name(),
        record.length(),
        record.location().type_name(),
        record.location().format_payload(),
        record.amount_owed()
    )
}

/// Builds a store from file contents.
///
/// Blank lines are ignored. Lines that do not parse, or that repeat a name already
/// loaded, are skipped and listed in the report. Reading stops once [`MAX_BOATS`]
/// lines have been considered.
pub fn decode(contents: &str) -> (BoatStore, LoadReport) {
    let mut store = BoatStore::new();
    let mut report = LoadReport::default();
    let mut considered = 0;

    for (i, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if considered == MAX_BOATS {
            report.ignored += 1;
            continue;
        }
        considered += 1;

        let line_no = i + 1;
        let outcome = decode_record(line)
            .map_err(|e| e.to_string())
            .and_then(|record| store.add(record).map_err(|e| e.to_string()));
        match outcome {
            Ok(_) => report.loaded += 1,
            Err(reason) => {
                tracing::warn!(line = line_no, %reason, "skipping boat record");
                report.skipped.push(SkippedLine { line_no, reason });
            }
        }
    }

    if report.ignored > 0 {
        tracing::debug!(ignored = report.ignored, "lines past capacity not read");
    }
    (store, report)
}

pub fn encode(store: &BoatStore) -> String {
    store
        .all()
        .map(|r| format!("{}\n", encode_record(r)))
        .collect()
}

fn parse_decimal(field: &'static str, text: &str) -> Result<f64, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}
