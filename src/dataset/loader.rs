use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};
use tracing::error;

use crate::models::RawTransaction;

/// On-disk layout of a transaction export.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DatasetFormat {
    /// A JSON array of records, as returned by the equity API.
    Json,
    /// A CSV file with the export's column names as header.
    Csv
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str() {
            "json" => Some(DatasetFormat::Json),
            "csv" => Some(DatasetFormat::Csv),
            _ => None
        }
    }
}

/// Streams every record of a dataset file into `sink`.
///
/// Every JSON object and CSV row is delivered, whatever its field values, so that bad
/// values surface as diagnostics of the investor's report. Only entries that are not
/// records at all (a bare string in the JSON array, an unreadable CSV row) are logged and
/// skipped, since they cannot be attributed to an investor. Reading stops early
/// when `sink` returns `false`. Returns the number of records handed to `sink`.
pub fn read_records<F>(path: &Path, mut sink: F) -> Result<usize>
where
    F: FnMut(RawTransaction) -> bool,
{
    let Some(format) = DatasetFormat::from_path(path) else {
        bail!("Unsupported dataset format: {}", path.display());
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;

    let mut delivered = 0;

    match format {
        DatasetFormat::Json => {
            let values: Vec<Value> = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse dataset: {}", path.display()))?;

            for (index, value) in values.into_iter().enumerate() {
                match serde_json::from_value::<RawTransaction>(as_export_text(value)) {
                    Ok(record) => {
                        delivered += 1;

                        if !sink(record) {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("JSON deserialization error for record [{index}]: {error}");
                    }
                }
            }
        }
        DatasetFormat::Csv => {
            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<RawTransaction>() {
                match result {
                    Ok(record) => {
                        delivered += 1;

                        if !sink(record) {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        }
    }

    Ok(delivered)
}

/// Renders the non-string fields of a JSON record as text, the form the export uses.
///
/// Numeric amounts such as `100000` become `"100000"`. Null fields are dropped so they read
/// as absent. Anything other than an object is returned unchanged.
fn as_export_text(value: Value) -> Value {
    let Value::Object(fields) = value else {
        return value;
    };

    let fields: Map<String, Value> = fields.into_iter()
        .filter(|(_, field)| !field.is_null())
        .map(|(name, field)| match field {
            Value::String(_) => (name, field),
            other => (name, Value::String(other.to_string()))
        })
        .collect();

    Value::Object(fields)
}

/// Names of the JSON datasets in `directory` (file stems), sorted.
pub fn list_datasets(directory: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("Unable to read datasets: {}", directory.display()))?;

    let mut names = Vec::new();

    for entry in entries {
        let path = entry?.path();

        if path.is_file() && DatasetFormat::from_path(&path) == Some(DatasetFormat::Json)
            && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
        {
            names.push(stem.to_string());
        }
    }

    names.sort();

    Ok(names)
}
