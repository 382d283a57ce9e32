//! JSON document loading and pretty-printed output.

use crate::error::{Result, SubsetError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Load a JSON document and shape it into `T`.
///
/// Invalid JSON is reported as `MalformedJson`. Valid JSON that does not
/// have the shape of `T` (for example an object where an array of
/// records is expected) is a `SchemaViolation` against `label`.
pub fn load_json<T: DeserializeOwned>(path: &Path, label: &str) -> Result<T> {
    if !path.exists() {
        return Err(SubsetError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SubsetError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => SubsetError::Io(e),
    })?;

    let document: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        SubsetError::MalformedJson {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("Loaded {}", path.display());

    serde_json::from_value(document)
        .map_err(|e| SubsetError::schema_violation(label, "document", e.to_string()))
}

/// Write `value` as JSON indented by `indent_width` spaces.
///
/// No trailing newline is written.
pub fn write_json_pretty<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    indent_width: usize,
) -> Result<()> {
    let write_failure = |source: std::io::Error| SubsetError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failure)?;
    let mut writer = BufWriter::new(file);

    let indent = vec![b' '; indent_width];
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| write_failure(e.into()))?;

    writer.flush().map_err(write_failure)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
