//! CSV export and import
//!
//! Writes a header row of display names followed by one row per record, and
//! reads such files back into a store, allocating fresh ids.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{AssistantError, AssistantResult};
use crate::storage::RecordStore;

use super::schema::{CsvRow, CsvSchema};

/// Write `records` as CSV, header row first
pub fn export_records<'a, R, I, W>(records: I, writer: W) -> AssistantResult<usize>
where
    R: CsvSchema + 'a,
    I: IntoIterator<Item = &'a R>,
    W: Write,
{
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(R::HEADERS)?;

    let mut count = 0;
    for record in records {
        csv_writer.write_record(record.to_row())?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export `records` to a file, creating its parent directory if needed
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Returns an IO error if the destination cannot be opened for writing.
pub fn export_to_path<'a, R, I>(records: I, path: &Path) -> AssistantResult<usize>
where
    R: CsvSchema + 'a,
    I: IntoIterator<Item = &'a R>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AssistantError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(path)
        .map_err(|e| AssistantError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    export_records(records, file)
}

/// Read record fields from CSV with a header row
///
/// Every row is interpreted before anything is returned, so a malformed cell
/// rejects the whole input. Rows may be shorter than the header; their
/// missing cells take the schema defaults.
pub fn read_records<R, Rd>(reader: Rd) -> AssistantResult<Vec<R::Fields>>
where
    R: CsvSchema,
    Rd: Read,
{
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut batch = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        batch.push(R::from_row(&CsvRow::new(&headers, &record))?);
    }

    Ok(batch)
}

/// Import a CSV file into `store`, appending the rows as new records
///
/// Returns the records added, in file order.
///
/// # Errors
///
/// Returns an IO error if `path` does not exist, and a format error if a cell
/// cannot be interpreted; in both cases the store is unchanged.
pub fn import_from_path<R: CsvSchema>(
    store: &mut RecordStore<R>,
    path: &Path,
) -> AssistantResult<Vec<R>> {
    if !path.exists() {
        return Err(AssistantError::Io(format!(
            "Import file not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| AssistantError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let batch = read_records::<R, _>(file)?;
    store.append_all(batch)
}
