//! Spreadsheet exchange for the contact table.
//!
//! Export writes one row per contact with every catalog column in
//! canonical order, headed by the localized labels; visibility
//! settings never apply to exports. Import validates the header row
//! locally against the same labels before any bytes go to the server,
//! so a malformed file is rejected with the missing columns named.

use crate::error::{Error, Result};
use log::debug;
use rolodex_types::{ALL_COLUMNS, Contact};
use std::io::Write;
use std::path::Path;

/// Write contacts as a spreadsheet to `writer`.
pub fn export_contacts<W: Write>(writer: W, contacts: &[Contact]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(ALL_COLUMNS.iter().map(|key| key.label()))?;
    for contact in contacts {
        csv.write_record(ALL_COLUMNS.iter().map(|key| contact.field(*key)))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write contacts as a spreadsheet file at `path`.
pub fn export_to_file(path: &Path, contacts: &[Contact]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    export_contacts(file, contacts)?;
    debug!("exported {} contacts to {}", contacts.len(), path.display());
    Ok(())
}

/// Check that every catalog column appears in the header row.
pub fn validate_headers<S: AsRef<str>>(headers: &[S]) -> Result<()> {
    let missing: Vec<String> = ALL_COLUMNS
        .iter()
        .map(|key| key.label())
        .filter(|label| !headers.iter().any(|header| header.as_ref() == *label))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingColumns(missing))
    }
}

/// Read an import file and validate its header row, returning the
/// bytes to upload. Nothing is sent anywhere if validation fails.
pub fn prepare_import(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();
    validate_headers(&headers)?;

    Ok(bytes)
}
