//! Flatten the manufacturer catalog to CSV for spreadsheet use. Multi-value
//! columns (countries, WMI codes) are joined with `;`.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::catalog::ManufacturerEntry;

#[derive(Debug)]
pub enum CatalogExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for CatalogExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "unable to write catalog csv: {err}"),
            Self::Csv(err) => write!(f, "unable to encode catalog csv: {err}"),
        }
    }
}

impl From<std::io::Error> for CatalogExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Write the catalog as CSV rows to any writer.
pub fn write_catalog_csv<W: Write>(
    catalog: &[ManufacturerEntry],
    writer: W,
) -> Result<(), CatalogExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["name", "display_name", "countries", "wmi_codes", "logo"])?;
    for entry in catalog {
        csv_writer.write_record([
            entry.name.as_str(),
            entry.display_name.as_str(),
            entry.countries.join(";").as_str(),
            entry.wmi_codes.join(";").as_str(),
            entry.logo.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the catalog as CSV to a file path.
pub fn export_catalog_csv(
    catalog: &[ManufacturerEntry],
    path: impl AsRef<Path>,
) -> Result<(), CatalogExportError> {
    let file = File::create(path)?;
    write_catalog_csv(catalog, file)
}
