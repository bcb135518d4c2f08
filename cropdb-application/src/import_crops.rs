use super::*;
use crate::error::AppError;
use std::{collections::HashMap, io};
use usecases::{CropRow, ImportOptions, ImportedCrop};

pub const DEFAULT_BOT_LOGIN_NAME: &str = "cropbot";

#[derive(Debug, Clone)]
pub struct ImportSettings {
    /// The member that is recorded as the creator of new crops.
    pub bot_login_name: String,
    /// Approve all imported crops, e.g. for curated crop lists.
    pub approve: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            bot_login_name: DEFAULT_BOT_LOGIN_NAME.into(),
            approve: false,
        }
    }
}

#[derive(Debug)]
pub struct RowFailure {
    pub line: u64,
    pub error: AppError,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<ImportedCrop>,
    pub failures: Vec<RowFailure>,
}

impl ImportReport {
    pub fn created_count(&self) -> usize {
        self.imported.iter().filter(|i| i.created).count()
    }
}

fn import_options(
    connections: &sqlite::Connections,
    settings: &ImportSettings,
) -> Result<ImportOptions> {
    let bot = connections.exclusive()?.transaction(|conn| {
        usecases::get_or_create_member(conn, &settings.bot_login_name)
    })?;
    Ok(ImportOptions {
        creator: Some(bot.id),
        approve: settings.approve,
    })
}

fn exec_import_crop_row(
    connections: &sqlite::Connections,
    row: &CropRow,
    options: &ImportOptions,
) -> Result<ImportedCrop> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::import_crop_row(conn, row, options))?)
}

fn post_import_crops(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    crops: &[&Crop],
) {
    let db = match connections.shared() {
        Ok(db) => db,
        Err(err) => {
            error!("Failed to update the search index after importing crops: {err}");
            return;
        }
    };
    for crop in crops {
        if let Err(err) = usecases::index_crop(&db, &*indexer, crop) {
            error!("Failed to index imported crop {}: {}", crop.id, err);
        }
    }
    drop(db);
    if let Err(err) = indexer.flush_index() {
        error!("Failed to finish updating the search index after importing crops: {err}");
    }
}

/// Imports a single row of a crop list in its own transaction.
pub fn import_crop_row(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    row: &CropRow,
    settings: &ImportSettings,
) -> Result<ImportedCrop> {
    let options = import_options(connections, settings)?;
    let imported = exec_import_crop_row(connections, row, &options).map_err(|err| {
        warn!("Failed to import crop '{}': {}", row.name, err);
        err
    })?;
    post_import_crops(connections, indexer, &[&imported.crop]);
    Ok(imported)
}

/// Imports all rows of a crop list in CSV format.
///
/// The rows have no header and may have a varying number of
/// fields. A failing row does not abort the import, it is
/// reported together with its line number instead.
pub fn import_crops_from_csv<R: io::Read>(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    reader: R,
    settings: &ImportSettings,
) -> Result<ImportReport> {
    let options = import_options(connections, settings)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut report = ImportReport::default();
    for result in csv_reader.records() {
        let (line, imported) = match result {
            Ok(record) => {
                let line = record.position().map_or(0, csv::Position::line);
                let row = CropRow::from_fields(record.iter());
                (line, exec_import_crop_row(connections, &row, &options))
            }
            Err(err) if err.is_io_error() => {
                return Err(err.into());
            }
            Err(err) => {
                let line = err.position().map_or(0, csv::Position::line);
                (line, Err(err.into()))
            }
        };
        match imported {
            Ok(imported) => {
                report.imported.push(imported);
            }
            Err(err) => {
                warn!("Failed to import crop from line {line}: {err}");
                report.failures.push(RowFailure { line, error: err });
            }
        }
    }
    info!(
        "Imported {} crops ({} new), {} rows failed",
        report.imported.len(),
        report.created_count(),
        report.failures.len()
    );

    // Rows may refer to the same crop, the latest state wins
    let mut latest: HashMap<&Id, &Crop> = HashMap::new();
    for imported in &report.imported {
        latest.insert(&imported.crop.id, &imported.crop);
    }
    let crops: Vec<_> = latest.into_values().collect();
    post_import_crops(connections, indexer, &crops);

    Ok(report)
}
