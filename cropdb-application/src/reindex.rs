use super::*;

/// Rebuilds the search index from scratch, e.g. after
/// restoring the database from a backup.
pub fn rebuild_index(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
) -> Result<usize> {
    let count = {
        let db = connections.shared()?;
        usecases::reindex_all_crops(&db, &*indexer)?
    };
    indexer.flush_index()?;
    info!("Rebuilt search index with {count} crops");
    Ok(count)
}
