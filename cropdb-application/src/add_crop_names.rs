use super::*;

/// Adds scientific and alternate names to an existing crop.
///
/// The names of approved crops are searchable, so their
/// index entry is refreshed afterwards.
pub fn add_crop_names(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    crop_id: &str,
    scientific_names: &str,
    alternate_names: &str,
) -> Result<Vec<CropName>> {
    let (crop, added) = connections.exclusive()?.transaction(|conn| {
        let crop = usecases::get_crop(conn, crop_id)?;
        let mut added = usecases::add_scientific_names(conn, &crop, scientific_names)?;
        added.extend(usecases::add_alternate_names(conn, &crop, alternate_names)?);
        Ok::<_, usecases::Error>((crop, added))
    })?;
    if !added.is_empty() && crop.approval_status.is_visible() {
        post_add_crop_names(connections, indexer, &crop);
    }
    Ok(added)
}

fn post_add_crop_names(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    crop: &Crop,
) {
    let indexed = connections
        .shared()
        .and_then(|db| usecases::index_crop(&db, &*indexer, crop))
        .and_then(|_| indexer.flush_index());
    if let Err(err) = indexed {
        error!("Failed to update crop {} in search index: {}", crop.id, err);
    }
}
