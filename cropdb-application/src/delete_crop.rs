use super::*;

pub fn delete_crop(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    id: &str,
) -> Result<Crop> {
    let crop = connections.exclusive()?.transaction(|conn| {
        usecases::delete_crop(conn, id).map_err(|err| {
            warn!("Failed to delete crop {id}: {err}");
            err
        })
    })?;

    if let Err(err) =
        usecases::unindex_crop(&*indexer, &crop.id).and_then(|_| indexer.flush_index())
    {
        error!(
            "Failed to remove deleted crop {} from search index: {}",
            crop.id, err
        );
    }

    Ok(crop)
}
