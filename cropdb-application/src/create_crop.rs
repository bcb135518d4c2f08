use super::*;
use usecases::NewCrop;

/// Creates a crop together with its names.
///
/// New crops are pending and therefore not indexed before
/// they have been approved.
pub fn create_crop(
    connections: &sqlite::Connections,
    new_crop: NewCrop,
    scientific_names: &str,
    alternate_names: &str,
) -> Result<Crop> {
    let crop = connections.exclusive()?.transaction(|conn| {
        let name = new_crop.name.clone();
        let crop = usecases::create_new_crop(conn, new_crop).map_err(|err| {
            warn!("Failed to create crop '{name}': {err}");
            err
        })?;
        usecases::add_scientific_names(conn, &crop, scientific_names)?;
        usecases::add_alternate_names(conn, &crop, alternate_names)?;
        Ok::<_, usecases::Error>(crop)
    })?;
    info!("Created crop '{}' ({})", crop.name, crop.id);
    Ok(crop)
}
