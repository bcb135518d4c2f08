use super::*;

/// Turns a crop into a variety of another crop or, without
/// a parent, into a top level crop.
pub fn set_crop_parent(
    connections: &sqlite::Connections,
    crop_id: &str,
    parent_id: Option<&str>,
) -> Result<Crop> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::set_parent(conn, crop_id, parent_id).map_err(|err| {
            warn!("Failed to change the parent of crop {crop_id}: {err}");
            err
        })
    })?)
}
