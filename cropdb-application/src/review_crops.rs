use super::*;
use usecases::{CropReview, ReviewedCrops};

fn exec_review_crops(
    connections: &sqlite::Connections,
    ids: &[&str],
    review: CropReview,
) -> Result<ReviewedCrops> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::review_crops(conn, ids, review).map_err(|err| {
            warn!("Failed to review {} crops: {}", ids.len(), err);
            err
        })
    })?)
}

fn post_review_crops(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    reviewed: &ReviewedCrops,
) {
    // Crops that left the approved state must disappear from
    // search results even if loading other crops fails.
    for id in &reviewed.unapproved {
        if let Err(err) = usecases::unindex_crop(&*indexer, id) {
            error!("Failed to remove unapproved crop {id} from search index: {err}");
        }
    }
    if !reviewed.approved.is_empty() {
        match connections.shared() {
            Ok(db) => {
                for id in &reviewed.approved {
                    let indexed = usecases::get_crop(&db, id.as_str())
                        .map_err(anyhow::Error::from)
                        .and_then(|crop| usecases::index_crop(&db, &*indexer, &crop));
                    if let Err(err) = indexed {
                        error!("Failed to add approved crop {id} to search index: {err}");
                    }
                }
            }
            Err(err) => {
                error!("Failed to add {} approved crops to search index: {err}", reviewed.approved.len());
            }
        }
    }
    if let Err(err) = indexer.flush_index() {
        error!("Failed to finish updating the search index after reviewing crops: {err}");
    }
}

/// Changes the approval status of crops and keeps the
/// search index in sync.
///
/// Failures while updating the index are only logged, the
/// review itself is never rolled back.
pub fn review_crops(
    connections: &sqlite::Connections,
    indexer: &mut dyn CropIndexer,
    ids: &[&str],
    review: CropReview,
) -> Result<ReviewedCrops> {
    let reviewed = exec_review_crops(connections, ids, review)?;
    // TODO: Move post processing to a separate task/thread that doesn't delay the caller
    post_review_crops(connections, indexer, &reviewed);
    Ok(reviewed)
}
