use super::*;

fn mention_crops_in_post(conn: &mut SqliteConnection, post_id: &str, crop_ids: &[&str]) -> Result<()> {
    if crop_ids.is_empty() {
        return Ok(());
    }
    let mentions: Vec<_> = crop_ids
        .iter()
        .map(|crop_id| models::NewPostCrop { post_id, crop_id })
        .collect();
    diesel::insert_or_ignore_into(schema::post_crops::table)
        .values(&mentions)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn crops_mentioned_by_post(conn: &mut SqliteConnection, post_id: &str) -> Result<Vec<Id>> {
    use schema::post_crops::dsl;
    Ok(dsl::post_crops
        .filter(dsl::post_id.eq(post_id))
        .order_by(dsl::rowid)
        .select(dsl::crop_id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

impl CropMentionRepo for DbReadOnly<'_> {
    fn mention_crops_in_post(&self, _post_id: &str, _crop_ids: &[&str]) -> Result<()> {
        unreachable!();
    }
    fn crops_mentioned_by_post(&self, post_id: &str) -> Result<Vec<Id>> {
        crops_mentioned_by_post(&mut self.conn.borrow_mut(), post_id)
    }
}

impl CropMentionRepo for DbReadWrite<'_> {
    fn mention_crops_in_post(&self, post_id: &str, crop_ids: &[&str]) -> Result<()> {
        mention_crops_in_post(&mut self.conn.borrow_mut(), post_id, crop_ids)
    }
    fn crops_mentioned_by_post(&self, post_id: &str) -> Result<Vec<Id>> {
        crops_mentioned_by_post(&mut self.conn.borrow_mut(), post_id)
    }
}

impl CropMentionRepo for DbConnection<'_> {
    fn mention_crops_in_post(&self, post_id: &str, crop_ids: &[&str]) -> Result<()> {
        mention_crops_in_post(&mut self.conn.borrow_mut(), post_id, crop_ids)
    }
    fn crops_mentioned_by_post(&self, post_id: &str) -> Result<Vec<Id>> {
        crops_mentioned_by_post(&mut self.conn.borrow_mut(), post_id)
    }
}
