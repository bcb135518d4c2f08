use super::*;

fn load_photo(photo: models::Photo) -> Photo {
    let models::Photo {
        rowid: _,
        id,
        title,
        url,
        created_at,
    } = photo;
    Photo {
        id: id.into(),
        title,
        url,
        created_at: Timestamp::from_millis(created_at),
    }
}

fn create_photo(conn: &mut SqliteConnection, photo: &Photo) -> Result<()> {
    diesel::insert_into(schema::photos::table)
        .values(&models::NewPhoto {
            id: photo.id.as_str(),
            title: &photo.title,
            url: &photo.url,
            created_at: photo.created_at.as_millis(),
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn attach_photo_to_planting(
    conn: &mut SqliteConnection,
    photo_id: &str,
    planting_id: &str,
) -> Result<()> {
    diesel::insert_into(schema::planting_photos::table)
        .values(&models::NewPlantingPhoto {
            photo_id,
            planting_id,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn attach_photo_to_harvest(
    conn: &mut SqliteConnection,
    photo_id: &str,
    harvest_id: &str,
) -> Result<()> {
    diesel::insert_into(schema::harvest_photos::table)
        .values(&models::NewHarvestPhoto {
            photo_id,
            harvest_id,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_photos_of_planting(conn: &mut SqliteConnection, planting_id: &str) -> Result<Vec<Photo>> {
    use schema::{photos::dsl as p_dsl, planting_photos::dsl as pp_dsl};
    Ok(p_dsl::photos
        .inner_join(pp_dsl::planting_photos.on(pp_dsl::photo_id.eq(p_dsl::id)))
        .filter(pp_dsl::planting_id.eq(planting_id))
        .order_by(pp_dsl::rowid)
        .select((
            p_dsl::rowid,
            p_dsl::id,
            p_dsl::title,
            p_dsl::url,
            p_dsl::created_at,
        ))
        .load::<models::Photo>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_photo)
        .collect())
}

fn load_photos_of_harvest(conn: &mut SqliteConnection, harvest_id: &str) -> Result<Vec<Photo>> {
    use schema::{harvest_photos::dsl as hp_dsl, photos::dsl as p_dsl};
    Ok(p_dsl::photos
        .inner_join(hp_dsl::harvest_photos.on(hp_dsl::photo_id.eq(p_dsl::id)))
        .filter(hp_dsl::harvest_id.eq(harvest_id))
        .order_by(hp_dsl::rowid)
        .select((
            p_dsl::rowid,
            p_dsl::id,
            p_dsl::title,
            p_dsl::url,
            p_dsl::created_at,
        ))
        .load::<models::Photo>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_photo)
        .collect())
}

impl PhotoRepo for DbReadOnly<'_> {
    fn create_photo(&self, _photo: &Photo) -> Result<()> {
        unreachable!();
    }
    fn attach_photo_to_planting(&self, _photo_id: &str, _planting_id: &str) -> Result<()> {
        unreachable!();
    }
    fn attach_photo_to_harvest(&self, _photo_id: &str, _harvest_id: &str) -> Result<()> {
        unreachable!();
    }
    fn load_photos_of_planting(&self, planting_id: &str) -> Result<Vec<Photo>> {
        load_photos_of_planting(&mut self.conn.borrow_mut(), planting_id)
    }
    fn load_photos_of_harvest(&self, harvest_id: &str) -> Result<Vec<Photo>> {
        load_photos_of_harvest(&mut self.conn.borrow_mut(), harvest_id)
    }
}

impl PhotoRepo for DbReadWrite<'_> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn attach_photo_to_planting(&self, photo_id: &str, planting_id: &str) -> Result<()> {
        attach_photo_to_planting(&mut self.conn.borrow_mut(), photo_id, planting_id)
    }
    fn attach_photo_to_harvest(&self, photo_id: &str, harvest_id: &str) -> Result<()> {
        attach_photo_to_harvest(&mut self.conn.borrow_mut(), photo_id, harvest_id)
    }
    fn load_photos_of_planting(&self, planting_id: &str) -> Result<Vec<Photo>> {
        load_photos_of_planting(&mut self.conn.borrow_mut(), planting_id)
    }
    fn load_photos_of_harvest(&self, harvest_id: &str) -> Result<Vec<Photo>> {
        load_photos_of_harvest(&mut self.conn.borrow_mut(), harvest_id)
    }
}

impl PhotoRepo for DbConnection<'_> {
    fn create_photo(&self, photo: &Photo) -> Result<()> {
        create_photo(&mut self.conn.borrow_mut(), photo)
    }
    fn attach_photo_to_planting(&self, photo_id: &str, planting_id: &str) -> Result<()> {
        attach_photo_to_planting(&mut self.conn.borrow_mut(), photo_id, planting_id)
    }
    fn attach_photo_to_harvest(&self, photo_id: &str, harvest_id: &str) -> Result<()> {
        attach_photo_to_harvest(&mut self.conn.borrow_mut(), photo_id, harvest_id)
    }
    fn load_photos_of_planting(&self, planting_id: &str) -> Result<Vec<Photo>> {
        load_photos_of_planting(&mut self.conn.borrow_mut(), planting_id)
    }
    fn load_photos_of_harvest(&self, harvest_id: &str) -> Result<Vec<Photo>> {
        load_photos_of_harvest(&mut self.conn.borrow_mut(), harvest_id)
    }
}
