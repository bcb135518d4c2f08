use super::*;

fn create_planting(conn: &mut SqliteConnection, planting: &Planting) -> Result<()> {
    let Planting {
        id,
        crop_id,
        owner,
        sunniness,
        planted_from,
        created_at,
    } = planting;
    let new_planting = models::NewPlanting {
        id: id.as_str(),
        crop_id: crop_id.as_ref().map(Id::as_str),
        owner_id: owner.as_ref().map(Id::as_str),
        sunniness: sunniness.as_ref().map(|s| s.as_ref()),
        planted_from: planted_from.as_ref().map(|p| p.as_ref()),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::plantings::table)
        .values(&new_planting)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_planting(planting: models::Planting) -> Planting {
    let models::Planting {
        rowid: _,
        id,
        crop_id,
        owner_id,
        sunniness,
        planted_from,
        created_at,
    } = planting;
    Planting {
        id: id.into(),
        crop_id: load_id(crop_id),
        owner: load_id(owner_id),
        sunniness: load_enum("sunniness", sunniness),
        planted_from: load_enum("planted from", planted_from),
        created_at: Timestamp::from_millis(created_at),
    }
}

fn load_plantings_of_crop(conn: &mut SqliteConnection, crop_id: &str) -> Result<Vec<Planting>> {
    use schema::plantings::dsl;
    Ok(dsl::plantings
        .filter(dsl::crop_id.eq(crop_id))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::Planting>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_planting)
        .collect())
}

fn count_plantings_per_crop(conn: &mut SqliteConnection) -> Result<Vec<(Id, u64)>> {
    use schema::plantings::dsl;
    let rows = dsl::plantings
        .filter(dsl::crop_id.is_not_null())
        .group_by(dsl::crop_id)
        .select((dsl::crop_id, diesel::dsl::count(dsl::rowid)))
        .load::<(Option<String>, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .filter_map(|(crop_id, count)| Some((Id::from(crop_id?), count as u64)))
        .collect())
}

impl PlantingRepo for DbReadOnly<'_> {
    fn create_planting(&self, _planting: &Planting) -> Result<()> {
        unreachable!();
    }
    fn load_plantings_of_crop(&self, crop_id: &str) -> Result<Vec<Planting>> {
        load_plantings_of_crop(&mut self.conn.borrow_mut(), crop_id)
    }
    fn count_plantings_per_crop(&self) -> Result<Vec<(Id, u64)>> {
        count_plantings_per_crop(&mut self.conn.borrow_mut())
    }
}

impl PlantingRepo for DbReadWrite<'_> {
    fn create_planting(&self, planting: &Planting) -> Result<()> {
        create_planting(&mut self.conn.borrow_mut(), planting)
    }
    fn load_plantings_of_crop(&self, crop_id: &str) -> Result<Vec<Planting>> {
        load_plantings_of_crop(&mut self.conn.borrow_mut(), crop_id)
    }
    fn count_plantings_per_crop(&self) -> Result<Vec<(Id, u64)>> {
        count_plantings_per_crop(&mut self.conn.borrow_mut())
    }
}

impl PlantingRepo for DbConnection<'_> {
    fn create_planting(&self, planting: &Planting) -> Result<()> {
        create_planting(&mut self.conn.borrow_mut(), planting)
    }
    fn load_plantings_of_crop(&self, crop_id: &str) -> Result<Vec<Planting>> {
        load_plantings_of_crop(&mut self.conn.borrow_mut(), crop_id)
    }
    fn count_plantings_per_crop(&self) -> Result<Vec<(Id, u64)>> {
        count_plantings_per_crop(&mut self.conn.borrow_mut())
    }
}
