use super::*;

fn create_harvest(conn: &mut SqliteConnection, harvest: &Harvest) -> Result<()> {
    let Harvest {
        id,
        crop_id,
        owner,
        plant_part_id,
        created_at,
    } = harvest;
    let new_harvest = models::NewHarvest {
        id: id.as_str(),
        crop_id: crop_id.as_ref().map(Id::as_str),
        owner_id: owner.as_ref().map(Id::as_str),
        plant_part_id: plant_part_id.as_ref().map(Id::as_str),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::harvests::table)
        .values(&new_harvest)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_harvests_of_crop(conn: &mut SqliteConnection, crop_id: &str) -> Result<Vec<Harvest>> {
    use schema::harvests::dsl;
    Ok(dsl::harvests
        .filter(dsl::crop_id.eq(crop_id))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::Harvest>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::Harvest {
                 rowid: _,
                 id,
                 crop_id,
                 owner_id,
                 plant_part_id,
                 created_at,
             }| Harvest {
                id: id.into(),
                crop_id: load_id(crop_id),
                owner: load_id(owner_id),
                plant_part_id: load_id(plant_part_id),
                created_at: Timestamp::from_millis(created_at),
            },
        )
        .collect())
}

impl HarvestRepo for DbReadOnly<'_> {
    fn create_harvest(&self, _harvest: &Harvest) -> Result<()> {
        unreachable!();
    }
    fn load_harvests_of_crop(&self, crop_id: &str) -> Result<Vec<Harvest>> {
        load_harvests_of_crop(&mut self.conn.borrow_mut(), crop_id)
    }
}

impl HarvestRepo for DbReadWrite<'_> {
    fn create_harvest(&self, harvest: &Harvest) -> Result<()> {
        create_harvest(&mut self.conn.borrow_mut(), harvest)
    }
    fn load_harvests_of_crop(&self, crop_id: &str) -> Result<Vec<Harvest>> {
        load_harvests_of_crop(&mut self.conn.borrow_mut(), crop_id)
    }
}

impl HarvestRepo for DbConnection<'_> {
    fn create_harvest(&self, harvest: &Harvest) -> Result<()> {
        create_harvest(&mut self.conn.borrow_mut(), harvest)
    }
    fn load_harvests_of_crop(&self, crop_id: &str) -> Result<Vec<Harvest>> {
        load_harvests_of_crop(&mut self.conn.borrow_mut(), crop_id)
    }
}
