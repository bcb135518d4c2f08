use super::*;

fn create_plant_part(conn: &mut SqliteConnection, plant_part: &PlantPart) -> Result<()> {
    diesel::insert_into(schema::plant_parts::table)
        .values(&models::NewPlantPart {
            id: plant_part.id.as_str(),
            name: &plant_part.name,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_plant_parts(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<PlantPart>> {
    use schema::plant_parts::dsl;
    Ok(dsl::plant_parts
        .filter(dsl::id.eq_any(ids))
        .load::<models::PlantPart>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::PlantPart { rowid: _, id, name }| PlantPart {
            id: id.into(),
            name,
        })
        .collect())
}

impl PlantPartRepo for DbReadOnly<'_> {
    fn create_plant_part(&self, _plant_part: &PlantPart) -> Result<()> {
        unreachable!();
    }
    fn get_plant_parts(&self, ids: &[&str]) -> Result<Vec<PlantPart>> {
        get_plant_parts(&mut self.conn.borrow_mut(), ids)
    }
}

impl PlantPartRepo for DbReadWrite<'_> {
    fn create_plant_part(&self, plant_part: &PlantPart) -> Result<()> {
        create_plant_part(&mut self.conn.borrow_mut(), plant_part)
    }
    fn get_plant_parts(&self, ids: &[&str]) -> Result<Vec<PlantPart>> {
        get_plant_parts(&mut self.conn.borrow_mut(), ids)
    }
}

impl PlantPartRepo for DbConnection<'_> {
    fn create_plant_part(&self, plant_part: &PlantPart) -> Result<()> {
        create_plant_part(&mut self.conn.borrow_mut(), plant_part)
    }
    fn get_plant_parts(&self, ids: &[&str]) -> Result<Vec<PlantPart>> {
        get_plant_parts(&mut self.conn.borrow_mut(), ids)
    }
}
