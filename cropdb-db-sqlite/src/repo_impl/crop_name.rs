use super::*;

fn add_crop_name(conn: &mut SqliteConnection, crop_name: &CropName) -> Result<()> {
    let CropName {
        id,
        crop_id,
        kind,
        name,
    } = crop_name;
    match kind {
        CropNameKind::Scientific => {
            use schema::crop_scientific_names::dsl;
            diesel::insert_into(dsl::crop_scientific_names)
                .values((
                    dsl::id.eq(id.as_str()),
                    dsl::crop_id.eq(crop_id.as_str()),
                    dsl::name.eq(name),
                ))
                .execute(conn)
        }
        CropNameKind::Alternate => {
            use schema::crop_alternate_names::dsl;
            diesel::insert_into(dsl::crop_alternate_names)
                .values((
                    dsl::id.eq(id.as_str()),
                    dsl::crop_id.eq(crop_id.as_str()),
                    dsl::name.eq(name),
                ))
                .execute(conn)
        }
    }
    .map_err(from_diesel_err)?;
    Ok(())
}

fn load_crop_names(
    conn: &mut SqliteConnection,
    crop_id: &str,
    kind: CropNameKind,
) -> Result<Vec<CropName>> {
    let names = match kind {
        CropNameKind::Scientific => {
            use schema::crop_scientific_names::dsl;
            dsl::crop_scientific_names
                .filter(dsl::crop_id.eq(crop_id))
                .order_by(dsl::rowid)
                .load::<models::CropName>(conn)
        }
        CropNameKind::Alternate => {
            use schema::crop_alternate_names::dsl;
            dsl::crop_alternate_names
                .filter(dsl::crop_id.eq(crop_id))
                .order_by(dsl::rowid)
                .load::<models::CropName>(conn)
        }
    }
    .map_err(from_diesel_err)?;
    Ok(names
        .into_iter()
        .map(
            |models::CropName {
                 rowid: _,
                 id,
                 crop_id,
                 name,
             }| CropName {
                id: id.into(),
                crop_id: crop_id.into(),
                kind,
                name,
            },
        )
        .collect())
}

impl CropNameRepo for DbReadOnly<'_> {
    fn add_crop_name(&self, _name: &CropName) -> Result<()> {
        unreachable!();
    }
    fn load_crop_names(&self, crop_id: &str, kind: CropNameKind) -> Result<Vec<CropName>> {
        load_crop_names(&mut self.conn.borrow_mut(), crop_id, kind)
    }
}

impl CropNameRepo for DbReadWrite<'_> {
    fn add_crop_name(&self, name: &CropName) -> Result<()> {
        add_crop_name(&mut self.conn.borrow_mut(), name)
    }
    fn load_crop_names(&self, crop_id: &str, kind: CropNameKind) -> Result<Vec<CropName>> {
        load_crop_names(&mut self.conn.borrow_mut(), crop_id, kind)
    }
}

impl CropNameRepo for DbConnection<'_> {
    fn add_crop_name(&self, name: &CropName) -> Result<()> {
        add_crop_name(&mut self.conn.borrow_mut(), name)
    }
    fn load_crop_names(&self, crop_id: &str, kind: CropNameKind) -> Result<Vec<CropName>> {
        load_crop_names(&mut self.conn.borrow_mut(), crop_id, kind)
    }
}
