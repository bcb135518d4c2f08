use super::*;

fn reason_to_str(reason: RejectionReason) -> &'static str {
    reason.into()
}

impl<'a> From<&'a Crop> for models::NewCrop<'a> {
    fn from(from: &'a Crop) -> Self {
        let Crop {
            id,
            name,
            en_wikipedia_url,
            parent_id,
            approval_status,
            reason_for_rejection,
            rejection_notes,
            creator,
            created_at,
        } = from;
        Self {
            id: id.as_str(),
            name: name.as_str(),
            name_folded: name.to_lowercase(),
            en_wikipedia_url: en_wikipedia_url.as_deref(),
            parent_id: parent_id.as_ref().map(Id::as_str),
            approval_status: ApprovalStatusPrimitive::from(*approval_status),
            reason_for_rejection: reason_for_rejection.map(reason_to_str),
            rejection_notes: rejection_notes.as_deref(),
            creator_id: creator.as_ref().map(Id::as_str),
            created_at: created_at.as_millis(),
        }
    }
}

fn load_crop(crop: models::Crop) -> Result<Crop> {
    let models::Crop {
        rowid: _,
        id,
        name,
        name_folded: _,
        en_wikipedia_url,
        parent_id,
        approval_status,
        reason_for_rejection,
        rejection_notes,
        creator_id,
        created_at,
    } = crop;
    Ok(Crop {
        id: id.into(),
        name,
        en_wikipedia_url,
        parent_id: load_id(parent_id),
        approval_status: load_approval_status(approval_status)?,
        reason_for_rejection: load_enum("reason for rejection", reason_for_rejection),
        rejection_notes,
        creator: load_id(creator_id),
        created_at: Timestamp::from_millis(created_at),
    })
}

fn load_crops(crops: Vec<models::Crop>) -> Result<Vec<Crop>> {
    crops.into_iter().map(load_crop).collect()
}

fn create_crop(conn: &mut SqliteConnection, crop: &Crop) -> Result<()> {
    diesel::insert_into(schema::crops::table)
        .values(&models::NewCrop::from(crop))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_crop(conn: &mut SqliteConnection, crop: &Crop) -> Result<()> {
    use schema::crops::dsl;
    let count = diesel::update(dsl::crops.filter(dsl::id.eq(crop.id.as_str())))
        .set(&models::NewCrop::from(crop))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_crop(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    // Mirrors the foreign key actions of the schema, so the
    // outcome does not depend on how the connection is set up.
    conn.transaction::<_, DieselError, _>(|conn| {
        use schema::{
            crop_alternate_names::dsl as an_dsl, crop_scientific_names::dsl as sn_dsl,
            crops::dsl as c_dsl, harvests::dsl as h_dsl, plantings::dsl as p_dsl,
            post_crops::dsl as pc_dsl,
        };
        diesel::delete(sn_dsl::crop_scientific_names.filter(sn_dsl::crop_id.eq(id)))
            .execute(conn)?;
        diesel::delete(an_dsl::crop_alternate_names.filter(an_dsl::crop_id.eq(id)))
            .execute(conn)?;
        diesel::delete(pc_dsl::post_crops.filter(pc_dsl::crop_id.eq(id))).execute(conn)?;
        diesel::update(p_dsl::plantings.filter(p_dsl::crop_id.eq(id)))
            .set(p_dsl::crop_id.eq(None::<String>))
            .execute(conn)?;
        diesel::update(h_dsl::harvests.filter(h_dsl::crop_id.eq(id)))
            .set(h_dsl::crop_id.eq(None::<String>))
            .execute(conn)?;
        diesel::update(c_dsl::crops.filter(c_dsl::parent_id.eq(id)))
            .set(c_dsl::parent_id.eq(None::<String>))
            .execute(conn)?;
        let count = diesel::delete(c_dsl::crops.filter(c_dsl::id.eq(id))).execute(conn)?;
        if count == 0 {
            return Err(DieselError::NotFound);
        }
        debug_assert_eq!(1, count);
        Ok(())
    })
    .map_err(from_diesel_err)
}

fn get_crops(conn: &mut SqliteConnection, ids: &[&str]) -> Result<Vec<Crop>> {
    use schema::crops::dsl;
    let crops = dsl::crops
        .filter(dsl::id.eq_any(ids))
        .load::<models::Crop>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(crops.len() <= ids.len());
    load_crops(crops)
}

fn get_crop(conn: &mut SqliteConnection, id: &str) -> Result<Crop> {
    use schema::crops::dsl;
    let crop = dsl::crops
        .filter(dsl::id.eq(id))
        .first::<models::Crop>(conn)
        .map_err(from_diesel_err)?;
    load_crop(crop)
}

fn try_get_crop_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Crop>> {
    use schema::crops::dsl;
    dsl::crops
        .filter(dsl::name.eq(name))
        .order_by(dsl::rowid)
        .first::<models::Crop>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_crop)
        .transpose()
}

fn find_crops_by_name_ignore_case(conn: &mut SqliteConnection, name: &str) -> Result<Vec<Crop>> {
    // COLLATE NOCASE would only fold ASCII letters
    use schema::crops::dsl;
    let crops = dsl::crops
        .filter(dsl::name_folded.eq(name.to_lowercase()))
        .order_by(dsl::rowid)
        .load::<models::Crop>(conn)
        .map_err(from_diesel_err)?;
    load_crops(crops)
}

fn all_crops(conn: &mut SqliteConnection) -> Result<Vec<Crop>> {
    use schema::crops::dsl;
    let crops = dsl::crops
        .load::<models::Crop>(conn)
        .map_err(from_diesel_err)?;
    load_crops(crops)
}

fn crops_with_status(conn: &mut SqliteConnection, status: ApprovalStatus) -> Result<Vec<Crop>> {
    use schema::crops::dsl;
    let crops = dsl::crops
        .filter(dsl::approval_status.eq(ApprovalStatusPrimitive::from(status)))
        .load::<models::Crop>(conn)
        .map_err(from_diesel_err)?;
    load_crops(crops)
}

fn varieties_of_crop(conn: &mut SqliteConnection, parent_id: &str) -> Result<Vec<Crop>> {
    use schema::crops::dsl;
    let crops = dsl::crops
        .filter(dsl::parent_id.eq(parent_id))
        .load::<models::Crop>(conn)
        .map_err(from_diesel_err)?;
    load_crops(crops)
}

fn count_crops(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::crops::dsl;
    Ok(dsl::crops
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn review_crops(conn: &mut SqliteConnection, ids: &[&str], approval: &Approval) -> Result<usize> {
    use schema::crops::dsl;
    let Approval {
        status,
        reason_for_rejection,
        rejection_notes,
    } = approval;
    let changeset = models::CropApproval {
        approval_status: ApprovalStatusPrimitive::from(*status),
        reason_for_rejection: reason_for_rejection.map(reason_to_str),
        rejection_notes: rejection_notes.as_deref(),
    };
    let count = diesel::update(dsl::crops.filter(dsl::id.eq_any(ids)))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= ids.len());
    Ok(count)
}

impl CropRepo for DbReadOnly<'_> {
    fn create_crop(&self, _crop: &Crop) -> Result<()> {
        unreachable!();
    }
    fn update_crop(&self, _crop: &Crop) -> Result<()> {
        unreachable!();
    }
    fn delete_crop(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_crop(&self, id: &str) -> Result<Crop> {
        get_crop(&mut self.conn.borrow_mut(), id)
    }
    fn get_crops(&self, ids: &[&str]) -> Result<Vec<Crop>> {
        get_crops(&mut self.conn.borrow_mut(), ids)
    }

    fn try_get_crop_by_name(&self, name: &str) -> Result<Option<Crop>> {
        try_get_crop_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn find_crops_by_name_ignore_case(&self, name: &str) -> Result<Vec<Crop>> {
        find_crops_by_name_ignore_case(&mut self.conn.borrow_mut(), name)
    }

    fn all_crops(&self) -> Result<Vec<Crop>> {
        all_crops(&mut self.conn.borrow_mut())
    }
    fn crops_with_status(&self, status: ApprovalStatus) -> Result<Vec<Crop>> {
        crops_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn varieties_of_crop(&self, parent_id: &str) -> Result<Vec<Crop>> {
        varieties_of_crop(&mut self.conn.borrow_mut(), parent_id)
    }
    fn count_crops(&self) -> Result<usize> {
        count_crops(&mut self.conn.borrow_mut())
    }

    fn review_crops(&self, _ids: &[&str], _approval: &Approval) -> Result<usize> {
        unreachable!();
    }
}

impl CropRepo for DbReadWrite<'_> {
    fn create_crop(&self, crop: &Crop) -> Result<()> {
        create_crop(&mut self.conn.borrow_mut(), crop)
    }
    fn update_crop(&self, crop: &Crop) -> Result<()> {
        update_crop(&mut self.conn.borrow_mut(), crop)
    }
    fn delete_crop(&self, id: &str) -> Result<()> {
        delete_crop(&mut self.conn.borrow_mut(), id)
    }

    fn get_crop(&self, id: &str) -> Result<Crop> {
        get_crop(&mut self.conn.borrow_mut(), id)
    }
    fn get_crops(&self, ids: &[&str]) -> Result<Vec<Crop>> {
        get_crops(&mut self.conn.borrow_mut(), ids)
    }

    fn try_get_crop_by_name(&self, name: &str) -> Result<Option<Crop>> {
        try_get_crop_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn find_crops_by_name_ignore_case(&self, name: &str) -> Result<Vec<Crop>> {
        find_crops_by_name_ignore_case(&mut self.conn.borrow_mut(), name)
    }

    fn all_crops(&self) -> Result<Vec<Crop>> {
        all_crops(&mut self.conn.borrow_mut())
    }
    fn crops_with_status(&self, status: ApprovalStatus) -> Result<Vec<Crop>> {
        crops_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn varieties_of_crop(&self, parent_id: &str) -> Result<Vec<Crop>> {
        varieties_of_crop(&mut self.conn.borrow_mut(), parent_id)
    }
    fn count_crops(&self) -> Result<usize> {
        count_crops(&mut self.conn.borrow_mut())
    }

    fn review_crops(&self, ids: &[&str], approval: &Approval) -> Result<usize> {
        review_crops(&mut self.conn.borrow_mut(), ids, approval)
    }
}

impl CropRepo for DbConnection<'_> {
    fn create_crop(&self, crop: &Crop) -> Result<()> {
        create_crop(&mut self.conn.borrow_mut(), crop)
    }
    fn update_crop(&self, crop: &Crop) -> Result<()> {
        update_crop(&mut self.conn.borrow_mut(), crop)
    }
    fn delete_crop(&self, id: &str) -> Result<()> {
        delete_crop(&mut self.conn.borrow_mut(), id)
    }

    fn get_crop(&self, id: &str) -> Result<Crop> {
        get_crop(&mut self.conn.borrow_mut(), id)
    }
    fn get_crops(&self, ids: &[&str]) -> Result<Vec<Crop>> {
        get_crops(&mut self.conn.borrow_mut(), ids)
    }

    fn try_get_crop_by_name(&self, name: &str) -> Result<Option<Crop>> {
        try_get_crop_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn find_crops_by_name_ignore_case(&self, name: &str) -> Result<Vec<Crop>> {
        find_crops_by_name_ignore_case(&mut self.conn.borrow_mut(), name)
    }

    fn all_crops(&self) -> Result<Vec<Crop>> {
        all_crops(&mut self.conn.borrow_mut())
    }
    fn crops_with_status(&self, status: ApprovalStatus) -> Result<Vec<Crop>> {
        crops_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn varieties_of_crop(&self, parent_id: &str) -> Result<Vec<Crop>> {
        varieties_of_crop(&mut self.conn.borrow_mut(), parent_id)
    }
    fn count_crops(&self) -> Result<usize> {
        count_crops(&mut self.conn.borrow_mut())
    }

    fn review_crops(&self, ids: &[&str], approval: &Approval) -> Result<usize> {
        review_crops(&mut self.conn.borrow_mut(), ids, approval)
    }
}
