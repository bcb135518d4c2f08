#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = members)]
pub struct NewMember<'a> {
    pub id: &'a str,
    pub login_name: &'a str,
}

#[derive(Queryable)]
pub struct Member {
    pub rowid: i64,
    pub id: String,
    pub login_name: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crops, treat_none_as_null = true)]
pub struct NewCrop<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub name_folded: String,
    pub en_wikipedia_url: Option<&'a str>,
    pub parent_id: Option<&'a str>,
    pub approval_status: i16,
    pub reason_for_rejection: Option<&'a str>,
    pub rejection_notes: Option<&'a str>,
    pub creator_id: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Crop {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub name_folded: String,
    pub en_wikipedia_url: Option<String>,
    pub parent_id: Option<String>,
    pub approval_status: i16,
    pub reason_for_rejection: Option<String>,
    pub rejection_notes: Option<String>,
    pub creator_id: Option<String>,
    pub created_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crops, treat_none_as_null = true)]
pub struct CropApproval<'a> {
    pub approval_status: i16,
    pub reason_for_rejection: Option<&'a str>,
    pub rejection_notes: Option<&'a str>,
}

// Scientific and alternate names share the same layout
#[derive(Queryable)]
pub struct CropName {
    pub rowid: i64,
    pub id: String,
    pub crop_id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = plant_parts)]
pub struct NewPlantPart<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct PlantPart {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = plantings)]
pub struct NewPlanting<'a> {
    pub id: &'a str,
    pub crop_id: Option<&'a str>,
    pub owner_id: Option<&'a str>,
    pub sunniness: Option<&'a str>,
    pub planted_from: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Planting {
    pub rowid: i64,
    pub id: String,
    pub crop_id: Option<String>,
    pub owner_id: Option<String>,
    pub sunniness: Option<String>,
    pub planted_from: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = harvests)]
pub struct NewHarvest<'a> {
    pub id: &'a str,
    pub crop_id: Option<&'a str>,
    pub owner_id: Option<&'a str>,
    pub plant_part_id: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Harvest {
    pub rowid: i64,
    pub id: String,
    pub crop_id: Option<String>,
    pub owner_id: Option<String>,
    pub plant_part_id: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = photos)]
pub struct NewPhoto<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub url: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Photo {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub url: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = planting_photos)]
pub struct NewPlantingPhoto<'a> {
    pub photo_id: &'a str,
    pub planting_id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = harvest_photos)]
pub struct NewHarvestPhoto<'a> {
    pub photo_id: &'a str,
    pub harvest_id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = post_crops)]
pub struct NewPostCrop<'a> {
    pub post_id: &'a str,
    pub crop_id: &'a str,
}
