///////////////////////////////////////////////////////////////////////
// Members
///////////////////////////////////////////////////////////////////////

table! {
    members (rowid) {
        rowid -> BigInt,
        id -> Text,
        login_name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Crops
///////////////////////////////////////////////////////////////////////

table! {
    crops (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        name_folded -> Text,
        en_wikipedia_url -> Nullable<Text>,
        parent_id -> Nullable<Text>,
        approval_status -> SmallInt,
        reason_for_rejection -> Nullable<Text>,
        rejection_notes -> Nullable<Text>,
        creator_id -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    crop_scientific_names (rowid) {
        rowid -> BigInt,
        id -> Text,
        crop_id -> Text,
        name -> Text,
    }
}

table! {
    crop_alternate_names (rowid) {
        rowid -> BigInt,
        id -> Text,
        crop_id -> Text,
        name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Plantings & Harvests
///////////////////////////////////////////////////////////////////////

table! {
    plant_parts (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

table! {
    plantings (rowid) {
        rowid -> BigInt,
        id -> Text,
        crop_id -> Nullable<Text>,
        owner_id -> Nullable<Text>,
        sunniness -> Nullable<Text>,
        planted_from -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    harvests (rowid) {
        rowid -> BigInt,
        id -> Text,
        crop_id -> Nullable<Text>,
        owner_id -> Nullable<Text>,
        plant_part_id -> Nullable<Text>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Photos
///////////////////////////////////////////////////////////////////////

table! {
    photos (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        url -> Text,
        created_at -> BigInt,
    }
}

table! {
    planting_photos (rowid) {
        rowid -> BigInt,
        photo_id -> Text,
        planting_id -> Text,
    }
}

table! {
    harvest_photos (rowid) {
        rowid -> BigInt,
        photo_id -> Text,
        harvest_id -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Posts
///////////////////////////////////////////////////////////////////////

table! {
    post_crops (rowid) {
        rowid -> BigInt,
        post_id -> Text,
        crop_id -> Text,
    }
}

allow_tables_to_appear_in_same_query!(
    members,
    crops,
    crop_scientific_names,
    crop_alternate_names,
    plant_parts,
    plantings,
    harvests,
    photos,
    planting_photos,
    harvest_photos,
    post_crops,
);
