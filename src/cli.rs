use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use cropdb_application::prelude as flows;
use cropdb_core::{
    db::Db,
    entities::{ApprovalStatus, Crop, CropPopularity, RejectionReason},
    usecases,
    util::sort::CropOrder,
};
use cropdb_db_sqlite as sqlite;
use cropdb_db_tantivy as tantivy;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "cropdb", version, about = "Crop database of a gardening community")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL of the SQLite database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import crops from a CSV file without a header row
    Import {
        csv_file: PathBuf,
        /// Approve all imported crops
        #[arg(long)]
        approve: bool,
    },
    /// Change the approval status of crops
    Review {
        /// approved, pending or rejected
        status: ApprovalStatus,
        #[arg(required = true)]
        crop_ids: Vec<String>,
        /// "already in database", "not edible", "not enough information" or "other"
        #[arg(long)]
        reason: Option<RejectionReason>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Create a pending crop
    Add {
        name: String,
        #[arg(long)]
        wikipedia_url: Option<String>,
        /// ID of the crop this crop is a variety of
        #[arg(long)]
        parent: Option<String>,
        /// Comma-separated scientific names
        #[arg(long, default_value = "")]
        scientific_names: String,
        /// Comma-separated alternate names
        #[arg(long, default_value = "")]
        alternate_names: String,
    },
    /// Add names to a crop
    AddNames {
        crop_id: String,
        /// Comma-separated scientific names
        #[arg(long, default_value = "")]
        scientific_names: String,
        /// Comma-separated alternate names
        #[arg(long, default_value = "")]
        alternate_names: String,
    },
    /// Make a crop a variety of another crop or a top level crop
    SetParent {
        crop_id: String,
        /// Omit to move the crop to the top level
        parent_id: Option<String>,
    },
    /// Delete a crop and remove it from the search index
    Delete { crop_id: String },
    /// Search approved crops by name
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Approved crops ordered by their number of plantings
    Popular,
    /// Approved crops with many plantings and photos
    Interesting,
    /// Approved crops that are not a variety of another crop
    Toplevel {
        /// Order by creation time
        #[arg(long)]
        recent: bool,
    },
    /// Crops that wait for a review
    Pending {
        /// Order by creation time
        #[arg(long)]
        recent: bool,
    },
    /// Show a crop with its names and statistics
    Show { crop_id: String },
    /// Rebuild the full-text search index
    Reindex,
}

fn crop_order(recent: bool) -> CropOrder {
    if recent {
        CropOrder::Recent
    } else {
        CropOrder::Name
    }
}

fn print_crops(crops: &[Crop]) {
    for crop in crops {
        println!("{}\t{}", crop.id, crop.name);
    }
}

fn print_names(label: &str, names: &[String]) {
    if !names.is_empty() {
        println!("{label}: {}", names.join(", "));
    }
}

fn show_crop<R: Db>(db: &R, crop_id: &str) -> Result<()> {
    let crop = usecases::get_crop(db, crop_id)?;
    println!("{} ({})", crop.name, crop.id);
    println!("status: {}", crop.approval_status);
    if let Some(explanation) = crop.rejection_explanation() {
        println!("rejected: {explanation}");
    }
    if let Some(url) = &crop.en_wikipedia_url {
        println!("wikipedia: {url}");
    }
    if let Some(parent) = usecases::parent(db, &crop)? {
        println!("variety of: {}", parent.name);
    }
    if let Some(name) = usecases::default_scientific_name(db, &crop)? {
        println!("default scientific name: {name}");
    }
    let (scientific_names, alternate_names) = usecases::load_crop_names(db, crop.id.as_str())?;
    print_names("scientific names", &scientific_names);
    print_names("alternate names", &alternate_names);
    let varieties: Vec<_> = usecases::varieties(db, &crop, CropOrder::Name)?
        .into_iter()
        .map(|c| c.name)
        .collect();
    print_names("varieties", &varieties);

    let parts: Vec<_> = usecases::popular_plant_parts(db, crop.id.as_str())?
        .into_iter()
        .map(|f| format!("{} ({})", f.0.name, f.1))
        .collect();
    print_names("harvested plant parts", &parts);
    for (sunniness, count) in usecases::sunniness(db, crop.id.as_str())? {
        println!("sunniness {sunniness}: {count}");
    }
    for (planted_from, count) in usecases::planted_from(db, crop.id.as_str())? {
        println!("planted from {planted_from}: {count}");
    }
    if let Some(photo) = usecases::default_photo(db, crop.id.as_str())? {
        println!("photo: {}", photo.url);
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections =
        sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    info!("Initializing Tantivy full-text search engine");
    let mut search_engine = tantivy::SearchEngine::init_with_path(cfg.db.index_dir.as_ref())?;

    match args.command {
        Command::Import { csv_file, approve } => {
            let settings = flows::ImportSettings {
                bot_login_name: cfg.import.bot_login_name,
                approve: approve || cfg.import.approve_imported,
            };
            let reader = BufReader::new(File::open(&csv_file)?);
            let report =
                flows::import_crops_from_csv(&connections, &mut search_engine, reader, &settings)?;
            println!(
                "Imported {} rows ({} new crops)",
                report.imported.len(),
                report.created_count()
            );
            for failure in &report.failures {
                println!("line {}: {}", failure.line, failure.error);
            }
        }
        Command::Review {
            status,
            crop_ids,
            reason,
            notes,
        } => {
            let review = usecases::CropReview {
                status,
                reason,
                notes,
            };
            let ids: Vec<_> = crop_ids.iter().map(String::as_str).collect();
            let reviewed = flows::review_crops(&connections, &mut search_engine, &ids, review)?;
            println!(
                "Reviewed {} crops ({} approved, {} unapproved)",
                reviewed.count,
                reviewed.approved.len(),
                reviewed.unapproved.len()
            );
        }
        Command::Add {
            name,
            wikipedia_url,
            parent,
            scientific_names,
            alternate_names,
        } => {
            let new_crop = usecases::NewCrop {
                name,
                en_wikipedia_url: wikipedia_url,
                parent_id: parent,
                creator: None,
            };
            let crop =
                flows::create_crop(&connections, new_crop, &scientific_names, &alternate_names)?;
            println!("Created crop '{}' ({})", crop.name, crop.id);
        }
        Command::AddNames {
            crop_id,
            scientific_names,
            alternate_names,
        } => {
            let added = flows::add_crop_names(
                &connections,
                &mut search_engine,
                &crop_id,
                &scientific_names,
                &alternate_names,
            )?;
            println!("Added {} names", added.len());
        }
        Command::SetParent { crop_id, parent_id } => {
            let crop = flows::set_crop_parent(&connections, &crop_id, parent_id.as_deref())?;
            match crop.parent_id {
                Some(parent_id) => println!("'{}' is a variety of {parent_id}", crop.name),
                None => println!("'{}' is a top level crop", crop.name),
            }
        }
        Command::Delete { crop_id } => {
            let crop = flows::delete_crop(&connections, &mut search_engine, &crop_id)?;
            println!("Deleted crop '{}'", crop.name);
        }
        Command::Search { query } => {
            let db = connections.shared()?;
            let crops = usecases::search_crops(
                &db,
                &search_engine,
                &query.join(" "),
                cfg.listing.search_limit,
            )?;
            print_crops(&crops);
        }
        Command::Popular => {
            let db = connections.shared()?;
            for CropPopularity(crop, count) in usecases::popular_crops(&db)? {
                println!("{}\t{}\t{}", crop.id, crop.name, count);
            }
        }
        Command::Interesting => {
            let db = connections.shared()?;
            let crops = usecases::interesting_crops(&db, cfg.listing.interesting_limit)?;
            print_crops(&crops);
        }
        Command::Toplevel { recent } => {
            let db = connections.shared()?;
            print_crops(&usecases::toplevel_crops(&db, crop_order(recent))?);
        }
        Command::Pending { recent } => {
            let db = connections.shared()?;
            print_crops(&usecases::pending_crops(&db, crop_order(recent))?);
        }
        Command::Show { crop_id } => {
            let db = connections.shared()?;
            show_crop(&db, &crop_id)?;
        }
        Command::Reindex => {
            let count = flows::rebuild_index(&connections, &mut search_engine)?;
            println!("Indexed {count} crops");
        }
    }
    Ok(())
}
