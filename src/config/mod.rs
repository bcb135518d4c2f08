use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "cropdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub import: Import,
    pub listing: Listing,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
    /// File system directory for the full-text search index.
    pub index_dir: Option<PathBuf>,
}

pub struct Import {
    /// Login name of the member that creates imported crops
    pub bot_login_name: String,
    pub approve_imported: bool,
}

pub struct Listing {
    pub interesting_limit: usize,
    pub search_limit: usize,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            import,
            listing,
        } = from;

        // Missing sections are taken from the default configuration
        let defaults = raw::Config::try_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
            index_dir,
        } = db
            .or(defaults.db)
            .ok_or_else(|| anyhow!("Missing database configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("Invalid connection pool size: {connection_pool_size}"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
            index_dir,
        };

        let raw::Import {
            bot_login_name,
            approve_imported,
        } = import
            .or(defaults.import)
            .ok_or_else(|| anyhow!("Missing import configuration"))?;
        let bot_login_name = bot_login_name.trim().to_string();
        if bot_login_name.is_empty() {
            return Err(anyhow!("Missing login name of the import bot"));
        }
        let import = Import {
            bot_login_name,
            approve_imported,
        };

        let raw::Listing {
            interesting_limit,
            search_limit,
        } = listing
            .or(defaults.listing)
            .ok_or_else(|| anyhow!("Missing listing configuration"))?;
        if interesting_limit == 0 || search_limit == 0 {
            return Err(anyhow!("Listing limits must be positive"));
        }
        let listing = Listing {
            interesting_limit,
            search_limit,
        };

        Ok(Self {
            db,
            import,
            listing,
        })
    }
}
