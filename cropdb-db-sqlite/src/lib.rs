#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use cropdb_core::usecases as uc;
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

// Settings of the database file, applied once when the pool is created.
const DATABASE_PRAGMAS: &str = r#"
PRAGMA encoding = 'UTF-8';
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA wal_checkpoint(TRUNCATE);
"#;

// Settings that SQLite keeps per connection. Deleting a crop relies
// on enforced foreign keys to cascade to its names and mentions and
// to detach plantings, harvests and varieties.
const CONNECTION_PRAGMAS: &str = r#"
PRAGMA foreign_keys = 1;
PRAGMA recursive_triggers = 1;
PRAGMA busy_timeout = 5000;
"#;

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

#[derive(Debug)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

fn pooled_connection(pool: &ConnectionPool, access: &str) -> Fallible<PooledConnection> {
    pool.get().map_err(|err| {
        log::error!("No pooled {access} connection to the crop database available: {err}");
        err.into()
    })
}

/// Read access to the crop database.
///
/// Any number of readers may exist at the same time.
pub struct DbReadOnly<'a> {
    _guard: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// Exclusive write access to the crop database.
pub struct DbReadWrite<'a> {
    _guard: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// The connection of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl DbReadWrite<'_> {
    /// Runs `f` within a single transaction that is rolled
    /// back as a whole if `f` fails.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        // diesel only rolls back on its own error type,
        // so the use case error is kept aside.
        let mut failure: Option<uc::Error> = None;
        let result = self.conn.get_mut().transaction(|conn| {
            let conn: &mut SqliteConnection = conn;
            let conn = DbConnection {
                conn: RefCell::new(conn),
            };
            f(&conn).map_err(|err| {
                failure = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        result.map_err(|err| match failure {
            Some(failure) => failure,
            None => uc::Error::Repo(repo_impl::from_diesel_err(err)),
        })
    }
}

/// A pool of connections to the crop database.
///
/// Readers share the pool while a writer locks it exclusively,
/// which keeps SQLite from failing with "database is locked".
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // r2d2 would retry an inaccessible file silently
        use diesel::Connection as _;
        let mut conn = SqliteConnection::establish(url)?;
        conn.batch_execute(DATABASE_PRAGMAS)?;
        drop(conn);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(ConnectionManager::new(url))?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        let guard = self.pool.read();
        let conn = pooled_connection(&guard, "read-only")?;
        Ok(DbReadOnly {
            _guard: guard,
            conn: RefCell::new(conn),
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        let guard = self.pool.write();
        let conn = pooled_connection(&guard, "read/write")?;
        Ok(DbReadWrite {
            _guard: guard,
            conn: RefCell::new(conn),
        })
    }
}

pub fn run_embedded_database_migrations(mut db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let conn: &mut SqliteConnection = db.conn.get_mut();
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::{sql_types::Integer, RunQueryDsl as _};

    #[derive(QueryableByName)]
    struct ForeignKeys {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    fn foreign_keys_enabled(db: &DbReadOnly) -> bool {
        let pragma: ForeignKeys = diesel::sql_query("PRAGMA foreign_keys")
            .get_result(&mut **db.conn.borrow_mut())
            .unwrap();
        pragma.foreign_keys == 1
    }

    #[test]
    fn enforce_foreign_keys_on_every_pooled_connection() {
        let connections = Connections::init(":memory:", 2).unwrap();
        let first = connections.shared().unwrap();
        let second = connections.shared().unwrap();
        assert!(foreign_keys_enabled(&first));
        assert!(foreign_keys_enabled(&second));
    }

    #[test]
    fn roll_back_failed_transactions() {
        let connections = Connections::init(":memory:", 1).unwrap();
        run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
        let result = connections
            .exclusive()
            .unwrap()
            .transaction(|conn| -> Result<(), uc::Error> {
                diesel::sql_query("INSERT INTO members (id, login_name) VALUES ('m', 'bot')")
                    .execute(&mut **conn.conn.borrow_mut())
                    .map_err(repo_impl::from_diesel_err)?;
                Err(uc::Error::EmptyIdList)
            });
        assert!(matches!(result, Err(uc::Error::EmptyIdList)));
        let db = connections.shared().unwrap();
        #[derive(QueryableByName)]
        struct Count {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            count: i64,
        }
        let count: Count = diesel::sql_query("SELECT COUNT(*) AS count FROM members")
            .get_result(&mut **db.conn.borrow_mut())
            .unwrap();
        assert_eq!(0, count.count);
    }
}
