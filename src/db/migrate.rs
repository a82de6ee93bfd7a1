use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migration bookkeeping lives in it,
/// so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [now.as_str(), version, message],
    )?;
    Ok(())
}

fn create_listings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS listings (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            owner            TEXT NOT NULL,
            category         TEXT NOT NULL,
            short_desc       TEXT NOT NULL,
            long_desc        TEXT NOT NULL,
            location         TEXT NOT NULL,
            duration_from    TEXT NOT NULL,
            duration_upto    TEXT NOT NULL,
            start_of_shift   TEXT NOT NULL,
            end_of_shift     TEXT NOT NULL,
            break_hours      REAL NOT NULL DEFAULT 0,
            salary           REAL NOT NULL,
            salary_condition TEXT NOT NULL DEFAULT '',
            status           TEXT NOT NULL DEFAULT 'active' CHECK(status IN ('active','closed')),
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_listings_owner ON listings(owner);
        CREATE INDEX IF NOT EXISTS idx_listings_status ON listings(status);
        "#,
    )?;
    Ok(())
}

fn create_applications_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS applications (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            listing_id  INTEGER NOT NULL REFERENCES listings(id) ON DELETE CASCADE,
            applicant   TEXT NOT NULL,
            amount      REAL NOT NULL,
            bid_amount  REAL,
            bid_reason  TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL,
            UNIQUE(listing_id, applicant)
        );

        CREATE INDEX IF NOT EXISTS idx_applications_listing ON applications(listing_id);
        "#,
    )?;
    Ok(())
}

fn create_profiles_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            username            TEXT PRIMARY KEY,
            location            TEXT NOT NULL DEFAULT '',
            available           INTEGER NOT NULL DEFAULT 1,
            interested_category TEXT NOT NULL DEFAULT '',
            skills              TEXT NOT NULL DEFAULT '',
            about               TEXT NOT NULL DEFAULT '',
            updated_at          TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

type Step = fn(&Connection) -> Result<()>;

const MIGRATIONS: &[(&str, &str, Step)] = &[
    (
        "20251018_0001_create_listings",
        "Created listings table",
        create_listings_table,
    ),
    (
        "20251018_0002_create_applications",
        "Created applications table",
        create_applications_table,
    ),
    (
        "20251018_0003_create_profiles",
        "Created profiles table",
        create_profiles_table,
    ),
];

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::initialize::init_db(). Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
