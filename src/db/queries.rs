use crate::errors::{AppError, AppResult};
use crate::models::application::Application;
use crate::models::listing::{Listing, NewListing};
use crate::models::listing_status::ListingStatus;
use crate::models::profile::Profile;
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const LISTING_COLUMNS: &str = "id, owner, category, short_desc, long_desc, location, \
     duration_from, duration_upto, start_of_shift, end_of_shift, break_hours, \
     salary, salary_condition, status, created_at";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn get_date(row: &Row, col: usize) -> Result<NaiveDate> {
    let s: String = row.get(col)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| conversion_error(col, AppError::InvalidDate(s)))
}

fn get_time(row: &Row, col: usize) -> Result<NaiveTime> {
    let s: String = row.get(col)?;
    NaiveTime::parse_from_str(&s, "%H:%M").map_err(|_| conversion_error(col, AppError::InvalidTime(s)))
}

pub fn map_listing(row: &Row) -> Result<Listing> {
    let status_str: String = row.get(13)?;
    let status = ListingStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(13, AppError::InvalidStatus(status_str.clone())))?;

    Ok(Listing {
        id: row.get(0)?,
        owner: row.get(1)?,
        category: row.get(2)?,
        short_desc: row.get(3)?,
        long_desc: row.get(4)?,
        location: row.get(5)?,
        duration_from: get_date(row, 6)?,
        duration_upto: get_date(row, 7)?,
        start_of_shift: get_time(row, 8)?,
        end_of_shift: get_time(row, 9)?,
        break_hours: row.get(10)?,
        salary: row.get(11)?,
        salary_condition: row.get(12)?,
        status,
        created_at: row.get(14)?,
    })
}

pub fn map_application(row: &Row) -> Result<Application> {
    Ok(Application {
        id: row.get("id")?,
        listing_id: row.get("listing_id")?,
        applicant: row.get("applicant")?,
        amount: row.get("amount")?,
        bid_amount: row.get("bid_amount")?,
        bid_reason: row.get("bid_reason")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_listing(
    conn: &Connection,
    owner: &str,
    listing: &NewListing,
    created_at: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO listings (owner, category, short_desc, long_desc, location,
            duration_from, duration_upto, start_of_shift, end_of_shift, break_hours,
            salary, salary_condition, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            owner,
            listing.category,
            listing.short_desc,
            listing.long_desc,
            listing.location,
            format_date(&listing.duration_from),
            format_date(&listing.duration_upto),
            format_time(&listing.start_of_shift),
            format_time(&listing.end_of_shift),
            listing.break_hours,
            listing.salary,
            listing.salary_condition,
            ListingStatus::Active.to_db_str(),
            created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace the editable fields of a listing. Status, owner and creation
/// time are kept.
pub fn update_listing(conn: &Connection, id: i64, listing: &NewListing) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE listings SET category = ?1, short_desc = ?2, long_desc = ?3, location = ?4,
            duration_from = ?5, duration_upto = ?6, start_of_shift = ?7, end_of_shift = ?8,
            break_hours = ?9, salary = ?10, salary_condition = ?11
         WHERE id = ?12",
        params![
            listing.category,
            listing.short_desc,
            listing.long_desc,
            listing.location,
            format_date(&listing.duration_from),
            format_date(&listing.duration_upto),
            format_time(&listing.start_of_shift),
            format_time(&listing.end_of_shift),
            listing.break_hours,
            listing.salary,
            listing.salary_condition,
            id,
        ],
    )?;

    if n == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn load_listing(conn: &Connection, id: i64) -> AppResult<Option<Listing>> {
    let sql = format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.query_row([id], map_listing).optional()?)
}

/// Owner-scoped lookup: someone else's listing is reported as missing.
pub fn load_owned_listing(conn: &Connection, id: i64, owner: &str) -> AppResult<Listing> {
    let sql = format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?1 AND owner = ?2");
    let mut stmt = conn.prepare(&sql)?;
    stmt.query_row(params![id, owner], map_listing)
        .optional()?
        .ok_or(AppError::NotFound(id))
}

/// Newest first, optionally narrowed to one owner and/or one status.
pub fn load_listings(
    conn: &Connection,
    owner: Option<&str>,
    status: Option<ListingStatus>,
) -> AppResult<Vec<Listing>> {
    let mut sql = format!("SELECT {LISTING_COLUMNS} FROM listings");
    let mut conditions = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(o) = owner {
        conditions.push("owner = ?");
        values.push(o.to_string());
    }
    if let Some(s) = status {
        conditions.push("status = ?");
        values.push(s.to_db_str().to_string());
    }

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values.iter()), map_listing)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_status(conn: &Connection, id: i64, status: ListingStatus) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE listings SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn has_applied(conn: &Connection, listing_id: i64, applicant: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare_cached("SELECT 1 FROM applications WHERE listing_id = ?1 AND applicant = ?2")?;
    Ok(stmt
        .query_row(params![listing_id, applicant], |_| Ok(()))
        .optional()?
        .is_some())
}

pub fn insert_application(
    conn: &Connection,
    listing_id: i64,
    applicant: &str,
    amount: f64,
    bid_amount: Option<f64>,
    bid_reason: &str,
    created_at: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO applications (listing_id, applicant, amount, bid_amount, bid_reason, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![listing_id, applicant, amount, bid_amount, bid_reason, created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_applications(conn: &Connection, listing_id: i64) -> AppResult<Vec<Application>> {
    let mut stmt = conn.prepare(
        "SELECT id, listing_id, applicant, amount, bid_amount, bid_reason, created_at
         FROM applications
         WHERE listing_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([listing_id], map_application)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

const PROFILE_COLUMNS: &str =
    "username, location, available, interested_category, skills, about, updated_at";

pub fn map_profile(row: &Row) -> Result<Profile> {
    Ok(Profile {
        user: row.get("username")?,
        location: row.get("location")?,
        available: row.get("available")?,
        interested_category: row.get("interested_category")?,
        skills: row.get("skills")?,
        about: row.get("about")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn load_profile(conn: &Connection, user: &str) -> AppResult<Option<Profile>> {
    let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE username = ?1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.query_row([user], map_profile).optional()?)
}

/// Insert the profile, or replace every field of the existing one.
pub fn save_profile(conn: &Connection, p: &Profile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO profiles (username, location, available, interested_category, skills, about, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(username) DO UPDATE SET
            location = excluded.location,
            available = excluded.available,
            interested_category = excluded.interested_category,
            skills = excluded.skills,
            about = excluded.about,
            updated_at = excluded.updated_at",
        params![
            p.user,
            p.location,
            p.available,
            p.interested_category,
            p.skills,
            p.about,
            p.updated_at,
        ],
    )?;
    Ok(())
}

/// Visible profiles, by user name.
pub fn load_visible_profiles(conn: &Connection) -> AppResult<Vec<Profile>> {
    let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE available = 1 ORDER BY username ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_profile)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
