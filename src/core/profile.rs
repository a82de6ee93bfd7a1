use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_profile, load_visible_profiles, save_profile};
use crate::errors::{AppError, AppResult};
use crate::models::profile::{Profile, ProfileUpdate};
use crate::models::session::Session;
use crate::ui::messages::success;
use chrono::Local;

/// Case-insensitive substring match on a user name. An empty query
/// matches everyone.
pub fn matches_name(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

pub struct ProfileLogic;

impl ProfileLogic {
    /// The session user's profile; a blank one when nothing was saved yet.
    pub fn load(pool: &DbPool, session: &Session) -> AppResult<Profile> {
        Ok(load_profile(&pool.conn, &session.user)?
            .unwrap_or_else(|| Profile::blank(&session.user)))
    }

    /// Change the given fields of the session user's profile and save it.
    pub fn update(
        pool: &mut DbPool,
        session: &Session,
        update: &ProfileUpdate,
    ) -> AppResult<Profile> {
        if update.is_empty() {
            return Err(AppError::NothingToUpdate);
        }

        let mut profile = Self::load(pool, session)?;
        profile.apply(update);
        profile.updated_at = Local::now().to_rfc3339();
        save_profile(&pool.conn, &profile)?;

        audit_or_warn(
            &pool.conn,
            "profile",
            &session.user,
            &format!("profile saved ({})", profile.visibility().to_lowercase()),
        );
        success("Profile updated!");

        Ok(profile)
    }

    /// Visible part-timers, optionally narrowed by name.
    pub fn directory(pool: &DbPool, search: Option<&str>) -> AppResult<Vec<Profile>> {
        let all = load_visible_profiles(&pool.conn)?;
        Ok(match search {
            Some(q) => all.into_iter().filter(|p| matches_name(&p.user, q)).collect(),
            None => all,
        })
    }
}
