use crate::errors::{AppError, AppResult};

/// Identity of whoever runs the command. Resolved once at startup and
/// handed to every operation that acts on someone's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
}

impl Session {
    /// `--user` wins over the configured default. Blank names are ignored.
    pub fn resolve(cli_user: Option<&str>, default_user: Option<&str>) -> Option<Self> {
        cli_user
            .or(default_user)
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|u| Session {
                user: u.to_string(),
            })
    }

    pub fn require(session: Option<&Session>) -> AppResult<&Session> {
        session.ok_or(AppError::NoSession)
    }

    pub fn owns(&self, owner: &str) -> bool {
        self.user == owner
    }
}
