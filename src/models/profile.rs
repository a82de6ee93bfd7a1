use serde::Serialize;

/// What a user shows about themselves to the other side of the board.
///
/// Only visible profiles appear in the part-timer directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub user: String,
    pub location: String,
    pub available: bool,
    pub interested_category: String,
    pub skills: String,
    pub about: String,
    pub updated_at: String,
}

/// Fields to change on a profile. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub location: Option<String>,
    pub available: Option<bool>,
    pub interested_category: Option<String>,
    pub skills: Option<String>,
    pub about: Option<String>,
}

impl Profile {
    /// A profile nobody has filled in yet. New profiles start visible.
    pub fn blank(user: &str) -> Self {
        Profile {
            user: user.to_string(),
            location: String::new(),
            available: true,
            interested_category: String::new(),
            skills: String::new(),
            about: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn apply(&mut self, update: &ProfileUpdate) {
        let set = |field: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *field = v.trim().to_string();
            }
        };
        set(&mut self.location, &update.location);
        set(&mut self.interested_category, &update.interested_category);
        set(&mut self.skills, &update.skills);
        set(&mut self.about, &update.about);
        if let Some(a) = update.available {
            self.available = a;
        }
    }

    pub fn visibility(&self) -> &'static str {
        if self.available { "Visible" } else { "Hidden" }
    }
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ProfileUpdate::default()
    }
}
