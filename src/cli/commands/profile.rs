use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile::ProfileLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::profile::{Profile, ProfileUpdate};
use crate::models::session::Session;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::formatting::bold;

/// Print the session user's profile, or update it with `--set`.
pub fn handle(cmd: &Commands, cfg: &Config, session: Option<&Session>) -> AppResult<()> {
    if let Commands::Profile {
        set,
        location,
        available,
        interested_category,
        skills,
        about,
        ..
    } = cmd
    {
        let session = Session::require(session)?;
        let mut pool = DbPool::open_ready(&cfg.database)?;

        let profile = if *set {
            let update = ProfileUpdate {
                location: location.clone(),
                available: *available,
                interested_category: interested_category.clone(),
                skills: skills.clone(),
                about: about.clone(),
            };
            ProfileLogic::update(&mut pool, session, &update)?
        } else {
            ProfileLogic::load(&pool, session)?
        };

        print_profile(&profile);
    }
    Ok(())
}

fn or_not_set(value: &str) -> String {
    if value.is_empty() {
        format!("{}Not set{}", GREY, RESET)
    } else {
        value.to_string()
    }
}

fn print_profile(p: &Profile) {
    header(&p.user);

    println!("{} {}", bold("Location:"), or_not_set(&p.location));
    println!(
        "{} {}",
        bold("Interested Job Category:"),
        or_not_set(&p.interested_category)
    );
    println!("{} {}", bold("Preferred Skills:"), or_not_set(&p.skills));
    println!("{} {}", bold("About:"), or_not_set(&p.about));

    let colour = if p.available { GREEN } else { GREY };
    println!(
        "{} {}{}{}",
        bold("Profile status:"),
        colour,
        p.visibility(),
        RESET
    );
}
