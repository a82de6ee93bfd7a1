use shiftboard::core::profile::{ProfileLogic, matches_name};
use shiftboard::db::pool::DbPool;
use shiftboard::errors::AppError;
use shiftboard::models::profile::{Profile, ProfileUpdate};
use shiftboard::models::session::Session;

fn session(user: &str) -> Session {
    Session {
        user: user.to_string(),
    }
}

fn located(location: &str) -> ProfileUpdate {
    ProfileUpdate {
        location: Some(location.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_unsaved_profile_is_blank_and_visible() {
    let pool = DbPool::in_memory().unwrap();
    let p = ProfileLogic::load(&pool, &session("bob")).unwrap();

    assert_eq!(p, Profile::blank("bob"));
    assert!(p.available);
    assert_eq!(p.visibility(), "Visible");
}

#[test]
fn test_update_changes_only_given_fields() {
    let mut pool = DbPool::in_memory().unwrap();
    let bob = session("bob");

    let update = ProfileUpdate {
        location: Some(" Napoli ".to_string()),
        skills: Some("barista, cashier".to_string()),
        ..Default::default()
    };
    ProfileLogic::update(&mut pool, &bob, &update).unwrap();

    let hide = ProfileUpdate {
        available: Some(false),
        about: Some("Student, free on weekends.".to_string()),
        ..Default::default()
    };
    let p = ProfileLogic::update(&mut pool, &bob, &hide).unwrap();

    assert_eq!(p.location, "Napoli");
    assert_eq!(p.skills, "barista, cashier");
    assert_eq!(p.about, "Student, free on weekends.");
    assert_eq!(p.interested_category, "");
    assert_eq!(p.visibility(), "Hidden");
    assert!(chrono::DateTime::parse_from_rfc3339(&p.updated_at).is_ok());

    assert_eq!(ProfileLogic::load(&pool, &bob).unwrap(), p);
}

#[test]
fn test_empty_update_is_rejected() {
    let mut pool = DbPool::in_memory().unwrap();
    assert!(matches!(
        ProfileLogic::update(&mut pool, &session("bob"), &ProfileUpdate::default()),
        Err(AppError::NothingToUpdate)
    ));
}

#[test]
fn test_directory_lists_visible_profiles_by_name() {
    let mut pool = DbPool::in_memory().unwrap();
    ProfileLogic::update(&mut pool, &session("Marco"), &located("Roma")).unwrap();
    ProfileLogic::update(&mut pool, &session("anna"), &located("Pisa")).unwrap();
    ProfileLogic::update(&mut pool, &session("marta"), &located("Lucca")).unwrap();

    let hidden = ProfileUpdate {
        available: Some(false),
        ..Default::default()
    };
    ProfileLogic::update(&mut pool, &session("marta"), &hidden).unwrap();

    let all = ProfileLogic::directory(&pool, None).unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.user.as_str()).collect();
    assert_eq!(names, vec!["Marco", "anna"]);

    let hits = ProfileLogic::directory(&pool, Some("MAR")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].location, "Roma");

    assert!(ProfileLogic::directory(&pool, Some("zoe")).unwrap().is_empty());
}

#[test]
fn test_matches_name() {
    assert!(matches_name("Anna Rossi", "rossi"));
    assert!(matches_name("Anna Rossi", ""));
    assert!(!matches_name("Anna Rossi", "bianchi"));
}
