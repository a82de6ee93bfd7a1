use shiftboard::core::apply::{ApplyLogic, Bid};
use shiftboard::core::browse::{BrowseFilter, BrowseLogic, filter_by_category, matches_category};
use shiftboard::core::post::{PostLogic, PostOutcome};
use shiftboard::core::status::StatusLogic;
use shiftboard::db::log::load_log;
use shiftboard::db::pool::DbPool;
use shiftboard::db::queries::load_listing;
use shiftboard::errors::AppError;
use shiftboard::models::draft::{ListingDraft, RawDraft};
use shiftboard::models::listing_status::ListingStatus;
use shiftboard::models::session::Session;

fn session(user: &str) -> Session {
    Session {
        user: user.to_string(),
    }
}

fn raw(category: &str) -> RawDraft {
    let s = |v: &str| Some(v.to_string());
    RawDraft {
        category: s(category),
        short_desc: s("Short"),
        location: s("Roma"),
        duration_from: s("2024-01-10"),
        duration_upto: s("2024-01-12"),
        start_of_shift: s("08:00"),
        end_of_shift: s("12:00"),
        break_hours: None,
        salary: s("60"),
        salary_condition: s("per shift"),
        long_desc: s("Morning shift."),
    }
}

fn seeded() -> DbPool {
    let mut pool = DbPool::in_memory().unwrap();
    let alice = session("alice");
    let dave = session("dave");
    PostLogic::apply(&mut pool, &alice, &raw("Cleaning"), None).unwrap();
    PostLogic::apply(&mut pool, &alice, &raw("Waiter"), None).unwrap();
    PostLogic::apply(&mut pool, &dave, &raw("Window CLEANING"), None).unwrap();
    pool
}

#[test]
fn test_matches_category_is_case_insensitive_substring() {
    assert!(matches_category("House Cleaning", "clean"));
    assert!(matches_category("House Cleaning", "HOUSE"));
    assert!(matches_category("House Cleaning", ""));
    assert!(!matches_category("Waiter", "clean"));
    assert!(!matches_category("Waiter", "waiter "));
}

#[test]
fn test_search_filters_loaded_listings() {
    let pool = seeded();
    let all = BrowseLogic::list(&pool, &BrowseFilter::default()).unwrap();
    assert_eq!(all.len(), 3);

    let hits = filter_by_category(&all, "cleaning");
    let cats: Vec<&str> = hits.iter().map(|l| l.category.as_str()).collect();
    assert_eq!(cats, vec!["Window CLEANING", "Cleaning"]);

    assert_eq!(filter_by_category(&all, "").len(), 3);
    assert!(filter_by_category(&all, "driver").is_empty());
}

#[test]
fn test_list_mine_and_status() {
    let mut pool = seeded();
    let alice = session("alice");

    let filter = BrowseFilter {
        owner: Some(&alice),
        ..Default::default()
    };
    let mine = BrowseLogic::list(&pool, &filter).unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|l| l.owner == "alice"));

    StatusLogic::set(&mut pool, &alice, 1, ListingStatus::Closed).unwrap();

    let filter = BrowseFilter {
        status: Some(ListingStatus::Active),
        ..Default::default()
    };
    let active = BrowseLogic::list(&pool, &filter).unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|l| l.id != 1));
}

#[test]
fn test_edit_requires_ownership() {
    let mut pool = seeded();
    let dave = session("dave");

    let err = PostLogic::apply(&mut pool, &dave, &raw("Stolen"), Some(1)).unwrap_err();
    assert!(matches!(err, AppError::NotFound(1)));

    let alice = session("alice");
    let out = PostLogic::apply(&mut pool, &alice, &raw("Deep cleaning"), Some(1)).unwrap();
    assert_eq!(out, PostOutcome::Updated(1));

    let l = load_listing(&pool.conn, 1).unwrap().unwrap();
    assert_eq!(l.category, "Deep cleaning");
    assert_eq!(l.owner, "alice");
    assert_eq!(l.status, ListingStatus::Active);
}

#[test]
fn test_post_stores_schedule_even_with_warnings() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut r = raw("Night guard");
    r.start_of_shift = Some("22:00".to_string());
    r.end_of_shift = Some("06:00".to_string());

    let out = PostLogic::apply(&mut pool, &session("erin"), &r, None).unwrap();
    let l = load_listing(&pool.conn, out.id()).unwrap().unwrap();

    assert!(l.draft().evaluate().has_warnings());
    assert_eq!(l.break_hours, 0.0);
}

#[test]
fn test_apply_and_bid_rules() {
    let mut pool = seeded();
    let alice = session("alice");
    let bob = session("bob");
    let carol = session("carol");

    assert!(matches!(
        ApplyLogic::apply(&mut pool, &alice, 1, None),
        Err(AppError::OwnListing(1))
    ));
    assert!(matches!(
        ApplyLogic::apply(&mut pool, &bob, 99, None),
        Err(AppError::NotFound(99))
    ));

    ApplyLogic::apply(&mut pool, &bob, 1, None).unwrap();
    assert!(matches!(
        ApplyLogic::apply(&mut pool, &bob, 1, None),
        Err(AppError::AlreadyApplied(1))
    ));

    let bid = Bid::new(75.0, Some("  five years of experience ")).unwrap();
    ApplyLogic::apply(&mut pool, &carol, 1, Some(bid)).unwrap();

    let (listing, apps) = ApplyLogic::applicants(&pool, &alice, 1).unwrap();
    assert_eq!(listing.category, "Cleaning");
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].applicant, "bob");
    assert_eq!(apps[0].amount, 60.0);
    assert!(!apps[0].is_bid());
    assert_eq!(apps[1].bid_amount, Some(75.0));
    assert_eq!(apps[1].bid_reason, "five years of experience");

    assert!(matches!(
        ApplyLogic::applicants(&pool, &bob, 1),
        Err(AppError::NotFound(1))
    ));
}

#[test]
fn test_bid_must_be_positive() {
    assert!(matches!(Bid::new(0.0, None), Err(AppError::InvalidNumber(_))));
    assert!(matches!(Bid::new(-10.0, None), Err(AppError::InvalidNumber(_))));
    assert!(matches!(Bid::new(f64::NAN, None), Err(AppError::InvalidNumber(_))));
}

#[test]
fn test_closed_listing_rejects_applications() {
    let mut pool = seeded();
    StatusLogic::set(&mut pool, &session("alice"), 2, ListingStatus::Closed).unwrap();

    assert!(matches!(
        ApplyLogic::apply(&mut pool, &session("bob"), 2, None),
        Err(AppError::ListingClosed(2))
    ));

    assert!(matches!(
        StatusLogic::set(&mut pool, &session("bob"), 2, ListingStatus::Active),
        Err(AppError::NotFound(2))
    ));
}

#[test]
fn test_session_resolution() {
    assert_eq!(
        Session::resolve(Some("bob"), Some("alice")),
        Some(session("bob"))
    );
    assert_eq!(Session::resolve(None, Some("alice")), Some(session("alice")));
    assert_eq!(Session::resolve(Some("  "), None), None);
    assert_eq!(Session::resolve(None, None), None);
    assert!(matches!(Session::require(None), Err(AppError::NoSession)));
}

#[test]
fn test_status_codes() {
    assert_eq!(ListingStatus::from_code("Closed"), Some(ListingStatus::Closed));
    assert_eq!(ListingStatus::from_code(" active "), Some(ListingStatus::Active));
    assert_eq!(ListingStatus::from_code("paused"), None);
}

#[test]
fn test_partial_edit_keeps_stored_fields() {
    let mut pool = seeded();
    let alice = session("alice");

    let changes = RawDraft {
        salary: Some("20".to_string()),
        ..Default::default()
    };
    let out = PostLogic::apply(&mut pool, &alice, &changes, Some(1)).unwrap();
    assert_eq!(out, PostOutcome::Updated(1));

    let l = load_listing(&pool.conn, 1).unwrap().unwrap();
    assert_eq!(l.salary, 20.0);
    assert_eq!(l.category, "Cleaning");
    assert_eq!(l.short_desc, "Short");
    assert_eq!(l.salary_condition, "per shift");
    assert_eq!(
        l.draft().evaluate().shift.unwrap().message,
        "Duration (less break): 4 hour(s) 0 minute(s)"
    );

    // a partial edit still goes through validation on the merged form
    let bad = RawDraft {
        end_of_shift: Some("noon".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        PostLogic::apply(&mut pool, &alice, &bad, Some(1)),
        Err(AppError::InvalidTime(_))
    ));

    // someone else's listing is not found, even for a partial edit
    assert!(matches!(
        PostLogic::apply(&mut pool, &session("dave"), &changes, Some(2)),
        Err(AppError::NotFound(2))
    ));
}

#[test]
fn test_stored_shift_gives_the_same_advisory_as_the_form() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut r = raw("Barista");
    r.start_of_shift = Some("09:00:45".to_string());
    r.end_of_shift = Some("09:00:30".to_string());

    let at_post = ListingDraft::from_raw(&r).evaluate();
    let out = PostLogic::apply(&mut pool, &session("erin"), &r, None).unwrap();
    let stored = load_listing(&pool.conn, out.id()).unwrap().unwrap();

    assert_eq!(stored.draft().evaluate(), at_post);
    assert_eq!(
        at_post.shift.unwrap().message,
        "Duration (less break): 0 hour(s) 0 minute(s)"
    );
}

#[test]
fn test_log_dates_share_one_format() {
    let pool = seeded();
    let entries = load_log(&pool.conn).unwrap();

    assert!(entries.iter().any(|e| e.operation == "migration_applied"));
    assert!(entries.iter().any(|e| e.operation == "post"));
    for e in &entries {
        assert!(
            chrono::DateTime::parse_from_rfc3339(&e.date).is_ok(),
            "log date not RFC 3339: {}",
            e.date
        );
    }
}
