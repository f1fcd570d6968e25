use session::DEMO_ACCOUNTS;

use super::*;

fn request() -> ApplicationRequest {
    ApplicationRequest {
        full_name: "Nusrat Jahan".to_owned(),
        student_id: "1805042".to_owned(),
        department: "CSE".to_owned(),
        year: 3,
        email: "student@buet.ac.bd".to_owned(),
        phone: "01712345678".to_owned(),
        motivation: "Keen to join the rover software team this season.".to_owned(),
    }
}

#[test]
fn paths_format_expected_routes() {
    assert_eq!(club_path("ru-cricket-club"), "/clubs/ru-cricket-club");
    assert_eq!(event_path("scs-hack-week"), "/events/scs-hack-week");
}

#[test]
fn list_endpoints_return_whole_catalog() {
    assert_eq!(list_clubs().len(), CLUBS.len());
    assert_eq!(list_events().len(), EVENTS.len());
}

#[test]
fn get_club_and_event_resolve_known_ids() {
    assert_eq!(get_club("nsu-business-club").map(|c| c.short_name), Ok("NSUBC"));
    assert_eq!(get_event("bas-geminids-camp").map(|e| e.club_id), Ok("buet-astronomy-society"));
}

#[test]
fn unknown_ids_are_not_found() {
    assert_eq!(
        get_club("nope"),
        Err(ApiError::NotFound { kind: "club", id: "nope".to_owned() })
    );
    let err = get_event("nope").expect_err("missing");
    assert_eq!(err.to_string(), "event \"nope\" not found");
}

#[test]
fn submit_requires_a_signed_in_applicant() {
    let result = submit_application("buet-robotics-society", None, &request());
    assert_eq!(result, Err(ApiError::Unauthenticated));
}

#[test]
fn submit_to_unknown_club_is_not_found() {
    let user = DEMO_ACCOUNTS[2].identity();
    let result = submit_application("nope", Some(&user), &request());
    assert!(matches!(result, Err(ApiError::NotFound { kind: "club", .. })));
}

#[test]
fn submit_returns_increasing_references_for_the_club() {
    let user = DEMO_ACCOUNTS[2].identity();
    let first = submit_application("buet-robotics-society", Some(&user), &request()).expect("ok");
    let second = submit_application("buet-robotics-society", Some(&user), &request()).expect("ok");
    assert!(first.reference.starts_with("APP-BRS-"));
    assert_eq!(first.club_id, "buet-robotics-society");
    assert_eq!(first.applicant_id, user.id);

    let number = |r: &str| r.rsplit('-').next().and_then(|n| n.parse::<u32>().ok()).unwrap_or(0);
    assert!(number(&first.reference) >= FIRST_REFERENCE);
    assert!(number(&second.reference) > number(&first.reference));
}
