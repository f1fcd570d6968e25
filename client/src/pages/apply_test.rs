use super::*;

#[test]
fn apply_path_nests_under_club() {
    assert_eq!(apply_path("ru-cricket-club"), "/clubs/ru-cricket-club/apply");
}

#[test]
fn submit_label_tracks_status() {
    assert_eq!(submit_label(&SubmitStatus::Editing), "Submit application");
    assert_eq!(submit_label(&SubmitStatus::Submitting), "Submitting...");
    assert_eq!(submit_label(&SubmitStatus::Failed("x".to_owned())), "Try again");
}

#[test]
fn route_club_id_follows_param_changes() {
    let owner = Owner::new();
    owner.set();
    let param = RwSignal::new(Some("ru-cricket-club".to_owned()));
    let club_id = route_club_id(move || param.get());
    assert_eq!(club_id.get_untracked(), "ru-cricket-club");

    param.set(Some("sust-cse-society".to_owned()));
    assert_eq!(club_id.get_untracked(), "sust-cse-society");
    assert_eq!(get_club(&club_id.get_untracked()).map(|c| c.id), Ok("sust-cse-society"));
    assert_eq!(apply_path(&club_id.get_untracked()), "/clubs/sust-cse-society/apply");
}

#[test]
fn route_club_id_is_empty_without_param() {
    let owner = Owner::new();
    owner.set();
    let param = RwSignal::new(None::<String>);
    let club_id = route_club_id(move || param.get());
    assert_eq!(club_id.get_untracked(), "");
    assert!(get_club(&club_id.get_untracked()).is_err());
}
