use super::*;

// =============================================================
// Catalog integrity
// =============================================================

#[test]
fn club_ids_are_unique() {
    for (i, a) in CLUBS.iter().enumerate() {
        for b in &CLUBS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn event_ids_are_unique() {
    for (i, a) in EVENTS.iter().enumerate() {
        for b in &EVENTS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn every_club_references_a_known_university() {
    for club in CLUBS {
        assert!(club.university().is_some(), "{}", club.id);
    }
}

#[test]
fn every_event_references_a_known_club() {
    for event in EVENTS {
        assert!(event.club().is_some(), "{}", event.id);
    }
}

#[test]
fn events_end_after_they_start() {
    for event in EVENTS {
        assert!(event.ends_at > event.starts_at, "{}", event.id);
    }
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn club_by_id_finds_existing_and_rejects_unknown() {
    assert_eq!(club_by_id("buet-robotics-society").map(|c| c.short_name), Some("BRS"));
    assert!(club_by_id("missing").is_none());
}

#[test]
fn event_by_id_finds_existing() {
    let event = event_by_id("nsubc-pitch-night").expect("event");
    assert_eq!(event.club_id, "nsu-business-club");
}

#[test]
fn events_for_club_filters_by_host() {
    let events = events_for_club("du-debating-society");
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.club_id == "du-debating-society"));
    assert!(events_for_club("missing").is_empty());
}

#[test]
fn university_name_falls_back_to_code() {
    let club = club_by_id("du-debating-society").expect("club");
    assert_eq!(club.university_name(), "University of Dhaka");

    let orphan = Club { university: "XYZ", ..*club };
    assert_eq!(orphan.university_name(), "XYZ");
}

// =============================================================
// ClubCategory
// =============================================================

#[test]
fn category_slugs_round_trip() {
    for category in ClubCategory::ALL {
        assert_eq!(ClubCategory::from_slug(category.slug()), Some(category));
    }
    assert_eq!(ClubCategory::from_slug("knitting"), None);
}
