//! Static catalog of universities, clubs, and events.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. Every page reads from these arrays, either directly
//! or through the mock REST helpers in `net::api`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod catalog;

pub use catalog::{CLUBS, EVENTS, UNIVERSITIES};

/// A participating university.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct University {
    /// Short code used in filters (e.g. `"DU"`).
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

/// Club grouping used by the directory filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClubCategory {
    Technology,
    Cultural,
    Sports,
    Debate,
    Volunteering,
    Business,
    Science,
}

impl ClubCategory {
    pub const ALL: [Self; 7] = [
        Self::Technology,
        Self::Cultural,
        Self::Sports,
        Self::Debate,
        Self::Volunteering,
        Self::Business,
        Self::Science,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Cultural => "Cultural",
            Self::Sports => "Sports",
            Self::Debate => "Debate",
            Self::Volunteering => "Volunteering",
            Self::Business => "Business",
            Self::Science => "Science",
        }
    }

    /// URL/query slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Cultural => "cultural",
            Self::Sports => "sports",
            Self::Debate => "debate",
            Self::Volunteering => "volunteering",
            Self::Business => "business",
            Self::Science => "science",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// A student club.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Club {
    /// Route slug, unique across the catalog.
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    /// University code, see [`University::code`].
    pub university: &'static str,
    pub category: ClubCategory,
    pub description: &'static str,
    pub founded: u16,
    pub members: u32,
    /// Follower count before the viewer's own follow.
    pub followers: u32,
    pub tags: &'static [&'static str],
    pub contact_email: &'static str,
    pub meeting_place: &'static str,
}

impl Club {
    #[must_use]
    pub fn university(&self) -> Option<&'static University> {
        university_by_code(self.university)
    }

    /// Full university name, falling back to the code.
    #[must_use]
    pub fn university_name(&self) -> &'static str {
        self.university().map_or(self.university, |u| u.name)
    }
}

/// A club event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: &'static str,
    pub club_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub venue: &'static str,
    /// Start, milliseconds since the Unix epoch.
    pub starts_at: i64,
    /// End, milliseconds since the Unix epoch.
    pub ends_at: i64,
    pub capacity: u32,
    /// Upvotes before the viewer's own vote.
    pub upvotes: u32,
    pub tags: &'static [&'static str],
}

impl Event {
    #[must_use]
    pub fn club(&self) -> Option<&'static Club> {
        club_by_id(self.club_id)
    }
}

#[must_use]
pub fn university_by_code(code: &str) -> Option<&'static University> {
    UNIVERSITIES.iter().find(|u| u.code == code)
}

#[must_use]
pub fn club_by_id(id: &str) -> Option<&'static Club> {
    CLUBS.iter().find(|c| c.id == id)
}

#[must_use]
pub fn event_by_id(id: &str) -> Option<&'static Event> {
    EVENTS.iter().find(|e| e.id == id)
}

/// Events hosted by `club_id`, in catalog order.
#[must_use]
pub fn events_for_club(club_id: &str) -> Vec<&'static Event> {
    EVENTS.iter().filter(|e| e.club_id == club_id).collect()
}
