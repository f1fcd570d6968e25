//! Club directory search and filtering.
//!
//! DESIGN
//! ======
//! The filter is plain data so the clubs page can keep it in a signal and
//! recompute the visible list on every keystroke; the catalog is small enough
//! that a linear scan is fine.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::data::{Club, ClubCategory};

/// Current search query and facet selections on the clubs page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub query: String,
    pub category: Option<ClubCategory>,
    /// University code, e.g. `"BUET"`.
    pub university: Option<String>,
}

impl DirectoryFilter {
    /// True when any facet or a non-blank query is set.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.category.is_some() || self.university.is_some()
    }

    /// Case-insensitive substring match on name, short name, university,
    /// description, and tags, AND-ed with the facets.
    pub fn matches(&self, club: &Club) -> bool {
        if self.category.is_some_and(|c| c != club.category) {
            return false;
        }
        if self.university.as_deref().is_some_and(|u| u != club.university) {
            return false;
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystacks = [club.name, club.short_name, club.university, club.university_name(), club.description];
        haystacks
            .iter()
            .chain(club.tags.iter())
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Clubs from `clubs` that match, in input order.
    pub fn apply<'a>(&self, clubs: &'a [Club]) -> Vec<&'a Club> {
        clubs.iter().filter(|club| self.matches(club)).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Result-count line shown above the grid.
pub fn summary(shown: usize, total: usize) -> String {
    match (shown, total) {
        (0, _) => "No clubs match your search".to_owned(),
        (s, t) if s == t => format!("Showing all {t} clubs"),
        (1, t) => format!("Showing 1 of {t} clubs"),
        (s, t) => format!("Showing {s} of {t} clubs"),
    }
}
