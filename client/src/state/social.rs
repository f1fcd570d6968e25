//! Viewer-local follow and upvote toggles.
//!
//! TRADE-OFFS
//! ==========
//! Counts are the catalog baseline plus this browser's own toggle. Nothing is
//! shared between viewers; the set is saved to `localStorage` so a reload
//! keeps the viewer's choices.

#[cfg(test)]
#[path = "social_test.rs"]
mod social_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use session::SessionStorage;

use crate::data::{Club, Event};
use crate::util::storage::{load_json, save_json};

/// Storage key for [`SocialState`].
pub const SOCIAL_KEY: &str = "clubhub.social";

/// Clubs followed and events upvoted by this viewer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialState {
    #[serde(default)]
    followed: BTreeSet<String>,
    #[serde(default)]
    upvoted: BTreeSet<String>,
}

impl SocialState {
    /// Load saved toggles, or start empty.
    pub fn load(storage: &impl SessionStorage) -> Self {
        load_json(storage, SOCIAL_KEY).unwrap_or_default()
    }

    pub fn save(&self, storage: &impl SessionStorage) {
        save_json(storage, SOCIAL_KEY, self);
    }

    pub fn is_following(&self, club_id: &str) -> bool {
        self.followed.contains(club_id)
    }

    /// Flip the follow flag; returns whether the viewer now follows.
    pub fn toggle_follow(&mut self, club_id: &str) -> bool {
        if self.followed.remove(club_id) {
            false
        } else {
            self.followed.insert(club_id.to_owned());
            true
        }
    }

    pub fn follower_count(&self, club: &Club) -> u32 {
        club.followers + u32::from(self.is_following(club.id))
    }

    pub fn followed_count(&self) -> usize {
        self.followed.len()
    }

    pub fn has_upvoted(&self, event_id: &str) -> bool {
        self.upvoted.contains(event_id)
    }

    /// Flip the upvote flag; returns whether the viewer now upvotes.
    pub fn toggle_upvote(&mut self, event_id: &str) -> bool {
        if self.upvoted.remove(event_id) {
            false
        } else {
            self.upvoted.insert(event_id.to_owned());
            true
        }
    }

    pub fn upvote_count(&self, event: &Event) -> u32 {
        event.upvotes + u32::from(self.has_upvoted(event.id))
    }
}

/// Compact count for buttons: `"987"`, `"4.4k"`, `"12k"`.
pub fn compact_count(n: u32) -> String {
    match n {
        0..=999 => n.to_string(),
        1000..=9_999 => {
            let tenths = n / 100;
            if tenths % 10 == 0 {
                format!("{}k", tenths / 10)
            } else {
                format!("{}.{}k", tenths / 10, tenths % 10)
            }
        }
        _ => format!("{}k", n / 1000),
    }
}
