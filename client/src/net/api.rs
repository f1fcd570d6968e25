//! Mock REST client over the static catalog.
//!
//! There is no API server. These helpers keep the request/response shapes a
//! real client would have so pages do not reach into `data` for writes, and
//! every call resolves immediately.
//!
//! ERROR HANDLING
//! ==============
//! Lookups return `ApiError::NotFound` instead of panicking so detail pages
//! can render a not-found state for stale links.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::atomic::{AtomicU32, Ordering};

use session::Identity;

use crate::data::{self, CLUBS, Club, EVENTS, Event};
use crate::state::application::ApplicationRequest;

/// First application reference number handed out.
const FIRST_REFERENCE: u32 = 1001;

static NEXT_REFERENCE: AtomicU32 = AtomicU32::new(FIRST_REFERENCE);

/// Failure from a mock endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{kind} {id:?} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("sign in to apply")]
    Unauthenticated,
}

/// Acknowledgement for a submitted application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationReceipt {
    /// `APP-<CLUB SHORT NAME>-<n>`.
    pub reference: String,
    pub club_id: &'static str,
    pub applicant_id: String,
}

fn club_path(id: &str) -> String {
    format!("/clubs/{id}")
}

fn event_path(id: &str) -> String {
    format!("/events/{id}")
}

/// `GET /clubs`
pub fn list_clubs() -> &'static [Club] {
    CLUBS
}

/// `GET /clubs/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for an unknown id.
pub fn get_club(id: &str) -> Result<&'static Club, ApiError> {
    data::club_by_id(id).ok_or_else(|| {
        log::debug!("api: {} -> 404", club_path(id));
        ApiError::NotFound { kind: "club", id: id.to_owned() }
    })
}

/// `GET /events`
pub fn list_events() -> &'static [Event] {
    EVENTS
}

/// `GET /events/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for an unknown id.
pub fn get_event(id: &str) -> Result<&'static Event, ApiError> {
    data::event_by_id(id).ok_or_else(|| {
        log::debug!("api: {} -> 404", event_path(id));
        ApiError::NotFound { kind: "event", id: id.to_owned() }
    })
}

/// `POST /clubs/{id}/applications`
///
/// # Errors
///
/// Returns [`ApiError::Unauthenticated`] without a signed-in applicant and
/// [`ApiError::NotFound`] for an unknown club.
pub fn submit_application(
    club_id: &str,
    applicant: Option<&Identity>,
    request: &ApplicationRequest,
) -> Result<ApplicationReceipt, ApiError> {
    let applicant = applicant.ok_or(ApiError::Unauthenticated)?;
    let club = get_club(club_id)?;
    let n = NEXT_REFERENCE.fetch_add(1, Ordering::Relaxed);
    let reference = format!("APP-{}-{n}", club.short_name);
    log::info!(
        "api: {} application from {} ({}, year {}) -> {reference}",
        club.short_name,
        applicant.email,
        request.department,
        request.year
    );
    Ok(ApplicationReceipt { reference, club_id: club.id, applicant_id: applicant.id.clone() })
}
