//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod about;
pub mod apply;
pub mod club_detail;
pub mod clubs;
pub mod event_detail;
pub mod events;
pub mod home;
pub mod login;
pub mod not_found;
