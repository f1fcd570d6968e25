//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards and chrome while reading/writing shared state
//! from Leptos context providers.

pub mod club_card;
pub mod countdown_timer;
pub mod event_card;
pub mod nav_bar;
pub mod social_buttons;
