//! Garde Match - matching service for the childcare marketplace
//!
//! This library scores parent care requests against nanny applications with
//! fixed, hand-written heuristics over the free-text form fields, and exposes
//! the results to the admin dashboard over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, find_best_matches, get_best_match_for_request, Matcher};
pub use crate::models::{ParentRequest, NannyApplication, MatchScore, Match, MatchNotification};
