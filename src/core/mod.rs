// Core algorithm exports
pub mod matcher;
pub mod notify;
pub mod rules;
pub mod scoring;

pub use matcher::{find_best_matches, get_best_match_for_request, Matcher, DEFAULT_MIN_SCORE, BEST_MATCH_MIN_SCORE};
pub use notify::{notification_for_application, notification_for_request, DEFAULT_NOTIFY_MIN_SCORE};
pub use scoring::{calculate_match_score, SubScore};
