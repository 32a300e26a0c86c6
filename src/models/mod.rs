// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ParentRequest, NannyApplication, MatchScore, Match, MatchNotification};
pub use requests::MatchesQuery;
pub use responses::{HealthResponse, ErrorResponse, NoMatchResponse, HookResponse};
