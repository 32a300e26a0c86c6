use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the batch matches endpoint
///
/// GET /api/v1/matches?minScore=40
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchesQuery {
    #[validate(range(max = 100))]
    #[serde(alias = "min_score", rename = "minScore")]
    pub min_score: Option<u32>,
}
