use crate::models::{Match, NannyApplication, ParentRequest};
use crate::core::scoring::calculate_match_score;

/// Default threshold of the batch matcher
pub const DEFAULT_MIN_SCORE: u32 = 30;

/// Threshold of the single-request best match. Independent of whatever
/// threshold the batch matcher is given.
pub const BEST_MATCH_MIN_SCORE: u32 = 30;

/// Pair every awaiting request with every application that is not yet
/// processed, keeping pairs scoring at least `min_score`
///
/// # Returns
/// Matches sorted by score, highest first. Equal scores keep their
/// request-major, application-minor input order.
pub fn find_best_matches(
    requests: &[ParentRequest],
    nannies: &[NannyApplication],
    min_score: u32,
) -> Vec<Match> {
    let mut matches: Vec<Match> = requests
        .iter()
        .filter(|request| request.is_awaiting())
        .flat_map(|request| {
            nannies
                .iter()
                .filter(|nanny| !nanny.is_processed())
                .filter_map(move |nanny| {
                    let score = calculate_match_score(request, nanny);
                    (score.score >= min_score).then(|| Match::new(score, request, nanny))
                })
        })
        .collect();

    // Stable sort keeps insertion order on ties
    matches.sort_by(|a, b| b.score.score.cmp(&a.score.score));

    matches
}

/// Best application for one request
///
/// The request's own status is not checked. The first application reaching
/// the highest score wins; `None` when that score is below
/// [`BEST_MATCH_MIN_SCORE`].
pub fn get_best_match_for_request(
    request: &ParentRequest,
    nannies: &[NannyApplication],
) -> Option<Match> {
    let mut best: Option<Match> = None;
    let mut best_score = 0;

    for nanny in nannies.iter().filter(|nanny| !nanny.is_processed()) {
        let score = calculate_match_score(request, nanny);
        if score.score > best_score {
            best_score = score.score;
            best = Some(Match::new(score, request, nanny));
        }
    }

    best.filter(|m| m.score.score >= BEST_MATCH_MIN_SCORE)
}

/// Matching entry point held by the HTTP layer
///
/// Carries the configured default threshold for batch matching; the engine
/// itself is stateless.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    default_min_score: u32,
}

impl Matcher {
    pub fn new(default_min_score: u32) -> Self {
        Self { default_min_score }
    }

    pub fn default_min_score(&self) -> u32 {
        self.default_min_score
    }

    /// Batch matching with an optional caller threshold
    pub fn find_matches(
        &self,
        requests: &[ParentRequest],
        nannies: &[NannyApplication],
        min_score: Option<u32>,
    ) -> Vec<Match> {
        find_best_matches(requests, nannies, min_score.unwrap_or(self.default_min_score))
    }

    pub fn best_match_for(
        &self,
        request: &ParentRequest,
        nannies: &[NannyApplication],
    ) -> Option<Match> {
        get_best_match_for_request(request, nannies)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}
