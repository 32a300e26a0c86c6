use crate::models::{MatchNotification, MatchScore, NannyApplication, ParentRequest};
use crate::core::{matcher::get_best_match_for_request, scoring::calculate_match_score};

/// Default score a match needs before the admin is notified about it
pub const DEFAULT_NOTIFY_MIN_SCORE: u32 = 50;

pub const NOTIFICATION_KIND: &str = "nouveau_match";
pub const NOTIFICATION_TITLE: &str = "Nouveau match trouvé!";

fn build_notification(
    score: &MatchScore,
    request: &ParentRequest,
    nanny: &NannyApplication,
    related_id: &str,
) -> MatchNotification {
    MatchNotification {
        kind: NOTIFICATION_KIND.to_string(),
        titre: NOTIFICATION_TITLE.to_string(),
        message: format!("Match de {}% entre {} et {}", score.score, request.nom, nanny.nom),
        related_id: related_id.to_string(),
        score: score.score,
    }
}

/// Notification for a newly created parent request
///
/// Uses the request's best match, which must also reach `threshold`.
pub fn notification_for_request(
    request: &ParentRequest,
    nannies: &[NannyApplication],
    threshold: u32,
) -> Option<MatchNotification> {
    let best = get_best_match_for_request(request, nannies)?;
    (best.score.score >= threshold)
        .then(|| build_notification(&best.score, request, &best.nanny, &request.id))
}

/// Notification for a newly created nanny application
///
/// Awaiting requests are scanned in order and the first one reaching
/// `threshold` is reported; later, possibly better, requests are not looked at.
pub fn notification_for_application(
    application: &NannyApplication,
    requests: &[ParentRequest],
    threshold: u32,
) -> Option<MatchNotification> {
    requests
        .iter()
        .filter(|request| request.is_awaiting())
        .find_map(|request| {
            let score = calculate_match_score(request, application);
            (score.score >= threshold)
                .then(|| build_notification(&score, request, application, &application.id))
        })
}
