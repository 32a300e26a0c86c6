use crate::models::{MatchScore, NannyApplication, ParentRequest};
use crate::core::rules::{
    compatible_roles, AVAILABILITY_DEFAULT, AVAILABILITY_MISSING, AVAILABILITY_RULES,
    EXPERIENCE_DEFAULT, EXPERIENCE_RULES, LOCATION_IDENTICAL_SCORE, LOCATION_MIN_TOKEN_CHARS,
    LOCATION_NEARBY_SCORE, LOCATION_SAME_AREA_SCORE, MAX_SCORE, TYPE_EXACT_SCORE,
    TYPE_PARTIAL_SCORE,
};

/// Partial score produced by one sub-scorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubScore {
    pub score: u32,
    /// `None` exactly when the sub-scorer contributed nothing
    pub reason: Option<String>,
}

impl SubScore {
    fn new(score: u32, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: Some(reason.into()),
        }
    }

    fn none() -> Self {
        Self {
            score: 0,
            reason: None,
        }
    }
}

/// Calculate the compatibility score (0-100) of a nanny application for a
/// parent request
///
/// score = type (max 40) + location (max 25) + experience (max 20)
///       + availability (max 15)
///
/// Reasons are collected in that same order, one per sub-score above zero.
pub fn calculate_match_score(request: &ParentRequest, nanny: &NannyApplication) -> MatchScore {
    let parts = [
        calculate_type_match(&request.type_service, &nanny.type_poste),
        calculate_location_match(&request.adresse, &nanny.adresse),
        calculate_experience_match(&nanny.experience),
        calculate_availability_match(
            request.horaire_debut.as_deref(),
            request.horaire_fin.as_deref(),
            nanny.disponibilites.as_deref(),
        ),
    ];

    let mut score = 0;
    let mut reasons = Vec::with_capacity(parts.len());
    for part in parts {
        score += part.score;
        if part.score > 0 {
            reasons.extend(part.reason);
        }
    }

    debug_assert!(score <= MAX_SCORE, "sub-score caps exceeded: {score}");

    MatchScore {
        request_id: request.id.clone(),
        nanny_id: nanny.id.clone(),
        score,
        reasons,
    }
}

/// Service/role compatibility
///
/// Full points when the role is listed for the requested service, half when
/// one label contains the other (case-insensitive).
pub fn calculate_type_match(type_service: &str, type_poste: &str) -> SubScore {
    if compatible_roles(type_service).contains(&type_poste) {
        return SubScore::new(
            TYPE_EXACT_SCORE,
            format!("Type de poste compatible ({})", type_poste),
        );
    }

    // A blank label would be a substring of anything
    if type_service.trim().is_empty() || type_poste.trim().is_empty() {
        return SubScore::none();
    }

    let service = type_service.to_lowercase();
    let poste = type_poste.to_lowercase();

    if service.contains(&poste) || poste.contains(&service) {
        return SubScore::new(TYPE_PARTIAL_SCORE, "Type de poste partiellement compatible");
    }

    SubScore::none()
}

/// Address proximity, approximated by shared address tokens
pub fn calculate_location_match(request_address: &str, nanny_address: &str) -> SubScore {
    let request_lower = request_address.trim().to_lowercase();
    let nanny_lower = nanny_address.trim().to_lowercase();

    if request_lower.is_empty() || nanny_lower.is_empty() {
        return SubScore::none();
    }

    if request_lower == nanny_lower {
        return SubScore::new(LOCATION_IDENTICAL_SCORE, "Adresse identique");
    }

    let nanny_tokens: Vec<&str> = tokenize_address(&nanny_lower).collect();
    let common = common_tokens(&request_lower, &nanny_tokens);

    match common.as_slice() {
        [] => SubScore::none(),
        [only] => SubScore::new(
            LOCATION_SAME_AREA_SCORE,
            format!("Même quartier/zone ({})", only),
        ),
        [first, second, ..] => SubScore::new(
            LOCATION_NEARBY_SCORE,
            format!("Localisation proche ({}, {})", first, second),
        ),
    }
}

/// Split an address on whitespace and commas
#[inline]
fn tokenize_address(address: &str) -> impl Iterator<Item = &str> {
    address
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Distinct tokens of `request_address` that also occur in `nanny_tokens`,
/// in request order, ignoring connectors
fn common_tokens<'a>(request_address: &'a str, nanny_tokens: &[&str]) -> Vec<&'a str> {
    let mut common: Vec<&str> = Vec::new();
    for token in tokenize_address(request_address) {
        if token.chars().count() >= LOCATION_MIN_TOKEN_CHARS
            && nanny_tokens.contains(&token)
            && !common.contains(&token)
        {
            common.push(token);
        }
    }
    common
}

/// Experience level parsed from the free-text description
pub fn calculate_experience_match(experience: &str) -> SubScore {
    let experience_lower = experience.to_lowercase();

    let rule = EXPERIENCE_RULES
        .iter()
        .find(|rule| rule.matches(&experience_lower))
        .unwrap_or(&EXPERIENCE_DEFAULT);

    SubScore::new(rule.score, rule.reason)
}

/// Availability parsed from the free-text description, checked against the
/// requested hours when both are known
pub fn calculate_availability_match(
    request_start: Option<&str>,
    request_end: Option<&str>,
    availability: Option<&str>,
) -> SubScore {
    let availability = match availability {
        Some(text) if !text.trim().is_empty() => text,
        _ => return SubScore::new(AVAILABILITY_MISSING.score, AVAILABILITY_MISSING.reason),
    };

    let availability_lower = availability.to_lowercase();
    let hours = requested_hours(request_start, request_end);

    let rule = AVAILABILITY_RULES
        .iter()
        .find(|rule| rule.matches(&availability_lower, hours))
        .unwrap_or(&AVAILABILITY_DEFAULT);

    SubScore::new(rule.score, rule.reason)
}

/// Both requested times, as entered, when neither is blank
#[inline]
fn requested_hours<'a>(start: Option<&'a str>, end: Option<&'a str>) -> Option<(&'a str, &'a str)> {
    let start = start.filter(|s| !s.trim().is_empty())?;
    let end = end.filter(|s| !s.trim().is_empty())?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request(type_service: &str, adresse: &str) -> ParentRequest {
        ParentRequest {
            id: "req_1".to_string(),
            nom: "Awa Mba".to_string(),
            telephone: "077123456".to_string(),
            adresse: adresse.to_string(),
            type_service: type_service.to_string(),
            horaire_debut: Some("08:00".to_string()),
            horaire_fin: Some("17:00".to_string()),
            nombre_enfants: Some(2),
            forfait: None,
            commentaires: None,
            statut: Some("en_attente".to_string()),
            date_creation: None,
        }
    }

    fn create_test_nanny(type_poste: &str, adresse: &str, experience: &str) -> NannyApplication {
        NannyApplication {
            id: "nanny_1".to_string(),
            nom: "Marie Ndong".to_string(),
            telephone: "066123456".to_string(),
            adresse: adresse.to_string(),
            type_poste: type_poste.to_string(),
            experience: experience.to_string(),
            disponibilites: Some("flexible".to_string()),
            documents: None,
            statut: Some("en_examen".to_string()),
            date_creation: None,
        }
    }

    #[test]
    fn test_calculate_match_score_full_marks() {
        let request = create_test_request("Garde régulière", "Libreville, Akanda");
        let nanny = create_test_nanny("Nounou à temps plein", "Libreville, Akanda", "5 ans d'expérience");

        let result = calculate_match_score(&request, &nanny);

        assert_eq!(result.score, 100);
        assert_eq!(
            result.reasons,
            vec![
                "Type de poste compatible (Nounou à temps plein)",
                "Adresse identique",
                "Très expérimentée (5+ ans)",
                "Horaires flexibles",
            ]
        );
        assert_eq!(result.request_id, "req_1");
        assert_eq!(result.nanny_id, "nanny_1");
    }

    #[test]
    fn test_zero_sub_scores_leave_no_reason() {
        let request = create_test_request("Aide aux devoirs", "Owendo");
        let nanny = create_test_nanny("Baby-sitter", "Franceville", "aucune");

        let result = calculate_match_score(&request, &nanny);

        // experience default 5 + flexible 15
        assert_eq!(result.score, 20);
        assert_eq!(result.reasons, vec!["Profil intéressant", "Horaires flexibles"]);
    }

    #[test]
    fn test_type_match() {
        let exact = calculate_type_match("Garde occasionnelle", "Baby-sitter");
        assert_eq!(exact.score, 40);
        assert_eq!(exact.reason.as_deref(), Some("Type de poste compatible (Baby-sitter)"));

        let partial = calculate_type_match("Aide aux devoirs du soir", "aide aux devoirs");
        assert_eq!(partial.score, 20);
        assert_eq!(partial.reason.as_deref(), Some("Type de poste partiellement compatible"));

        let reversed = calculate_type_match("Garde", "Garde partagée");
        assert_eq!(reversed.score, 20);

        let none = calculate_type_match("Aide aux devoirs", "Baby-sitter");
        assert_eq!(none, SubScore::none());
    }

    #[test]
    fn test_type_match_blank_labels() {
        assert_eq!(calculate_type_match("Garde régulière", "").score, 0);
        assert_eq!(calculate_type_match("   ", "Baby-sitter").score, 0);
    }

    #[test]
    fn test_type_match_keeps_padding() {
        // "baby-sitter " is not contained in either direction
        let padded = calculate_type_match("Week-end baby-sitter", "baby-sitter ");
        assert_eq!(padded, SubScore::none());

        let unpadded = calculate_type_match("Week-end baby-sitter", "baby-sitter");
        assert_eq!(unpadded.score, 20);
    }

    #[test]
    fn test_location_identical_ignores_case_and_padding() {
        let result = calculate_location_match("  Libreville, AKANDA ", "libreville, akanda");
        assert_eq!(result.score, 25);
        assert_eq!(result.reason.as_deref(), Some("Adresse identique"));
    }

    #[test]
    fn test_location_two_common_tokens() {
        let result = calculate_location_match(
            "Quartier Louis, Libreville",
            "Rue 12, quartier louis, Libreville",
        );
        assert_eq!(result.score, 20);
        assert_eq!(result.reason.as_deref(), Some("Localisation proche (quartier, louis)"));
    }

    #[test]
    fn test_location_one_common_token() {
        let result = calculate_location_match("Akanda, Angondjé", "Akanda");
        assert_eq!(result.score, 10);
        assert_eq!(result.reason.as_deref(), Some("Même quartier/zone (akanda)"));
    }

    #[test]
    fn test_location_short_tokens_ignored() {
        // "de" and "la" are connectors
        let result = calculate_location_match("Rue de la Paix", "Avenue de la Gare");
        assert_eq!(result.score, 0);
        assert_eq!(result.reason, None);
    }

    #[test]
    fn test_location_repeated_token_counts_once() {
        let result = calculate_location_match("Akanda Akanda", "Akanda Nord");
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_location_blank_addresses() {
        assert_eq!(calculate_location_match("", "").score, 0);
        assert_eq!(calculate_location_match("  ", "Akanda").score, 0);
    }

    #[test]
    fn test_experience_cascade() {
        assert_eq!(calculate_experience_match("Plus de 5 ans en crèche").score, 20);
        assert_eq!(calculate_experience_match("3 ans").score, 15);
        assert_eq!(calculate_experience_match("2 ans comme baby-sitter").score, 10);
        assert_eq!(calculate_experience_match("1 an").score, 10);

        let beginner = calculate_experience_match("Débutante motivée, 6 mois");
        assert_eq!(beginner.score, 5);
        assert_eq!(beginner.reason.as_deref(), Some("Débutante motivée"));

        let unknown = calculate_experience_match("");
        assert_eq!(unknown.score, 5);
        assert_eq!(unknown.reason.as_deref(), Some("Profil intéressant"));
    }

    #[test]
    fn test_experience_first_rule_wins() {
        // Mentions both 5 and 2 years, the 5+ rule is checked first
        let result = calculate_experience_match("2 ans en crèche puis 5 ans en famille");
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_availability_missing_or_blank() {
        let missing = calculate_availability_match(Some("08:00"), Some("17:00"), None);
        assert_eq!(missing.score, 5);
        assert_eq!(missing.reason.as_deref(), Some("Disponibilités à discuter"));

        let blank = calculate_availability_match(None, None, Some("   "));
        assert_eq!(blank, missing);
    }

    #[test]
    fn test_availability_cascade() {
        let immediate = calculate_availability_match(None, None, Some("Disponible immédiatement"));
        assert_eq!(immediate.score, 15);
        assert_eq!(immediate.reason.as_deref(), Some("Disponible immédiatement"));

        let flexible = calculate_availability_match(None, None, Some("Toute la semaine"));
        assert_eq!(flexible.reason.as_deref(), Some("Horaires flexibles"));

        let hours = calculate_availability_match(Some("08:00"), Some("17:00"), Some("lundi-vendredi à partir de 08:00"));
        assert_eq!(hours.score, 10);
        assert_eq!(
            hours.reason.as_deref(),
            Some("Disponibilités compatibles avec horaires demandés")
        );

        let weekend = calculate_availability_match(None, None, Some("Samedi et dimanche"));
        assert_eq!(weekend.score, 10);
        assert_eq!(weekend.reason.as_deref(), Some("Disponible en week-end"));

        let other = calculate_availability_match(Some("08:00"), Some("17:00"), Some("le soir"));
        assert_eq!(other.score, 5);
        assert_eq!(other.reason.as_deref(), Some("Disponibilités à vérifier"));
    }

    #[test]
    fn test_availability_hours_need_both_times() {
        let only_start = calculate_availability_match(Some("08:00"), None, Some("dès 08:00"));
        assert_eq!(only_start.score, 5);

        let blank_end = calculate_availability_match(Some("08:00"), Some(" "), Some("dès 08:00"));
        assert_eq!(blank_end.score, 5);
    }

    #[test]
    fn test_availability_hours_matched_as_entered() {
        let padded = calculate_availability_match(Some("08:00 "), Some("17:00 "), Some("dès 08:00"));
        assert_eq!(padded.score, 5);
        assert_eq!(padded.reason.as_deref(), Some("Disponibilités à vérifier"));

        let exact = calculate_availability_match(Some("08:00"), Some("17:00"), Some("dès 08:00"));
        assert_eq!(exact.score, 10);
    }

    #[test]
    fn test_score_is_deterministic() {
        let request = create_test_request("Week-end", "Owendo, Alénakiri");
        let nanny = create_test_nanny("Baby-sitter", "Alénakiri", "4 ans");

        let first = calculate_match_score(&request, &nanny);
        let second = calculate_match_score(&request, &nanny);

        assert_eq!(first, second);
    }
}
