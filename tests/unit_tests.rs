// Unit tests for Garde Match sub-scorers

use garde_match::core::rules::{
    compatible_roles, AVAILABILITY_MAX, EXPERIENCE_MAX, LOCATION_MAX, TYPE_COMPATIBILITY, TYPE_MAX,
};
use garde_match::core::scoring::{
    calculate_availability_match, calculate_experience_match, calculate_location_match,
    calculate_type_match,
};

#[test]
fn test_every_mapped_role_scores_full_type_points() {
    for (service, roles) in TYPE_COMPATIBILITY {
        for role in roles.iter() {
            let result = calculate_type_match(service, role);
            assert_eq!(result.score, TYPE_MAX, "{} / {}", service, role);
            assert_eq!(
                result.reason.as_deref(),
                Some(format!("Type de poste compatible ({})", role).as_str())
            );
        }
    }
}

#[test]
fn test_role_from_another_service_is_not_compatible() {
    // Baby-sitter belongs to occasional care, not homework help
    assert!(!compatible_roles("Aide aux devoirs").contains(&"Baby-sitter"));

    let result = calculate_type_match("Aide aux devoirs", "Baby-sitter");
    assert_eq!(result.score, 0);
    assert!(result.reason.is_none());
}

#[test]
fn test_type_partial_match_is_case_insensitive() {
    let result = calculate_type_match("AIDE À DOMICILE", "aide à domicile de nuit");
    assert_eq!(result.score, 20);
}

#[test]
fn test_location_scores() {
    assert_eq!(calculate_location_match("Akanda", "akanda").score, 25);
    assert_eq!(
        calculate_location_match("Nzeng-Ayong, Libreville", "Libreville, Nzeng-Ayong, lot 4").score,
        20
    );
    assert_eq!(calculate_location_match("Owendo", "Owendo centre").score, 10);
    assert_eq!(calculate_location_match("Owendo", "Ntoum").score, 0);
}

#[test]
fn test_location_comma_without_space() {
    let result = calculate_location_match("Libreville,Akanda,Angondjé", "Akanda Angondjé");
    assert_eq!(result.score, 20);
    assert_eq!(result.reason.as_deref(), Some("Localisation proche (akanda, angondjé)"));
}

#[test]
fn test_experience_levels() {
    let cases = [
        ("5 ans d'expérience", 20, "Très expérimentée (5+ ans)"),
        ("Plus de 5 années", 20, "Très expérimentée (5+ ans)"),
        ("3 ans en crèche", 15, "Expérimentée (3-4 ans)"),
        ("4 ans", 15, "Expérimentée (3-4 ans)"),
        ("1 an", 10, "Expérience confirmée (1-2 ans)"),
        ("2 ans", 10, "Expérience confirmée (1-2 ans)"),
        ("Débutante", 5, "Débutante motivée"),
        ("Moins d'un an", 5, "Débutante motivée"),
        ("J'aime les enfants", 5, "Profil intéressant"),
    ];

    for (text, score, reason) in cases {
        let result = calculate_experience_match(text);
        assert_eq!(result.score, score, "{}", text);
        assert_eq!(result.reason.as_deref(), Some(reason), "{}", text);
        assert!(result.score <= EXPERIENCE_MAX);
    }
}

#[test]
fn test_beginner_with_months() {
    let result = calculate_experience_match("débutante motivée, 6 mois");
    assert_eq!(result.score, 5);
    assert_eq!(result.reason.as_deref(), Some("Débutante motivée"));
}

#[test]
fn test_availability_order() {
    // Immediate availability beats the weekend keyword
    let result = calculate_availability_match(None, None, Some("Tout de suite, même le samedi"));
    assert_eq!(result.score, 15);
    assert_eq!(result.reason.as_deref(), Some("Disponible immédiatement"));

    // Requested hours beat the weekend keyword
    let result = calculate_availability_match(Some("09:00"), Some("12:00"), Some("samedi 09:00"));
    assert_eq!(result.reason.as_deref(), Some("Disponibilités compatibles avec horaires demandés"));
}

#[test]
fn test_sub_scores_within_caps() {
    let addresses = ["Akanda", "Libreville, Akanda", "", "Owendo centre"];
    for a in addresses {
        for b in addresses {
            assert!(calculate_location_match(a, b).score <= LOCATION_MAX);
        }
    }

    let availabilities = [None, Some(""), Some("flexible"), Some("samedi"), Some("08:00"), Some("?")];
    for availability in availabilities {
        let result = calculate_availability_match(Some("08:00"), Some("17:00"), availability);
        assert!(result.score >= 5 && result.score <= AVAILABILITY_MAX);
        assert!(result.reason.is_some());
    }
}
