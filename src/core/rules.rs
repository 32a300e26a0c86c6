//! Fixed scoring tables.
//!
//! Every sub-scorer walks one of these tables top to bottom and stops at the
//! first rule that fires, so the order of the entries is part of the
//! behaviour.

/// Maximum contribution of the type sub-scorer
pub const TYPE_MAX: u32 = 40;
/// Maximum contribution of the location sub-scorer
pub const LOCATION_MAX: u32 = 25;
/// Maximum contribution of the experience sub-scorer
pub const EXPERIENCE_MAX: u32 = 20;
/// Maximum contribution of the availability sub-scorer
pub const AVAILABILITY_MAX: u32 = 15;
/// Nominal maximum of a match score
pub const MAX_SCORE: u32 = TYPE_MAX + LOCATION_MAX + EXPERIENCE_MAX + AVAILABILITY_MAX;

/// Points for a role listed as compatible with the requested service
pub const TYPE_EXACT_SCORE: u32 = 40;
/// Points when one label contains the other
pub const TYPE_PARTIAL_SCORE: u32 = 20;

/// Points for identical addresses
pub const LOCATION_IDENTICAL_SCORE: u32 = 25;
/// Points for two or more shared address tokens
pub const LOCATION_NEARBY_SCORE: u32 = 20;
/// Points for exactly one shared address token
pub const LOCATION_SAME_AREA_SCORE: u32 = 10;
/// Address tokens this short or shorter are connectors ("de", "la", ...)
pub const LOCATION_MIN_TOKEN_CHARS: usize = 3;

/// Requested service → caregiver roles that fully satisfy it
pub const TYPE_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("Garde régulière", &["Nounou à temps plein", "Nounou régulière"]),
    ("Garde occasionnelle", &["Nounou occasionnelle", "Baby-sitter"]),
    ("Week-end", &["Nounou occasionnelle", "Baby-sitter"]),
    ("Aide aux devoirs", &["Éducateur/éducatrice", "Aide aux devoirs"]),
    ("Aide à la personne", &["Aide à domicile", "Auxiliaire de vie"]),
];

/// Roles compatible with a requested service, empty for unknown services
pub fn compatible_roles(type_service: &str) -> &'static [&'static str] {
    TYPE_COMPATIBILITY
        .iter()
        .find(|(service, _)| *service == type_service)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

/// A scoring rule that fires when the text contains any of its keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub score: u32,
    pub reason: &'static str,
}

impl KeywordRule {
    /// `text` must already be lower-cased
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Experience cascade, checked against the lower-cased experience text
pub const EXPERIENCE_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["5 ans", "plus de 5"],
        score: 20,
        reason: "Très expérimentée (5+ ans)",
    },
    KeywordRule {
        keywords: &["3 ans", "4 ans"],
        score: 15,
        reason: "Expérimentée (3-4 ans)",
    },
    KeywordRule {
        keywords: &["1 an", "2 ans"],
        score: 10,
        reason: "Expérience confirmée (1-2 ans)",
    },
    KeywordRule {
        keywords: &["débutant", "moins d'un an"],
        score: 5,
        reason: "Débutante motivée",
    },
];

/// Applied when no experience keyword is found
pub const EXPERIENCE_DEFAULT: KeywordRule = KeywordRule {
    keywords: &[],
    score: 5,
    reason: "Profil intéressant",
};

/// What an availability rule looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityCondition {
    /// Any of these keywords in the lower-cased availability text
    Keywords(&'static [&'static str]),
    /// The requested start or end time appears verbatim in the text
    RequestedHours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRule {
    pub condition: AvailabilityCondition,
    pub score: u32,
    pub reason: &'static str,
}

/// Applied when the application gives no availability at all
pub const AVAILABILITY_MISSING: AvailabilityRule = AvailabilityRule {
    condition: AvailabilityCondition::Keywords(&[]),
    score: 5,
    reason: "Disponibilités à discuter",
};

/// Availability cascade
pub const AVAILABILITY_RULES: &[AvailabilityRule] = &[
    AvailabilityRule {
        condition: AvailabilityCondition::Keywords(&["immédiat", "tout de suite"]),
        score: 15,
        reason: "Disponible immédiatement",
    },
    AvailabilityRule {
        condition: AvailabilityCondition::Keywords(&["flexible", "toute la semaine"]),
        score: 15,
        reason: "Horaires flexibles",
    },
    AvailabilityRule {
        condition: AvailabilityCondition::RequestedHours,
        score: 10,
        reason: "Disponibilités compatibles avec horaires demandés",
    },
    AvailabilityRule {
        condition: AvailabilityCondition::Keywords(&["week-end", "samedi", "dimanche"]),
        score: 10,
        reason: "Disponible en week-end",
    },
];

/// Applied when availability is given but no rule fires
pub const AVAILABILITY_DEFAULT: AvailabilityRule = AvailabilityRule {
    condition: AvailabilityCondition::Keywords(&[]),
    score: 5,
    reason: "Disponibilités à vérifier",
};

impl AvailabilityRule {
    /// `availability` must already be lower-cased; `hours` are the requested
    /// start and end times when both are present
    pub fn matches(&self, availability: &str, hours: Option<(&str, &str)>) -> bool {
        match self.condition {
            AvailabilityCondition::Keywords(keywords) => {
                keywords.iter().any(|keyword| availability.contains(keyword))
            }
            AvailabilityCondition::RequestedHours => match hours {
                Some((start, end)) => availability.contains(start) || availability.contains(end),
                None => false,
            },
        }
    }
}
