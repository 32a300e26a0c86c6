use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Parent request lifecycle: awaiting a caregiver
pub const STATUS_AWAITING: &str = "en_attente";
/// Parent request / nanny application lifecycle: already handled
pub const STATUS_PROCESSED: &str = "traite";
/// Parent request lifecycle: paid
pub const STATUS_PAID: &str = "paye";
/// Nanny application lifecycle: under review (database default)
pub const STATUS_UNDER_REVIEW: &str = "en_examen";
/// Nanny application lifecycle: accepted
pub const STATUS_ACCEPTED: &str = "accepte";
/// Nanny application lifecycle: refused
pub const STATUS_REFUSED: &str = "refuse";

/// A parent's care request, as stored by the request forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRequest {
    pub id: String,
    pub nom: String,
    pub telephone: String,
    pub adresse: String,
    pub type_service: String,
    #[serde(default)]
    pub horaire_debut: Option<String>,
    #[serde(default)]
    pub horaire_fin: Option<String>,
    #[serde(default)]
    pub nombre_enfants: Option<i32>,
    #[serde(default)]
    pub forfait: Option<String>,
    #[serde(default)]
    pub commentaires: Option<String>,
    #[serde(default)]
    pub statut: Option<String>,
    #[serde(default)]
    pub date_creation: Option<NaiveDateTime>,
}

impl ParentRequest {
    /// Only requests still awaiting a caregiver take part in batch matching
    pub fn is_awaiting(&self) -> bool {
        self.statut.as_deref() == Some(STATUS_AWAITING)
    }
}

/// A caregiver's application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NannyApplication {
    pub id: String,
    pub nom: String,
    pub telephone: String,
    pub adresse: String,
    pub type_poste: String,
    pub experience: String,
    #[serde(default)]
    pub disponibilites: Option<String>,
    #[serde(default)]
    pub documents: Option<String>,
    #[serde(default)]
    pub statut: Option<String>,
    #[serde(default)]
    pub date_creation: Option<NaiveDateTime>,
}

impl NannyApplication {
    /// Processed applications are already claimed and never matched again
    pub fn is_processed(&self) -> bool {
        self.statut.as_deref() == Some(STATUS_PROCESSED)
    }
}

/// Compatibility score for one (request, application) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub request_id: String,
    pub nanny_id: String,
    pub score: u32,
    /// One entry per contributing sub-score, in type, location,
    /// experience, availability order
    pub reasons: Vec<String>,
}

/// A match score together with both records, for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(flatten)]
    pub score: MatchScore,
    pub request: ParentRequest,
    pub nanny: NannyApplication,
}

impl Match {
    pub fn new(score: MatchScore, request: &ParentRequest, nanny: &NannyApplication) -> Self {
        Self {
            score,
            request: request.clone(),
            nanny: nanny.clone(),
        }
    }
}

/// A "new match" notification proposed to the admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchNotification {
    #[serde(rename = "type")]
    pub kind: String,
    pub titre: String,
    pub message: String,
    pub related_id: String,
    pub score: u32,
}
