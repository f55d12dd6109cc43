use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::enums::{Answer, HazardKind, Stage};
use crate::models::TravelSegment;

// ---------------------------------------------------------------------------
// HazardAnswers
// ---------------------------------------------------------------------------

/// Per-segment exposure answers, one slot per hazard bucket.
///
/// `None` means unanswered. A slot only counts toward completion when the
/// classifier marks that bucket as required for the segment's country;
/// non-required slots stay `None` for the life of the assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardAnswers {
    pub lassa: Option<Answer>,
    pub ebola_marburg: Option<Answer>,
    pub cchf: Option<Answer>,
}

impl HazardAnswers {
    pub fn get(&self, kind: HazardKind) -> Option<Answer> {
        match kind {
            HazardKind::Lassa => self.lassa,
            HazardKind::EbolaMarburg => self.ebola_marburg,
            HazardKind::Cchf => self.cchf,
        }
    }

    pub fn set(&mut self, kind: HazardKind, answer: Answer) {
        match kind {
            HazardKind::Lassa => self.lassa = Some(answer),
            HazardKind::EbolaMarburg => self.ebola_marburg = Some(answer),
            HazardKind::Cchf => self.cchf = Some(answer),
        }
    }
}

// ---------------------------------------------------------------------------
// GlobalAnswers
// ---------------------------------------------------------------------------

/// Session-wide exposure questions, always required once exposures apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalAnswers {
    pub outbreak_exposure: Option<Answer>,
    pub bleeding_symptom: Option<Answer>,
}

// ---------------------------------------------------------------------------
// AmberAnswers
// ---------------------------------------------------------------------------

/// The sequential minimal-risk follow-up chain.
///
/// Each question is gated by its predecessor's answer, and the setters
/// clear everything downstream so a changed upstream answer can never
/// leave a stale conclusion behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmberAnswers {
    pub malaria_positive: Option<Answer>,
    pub alternative_diagnosis: Option<Answer>,
    pub concern_72h: Option<Answer>,
    pub vhf_test_positive: Option<Answer>,
}

impl AmberAnswers {
    pub fn set_malaria_positive(&mut self, answer: Answer) {
        self.malaria_positive = Some(answer);
        self.alternative_diagnosis = None;
        self.concern_72h = None;
        self.vhf_test_positive = None;
    }

    pub fn set_alternative_diagnosis(&mut self, answer: Answer) {
        self.alternative_diagnosis = Some(answer);
        self.concern_72h = None;
        self.vhf_test_positive = None;
    }

    pub fn set_concern_72h(&mut self, answer: Answer) {
        self.concern_72h = Some(answer);
        self.vhf_test_positive = None;
    }

    pub fn set_vhf_test_positive(&mut self, answer: Answer) {
        self.vhf_test_positive = Some(answer);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ---------------------------------------------------------------------------
// AssessmentState
// ---------------------------------------------------------------------------

/// The whole assessment session as one explicit value object.
///
/// Owned by the state machine: every user action maps to an `Event`, and
/// `machine::apply` returns the full next state. Serializes losslessly
/// through `snapshot` for transient persistence at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentState {
    pub stage: Stage,
    pub fever: Option<Answer>,
    pub high_risk_contact: Option<Answer>,
    pub segments: Vec<TravelSegment>,
    pub onset_date: Option<NaiveDate>,
    pub hazard_answers: BTreeMap<Uuid, HazardAnswers>,
    pub global: GlobalAnswers,
    pub amber: AmberAnswers,
}

impl AssessmentState {
    /// Fresh session at the screening stage.
    pub fn new() -> Self {
        Self {
            stage: Stage::Screening,
            fever: None,
            high_risk_contact: None,
            segments: Vec::new(),
            onset_date: None,
            hazard_answers: BTreeMap::new(),
            global: GlobalAnswers::default(),
            amber: AmberAnswers::default(),
        }
    }

    pub fn segment(&self, segment_id: &Uuid) -> Option<&TravelSegment> {
        self.segments.iter().find(|s| s.id == *segment_id)
    }

    pub fn segment_mut(&mut self, segment_id: &Uuid) -> Option<&mut TravelSegment> {
        self.segments.iter_mut().find(|s| s.id == *segment_id)
    }

    /// Answers recorded for a segment, or the all-unanswered default.
    pub fn hazard_answers_for(&self, segment_id: &Uuid) -> HazardAnswers {
        self.hazard_answers
            .get(segment_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// TriageError
// ---------------------------------------------------------------------------

/// Boundary errors only: reference-data loading and snapshot round-trips.
/// Classification, window evaluation and resolution are total and never fail.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Snapshot encode failed: {0}")]
    SnapshotEncode(String),

    #[error("Snapshot decode failed: {0}")]
    SnapshotDecode(String),

    #[error("Unsupported snapshot version {0}")]
    SnapshotVersion(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amber_setters_clear_downstream() {
        let mut amber = AmberAnswers::default();
        amber.set_malaria_positive(Answer::No);
        amber.set_alternative_diagnosis(Answer::No);
        amber.set_concern_72h(Answer::Yes);
        amber.set_vhf_test_positive(Answer::No);

        amber.set_malaria_positive(Answer::Yes);
        assert_eq!(amber.malaria_positive, Some(Answer::Yes));
        assert_eq!(amber.alternative_diagnosis, None);
        assert_eq!(amber.concern_72h, None);
        assert_eq!(amber.vhf_test_positive, None);
    }

    #[test]
    fn amber_concern_clears_only_vhf_test() {
        let mut amber = AmberAnswers::default();
        amber.set_malaria_positive(Answer::No);
        amber.set_alternative_diagnosis(Answer::No);
        amber.set_concern_72h(Answer::Yes);
        amber.set_vhf_test_positive(Answer::Yes);

        amber.set_concern_72h(Answer::No);
        assert_eq!(amber.malaria_positive, Some(Answer::No));
        assert_eq!(amber.alternative_diagnosis, Some(Answer::No));
        assert_eq!(amber.vhf_test_positive, None);
    }

    #[test]
    fn new_state_starts_at_screening() {
        let state = AssessmentState::new();
        assert_eq!(state.stage, Stage::Screening);
        assert!(state.segments.is_empty());
        assert!(state.fever.is_none());
    }

    #[test]
    fn hazard_answers_get_set_agree() {
        let mut answers = HazardAnswers::default();
        for kind in HazardKind::ALL {
            assert_eq!(answers.get(kind), None);
            answers.set(kind, Answer::No);
            assert_eq!(answers.get(kind), Some(Answer::No));
        }
    }
}
