use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::{Answer, HazardKind, Stage};
use crate::models::TravelSegment;

use super::reference::RiskTable;
use super::review::review_all;
use super::types::AssessmentState;

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Every user action on the assessment, as one tagged union.
///
/// `apply` is the only mutation path: it returns the complete next state,
/// including any downstream answers that the change invalidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    AnswerFever(Answer),
    AnswerHighRiskContact(Answer),
    AddSegment { country: String },
    RemoveSegment { segment_id: Uuid },
    SetCountry { segment_id: Uuid, country: String },
    SetArrivalDate { segment_id: Uuid, date: Option<NaiveDate> },
    SetDepartureDate { segment_id: Uuid, date: Option<NaiveDate> },
    SetOnsetDate(Option<NaiveDate>),
    AnswerHazard { segment_id: Uuid, hazard: HazardKind, answer: Answer },
    AnswerOutbreakExposure(Answer),
    AnswerBleedingSymptom(Answer),
    AnswerMalariaResult(Answer),
    AnswerAlternativeDiagnosis(Answer),
    AnswerConcern72h(Answer),
    AnswerVhfTest(Answer),
    GoTo(Stage),
    Reset,
}

// ---------------------------------------------------------------------------
// Transition guards
// ---------------------------------------------------------------------------

/// Whether the flow may move forward into `stage` from where it stands.
/// Back-transitions are not guarded; see `apply` for the GoTo rules.
pub fn can_enter(state: &AssessmentState, stage: Stage, table: &RiskTable) -> bool {
    match stage {
        Stage::Screening => true,
        Stage::Select => {
            state.fever == Some(Answer::Yes) && state.high_risk_contact == Some(Answer::No)
        }
        Stage::Review => {
            state.onset_date.is_some()
                && state
                    .segments
                    .iter()
                    .any(|segment| !segment.country.trim().is_empty())
        }
        Stage::Exposures => review_all(state, table).any_red(),
        Stage::Summary => true,
    }
}

// ---------------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------------

/// Pure transition function: `(state, event, table) -> next state`.
///
/// Events that fail a guard or reference a missing segment are ignored
/// and the state comes back unchanged. Answer changes clear whatever
/// they invalidate: a country edit drops that segment's hazard answers,
/// any exposure-level change drops the whole amber chain, and amber-chain
/// edits drop their own downstream answers.
pub fn apply(state: &AssessmentState, event: Event, table: &RiskTable) -> AssessmentState {
    let mut next = state.clone();

    match event {
        Event::AnswerFever(answer) => {
            next.fever = Some(answer);
            if answer != Answer::Yes {
                // The contact question only applies to febrile patients.
                next.high_risk_contact = None;
            }
            next.amber.clear();
        }
        Event::AnswerHighRiskContact(answer) => {
            next.high_risk_contact = Some(answer);
            next.amber.clear();
        }
        Event::AddSegment { country } => {
            next.segments.push(TravelSegment::new(country));
            next.amber.clear();
        }
        Event::RemoveSegment { segment_id } => {
            next.segments.retain(|segment| segment.id != segment_id);
            next.hazard_answers.remove(&segment_id);
            next.amber.clear();
        }
        Event::SetCountry { segment_id, country } => match next.segment_mut(&segment_id) {
            Some(segment) => {
                segment.country = country;
                // Hazard questions were derived from the old country.
                next.hazard_answers.remove(&segment_id);
                next.amber.clear();
            }
            None => {
                tracing::warn!(%segment_id, "SetCountry for unknown segment, ignoring");
            }
        },
        Event::SetArrivalDate { segment_id, date } => match next.segment_mut(&segment_id) {
            // Arrival is informational only; nothing downstream depends on it.
            Some(segment) => segment.arrival_date = date,
            None => {
                tracing::warn!(%segment_id, "SetArrivalDate for unknown segment, ignoring");
            }
        },
        Event::SetDepartureDate { segment_id, date } => match next.segment_mut(&segment_id) {
            Some(segment) => {
                segment.departure_date = date;
                next.amber.clear();
            }
            None => {
                tracing::warn!(%segment_id, "SetDepartureDate for unknown segment, ignoring");
            }
        },
        Event::SetOnsetDate(date) => {
            next.onset_date = date;
            next.amber.clear();
        }
        Event::AnswerHazard { segment_id, hazard, answer } => {
            if next.segment(&segment_id).is_some() {
                next.hazard_answers
                    .entry(segment_id)
                    .or_default()
                    .set(hazard, answer);
                next.amber.clear();
            } else {
                tracing::warn!(%segment_id, "AnswerHazard for unknown segment, ignoring");
            }
        }
        Event::AnswerOutbreakExposure(answer) => {
            next.global.outbreak_exposure = Some(answer);
            next.amber.clear();
        }
        Event::AnswerBleedingSymptom(answer) => {
            next.global.bleeding_symptom = Some(answer);
            next.amber.clear();
        }
        Event::AnswerMalariaResult(answer) => {
            next.amber.set_malaria_positive(answer);
        }
        Event::AnswerAlternativeDiagnosis(answer) => {
            // Only reachable after a negative malaria result.
            if next.amber.malaria_positive == Some(Answer::No) {
                next.amber.set_alternative_diagnosis(answer);
            } else {
                tracing::debug!("AnswerAlternativeDiagnosis before malaria result, ignoring");
            }
        }
        Event::AnswerConcern72h(answer) => {
            if concern_72h_reachable(&next) {
                next.amber.set_concern_72h(answer);
            } else {
                tracing::debug!("AnswerConcern72h before its predecessor, ignoring");
            }
        }
        Event::AnswerVhfTest(answer) => {
            if next.amber.concern_72h == Some(Answer::Yes) {
                next.amber.set_vhf_test_positive(answer);
            } else {
                tracing::debug!("AnswerVhfTest without a 72-hour concern, ignoring");
            }
        }
        Event::GoTo(stage) => {
            let current = next.stage.rank();
            let target = stage.rank();
            if target < current {
                next.stage = stage;
            } else if target == current + 1 && can_enter(&next, stage, table) {
                next.stage = stage;
            } else if target != current {
                tracing::debug!(
                    from = next.stage.as_str(),
                    to = stage.as_str(),
                    "Transition rejected"
                );
            }
        }
        Event::Reset => {
            next = AssessmentState::new();
        }
    }

    next
}

/// The 72-hour question follows either a positive malaria result or a
/// negative result with no alternative diagnosis.
fn concern_72h_reachable(state: &AssessmentState) -> bool {
    match state.amber.malaria_positive {
        Some(Answer::Yes) => true,
        Some(Answer::No) => state.amber.alternative_diagnosis == Some(Answer::No),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Screening passed, one within-window Nigeria segment at Review.
    fn state_at_review(table: &RiskTable) -> AssessmentState {
        let mut state = AssessmentState::new();
        state = apply(&state, Event::AnswerFever(Answer::Yes), table);
        state = apply(&state, Event::AnswerHighRiskContact(Answer::No), table);
        state = apply(&state, Event::GoTo(Stage::Select), table);
        state = apply(&state, Event::AddSegment { country: "Nigeria".into() }, table);
        state = apply(&state, Event::SetOnsetDate(Some(date(2025, 3, 26))), table);
        let id = state.segments[0].id;
        state = apply(
            &state,
            Event::SetDepartureDate { segment_id: id, date: Some(date(2025, 3, 16)) },
            table,
        );
        apply(&state, Event::GoTo(Stage::Review), table)
    }

    #[test]
    fn select_requires_screening_answers() {
        let table = RiskTable::load_test();
        let state = AssessmentState::new();
        let state = apply(&state, Event::GoTo(Stage::Select), &table);
        assert_eq!(state.stage, Stage::Screening);

        let state = apply(&state, Event::AnswerFever(Answer::Yes), &table);
        let state = apply(&state, Event::AnswerHighRiskContact(Answer::No), &table);
        let state = apply(&state, Event::GoTo(Stage::Select), &table);
        assert_eq!(state.stage, Stage::Select);
    }

    #[test]
    fn review_requires_country_and_onset() {
        let table = RiskTable::load_test();
        let mut state = AssessmentState::new();
        state = apply(&state, Event::AnswerFever(Answer::Yes), &table);
        state = apply(&state, Event::AnswerHighRiskContact(Answer::No), &table);
        state = apply(&state, Event::GoTo(Stage::Select), &table);

        // No segments yet: rejected.
        let attempt = apply(&state, Event::GoTo(Stage::Review), &table);
        assert_eq!(attempt.stage, Stage::Select);

        state = apply(&state, Event::AddSegment { country: "Nigeria".into() }, &table);
        // Still no onset date.
        let attempt = apply(&state, Event::GoTo(Stage::Review), &table);
        assert_eq!(attempt.stage, Stage::Select);

        state = apply(&state, Event::SetOnsetDate(Some(date(2025, 3, 26))), &table);
        let state = apply(&state, Event::GoTo(Stage::Review), &table);
        assert_eq!(state.stage, Stage::Review);
    }

    #[test]
    fn exposures_requires_a_red_segment() {
        let table = RiskTable::load_test();
        let mut state = AssessmentState::new();
        state = apply(&state, Event::AnswerFever(Answer::Yes), &table);
        state = apply(&state, Event::AnswerHighRiskContact(Answer::No), &table);
        state = apply(&state, Event::GoTo(Stage::Select), &table);
        state = apply(&state, Event::AddSegment { country: "France".into() }, &table);
        state = apply(&state, Event::SetOnsetDate(Some(date(2025, 3, 26))), &table);
        state = apply(&state, Event::GoTo(Stage::Review), &table);

        // France reviews green: exposures stays unreachable.
        let attempt = apply(&state, Event::GoTo(Stage::Exposures), &table);
        assert_eq!(attempt.stage, Stage::Review);
    }

    #[test]
    fn full_forward_walk_to_summary() {
        let table = RiskTable::load_test();
        let mut state = state_at_review(&table);
        assert_eq!(state.stage, Stage::Review);

        state = apply(&state, Event::GoTo(Stage::Exposures), &table);
        assert_eq!(state.stage, Stage::Exposures);

        // Summary is unguarded once exposures is reached.
        state = apply(&state, Event::GoTo(Stage::Summary), &table);
        assert_eq!(state.stage, Stage::Summary);
    }

    #[test]
    fn back_transitions_always_allowed() {
        let table = RiskTable::load_test();
        let state = state_at_review(&table);
        let state = apply(&state, Event::GoTo(Stage::Screening), &table);
        assert_eq!(state.stage, Stage::Screening);
        // Answers survive a back-transition.
        assert_eq!(state.fever, Some(Answer::Yes));
        assert_eq!(state.segments.len(), 1);
    }

    #[test]
    fn forward_jumps_are_rejected() {
        let table = RiskTable::load_test();
        let mut state = AssessmentState::new();
        state = apply(&state, Event::AnswerFever(Answer::Yes), &table);
        state = apply(&state, Event::AnswerHighRiskContact(Answer::No), &table);
        let state = apply(&state, Event::GoTo(Stage::Review), &table);
        assert_eq!(state.stage, Stage::Screening);
    }

    #[test]
    fn reset_clears_everything() {
        let table = RiskTable::load_test();
        let state = state_at_review(&table);
        let state = apply(&state, Event::Reset, &table);
        assert_eq!(state, AssessmentState::new());
    }

    #[test]
    fn country_change_clears_that_segments_hazard_answers() {
        let table = RiskTable::load_test();
        let state = state_at_review(&table);
        let id = state.segments[0].id;
        let state = apply(
            &state,
            Event::AnswerHazard { segment_id: id, hazard: HazardKind::Lassa, answer: Answer::Yes },
            &table,
        );
        assert_eq!(
            state.hazard_answers_for(&id).lassa,
            Some(Answer::Yes)
        );

        let state = apply(
            &state,
            Event::SetCountry { segment_id: id, country: "Sierra Leone".into() },
            &table,
        );
        assert_eq!(state.hazard_answers_for(&id).lassa, None);
    }

    #[test]
    fn exposure_answer_change_clears_amber_chain() {
        let table = RiskTable::load_test();
        let state = state_at_review(&table);
        let id = state.segments[0].id;
        let state = apply(
            &state,
            Event::AnswerHazard { segment_id: id, hazard: HazardKind::Lassa, answer: Answer::No },
            &table,
        );
        let state = apply(&state, Event::AnswerOutbreakExposure(Answer::No), &table);
        let state = apply(&state, Event::AnswerBleedingSymptom(Answer::No), &table);
        let state = apply(&state, Event::AnswerMalariaResult(Answer::No), &table);
        assert_eq!(state.amber.malaria_positive, Some(Answer::No));

        // Re-answering an upstream exposure question invalidates the chain.
        let state = apply(&state, Event::AnswerBleedingSymptom(Answer::Yes), &table);
        assert_eq!(state.amber.malaria_positive, None);
    }

    #[test]
    fn amber_chain_gating() {
        let table = RiskTable::load_test();
        let state = state_at_review(&table);

        // Deeper questions before their predecessors are ignored.
        let attempt = apply(&state, Event::AnswerAlternativeDiagnosis(Answer::Yes), &table);
        assert_eq!(attempt.amber.alternative_diagnosis, None);
        let attempt = apply(&state, Event::AnswerConcern72h(Answer::Yes), &table);
        assert_eq!(attempt.amber.concern_72h, None);
        let attempt = apply(&state, Event::AnswerVhfTest(Answer::Yes), &table);
        assert_eq!(attempt.amber.vhf_test_positive, None);

        let state = apply(&state, Event::AnswerMalariaResult(Answer::No), &table);
        let state = apply(&state, Event::AnswerAlternativeDiagnosis(Answer::No), &table);
        let state = apply(&state, Event::AnswerConcern72h(Answer::Yes), &table);
        let state = apply(&state, Event::AnswerVhfTest(Answer::No), &table);
        assert_eq!(state.amber.vhf_test_positive, Some(Answer::No));
    }

    #[test]
    fn upstream_amber_change_resets_downstream() {
        let table = RiskTable::load_test();
        let state = state_at_review(&table);
        let state = apply(&state, Event::AnswerMalariaResult(Answer::No), &table);
        let state = apply(&state, Event::AnswerAlternativeDiagnosis(Answer::No), &table);
        let state = apply(&state, Event::AnswerConcern72h(Answer::Yes), &table);
        let state = apply(&state, Event::AnswerVhfTest(Answer::Yes), &table);

        let state = apply(&state, Event::AnswerMalariaResult(Answer::Yes), &table);
        assert_eq!(state.amber.malaria_positive, Some(Answer::Yes));
        assert_eq!(state.amber.alternative_diagnosis, None);
        assert_eq!(state.amber.concern_72h, None);
        assert_eq!(state.amber.vhf_test_positive, None);
    }

    #[test]
    fn events_for_unknown_segments_are_ignored() {
        let table = RiskTable::load_test();
        let state = state_at_review(&table);
        let ghost = Uuid::new_v4();
        let next = apply(
            &state,
            Event::AnswerHazard { segment_id: ghost, hazard: HazardKind::Lassa, answer: Answer::Yes },
            &table,
        );
        assert_eq!(next, state);
        let next = apply(
            &next,
            Event::SetCountry { segment_id: ghost, country: "Chad".into() },
            &table,
        );
        assert_eq!(next, state);
    }

    #[test]
    fn fever_change_away_from_yes_clears_contact_answer() {
        let table = RiskTable::load_test();
        let mut state = AssessmentState::new();
        state = apply(&state, Event::AnswerFever(Answer::Yes), &table);
        state = apply(&state, Event::AnswerHighRiskContact(Answer::Yes), &table);
        let state = apply(&state, Event::AnswerFever(Answer::No), &table);
        assert_eq!(state.high_risk_contact, None);
    }
}
