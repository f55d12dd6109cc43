use serde::{Deserialize, Serialize};

use crate::models::enums::{Answer, Tone};

use super::messages::Messages;
use super::reference::RiskTable;
use super::review::{review_all, ReviewOutcome};
use super::types::{AmberAnswers, AssessmentState};

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// The follow-up question the clinician should be asked next, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowUp {
    MalariaResult,
    AlternativeDiagnosis,
    Concern72h,
    VhfTest,
}

/// The derived decision for the current state.
///
/// `tone` is `None` while required questions remain unanswered; the title
/// then carries a neutral placeholder instead of a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub tone: Option<Tone>,
    pub title: String,
    pub actions: Vec<String>,
    pub next_question: Option<FollowUp>,
    pub required: usize,
    pub answered: usize,
}

impl Resolution {
    fn terminal(tone: Tone, title: &str, actions: Vec<String>) -> Self {
        Self {
            tone: Some(tone),
            title: title.into(),
            actions,
            next_question: None,
            required: 0,
            answered: 0,
        }
    }

    fn with_counts(mut self, accounting: &QuestionAccounting) -> Self {
        self.required = accounting.required;
        self.answered = accounting.answered;
        self
    }

    fn green_unlikely() -> Self {
        Self::terminal(Tone::Green, Messages::UNLIKELY, Vec::new())
    }

    fn red_at_risk() -> Self {
        Self::terminal(Tone::Red, Messages::AT_RISK, Messages::red_checklist())
    }
}

// ---------------------------------------------------------------------------
// Required-question accounting
// ---------------------------------------------------------------------------

/// Completion arithmetic over the required exposure questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAccounting {
    pub required: usize,
    pub answered: usize,
    pub any_yes: bool,
}

impl QuestionAccounting {
    pub fn all_answered(&self) -> bool {
        self.answered == self.required
    }
}

/// Count required and answered questions for the exposures stage.
///
/// A segment contributes one question per classifier-flagged hazard on its
/// review card; the two global questions are always required. Answers on
/// non-required slots are excluded entirely.
pub fn account(state: &AssessmentState, table: &RiskTable) -> QuestionAccounting {
    account_review(state, &review_all(state, table))
}

fn account_review(state: &AssessmentState, review: &ReviewOutcome) -> QuestionAccounting {
    let mut required = 2;
    let mut answered = 0;
    let mut any_yes = false;

    for card in &review.cards {
        let answers = state.hazard_answers_for(&card.segment_id);
        for kind in &card.required_hazards {
            required += 1;
            if let Some(answer) = answers.get(*kind) {
                answered += 1;
                any_yes |= answer == Answer::Yes;
            }
        }
    }

    for answer in [state.global.outbreak_exposure, state.global.bleeding_symptom] {
        if let Some(answer) = answer {
            answered += 1;
            any_yes |= answer == Answer::Yes;
        }
    }

    QuestionAccounting {
        required,
        answered,
        any_yes,
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Derive the current decision from accumulated answers.
///
/// Pure projection: no side effects, and unchanged state always resolves
/// to identical output. Never fails; incomplete answers yield the pending
/// placeholder rather than a tone.
pub fn resolve(state: &AssessmentState, table: &RiskTable) -> Resolution {
    // Screening short-circuits bypass every later stage.
    match (state.fever, state.high_risk_contact) {
        (None, _) => {
            return Resolution {
                tone: None,
                title: Messages::PENDING.into(),
                actions: Vec::new(),
                next_question: None,
                required: 0,
                answered: 0,
            }
        }
        (Some(Answer::No), _) => return Resolution::green_unlikely(),
        (Some(Answer::Yes), None) => {
            return Resolution {
                tone: None,
                title: Messages::PENDING.into(),
                actions: Vec::new(),
                next_question: None,
                required: 0,
                answered: 0,
            }
        }
        (Some(Answer::Yes), Some(Answer::Yes)) => return Resolution::red_at_risk(),
        (Some(Answer::Yes), Some(Answer::No)) => {}
    }

    let review = review_all(state, table);
    if !review.any_red() {
        // Every destination reviewed green (or none entered yet).
        return Resolution::green_unlikely();
    }

    let accounting = account_review(state, &review);
    if !accounting.all_answered() {
        return Resolution {
            tone: None,
            title: Messages::PENDING.into(),
            actions: Vec::new(),
            next_question: None,
            required: accounting.required,
            answered: accounting.answered,
        };
    }

    if accounting.any_yes {
        return Resolution::red_at_risk().with_counts(&accounting);
    }

    resolve_amber(&state.amber).with_counts(&accounting)
}

/// Walk the minimal-risk follow-up chain.
fn resolve_amber(amber: &AmberAnswers) -> Resolution {
    let amber_base = |next| Resolution {
        tone: Some(Tone::Amber),
        title: Messages::MINIMAL_RISK.into(),
        actions: Messages::amber_actions(),
        next_question: Some(next),
        required: 0,
        answered: 0,
    };

    match amber.malaria_positive {
        None => amber_base(FollowUp::MalariaResult),
        Some(Answer::Yes) => {
            // Positive malaria resolves green while the 72-hour check runs.
            concern_chain(amber, Tone::Green, Messages::MANAGE_AS_MALARIA, Vec::new())
        }
        Some(Answer::No) => match amber.alternative_diagnosis {
            None => amber_base(FollowUp::AlternativeDiagnosis),
            Some(Answer::Yes) => Resolution::green_unlikely(),
            Some(Answer::No) => concern_chain(
                amber,
                Tone::Amber,
                Messages::MINIMAL_RISK,
                Messages::amber_actions(),
            ),
        },
    }
}

/// The shared 72-hour-concern tail of both amber branches. Escalations
/// from here carry the confirmatory test branch.
fn concern_chain(
    amber: &AmberAnswers,
    pending_tone: Tone,
    pending_title: &str,
    pending_actions: Vec<String>,
) -> Resolution {
    match amber.concern_72h {
        None => Resolution {
            tone: Some(pending_tone),
            title: pending_title.into(),
            actions: pending_actions,
            next_question: Some(FollowUp::Concern72h),
            required: 0,
            answered: 0,
        },
        Some(Answer::No) => Resolution::green_unlikely(),
        Some(Answer::Yes) => match amber.vhf_test_positive {
            None => Resolution {
                next_question: Some(FollowUp::VhfTest),
                ..Resolution::red_at_risk()
            },
            Some(Answer::Yes) => Resolution::terminal(
                Tone::Red,
                Messages::CONFIRMED,
                Messages::confirmed_actions(),
            ),
            Some(Answer::No) => Resolution::green_unlikely(),
        },
    }
}
