use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::{HazardKind, Tone};
use crate::models::{DiseaseEvidenceRecord, TravelSegment};

use super::classify::classify;
use super::messages::Messages;
use super::reference::{is_special_risk_country, RiskTable};
use super::types::AssessmentState;
use super::window::{days_elapsed, outside_vhf_window, within_mers_window};

// ---------------------------------------------------------------------------
// SegmentReview
// ---------------------------------------------------------------------------

/// One destination's card on the review screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentReview {
    pub segment_id: Uuid,
    pub country: String,
    pub tone: Tone,
    pub heading: String,
    /// Surviving evidence rows, shown as the card body on red cards.
    pub body: Vec<DiseaseEvidenceRecord>,
    /// Footnote, e.g. travel-associated mentions removed by the filter.
    pub note: Option<String>,
    /// Secondary MERS pathway notice; independent of tone.
    pub mers_notice: bool,
    pub days_elapsed: Option<i64>,
    /// Hazard buckets that carry an exposure question for this segment.
    pub required_hazards: Vec<HazardKind>,
    /// Audit list: surviving disease labels outside every bucket.
    pub unmatched: Vec<String>,
}

/// Aggregate verdict over all segment cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub cards: Vec<SegmentReview>,
    pub tone: Tone,
    pub heading: String,
}

impl ReviewOutcome {
    /// Whether any card needs the exposures stage.
    pub fn any_red(&self) -> bool {
        self.cards.iter().any(|card| card.tone == Tone::Red)
    }
}

// ---------------------------------------------------------------------------
// Review projections
// ---------------------------------------------------------------------------

/// Classify one segment against the reference table.
///
/// Window arithmetic runs first and short-circuits hazard classification;
/// the MERS notice is evaluated independently and attaches to any tone.
pub fn review_segment(
    segment: &TravelSegment,
    onset: Option<NaiveDate>,
    table: &RiskTable,
) -> SegmentReview {
    let days = days_elapsed(segment.departure_date, onset);
    let mers_notice = is_special_risk_country(&segment.country) && within_mers_window(days);

    if outside_vhf_window(days) {
        return SegmentReview {
            segment_id: segment.id,
            country: segment.country.clone(),
            tone: Tone::Green,
            heading: Messages::OUTSIDE_WINDOW.into(),
            body: Vec::new(),
            note: None,
            mers_notice,
            days_elapsed: days,
            required_hazards: Vec::new(),
            unmatched: Vec::new(),
        };
    }

    let classification = classify(table.lookup(&segment.country));

    if classification.filtered.is_empty() {
        let note = classification
            .travel_associated
            .then(|| Messages::TRAVEL_ASSOCIATED_NOTE.to_string());
        return SegmentReview {
            segment_id: segment.id,
            country: segment.country.clone(),
            tone: Tone::Green,
            heading: Messages::NO_KNOWN_HCIDS.into(),
            body: Vec::new(),
            note,
            mers_notice,
            days_elapsed: days,
            required_hazards: Vec::new(),
            unmatched: Vec::new(),
        };
    }

    SegmentReview {
        segment_id: segment.id,
        country: segment.country.clone(),
        tone: Tone::Red,
        heading: Messages::CONSIDER_FOLLOWING.into(),
        body: classification.filtered,
        note: None,
        mers_notice,
        days_elapsed: days,
        required_hazards: classification.hazards.required(),
        unmatched: classification.unmatched,
    }
}

/// Review every segment and derive the aggregate verdict.
pub fn review_all(state: &AssessmentState, table: &RiskTable) -> ReviewOutcome {
    let cards: Vec<SegmentReview> = state
        .segments
        .iter()
        .map(|segment| review_segment(segment, state.onset_date, table))
        .collect();

    let any_red = cards.iter().any(|card| card.tone == Tone::Red);
    let (tone, heading) = if any_red {
        (Tone::Amber, Messages::REVIEW_FURTHER_ASSESSMENT)
    } else {
        (Tone::Green, Messages::REVIEW_ALL_GREEN)
    };

    tracing::debug!(
        segments = cards.len(),
        red = cards.iter().filter(|c| c.tone == Tone::Red).count(),
        "Review projection computed"
    );

    ReviewOutcome {
        cards,
        tone,
        heading: heading.into(),
    }
}
