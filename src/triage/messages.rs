/// Single source for every clinician-facing heading, title and checklist.
/// Review cards and the resolver both read from here, so wording can never
/// drift between stages.
pub struct Messages;

impl Messages {
    // --- Review card headings ---

    pub const OUTSIDE_WINDOW: &'static str = "Outside incubation window";
    pub const NO_KNOWN_HCIDS: &'static str = "No known HCIDs";
    pub const CONSIDER_FOLLOWING: &'static str = "Consider the following";

    /// Footnote when a country's only mentions were travel-associated.
    pub const TRAVEL_ASSOCIATED_NOTE: &'static str =
        "Previously reported cases were travel associated only.";

    /// Secondary-pathway notice, attached to a card regardless of tone.
    pub const MERS_NOTICE: &'static str =
        "Departure within 14 days of onset: consider a separate MERS-CoV risk assessment.";

    // --- Aggregate review headings ---

    pub const REVIEW_ALL_GREEN: &'static str = "VHF unlikely, manage locally";
    pub const REVIEW_FURTHER_ASSESSMENT: &'static str = "Further assessment needed";

    // --- Resolution titles ---

    pub const AT_RISK: &'static str = "AT RISK OF VHF";
    pub const MINIMAL_RISK: &'static str = "Minimal risk of VHF";
    pub const CONFIRMED: &'static str = "CONFIRMED VHF";
    pub const UNLIKELY: &'static str = "VHF unlikely; manage locally";
    pub const MANAGE_AS_MALARIA: &'static str = "Manage as malaria, VHF unlikely";
    pub const PENDING: &'static str = "Answer all questions to see a recommendation";

    /// Isolation and escalation checklist for any at-risk resolution.
    pub fn red_checklist() -> Vec<String> {
        vec![
            "Isolate the patient in a side room".into(),
            "Discuss urgently with the infection consultant on call".into(),
            "Send an urgent malaria investigation".into(),
            "Send FBC, U&E, LFT, clotting, CRP, glucose and blood cultures".into(),
            "Inform the laboratory of VHF risk before sending samples".into(),
        ]
    }

    /// Work-up for the minimal-risk pathway.
    pub fn amber_actions() -> Vec<String> {
        vec![
            "Send an urgent malaria investigation".into(),
            "Send urgent local investigations including blood cultures".into(),
        ]
    }

    /// Actions once VHF is confirmed by testing.
    pub fn confirmed_actions() -> Vec<String> {
        vec![
            "Contact the national emergency response line to arrange transfer".into(),
            "Initiate public health contact tracing".into(),
        ]
    }
}
