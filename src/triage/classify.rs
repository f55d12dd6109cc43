use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::enums::HazardKind;
use crate::models::DiseaseEvidenceRecord;

/// Evidence phrasing that marks a row as import-linked rather than local risk.
static RE_IMPORT_LINKED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)imported cases only|associated with a case import|import[-\s]?related")
        .unwrap()
});

static RE_EBOLA_MARBURG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ebola|e\.v\.d|marburg").unwrap());

static RE_CCHF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cchf|crimea(?:n)?[-\s]?congo").unwrap());

// ---------------------------------------------------------------------------
// HazardProfile
// ---------------------------------------------------------------------------

/// Which hazard buckets a country's surviving records landed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardProfile {
    pub lassa: bool,
    pub ebola_marburg: bool,
    pub cchf: bool,
}

impl HazardProfile {
    pub fn flag(&self, kind: HazardKind) -> bool {
        match kind {
            HazardKind::Lassa => self.lassa,
            HazardKind::EbolaMarburg => self.ebola_marburg,
            HazardKind::Cchf => self.cchf,
        }
    }

    pub fn any(&self) -> bool {
        self.lassa || self.ebola_marburg || self.cchf
    }

    /// Buckets that carry a per-segment exposure question.
    pub fn required(&self) -> Vec<HazardKind> {
        HazardKind::ALL
            .into_iter()
            .filter(|kind| self.flag(*kind))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Outcome of filtering and bucketing one country's evidence rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Rows that survived the exclusion predicate, in table order.
    pub filtered: Vec<DiseaseEvidenceRecord>,
    pub hazards: HazardProfile,
    /// Disease labels of surviving rows that matched no bucket.
    /// Audit output for rule coverage; never a decision input.
    pub unmatched: Vec<String>,
    /// Rows removed by the exclusion predicate.
    pub excluded: usize,
    /// Whether any excluded row was a travel-associated mention.
    pub travel_associated: bool,
}

/// Lassa bucket.
pub fn matches_lassa(disease: &str) -> bool {
    disease.to_lowercase().contains("lassa")
}

/// Ebola (any spelling, incl. dotted E.V.D) or Marburg.
pub fn matches_ebola_marburg(disease: &str) -> bool {
    RE_EBOLA_MARBURG.is_match(disease)
}

/// CCHF, with hyphen/space and Crimea/Crimean variants.
pub fn matches_cchf(disease: &str) -> bool {
    RE_CCHF.is_match(disease)
}

fn is_no_known_hcid(disease: &str) -> bool {
    disease.to_lowercase().contains("no known hcid")
}

fn is_travel_associated(disease: &str) -> bool {
    disease.to_lowercase().contains("travel associated")
}

fn is_import_linked(evidence: &str) -> bool {
    RE_IMPORT_LINKED.is_match(evidence)
}

/// Whether a row is excluded from hazard consideration entirely.
pub fn is_excluded(record: &DiseaseEvidenceRecord) -> bool {
    is_no_known_hcid(&record.disease)
        || is_travel_associated(&record.disease)
        || is_import_linked(&record.evidence)
}

/// Filter a country's rows and bucket the survivors.
///
/// Total and idempotent: reclassifying the `filtered` output yields the
/// same list unchanged. A row may land in zero, one, or several buckets.
pub fn classify(entries: &[DiseaseEvidenceRecord]) -> Classification {
    let mut result = Classification::default();

    for record in entries {
        if is_excluded(record) {
            result.excluded += 1;
            if is_travel_associated(&record.disease) {
                result.travel_associated = true;
            }
            continue;
        }

        let lassa = matches_lassa(&record.disease);
        let ebola_marburg = matches_ebola_marburg(&record.disease);
        let cchf = matches_cchf(&record.disease);

        result.hazards.lassa |= lassa;
        result.hazards.ebola_marburg |= ebola_marburg;
        result.hazards.cchf |= cchf;

        if !(lassa || ebola_marburg || cchf) {
            result.unmatched.push(record.disease.clone());
        }

        result.filtered.push(record.clone());
    }

    result
}
