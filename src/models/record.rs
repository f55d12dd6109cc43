use serde::{Deserialize, Serialize};

/// One disease-evidence row from the risk reference table, held verbatim.
///
/// Rows are produced by the table collaborator (live scrape or bundled
/// fallback snapshot); the engine never edits them. Absent fields in a
/// source row default to empty strings so classification stays total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseEvidenceRecord {
    #[serde(default)]
    pub disease: String,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub year: String,
}

impl DiseaseEvidenceRecord {
    pub fn new(
        disease: impl Into<String>,
        evidence: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            disease: disease.into(),
            evidence: evidence.into(),
            year: year.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let record: DiseaseEvidenceRecord =
            serde_json::from_str(r#"{"disease": "Lassa fever"}"#).unwrap();
        assert_eq!(record.disease, "Lassa fever");
        assert_eq!(record.evidence, "");
        assert_eq!(record.year, "");
    }
}
