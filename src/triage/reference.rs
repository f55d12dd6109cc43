use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::RiskSource;
use crate::models::DiseaseEvidenceRecord;

use super::normalize::normalize_country;
use super::types::TriageError;

/// Countries carrying a separate MERS-CoV assessment pathway. Membership
/// is tested through the normalizer, same as table lookups.
const SPECIAL_RISK_COUNTRIES: &[&str] = &[
    "bahrain",
    "iran",
    "iraq",
    "israel",
    "jordan",
    "kuwait",
    "lebanon",
    "oman",
    "qatar",
    "saudi arabia",
    "syria",
    "united arab emirates",
    "yemen",
];

/// Where the loaded table came from. Display-only: decision logic never
/// branches on provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provenance {
    pub source: RiskSource,
    pub captured_at: Option<NaiveDate>,
}

/// One country's rows as they appear in a table snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRiskRow {
    pub country: String,
    pub records: Vec<DiseaseEvidenceRecord>,
}

/// On-disk shape of the bundled fallback snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FallbackSnapshot {
    captured_at: Option<NaiveDate>,
    countries: Vec<CountryRiskRow>,
}

/// The country risk reference table, keyed by canonical country name.
///
/// Built by a collaborator (live scrape or bundled fallback); the engine
/// only reads it. A country missing from the table resolves to an empty
/// record list, which downstream classifies as "no known HCIDs".
#[derive(Debug)]
pub struct RiskTable {
    entries: HashMap<String, Vec<DiseaseEvidenceRecord>>,
    provenance: Provenance,
}

impl RiskTable {
    /// Build a table from collaborator-supplied rows, normalizing keys.
    /// Rows that normalize to the same country are merged in order.
    pub fn from_rows(rows: Vec<CountryRiskRow>, provenance: Provenance) -> Self {
        let mut entries: HashMap<String, Vec<DiseaseEvidenceRecord>> = HashMap::new();
        for row in rows {
            let key = normalize_country(&row.country);
            if key.is_empty() {
                continue;
            }
            entries.entry(key).or_default().extend(row.records);
        }
        tracing::debug!(countries = entries.len(), "Risk table built");
        Self {
            entries,
            provenance,
        }
    }

    /// Load the bundled fallback snapshot from disk.
    pub fn load(path: &Path) -> Result<Self, TriageError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TriageError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        let snapshot: FallbackSnapshot = serde_json::from_str(&raw).map_err(|e| {
            TriageError::ReferenceDataParse(path.display().to_string(), e.to_string())
        })?;

        let provenance = Provenance {
            source: RiskSource::Fallback,
            captured_at: snapshot.captured_at,
        };
        Ok(Self::from_rows(snapshot.countries, provenance))
    }

    /// Create reference data for tests (no file I/O).
    pub fn load_test() -> Self {
        let rows = vec![
            CountryRiskRow {
                country: "Nigeria".into(),
                records: vec![
                    DiseaseEvidenceRecord::new(
                        "Lassa fever",
                        "Endemic. Seasonal outbreaks reported.",
                        "2024",
                    ),
                    DiseaseEvidenceRecord::new("Mpox (clade I)", "Ongoing outbreak.", "2024"),
                ],
            },
            CountryRiskRow {
                country: "Sierra Leone".into(),
                records: vec![
                    DiseaseEvidenceRecord::new("Lassa fever", "Endemic.", "2023"),
                    DiseaseEvidenceRecord::new(
                        "Ebola virus disease",
                        "Previous outbreak 2014-2016.",
                        "2016",
                    ),
                ],
            },
            CountryRiskRow {
                country: "Uganda".into(),
                records: vec![
                    DiseaseEvidenceRecord::new(
                        "Ebola virus disease (Sudan virus)",
                        "Outbreak declared over.",
                        "2023",
                    ),
                    DiseaseEvidenceRecord::new("Marburg virus disease", "Sporadic cases.", "2017"),
                    DiseaseEvidenceRecord::new(
                        "Crimean-Congo haemorrhagic fever",
                        "Sporadic human cases.",
                        "2023",
                    ),
                ],
            },
            CountryRiskRow {
                country: "Türkiye".into(),
                records: vec![DiseaseEvidenceRecord::new(
                    "CCHF",
                    "Endemic in Anatolia.",
                    "2024",
                )],
            },
            CountryRiskRow {
                country: "Pakistan".into(),
                records: vec![
                    DiseaseEvidenceRecord::new(
                        "Crimean-Congo haemorrhagic fever",
                        "Regular seasonal cases.",
                        "2024",
                    ),
                    DiseaseEvidenceRecord::new(
                        "Avian influenza A(H5N1)",
                        "Imported cases only.",
                        "2021",
                    ),
                ],
            },
            CountryRiskRow {
                country: "France".into(),
                records: vec![DiseaseEvidenceRecord::new("No known HCID risk", "", "")],
            },
            CountryRiskRow {
                country: "Thailand".into(),
                records: vec![DiseaseEvidenceRecord::new(
                    "MERS-CoV (travel associated)",
                    "Single imported case.",
                    "2015",
                )],
            },
            CountryRiskRow {
                country: "Saudi Arabia".into(),
                records: vec![DiseaseEvidenceRecord::new(
                    "MERS-CoV",
                    "Sporadic human cases.",
                    "2024",
                )],
            },
        ];

        Self::from_rows(
            rows,
            Provenance {
                source: RiskSource::Fallback,
                captured_at: NaiveDate::from_ymd_opt(2025, 11, 3),
            },
        )
    }

    /// Records for a country, via the normalizer. Missing country = empty.
    pub fn lookup(&self, raw_country: &str) -> &[DiseaseEvidenceRecord] {
        self.entries
            .get(&normalize_country(raw_country))
            .map(|records| records.as_slice())
            .unwrap_or(&[])
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Membership test for the separate MERS assessment pathway.
pub fn is_special_risk_country(raw_country: &str) -> bool {
    let key = normalize_country(raw_country);
    SPECIAL_RISK_COUNTRIES.contains(&key.as_str())
}
