pub mod enums;

mod record;
mod segment;

pub use record::DiseaseEvidenceRecord;
pub use segment::TravelSegment;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
