pub mod config;
pub mod form;
pub mod report;
pub mod validate;

pub use config::{Config, NameScanPolicy};
pub use form::{ScreeningRequest, ScreeningSubmission, SubmissionError};
pub use report::*;
pub use validate::{validate_screening_result, ScreeningValidationResult};
