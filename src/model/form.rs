use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use utoipa::ToSchema;

// Raw screening submission as received from the browser form. Birth parts
// are independently optional; a full date is only transmitted upstream when
// all three are present.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScreeningSubmission {
    pub url: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_names: Option<String>,
    #[serde(default)]
    pub birth_day: Option<u32>,
    #[serde(default)]
    pub birth_month: Option<u32>,
    #[serde(default)]
    pub birth_year: Option<i32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("url is not a valid URL")]
    InvalidUrl,
    #[error("url scheme must be http or https")]
    UnsupportedScheme,
    #[error("first_name must not be empty")]
    MissingFirstName,
    #[error("last_name must not be empty")]
    MissingLastName,
    #[error("birth_day {0} is outside 1-31")]
    BirthDayOutOfRange(u32),
    #[error("birth_month {0} is outside 1-12")]
    BirthMonthOutOfRange(u32),
    #[error("birth_year {0} is outside 1900-2030")]
    BirthYearOutOfRange(i32),
}

/// A validated submission, ready to be sent to the screening service.
#[derive(Debug, Clone)]
pub struct ScreeningRequest {
    pub url: Url,
    pub first_name: String,
    pub last_name: String,
    pub middle_names: Option<String>,
    /// YYYY-MM-DD, present only when day, month and year were all given.
    pub date_of_birth: Option<String>,
}

impl ScreeningSubmission {
    /// Validate the submission; nothing goes on the wire before this passes.
    pub fn validate(self) -> Result<ScreeningRequest, SubmissionError> {
        let url = Url::parse(self.url.trim()).map_err(|_| SubmissionError::InvalidUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SubmissionError::UnsupportedScheme);
        }

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err(SubmissionError::MissingFirstName);
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            return Err(SubmissionError::MissingLastName);
        }

        if let Some(day) = self.birth_day {
            if !(1..=31).contains(&day) {
                return Err(SubmissionError::BirthDayOutOfRange(day));
            }
        }
        if let Some(month) = self.birth_month {
            if !(1..=12).contains(&month) {
                return Err(SubmissionError::BirthMonthOutOfRange(month));
            }
        }
        if let Some(year) = self.birth_year {
            if !(1900..=2030).contains(&year) {
                return Err(SubmissionError::BirthYearOutOfRange(year));
            }
        }

        // The parts are range-checked individually; no calendar check, the
        // screening service owns date interpretation.
        let date_of_birth = match (self.birth_year, self.birth_month, self.birth_day) {
            (Some(year), Some(month), Some(day)) => {
                Some(format!("{year:04}-{month:02}-{day:02}"))
            }
            _ => None,
        };

        let middle_names = self
            .middle_names
            .map(|names| names.trim().to_string())
            .filter(|names| !names.is_empty());

        Ok(ScreeningRequest {
            url,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            middle_names,
            date_of_birth,
        })
    }
}
