//! Student Record Types
//!
//! Defines the full record schema, the partial-update payload, and the
//! per-field validation constraints shared by both.

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::error::ApiError;

/// Lowest valid school grade.
pub const GRADE_MIN: u8 = 1;
/// Highest valid school grade.
pub const GRADE_MAX: u8 = 11;

/// One student entry, keyed by `student_id`.
///
/// All fields except `special_notes` are required. `date_of_birth` is an
/// ISO-formatted string (YYYY-MM-DD) but is not validated as a real date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique id across the collection.
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth (YYYY-MM-DD).
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub enrollment_year: i32,
    /// School grade, 1 through 11 inclusive.
    pub grade: u8,
    #[serde(default)]
    pub special_notes: Option<String>,
}

impl Student {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_grade(self.grade)
    }
}

/// Partial-update payload: every field optional.
///
/// Only fields present in the request body are applied; absent fields leave
/// the record unchanged. For `special_notes` the outer `Option` tracks
/// presence and the inner one the value, so "sent as null" (clear the field)
/// is distinguished from "not sent" (keep it). A supplied `student_id` is
/// accepted but never applied, since the id is the record key.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentPatch {
    pub student_id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub enrollment_year: Option<i32>,
    pub grade: Option<u8>,
    #[serde(deserialize_with = "double_option")]
    pub special_notes: Option<Option<String>>,
}

impl StudentPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        match self.grade {
            Some(grade) => check_grade(grade),
            None => Ok(()),
        }
    }

    /// Merges the supplied fields into `student`, leaving the rest intact.
    pub fn apply(self, student: &mut Student) {
        if let Some(v) = self.first_name {
            student.first_name = v;
        }
        if let Some(v) = self.last_name {
            student.last_name = v;
        }
        if let Some(v) = self.date_of_birth {
            student.date_of_birth = v;
        }
        if let Some(v) = self.email {
            student.email = v;
        }
        if let Some(v) = self.phone_number {
            student.phone_number = v;
        }
        if let Some(v) = self.address {
            student.address = v;
        }
        if let Some(v) = self.enrollment_year {
            student.enrollment_year = v;
        }
        if let Some(v) = self.grade {
            student.grade = v;
        }
        if let Some(v) = self.special_notes {
            student.special_notes = v;
        }
    }
}

/// Validates the grade range shared by full records, patches, and filters.
pub fn check_grade(grade: u8) -> Result<(), ApiError> {
    if (GRADE_MIN..=GRADE_MAX).contains(&grade) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "grade must be between {} and {}, got {}",
            GRADE_MIN, GRADE_MAX, grade
        )))
    }
}

/// Deserializes a field that was present in the body, wrapping it in the
/// outer presence `Option`. Absent fields never reach this function and
/// default to `None`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
