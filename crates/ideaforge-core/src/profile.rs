use serde::{Deserialize, Serialize};

/// A student profile as submitted by the questionnaire form.
///
/// All fields are opaque free text. The core performs no validation beyond
/// deserialization; missing fields default to empty strings so an unusual
/// profile shape never rejects the request outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub major: String,
    pub semester: String,
    pub technical_skills: String,
    pub interests: String,
    pub problem_solving_style: String,
    pub preferred_work_style: String,
    pub project_scope: String,
}
