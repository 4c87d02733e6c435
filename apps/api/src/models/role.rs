use serde::{Deserialize, Serialize};

/// A job role from the static catalog. Validated once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub top_skills: Vec<String>,
}
