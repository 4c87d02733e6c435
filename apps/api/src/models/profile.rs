use serde::{Deserialize, Serialize};

/// Raw profile form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub location: String,
    /// Comma-separated skill list.
    #[serde(default)]
    pub skills: String,
}

/// A user's submitted profile. Skills keep their display form; comparisons
/// normalize them on the fly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub degree: String,
    pub location: String,
    pub user_skills: Vec<String>,
}

impl Profile {
    pub fn from_form(form: &ProfileForm) -> Self {
        let user_skills = form
            .skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Profile {
            degree: form.degree.trim().to_string(),
            location: form.location.trim().to_string(),
            user_skills,
        }
    }
}

/// Everything a session carries between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub profile: Option<Profile>,
    pub selected_role_id: Option<String>,
}

impl SessionState {
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.selected_role_id.is_none()
    }

    pub fn clear(&mut self) {
        *self = SessionState::default();
    }
}
