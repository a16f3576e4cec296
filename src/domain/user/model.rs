//! User profile domain entity
//!
//! Only the discovery-relevant part of a user lives here. Credentials and
//! account management belong to the auth service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::interest::Interest;

/// A user's own gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which gender a user wants to see in discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderPreference {
    Male,
    Female,
    #[default]
    All,
}

impl GenderPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::All => "ALL",
        }
    }

    /// The gender candidates must have, or `None` when any gender is fine.
    pub fn required_gender(&self) -> Option<Gender> {
        match self {
            Self::Male => Some(Gender::Male),
            Self::Female => Some(Gender::Female),
            Self::All => None,
        }
    }
}

impl From<Gender> for GenderPreference {
    fn from(g: Gender) -> Self {
        match g {
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
        }
    }
}

/// Stored discovery preferences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryPreferences {
    pub interested_in_gender: GenderPreference,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

/// Partial update of discovery preferences; `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct PreferencesUpdate {
    pub interested_in_gender: Option<GenderPreference>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

impl PreferencesUpdate {
    pub fn apply(&self, prefs: &mut DiscoveryPreferences) {
        if let Some(g) = self.interested_in_gender {
            prefs.interested_in_gender = g;
        }
        if self.min_age.is_some() {
            prefs.min_age = self.min_age;
        }
        if self.max_age.is_some() {
            prefs.max_age = self.max_age;
        }
    }
}

/// User profile as seen by matching and discovery
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: String,
    pub fullname: String,
    pub age: i32,
    pub gender: Gender,
    pub faculty: Option<String>,
    pub program: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub photos: Vec<String>,
    pub interests: Vec<Interest>,
    pub is_active: bool,
    pub preferences: DiscoveryPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(fullname: impl Into<String>, age: i32, gender: Gender) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            fullname: fullname.into(),
            age,
            gender,
            faculty: None,
            program: None,
            bio: None,
            profile_picture: None,
            photos: Vec::new(),
            interests: Vec::new(),
            is_active: true,
            preferences: DiscoveryPreferences::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_academics(mut self, faculty: Option<&str>, program: Option<&str>) -> Self {
        self.faculty = faculty.map(str::to_string);
        self.program = program.map(str::to_string);
        self
    }

    pub fn with_interests(mut self, interests: Vec<Interest>) -> Self {
        self.interests = interests;
        self
    }

    pub fn interest_ids(&self) -> impl Iterator<Item = &str> {
        self.interests.iter().map(|i| i.id.as_str())
    }
}

/// Candidate selection criteria for discovery.
///
/// Candidates are always active users. The base part (exclusions and gender)
/// is always applied; age, faculty and program are the optional part that the
/// relaxed fallback drops.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub exclude_ids: Vec<String>,
    pub gender: Option<Gender>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub faculty: Option<String>,
    pub program: Option<String>,
}

impl CandidateFilter {
    pub fn base(exclude_ids: Vec<String>, gender: Option<Gender>) -> Self {
        Self {
            exclude_ids,
            gender,
            ..Default::default()
        }
    }

    pub fn has_optional(&self) -> bool {
        self.min_age.is_some()
            || self.max_age.is_some()
            || self.faculty.is_some()
            || self.program.is_some()
    }

    /// Same filter with the optional criteria removed.
    pub fn relaxed(&self) -> Self {
        Self::base(self.exclude_ids.clone(), self.gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_preference_requires_no_gender() {
        assert_eq!(GenderPreference::All.required_gender(), None);
        assert_eq!(
            GenderPreference::Female.required_gender(),
            Some(Gender::Female)
        );
    }

    #[test]
    fn preferences_update_keeps_unset_fields() {
        let mut prefs = DiscoveryPreferences {
            interested_in_gender: GenderPreference::Male,
            min_age: Some(20),
            max_age: Some(30),
        };
        let update = PreferencesUpdate {
            max_age: Some(25),
            ..Default::default()
        };
        update.apply(&mut prefs);
        assert_eq!(prefs.interested_in_gender, GenderPreference::Male);
        assert_eq!(prefs.min_age, Some(20));
        assert_eq!(prefs.max_age, Some(25));
    }

    #[test]
    fn relaxed_filter_drops_optional_criteria() {
        let filter = CandidateFilter {
            exclude_ids: vec!["me".into()],
            gender: Some(Gender::Female),
            min_age: Some(21),
            faculty: Some("Engineering".into()),
            ..Default::default()
        };
        assert!(filter.has_optional());

        let relaxed = filter.relaxed();
        assert!(!relaxed.has_optional());
        assert_eq!(relaxed.exclude_ids, vec!["me".to_string()]);
        assert_eq!(relaxed.gender, Some(Gender::Female));
    }

    #[test]
    fn gender_serializes_uppercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"FEMALE\"");
        let pref: GenderPreference = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(pref, GenderPreference::All);
    }
}
