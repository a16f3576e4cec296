//! Discovery DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::application::discovery::{DiscoveryFilters, DiscoveryPage, ScoredProfile};
use crate::domain::{DiscoveryPreferences, PreferencesUpdate};
use crate::interfaces::http::dto::{GenderPreferenceDto, ProfileDto};

/// Discovery query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DiscoveryQuery {
    /// Gender to show; overrides the stored preference
    pub gender: Option<GenderPreferenceDto>,
    /// Minimum age (18–100)
    pub min_age: Option<i32>,
    /// Maximum age (18–100)
    pub max_age: Option<i32>,
    pub faculty: Option<String>,
    pub program: Option<String>,
    /// Page size (1–50). Default: 20
    pub limit: Option<u32>,
    /// Page number, starting at 0
    #[serde(default)]
    pub page: u32,
    /// Only candidates scoring above 50
    #[serde(default)]
    pub shared_interests_only: bool,
}

impl DiscoveryQuery {
    pub fn filters(&self) -> DiscoveryFilters {
        DiscoveryFilters {
            gender: self.gender.map(Into::into),
            min_age: self.min_age,
            max_age: self.max_age,
            faculty: non_blank(self.faculty.as_deref()),
            program: non_blank(self.program.as_deref()),
            limit: self.limit,
            shared_interests_only: self.shared_interests_only,
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Candidate with its compatibility score (0–100)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProfileDto {
    #[serde(flatten)]
    pub profile: ProfileDto,
    pub match_score: u32,
}

impl From<ScoredProfile> for ScoredProfileDto {
    fn from(s: ScoredProfile) -> Self {
        Self {
            profile: s.profile.into(),
            match_score: s.match_score,
        }
    }
}

/// One page of the discovery feed
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryPageDto {
    pub profiles: Vec<ScoredProfileDto>,
    /// Candidates available under the applied criteria
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl From<DiscoveryPage> for DiscoveryPageDto {
    fn from(p: DiscoveryPage) -> Self {
        Self {
            profiles: p.items.into_iter().map(ScoredProfileDto::from).collect(),
            total: p.total,
            page: p.page,
            limit: p.limit,
            total_pages: p.total_pages,
        }
    }
}

/// Discovery preferences to store. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_age_range"))]
pub struct SaveFiltersRequest {
    pub gender: Option<GenderPreferenceDto>,
    #[validate(range(min = 18, max = 100))]
    pub min_age: Option<i32>,
    #[validate(range(min = 18, max = 100))]
    pub max_age: Option<i32>,
}

fn validate_age_range(req: &SaveFiltersRequest) -> Result<(), ValidationError> {
    match (req.min_age, req.max_age) {
        (Some(min), Some(max)) if min > max => {
            let mut err = ValidationError::new("age_range");
            err.message = Some("minAge must not exceed maxAge".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl From<SaveFiltersRequest> for PreferencesUpdate {
    fn from(r: SaveFiltersRequest) -> Self {
        Self {
            interested_in_gender: r.gender.map(Into::into),
            min_age: r.min_age,
            max_age: r.max_age,
        }
    }
}

/// Stored discovery preferences
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDto {
    pub interested_in_gender: GenderPreferenceDto,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

impl From<DiscoveryPreferences> for PreferencesDto {
    fn from(p: DiscoveryPreferences) -> Self {
        Self {
            interested_in_gender: p.interested_in_gender.into(),
            min_age: p.min_age,
            max_age: p.max_age,
        }
    }
}
