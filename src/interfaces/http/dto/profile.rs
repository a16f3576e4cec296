//! Public profile and catalogue DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Gender, GenderPreference, Interest, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderDto {
    Male,
    Female,
}

impl From<Gender> for GenderDto {
    fn from(g: Gender) -> Self {
        match g {
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
        }
    }
}

/// Gender filter or preference; `ALL` means any gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderPreferenceDto {
    Male,
    Female,
    All,
}

impl From<GenderPreferenceDto> for GenderPreference {
    fn from(g: GenderPreferenceDto) -> Self {
        match g {
            GenderPreferenceDto::Male => Self::Male,
            GenderPreferenceDto::Female => Self::Female,
            GenderPreferenceDto::All => Self::All,
        }
    }
}

impl From<GenderPreference> for GenderPreferenceDto {
    fn from(g: GenderPreference) -> Self {
        match g {
            GenderPreference::Male => Self::Male,
            GenderPreference::Female => Self::Female,
            GenderPreference::All => Self::All,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterestDto {
    pub id: String,
    pub name: String,
}

impl From<Interest> for InterestDto {
    fn from(i: Interest) -> Self {
        Self {
            id: i.id,
            name: i.name,
        }
    }
}

/// What another user may see of a profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub fullname: String,
    pub age: i32,
    pub gender: GenderDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub photos: Vec<String>,
    pub interests: Vec<InterestDto>,
}

impl From<UserProfile> for ProfileDto {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id,
            fullname: p.fullname,
            age: p.age,
            gender: p.gender.into(),
            faculty: p.faculty,
            program: p.program,
            bio: p.bio,
            profile_picture: p.profile_picture,
            photos: p.photos,
            interests: p.interests.into_iter().map(InterestDto::from).collect(),
        }
    }
}
