//! SeaORM implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};

use super::db_err;
use super::interest_repository::model_to_domain as interest_to_domain;
use crate::domain::{
    CandidateFilter, DiscoveryPreferences, DomainError, DomainResult, Gender, GenderPreference,
    Interest, PreferencesUpdate, UserProfile, UserRepository,
};
use crate::infrastructure::database::entities::{interest, user, user_interest};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Interests per user ID, each list ordered by name
    async fn interests_for(&self, user_ids: &[String]) -> DomainResult<HashMap<String, Vec<Interest>>> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = user_interest::Entity::find()
            .filter(user_interest::Column::UserId.is_in(user_ids.iter().cloned()))
            .find_also_related(interest::Entity)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut by_user: HashMap<String, Vec<Interest>> = HashMap::new();
        for (link, interest) in rows {
            if let Some(interest) = interest {
                by_user
                    .entry(link.user_id)
                    .or_default()
                    .push(interest_to_domain(interest));
            }
        }
        for list in by_user.values_mut() {
            list.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Ok(by_user)
    }

    async fn with_interests(&self, models: Vec<user::Model>) -> DomainResult<Vec<UserProfile>> {
        let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut interests = self.interests_for(&ids).await?;
        Ok(models
            .into_iter()
            .map(|m| {
                let list = interests.remove(&m.id).unwrap_or_default();
                model_to_domain(m, list)
            })
            .collect())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn gender_to_db(g: Gender) -> user::Gender {
    match g {
        Gender::Male => user::Gender::Male,
        Gender::Female => user::Gender::Female,
    }
}

fn gender_from_db(g: user::Gender) -> Gender {
    match g {
        user::Gender::Male => Gender::Male,
        user::Gender::Female => Gender::Female,
    }
}

fn preference_to_db(p: GenderPreference) -> user::GenderPreference {
    match p {
        GenderPreference::Male => user::GenderPreference::Male,
        GenderPreference::Female => user::GenderPreference::Female,
        GenderPreference::All => user::GenderPreference::All,
    }
}

fn preference_from_db(p: user::GenderPreference) -> GenderPreference {
    match p {
        user::GenderPreference::Male => GenderPreference::Male,
        user::GenderPreference::Female => GenderPreference::Female,
        user::GenderPreference::All => GenderPreference::All,
    }
}

fn preferences_of(m: &user::Model) -> DiscoveryPreferences {
    DiscoveryPreferences {
        interested_in_gender: preference_from_db(m.interested_in_gender),
        min_age: m.min_age_preference,
        max_age: m.max_age_preference,
    }
}

fn model_to_domain(m: user::Model, interests: Vec<Interest>) -> UserProfile {
    let photos = serde_json::from_str(&m.photos).unwrap_or_else(|e| {
        warn!("Ignoring malformed photos for user {}: {}", m.id, e);
        Vec::new()
    });
    let preferences = preferences_of(&m);

    UserProfile {
        id: m.id,
        fullname: m.fullname,
        age: m.age,
        gender: gender_from_db(m.gender),
        faculty: m.faculty,
        program: m.program,
        bio: m.bio,
        profile_picture: m.profile_picture,
        photos,
        interests,
        is_active: m.is_active,
        preferences,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

/// Active users matching `filter`
fn candidates_query(filter: &CandidateFilter) -> Select<user::Entity> {
    let mut query = user::Entity::find().filter(user::Column::IsActive.eq(true));

    if !filter.exclude_ids.is_empty() {
        query = query.filter(user::Column::Id.is_not_in(filter.exclude_ids.iter().cloned()));
    }
    if let Some(gender) = filter.gender {
        query = query.filter(user::Column::Gender.eq(gender_to_db(gender)));
    }
    if let Some(min) = filter.min_age {
        query = query.filter(user::Column::Age.gte(min));
    }
    if let Some(max) = filter.max_age {
        query = query.filter(user::Column::Age.lte(max));
    }
    if let Some(ref faculty) = filter.faculty {
        query = query.filter(user::Column::Faculty.eq(faculty.as_str()));
    }
    if let Some(ref program) = filter.program {
        query = query.filter(user::Column::Program.eq(program.as_str()));
    }
    query
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, profile: UserProfile) -> DomainResult<()> {
        debug!("Saving user profile: {}", profile.id);

        let photos = serde_json::to_string(&profile.photos)
            .map_err(|e| DomainError::Validation(format!("Invalid photos: {}", e)))?;
        let interest_ids: Vec<String> = profile.interest_ids().map(str::to_string).collect();

        let txn = self.db.begin().await.map_err(db_err)?;

        let model = user::ActiveModel {
            id: Set(profile.id.clone()),
            fullname: Set(profile.fullname),
            age: Set(profile.age),
            gender: Set(gender_to_db(profile.gender)),
            faculty: Set(profile.faculty),
            program: Set(profile.program),
            bio: Set(profile.bio),
            profile_picture: Set(profile.profile_picture),
            photos: Set(photos),
            is_active: Set(profile.is_active),
            interested_in_gender: Set(preference_to_db(profile.preferences.interested_in_gender)),
            min_age_preference: Set(profile.preferences.min_age),
            max_age_preference: Set(profile.preferences.max_age),
            created_at: Set(profile.created_at),
            updated_at: Set(profile.updated_at),
        };
        model.insert(&txn).await.map_err(db_err)?;

        for interest_id in interest_ids {
            user_interest::ActiveModel {
                user_id: Set(profile.id.clone()),
                interest_id: Set(interest_id),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        let model = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match model {
            Some(m) => Ok(self.with_interests(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_ids(&self, ids: &[String]) -> DomainResult<Vec<UserProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = user::Entity::find()
            .filter(user::Column::Id.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        self.with_interests(models).await
    }

    async fn exists(&self, id: &str) -> DomainResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Id.eq(id))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn find_candidates(
        &self,
        filter: &CandidateFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<UserProfile>> {
        let models = candidates_query(filter)
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        self.with_interests(models).await
    }

    async fn count_candidates(&self, filter: &CandidateFilter) -> DomainResult<u64> {
        candidates_query(filter)
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn update_preferences(
        &self,
        id: &str,
        update: &PreferencesUpdate,
    ) -> DomainResult<Option<DiscoveryPreferences>> {
        let Some(model) = user::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let mut prefs = preferences_of(&model);
        update.apply(&mut prefs);
        debug!("Updating discovery preferences for user {}: {:?}", id, prefs);

        let mut active: user::ActiveModel = model.into();
        active.interested_in_gender = Set(preference_to_db(prefs.interested_in_gender));
        active.min_age_preference = Set(prefs.min_age);
        active.max_age_preference = Set(prefs.max_age);
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;

        Ok(Some(prefs))
    }
}
