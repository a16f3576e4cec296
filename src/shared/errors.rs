use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    /// A user tried to swipe on themselves.
    #[error("Invalid argument: user {0} cannot swipe on themselves")]
    SelfInteraction(String),

    /// The ordered (swiper, swiped) pair already has a recorded decision.
    #[error("Already swiped: {swiper_id} has already swiped on {swiped_id}")]
    DuplicateInteraction {
        swiper_id: String,
        swiped_id: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn user_not_found(id: &str) -> Self {
        DomainError::NotFound {
            entity: "User",
            field: "id",
            value: id.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for InfraError {
    fn from(e: toml::de::Error) -> Self {
        InfraError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for InfraError {
    fn from(e: toml::ser::Error) -> Self {
        InfraError::Config(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_interaction_message_names_user() {
        let err = DomainError::SelfInteraction("u1".into());
        assert!(err.to_string().contains("u1"));
    }

    #[test]
    fn not_found_message_names_entity() {
        let err = DomainError::user_not_found("abc");
        assert_eq!(err.to_string(), "Not found: User with id=abc");
    }
}
