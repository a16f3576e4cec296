//! Match domain entity

use chrono::{DateTime, Utc};

/// Unordered user pair stored in a fixed total order (`user_a_id < user_b_id`).
///
/// `(A, B)` and `(B, A)` map to the same value, which is what the
/// uniqueness constraint on stored matches relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPair {
    user_a_id: String,
    user_b_id: String,
}

impl CanonicalPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let (first, second) = (first.into(), second.into());
        if first <= second {
            Self {
                user_a_id: first,
                user_b_id: second,
            }
        } else {
            Self {
                user_a_id: second,
                user_b_id: first,
            }
        }
    }

    pub fn user_a_id(&self) -> &str {
        &self.user_a_id
    }

    pub fn user_b_id(&self) -> &str {
        &self.user_b_id
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.user_a_id == user_id || self.user_b_id == user_id
    }

    /// The other member of the pair, if `user_id` is a member.
    pub fn counterpart(&self, user_id: &str) -> Option<&str> {
        if self.user_a_id == user_id {
            Some(&self.user_b_id)
        } else if self.user_b_id == user_id {
            Some(&self.user_a_id)
        } else {
            None
        }
    }
}

/// Mutual like between two users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub pair: CanonicalPair,
    pub created_at: DateTime<Utc>,
}

impl Match {
    pub fn new(pair: CanonicalPair) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            pair,
            created_at: Utc::now(),
        }
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.pair.contains(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_order_does_not_matter() {
        let ab = CanonicalPair::new("alice", "bob");
        let ba = CanonicalPair::new("bob", "alice");
        assert_eq!(ab, ba);
        assert_eq!(ab.user_a_id(), "alice");
        assert_eq!(ab.user_b_id(), "bob");
    }

    #[test]
    fn pair_uses_string_order_not_numeric() {
        let pair = CanonicalPair::new("9", "10");
        assert_eq!(pair.user_a_id(), "10");
        assert_eq!(pair.user_b_id(), "9");
    }

    #[test]
    fn counterpart_of_member() {
        let pair = CanonicalPair::new("u2", "u1");
        assert_eq!(pair.counterpart("u1"), Some("u2"));
        assert_eq!(pair.counterpart("u2"), Some("u1"));
        assert_eq!(pair.counterpart("u3"), None);
    }

    #[test]
    fn match_involves_both_members() {
        let m = Match::new(CanonicalPair::new("x", "y"));
        assert!(m.involves("x"));
        assert!(m.involves("y"));
        assert!(!m.involves("z"));
    }
}
