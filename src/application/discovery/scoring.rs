//! Compatibility scoring between a requester and a candidate.
//!
//! Scores are whole numbers in `0..=100`.

use std::collections::HashSet;

use crate::domain::UserProfile;

/// Score given when either side has no interests to compare.
pub const BASE_INTEREST_SCORE: u32 = 50;

pub const MAX_SCORE: u32 = 100;

const SAME_FACULTY_BONUS: u32 = 10;
const SAME_PROGRAM_BONUS: u32 = 5;

/// Interest similarity blended as 40 + 60% of the Jaccard index (in percent).
pub fn interest_score<'a>(
    mine: impl IntoIterator<Item = &'a str>,
    theirs: impl IntoIterator<Item = &'a str>,
) -> u32 {
    let mine: HashSet<&str> = mine.into_iter().collect();
    let theirs: HashSet<&str> = theirs.into_iter().collect();

    if mine.is_empty() || theirs.is_empty() {
        return BASE_INTEREST_SCORE;
    }

    let shared = mine.intersection(&theirs).count();
    let union = mine.union(&theirs).count();
    let similarity = shared as f64 / union as f64 * 100.0;

    ((40.0 + similarity * 0.6).round() as u32).min(MAX_SCORE)
}

/// +10 for the same faculty, +5 more when the program matches as well.
pub fn academic_bonus(
    my_faculty: Option<&str>,
    their_faculty: Option<&str>,
    my_program: Option<&str>,
    their_program: Option<&str>,
) -> u32 {
    match (non_empty(my_faculty), non_empty(their_faculty)) {
        (Some(a), Some(b)) if a == b => {}
        _ => return 0,
    }

    match (non_empty(my_program), non_empty(their_program)) {
        (Some(a), Some(b)) if a == b => SAME_FACULTY_BONUS + SAME_PROGRAM_BONUS,
        _ => SAME_FACULTY_BONUS,
    }
}

/// Combined score of `candidate` from `requester`'s point of view.
pub fn match_score(requester: &UserProfile, candidate: &UserProfile) -> u32 {
    let interests = interest_score(requester.interest_ids(), candidate.interest_ids());
    let bonus = academic_bonus(
        requester.faculty.as_deref(),
        candidate.faculty.as_deref(),
        requester.program.as_deref(),
        candidate.program.as_deref(),
    );
    (interests + bonus).min(MAX_SCORE)
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Interest};

    fn interest(id: &str) -> Interest {
        Interest {
            id: id.to_string(),
            name: id.to_uppercase(),
        }
    }

    fn profile(interests: &[&str], faculty: Option<&str>, program: Option<&str>) -> UserProfile {
        UserProfile::new("someone", 21, Gender::Female)
            .with_academics(faculty, program)
            .with_interests(interests.iter().map(|i| interest(i)).collect())
    }

    #[test]
    fn one_shared_of_three_scores_sixty() {
        assert_eq!(interest_score(["a", "b"], ["b", "c"]), 60);
    }

    #[test]
    fn identical_interests_score_hundred() {
        assert_eq!(interest_score(["a", "b"], ["b", "a"]), 100);
    }

    #[test]
    fn disjoint_interests_score_forty() {
        assert_eq!(interest_score(["a"], ["b"]), 40);
    }

    #[test]
    fn empty_side_gets_base_score() {
        assert_eq!(interest_score(Vec::<&str>::new(), ["a", "b"]), BASE_INTEREST_SCORE);
        assert_eq!(interest_score(["a"], Vec::<&str>::new()), BASE_INTEREST_SCORE);
    }

    #[test]
    fn duplicate_ids_count_once() {
        assert_eq!(interest_score(["a", "a", "b"], ["b", "c"]), 60);
    }

    #[test]
    fn program_bonus_requires_same_faculty() {
        assert_eq!(
            academic_bonus(Some("FT"), Some("FT"), Some("IF"), Some("IF")),
            15
        );
        assert_eq!(academic_bonus(Some("FT"), Some("FT"), Some("IF"), Some("SI")), 10);
        assert_eq!(academic_bonus(Some("FT"), Some("FK"), Some("IF"), Some("IF")), 0);
        assert_eq!(academic_bonus(None, None, Some("IF"), Some("IF")), 0);
        assert_eq!(academic_bonus(Some(""), Some(""), None, None), 0);
    }

    #[test]
    fn faculty_bonus_adds_to_interest_score() {
        let me = profile(&["a", "b"], Some("FT"), Some("IF"));
        assert_eq!(match_score(&me, &profile(&["b", "c"], Some("FT"), None)), 70);
        assert_eq!(
            match_score(&me, &profile(&["b", "c"], Some("FT"), Some("IF"))),
            75
        );
    }

    #[test]
    fn score_is_capped_at_hundred() {
        let me = profile(&["a", "b"], Some("FT"), Some("IF"));
        let twin = profile(&["a", "b"], Some("FT"), Some("IF"));
        assert_eq!(match_score(&me, &twin), MAX_SCORE);
    }

    #[test]
    fn no_interests_start_from_fifty() {
        let me = profile(&[], Some("FT"), None);
        assert_eq!(match_score(&me, &profile(&["a"], None, None)), 50);
        assert_eq!(match_score(&me, &profile(&["a"], Some("FT"), None)), 60);
    }
}
