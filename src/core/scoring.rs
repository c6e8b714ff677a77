use std::collections::HashSet;
use crate::models::{User, ScoringWeights};

/// Calculate the similarity score of a candidate relative to the target
///
/// Scoring formula:
/// score = (
///     shared_interests * weights.interests +   # set intersection size
///     same_city * weights.city                 # 1 if cities are equal, else 0
/// )
///
/// Returns the score together with the shared interest tags, ordered as they
/// appear in the target's interest list.
pub fn calculate_match_score(
    target: &User,
    candidate: &User,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let shared = shared_interests(target, candidate);

    let city_score = if same_city(target, candidate) { 1.0 } else { 0.0 };

    let score = shared.len() as f64 * weights.interests + city_score * weights.city;

    (score, shared)
}

/// Interests present in both users, each tag counted once
pub fn shared_interests(target: &User, candidate: &User) -> Vec<String> {
    let candidate_set: HashSet<&str> = candidate.interests.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    target
        .interests
        .iter()
        .filter(|interest| candidate_set.contains(interest.as_str()))
        .filter(|interest| seen.insert(*interest))
        .cloned()
        .collect()
}

#[inline]
fn same_city(target: &User, candidate: &User) -> bool {
    target.city == candidate.city
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: i64, city: &str, interests: &[&str]) -> User {
        User {
            id,
            name: format!("User {}", id),
            age: 30,
            gender: "female".to_string(),
            email: format!("user{}@example.com", id),
            city: city.to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_overlap_count_is_default_score() {
        let a = create_test_user(1, "New York", &["reading", "traveling", "swimming"]);
        let b = create_test_user(2, "Los Angeles", &["reading", "yoga", "swimming"]);

        let (score, shared) = calculate_match_score(&b, &a, &ScoringWeights::default());

        assert_eq!(score, 2.0);
        assert_eq!(shared, vec!["reading", "swimming"]);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let a = create_test_user(1, "X", &["chess", "chess", "go"]);
        let b = create_test_user(2, "Y", &["chess", "chess"]);

        let (score, shared) = calculate_match_score(&a, &b, &ScoringWeights::default());

        assert_eq!(score, 1.0);
        assert_eq!(shared, vec!["chess"]);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let a = create_test_user(1, "X", &["Reading"]);
        let b = create_test_user(2, "X", &["reading"]);

        assert!(shared_interests(&a, &b).is_empty());
    }

    #[test]
    fn test_city_weight() {
        let a = create_test_user(1, "Berlin", &["music"]);
        let b = create_test_user(2, "Berlin", &["music"]);
        let weights = ScoringWeights { interests: 1.0, city: 0.5 };

        let (score, _) = calculate_match_score(&a, &b, &weights);

        assert_eq!(score, 1.5);
    }

    #[test]
    fn test_no_overlap() {
        let a = create_test_user(1, "X", &["a"]);
        let b = create_test_user(2, "X", &[]);

        let (score, shared) = calculate_match_score(&a, &b, &ScoringWeights::default());

        assert_eq!(score, 0.0);
        assert!(shared.is_empty());
    }
}
