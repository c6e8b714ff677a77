use crate::models::{User, ScoredMatch, MatchPolicy};
use crate::core::{
    filters::{is_candidate, meets_threshold},
    scoring::calculate_match_score,
};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

impl MatchResult {
    /// Drop the scores and keep the ranked users
    pub fn into_users(self) -> Vec<User> {
        self.matches.into_iter().map(|m| m.user).collect()
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Exclude the target itself
/// 2. Score by shared interests (and city, if weighted)
/// 3. Drop candidates below the overlap threshold
/// 4. Rank by score, ties by ascending id
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: MatchPolicy::default(),
        }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Rank `candidates` by similarity to `target`
    ///
    /// `candidates` may contain the target; it is skipped.
    pub fn find_matches(&self, target: &User, candidates: Vec<User>) -> MatchResult {
        let mut total_candidates = 0;

        let mut scored_matches: Vec<ScoredMatch> = candidates
            .into_iter()
            .filter(|candidate| is_candidate(target, candidate))
            .inspect(|_| total_candidates += 1)
            .filter_map(|candidate| {
                let (score, shared_interests) =
                    calculate_match_score(target, &candidate, &self.policy.weights);

                if meets_threshold(shared_interests.len(), &self.policy) {
                    Some(ScoredMatch {
                        user: candidate,
                        match_score: score,
                        shared_interests,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Sort by score (descending) and then by id (ascending)
        scored_matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user.id.cmp(&b.user.id))
        });

        MatchResult {
            matches: scored_matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
