use crate::models::{User, MatchPolicy};

/// Check whether a stored user is a candidate for the target at all
///
/// The target never matches itself.
#[inline]
pub fn is_candidate(target: &User, candidate: &User) -> bool {
    candidate.id != target.id
}

/// Check whether a scored candidate clears the policy's inclusion threshold
#[inline]
pub fn meets_threshold(shared_count: usize, policy: &MatchPolicy) -> bool {
    shared_count >= policy.min_shared_interests
}
