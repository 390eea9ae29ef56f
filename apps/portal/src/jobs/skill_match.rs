//! Skill match: overlap between a job's required skills and a visitor's skills.
//!
//! Algorithm:
//! 1. A required skill is matched when, lower-cased, it contains or is
//!    contained in any lower-cased user skill.
//! 2. score = matched / max(required.len(), user.len()) × 100, rounded.
//! 3. An empty user list always scores 0.

use serde::Serialize;

/// Whether `skill` substring-matches any entry of `user_skills`, in either direction.
pub fn is_skill_matched(skill: &str, user_skills: &[String]) -> bool {
    let skill = skill.to_lowercase();
    user_skills.iter().any(|user_skill| {
        let user_skill = user_skill.to_lowercase();
        user_skill.contains(&skill) || skill.contains(&user_skill)
    })
}

/// Percentage (0 – 100) of overlap between `required` and `user_skills`.
pub fn skill_match(required: &[String], user_skills: &[String]) -> u32 {
    if user_skills.is_empty() {
        return 0;
    }

    let matched = required
        .iter()
        .filter(|skill| is_skill_matched(skill, user_skills))
        .count();
    let denominator = required.len().max(user_skills.len());

    ((matched as f64 / denominator as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong, // ≥ 75
    Good,   // 50 – 74
    Low,
}

impl MatchTier {
    pub fn for_score(score: u32) -> Self {
        if score >= 75 {
            MatchTier::Strong
        } else if score >= 50 {
            MatchTier::Good
        } else {
            MatchTier::Low
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            MatchTier::Strong => "text-green-600",
            MatchTier::Good => "text-blue-600",
            MatchTier::Low => "text-yellow-600",
        }
    }

    pub fn bar_gradient(self) -> &'static str {
        match self {
            MatchTier::Strong => "from-green-500 to-emerald-500",
            MatchTier::Good => "from-blue-500 to-cyan-500",
            MatchTier::Low => "from-yellow-500 to-orange-500",
        }
    }
}
