use serde::Serialize;

use crate::jobs::skill_match::{is_skill_matched, skill_match, MatchTier};
use crate::models::job::Job;
use crate::presentation::format::{format_salary_compact, format_salary_range};
use crate::presentation::theme::{experience_badge, remote_badge, Badge};

/// Skills shown on an enhanced card before collapsing into "+N more".
pub const VISIBLE_SKILLS: usize = 5;

/// Listing card: salary range and badges only.
#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub experience: Badge,
    pub remote: Badge,
    pub job_url: Option<String>,
}

pub fn basic_card(job: &Job) -> JobCard {
    JobCard {
        id: job.id.clone(),
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        salary: format_salary_range(job.salary_min, job.salary_max),
        experience: experience_badge(job.experience_level),
        remote: remote_badge(job.remote_type),
        job_url: job.job_url.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillChip {
    pub name: String,
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillMatchBar {
    pub percent: u32,
    pub tier: MatchTier,
    pub text_class: &'static str,
    pub gradient: &'static str,
}

impl SkillMatchBar {
    fn new(percent: u32) -> Self {
        let tier = MatchTier::for_score(percent);
        Self {
            percent,
            tier,
            text_class: tier.text_class(),
            gradient: tier.bar_gradient(),
        }
    }
}

/// Card with a skill-match bar computed against the visitor's skills.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancedJobCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub experience: Badge,
    pub remote: Badge,
    pub description: Option<String>,
    pub skill_match: SkillMatchBar,
    pub skills: Vec<SkillChip>,
    /// "+N more" when the job lists more than `VISIBLE_SKILLS` skills.
    pub more_skills: Option<String>,
}

fn compact_range(job: &Job) -> String {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => {
            format!("{} - {}", format_salary_compact(min), format_salary_compact(max))
        }
        _ => "Competitive".to_string(),
    }
}

pub fn enhanced_card(job: &Job, user_skills: &[String]) -> EnhancedJobCard {
    let skills = job
        .skills
        .iter()
        .take(VISIBLE_SKILLS)
        .map(|name| SkillChip {
            name: name.clone(),
            matched: is_skill_matched(name, user_skills),
        })
        .collect();
    let hidden = job.skills.len().saturating_sub(VISIBLE_SKILLS);

    EnhancedJobCard {
        id: job.id.clone(),
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        salary: compact_range(job),
        experience: experience_badge(job.experience_level),
        remote: remote_badge(job.remote_type),
        description: job.description.clone(),
        skill_match: SkillMatchBar::new(skill_match(&job.skills, user_skills)),
        skills,
        more_skills: (hidden > 0).then(|| format!("+{hidden} more")),
    }
}

/// Parses `?skills=a,b` into a trimmed list without blanks.
pub fn parse_skill_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::mock::mock_jobs;
    use crate::models::job::ExperienceLevel;

    fn job(id: &str) -> Job {
        mock_jobs().into_iter().find(|j| j.id == id).unwrap()
    }

    #[test]
    fn test_basic_card_salary_range() {
        let mut listing = job("demo-3");
        listing.salary_min = Some(60000.0);
        listing.salary_max = Some(80000.0);
        assert_eq!(basic_card(&listing).salary, "$60K - $80K");
    }

    #[test]
    fn test_basic_card_competitive_when_bound_missing() {
        let mut listing = job("demo-1");
        listing.salary_max = None;
        assert_eq!(basic_card(&listing).salary, "Competitive");
        assert_eq!(basic_card(&job("demo-5")).salary, "Competitive");
    }

    #[test]
    fn test_unknown_experience_gets_neutral_badge() {
        let mut listing = job("demo-1");
        listing.experience_level = ExperienceLevel::Unspecified;
        let card = basic_card(&listing);
        assert_eq!(card.experience.label, "Unspecified");
        assert!(card.experience.class.contains("gray"));
    }

    #[test]
    fn test_enhanced_card_truncates_skills() {
        // demo-1 lists six skills
        let user = vec!["python".to_string(), "sql".to_string()];
        let card = enhanced_card(&job("demo-1"), &user);

        assert_eq!(card.skills.len(), VISIBLE_SKILLS);
        assert_eq!(card.more_skills.as_deref(), Some("+1 more"));
        assert!(card.skills[0].matched);
        assert!(!card.skills[1].matched);
        assert_eq!(card.salary, "$150K - $190K");
    }

    #[test]
    fn test_enhanced_card_skill_match_tier() {
        let user = vec!["SQL".to_string(), "dbt".to_string(), "Power BI".to_string()];
        let card = enhanced_card(&job("demo-3"), &user);
        assert_eq!(card.skill_match.percent, 100);
        assert_eq!(card.skill_match.tier, MatchTier::Strong);
        assert_eq!(card.more_skills, None);
    }

    #[test]
    fn test_enhanced_card_without_user_skills() {
        let card = enhanced_card(&job("demo-4"), &[]);
        assert_eq!(card.skill_match.percent, 0);
        assert_eq!(card.skill_match.tier, MatchTier::Low);
        assert!(card.skills.iter().all(|chip| !chip.matched));
    }

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(parse_skill_list(Some(" rust, ,Go ")), vec!["rust", "Go"]);
        assert!(parse_skill_list(None).is_empty());
        assert!(parse_skill_list(Some("")).is_empty());
    }
}
