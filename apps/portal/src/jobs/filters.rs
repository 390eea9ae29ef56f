use serde::{Deserialize, Serialize};

use crate::api_client::QueryPair;
use crate::jobs::query::{best_salary, keyword_matches, JobSearch};
use crate::jobs::skill_match::is_skill_matched;
use crate::models::job::{ExperienceLevel, Job, RemoteType};

pub const DEFAULT_SALARY_MIN: u64 = 0;
pub const DEFAULT_SALARY_MAX: u64 = 300_000;

pub const EXPERIENCE_LEVELS: &[&str] =
    &["Entry Level", "Mid Level", "Senior", "Lead", "C-Level"];
pub const REMOTE_TYPES: &[&str] = &["Fully Remote", "Remote First", "Hybrid"];
pub const TIMEZONES: &[&str] = &[
    "UTC-8 (PST)",
    "UTC-5 (EST)",
    "UTC+0 (GMT)",
    "UTC+1 (CET)",
    "UTC+5:30 (IST)",
];
pub const POPULAR_SKILLS: &[&str] = &[
    "React",
    "Python",
    "TypeScript",
    "Node.js",
    "AWS",
    "GraphQL",
    "Docker",
    "AI/ML",
];

/// Advanced filter panel state. The server holds none of it: clients send
/// the current filters and get the transformed filters back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub keyword: String,
    pub experience: Vec<String>,
    pub remote: Vec<String>,
    pub salary_min: u64,
    pub salary_max: u64,
    pub timezone: Vec<String>,
    pub skills: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            experience: Vec::new(),
            remote: Vec::new(),
            salary_min: DEFAULT_SALARY_MIN,
            salary_max: DEFAULT_SALARY_MAX,
            timezone: Vec::new(),
            skills: Vec::new(),
        }
    }
}

/// The multi-select groups of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Experience,
    Remote,
    Timezone,
    Skills,
}

/// Removes `value` if present, otherwise appends it. Applying it twice is a no-op.
pub fn toggle_value(values: &[String], value: &str) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        values.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(value.to_string());
        next
    }
}

impl Filters {
    pub fn toggle(&self, field: FilterField, value: &str) -> Filters {
        let mut next = self.clone();
        let list = match field {
            FilterField::Experience => &mut next.experience,
            FilterField::Remote => &mut next.remote,
            FilterField::Timezone => &mut next.timezone,
            FilterField::Skills => &mut next.skills,
        };
        *list = toggle_value(list, value);
        next
    }

    pub fn reset(&mut self) {
        *self = Filters::default();
    }

    #[cfg(test)]
    pub fn is_default(&self) -> bool {
        *self == Filters::default()
    }
}

impl JobSearch for Filters {
    fn query_pairs(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::new();

        let keyword = self.keyword.trim();
        if !keyword.is_empty() {
            pairs.push(("keyword", keyword.to_string()));
        }
        for level in &self.experience {
            let level = ExperienceLevel::from(level.as_str());
            pairs.push(("experience_level", level.as_str().to_string()));
        }
        for remote in &self.remote {
            let remote = RemoteType::from(remote.as_str());
            pairs.push(("remote_type", remote.as_str().to_string()));
        }
        if self.salary_min != DEFAULT_SALARY_MIN {
            pairs.push(("salary_min", self.salary_min.to_string()));
        }
        if self.salary_max != DEFAULT_SALARY_MAX {
            pairs.push(("salary_max", self.salary_max.to_string()));
        }
        pairs.extend(self.timezone.iter().map(|tz| ("timezone", tz.clone())));
        pairs.extend(self.skills.iter().map(|skill| ("skills", skill.clone())));

        pairs
    }

    // Listings carry no timezone, so timezone selections only narrow upstream.
    fn matches(&self, job: &Job) -> bool {
        let keyword = self.keyword.trim();
        if !keyword.is_empty() && !keyword_matches(job, keyword) {
            return false;
        }
        if !self.experience.is_empty()
            && !self
                .experience
                .iter()
                .any(|level| ExperienceLevel::from(level.as_str()) == job.experience_level)
        {
            return false;
        }
        if !self.remote.is_empty()
            && !self
                .remote
                .iter()
                .any(|remote| RemoteType::from(remote.as_str()) == job.remote_type)
        {
            return false;
        }
        if self.salary_min != DEFAULT_SALARY_MIN || self.salary_max != DEFAULT_SALARY_MAX {
            let in_range = best_salary(job).is_some_and(|salary| {
                salary >= self.salary_min as f64 && salary <= self.salary_max as f64
            });
            if !in_range {
                return false;
            }
        }
        if !self.skills.is_empty()
            && !job.skills.iter().any(|skill| is_skill_matched(skill, &self.skills))
        {
            return false;
        }
        true
    }
}

/// Option lists rendered by the filter panel.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub experience_levels: &'static [&'static str],
    pub remote_types: &'static [&'static str],
    pub timezones: &'static [&'static str],
    pub popular_skills: &'static [&'static str],
}

pub fn filter_options() -> FilterOptions {
    FilterOptions {
        experience_levels: EXPERIENCE_LEVELS,
        remote_types: REMOTE_TYPES,
        timezones: TIMEZONES,
        popular_skills: POPULAR_SKILLS,
    }
}
