use serde::{Deserialize, Serialize};

use crate::api_client::QueryPair;
use crate::models::job::{ExperienceLevel, Job, RemoteType};

/// Anything that can narrow the job list: serialised upstream as query
/// parameters, and applied locally to the demo catalogue.
pub trait JobSearch {
    /// Unset and blank fields are omitted entirely, never sent as empty strings.
    fn query_pairs(&self) -> Vec<QueryPair>;

    fn matches(&self, job: &Job) -> bool;
}

/// Search form of the listings page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobQuery {
    pub keyword: Option<String>,
    pub experience_level: Option<String>,
    pub remote_type: Option<String>,
    pub salary_min: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl JobQuery {
    /// Rejects a `salary_min` that is set but is not a finite number.
    pub fn validate(&self) -> Result<(), String> {
        match non_blank(&self.salary_min) {
            Some(raw) if parse_salary(raw).is_none() => {
                Err(format!("salary_min must be a number, got '{raw}'"))
            }
            _ => Ok(()),
        }
    }

    fn min_salary(&self) -> Option<f64> {
        non_blank(&self.salary_min).and_then(parse_salary)
    }
}

fn parse_salary(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl JobSearch for JobQuery {
    fn query_pairs(&self) -> Vec<QueryPair> {
        [
            ("keyword", &self.keyword),
            ("experience_level", &self.experience_level),
            ("remote_type", &self.remote_type),
            ("salary_min", &self.salary_min),
        ]
        .into_iter()
        .filter_map(|(key, value)| non_blank(value).map(|v| (key, v.to_string())))
        .collect()
    }

    fn matches(&self, job: &Job) -> bool {
        if let Some(keyword) = non_blank(&self.keyword) {
            if !keyword_matches(job, keyword) {
                return false;
            }
        }
        if let Some(level) = non_blank(&self.experience_level) {
            if job.experience_level != ExperienceLevel::from(level) {
                return false;
            }
        }
        if let Some(remote) = non_blank(&self.remote_type) {
            if job.remote_type != RemoteType::from(remote) {
                return false;
            }
        }
        match self.min_salary() {
            Some(min) => best_salary(job).is_some_and(|salary| salary >= min),
            None => true,
        }
    }
}

/// Case-insensitive match against title, description, company and required skills.
pub fn keyword_matches(job: &Job, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    job.title.to_lowercase().contains(&keyword)
        || job
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&keyword))
        || job.company.to_lowercase().contains(&keyword)
        || job.skills.iter().any(|s| s.to_lowercase().contains(&keyword))
}

/// Upper bound of the advertised range, or the lower bound if that is all there is.
pub fn best_salary(job: &Job) -> Option<f64> {
    job.salary_max.or(job.salary_min)
}
