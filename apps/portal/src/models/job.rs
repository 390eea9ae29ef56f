use serde::{Deserialize, Serialize};

/// Seniority of a listing. Unknown wire values land in `Unspecified`
/// instead of silently styling as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
    Unspecified,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Executive => "c-level",
            ExperienceLevel::Unspecified => "unspecified",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
            ExperienceLevel::Executive => "C-Level",
            ExperienceLevel::Unspecified => "Unspecified",
        }
    }
}

impl From<&str> for ExperienceLevel {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "entry" | "entry level" | "entry-level" | "junior" => ExperienceLevel::Entry,
            "mid" | "mid level" | "mid-level" | "intermediate" => ExperienceLevel::Mid,
            "senior" | "senior level" => ExperienceLevel::Senior,
            "lead" | "principal" | "staff" => ExperienceLevel::Lead,
            "c-level" | "executive" => ExperienceLevel::Executive,
            _ => ExperienceLevel::Unspecified,
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(raw: String) -> Self {
        ExperienceLevel::from(raw.as_str())
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Work arrangement of a listing. Accepts both the hyphenated and the
/// underscored spellings the upstream has used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RemoteType {
    FullyRemote,
    RemoteFirst,
    Hybrid,
    OnSite,
    Unspecified,
}

impl RemoteType {
    pub fn as_str(self) -> &'static str {
        match self {
            RemoteType::FullyRemote => "fully-remote",
            RemoteType::RemoteFirst => "remote-first",
            RemoteType::Hybrid => "hybrid",
            RemoteType::OnSite => "on-site",
            RemoteType::Unspecified => "unspecified",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RemoteType::FullyRemote => "Fully Remote",
            RemoteType::RemoteFirst => "Remote First",
            RemoteType::Hybrid => "Hybrid",
            RemoteType::OnSite => "On-Site",
            RemoteType::Unspecified => "Unspecified",
        }
    }
}

impl From<&str> for RemoteType {
    fn from(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "fully-remote" | "remote" => RemoteType::FullyRemote,
            "remote-first" => RemoteType::RemoteFirst,
            "hybrid" => RemoteType::Hybrid,
            "on-site" | "onsite" => RemoteType::OnSite,
            _ => RemoteType::Unspecified,
        }
    }
}

impl From<String> for RemoteType {
    fn from(raw: String) -> Self {
        RemoteType::from(raw.as_str())
    }
}

impl From<RemoteType> for String {
    fn from(remote: RemoteType) -> Self {
        remote.as_str().to_string()
    }
}

/// A job listing as returned by `GET /api/jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub remote_type: RemoteType,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub job_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "skills_required")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub growth_potential: Option<f64>,
}

/// Body of `POST /api/jobs/recommendation`.
#[derive(Debug, Serialize)]
pub struct RecommendationRequest<'a> {
    pub job_id: &'a str,
    /// Never populated by this service; always sent as `null`.
    pub user_preferences: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_id: String,
    /// 0.0 – 1.0
    pub match_score: f64,
    pub salary_score: f64,
    pub growth_potential: f64,
    pub recommendation: String,
    pub confidence: f64,
}
