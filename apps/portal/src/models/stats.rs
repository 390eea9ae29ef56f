use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate job-market summary shown on the dashboard.
///
/// Accepts both the dashboard shape (`average_salary`, object entries) and the
/// backend `DashboardStats` shape (`avg_salary`, plain-string entries). Every
/// field is required: a payload missing any of them is a parse failure, so a
/// snapshot is always either wholly live or wholly mock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_jobs: u64,
    #[serde(alias = "avg_salary")]
    pub average_salary: f64,
    #[serde(alias = "remote_job_percentage")]
    pub remote_percentage: f64,
    #[serde(alias = "job_growth_rate")]
    pub growth_rate: f64,
    pub top_skills: Vec<SkillDemand>,
    pub top_companies: Vec<CompanyCount>,
    #[serde(alias = "avg_salary_by_experience")]
    pub salary_by_experience: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillDemandWire")]
pub struct SkillDemand {
    pub skill: String,
    pub count: Option<u64>,
    pub salary_impact: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillDemandWire {
    Name(String),
    Detailed {
        skill: String,
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        salary_impact: Option<f64>,
    },
}

impl From<SkillDemandWire> for SkillDemand {
    fn from(wire: SkillDemandWire) -> Self {
        match wire {
            SkillDemandWire::Name(skill) => SkillDemand {
                skill,
                count: None,
                salary_impact: None,
            },
            SkillDemandWire::Detailed {
                skill,
                count,
                salary_impact,
            } => SkillDemand {
                skill,
                count,
                salary_impact,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CompanyCountWire")]
pub struct CompanyCount {
    pub name: String,
    pub count: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CompanyCountWire {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        count: Option<u64>,
    },
}

impl From<CompanyCountWire> for CompanyCount {
    fn from(wire: CompanyCountWire) -> Self {
        match wire {
            CompanyCountWire::Name(name) => CompanyCount { name, count: None },
            CompanyCountWire::Detailed { name, count } => CompanyCount { name, count },
        }
    }
}

/// Detailed statistics from `GET /api/admin/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_jobs: u64,
    #[serde(alias = "average_salary")]
    pub avg_salary: f64,
    pub top_companies: Vec<CompanyCount>,
    pub experience_distribution: Vec<LevelCount>,
    pub remote_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCount {
    pub level: String,
    pub count: u64,
}
