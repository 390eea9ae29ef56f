//! Bundled demo data, substituted wholesale when the upstream API cannot be reached.

use std::collections::BTreeMap;

use crate::models::job::{ExperienceLevel, Job, RemoteType};
use crate::models::stats::{AdminStats, CompanyCount, LevelCount, SkillDemand, StatsSnapshot};

const MOCK_SKILLS: &[(&str, u64, f64)] = &[
    ("Python", 892, 15000.0),
    ("Machine Learning", 756, 22000.0),
    ("Data Engineering", 645, 18000.0),
    ("Cloud (AWS/GCP)", 723, 19000.0),
    ("SQL", 834, 12000.0),
];

const MOCK_COMPANIES: &[(&str, u64)] = &[
    ("Google", 145),
    ("Amazon", 132),
    ("Microsoft", 128),
    ("Apple", 115),
    ("Meta", 102),
];

const MOCK_SALARY_BY_EXPERIENCE: &[(&str, f64)] =
    &[("Entry", 85000.0), ("Mid", 125000.0), ("Senior", 165000.0)];

const MOCK_EXPERIENCE_DISTRIBUTION: &[(&str, u64)] = &[
    ("entry", 512),
    ("mid", 1281),
    ("senior", 854),
    ("lead", 200),
];

fn mock_companies() -> Vec<CompanyCount> {
    MOCK_COMPANIES
        .iter()
        .map(|&(name, count)| CompanyCount {
            name: name.to_string(),
            count: Some(count),
        })
        .collect()
}

/// The dashboard snapshot shown in demo mode.
pub fn mock_stats() -> StatsSnapshot {
    StatsSnapshot {
        total_jobs: 2847,
        average_salary: 145000.0,
        remote_percentage: 78.0,
        growth_rate: 12.5,
        top_skills: MOCK_SKILLS
            .iter()
            .map(|&(skill, count, salary_impact)| SkillDemand {
                skill: skill.to_string(),
                count: Some(count),
                salary_impact: Some(salary_impact),
            })
            .collect(),
        top_companies: mock_companies(),
        salary_by_experience: MOCK_SALARY_BY_EXPERIENCE
            .iter()
            .map(|&(level, salary)| (level.to_string(), salary))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// The analytics statistics shown in demo mode.
pub fn mock_admin_stats() -> AdminStats {
    AdminStats {
        total_jobs: 2847,
        avg_salary: 145000.0,
        top_companies: mock_companies(),
        experience_distribution: MOCK_EXPERIENCE_DISTRIBUTION
            .iter()
            .map(|&(level, count)| LevelCount {
                level: level.to_string(),
                count,
            })
            .collect(),
        remote_percentage: 78.0,
    }
}

struct MockJob {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: Option<(f64, f64)>,
    remote_type: RemoteType,
    experience_level: ExperienceLevel,
    skills: &'static [&'static str],
    description: &'static str,
}

const MOCK_JOBS: &[MockJob] = &[
    MockJob {
        id: "demo-1",
        title: "Senior Data Engineer",
        company: "Google",
        location: "Remote, USA",
        salary: Some((150000.0, 190000.0)),
        remote_type: RemoteType::FullyRemote,
        experience_level: ExperienceLevel::Senior,
        skills: &["Python", "Spark", "Airflow", "SQL", "GCP", "dbt"],
        description: "Own batch and streaming pipelines feeding the ads analytics lakehouse.",
    },
    MockJob {
        id: "demo-2",
        title: "Machine Learning Engineer",
        company: "Amazon",
        location: "Seattle, WA",
        salary: Some((140000.0, 185000.0)),
        remote_type: RemoteType::Hybrid,
        experience_level: ExperienceLevel::Mid,
        skills: &["Python", "Machine Learning", "AWS", "SageMaker"],
        description: "Ship ranking models from notebook to production inference.",
    },
    MockJob {
        id: "demo-3",
        title: "Analytics Engineer",
        company: "Microsoft",
        location: "Remote, USA",
        salary: Some((95000.0, 125000.0)),
        remote_type: RemoteType::FullyRemote,
        experience_level: ExperienceLevel::Entry,
        skills: &["SQL", "dbt", "Power BI"],
        description: "Model product telemetry into trusted reporting marts.",
    },
    MockJob {
        id: "demo-4",
        title: "Staff Platform Engineer",
        company: "Meta",
        location: "Menlo Park, CA",
        salary: Some((210000.0, 280000.0)),
        remote_type: RemoteType::OnSite,
        experience_level: ExperienceLevel::Lead,
        skills: &["Kubernetes", "Go", "Kafka", "Terraform"],
        description: "Lead the data platform team running multi-region Kafka and Flink.",
    },
    MockJob {
        id: "demo-5",
        title: "Data Engineer",
        company: "Apple",
        location: "Remote, USA",
        salary: None,
        remote_type: RemoteType::RemoteFirst,
        experience_level: ExperienceLevel::Mid,
        skills: &["Scala", "Spark", "Delta Lake"],
        description: "Build the feature store backing on-device personalization.",
    },
];

/// A small job catalogue for the listings view in demo mode.
pub fn mock_jobs() -> Vec<Job> {
    MOCK_JOBS
        .iter()
        .map(|job| Job {
            id: job.id.to_string(),
            title: job.title.to_string(),
            company: job.company.to_string(),
            location: job.location.to_string(),
            salary_min: job.salary.map(|(min, _)| min),
            salary_max: job.salary.map(|(_, max)| max),
            remote_type: job.remote_type,
            experience_level: job.experience_level,
            job_url: None,
            description: Some(job.description.to_string()),
            skills: job.skills.iter().map(|s| s.to_string()).collect(),
            match_score: None,
            growth_potential: None,
        })
        .collect()
}
