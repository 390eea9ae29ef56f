//! Portfolio copy. Every record here is a compile-time constant; nothing is
//! created or mutated at runtime.

use serde::{Serialize, Serializer};

use crate::models::job::ExperienceLevel;

// ────────────────────────────────────────────────────────────────────────────
// Navbar / hero / contact
// ────────────────────────────────────────────────────────────────────────────

pub const BRAND: &str = "SV";
pub const OWNER_NAME: &str = "Sophia Valhari";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Testimonials", href: "#testimonials" },
    NavItem { label: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        network: "LinkedIn",
        href: "https://linkedin.com/in/sophiavalhari",
    },
    SocialLink {
        network: "GitHub",
        href: "https://github.com/sophiavalhari",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub highlights: &'static [&'static str],
    pub description: &'static str,
    pub status: &'static str,
    pub resume_href: &'static str,
    pub resume_filename: &'static str,
    pub social: &'static [SocialLink],
}

pub const HERO: Hero = Hero {
    badge: "Welcome to my digital space",
    name: OWNER_NAME,
    title: "Senior Data Engineer & Cloud Architect",
    tagline: "Transforming data into insights. Building scalable cloud-native solutions.",
    highlights: &["Code", "AI/ML", "Performance"],
    description: "I specialize in designing and implementing cloud-native data platforms, \
                  distributed systems architecture, and real-time analytics solutions that \
                  scale to millions of events per second.",
    status: "Open to remote opportunities globally",
    resume_href: "/resume",
    resume_filename: "Sophia-Valhari-Resume.pdf",
    social: SOCIAL_LINKS,
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub social: &'static [SocialLink],
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "sophia.walhaei@gmail.com",
    location: "Remote (Worldwide)",
    social: SOCIAL_LINKS,
};

// ────────────────────────────────────────────────────────────────────────────
// About
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct About {
    pub summary: &'static str,
    pub paragraphs: &'static [&'static str],
    pub experiences: &'static [Experience],
}

pub const ABOUT: About = About {
    summary: "With 9+ years of experience in data engineering and cloud architecture, I \
              specialize in building scalable, secure, production-grade data platforms that \
              drive business value.",
    paragraphs: &[
        "Senior Data Engineer & Cloud Data Architect specializing in cloud-native lakehouse \
         architectures, multi-terabyte ETL/ELT pipelines, and real-time streaming systems. \
         Proven track record in healthcare, finance, and enterprise SaaS, with expertise in \
         AWS, Azure, and GCP.",
        "Experienced in leading distributed teams and collaborating across time zones. Strong \
         advocate for remote work culture, digital transformation, and asynchronous \
         communication. Proven ability to deliver high-impact projects in fully remote \
         environments.",
    ],
    experiences: EXPERIENCES,
};

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Lead Data Engineer",
        company: "West Monroe",
        period: "2022 - Present",
        description: "Led architecture and development of multi-cloud enterprise data platforms \
                      across Azure Databricks, AWS, and Snowflake.",
        achievements: &[
            "Reduced processing time by 45% with optimized ETL/ELT frameworks",
            "Decreased production incidents by 40% through observability systems",
            "Cut cloud costs by 25% while improving platform reliability",
        ],
    },
    Experience {
        title: "Senior Data Engineer",
        company: "Andela - Healthcare Analytics",
        period: "2020 - 2022",
        description: "Engineered scalable ETL/ELT pipelines for healthcare data using PySpark, \
                      SQL, and Azure.",
        achievements: &[
            "Reduced manual processing by 70% with automated reporting",
            "Decreased data defects by 40% across critical domains",
            "Built enterprise data marts for population health analytics",
        ],
    },
    Experience {
        title: "BI & Data Integration Engineer",
        company: "Rangle.io",
        period: "2018 - 2020",
        description: "Developed end-to-end ETL pipelines and interactive dashboards for \
                      enterprise reporting.",
        achievements: &[
            "Reduced spreadsheet processes by 60% with automated dashboards",
            "Improved data reliability across ingestion layers",
            "Integrated legacy systems into unified data pipelines",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillLevel {
    pub name: &'static str,
    /// 0 – 100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [SkillLevel],
}

const fn skill(name: &'static str, level: u8) -> SkillLevel {
    SkillLevel { name, level }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Enterprise Data Engineering",
        skills: &[
            skill("dbt (Core & Cloud)", 95),
            skill("PySpark & Airflow", 95),
            skill("ETL/ELT Pipelines", 98),
            skill("CDC & Event-Driven", 90),
        ],
    },
    SkillCategory {
        title: "Software Development",
        skills: &[
            skill("Python & SQL", 98),
            skill("Scala & Java", 85),
            skill("REST APIs & gRPC", 90),
            skill("PostgreSQL & ClickHouse", 92),
        ],
    },
    SkillCategory {
        title: "Business Intelligence",
        skills: &[
            skill("Power BI & Tableau", 93),
            skill("Looker & Analytics", 88),
            skill("KPI Dashboards", 95),
            skill("Data Storytelling", 90),
        ],
    },
    SkillCategory {
        title: "Security & Governance",
        skills: &[
            skill("HIPAA & SOC2", 95),
            skill("IAM & Encryption", 92),
            skill("Unity Catalog", 90),
            skill("Compliance Reporting", 93),
        ],
    },
    SkillCategory {
        title: "Monitoring & Observability",
        skills: &[
            skill("Prometheus & Grafana", 90),
            skill("Datadog & ELK Stack", 88),
            skill("Monte Carlo", 85),
            skill("Anomaly Detection", 87),
        ],
    },
    SkillCategory {
        title: "Big Data & Real-Time",
        skills: &[
            skill("Apache Kafka & Flink", 92),
            skill("Delta Lake & Iceberg", 95),
            skill("ClickHouse & Druid", 88),
            skill("Streaming Systems", 90),
        ],
    },
    SkillCategory {
        title: "Cloud Platforms",
        skills: &[
            skill("Azure & Databricks", 95),
            skill("AWS (S3, Lambda, Glue)", 93),
            skill("GCP & BigQuery", 88),
            skill("Snowflake & Redshift", 92),
        ],
    },
    SkillCategory {
        title: "AI & Machine Learning",
        skills: &[
            skill("MLflow & Feature Stores", 88),
            skill("Vertex AI & SageMaker", 85),
            skill("ML Pipeline Engineering", 90),
            skill("Model Deployment", 87),
        ],
    },
    SkillCategory {
        title: "Data Modeling",
        skills: &[
            skill("Star & Snowflake Schema", 98),
            skill("Dimensional Modeling", 95),
            skill("Data Vault", 90),
            skill("System Architecture", 93),
        ],
    },
    SkillCategory {
        title: "Leadership & Collaboration",
        skills: &[
            skill("Agile/Scrum", 95),
            skill("Cross-Functional Teams", 98),
            skill("Mentorship", 92),
            skill("Strategic Planning", 90),
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    CloudArchitecture,
    DataEngineering,
    Healthcare,
    MachineLearning,
    Governance,
    DevOps,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::CloudArchitecture,
        ProjectCategory::DataEngineering,
        ProjectCategory::Healthcare,
        ProjectCategory::MachineLearning,
        ProjectCategory::Governance,
        ProjectCategory::DevOps,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::CloudArchitecture => "Cloud Architecture",
            ProjectCategory::DataEngineering => "Data Engineering",
            ProjectCategory::Healthcare => "Healthcare",
            ProjectCategory::MachineLearning => "Machine Learning",
            ProjectCategory::Governance => "Governance",
            ProjectCategory::DevOps => "DevOps",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl Serialize for ProjectCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub category: ProjectCategory,
    pub achievements: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Multi-Cloud Data Platform",
        description: "Enterprise lakehouse architecture across Azure Databricks, AWS, and \
                      Snowflake supporting real-time and batch workloads.",
        tech: &["Azure", "AWS", "Databricks", "Snowflake", "PySpark", "dbt"],
        category: ProjectCategory::CloudArchitecture,
        achievements: &["45% faster processing", "99.9% SLA reliability", "25% cost reduction"],
    },
    Project {
        title: "Real-Time Streaming Pipeline",
        description: "Event-driven data platform using Kafka, Flink, and Delta Lake for near \
                      real-time analytics and ML workloads.",
        tech: &["Kafka", "Flink", "Delta Lake", "Python", "Redpanda"],
        category: ProjectCategory::DataEngineering,
        achievements: &["<1min latency", "Fault-tolerant architecture", "Auto-scaling"],
    },
    Project {
        title: "Healthcare Analytics Platform",
        description: "HIPAA-compliant data platform processing claims, EHR, and quality metrics \
                      for population health analytics.",
        tech: &["Azure", "PySpark", "SQL", "Power BI", "Python"],
        category: ProjectCategory::Healthcare,
        achievements: &["70% less manual work", "HIPAA compliant", "Audit-ready reporting"],
    },
    Project {
        title: "ML Feature Store",
        description: "Scalable feature engineering platform with MLflow integration supporting \
                      real-time inference and batch training.",
        tech: &["Databricks", "MLflow", "Python", "Delta Lake", "FastAPI"],
        category: ProjectCategory::MachineLearning,
        achievements: &["Real-time features", "Version control", "A/B testing support"],
    },
    Project {
        title: "Data Governance Framework",
        description: "Enterprise data governance solution with Unity Catalog, lineage tracking, \
                      and automated quality monitoring.",
        tech: &["Unity Catalog", "Monte Carlo", "Datadog", "OpenLineage"],
        category: ProjectCategory::Governance,
        achievements: &["40% fewer incidents", "Full lineage", "Automated monitoring"],
    },
    Project {
        title: "Cost Optimization System",
        description: "Cloud cost monitoring and optimization platform reducing compute and \
                      storage spend across multi-cloud.",
        tech: &["Terraform", "Python", "Grafana", "AWS", "Azure"],
        category: ProjectCategory::DevOps,
        achievements: &["25% cost savings", "Real-time alerts", "Automated scaling"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Testimonials / features
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Michael Chen",
        role: "VP of Engineering",
        company: "HealthTech Solutions",
        content: "Sophia transformed our data infrastructure from a fragile, failure-prone \
                  system into a robust, scalable platform. Her expertise in cloud architecture \
                  and data governance reduced our incidents by 40% while improving performance. \
                  She's a true technical leader.",
        avatar: "MC",
    },
    Testimonial {
        name: "Sarah Williams",
        role: "Chief Data Officer",
        company: "Financial Services Corp",
        content: "Working with Sophia on our multi-cloud data platform was exceptional. She \
                  delivered a 45% improvement in processing speed while cutting costs by 25%. \
                  Her ability to translate complex technical concepts for stakeholders is \
                  outstanding.",
        avatar: "SW",
    },
    Testimonial {
        name: "David Martinez",
        role: "Director of Analytics",
        company: "Enterprise SaaS Inc",
        content: "Sophia's real-time streaming pipeline revolutionized our analytics \
                  capabilities. Her attention to security, compliance, and data quality while \
                  maintaining high performance sets her apart. An invaluable asset to any \
                  data-driven organization.",
        avatar: "DM",
    },
    Testimonial {
        name: "Emily Thompson",
        role: "Product Manager",
        company: "West Monroe",
        content: "Sophia's collaborative approach and deep technical expertise made our product \
                  launches seamless. She mentored our team, established best practices, and \
                  delivered enterprise-grade solutions that exceeded expectations. Highly \
                  recommended for remote collaboration.",
        avatar: "ET",
    },
    Testimonial {
        name: "James Rodriguez",
        role: "CTO",
        company: "Data Analytics Startup",
        content: "Sophia built our entire data platform from scratch with modern lakehouse \
                  architecture. Her implementation of Delta Lake, Unity Catalog, and automated \
                  monitoring created a foundation that scales with our growth. Her remote work \
                  ethic is impeccable.",
        avatar: "JR",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "AI Salary Predictor",
        description: "Get accurate salary ranges using machine learning models trained on 2000+ jobs",
    },
    Feature {
        title: "Skill Recommendations",
        description: "Discover in-demand skills that will boost your salary and career prospects",
    },
    Feature {
        title: "Smart Matching",
        description: "Find jobs that match your skills, experience, and career goals perfectly",
    },
    Feature {
        title: "Market Analytics",
        description: "Track job market trends, growth rates, and emerging opportunities in real-time",
    },
    Feature {
        title: "Career Insights",
        description: "Get personalized career recommendations based on your profile and goals",
    },
    Feature {
        title: "Verified Data",
        description: "All job data verified and updated daily from trusted sources",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Career path / salary comparison / trending skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareerStep {
    pub level: ExperienceLevel,
    pub title: &'static str,
    pub salary: &'static str,
    pub skills: &'static [&'static str],
    pub timeline: &'static str,
    pub companies: &'static [&'static str],
}

pub const CAREER_PATH: &[CareerStep] = &[
    CareerStep {
        level: ExperienceLevel::Entry,
        title: "Junior Developer",
        salary: "$60K - $80K",
        skills: &["React", "JavaScript", "Git", "Basic Backend"],
        timeline: "1-2 Years",
        companies: &["Startups", "Small Teams", "Agencies"],
    },
    CareerStep {
        level: ExperienceLevel::Mid,
        title: "Senior Developer",
        salary: "$120K - $160K",
        skills: &["React", "TypeScript", "System Design", "Leadership"],
        timeline: "2-4 Years",
        companies: &["Scale-ups", "Tech Companies", "Established Firms"],
    },
    CareerStep {
        level: ExperienceLevel::Senior,
        title: "Staff Engineer",
        salary: "$180K - $250K",
        skills: &["Architecture", "AI/ML", "Team Leadership", "Strategic Design"],
        timeline: "4-6 Years",
        companies: &["Google", "Amazon", "Microsoft", "Meta"],
    },
    CareerStep {
        level: ExperienceLevel::Lead,
        title: "Principal Engineer",
        salary: "$250K - $400K",
        skills: &["Strategic Vision", "Organization Design", "Innovation", "Mentorship"],
        timeline: "6+ Years",
        companies: &["Top Tech Companies", "Leadership Track"],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComparisonJob {
    pub title: &'static str,
    pub company: &'static str,
    pub salary: u32,
    pub match_percent: u8,
    pub experience: ExperienceLevel,
}

pub const SALARY_COMPARISON: &[ComparisonJob] = &[
    ComparisonJob {
        title: "Senior Frontend Engineer",
        company: "Google",
        salary: 185_000,
        match_percent: 92,
        experience: ExperienceLevel::Senior,
    },
    ComparisonJob {
        title: "Full Stack Developer",
        company: "Amazon",
        salary: 165_000,
        match_percent: 85,
        experience: ExperienceLevel::Mid,
    },
    ComparisonJob {
        title: "React Developer",
        company: "Stripe",
        salary: 175_000,
        match_percent: 88,
        experience: ExperienceLevel::Senior,
    },
    ComparisonJob {
        title: "JavaScript Developer",
        company: "Netflix",
        salary: 195_000,
        match_percent: 90,
        experience: ExperienceLevel::Senior,
    },
];

pub const SALARY_COMPARISON_NOTE: &str = "Salaries vary by timezone and experience level. \
                                          Skills in AI/ML can add 20-30% to your salary potential.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendingSkill {
    pub name: &'static str,
    /// Demand index, 0 – 100.
    pub demand: u8,
    pub salary_impact: u32,
    /// Year-over-year growth, percent.
    pub trend: u8,
    pub jobs: u32,
}

pub const TRENDING_SKILLS: &[TrendingSkill] = &[
    TrendingSkill { name: "AI/Machine Learning", demand: 95, salary_impact: 45_000, trend: 28, jobs: 1247 },
    TrendingSkill { name: "React", demand: 88, salary_impact: 28_000, trend: 12, jobs: 856 },
    TrendingSkill { name: "TypeScript", demand: 85, salary_impact: 24_000, trend: 18, jobs: 742 },
    TrendingSkill { name: "Cloud (AWS/GCP)", demand: 82, salary_impact: 32_000, trend: 22, jobs: 695 },
    TrendingSkill { name: "Python", demand: 90, salary_impact: 26_000, trend: 15, jobs: 934 },
    TrendingSkill { name: "Node.js", demand: 79, salary_impact: 21_000, trend: 8, jobs: 543 },
    TrendingSkill { name: "Docker/Kubernetes", demand: 76, salary_impact: 30_000, trend: 20, jobs: 489 },
    TrendingSkill { name: "GraphQL", demand: 68, salary_impact: 18_000, trend: 5, jobs: 234 },
];
