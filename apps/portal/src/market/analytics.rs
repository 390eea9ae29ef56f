use serde::Serialize;

use crate::api_client::fallback::{DataSource, Resolved};
use crate::market::dashboard::{company_rows, demo_banner, CompanyRow, DemoBanner};
use crate::models::stats::{AdminStats, LevelCount};
use crate::presentation::format::{capitalize, format_currency, format_percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Positive,
    Neutral,
}

impl TrendDirection {
    pub fn text_class(self) -> &'static str {
        match self {
            TrendDirection::Positive => "text-green-400",
            TrendDirection::Neutral => "text-yellow-400",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendItem {
    pub label: &'static str,
    pub value: &'static str,
    pub direction: TrendDirection,
    pub class: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionRow {
    pub level: String,
    pub count: u64,
    pub share_percent: f64,
    pub share: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryAnalysisRow {
    pub title: &'static str,
    pub salary: String,
    pub trend: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    pub source: DataSource,
    pub banner: Option<DemoBanner>,
    pub total_jobs: u64,
    pub remote_share: String,
    pub experience_distribution: Vec<DistributionRow>,
    pub top_companies: Vec<CompanyRow>,
    pub trends: Vec<TrendItem>,
    pub salary_analysis: Vec<SalaryAnalysisRow>,
}

const MARKET_TRENDS: &[(&str, &str, TrendDirection)] = &[
    ("Job Growth", "+5.2%", TrendDirection::Positive),
    ("Avg Salary Growth", "+3.8%", TrendDirection::Positive),
    ("Remote Job % Growth", "+2.1%", TrendDirection::Positive),
    ("Python Demand", "Increasing", TrendDirection::Positive),
    ("Go Demand", "Increasing", TrendDirection::Positive),
    ("Java Demand", "Stable", TrendDirection::Neutral),
];

const SALARY_ANALYSIS: &[(&str, f64, &str)] = &[
    ("Entry Level Average", 60000.0, "+4.2%"),
    ("Mid-Level Average", 100000.0, "+3.5%"),
    ("Senior Level Average", 150000.0, "+2.8%"),
];

const TOP_COMPANY_LIMIT: usize = 5;

pub fn build_analytics(resolved: &Resolved<AdminStats>) -> AnalyticsView {
    let stats = &resolved.data;
    let mut companies = company_rows(&stats.top_companies);
    companies.truncate(TOP_COMPANY_LIMIT);

    AnalyticsView {
        source: resolved.source,
        banner: demo_banner(resolved.source),
        total_jobs: stats.total_jobs,
        remote_share: format_percent(stats.remote_percentage),
        experience_distribution: distribution(&stats.experience_distribution),
        top_companies: companies,
        trends: MARKET_TRENDS
            .iter()
            .map(|&(label, value, direction)| TrendItem {
                label,
                value,
                direction,
                class: direction.text_class(),
            })
            .collect(),
        salary_analysis: SALARY_ANALYSIS
            .iter()
            .map(|&(title, salary, trend)| SalaryAnalysisRow {
                title,
                salary: format_currency(salary),
                trend,
            })
            .collect(),
    }
}

/// Share of each level among all counted listings.
fn distribution(levels: &[LevelCount]) -> Vec<DistributionRow> {
    let total: u64 = levels.iter().map(|l| l.count).sum();
    levels
        .iter()
        .map(|l| {
            let share_percent = if total > 0 {
                l.count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            DistributionRow {
                level: capitalize(&l.level),
                count: l.count,
                share_percent,
                share: format_percent(share_percent),
            }
        })
        .collect()
}
