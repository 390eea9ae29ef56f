use serde::Serialize;

use crate::api_client::fallback::{DataSource, Resolved};
use crate::models::stats::{CompanyCount, StatsSnapshot};
use crate::presentation::format::{
    capitalize, format_currency, format_percent, format_salary_k, group_thousands,
};
use crate::presentation::theme::Accent;

/// Salary that fills a salary-by-experience bar to 100%.
const SALARY_BAR_MAX: f64 = 150_000.0;

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub accent: Accent,
    pub gradient: &'static str,
}

impl StatCard {
    fn new(title: &'static str, value: String, change: &'static str, accent: Accent) -> Self {
        Self {
            title,
            value,
            change,
            accent,
            gradient: accent.gradient(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyRow {
    pub rank: usize,
    pub name: String,
    pub jobs: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryBar {
    pub label: String,
    pub salary: String,
    pub width_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoBanner {
    pub title: &'static str,
    pub message: &'static str,
    pub hint: &'static str,
}

/// Shown only when the view is backed by demo data.
pub fn demo_banner(source: DataSource) -> Option<DemoBanner> {
    match source {
        DataSource::Live => None,
        DataSource::Demo => Some(DemoBanner {
            title: "Demo Mode",
            message: "Using sample data. Start the Python backend to see live data.",
            hint: "Run: cd backend && python main.py",
        }),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub source: DataSource,
    pub banner: Option<DemoBanner>,
    pub stat_cards: Vec<StatCard>,
    pub top_skills: Vec<String>,
    pub top_companies: Vec<CompanyRow>,
    pub salary_by_experience: Vec<SalaryBar>,
}

pub fn build_dashboard(resolved: &Resolved<StatsSnapshot>) -> DashboardView {
    let stats = &resolved.data;

    let stat_cards = vec![
        StatCard::new(
            "Total Jobs",
            group_thousands(stats.total_jobs),
            "+12%",
            Accent::Blue,
        ),
        StatCard::new(
            "Avg Salary",
            format_salary_k(stats.average_salary),
            "+5%",
            Accent::Green,
        ),
        StatCard::new(
            "Remote Jobs",
            format_percent(stats.remote_percentage),
            "+3%",
            Accent::Cyan,
        ),
        StatCard::new(
            "Growth Rate",
            format_percent(stats.growth_rate),
            "This month",
            Accent::Purple,
        ),
    ];

    let mut salary_by_experience: Vec<(&String, f64)> = stats
        .salary_by_experience
        .iter()
        .map(|(level, salary)| (level, *salary))
        .collect();
    salary_by_experience.sort_by(|a, b| a.1.total_cmp(&b.1));

    DashboardView {
        source: resolved.source,
        banner: demo_banner(resolved.source),
        stat_cards,
        top_skills: stats.top_skills.iter().map(|s| s.skill.clone()).collect(),
        top_companies: company_rows(&stats.top_companies),
        salary_by_experience: salary_by_experience
            .into_iter()
            .map(|(level, salary)| SalaryBar {
                label: capitalize(level),
                salary: format_currency(salary),
                width_percent: (salary / SALARY_BAR_MAX * 100.0).clamp(0.0, 100.0),
            })
            .collect(),
    }
}

/// Ranked company list. Counts are shown only when the upstream supplied them.
pub fn company_rows(companies: &[CompanyCount]) -> Vec<CompanyRow> {
    companies
        .iter()
        .enumerate()
        .map(|(i, c)| CompanyRow {
            rank: i + 1,
            name: c.name.clone(),
            jobs: c.count.map(|n| format!("{} jobs", group_thousands(n))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::mock::mock_stats;

    fn demo() -> Resolved<StatsSnapshot> {
        Resolved {
            data: mock_stats(),
            source: DataSource::Demo,
        }
    }

    #[test]
    fn test_mock_numbers_render_as_expected() {
        let view = build_dashboard(&demo());
        let values: Vec<&str> = view.stat_cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["2,847", "$145K", "78.0%", "12.5%"]);
    }

    #[test]
    fn test_banner_only_in_demo_mode() {
        assert!(build_dashboard(&demo()).banner.is_some());

        let live = Resolved {
            data: mock_stats(),
            source: DataSource::Live,
        };
        assert!(build_dashboard(&live).banner.is_none());
    }

    #[test]
    fn test_salary_bars_sorted_and_clamped() {
        let view = build_dashboard(&demo());
        let labels: Vec<&str> = view
            .salary_by_experience
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Entry", "Mid", "Senior"]);
        assert_eq!(view.salary_by_experience[0].salary, "$85,000");
        // 165000 exceeds the bar maximum
        assert_eq!(view.salary_by_experience[2].width_percent, 100.0);
    }

    #[test]
    fn test_company_rows_ranked() {
        let view = build_dashboard(&demo());
        assert_eq!(view.top_companies[0].rank, 1);
        assert_eq!(view.top_companies[0].jobs.as_deref(), Some("145 jobs"));
        assert_eq!(view.top_skills[0], "Python");
    }

    #[test]
    fn test_stat_card_gradient_follows_accent() {
        let view = build_dashboard(&demo());
        assert_eq!(view.stat_cards[1].accent, Accent::Green);
        assert_eq!(view.stat_cards[1].gradient, "from-green-500 to-green-600");
    }
}
