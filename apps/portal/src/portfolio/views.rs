//! View models for the portfolio sections. The theme is always passed in;
//! nothing here reads process-wide state.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::models::job::ExperienceLevel;
use crate::portfolio::content::{
    About, CareerStep, ContactInfo, Feature, Hero, NavItem, Project, ProjectCategory,
    SkillCategory, Testimonial, TrendingSkill, ABOUT, BRAND, CAREER_PATH, CONTACT_INFO, FEATURES,
    HERO, NAV_ITEMS, OWNER_NAME, PROJECTS, SALARY_COMPARISON, SALARY_COMPARISON_NOTE,
    SKILL_CATEGORIES, TESTIMONIALS, TRENDING_SKILLS,
};
use crate::presentation::format::{format_currency, format_salary_k};
use crate::presentation::theme::{experience_badge, Badge, Palette, Theme};

/// Width, in pixels, of the widest bar in the salary comparison table.
pub const COMPARISON_BAR_MAX_PX: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Skills heatmap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatTier {
    Critical, // ≥ 85
    VeryHigh, // ≥ 75
    High,     // ≥ 65
    Growing,
}

impl HeatTier {
    pub fn for_demand(demand: u8) -> Self {
        match demand {
            85.. => HeatTier::Critical,
            75..=84 => HeatTier::VeryHigh,
            65..=74 => HeatTier::High,
            _ => HeatTier::Growing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeatTier::Critical => "Critical",
            HeatTier::VeryHigh => "Very High",
            HeatTier::High => "High",
            HeatTier::Growing => "Growing",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            HeatTier::Critical => "from-red-600 to-orange-600",
            HeatTier::VeryHigh => "from-orange-500 to-amber-500",
            HeatTier::High => "from-yellow-500 to-lime-500",
            HeatTier::Growing => "from-lime-500 to-green-500",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapCell {
    pub name: &'static str,
    pub demand: u8,
    pub tier: HeatTier,
    pub label: &'static str,
    pub gradient: &'static str,
    pub salary_impact: String,
    pub trend: String,
    pub jobs: u32,
}

pub fn skills_heatmap(skills: &[TrendingSkill]) -> Vec<HeatmapCell> {
    skills
        .iter()
        .map(|skill| {
            let tier = HeatTier::for_demand(skill.demand);
            HeatmapCell {
                name: skill.name,
                demand: skill.demand,
                tier,
                label: tier.label(),
                gradient: tier.gradient(),
                salary_impact: format_salary_k(f64::from(skill.salary_impact)),
                trend: format!("+{}%", skill.trend),
                jobs: skill.jobs,
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Salary comparison
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub title: &'static str,
    pub company: &'static str,
    pub salary: String,
    pub bar_width_px: u32,
    pub match_percent: u8,
    pub experience: Badge,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryComparisonView {
    pub rows: Vec<ComparisonRow>,
    pub average_salary: String,
    pub max_salary: String,
    pub note: &'static str,
}

pub fn salary_comparison() -> SalaryComparisonView {
    let salaries: Vec<u32> = SALARY_COMPARISON.iter().map(|job| job.salary).collect();
    let max = salaries.iter().copied().max().unwrap_or(0);
    let average = if salaries.is_empty() {
        0.0
    } else {
        salaries.iter().map(|&s| f64::from(s)).sum::<f64>() / salaries.len() as f64
    };

    let rows = SALARY_COMPARISON
        .iter()
        .map(|job| ComparisonRow {
            title: job.title,
            company: job.company,
            salary: format_salary_k(f64::from(job.salary)),
            bar_width_px: bar_width(job.salary, max),
            match_percent: job.match_percent,
            experience: experience_badge(job.experience),
        })
        .collect();

    SalaryComparisonView {
        rows,
        average_salary: format_currency(average.round()),
        max_salary: format_currency(f64::from(max)),
        note: SALARY_COMPARISON_NOTE,
    }
}

fn bar_width(salary: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    ((f64::from(salary) / f64::from(max)) * f64::from(COMPARISON_BAR_MAX_PX)).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Projects / career path / footer
// ────────────────────────────────────────────────────────────────────────────

/// `None` means "All".
pub fn filter_projects(category: Option<ProjectCategory>) -> Vec<Project> {
    PROJECTS
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .copied()
        .collect()
}

/// Category chips shown above the project grid, "All" first.
pub fn project_categories() -> Vec<&'static str> {
    std::iter::once("All")
        .chain(ProjectCategory::ALL.into_iter().map(ProjectCategory::label))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerStepView {
    pub step: usize,
    pub level: ExperienceLevel,
    pub badge: Badge,
    pub title: &'static str,
    pub salary: &'static str,
    pub skills: &'static [&'static str],
    pub timeline: &'static str,
    pub companies: &'static [&'static str],
    pub has_next: bool,
}

pub fn career_path(steps: &[CareerStep]) -> Vec<CareerStepView> {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| CareerStepView {
            step: idx + 1,
            level: step.level,
            badge: experience_badge(step.level),
            title: step.title,
            salary: step.salary,
            skills: step.skills,
            timeline: step.timeline,
            companies: step.companies,
            has_next: idx + 1 < steps.len(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub brand: &'static str,
    pub credit: String,
    pub copyright: String,
}

pub fn footer(year: i32) -> Footer {
    Footer {
        brand: BRAND,
        credit: format!("Built with love by {OWNER_NAME}"),
        copyright: format!("© {year} All rights reserved"),
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

// ────────────────────────────────────────────────────────────────────────────
// Whole page
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Navbar {
    pub brand: &'static str,
    pub items: &'static [NavItem],
    /// The theme the toggle switches to.
    pub toggle_to: Theme,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioPage {
    pub theme: Theme,
    pub palette: Palette,
    pub navbar: Navbar,
    pub hero: Hero,
    pub about: About,
    pub skills: &'static [SkillCategory],
    pub project_categories: Vec<&'static str>,
    pub projects: Vec<Project>,
    pub testimonials: &'static [Testimonial],
    pub features: &'static [Feature],
    pub career_path: Vec<CareerStepView>,
    pub salary_comparison: SalaryComparisonView,
    pub skills_heatmap: Vec<HeatmapCell>,
    pub contact: ContactInfo,
    pub footer: Footer,
}

pub fn build_portfolio(theme: Theme, year: i32) -> PortfolioPage {
    PortfolioPage {
        theme,
        palette: theme.palette(),
        navbar: Navbar {
            brand: BRAND,
            items: NAV_ITEMS,
            toggle_to: theme.toggled(),
        },
        hero: HERO,
        about: ABOUT,
        skills: SKILL_CATEGORIES,
        project_categories: project_categories(),
        projects: filter_projects(None),
        testimonials: TESTIMONIALS,
        features: FEATURES,
        career_path: career_path(CAREER_PATH),
        salary_comparison: salary_comparison(),
        skills_heatmap: skills_heatmap(TRENDING_SKILLS),
        contact: CONTACT_INFO,
        footer: footer(year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_tier_boundaries() {
        assert_eq!(HeatTier::for_demand(95), HeatTier::Critical);
        assert_eq!(HeatTier::for_demand(85), HeatTier::Critical);
        assert_eq!(HeatTier::for_demand(84), HeatTier::VeryHigh);
        assert_eq!(HeatTier::for_demand(75), HeatTier::VeryHigh);
        assert_eq!(HeatTier::for_demand(74), HeatTier::High);
        assert_eq!(HeatTier::for_demand(65), HeatTier::High);
        assert_eq!(HeatTier::for_demand(64), HeatTier::Growing);
    }

    #[test]
    fn test_heatmap_cells() {
        let cells = skills_heatmap(TRENDING_SKILLS);
        assert_eq!(cells.len(), TRENDING_SKILLS.len());
        let graphql = cells.iter().find(|c| c.name == "GraphQL").unwrap();
        assert_eq!(graphql.tier, HeatTier::High);
        assert_eq!(graphql.salary_impact, "$18K");
        assert_eq!(graphql.trend, "+5%");
    }

    #[test]
    fn test_salary_comparison_average_and_widths() {
        let view = salary_comparison();
        // (185 + 165 + 175 + 195) / 4 = 180
        assert_eq!(view.average_salary, "$180,000");
        assert_eq!(view.max_salary, "$195,000");

        let netflix = view.rows.iter().find(|r| r.company == "Netflix").unwrap();
        assert_eq!(netflix.bar_width_px, COMPARISON_BAR_MAX_PX);
        let amazon = view.rows.iter().find(|r| r.company == "Amazon").unwrap();
        assert_eq!(amazon.bar_width_px, 85);
        assert_eq!(amazon.salary, "$165K");
    }

    #[test]
    fn test_all_category_means_no_filter() {
        assert_eq!(filter_projects(None).len(), PROJECTS.len());
        let healthcare = filter_projects(Some(ProjectCategory::Healthcare));
        assert_eq!(healthcare.len(), 1);
        assert_eq!(healthcare[0].title, "Healthcare Analytics Platform");
    }

    #[test]
    fn test_project_categories_start_with_all() {
        let categories = project_categories();
        assert_eq!(categories[0], "All");
        assert_eq!(categories.len(), ProjectCategory::ALL.len() + 1);
    }

    #[test]
    fn test_career_path_steps_are_numbered() {
        let steps = career_path(CAREER_PATH);
        assert_eq!(steps[0].step, 1);
        assert!(steps[0].has_next);
        assert!(!steps.last().unwrap().has_next);
        assert_eq!(steps[3].badge.label, "Lead");
    }

    #[test]
    fn test_footer_uses_given_year() {
        assert_eq!(footer(2031).copyright, "© 2031 All rights reserved");
        assert!(current_year() >= 2024);
    }

    #[test]
    fn test_theme_is_threaded_through() {
        let dark = build_portfolio(Theme::Dark, 2030);
        assert_eq!(dark.theme, Theme::Dark);
        assert_eq!(dark.palette, Theme::Dark.palette());
        assert_eq!(dark.navbar.toggle_to, Theme::Light);

        let light = build_portfolio(Theme::Light, 2030);
        assert_ne!(light.palette, dark.palette);
    }
}
