//! Axum route handlers for the portfolio sections.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::portfolio::content::{Project, ProjectCategory, CAREER_PATH, TRENDING_SKILLS};
use crate::portfolio::views::{
    build_portfolio, career_path, current_year, filter_projects, project_categories,
    salary_comparison, skills_heatmap, CareerStepView, HeatmapCell, PortfolioPage,
    SalaryComparisonView,
};
use crate::presentation::theme::Theme;

#[derive(Debug, Deserialize)]
pub struct PortfolioParams {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
pub struct ProjectParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub selected: &'static str,
    pub categories: Vec<&'static str>,
    pub projects: Vec<Project>,
}

/// GET /api/v1/portfolio?theme=dark|light
///
/// Every portfolio section in one payload, styled for the requested theme.
pub async fn handle_portfolio(Query(params): Query<PortfolioParams>) -> Json<PortfolioPage> {
    Json(build_portfolio(params.theme, current_year()))
}

/// GET /api/v1/portfolio/projects?category=
pub async fn handle_projects(
    Query(params): Query<ProjectParams>,
) -> Result<Json<ProjectsResponse>, AppError> {
    let requested = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));

    let category = match requested {
        None => None,
        Some(label) => Some(
            ProjectCategory::parse(label)
                .ok_or_else(|| AppError::NotFound(format!("Project category '{label}'")))?,
        ),
    };

    Ok(Json(ProjectsResponse {
        selected: category.map_or("All", ProjectCategory::label),
        categories: project_categories(),
        projects: filter_projects(category),
    }))
}

/// GET /api/v1/portfolio/skills-heatmap
pub async fn handle_skills_heatmap() -> Json<Vec<HeatmapCell>> {
    Json(skills_heatmap(TRENDING_SKILLS))
}

/// GET /api/v1/portfolio/career-path
pub async fn handle_career_path() -> Json<Vec<CareerStepView>> {
    Json(career_path(CAREER_PATH))
}

/// GET /api/v1/portfolio/salary-comparison
pub async fn handle_salary_comparison() -> Json<SalaryComparisonView> {
    Json(salary_comparison())
}
