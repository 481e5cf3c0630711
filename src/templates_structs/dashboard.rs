use askama::Template;

use super::PageContext;
use crate::models::summary::{
    DashboardSummary, PeakTime, RecommendedTutor, SubjectStats, TrendPoint,
};
use crate::render::charts::{self, ChartStrategy};
use crate::render::format;

// ---------- Section rows ----------

/// One row of the subject breakdown table.
pub struct SubjectRow {
    pub subject_name: String,
    pub sessions: u32,
    /// Formatted revenue; tutor dashboards only.
    pub revenue: Option<String>,
    pub rating: String,
    pub tier_class: &'static str,
}

impl SubjectRow {
    fn from_stats(stats: &SubjectStats, currency: Option<&str>) -> Self {
        Self {
            subject_name: stats.subject_name.clone(),
            sessions: stats.total_sessions,
            revenue: currency.map(|code| format::format_currency(code, stats.total_revenue)),
            rating: format::format_rating(stats.avg_rating),
            tier_class: charts::classify_rating(stats.avg_rating).css_class(),
        }
    }
}

pub struct PeakTimeRow {
    pub start_time: String,
    pub sessions: u32,
}

impl PeakTimeRow {
    fn from_peak(peak: &PeakTime) -> Self {
        Self {
            start_time: peak.start_time.clone(),
            sessions: peak.session_count,
        }
    }
}

pub struct RecommendationRow {
    pub full_name: String,
    pub subject_name: String,
    pub rating: String,
    pub photo_src: String,
}

impl RecommendationRow {
    fn from_tutor(rec: &RecommendedTutor) -> Self {
        let photo_src = match &rec.profile_photo {
            Some(encoded) => format!("data:image/jpeg;base64,{encoded}"),
            None => "/static/img/avatar.svg".to_string(),
        };
        Self {
            full_name: rec.full_name.clone(),
            subject_name: rec.subject_name.clone(),
            rating: format::format_rating(rec.rating),
            photo_src,
        }
    }
}

// ---------- Trend chart ----------

/// One bar of the trailing-week activity chart.
pub struct TrendBar {
    pub label: String,
    pub tooltip: String,
    pub height_pct: f64,
}

pub struct PieSlice {
    pub label: String,
    pub sessions: u32,
    pub share_pct: f64,
    pub color: &'static str,
}

pub struct PieView {
    pub gradient: String,
    pub legend: Vec<PieSlice>,
}

/// The weekly-trend widget in whichever shape the deployment selects.
/// At most one of `bars` and `pie` is populated; when both are empty the
/// templates show the no-data message instead. Bars render even when every
/// count is zero; the pie needs at least one session.
pub struct TrendChart {
    pub bars: Vec<TrendBar>,
    pub pie: Option<PieView>,
}

impl TrendChart {
    pub fn build(strategy: ChartStrategy, trends: &[TrendPoint]) -> Self {
        match strategy {
            ChartStrategy::Bars => TrendChart {
                bars: build_bars(trends),
                pie: None,
            },
            ChartStrategy::Pie => TrendChart {
                bars: Vec::new(),
                pie: build_pie(trends),
            },
        }
    }
}

fn build_bars(trends: &[TrendPoint]) -> Vec<TrendBar> {
    let counts: Vec<u32> = trends.iter().map(|t| t.session_count).collect();
    let heights = charts::normalize_bar_heights(&counts);
    trends
        .iter()
        .zip(heights)
        .map(|(point, height)| TrendBar {
            label: format::weekday_label(point.date),
            tooltip: format!(
                "{}: {} session{}",
                format::day_label(point.date),
                point.session_count,
                if point.session_count == 1 { "" } else { "s" }
            ),
            height_pct: charts::round_pct(height),
        })
        .collect()
}

fn build_pie(trends: &[TrendPoint]) -> Option<PieView> {
    let counts: Vec<u32> = trends.iter().map(|t| t.session_count).collect();
    if counts.iter().all(|&c| c == 0) {
        return None;
    }
    let sweeps = charts::pie_sweeps(&counts);
    let colored: Vec<(&str, charts::Sweep)> = sweeps
        .iter()
        .enumerate()
        .map(|(i, &sweep)| (charts::TREND_PALETTE[i % charts::TREND_PALETTE.len()], sweep))
        .collect();
    let legend = trends
        .iter()
        .zip(&sweeps)
        .enumerate()
        .map(|(i, (point, sweep))| PieSlice {
            label: format::weekday_label(point.date),
            sessions: point.session_count,
            share_pct: charts::round_pct(sweep.width()),
            color: charts::TREND_PALETTE[i % charts::TREND_PALETTE.len()],
        })
        .collect();
    Some(PieView {
        gradient: charts::conic_gradient(&colored),
        legend,
    })
}

// ---------- Dashboards ----------

#[derive(Template)]
#[template(path = "student_dashboard.html")]
pub struct StudentDashboardTemplate {
    pub ctx: PageContext,
    pub total_sessions: u32,
    pub avg_rating: String,
    pub subject_count: usize,
    pub subjects: Vec<SubjectRow>,
    pub peak_times: Vec<PeakTimeRow>,
    pub recommendations: Vec<RecommendationRow>,
    pub chart: TrendChart,
}

impl StudentDashboardTemplate {
    pub fn build(ctx: PageContext, summary: &DashboardSummary, strategy: ChartStrategy) -> Self {
        Self {
            total_sessions: summary.overall.total_sessions,
            avg_rating: format::format_rating(summary.overall.avg_rating),
            subject_count: summary.subjects.len(),
            subjects: summary
                .subjects
                .iter()
                .map(|s| SubjectRow::from_stats(s, None))
                .collect(),
            peak_times: summary.peak_times.iter().map(PeakTimeRow::from_peak).collect(),
            recommendations: summary
                .recommendations
                .iter()
                .map(RecommendationRow::from_tutor)
                .collect(),
            chart: TrendChart::build(strategy, &summary.trends),
            ctx,
        }
    }
}

#[derive(Template)]
#[template(path = "tutor_dashboard.html")]
pub struct TutorDashboardTemplate {
    pub ctx: PageContext,
    pub total_sessions: u32,
    pub avg_rating: String,
    pub subject_count: usize,
    pub subjects: Vec<SubjectRow>,
    pub peak_times: Vec<PeakTimeRow>,
    pub chart: TrendChart,
}

impl TutorDashboardTemplate {
    pub fn build(
        ctx: PageContext,
        summary: &DashboardSummary,
        strategy: ChartStrategy,
        currency_code: &str,
    ) -> Self {
        Self {
            total_sessions: summary.overall.total_sessions,
            avg_rating: format::format_rating(summary.overall.avg_rating),
            subject_count: summary.subjects.len(),
            subjects: summary
                .subjects
                .iter()
                .map(|s| SubjectRow::from_stats(s, Some(currency_code)))
                .collect(),
            peak_times: summary.peak_times.iter().map(PeakTimeRow::from_peak).collect(),
            chart: TrendChart::build(strategy, &summary.trends),
            ctx,
        }
    }
}
