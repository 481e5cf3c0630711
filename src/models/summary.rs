use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;

// ---------- Types ----------

/// Pre-aggregated dashboard summary answered by the platform backend.
///
/// Fetched fresh on every page load and held for the duration of one
/// request. Never mutated; a reload replaces it wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub overall: OverallStats,
    pub subjects: Vec<SubjectStats>,
    pub peak_times: Vec<PeakTime>,
    pub trends: Vec<TrendPoint>,
    /// Student summaries only; absent for tutors.
    #[serde(default)]
    pub recommendations: Vec<RecommendedTutor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_sessions: u32,
    pub avg_rating: f64,
}

/// Per-subject aggregate row, in the backend's display order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub subject_name: String,
    pub total_sessions: u32,
    /// Tutor summaries only; student rows omit it.
    #[serde(default)]
    pub total_revenue: f64,
    pub avg_rating: f64,
}

/// A time-of-day bucket, pre-sorted by the backend in descending frequency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakTime {
    pub start_time: String, // e.g. "18:00"
    pub session_count: u32,
}

/// One day of the trailing week, in chronological order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub session_count: u32,
}

/// A suggested tutor for the student view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTutor {
    pub full_name: String,
    pub subject_name: String,
    pub rating: f64,
    /// Base64 JPEG; the view falls back to a placeholder when absent.
    #[serde(default)]
    pub profile_photo: Option<String>,
}

// ---------- Validation ----------

impl DashboardSummary {
    /// Shape checks beyond what deserialization enforces. Violations are
    /// backend bugs surfaced as `MalformedSummary`, never silently patched.
    pub fn validate(&self) -> Result<(), AppError> {
        check_rating("overall.avgRating", self.overall.avg_rating)?;
        for subject in &self.subjects {
            if subject.subject_name.trim().is_empty() {
                return Err(AppError::MalformedSummary(
                    "subject entry with an empty name".to_string(),
                ));
            }
            check_rating("subjects[].avgRating", subject.avg_rating)?;
            if subject.total_revenue < 0.0 {
                return Err(AppError::MalformedSummary(format!(
                    "negative revenue for subject '{}'",
                    subject.subject_name
                )));
            }
        }
        for rec in &self.recommendations {
            check_rating("recommendations[].rating", rec.rating)?;
        }
        Ok(())
    }

    /// Session counts of the trailing week, chart-ready and in order.
    pub fn trend_counts(&self) -> Vec<u32> {
        self.trends.iter().map(|t| t.session_count).collect()
    }
}

fn check_rating(field: &str, value: f64) -> Result<(), AppError> {
    if (0.0..=5.0).contains(&value) {
        Ok(())
    } else {
        Err(AppError::MalformedSummary(format!(
            "{field} out of range: {value}"
        )))
    }
}
