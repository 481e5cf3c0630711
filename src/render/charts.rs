//! Pure derivation of chart and badge primitives from summary counts.
//!
//! Deterministic and side-effect free: counts and ratings in, percentages
//! and CSS fragments out. Handlers feed the results into template structs;
//! nothing here touches I/O or the session.

/// Rating-quality bucket used for badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Good,
    Avg,
    Low,
}

impl RatingTier {
    /// CSS class suffix the badge styles key on.
    pub fn css_class(self) -> &'static str {
        match self {
            RatingTier::Good => "good",
            RatingTier::Avg => "avg",
            RatingTier::Low => "low",
        }
    }
}

/// Bucket a [0,5] rating. Lower bounds are inclusive: exactly 4.5 is Good,
/// exactly 3.0 is Avg.
pub fn classify_rating(rating: f64) -> RatingTier {
    if rating >= 4.5 {
        RatingTier::Good
    } else if rating >= 3.0 {
        RatingTier::Avg
    } else {
        RatingTier::Low
    }
}

/// Bar heights as percentages of the tallest bar, in input order.
///
/// The divisor is floored at 1 so an all-zero sequence yields all-zero
/// heights instead of NaN.
pub fn normalize_bar_heights(counts: &[u32]) -> Vec<f64> {
    let max = counts.iter().copied().max().unwrap_or(0).max(1);
    counts
        .iter()
        .map(|&count| f64::from(count) / f64::from(max) * 100.0)
        .collect()
}

/// The [start%, end%) range one category occupies in a pie-style chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub start: f64,
    pub end: f64,
}

impl Sweep {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Cumulative sweep boundaries, one per count, in input order.
///
/// Boundaries are rounded to two decimals for stable markup; each sweep
/// starts where the previous one ended, and the final boundary is pinned to
/// exactly 100 so rounding drift never overshoots the circle. A zero total
/// produces only zero-width sweeps.
pub fn pie_sweeps(counts: &[u32]) -> Vec<Sweep> {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return counts.iter().map(|_| Sweep { start: 0.0, end: 0.0 }).collect();
    }

    let mut sweeps = Vec::with_capacity(counts.len());
    let mut cursor = 0.0;
    let mut cumulative: u64 = 0;
    for &count in counts {
        cumulative += u64::from(count);
        let end = if cumulative == total {
            100.0
        } else {
            round_pct(cumulative as f64 / total as f64 * 100.0)
        };
        sweeps.push(Sweep { start: cursor, end });
        cursor = end;
    }
    sweeps
}

/// Round a percentage to the two decimals the chart markup uses.
pub fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Slice colors for the weekday-share pie, one per trailing-week day.
pub const TREND_PALETTE: [&str; 7] = [
    "#5b8def", "#22c55e", "#a855f7", "#f59e0b", "#ef4444", "#14b8a6", "#64748b",
];

/// Build a CSS `conic-gradient(...)` stop list from colored sweeps.
///
/// Zero-width sweeps contribute no stop; if every sweep is empty the result
/// is an empty string and the caller falls back to its no-data state.
pub fn conic_gradient(slices: &[(&str, Sweep)]) -> String {
    let stops: Vec<String> = slices
        .iter()
        .filter(|(_, sweep)| !sweep.is_empty())
        .map(|(color, sweep)| format!("{} {}% {}%", color, sweep.start, sweep.end))
        .collect();
    if stops.is_empty() {
        return String::new();
    }
    format!("conic-gradient({})", stops.join(", "))
}

/// Which visual the trends panel uses. Selected by configuration; the data
/// contract is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStrategy {
    #[default]
    Bars,
    Pie,
}

impl ChartStrategy {
    /// Parse a configuration value; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bar" | "bars" => Some(ChartStrategy::Bars),
            "pie" => Some(ChartStrategy::Pie),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartStrategy::Bars => "bar",
            ChartStrategy::Pie => "pie",
        }
    }
}
