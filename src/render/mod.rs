//! The summary renderer: pure functions turning raw summary fields into
//! display-ready values (bar heights, pie sweeps, rating tiers, formatted
//! figures). Stateless by construction.

pub mod charts;
pub mod format;
