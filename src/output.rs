//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::{ProcessError, ScoreBreakdown, ValidationError};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of scoring a receipt file
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    /// Retailer on the receipt
    pub retailer: String,
    /// Total points
    pub points: u64,
    /// Per-rule contributions
    pub rules: Vec<RuleLine>,
}

/// One rule's line in a score report
#[derive(Debug, Serialize)]
pub struct RuleLine {
    /// Rule machine name
    pub rule: String,
    /// What the rule awards
    pub description: String,
    /// Points awarded
    pub points: u64,
}

/// Result of validating (or failing to score) a receipt file
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Whether the receipt was accepted
    pub valid: bool,
    /// Offending field, when rejected by the validator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Reason for rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ScoreReport {
    /// Build a report from a score breakdown
    #[must_use]
    pub fn new(retailer: &str, breakdown: &ScoreBreakdown) -> Self {
        Self {
            retailer: retailer.to_string(),
            points: breakdown.total,
            rules: breakdown
                .contributions
                .iter()
                .map(|c| RuleLine {
                    rule: c.rule.as_str().to_string(),
                    description: c.rule.description().to_string(),
                    points: c.points,
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}: {} points\n", self.retailer.bold(), self.points.to_string().green());
        for line in &self.rules {
            let points = format!("{:>4}", line.points);
            let points = if line.points == 0 { points.dimmed() } else { points.normal() };
            println!("  {points}  {}", line.description);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidationReport {
    /// An accepted receipt
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            field: None,
            reason: None,
        }
    }

    /// A receipt rejected by the validator
    #[must_use]
    pub fn rejected(err: &ValidationError) -> Self {
        Self {
            valid: false,
            field: Some(err.field()),
            reason: Some(err.to_string()),
        }
    }

    /// A receipt that failed validation or scoring
    #[must_use]
    pub fn failed(err: &ProcessError) -> Self {
        match err {
            ProcessError::Rejected(e) => Self::rejected(e),
            ProcessError::Unscorable(e) => Self {
                valid: false,
                field: None,
                reason: Some(e.to_string()),
            },
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{}", "valid".green());
        } else {
            println!("{} {}", "rejected:".red(), self.reason.as_deref().unwrap_or("unknown reason"));
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
