//! # Domain Records
//!
//! The one internal shape for everything the backend returns. Wire formats
//! vary between backend revisions; `api::types` adapts them into these.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InternshipStatus {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl InternshipStatus {
    /// Maps the backend's free-form status string.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" | "open" => InternshipStatus::Open,
            "closed" => InternshipStatus::Closed,
            _ => InternshipStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InternshipStatus::Open => "Active",
            InternshipStatus::Closed => "Closed",
            InternshipStatus::Unknown => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Internship {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub applicants: u32,
    pub capacity: Option<u32>,
    pub status: InternshipStatus,
    pub category: Option<String>,
    pub stipend: Option<String>,
    pub duration_months: Option<u32>,
    pub description: Option<String>,
    pub skills: Vec<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub location: String,
    pub education: String,
    pub projects: Option<String>,
    pub applications: u32,
    pub status: Option<String>,
    /// Present only on results from the shortlisting call.
    pub rank: Option<u32>,
    pub score: Option<f64>,
}

/// Label shown next to a shortlisted candidate's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Top,
    Recommended,
    Considerable,
}

impl RankTier {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            0..=5 => RankTier::Top,
            6..=10 => RankTier::Recommended,
            _ => RankTier::Considerable,
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RankTier::Top => "Top Candidate",
            RankTier::Recommended => "Recommended",
            RankTier::Considerable => "Considerable",
        };
        f.write_str(label)
    }
}

/// Result of a credential check.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub success: bool,
    pub username: String,
    pub message: Option<String>,
}
