//! Wire schemas for each endpoint and the adapters that turn them into
//! domain records.
//!
//! The backend has renamed fields across revisions (`title` vs
//! `internship_title`, `Rank` vs `ranking`, ...). Every known spelling is an
//! explicit optional field here, and the `into_*` adapters pick the first one
//! present. Nothing outside this file should know about wire names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::models::{Candidate, Internship, InternshipStatus, LoginOutcome};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub username: Option<String>,
    pub message: Option<String>,
}

impl LoginResponse {
    /// Falls back to the submitted username when the backend omits it.
    pub fn into_outcome(self, submitted: &str) -> LoginOutcome {
        let username = self
            .username
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| submitted.to_string());
        LoginOutcome {
            success: self.success,
            username,
            message: self.message,
        }
    }
}

/// A list that some revisions send as JSON array and others as `"a, b, c"`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StringList {
    List(Vec<String>),
    Csv(String),
}

impl StringList {
    pub fn into_vec(self) -> Vec<String> {
        let items = match self {
            StringList::List(items) => items,
            StringList::Csv(joined) => joined.split(',').map(str::to_string).collect(),
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct InternshipRecord {
    pub id: Option<Value>,
    pub internship_id: Option<Value>,
    pub title: Option<String>,
    pub internship_title: Option<String>,
    pub company: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub applicants: Option<Value>,
    pub applicant_count: Option<Value>,
    pub capacity: Option<Value>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub sector: Option<String>,
    pub stipend_inr_month: Option<Value>,
    pub duration_months: Option<Value>,
    pub job_description: Option<String>,
    pub description: Option<String>,
    pub skills_required: Option<StringList>,
    pub responsibilities: Option<StringList>,
}

impl InternshipRecord {
    pub fn into_internship(self) -> Internship {
        Internship {
            id: first_text(&[self.id, self.internship_id]).unwrap_or_default(),
            title: self.title.or(self.internship_title).unwrap_or_default(),
            company: self.company.or(self.company_name).unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            applicants: first_count(&[self.applicants, self.applicant_count]).unwrap_or(0),
            capacity: first_count(&[self.capacity]),
            status: self
                .status
                .as_deref()
                .map(InternshipStatus::parse)
                .unwrap_or_default(),
            category: self.category.or(self.sector),
            stipend: first_text(&[self.stipend_inr_month]),
            duration_months: first_count(&[self.duration_months]),
            description: self.job_description.or(self.description),
            skills: self.skills_required.map(StringList::into_vec).unwrap_or_default(),
            responsibilities: self
                .responsibilities
                .map(StringList::into_vec)
                .unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct CandidateRecord {
    pub id: Option<Value>,
    pub candidate_id: Option<Value>,
    #[serde(rename = "CandidateID")]
    pub candidate_id_legacy: Option<Value>,
    pub name: Option<String>,
    pub skills: Option<StringList>,
    #[serde(rename = "Technical_Skills")]
    pub technical_skills: Option<StringList>,
    pub location: Option<String>,
    pub education: Option<String>,
    pub projects: Option<String>,
    #[serde(rename = "Projects")]
    pub projects_legacy: Option<String>,
    pub applications: Option<Value>,
    pub status: Option<String>,
    pub ranking: Option<Value>,
    pub rank: Option<Value>,
    #[serde(rename = "Rank")]
    pub rank_legacy: Option<Value>,
    pub score: Option<Value>,
    #[serde(rename = "Score")]
    pub score_legacy: Option<Value>,
}

impl CandidateRecord {
    pub fn into_candidate(self) -> Candidate {
        let id = first_text(&[self.id, self.candidate_id, self.candidate_id_legacy])
            .unwrap_or_default();
        // Ranking results carry no name; show the id instead of a blank cell.
        let name = self.name.unwrap_or_else(|| id.clone());
        Candidate {
            name,
            id,
            skills: self
                .skills
                .or(self.technical_skills)
                .map(StringList::into_vec)
                .unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            education: self.education.unwrap_or_default(),
            projects: self.projects.or(self.projects_legacy),
            applications: first_count(&[self.applications]).unwrap_or(0),
            status: self.status,
            rank: first_count(&[self.ranking, self.rank, self.rank_legacy]),
            score: [self.score, self.score_legacy]
                .iter()
                .flatten()
                .find_map(value_as_f64),
        }
    }
}

/// The shortlisting endpoint has answered in three shapes over time.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ShortlistEnvelope {
    /// `{"data": [[...]]}`: the first inner list is the ranking.
    Nested { data: Vec<Vec<CandidateRecord>> },
    Flat { data: Vec<CandidateRecord> },
    Bare(Vec<CandidateRecord>),
}

impl ShortlistEnvelope {
    /// Candidates ordered by rank; unranked entries keep their order at the end.
    pub fn into_ranked(self) -> Vec<Candidate> {
        let records = match self {
            ShortlistEnvelope::Nested { data } => data.into_iter().next().unwrap_or_default(),
            ShortlistEnvelope::Flat { data } => data,
            ShortlistEnvelope::Bare(records) => records,
        };
        let mut ranked: Vec<Candidate> = records
            .into_iter()
            .map(CandidateRecord::into_candidate)
            .collect();
        ranked.sort_by_key(|c| c.rank.unwrap_or(u32::MAX));
        ranked
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn first_text(candidates: &[Option<Value>]) -> Option<String> {
    candidates.iter().flatten().find_map(value_as_text)
}

fn first_count(candidates: &[Option<Value>]) -> Option<u32> {
    candidates.iter().flatten().find_map(value_as_count)
}
