//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, ConsoleBackend};
use crate::core::models::{Candidate, Internship, InternshipStatus, LoginOutcome};

/// An in-memory backend with a couple of fixed records.
/// Accepts any login whose password is `"secret"`.
pub struct StubBackend;

pub fn sample_internships() -> Vec<Internship> {
    vec![
        Internship {
            id: "1".to_string(),
            title: "Software Development Intern".to_string(),
            company: "GAIL (India) Limited".to_string(),
            location: "New Delhi".to_string(),
            applicants: 245,
            capacity: Some(50),
            status: InternshipStatus::Open,
            skills: vec!["React".to_string(), "Node.js".to_string()],
            ..Default::default()
        },
        Internship {
            id: "2".to_string(),
            title: "Marketing Research Intern".to_string(),
            company: "Unilever India".to_string(),
            location: "Bangalore".to_string(),
            applicants: 156,
            status: InternshipStatus::Closed,
            ..Default::default()
        },
    ]
}

pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            education: "B.Tech Computer Science".to_string(),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            location: "Delhi".to_string(),
            applications: 3,
            rank: Some(1),
            ..Default::default()
        },
        Candidate {
            id: "2".to_string(),
            name: "Rahul Kumar".to_string(),
            education: "MBA Finance".to_string(),
            skills: vec!["Excel".to_string(), "SQL".to_string()],
            location: "Mumbai".to_string(),
            applications: 2,
            rank: Some(7),
            ..Default::default()
        },
    ]
}

#[async_trait]
impl ConsoleBackend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let success = password == "secret";
        Ok(LoginOutcome {
            success,
            username: username.to_string(),
            message: (!success).then(|| "Invalid credentials".to_string()),
        })
    }

    async fn internships(&self) -> Result<Vec<Internship>, ApiError> {
        Ok(sample_internships())
    }

    async fn internship(&self, id: &str) -> Result<Internship, ApiError> {
        sample_internships()
            .into_iter()
            .find(|i| i.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                body: "not found".to_string(),
            })
    }

    async fn applicants(&self, _internship_id: &str) -> Result<Vec<Candidate>, ApiError> {
        Ok(sample_candidates())
    }

    async fn candidates(&self) -> Result<Vec<Candidate>, ApiError> {
        Ok(sample_candidates())
    }

    async fn shortlist(&self, _internship_id: &str) -> Result<Vec<Candidate>, ApiError> {
        Ok(sample_candidates())
    }
}

/// Creates a test App with a StubBackend.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubBackend), "http://localhost:5000".to_string())
}
