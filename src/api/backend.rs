use async_trait::async_trait;
use log::info;

use super::client::{ApiClient, ApiError};
use super::types::{CandidateRecord, InternshipRecord, LoginRequest, LoginResponse, ShortlistEnvelope};
use crate::core::models::{Candidate, Internship, LoginOutcome};

/// Everything the console asks of the matching backend.
///
/// One method per endpoint. Implementations return domain records, so
/// callers never see wire field names.
#[async_trait]
pub trait ConsoleBackend: Send + Sync {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// `POST /api/login`
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError>;

    /// `GET /api/internships`
    async fn internships(&self) -> Result<Vec<Internship>, ApiError>;

    /// `GET /api/internships/{id}`
    async fn internship(&self, id: &str) -> Result<Internship, ApiError>;

    /// `GET /api/internships/{id}/candidates`
    async fn applicants(&self, internship_id: &str) -> Result<Vec<Candidate>, ApiError>;

    /// `GET /api/candidates`
    async fn candidates(&self) -> Result<Vec<Candidate>, ApiError>;

    /// `GET /api/shortlist/{id}`, ranked best first.
    async fn shortlist(&self, internship_id: &str) -> Result<Vec<Candidate>, ApiError>;
}

#[async_trait]
impl ConsoleBackend for ApiClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        info!("Login attempt for user '{}'", username);
        let response: LoginResponse = self
            .post_json("/api/login", &LoginRequest { username, password })
            .await?;
        Ok(response.into_outcome(username))
    }

    async fn internships(&self) -> Result<Vec<Internship>, ApiError> {
        let records: Vec<InternshipRecord> = self.get_json("/api/internships").await?;
        Ok(records.into_iter().map(InternshipRecord::into_internship).collect())
    }

    async fn internship(&self, id: &str) -> Result<Internship, ApiError> {
        let record: InternshipRecord = self
            .get_json(&format!("/api/internships/{}", id.trim()))
            .await?;
        Ok(record.into_internship())
    }

    async fn applicants(&self, internship_id: &str) -> Result<Vec<Candidate>, ApiError> {
        let records: Vec<CandidateRecord> = self
            .get_json(&format!("/api/internships/{}/candidates", internship_id.trim()))
            .await?;
        Ok(records.into_iter().map(CandidateRecord::into_candidate).collect())
    }

    async fn candidates(&self) -> Result<Vec<Candidate>, ApiError> {
        let records: Vec<CandidateRecord> = self.get_json("/api/candidates").await?;
        Ok(records.into_iter().map(CandidateRecord::into_candidate).collect())
    }

    async fn shortlist(&self, internship_id: &str) -> Result<Vec<Candidate>, ApiError> {
        let envelope: ShortlistEnvelope = self
            .get_json(&format!("/api/shortlist/{}", internship_id.trim()))
            .await?;
        Ok(envelope.into_ranked())
    }
}
