//! HTTP client for the solver backend.
//!
//! Wraps the six REST endpoints the backend exposes: listing demo
//! datasets, fetching schedules, starting and stopping a solve, and
//! requesting a score analysis. All responses are decoded from JSON
//! except the solve-start call, which answers with a plain UUID string.

use crate::analysis::ScoreAnalysis;
use crate::error::ApiError;
use crate::schedule::Schedule;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

/// Client for one solver backend instance.
#[derive(Debug, Clone)]
pub struct SolverClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SolverClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// A missing trailing slash on the URL path is added so relative
    /// endpoint paths join underneath it instead of replacing the last
    /// segment.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url).map_err(|e| ApiError::BaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::BaseUrl {
            url: format!("{}{path}", self.base_url),
            message: e.to_string(),
        })
    }

    /// Send a request and return the response body as text.
    ///
    /// Non-success statuses become [`ApiError::Status`] with the body
    /// preserved for the error message.
    async fn request_text(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<String, ApiError> {
        let response = request
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }
        Ok(body)
    }

    fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    /// List the identifiers of the demo datasets the backend ships.
    pub async fn demo_data_ids(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("demo-data")?;
        tracing::debug!(%url, "fetching demo dataset ids");
        let body = self.request_text(self.http.get(url), "demo-data").await?;
        Self::decode("demo-data", &body)
    }

    /// Fetch the unsolved schedule of one demo dataset.
    pub async fn demo_data(&self, id: &str) -> Result<Schedule, ApiError> {
        let path = format!("demo-data/{id}");
        let url = self.endpoint(&path)?;
        tracing::debug!(%url, "fetching demo dataset");
        let body = self.request_text(self.http.get(url), &path).await?;
        Self::decode(&path, &body)
    }

    /// Fetch the current state of a submitted schedule, mid-solve or not.
    pub async fn schedule(&self, job: Uuid) -> Result<Schedule, ApiError> {
        let path = format!("schedules/{job}");
        let url = self.endpoint(&path)?;
        tracing::debug!(%url, "fetching schedule");
        let body = self.request_text(self.http.get(url), &path).await?;
        Self::decode(&path, &body)
    }

    /// Submit a schedule for solving and return the job id to poll.
    ///
    /// The backend answers with the id as plain text; some servers quote
    /// it, so surrounding quotes are stripped before parsing.
    pub async fn solve(&self, schedule: &Schedule) -> Result<Uuid, ApiError> {
        let url = self.endpoint("schedules")?;
        tracing::debug!(%url, "submitting schedule for solving");
        let body = self
            .request_text(self.http.post(url).json(schedule), "schedules")
            .await?;
        let id = body.trim().trim_matches('"');
        Uuid::parse_str(id).map_err(|_| ApiError::JobId(body.clone()))
    }

    /// Ask the backend to stop solving the given job.
    pub async fn stop_solving(&self, job: Uuid) -> Result<(), ApiError> {
        let path = format!("schedules/{job}");
        let url = self.endpoint(&path)?;
        tracing::debug!(%url, "stopping solver");
        self.request_text(self.http.delete(url), &path).await?;
        Ok(())
    }

    /// Request a per-constraint score breakdown for a solved schedule.
    pub async fn analyze(&self, schedule: &Schedule) -> Result<ScoreAnalysis, ApiError> {
        let url = self.endpoint("schedules/analyze")?;
        tracing::debug!(%url, "requesting score analysis");
        let body = self
            .request_text(self.http.put(url).json(schedule), "schedules/analyze")
            .await?;
        Self::decode("schedules/analyze", &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_schedule_json() -> &'static str {
        r#"{
            "score": null,
            "solverStatus": "NOT_SOLVING",
            "resources": [{"name": "Amy", "qualifications": ["Electrician"],
                           "unavailableDates": [], "undesiredDates": []}],
            "demands": [{"constructionSite": "Main street",
                         "start": "2027-02-01T06:00:00",
                         "end": "2027-02-01T14:00:00",
                         "requiredQualifications": "Electrician",
                         "resource": null}]
        }"#
    }

    #[tokio::test]
    async fn lists_demo_dataset_ids() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/demo-data")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["SMALL", "LARGE"]"#)
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        let ids = client.demo_data_ids().await.unwrap();
        assert_eq!(ids, ["SMALL", "LARGE"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetches_demo_schedule() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/demo-data/SMALL")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(demo_schedule_json())
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        let schedule = client.demo_data("SMALL").await.unwrap();
        assert_eq!(schedule.resources[0].name, "Amy");
        assert_eq!(schedule.demands.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn solve_parses_plain_text_job_id() {
        let job = Uuid::new_v4();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/schedules")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(job.to_string())
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        let schedule: Schedule = serde_json::from_str(demo_schedule_json()).unwrap();
        let returned = client.solve(&schedule).await.unwrap();
        assert_eq!(returned, job);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn solve_accepts_quoted_job_id() {
        let job = Uuid::new_v4();
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/schedules")
            .with_status(200)
            .with_body(format!("\"{job}\""))
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        let schedule: Schedule = serde_json::from_str(demo_schedule_json()).unwrap();
        assert_eq!(client.solve(&schedule).await.unwrap(), job);
    }

    #[tokio::test]
    async fn solve_rejects_non_uuid_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/schedules")
            .with_status(200)
            .with_body("not-a-job-id")
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        let schedule: Schedule = serde_json::from_str(demo_schedule_json()).unwrap();
        let err = client.solve(&schedule).await.unwrap_err();
        assert!(matches!(err, ApiError::JobId(body) if body == "not-a-job-id"));
    }

    #[tokio::test]
    async fn stop_solving_issues_delete() {
        let job = Uuid::new_v4();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", format!("/schedules/{job}").as_str())
            .with_status(200)
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        client.stop_solving(job).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn analyze_decodes_constraint_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/schedules/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"constraints": [{"name": "Overlap", "score": "-1hard",
                     "weight": "1hard", "matches": [{}]}]}"#,
            )
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        let schedule: Schedule = serde_json::from_str(demo_schedule_json()).unwrap();
        let analysis = client.analyze(&schedule).await.unwrap();
        assert_eq!(analysis.constraints[0].name, "Overlap");
    }

    #[tokio::test]
    async fn error_status_carries_endpoint_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/demo-data/MISSING")
            .with_status(404)
            .with_body("no such dataset")
            .create_async()
            .await;

        let client = SolverClient::new(&server.url()).unwrap();
        let err = client.demo_data("MISSING").await.unwrap_err();
        match err {
            ApiError::Status {
                endpoint,
                status,
                body,
            } => {
                assert_eq!(endpoint, "demo-data/MISSING");
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "no such dataset");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = SolverClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");

        let nested = SolverClient::new("http://localhost:8080/solver").unwrap();
        assert_eq!(
            nested.endpoint("demo-data").unwrap().as_str(),
            "http://localhost:8080/solver/demo-data"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = SolverClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::BaseUrl { .. }));
    }
}
