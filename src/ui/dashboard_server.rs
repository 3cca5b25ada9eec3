use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::{json, Map, Value};
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::Filter;
use crate::config::constants::MAX_SERIES_DAYS;
use crate::enums::metric_kind::MetricKind;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::comment_formatter::CommentFormatter;
use crate::services::mock_generator::MockGenerator;
use crate::services::review_orchestrator::ReviewOrchestrator;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::comment_request::CommentRequest;

type JsonReply = WithStatus<Json>;

/// JSON API behind the metrics dashboard.
pub struct DashboardServer {
    orchestrator: Arc<ReviewOrchestrator>,
    default_days: u32,
}

impl DashboardServer {
    pub fn new(orchestrator: Arc<ReviewOrchestrator>, default_days: u32) -> Self {
        Self { orchestrator, default_days }
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let orchestrator = Arc::clone(&self.orchestrator);
        let orchestrator_filter = warp::any().map(move || Arc::clone(&orchestrator));
        let default_days = self.default_days;

        let metrics = warp::path!("api" / "metrics")
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and(warp::any().map(move || default_days))
            .and_then(metrics_handler);

        let pulls = warp::path!("api" / "pulls")
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and(orchestrator_filter.clone())
            .and_then(pulls_handler);

        let analyze = warp::path!("api" / "analyze")
            .and(warp::post())
            .and(warp::body::json())
            .and(orchestrator_filter.clone())
            .and_then(analyze_handler);

        let comment = warp::path!("api" / "comment")
            .and(warp::post())
            .and(warp::body::json())
            .and(orchestrator_filter)
            .and_then(comment_handler);

        metrics
            .or(pulls)
            .or(analyze)
            .or(comment)
            .with(warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST"]))
    }

    /// Serves until Ctrl-C.
    pub async fn run(&self, port: u16, open_browser: bool) -> ReviewResult<()> {
        let addr: SocketAddr = ([127, 0, 0, 1], port).into();

        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, async {
                tokio::signal::ctrl_c().await.ok();
            })
            .map_err(|e| ReviewError::system_error("start dashboard server", &e.to_string()))?;

        let url = format!("http://{}", bound);
        log::info!("🌐 Dashboard API listening on {}", url);
        log::info!("   GET  {}/api/metrics?repositoryId=owner/repo&type=quality", url);

        if open_browser {
            if let Err(e) = webbrowser::open(&format!("{}/api/metrics?repositoryId=demo&type=quality", url)) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        server.await;
        log::info!("🛑 Dashboard server stopped");
        Ok(())
    }
}

fn error_reply(status: StatusCode, message: &str) -> JsonReply {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

fn error_status(error: &ReviewError) -> StatusCode {
    match error {
        ReviewError::AuthError { .. } | ReviewError::CredentialMissing { .. } => StatusCode::UNAUTHORIZED,
        ReviewError::PermissionError { .. } => StatusCode::FORBIDDEN,
        ReviewError::NotFoundError { .. } => StatusCode::NOT_FOUND,
        ReviewError::UserInputError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the `{"data": [...]}` body for a metrics query.
pub fn metrics_payload(params: &HashMap<String, String>, default_days: u32) -> Result<Value, String> {
    let repository_id = params
        .get("repositoryId")
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| "Repository ID is required".to_string())?;

    let kind: MetricKind = params
        .get("type")
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| "Metric type is required".to_string())?
        .parse()
        .map_err(|_| "Invalid metric type".to_string())?;

    let days = params
        .get("days")
        .and_then(|d| d.trim().parse::<u32>().ok())
        .unwrap_or(default_days)
        .min(MAX_SERIES_DAYS);

    let data: Vec<Value> = if kind.is_series() {
        MockGenerator::series(repository_id, days, kind)
            .into_iter()
            .map(|point| {
                let mut entry = Map::new();
                entry.insert("date".to_string(), Value::String(point.date.to_rfc3339()));
                entry.insert(kind.value_key().to_string(), Value::from(point.value));
                Value::Object(entry)
            })
            .collect()
    } else {
        MockGenerator::issue_counts(repository_id)
            .into_iter()
            .map(|issue| json!({ "name": issue.name, "count": issue.count }))
            .collect()
    };

    Ok(json!({ "data": data }))
}

async fn metrics_handler(params: HashMap<String, String>, default_days: u32) -> Result<JsonReply, Infallible> {
    match metrics_payload(&params, default_days) {
        Ok(payload) => Ok(warp::reply::with_status(warp::reply::json(&payload), StatusCode::OK)),
        Err(message) => Ok(error_reply(StatusCode::BAD_REQUEST, &message)),
    }
}

async fn pulls_handler(params: HashMap<String, String>, orchestrator: Arc<ReviewOrchestrator>) -> Result<JsonReply, Infallible> {
    let (owner, repo) = match (params.get("owner"), params.get("repo")) {
        (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => (owner, repo),
        _ => return Ok(error_reply(StatusCode::BAD_REQUEST, "Both owner and repo are required")),
    };

    match orchestrator.host().list_pull_requests(owner, repo).await {
        Ok(pulls) => Ok(warp::reply::with_status(warp::reply::json(&json!({ "pulls": pulls })), StatusCode::OK)),
        Err(e) => {
            log::warn!("⚠️ Listing pull requests failed: {}", e);
            Ok(error_reply(error_status(&e), &e.to_string()))
        }
    }
}

async fn analyze_handler(request: AnalyzeRequest, orchestrator: Arc<ReviewOrchestrator>) -> Result<JsonReply, Infallible> {
    log::info!("🔍 Dashboard analysis of {}/{}#{}", request.owner, request.repo, request.pr_number);
    let report = orchestrator
        .analyze_detailed(&request.owner, &request.repo, request.pr_number)
        .await;
    Ok(warp::reply::with_status(warp::reply::json(&report), StatusCode::OK))
}

async fn comment_handler(request: CommentRequest, orchestrator: Arc<ReviewOrchestrator>) -> Result<JsonReply, Infallible> {
    let body = CommentFormatter::render(&request.analysis);

    match orchestrator.host().post_comment(&request.owner, &request.repo, request.pr_number, &body).await {
        Ok(()) => Ok(warp::reply::with_status(warp::reply::json(&json!({ "success": true })), StatusCode::OK)),
        Err(e) => {
            log::warn!("⚠️ Posting comment failed: {}", e);
            Ok(error_reply(error_status(&e), &e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::structs::config::analysis_config::AnalysisConfig;
    use crate::structs::pr_file::PrFile;
    use crate::structs::pull_request::PullRequest;
    use crate::traits::hosting_provider::HostingProvider;

    #[derive(Default)]
    struct RecordingHost {
        comments: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HostingProvider for RecordingHost {
        async fn list_pull_requests(&self, _owner: &str, _repo: &str) -> ReviewResult<Vec<PullRequest>> {
            Ok(vec![PullRequest {
                number: 12,
                title: "Add cache".to_string(),
                user: Some("octocat".to_string()),
                created_at: String::new(),
                updated_at: String::new(),
            }])
        }

        async fn fetch_files(&self, owner: &str, repo: &str, pr_number: u64) -> ReviewResult<Vec<PrFile>> {
            Err(ReviewError::fetch_error(&format!("{}/{}", owner, repo), pr_number, "offline"))
        }

        async fn post_comment(&self, _owner: &str, _repo: &str, _pr_number: u64, body: &str) -> ReviewResult<()> {
            self.comments.lock().unwrap().push(body.to_string());
            Ok(())
        }
    }

    fn server(host: Arc<RecordingHost>) -> DashboardServer {
        let orchestrator = ReviewOrchestrator::new(
            host,
            Err(ReviewError::credential_missing("AWS_BEARER_TOKEN_BEDROCK", "model invocation")),
            AnalysisConfig::default(),
        );
        DashboardServer::new(Arc::new(orchestrator), 30)
    }

    fn body_json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn quality_series_has_one_point_per_day() {
        let routes = server(Arc::new(RecordingHost::default())).routes();
        let response = warp::test::request()
            .method("GET")
            .path("/api/metrics?repositoryId=acme%2Fwidgets&type=quality&days=7")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let data = body_json(response.body())["data"].as_array().cloned().unwrap();
        assert_eq!(data.len(), 8);
        assert!(data.iter().all(|p| p.get("score").is_some() && p.get("date").is_some()));
    }

    #[tokio::test]
    async fn days_default_when_missing() {
        let routes = server(Arc::new(RecordingHost::default())).routes();
        let response = warp::test::request()
            .path("/api/metrics?repositoryId=r&type=complexity")
            .reply(&routes)
            .await;

        let data = body_json(response.body())["data"].as_array().cloned().unwrap();
        assert_eq!(data.len(), 31);
        assert!(data[0].get("complexity").is_some());
    }

    #[tokio::test]
    async fn issues_are_named_counts() {
        let routes = server(Arc::new(RecordingHost::default())).routes();
        let response = warp::test::request()
            .path("/api/metrics?repositoryId=r&type=issues")
            .reply(&routes)
            .await;

        let data = body_json(response.body())["data"].as_array().cloned().unwrap();
        let names: Vec<&str> = data.iter().filter_map(|d| d["name"].as_str()).collect();
        assert_eq!(names, vec!["Security", "Performance", "Complexity", "Code Style", "Documentation"]);
    }

    #[tokio::test]
    async fn bad_queries_are_rejected() {
        let routes = server(Arc::new(RecordingHost::default())).routes();

        let missing_id = warp::test::request().path("/api/metrics?type=quality").reply(&routes).await;
        assert_eq!(missing_id.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(missing_id.body())["error"], "Repository ID is required");

        let bad_type = warp::test::request().path("/api/metrics?repositoryId=r&type=velocity").reply(&routes).await;
        assert_eq!(bad_type.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(bad_type.body())["error"], "Invalid metric type");
    }

    #[tokio::test]
    async fn analyze_degrades_when_files_cannot_be_fetched() {
        let routes = server(Arc::new(RecordingHost::default())).routes();
        let response = warp::test::request()
            .method("POST")
            .path("/api/analyze")
            .json(&json!({ "owner": "acme", "repo": "widgets", "prNumber": 7 }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let report = body_json(response.body());
        assert_eq!(report["source"]["kind"], "mock");
        assert_eq!(report["result"]["riskyFiles"], json!(["src/components/UserProfile.tsx", "lib/api/auth.ts"]));
        assert_eq!(report["result"]["securityIssues"], json!([]));
    }

    #[tokio::test]
    async fn comment_is_rendered_and_posted() {
        let host = Arc::new(RecordingHost::default());
        let routes = server(Arc::clone(&host)).routes();
        let response = warp::test::request()
            .method("POST")
            .path("/api/comment")
            .json(&json!({
                "owner": "acme",
                "repo": "widgets",
                "prNumber": 7,
                "analysis": {
                    "summary": "Fine",
                    "riskyFiles": [],
                    "complexFunctions": [],
                    "refactoringSuggestions": ["Split foo"],
                    "securityIssues": []
                }
            }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let comments = host.comments.lock().unwrap();
        assert_eq!(comments.len(), 1);
        assert!(comments[0].contains("- Split foo"));
    }

    #[tokio::test]
    async fn pulls_need_owner_and_repo() {
        let routes = server(Arc::new(RecordingHost::default())).routes();

        let missing = warp::test::request().path("/api/pulls?owner=acme").reply(&routes).await;
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let listed = warp::test::request().path("/api/pulls?owner=acme&repo=widgets").reply(&routes).await;
        assert_eq!(body_json(listed.body())["pulls"][0]["number"], 12);
    }
}
