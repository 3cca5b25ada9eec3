use pr_review_helper::errors::ReviewError;
use pr_review_helper::services::hosting::github::GitHubClient;
use pr_review_helper::structs::config::github_config::GitHubConfig;
use pr_review_helper::traits::hosting_provider::HostingProvider;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: Option<&str>) -> GitHubClient {
    let config = GitHubConfig {
        api_base_url: server.uri(),
        token: token.map(|t| t.to_string()),
        ..GitHubConfig::default()
    };
    GitHubClient::new(&config).unwrap()
}

#[tokio::test]
async fn lists_open_pull_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/pulls"))
        .and(query_param("state", "open"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "number": 12,
                "title": "Add caching layer",
                "user": { "login": "octocat" },
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-02T10:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let pulls = client(&server, None).list_pull_requests("acme", "widgets").await.unwrap();

    assert_eq!(pulls.len(), 1);
    assert_eq!(pulls[0].number, 12);
    assert_eq!(pulls[0].user.as_deref(), Some("octocat"));
}

#[tokio::test]
async fn fetches_and_decodes_changed_files() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/pulls/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 7,
            "title": "Refactor",
            "head": { "sha": "abc123" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/pulls/7/files"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "filename": "src/lib.rs", "status": "modified" },
            { "filename": "old.rs", "status": "removed" },
            { "filename": "assets/big.bin", "status": "added" },
            { "filename": "src/broken.rs", "status": "modified" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/contents/src/lib.rs"))
        .and(query_param("ref", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "Zm4gbWFpbigp\nIHt9\n",
            "encoding": "base64",
            "size": 12
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/contents/old.rs"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/contents/assets/big.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "",
            "encoding": "base64",
            "size": 2_000_000
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/contents/src/broken.rs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let files = client(&server, None).fetch_files("acme", "widgets", 7).await.unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["src/lib.rs", "old.rs", "assets/big.bin", "src/broken.rs"]);
    assert_eq!(files[0].content.as_deref(), Some("fn main() {}"));
    assert_eq!(files[1].content, None);
    assert_eq!(files[2].content, None);
    assert_eq!(files[3].content, None);
}

#[tokio::test]
async fn missing_pull_request_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets/pulls/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&server)
        .await;

    let result = client(&server, None).fetch_files("acme", "widgets", 404).await;
    match result {
        Err(ReviewError::FetchError { repository, pr_number, .. }) => {
            assert_eq!(repository, "acme/widgets");
            assert_eq!(pr_number, 404);
        }
        other => panic!("expected FetchError, got {:?}", other),
    }
}

#[tokio::test]
async fn posts_comment_with_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/issues/7/comments"))
        .and(header("authorization", "Bearer t0ken"))
        .and(body_partial_json(json!({ "body": "## Automated Code Review" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, Some("t0ken"))
        .post_comment("acme", "widgets", 7, "## Automated Code Review")
        .await
        .unwrap();
}

#[tokio::test]
async fn comment_errors_map_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/issues/1/comments"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/widgets/issues/2/comments"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let github = client(&server, Some("t0ken"));
    assert!(matches!(
        github.post_comment("acme", "widgets", 1, "x").await,
        Err(ReviewError::PermissionError { .. })
    ));
    assert!(matches!(
        github.post_comment("acme", "widgets", 2, "x").await,
        Err(ReviewError::AuthError { .. })
    ));
}

#[tokio::test]
async fn commenting_without_token_never_calls_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let result = client(&server, None).post_comment("acme", "widgets", 7, "body").await;
    assert!(matches!(result, Err(ReviewError::CredentialMissing { .. })));
}
