//! Provider round-trip tests against a mock hosting API.
//!
//! Each test points a provider client at a wiremock server and drives
//! the webhook primitives through a `Repository` handle, verifying the
//! wire shape each provider expects.

use scm::providers::bitbucket::Bitbucket;
use scm::providers::github::GitHub;
use scm::providers::gitlab::GitLab;
use scm::{Credential, Repository};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Resolve the repository name the way `Repository::new` does, but
/// against a client bound to the mock server.
fn github_repo(server: &MockServer, raw_url: &str, token: &str) -> Repository {
    let parsed = Url::parse(raw_url).unwrap();
    let name = scm::resolver::resolve(&parsed).unwrap();
    let client = GitHub::with_base_url(server.uri(), Credential::new(token)).unwrap();
    Repository::from_parts(Box::new(client), name)
}

#[tokio::test]
async fn github_create_webhook_subscribes_to_push_and_pull_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/repos/my-org/my-repo/hooks"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_partial_json(json!({
            "name": "web",
            "active": true,
            "events": ["push", "pull_request"],
            "config": {
                "url": "https://listener.example/hook",
                "content_type": "json",
                "secret": "s3cr3t"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "events": ["push", "pull_request"],
            "config": { "url": "https://listener.example/hook" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = github_repo(&server, "https://github.com/my-org/my-repo.git", "tok");
    assert_eq!(repo.name().as_str(), "my-org/my-repo");

    let id = repo
        .create_webhook("https://listener.example/hook", "s3cr3t")
        .await
        .unwrap();
    assert!(!id.is_empty());
    assert_eq!(id, "42");
}

#[tokio::test]
async fn github_list_returns_only_matching_targets_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/my-org/my-repo/hooks"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "events": ["push"], "config": { "url": "https://listener.example/hook" } },
            { "id": 2, "events": ["push"], "config": { "url": "https://other.example/hook" } },
            { "id": 3, "events": ["push"], "config": { "url": "https://listener.example/hook" } }
        ])))
        .mount(&server)
        .await;

    let repo = github_repo(&server, "https://github.com/my-org/my-repo", "tok");
    let ids = repo
        .list_webhooks("https://listener.example/hook")
        .await
        .unwrap();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn github_list_with_no_matches_is_empty_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/my-org/my-repo/hooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo = github_repo(&server, "https://github.com/my-org/my-repo", "tok");
    let ids = repo
        .list_webhooks("https://listener.example/hook")
        .await
        .unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn github_list_failure_names_the_repository() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/my-org/my-repo/hooks"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let repo = github_repo(&server, "https://github.com/my-org/my-repo", "tok");
    let err = repo
        .list_webhooks("https://listener.example/hook")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("my-org/my-repo"));
}

#[tokio::test]
async fn github_delete_stops_at_first_failure() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/my-org/my-repo/hooks/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/repos/my-org/my-repo/hooks/2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&server)
        .await;
    // The ID after the failure must never be attempted.
    Mock::given(method("DELETE"))
        .and(path("/repos/my-org/my-repo/hooks/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let repo = github_repo(&server, "https://github.com/my-org/my-repo", "tok");
    let ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
    let err = repo.delete_webhooks(&ids).await.unwrap_err();

    assert_eq!(err.deleted, vec!["1"]);
    assert_eq!(err.failed, "2");
}

#[tokio::test]
async fn github_delete_all_succeeding_returns_every_id() {
    let server = MockServer::start().await;

    for id in ["1", "2"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/repos/my-org/my-repo/hooks/{id}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let repo = github_repo(&server, "https://github.com/my-org/my-repo", "tok");
    let ids = vec!["1".to_string(), "2".to_string()];
    let deleted = repo.delete_webhooks(&ids).await.unwrap();
    assert_eq!(deleted, vec!["1", "2"]);
}

#[tokio::test]
async fn gitlab_round_trip_uses_encoded_project_path_and_private_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/my-org%2Fmy-repo/hooks"))
        .and(header("PRIVATE-TOKEN", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "url": "https://listener.example/hook",
              "push_events": true, "merge_requests_events": true }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/projects/my-org%2Fmy-repo/hooks"))
        .and(header("PRIVATE-TOKEN", "tok"))
        .and(body_partial_json(json!({
            "url": "https://listener.example/hook",
            "token": "s3cr3t",
            "push_events": true,
            "merge_requests_events": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 8, "url": "https://listener.example/hook",
            "push_events": true, "merge_requests_events": true
        })))
        .mount(&server)
        .await;

    let parsed = Url::parse("https://gitlab.example.com/my-org/my-repo.git").unwrap();
    let name = scm::resolver::resolve(&parsed).unwrap();
    let client = GitLab::with_base_url(server.uri(), Credential::new("tok")).unwrap();
    let repo = Repository::from_parts(Box::new(client), name);

    let ids = repo
        .list_webhooks("https://listener.example/hook")
        .await
        .unwrap();
    assert_eq!(ids, vec!["7"]);

    let id = repo
        .create_webhook("https://listener.example/hook", "s3cr3t")
        .await
        .unwrap();
    assert_eq!(id, "8");
}

#[tokio::test]
async fn gitlab_delete_targets_the_hook_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/my-org%2Fmy-repo/hooks/7"))
        .and(header("PRIVATE-TOKEN", "tok"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let parsed = Url::parse("https://gitlab.example.com/my-org/my-repo").unwrap();
    let name = scm::resolver::resolve(&parsed).unwrap();
    let client = GitLab::with_base_url(server.uri(), Credential::new("tok")).unwrap();
    let repo = Repository::from_parts(Box::new(client), name);

    let deleted = repo.delete_webhooks(&["7".to_string()]).await.unwrap();
    assert_eq!(deleted, vec!["7"]);
}

#[tokio::test]
async fn bitbucket_round_trip_unwraps_the_paged_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repositories/my-org/my-repo/hooks"))
        .and(header("Authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [
                { "uuid": "{aa-11}", "url": "https://listener.example/hook",
                  "events": ["repo:push"] },
                { "uuid": "{bb-22}", "url": "https://other.example/hook",
                  "events": ["repo:push"] }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repositories/my-org/my-repo/hooks"))
        .and(body_partial_json(json!({
            "url": "https://listener.example/hook",
            "active": true,
            "events": ["repo:push", "pullrequest:created", "pullrequest:updated"],
            "secret": "s3cr3t"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": "{cc-33}",
            "url": "https://listener.example/hook",
            "events": ["repo:push", "pullrequest:created", "pullrequest:updated"]
        })))
        .mount(&server)
        .await;

    let parsed = Url::parse("https://bitbucket.org/my-org/my-repo.git").unwrap();
    let name = scm::resolver::resolve(&parsed).unwrap();
    let client = Bitbucket::with_base_url(server.uri(), Credential::new("tok")).unwrap();
    let repo = Repository::from_parts(Box::new(client), name);

    let ids = repo
        .list_webhooks("https://listener.example/hook")
        .await
        .unwrap();
    assert_eq!(ids, vec!["{aa-11}"]);

    let id = repo
        .create_webhook("https://listener.example/hook", "s3cr3t")
        .await
        .unwrap();
    assert_eq!(id, "{cc-33}");
}
