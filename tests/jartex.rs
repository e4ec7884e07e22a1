use pika_api::jartex::{Gamemode, Interval, LeaderboardOptions, LeaderboardType, Mode, ProfileLeaderboardOptions};
use pika_api::{JartexNetwork, PikaApiError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> JartexNetwork {
    JartexNetwork::with_base_urls(
        format!("{}/api", server.uri()),
        format!("{}/count/play.jartexnetwork.com", server.uri()),
    )
}

#[tokio::test]
async fn leaderboard_uses_jartex_wire_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leaderboards"))
        .and(query_param("type", "prison"))
        .and(query_param("stat", "playtime"))
        .and(query_param("interval", "monthly"))
        .and(query_param("mode", "ALL_MODES"))
        .and(query_param("limit", "15"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "metadata": { "total": 9 } })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut options = LeaderboardOptions::new(Gamemode::Prison, LeaderboardType::Playtime);
    options.interval = Some(Interval::Monthly);
    let value = client.get_leaderboard(options).await.unwrap();
    assert_eq!(value["metadata"]["total"], 9);
}

#[tokio::test]
async fn profile_leaderboard_aggregates_all_violations() {
    let server = MockServer::start().await;

    let client = client_for(&server);
    let mut options = ProfileLeaderboardOptions::new("name-with-dash", Gamemode::BedWars);
    options.mode = Some(Mode::Doubles);
    options.limit = Some(0);
    match client.get_profile_leaderboard(options).await {
        Err(PikaApiError::Validation(messages)) => assert_eq!(messages.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn profile_is_fetched_by_username() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/TejasIsPro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "username": "TejasIsPro" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let value = client.get_profile("TejasIsPro").await.unwrap();
    assert_eq!(value["username"], "TejasIsPro");
}

#[tokio::test]
async fn count_parses_numeric_updated_at() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/count/play.jartexnetwork.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "play.jartexnetwork.com",
            "updated_at": 1_704_067_200_000_i64,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let count = client.get_count().await.unwrap();
    assert_eq!(count.data["ip"], "play.jartexnetwork.com");
    assert!(count.updated_at_date.is_some());
}

#[tokio::test]
async fn guild_lookup_hits_clans_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clans/BloodLust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "BloodLust" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let value = client.get_guild("BloodLust").await.unwrap();
    assert_eq!(value["name"], "BloodLust");
}
