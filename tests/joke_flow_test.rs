use anyhow::Result;
use httpmock::prelude::*;
use joke_teller::{ConsoleReporter, GatewayRobot, HttpJokeApi, JokeEngine, JokeError};

const JOKE: &str = "Chuck Norris can make a class that is both abstract and final.";

fn joke_api_mock(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/jokes/random");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "type": "success",
                "value": {
                    "id": 565,
                    "joke": JOKE,
                    "categories": ["nerdy"]
                }
            }));
    })
}

#[tokio::test]
async fn fetches_reports_and_speaks_the_joke() -> Result<()> {
    let api_server = MockServer::start();
    let gateway_server = MockServer::start();

    let api_mock = joke_api_mock(&api_server);

    let connect_mock = gateway_server.mock(|when, then| {
        when.method(POST)
            .path("/v1/connect")
            .json_body(serde_json::json!({"serial": "00e20142"}));
        then.status(200)
            .json_body(serde_json::json!({"session_id": "s-1"}));
    });
    let say_mock = gateway_server.mock(|when, then| {
        when.method(POST)
            .path("/v1/say_text")
            .json_body(serde_json::json!({"session_id": "s-1", "text": JOKE}));
        then.status(200);
    });
    let disconnect_mock = gateway_server.mock(|when, then| {
        when.method(POST)
            .path("/v1/disconnect")
            .json_body(serde_json::json!({"session_id": "s-1"}));
        then.status(200);
    });

    let engine = JokeEngine::new(
        HttpJokeApi::new(format!("{}/jokes/random", api_server.base_url())),
        ConsoleReporter::new(),
        GatewayRobot::new(gateway_server.base_url()),
        "00e20142".to_string(),
    );

    engine.run().await?;

    api_mock.assert();
    connect_mock.assert();
    say_mock.assert();
    disconnect_mock.assert();
    Ok(())
}

#[tokio::test]
async fn releases_the_session_when_speech_is_rejected() -> Result<()> {
    let api_server = MockServer::start();
    let gateway_server = MockServer::start();

    joke_api_mock(&api_server);

    gateway_server.mock(|when, then| {
        when.method(POST).path("/v1/connect");
        then.status(200)
            .json_body(serde_json::json!({"session_id": "s-2"}));
    });
    gateway_server.mock(|when, then| {
        when.method(POST).path("/v1/say_text");
        then.status(500);
    });
    let disconnect_mock = gateway_server.mock(|when, then| {
        when.method(POST)
            .path("/v1/disconnect")
            .json_body(serde_json::json!({"session_id": "s-2"}));
        then.status(200);
    });

    let engine = JokeEngine::new(
        HttpJokeApi::new(format!("{}/jokes/random", api_server.base_url())),
        ConsoleReporter::new(),
        GatewayRobot::new(gateway_server.base_url()),
        "00e20142".to_string(),
    );

    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, JokeError::DeviceError { .. }));
    // The session is released even though the speech request failed.
    disconnect_mock.assert();
    Ok(())
}
