//! End-to-end tests against a live JSON-RPC HTTP server.

use std::net::SocketAddr;

use axum::{Json, Router, routing::post};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

use farcall_client::{Client, ClientError, HttpCodec};
use farcall_protocol::{ProtocolError, RequestEnvelope};

/// JSON-RPC handler exposing the methods the tests call.
async fn rpc(Json(request): Json<RequestEnvelope>) -> Json<Value> {
    let reply = match request.method.as_str() {
        // Echoes its params back as the result.
        "Mock.Echo" => json!({
            "jsonrpc": "2.0",
            "result": request.params,
            "error": null,
            "id": request.id,
        }),
        // Succeeds without producing a result.
        "Mock.Fire" => json!({
            "jsonrpc": "2.0",
            "result": null,
            "error": null,
            "id": request.id,
        }),
        // Returns an error object missing the required fields.
        "Mock.Broken" => json!({
            "jsonrpc": "2.0",
            "result": null,
            "error": {"malformed": true},
            "id": request.id,
        }),
        other => json!({
            "jsonrpc": "2.0",
            "result": null,
            "error": {
                "code": -32601,
                "message": format!("method {other:?} not found"),
                "data": null,
            },
            "id": request.id,
        }),
    };
    Json(reply)
}

/// Spawns the test server and returns its RPC endpoint.
async fn spawn_server() -> Url {
    let app = Router::new().route("/rpc", post(rpc));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/rpc")).unwrap()
}

#[tokio::test]
async fn echo_round_trip() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    let reply: String = client.call("Mock.Echo", "Hello there").await.unwrap();
    assert_eq!(reply, "Hello there");
}

#[tokio::test]
async fn echo_round_trips_structured_values() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    let sent = vec!["a".to_string(), "b".to_string()];
    let reply: Vec<String> = client.call("Mock.Echo", &sent).await.unwrap();
    assert_eq!(reply, sent);
}

#[tokio::test]
async fn unknown_method_fails_the_call() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    let reply: Result<String, _> = client.call("Mock.ThisDoesNotExist", "Hello there").await;
    let err = reply.unwrap_err();
    assert!(matches!(err, ClientError::Remote(_)));
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn non_2xx_status_short_circuits_the_call() {
    let endpoint = spawn_server().await;
    let mut wrong_path = endpoint.clone();
    wrong_path.set_path("/nowhere");
    let mut client = Client::new(HttpCodec::new(wrong_path));

    let reply: Result<String, _> = client.call("Mock.Echo", "Hello there").await;
    let err = reply.unwrap_err();
    assert!(matches!(err, ClientError::Remote(_)));
    assert_eq!(err.to_string(), "404 Not Found");
}

#[tokio::test]
async fn null_result_with_expected_reply_fails() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    let reply: Result<String, _> = client.call("Mock.Fire", "payload").await;
    assert!(matches!(
        reply.unwrap_err(),
        ClientError::Protocol(ProtocolError::NullResult)
    ));
}

#[tokio::test]
async fn null_result_discarded_is_success() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    client.call_no_reply("Mock.Fire", "payload").await.unwrap();
}

#[tokio::test]
async fn sequential_calls_each_get_their_own_reply() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    for argument in ["first", "second", "third"] {
        let reply: String = client.call("Mock.Echo", argument).await.unwrap();
        assert_eq!(reply, argument);
    }
}

#[tokio::test]
async fn malformed_remote_error_is_a_protocol_error() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    let reply: Result<String, _> = client.call("Mock.Broken", "payload").await;
    assert!(matches!(
        reply.unwrap_err(),
        ClientError::Protocol(ProtocolError::ErrorObject(_))
    ));
}

#[tokio::test]
async fn closed_client_rejects_further_calls() {
    let endpoint = spawn_server().await;
    let mut client = Client::new(HttpCodec::new(endpoint));

    let reply: String = client.call("Mock.Echo", "one last call").await.unwrap();
    assert_eq!(reply, "one last call");

    client.close().unwrap();
    let reply: Result<String, _> = client.call("Mock.Echo", "too late").await;
    assert!(matches!(reply.unwrap_err(), ClientError::Closed));
}
