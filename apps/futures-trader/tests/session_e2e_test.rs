//! E2E Tests for the Interactive Session
//!
//! Drives a full session from scripted terminal input through the Binance
//! adapter to a local HTTP server, with events written to a log file.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::io::Cursor;
use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use futures_trader::infrastructure::cli::{Prompter, SessionSummary, TradingSession};
use futures_trader::infrastructure::telemetry::file_subscriber;
use futures_trader::{
    BinanceConfig, BinanceFuturesAdapter, Credentials, ExchangeEnvironment, PlaceOrderUseCase,
};

async fn exchange() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v1/exchangeInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbols": [{"symbol": "BTCUSDT", "status": "TRADING"}]
        })))
        .mount(&server)
        .await;
    server
}

fn use_case(server: &MockServer) -> PlaceOrderUseCase<BinanceFuturesAdapter> {
    let config = BinanceConfig::new(Credentials::new("key", "secret"), ExchangeEnvironment::Testnet)
        .with_base_url(server.uri());
    PlaceOrderUseCase::new(Arc::new(BinanceFuturesAdapter::new(config).unwrap()))
}

#[tokio::test]
async fn session_places_orders_and_logs_each_attempt() {
    let server = exchange().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("type", "LIMIT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orderId": 1001})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("type", "MARKET"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"code": -2019, "msg": "Margin is insufficient."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("trading_bot.log");
    let subscriber = file_subscriber(&log_path, EnvFilter::new("futures_trader=info")).unwrap();
    let _guard = tracing::subscriber::set_default(subscriber);

    let input = "\
btcusdt
buy
limit
0.5
30000
y
BTCUSDT
sell
market
1
n
";
    let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = TradingSession::new(use_case(&server), prompter);

    let summary = session.run().await.unwrap();

    assert_eq!(
        summary,
        SessionSummary {
            submitted: 2,
            placed: 1,
            rejected_inputs: 0
        }
    );

    let screen = String::from_utf8_lossy(session.prompter().output()).into_owned();
    assert!(screen.contains("Order ID: 1001"));
    assert!(screen.contains("Margin is insufficient."));

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Initialized futures client"));
    assert!(log.contains("Order placed"));
    assert!(log.contains("1001"));
    assert!(log.contains("Exchange rejected order"));
    assert!(log.contains("-2019"));
}

#[tokio::test]
async fn bad_input_never_reaches_the_exchange() {
    let server = exchange().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orderId": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let input = "\
DOGEUSDT
BTCUSDT
LONG
BTCUSDT
BUY
STOP
BTCUSDT
BUY
LIMIT
ten
BTCUSDT
BUY
STOP_LIMIT
1
29000
-5
";
    let prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = TradingSession::new(use_case(&server), prompter);

    let summary = session.run().await.unwrap();

    assert_eq!(summary.submitted, 0);
    assert_eq!(summary.rejected_inputs, 5);
    let screen = String::from_utf8_lossy(session.prompter().output()).into_owned();
    assert!(screen.contains("Invalid symbol 'DOGEUSDT'"));
    assert!(screen.contains("Invalid side 'LONG'"));
    assert!(screen.contains("Invalid order type 'STOP'"));
    assert!(screen.contains("Invalid quantity 'ten'"));
    assert!(screen.contains("Invalid price '-5': must be greater than zero"));
}
