//! HTTP client wrapper for the futures REST API.
//!
//! Every call is a single attempt. Order creation is not idempotent, so a
//! failed request is reported to the caller and never re-sent.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;
use url::form_urlencoded::Serializer;

use super::api_types::BinanceErrorResponse;
use super::config::BinanceConfig;
use super::error::BinanceError;
use super::signer::{RequestSigner, timestamp_ms};

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client for the Binance USD-M Futures API.
#[derive(Debug, Clone)]
pub struct BinanceHttpClient {
    client: Client,
    api_key: String,
    signer: RequestSigner,
    base_url: String,
    recv_window_ms: u64,
}

impl BinanceHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &BinanceConfig) -> Result<Self, BinanceError> {
        if config.credentials.is_incomplete() {
            return Err(BinanceError::MissingCredentials);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BinanceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.credentials.api_key().to_string(),
            signer: RequestSigner::new(config.credentials.api_secret()),
            base_url: config.base_url(),
            recv_window_ms: config.recv_window_ms,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an unsigned GET request.
    pub async fn get_public<T: DeserializeOwned>(&self, path: &str) -> Result<T, BinanceError> {
        let url = self.url(path)?;
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| BinanceError::Network(e.to_string()))?;
        let text = Self::read_success_body(response).await?;
        serde_json::from_str(&text).map_err(|e| BinanceError::JsonParse(e.to_string()))
    }

    /// Make a signed POST request with `params` plus `recvWindow` and `timestamp`.
    ///
    /// Returns the raw response body.
    pub async fn post_signed(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, BinanceError> {
        let mut url = self.url(path)?;
        let query = self.signed_query(params)?;
        url.set_query(Some(&query));

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| BinanceError::Network(e.to_string()))?;
        let text = Self::read_success_body(response).await?;
        serde_json::from_str(&text).map_err(|e| BinanceError::JsonParse(e.to_string()))
    }

    fn url(&self, path: &str) -> Result<Url, BinanceError> {
        Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| BinanceError::InvalidUrl(e.to_string()))
    }

    fn signed_query(&self, params: &[(&str, String)]) -> Result<String, BinanceError> {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in params {
            serializer.append_pair(key, value);
        }
        serializer.append_pair("recvWindow", &self.recv_window_ms.to_string());
        serializer.append_pair("timestamp", &timestamp_ms().to_string());
        self.signer.signed_query(&serializer.finish())
    }

    /// Read the body of a 2xx response, or turn anything else into an error.
    async fn read_success_body(response: Response) -> Result<String, BinanceError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BinanceError::Network(e.to_string()))?;

        if status.is_success() {
            return Ok(text);
        }

        match serde_json::from_str::<BinanceErrorResponse>(&text) {
            Ok(err) => Err(BinanceError::Api {
                code: err.code,
                message: err.msg,
            }),
            Err(_) => Err(BinanceError::Http {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::exchange::binance::config::{Credentials, ExchangeEnvironment};

    fn config() -> BinanceConfig {
        BinanceConfig::new(
            Credentials::new("key", "secret"),
            ExchangeEnvironment::Testnet,
        )
    }

    #[test]
    fn rejects_missing_credentials() {
        let config = BinanceConfig::new(Credentials::new("", "secret"), ExchangeEnvironment::Testnet);
        assert_eq!(
            BinanceHttpClient::new(&config).unwrap_err(),
            BinanceError::MissingCredentials
        );
    }

    #[test]
    fn uses_environment_base_url() {
        let client = BinanceHttpClient::new(&config()).unwrap();
        assert_eq!(client.base_url(), "https://testnet.binancefuture.com");
    }

    #[test]
    fn signed_query_layout() {
        let client = BinanceHttpClient::new(&config()).unwrap();
        let query = client
            .signed_query(&[("symbol", "BTCUSDT".to_string()), ("quantity", "0.01".to_string())])
            .unwrap();

        assert!(query.starts_with("symbol=BTCUSDT&quantity=0.01&recvWindow=5000&timestamp="));
        let (unsigned, signature) = query.rsplit_once("&signature=").unwrap();
        assert_eq!(signature, RequestSigner::new("secret").sign(unsigned).unwrap());
    }

    #[test]
    fn url_joins_path() {
        let client = BinanceHttpClient::new(&config()).unwrap();
        let url = client.url("/fapi/v1/order").unwrap();
        assert_eq!(url.as_str(), "https://testnet.binancefuture.com/fapi/v1/order");
    }
}
