//! Binance futures adapter implementing `FuturesExchangePort`.

use async_trait::async_trait;

use crate::application::ports::{
    ExchangeError, ExchangeInfo, FuturesExchangePort, OrderAck, OrderParams,
};

use super::api_types::{BinanceExchangeInfo, order_ack_from_value};
use super::config::{BinanceConfig, ExchangeEnvironment};
use super::error::BinanceError;
use super::http_client::BinanceHttpClient;

const EXCHANGE_INFO_PATH: &str = "/fapi/v1/exchangeInfo";
const ORDER_PATH: &str = "/fapi/v1/order";

/// Binance USD-M Futures adapter.
///
/// Implements `FuturesExchangePort` for the futures REST API.
#[derive(Debug, Clone)]
pub struct BinanceFuturesAdapter {
    client: BinanceHttpClient,
    environment: ExchangeEnvironment,
}

impl BinanceFuturesAdapter {
    /// Create a new adapter. Fails if the key or secret is blank.
    pub fn new(config: BinanceConfig) -> Result<Self, BinanceError> {
        let client = BinanceHttpClient::new(&config)?;
        tracing::info!(
            environment = %config.environment,
            base_url = %client.base_url(),
            "Initialized futures client"
        );
        Ok(Self {
            client,
            environment: config.environment,
        })
    }

    /// Environment this adapter talks to.
    #[must_use]
    pub const fn environment(&self) -> ExchangeEnvironment {
        self.environment
    }
}

#[async_trait]
impl FuturesExchangePort for BinanceFuturesAdapter {
    async fn exchange_info(&self) -> Result<ExchangeInfo, ExchangeError> {
        let info: BinanceExchangeInfo = self
            .client
            .get_public(EXCHANGE_INFO_PATH)
            .await
            .map_err(ExchangeError::from)?;

        tracing::debug!(symbols = info.symbols.len(), "Fetched exchange info");

        Ok(info.into_exchange_info())
    }

    async fn new_order(&self, params: &OrderParams) -> Result<OrderAck, ExchangeError> {
        if !self.environment.is_testnet() {
            tracing::warn!(
                symbol = %params.symbol,
                "Submitting PRODUCTION order - this will execute real trades"
            );
        }

        let raw = self
            .client
            .post_signed(ORDER_PATH, &params.to_query_pairs())
            .await
            .map_err(ExchangeError::from)?;

        order_ack_from_value(raw).map_err(ExchangeError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::exchange::binance::config::Credentials;

    #[test]
    fn new_rejects_blank_secret() {
        let config = BinanceConfig::new(Credentials::new("key", ""), ExchangeEnvironment::Testnet);
        assert!(matches!(
            BinanceFuturesAdapter::new(config),
            Err(BinanceError::MissingCredentials)
        ));
    }

    #[test]
    fn new_keeps_environment() {
        let config = BinanceConfig::new(
            Credentials::new("key", "secret"),
            ExchangeEnvironment::Production,
        );
        let adapter = BinanceFuturesAdapter::new(config).unwrap();
        assert_eq!(adapter.environment(), ExchangeEnvironment::Production);
    }
}
