//! Place Order Use Case
//!
//! Validates a symbol against the exchange, maps an [`OrderRequest`] to the
//! exchange's parameter set and submits it exactly once.

use std::sync::Arc;

use crate::application::ports::{
    ExchangeError, ExchangeOrderType, FuturesExchangePort, OrderAck, OrderParams,
};
use crate::domain::order_entry::{OrderRequest, OrderType, Symbol, TimeInForce};
use crate::error::TradeError;

/// Result of one submission attempt.
///
/// Submission never fails from the caller's point of view: rejections and
/// transport problems are outcomes to report, not errors to propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The exchange accepted the order.
    Placed(OrderAck),
    /// The exchange refused the order.
    Rejected {
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        reason: String,
    },
    /// The order could not be delivered or the answer could not be read.
    Failed {
        /// Error details.
        message: String,
    },
}

impl SubmissionOutcome {
    /// Exchange order ID, if the order was placed.
    #[must_use]
    pub fn order_id(&self) -> Option<&str> {
        match self {
            Self::Placed(ack) => Some(&ack.order_id),
            _ => None,
        }
    }

    /// Convert into a `Result` using the trade error taxonomy.
    pub fn into_result(self) -> Result<OrderAck, TradeError> {
        match self {
            Self::Placed(ack) => Ok(ack),
            Self::Rejected { code, reason } => Err(TradeError::ExchangeRejection { code, reason }),
            Self::Failed { message } => Err(TradeError::TransportError(message)),
        }
    }
}

impl From<Result<OrderAck, ExchangeError>> for SubmissionOutcome {
    fn from(result: Result<OrderAck, ExchangeError>) -> Self {
        match result {
            Ok(ack) => Self::Placed(ack),
            Err(ExchangeError::Rejected { code, reason }) => Self::Rejected { code, reason },
            Err(ExchangeError::Transport { message } | ExchangeError::Unknown { message }) => {
                Self::Failed { message }
            }
        }
    }
}

/// Use case for placing a single order.
pub struct PlaceOrderUseCase<E>
where
    E: FuturesExchangePort,
{
    exchange: Arc<E>,
}

impl<E> PlaceOrderUseCase<E>
where
    E: FuturesExchangePort,
{
    /// Create a new PlaceOrderUseCase.
    pub const fn new(exchange: Arc<E>) -> Self {
        Self { exchange }
    }

    /// Returns true iff the symbol is in the exchange's instrument list.
    ///
    /// Fails closed: any lookup error is logged and reported as `false`.
    pub async fn validate_symbol(&self, symbol: &Symbol) -> bool {
        match self.exchange.exchange_info().await {
            Ok(info) => {
                let listed = info.contains(symbol);
                if !listed {
                    tracing::warn!(symbol = %symbol, "Symbol not listed on exchange");
                }
                listed
            }
            Err(e) => {
                tracing::error!(symbol = %symbol, error = %e, "Error validating symbol");
                false
            }
        }
    }

    /// Map a request to the exchange's order-creation parameters.
    ///
    /// | type       | fields                                                  |
    /// |------------|---------------------------------------------------------|
    /// | MARKET     | symbol, side, type, quantity                            |
    /// | LIMIT      | + price, timeInForce=GTC                                |
    /// | STOP_LIMIT | + stopPrice, price, timeInForce=GTC, sent as type STOP  |
    #[must_use]
    pub fn build_params(request: &OrderRequest) -> OrderParams {
        let base = OrderParams {
            symbol: request.symbol().clone(),
            side: request.side(),
            order_type: ExchangeOrderType::Market,
            quantity: request.quantity(),
            price: None,
            stop_price: None,
            time_in_force: None,
        };

        match request.order_type() {
            OrderType::Market => base,
            OrderType::Limit => OrderParams {
                order_type: ExchangeOrderType::Limit,
                price: request.price(),
                time_in_force: Some(TimeInForce::GoodTillCanceled),
                ..base
            },
            OrderType::StopLimit => OrderParams {
                order_type: ExchangeOrderType::Stop,
                price: request.price(),
                stop_price: request.stop_price(),
                time_in_force: Some(TimeInForce::GoodTillCanceled),
                ..base
            },
        }
    }

    /// Submit parameters to the exchange once. No retry.
    pub async fn submit_order(&self, params: &OrderParams) -> SubmissionOutcome {
        tracing::info!(
            symbol = %params.symbol,
            side = %params.side,
            order_type = params.order_type.as_str(),
            quantity = %params.quantity,
            price = ?params.price,
            stop_price = ?params.stop_price,
            "Submitting order"
        );

        let outcome = SubmissionOutcome::from(self.exchange.new_order(params).await);

        match &outcome {
            SubmissionOutcome::Placed(ack) => {
                tracing::info!(order_id = %ack.order_id, response = %ack.raw, "Order placed");
            }
            SubmissionOutcome::Rejected { code, reason } => {
                tracing::error!(code = *code, reason = %reason, "Exchange rejected order");
            }
            SubmissionOutcome::Failed { message } => {
                tracing::error!(error = %message, "Order submission failed");
            }
        }

        outcome
    }

    /// Build parameters for the request and submit them.
    pub async fn place(&self, request: &OrderRequest) -> SubmissionOutcome {
        let params = Self::build_params(request);
        self.submit_order(&params).await
    }
}
