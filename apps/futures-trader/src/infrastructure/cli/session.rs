//! Interactive order-entry session.
//!
//! Each round asks for one order. Bad input is reported and the round starts
//! over; a submitted order is reported and the user decides whether to go
//! again. End of input at any prompt ends the session.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::application::ports::FuturesExchangePort;
use crate::application::use_cases::{PlaceOrderUseCase, SubmissionOutcome};
use crate::domain::order_entry::{
    OrderInputError, OrderRequest, OrderSide, OrderType, Symbol, parse_positive_decimal,
};
use crate::error::TradeError;
use crate::infrastructure::exchange::binance::Credentials;

use super::prompt::Prompter;

/// Why a round ended before an order was built.
#[derive(Debug, Error)]
enum EntryError {
    #[error("end of input")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Invalid(#[from] TradeError),
}

impl From<OrderInputError> for EntryError {
    fn from(err: OrderInputError) -> Self {
        Self::Invalid(err.into())
    }
}

/// Counts for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Orders sent to the exchange.
    pub submitted: usize,
    /// Orders the exchange accepted.
    pub placed: usize,
    /// Rounds abandoned because of bad input.
    pub rejected_inputs: usize,
}

/// Ask for API credentials, skipping any value already supplied.
///
/// Blank answers are asked again. Returns `None` at end of input.
pub fn prompt_credentials<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    api_key: Option<String>,
    api_secret: Option<String>,
) -> io::Result<Option<Credentials>> {
    let Some(api_key) = supplied_or_ask(prompter, api_key, "Enter your Binance API Key: ")? else {
        return Ok(None);
    };
    let Some(api_secret) =
        supplied_or_ask(prompter, api_secret, "Enter your Binance API Secret: ")?
    else {
        return Ok(None);
    };
    Ok(Some(Credentials::new(api_key, api_secret)))
}

fn supplied_or_ask<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    supplied: Option<String>,
    label: &str,
) -> io::Result<Option<String>> {
    if let Some(value) = supplied.filter(|v| !v.trim().is_empty()) {
        return Ok(Some(value));
    }
    loop {
        match prompter.ask(label)? {
            Some(value) if value.is_empty() => prompter.say("A value is required.")?,
            answer => return Ok(answer),
        }
    }
}

/// Interactive loop driving [`PlaceOrderUseCase`].
pub struct TradingSession<E, R, W>
where
    E: FuturesExchangePort,
{
    use_case: PlaceOrderUseCase<E>,
    prompter: Prompter<R, W>,
}

impl<E, R, W> TradingSession<E, R, W>
where
    E: FuturesExchangePort,
    R: BufRead,
    W: Write,
{
    /// Create a session.
    pub const fn new(use_case: PlaceOrderUseCase<E>, prompter: Prompter<R, W>) -> Self {
        Self { use_case, prompter }
    }

    /// The prompter, for inspecting what was written.
    pub const fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }

    /// Run rounds until the user stops or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal cannot be read or written.
    pub async fn run(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            self.prompter.say("\n--- New Trade ---")?;

            let request = match self.read_order().await {
                Ok(request) => request,
                Err(EntryError::EndOfInput) => break,
                Err(EntryError::Io(e)) => return Err(e),
                Err(EntryError::Invalid(e)) => {
                    tracing::warn!(error = %e, "Order input rejected");
                    summary.rejected_inputs += 1;
                    self.prompter.say(format!("Error: {e}"))?;
                    continue;
                }
            };

            let outcome = self.use_case.place(&request).await;
            summary.submitted += 1;
            if matches!(outcome, SubmissionOutcome::Placed(_)) {
                summary.placed += 1;
            }
            self.report(outcome)?;

            match self.prompter.ask("\nDo you want to place another order? (y/n): ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }

        self.prompter.say("Thank you! Exiting bot.")?;
        tracing::info!(
            submitted = summary.submitted,
            placed = summary.placed,
            "Session ended"
        );
        Ok(summary)
    }

    async fn read_order(&mut self) -> Result<OrderRequest, EntryError> {
        let symbol = Symbol::parse(&self.field("Symbol (e.g., BTCUSDT): ")?)?;
        if !self.use_case.validate_symbol(&symbol).await {
            return Err(TradeError::InvalidSymbol(symbol.to_string()).into());
        }

        let side = OrderSide::from_str(&self.field("Side (BUY or SELL): ")?)?;
        let order_type =
            OrderType::from_str(&self.field("Order Type (MARKET / LIMIT / STOP_LIMIT): ")?)?;
        let quantity = parse_positive_decimal("quantity", &self.field("Quantity: ")?)?;

        let request = match order_type {
            OrderType::Market => OrderRequest::market(symbol, side, quantity)?,
            OrderType::Limit => {
                let price = parse_positive_decimal("price", &self.field("Enter Limit Price: ")?)?;
                OrderRequest::limit(symbol, side, quantity, price)?
            }
            OrderType::StopLimit => {
                let stop_price =
                    parse_positive_decimal("stop price", &self.field("Enter Stop Price: ")?)?;
                let price = parse_positive_decimal(
                    "price",
                    &self.field("Enter Limit Price (after stop is hit): ")?,
                )?;
                OrderRequest::stop_limit(symbol, side, quantity, stop_price, price)?
            }
        };
        Ok(request)
    }

    fn field(&mut self, label: &str) -> Result<String, EntryError> {
        self.prompter.ask(label)?.ok_or(EntryError::EndOfInput)
    }

    fn report(&mut self, outcome: SubmissionOutcome) -> io::Result<()> {
        match outcome.into_result() {
            Ok(ack) => self
                .prompter
                .say(format!("Order placed successfully. Order ID: {}", ack.order_id)),
            Err(e) => self.prompter.say(format!("Order failed: {e}")),
        }
    }
}
