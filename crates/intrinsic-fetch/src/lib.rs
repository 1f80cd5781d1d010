//! Market-data collaborators for Intrinsic.
//!
//! This crate fetches the raw inputs the normalizer consumes:
//! - [`FinnhubClient`]: quote, company profile and basic financials from
//!   [Finnhub](https://finnhub.io/)
//! - [`ExchangeRateClient`]: currency-to-USD rates from
//!   [ExchangeRate-API](https://www.exchangerate-api.com/), implementing
//!   [`intrinsic_traits::FxRateProvider`]
//!
//! # Usage
//!
//! ```rust,ignore
//! use intrinsic_fetch::{ExchangeRateClient, FinnhubClient, clean_ticker};
//! use intrinsic_traits::usd_rate_or_default;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let finnhub = FinnhubClient::from_env()?;
//!     let fx = ExchangeRateClient::from_env()?;
//!
//!     let data = finnhub.fundamental_data(&clean_ticker(" aapl ")).await?;
//!     let raw = data.to_raw();
//!     let rate = usd_rate_or_default(&fx, raw.currency_or_usd()).await;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set the keys in your environment or `.env` file:
//!
//! ```bash
//! FINNHUB_API_KEY=your_finnhub_key
//! EXCHANGERATE_API_KEY=your_exchangerate_key
//! ```

mod error;
mod exchange_rate;
mod finnhub;
mod types;

pub use error::FetchError;
pub use exchange_rate::{EXCHANGERATE_API_KEY, ExchangeRateClient};
pub use finnhub::{FINNHUB_API_KEY, FinnhubClient};
pub use types::*;

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
