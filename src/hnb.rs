use std::str::FromStr;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

/// The only failure the exchange client reports. The root cause is kept as
/// the source for logging but callers cannot tell failures apart.
#[derive(Debug, thiserror::Error)]
#[error("exchange rate service unavailable")]
pub struct RateUnavailable(#[source] anyhow::Error);

/// Client for the Croatian National Bank exchange-rate API.
pub struct HnbClient {
    client: reqwest::Client,
    base_url: String,
}

impl HnbClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Current EUR/USD mid rate, in USD per 1 EUR. Fetched on every call.
    pub async fn get_exchange_rate(&self) -> Result<Decimal, RateUnavailable> {
        match self.fetch_usd_mid_rate().await {
            Ok(rate) => Ok(rate),
            Err(err) => {
                warn!(error = ?err, "exchange rate lookup failed");
                Err(RateUnavailable(err))
            },
        }
    }

    async fn fetch_usd_mid_rate(&self) -> anyhow::Result<Decimal> {
        let url = format!("{}/tecajn-eur/v3", self.base_url.trim_end_matches('/'));

        let rates: Vec<HnbRate> = self
            .client
            .get(url)
            .query(&[("valuta", "USD")])
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("unexpected status")?
            .json()
            .await
            .context("malformed body")?;

        let rate = rates.into_iter().next().context("empty rate list")?;
        let mid = parse_comma_decimal(&rate.srednji_tecaj)
            .with_context(|| format!("unparsable mid rate {:?}", rate.srednji_tecaj))?;

        debug!(
            mid_rate = %mid,
            currency = rate.valuta.as_deref().unwrap_or("?"),
            date = rate.datum_primjene.as_deref().unwrap_or("?"),
            "fetched exchange rate"
        );
        Ok(mid)
    }
}

/// Parses a decimal written with a comma separator, e.g. `"1,039000"`.
pub fn parse_comma_decimal(s: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(&s.replace(',', "."))
}

#[derive(Debug, Deserialize)]
struct HnbRate {
    srednji_tecaj: String,
    valuta: Option<String>,
    datum_primjene: Option<String>,
}
