use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub const CODE_LEN: usize = 10;

/// A stored movie. `price` is in EUR.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub is_available: Option<bool>,
}

/// A validated movie that has not been persisted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub is_available: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieView {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price_eur: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price_usd: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl MovieView {
    /// Prices `movie` in USD using `rate` (USD per 1 EUR).
    pub fn priced(movie: Movie, rate: Decimal) -> AppResult<Self> {
        let price_usd = movie.price.checked_mul(rate).ok_or_else(|| {
            anyhow::anyhow!("USD price overflow for movie {} at rate {rate}", movie.id)
        })?;

        Ok(Self {
            id: movie.id,
            code: movie.code,
            name: movie.name,
            price_eur: movie.price,
            price_usd: Some(price_usd),
            is_available: movie.is_available,
        })
    }
}

/// Body of `POST /movies`. Every field is optional here so that a missing
/// field is reported by [`CreateMovieRequest::validate`] instead of the
/// JSON extractor.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateMovieRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price_eur: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl CreateMovieRequest {
    pub fn validate(self) -> AppResult<NewMovie> {
        let code = match self.code {
            Some(code) if !code.trim().is_empty() => code,
            _ => return Err(AppError::Validation("code is required".to_string())),
        };
        if code.chars().count() != CODE_LEN {
            return Err(AppError::Validation(format!(
                "code must be exactly {CODE_LEN} characters"
            )));
        }

        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(AppError::Validation("name is required".to_string())),
        };

        let Some(price) = self.price_eur else {
            return Err(AppError::Validation("price_eur is required".to_string()));
        };
        if price < Decimal::ZERO {
            return Err(AppError::Validation("price_eur must not be negative".to_string()));
        }

        Ok(NewMovie { code, name, price, is_available: self.is_available })
    }
}
