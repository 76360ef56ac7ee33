//! Turns a decoded `/dealer/bust` body into a [`BustQuery`], or explains why
//! it cannot.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use bust_odds::{BustQuery, Card, CardCount};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Field {
    #[strum(to_string = "hand")]
    Hand,
    #[strum(to_string = "remainingCards")]
    RemainingCards,
}

/// The body as sent. Elements stay raw JSON so that a bad value can be
/// reported back as it was given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBustRequest {
    pub hand: Option<Vec<Value>>,
    #[serde(rename = "remainingCards")]
    pub remaining_cards: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Malformed message body: {0}")]
    MalformedBody(String),

    #[error("Missing '{0}' array in the message body.")]
    MissingField(Field),

    #[error("Wrong value found in '{field}': {value}. Expected values are integer between 1 and 10 included")]
    InvalidCardValue { field: Field, value: Value },

    #[error("There should be at least a value in 'remainingCards', {0} given")]
    EmptyRemainingCards(usize),
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_string())
    }
}

impl RawBustRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        serde_json::from_slice(body).map_err(|err| RequestError::MalformedBody(err.to_string()))
    }
}

fn parse_cards(field: Field, values: &[Value]) -> Result<CardCount, RequestError> {
    values
        .iter()
        .map(|value| {
            value
                .as_i64()
                .and_then(|v| Card::try_from(v).ok())
                .ok_or_else(|| RequestError::InvalidCardValue {
                    field,
                    value: value.clone(),
                })
        })
        .collect()
}

impl TryFrom<RawBustRequest> for BustQuery {
    type Error = RequestError;

    /// Checks are made in the order hand, then remaining cards. The first
    /// failure wins.
    fn try_from(raw: RawBustRequest) -> Result<Self, Self::Error> {
        let hand = raw.hand.ok_or(RequestError::MissingField(Field::Hand))?;
        let hand = parse_cards(Field::Hand, &hand)?;

        let remaining = raw
            .remaining_cards
            .ok_or(RequestError::MissingField(Field::RemainingCards))?;
        if remaining.is_empty() {
            return Err(RequestError::EmptyRemainingCards(remaining.len()));
        }
        let remaining = parse_cards(Field::RemainingCards, &remaining)?;
        let given = remaining.get_total();

        BustQuery::new(hand, remaining).map_err(|_| RequestError::EmptyRemainingCards(given))
    }
}
