//! Checkout
//!
//! Builds the payment-session request for a booking and talks to the payment
//! provider's session endpoint. The provider replies with either a session id
//! or an error message; nothing here retries automatically.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cart::Cart, pricing};

/// Errors raised while creating a payment session.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is no booking, so there is nothing to pay for.
    #[error("the booking is empty")]
    EmptyBooking,

    /// The request could not be sent or the response could not be read.
    #[error("checkout request failed")]
    Transport(#[from] reqwest::Error),

    /// The payment provider rejected the booking.
    #[error("checkout rejected: {0}")]
    Rejected(String),
}

/// One payable line in a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Venue or service id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Line total in minor units.
    pub price: u64,
    /// Always 1; bookings never hold the same line twice.
    pub quantity: u32,
    /// Thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of the payment-session request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Payable lines, venue first.
    pub items: Vec<LineItem>,
}

/// Payment provider reply: a session id on success, an error message
/// otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CheckoutReply {
    #[serde(rename_all = "camelCase")]
    Session { session_id: String },
    Failure { error: String },
}

/// Build the payable lines for a booking: the venue first, then each service
/// in insertion order. The venue line is priced across the event's dates;
/// service lines carry their attach-time totals.
#[must_use]
pub fn line_items(cart: &Cart) -> Vec<LineItem> {
    let mut items = Vec::with_capacity(cart.services.len() + 1);

    items.push(LineItem {
        id: cart.venue.id.clone(),
        name: cart.venue.name.clone(),
        price: pricing::venue_cost(cart),
        quantity: 1,
        image: cart.venue.images.first().map(|image| image.url.clone()),
    });

    for service in &cart.services {
        items.push(LineItem {
            id: service.id.clone(),
            name: service.name.clone(),
            price: service.total_calculated_price.unwrap_or(0),
            quantity: 1,
            image: service.image.clone(),
        });
    }

    items
}

/// Build the request body for a booking.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyBooking`] when there is no cart.
pub fn checkout_request(cart: Option<&Cart>) -> Result<CheckoutRequest, CheckoutError> {
    let cart = cart.ok_or(CheckoutError::EmptyBooking)?;

    Ok(CheckoutRequest {
        items: line_items(cart),
    })
}

/// Creates payment sessions for bookings.
#[automock]
#[async_trait]
pub trait CheckoutClient: Send + Sync {
    /// Create a payment session and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] when the request fails or the provider
    /// rejects the booking.
    async fn create_session(&self, cart: &Cart) -> Result<String, CheckoutError>;
}

/// HTTP client for the payment provider's session endpoint.
#[derive(Debug, Clone)]
pub struct HttpCheckoutClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpCheckoutClient {
    /// Create a client posting to the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CheckoutClient for HttpCheckoutClient {
    async fn create_session(&self, cart: &Cart) -> Result<String, CheckoutError> {
        let request = checkout_request(Some(cart))?;

        let reply: CheckoutReply = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        match reply {
            CheckoutReply::Session { session_id } => Ok(session_id),
            CheckoutReply::Failure { error } => Err(CheckoutError::Rejected(error)),
        }
    }
}
