//! Marquee
//!
//! Marquee is the booking-cart engine for an event-venue marketplace: it holds
//! the single in-progress booking (one venue, selected dates, attached
//! services), derives totals from a day-based pricing model, persists the
//! booking across sessions, and prepares the payment-session request at
//! checkout.

pub mod cart;
pub mod checkout;
pub mod notices;
pub mod pricing;
pub mod services;
pub mod storage;
pub mod venues;
