//! Booking Cart
//!
//! A session holds at most one in-progress booking: a venue, the dates the
//! event spans, and any services attached to it. [`CartStore`] owns that
//! booking, persists it on every change, and reports the outcome of each
//! mutation through a [`NoticeSink`]. Mutations never fail hard; bad input
//! degrades to a no-op plus a notice.

use std::{fmt, sync::Arc};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    notices::{Notice, NoticeSink},
    pricing,
    services::EventService,
    storage::CartStorage,
    venues::Venue,
};

/// Time slot applied when none is chosen explicitly.
pub const DEFAULT_TIME_SLOT: &str = "Full day";

/// The single in-progress booking held by a session.
///
/// A cart exists only while a venue is attached; "no booking" is the absence
/// of a cart, never an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// The venue the event takes place at.
    pub venue: Venue,
    /// Ordered dates the event spans.
    pub selected_dates: Vec<Date>,
    /// Free-text time-of-day descriptor, e.g. `"Full day"`.
    #[serde(default)]
    pub time_slot: String,
    /// Attached services, in insertion order.
    #[serde(default)]
    pub services: Vec<EventService>,
}

/// Owns the current booking and persists it across sessions.
pub struct CartStore {
    cart: Option<Cart>,
    storage: Box<dyn CartStorage>,
    notices: Arc<dyn NoticeSink>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Build a store, hydrating the booking from `storage`.
    ///
    /// A stored payload that fails to parse as a whole [`Cart`] (including
    /// one missing its venue or dates) is discarded, and the session starts
    /// with no booking.
    #[must_use]
    pub fn new(storage: Box<dyn CartStorage>, notices: Arc<dyn NoticeSink>) -> Self {
        let cart = storage.read().and_then(|raw| {
            match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => Some(cart),
                Err(err) => {
                    warn!(%err, "discarding malformed stored cart");
                    None
                }
            }
        });

        Self {
            cart,
            storage,
            notices,
        }
    }

    /// Current booking, if a venue has been attached.
    #[must_use]
    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    /// Whether a venue is attached.
    #[must_use]
    pub fn has_venue(&self) -> bool {
        self.cart.is_some()
    }

    /// Dates the event spans; empty when there is no booking.
    #[must_use]
    pub fn selected_dates(&self) -> &[Date] {
        match &self.cart {
            Some(cart) => cart.selected_dates.as_slice(),
            None => &[],
        }
    }

    /// Time slot of the event; empty when there is no booking.
    #[must_use]
    pub fn time_slot(&self) -> &str {
        self.cart.as_ref().map_or("", |cart| cart.time_slot.as_str())
    }

    /// Whether the event spans more than one day.
    #[must_use]
    pub fn is_multi_day(&self) -> bool {
        self.selected_dates().len() > 1
    }

    /// Grand total of the booking in minor units; zero when there is no
    /// booking.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cart.as_ref().map_or(0, pricing::total_cost)
    }

    /// Attach a catalog venue, replacing any current one.
    ///
    /// Services survive only when `venue` is the one already attached (same
    /// id); otherwise they no longer match the venue and are dropped with a
    /// notice.
    pub fn attach_catalog_venue(
        &mut self,
        venue: Venue,
        dates: Vec<Date>,
        time_slot: impl Into<String>,
    ) {
        let services = self.take_services_if(|current| current.id == venue.id);
        let confirmation = venue_confirmation(&venue.name, &dates);

        self.cart = Some(Cart {
            venue,
            selected_dates: dates,
            time_slot: time_slot.into(),
            services,
        });
        self.persist();
        self.notices.notify(confirmation);
    }

    /// Attach a venue the customer already booked outside the catalog.
    ///
    /// Switching between two external venues preserves services; switching
    /// from a catalog venue drops them.
    pub fn attach_external_venue(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        dates: Vec<Date>,
    ) {
        let venue = Venue::external(name, location);
        let services = self.take_services_if(Venue::is_external);
        let confirmation = venue_confirmation(&venue.name, &dates);

        self.cart = Some(Cart {
            venue,
            selected_dates: dates,
            time_slot: DEFAULT_TIME_SLOT.to_string(),
            services,
        });
        self.persist();
        self.notices.notify(confirmation);
    }

    /// Attach a service to the booking.
    ///
    /// A no-op with a destructive notice when no venue is attached, and a
    /// no-op with an informational notice when a service with the same id is
    /// already present.
    pub fn add_service(&mut self, service: EventService) {
        let Some(cart) = self.cart.as_mut() else {
            self.notices.notify(
                Notice::error("No venue selected")
                    .with_description("Choose a venue before adding services."),
            );
            return;
        };

        if cart.services.iter().any(|existing| existing.id == service.id) {
            self.notices.notify(
                Notice::info("Already added")
                    .with_description(format!("{} is already part of this booking.", service.name)),
            );
            return;
        }

        let covered = if service.selected_days.is_empty() {
            cart.selected_dates.len().max(1)
        } else {
            service.selected_days.len()
        };
        let confirmation = Notice::info("Service added")
            .with_description(format!("{} covers {}.", service.name, days_label(covered)));

        cart.services.push(service);
        self.persist();
        self.notices.notify(confirmation);
    }

    /// Remove a service by id. Silently a no-op when there is no booking or
    /// no matching service.
    pub fn remove_service(&mut self, service_id: &str) {
        let Some(cart) = self.cart.as_mut() else {
            return;
        };
        let Some(index) = cart
            .services
            .iter()
            .position(|service| service.id == service_id)
        else {
            return;
        };

        let removed = cart.services.remove(index);

        self.persist();
        self.notices.notify(
            Notice::info("Service removed")
                .with_description(format!("{} was removed from the booking.", removed.name)),
        );
    }

    /// Discard the booking entirely.
    pub fn clear(&mut self) {
        self.cart = None;
        self.persist();
        self.notices.notify(Notice::info("Booking cleared"));
    }

    /// Take the current services forward into a new cart when `keep` accepts
    /// the current venue; otherwise drop them, with a notice when anything
    /// was actually dropped.
    fn take_services_if(&mut self, keep: impl FnOnce(&Venue) -> bool) -> Vec<EventService> {
        match self.cart.take() {
            Some(cart) if keep(&cart.venue) => cart.services,
            Some(cart) => {
                if !cart.services.is_empty() {
                    self.notices.notify(
                        Notice::info("Venue changed").with_description(
                            "Services from the previous venue were removed.",
                        ),
                    );
                }
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn persist(&self) {
        match &self.cart {
            Some(cart) => match serde_json::to_string(cart) {
                Ok(payload) => {
                    self.storage.write(&payload);
                    debug!(venue = %cart.venue.id, services = cart.services.len(), "cart persisted");
                }
                Err(err) => warn!(%err, "failed to serialize cart"),
            },
            None => self.storage.remove(),
        }
    }
}

fn venue_confirmation(name: &str, dates: &[Date]) -> Notice {
    let description = match (dates.first(), dates.len()) {
        (Some(date), 1) => format!("{name} reserved for {date}."),
        (Some(date), count) => format!("{name} reserved for {count} days from {date}."),
        (None, _) => format!("{name} reserved."),
    };

    Notice::info("Venue added").with_description(description)
}

fn days_label(count: usize) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{count} days")
    }
}
