//! Pricing
//!
//! Pure functions deriving costs and display summaries from a [`Cart`]
//! snapshot. Nothing here mutates or persists state.

use jiff::civil::Date;

use crate::{cart::Cart, services::EventService};

/// Number of chargeable days for an event, never less than one.
fn chargeable_days(dates: &[Date]) -> u64 {
    u64::try_from(dates.len().max(1)).unwrap_or(u64::MAX)
}

/// Cost of the venue across the event's dates, in minor units.
///
/// Zero when the venue carries no price information. Every price model is
/// charged per selected day, including `hour` and `week`; the display layer
/// distinguishes those models with a suffix only.
#[must_use]
pub fn venue_cost(cart: &Cart) -> u64 {
    cart.venue.price.as_ref().map_or(0, |price| {
        price
            .base_price
            .saturating_mul(chargeable_days(&cart.selected_dates))
    })
}

/// Sum of the attached services' precomputed totals, in minor units.
///
/// Per-service totals are supplied by the caller at attach time; a service
/// without one contributes zero.
#[must_use]
pub fn services_cost(cart: &Cart) -> u64 {
    cart.services
        .iter()
        .map(|service| service.total_calculated_price.unwrap_or(0))
        .fold(0, u64::saturating_add)
}

/// Grand total of the booking, in minor units.
#[must_use]
pub fn total_cost(cart: &Cart) -> u64 {
    venue_cost(cart).saturating_add(services_cost(cart))
}

/// Human-readable summary of which days a service applies to, given the
/// event's own date list.
///
/// The rules are evaluated strictly in order: whole single-day event, all
/// event days, one explicit day, a short comma-joined list, a sorted range
/// for four or more days, then a generic fallback.
#[must_use]
pub fn service_date_summary(service: &EventService, event_dates: &[Date]) -> String {
    let days = &service.selected_days;

    if days.is_empty() && event_dates.len() == 1 {
        if let Some(date) = event_dates.first() {
            return format!("Event day ({date})");
        }
    }

    if days.as_slice() == event_dates {
        return format!("All event days ({})", days.len());
    }

    match days.as_slice() {
        [] => "Specific dates selected".to_string(),
        [only] => format!("1 day ({only})"),
        short @ ([_, _] | [_, _, _]) => {
            let list = short
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} days: {list}", short.len())
        }
        _ => {
            let mut sorted = days.clone();
            sorted.sort_unstable();
            match (sorted.first(), sorted.last()) {
                (Some(first), Some(last)) => {
                    format!("{} days ({first} to {last})", sorted.len())
                }
                _ => "Specific dates selected".to_string(),
            }
        }
    }
}
