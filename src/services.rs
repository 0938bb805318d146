//! Event Services

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::venues::PriceModel;

/// A service attached to a booking, such as catering or photography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventService {
    /// Opaque identifier, unique within a booking's service list.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Base price in minor units.
    pub price: u64,
    /// Unit the base price is denominated in.
    pub price_model: PriceModel,
    /// Days the service applies to. Empty means the whole event.
    #[serde(default)]
    pub selected_days: Vec<Date>,
    /// Total for this service across its selected days, computed by the
    /// detail page at attach time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_calculated_price: Option<u64>,
}
