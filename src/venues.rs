//! Venues

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix marking a venue the customer declared themselves rather than one
/// sourced from the catalog.
pub const EXTERNAL_ID_PREFIX: &str = "external-";

/// Image shown for external venues, which have no photos of their own.
pub const EXTERNAL_VENUE_IMAGE: &str = "/placeholder.svg";

/// Unit a base price is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceModel {
    /// Priced per hour.
    Hour,
    /// Priced per day.
    Day,
    /// Priced per week.
    Week,
}

impl PriceModel {
    /// Suffix appended when displaying a price under this model.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Hour => "/hour",
            Self::Day => "/day",
            Self::Week => "/week",
        }
    }
}

/// Price information for a venue, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuePrice {
    /// Base price per pricing-model unit.
    pub base_price: u64,
    /// Unit the base price is denominated in.
    pub model: PriceModel,
}

/// A single venue image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueImage {
    /// Image URL.
    pub url: String,
    /// Alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Caption shown alongside the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl VenueImage {
    /// Create an image with no alt text or caption.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
            caption: None,
        }
    }
}

/// The venue attached to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Opaque identifier. Ids carrying [`EXTERNAL_ID_PREFIX`] denote venues
    /// the customer booked outside the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Address line.
    pub location: String,
    /// City, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Price information. Absent for venues with no published price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<VenuePrice>,
    /// Ordered gallery images, may be empty.
    #[serde(default)]
    pub images: Vec<VenueImage>,
    /// Venue category label.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub venue_type: Option<String>,
    /// Average customer rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Venue {
    /// Whether this venue was declared by the customer rather than sourced
    /// from the catalog.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.id.starts_with(EXTERNAL_ID_PREFIX)
    }

    /// Synthesize a venue for a booking the customer already holds outside
    /// the catalog: fresh unique id, placeholder image, zero base price on a
    /// per-day model.
    #[must_use]
    pub fn external(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: format!("{EXTERNAL_ID_PREFIX}{}", Uuid::new_v4()),
            name: name.into(),
            location: location.into(),
            city: None,
            price: Some(VenuePrice {
                base_price: 0,
                model: PriceModel::Day,
            }),
            images: vec![VenueImage::from_url(EXTERNAL_VENUE_IMAGE)],
            venue_type: None,
            rating: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn external_venues_carry_the_prefix_and_unique_ids() {
        let a = Venue::external("Barn", "Back field");
        let b = Venue::external("Barn", "Back field");

        assert!(a.is_external());
        assert!(b.is_external());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn external_venues_have_zero_day_price_and_placeholder_image() {
        let venue = Venue::external("Barn", "Back field");

        assert_eq!(
            venue.price,
            Some(VenuePrice {
                base_price: 0,
                model: PriceModel::Day,
            })
        );
        assert_eq!(
            venue.images,
            vec![VenueImage::from_url(EXTERNAL_VENUE_IMAGE)]
        );
    }

    #[test]
    fn price_model_suffixes() {
        assert_eq!(PriceModel::Hour.suffix(), "/hour");
        assert_eq!(PriceModel::Day.suffix(), "/day");
        assert_eq!(PriceModel::Week.suffix(), "/week");
    }

    #[test]
    fn catalog_ids_are_not_external() {
        let venue = Venue {
            id: "venue-42".to_string(),
            name: "Grand Hall".to_string(),
            location: "1 Main St".to_string(),
            city: None,
            price: None,
            images: Vec::new(),
            venue_type: None,
            rating: None,
        };

        assert!(!venue.is_external());
    }

    #[test]
    fn serializes_with_camel_case_wire_names() -> TestResult {
        let venue = Venue {
            id: "v1".to_string(),
            name: "Grand Hall".to_string(),
            location: "1 Main St".to_string(),
            city: Some("Springfield".to_string()),
            price: Some(VenuePrice {
                base_price: 1000,
                model: PriceModel::Day,
            }),
            images: vec![VenueImage::from_url("/hall.jpg")],
            venue_type: Some("banquet".to_string()),
            rating: Some(4.5),
        };

        let json = serde_json::to_value(&venue)?;

        assert_eq!(json["price"]["basePrice"], 1000);
        assert_eq!(json["price"]["model"], "day");
        assert_eq!(json["type"], "banquet");

        Ok(())
    }
}
