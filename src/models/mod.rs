pub mod schema;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use schema::SchemaError;

/// Postal address and coordinates of a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: String,
    pub county: String,
    pub town: String,
    pub street: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Aggregate counters the API nests under `_count`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Counts {
    pub reviews: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRef {
    pub url: String,
}

/// One entry of `propertyImages`; the URL lives under `images`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyImage {
    pub images: ImageRef,
}

impl PropertyImage {
    pub fn url(&self) -> &str {
        &self.images.url
    }
}

/// Catering plan identifier such as `FULL_BOARD`.
///
/// Kept as the raw API string so plans this client has never seen still
/// display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MealPlan(pub String);

impl MealPlan {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `BED_AND_BREAKFAST` -> `BED AND BREAKFAST`
    pub fn label(&self) -> String {
        self.0.replace('_', " ")
    }

    /// `BED_AND_BREAKFAST` -> `bed and breakfast`
    pub fn lowercase_label(&self) -> String {
        self.label().to_lowercase()
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealOption {
    pub plan: MealPlan,
    #[serde(default)]
    pub description: Option<String>,
}

/// How a pricing entry is charged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    PerRoom,
    PerPerson,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub id: i64,
    pub price: f64,
    pub pricing_mode: PricingMode,
    pub occupants: u32,
    pub meal_option: MealOption,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Amenity {
    pub name: String,
    pub category: String,
}

/// Wrapper record: `{ "amenities": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmenityEntry {
    pub amenities: Amenity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BedType {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BedTypeEntry {
    pub bed_type: BedType,
}

/// Descriptive template of a bookable room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub name: String,
    pub description: String,
    pub pricings: Vec<Pricing>,
    #[serde(default)]
    pub room_type_amenities: Vec<AmenityEntry>,
    #[serde(default)]
    pub bed_types: Vec<BedTypeEntry>,
}

impl RoomType {
    /// Cheapest pricing of this room type, if it has any
    pub fn lowest_price(&self) -> Option<f64> {
        self.pricings.iter().map(|p| p.price).reduce(f64::min)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomBooking {
    pub room_types: RoomType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessibilityFeature {
    pub feature: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessibilityEntry {
    pub features: AccessibilityFeature,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Language {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageEntry {
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyEntry {
    pub policies: Policy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub first_name: String,
    pub last_name: String,
}

impl Host {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Core property record as delivered by the search API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: Address,
    #[serde(rename = "_count", default)]
    pub counts: Counts,
    pub property_images: Vec<PropertyImage>,
    #[serde(default)]
    pub meal_options: Vec<MealOption>,
    #[serde(default)]
    pub rooms: Vec<RoomBooking>,
    #[serde(default)]
    pub property_amenities: Vec<AmenityEntry>,
    #[serde(default)]
    pub accessibility_features: Vec<AccessibilityEntry>,
    #[serde(default)]
    pub property_languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub property_policies: Vec<PolicyEntry>,
    #[serde(default)]
    pub staff_images: Vec<serde_json::Value>,
    #[serde(default)]
    pub host: Option<Host>,
}

impl Property {
    pub fn review_count(&self) -> u32 {
        self.counts.reviews
    }

    /// Primary display image; validated records always have one
    pub fn primary_image(&self) -> Option<&PropertyImage> {
        self.property_images.first()
    }

    pub fn image_count(&self) -> usize {
        self.property_images.len()
    }

    pub fn staff_count(&self) -> usize {
        self.staff_images.len()
    }

    pub fn detail_path(&self) -> String {
        format!("/property/{}", self.id)
    }
}

/// Response envelope shared by both endpoints: `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}
