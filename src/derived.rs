//! Display figures computed from a fetched property.
//!
//! All functions are read-only views over the record and are cheap enough
//! to recompute on every render.

use crate::models::{Amenity, Policy, Property};
use std::collections::HashMap;
use std::fmt;

/// Policy type whose description is shown as the check-in/out line
pub const CHECK_IN_POLICY: &str = "Check-In";

/// Cheapest nightly price across every room's pricings.
///
/// `None` when the property has no rooms or no pricings at all.
pub fn lowest_price(property: &Property) -> Option<f64> {
    property
        .rooms
        .iter()
        .flat_map(|room| room.room_types.pricings.iter())
        .map(|pricing| pricing.price)
        .reduce(f64::min)
}

/// Amenities sharing one category, in the order they were delivered
#[derive(Debug, Clone, PartialEq)]
pub struct AmenityGroup<'a> {
    pub category: &'a str,
    pub amenities: Vec<&'a Amenity>,
}

/// Group `propertyAmenities` by category.
///
/// Categories appear in first-seen order, amenities keep their order within
/// a category.
pub fn group_amenities_by_category(property: &Property) -> Vec<AmenityGroup<'_>> {
    let mut groups: Vec<AmenityGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in &property.property_amenities {
        let amenity = &entry.amenities;
        let slot = *index.entry(amenity.category.as_str()).or_insert_with(|| {
            groups.push(AmenityGroup {
                category: &amenity.category,
                amenities: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].amenities.push(amenity);
    }

    groups
}

/// First policy whose type equals `kind`
pub fn find_policy<'a>(property: &'a Property, kind: &str) -> Option<&'a Policy> {
    property
        .property_policies
        .iter()
        .map(|entry| &entry.policies)
        .find(|policy| policy.kind == kind)
}

/// Rating badge shown next to the star icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewBadge {
    New,
    Reviews(u32),
}

impl fmt::Display for ReviewBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewBadge::New => f.write_str("New"),
            ReviewBadge::Reviews(count) => write!(f, "{count}"),
        }
    }
}

pub fn review_badge(property: &Property) -> ReviewBadge {
    match property.review_count() {
        0 => ReviewBadge::New,
        count => ReviewBadge::Reviews(count),
    }
}

/// `123` for whole amounts, `123.50` otherwise
pub fn format_amount(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

/// `$123`, or the unavailable notice
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${}", format_amount(price)),
        None => "Price unavailable".to_string(),
    }
}

/// Card location line: `city, country`
pub fn card_location(property: &Property) -> String {
    format!("{}, {}", property.address.city, property.address.country)
}

/// Detail header line: `town, county, country`
pub fn header_location(property: &Property) -> String {
    let a = &property.address;
    format!("{}, {}, {}", a.town, a.county, a.country)
}

/// Sidebar line: `street, town`
pub fn street_location(property: &Property) -> String {
    format!("{}, {}", property.address.street, property.address.town)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{amenity, policy, property, room};

    #[test]
    fn lowest_price_spans_all_rooms() {
        let mut p = property(1);
        p.rooms = vec![room("Suite", &[220.0, 180.5]), room("Twin", &[95.0, 140.0])];

        assert_eq!(lowest_price(&p), Some(95.0));
    }

    #[test]
    fn lowest_price_is_none_without_pricings() {
        let mut p = property(1);
        assert_eq!(lowest_price(&p), None);

        p.rooms = vec![room("Empty", &[])];
        assert_eq!(lowest_price(&p), None);
        assert_eq!(format_price(lowest_price(&p)), "Price unavailable");
    }

    #[test]
    fn zero_is_a_real_price() {
        let mut p = property(1);
        p.rooms = vec![room("Promo", &[0.0, 50.0])];

        assert_eq!(lowest_price(&p), Some(0.0));
        assert_eq!(format_price(lowest_price(&p)), "$0");
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let mut p = property(1);
        p.property_amenities = vec![
            amenity("Wifi", "Internet"),
            amenity("Pool", "Outdoor"),
            amenity("Fibre", "Internet"),
            amenity("Garden", "Outdoor"),
            amenity("Safe", "Security"),
        ];

        let groups = group_amenities_by_category(&p);
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, ["Internet", "Outdoor", "Security"]);

        let internet: Vec<_> = groups[0].amenities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(internet, ["Wifi", "Fibre"]);

        let total: usize = groups.iter().map(|g| g.amenities.len()).sum();
        assert_eq!(total, p.property_amenities.len());
    }

    #[test]
    fn grouping_empty_amenities_yields_no_groups() {
        assert!(group_amenities_by_category(&property(1)).is_empty());
    }

    #[test]
    fn find_policy_returns_first_match() {
        let mut p = property(1);
        p.property_policies = vec![
            policy("Pets", "No pets"),
            policy("Check-In", "From 14:00"),
            policy("Check-In", "Late arrivals by arrangement"),
        ];

        assert_eq!(
            find_policy(&p, CHECK_IN_POLICY).map(|x| x.description.as_str()),
            Some("From 14:00")
        );
        assert!(find_policy(&p, "Smoking").is_none());
    }

    #[test]
    fn review_badge_uses_count() {
        let mut p = property(1);
        assert_eq!(review_badge(&p).to_string(), "New");

        p.counts.reviews = 12;
        assert_eq!(review_badge(&p), ReviewBadge::Reviews(12));
        assert_eq!(review_badge(&p).to_string(), "12");
    }

    #[test]
    fn amounts_drop_trailing_zero_cents() {
        assert_eq!(format_amount(120.0), "120");
        assert_eq!(format_amount(99.5), "99.50");
    }

    #[test]
    fn location_lines() {
        let p = property(1);
        assert_eq!(card_location(&p), "Nairobi, Kenya");
        assert_eq!(header_location(&p), "Westlands, Nairobi County, Kenya");
        assert_eq!(street_location(&p), "Waiyaki Way, Westlands");
    }
}
