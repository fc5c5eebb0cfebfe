//! Record builders shared by unit tests.

use crate::models::*;

pub fn property(id: i64) -> Property {
    Property {
        id,
        name: format!("Property {id}"),
        description: "Serviced apartments near the park".to_string(),
        address: Address {
            country: "Kenya".to_string(),
            county: "Nairobi County".to_string(),
            town: "Westlands".to_string(),
            street: "Waiyaki Way".to_string(),
            city: "Nairobi".to_string(),
            latitude: -1.2676,
            longitude: 36.8108,
        },
        counts: Counts::default(),
        property_images: images(3),
        meal_options: vec![],
        rooms: vec![],
        property_amenities: vec![],
        accessibility_features: vec![],
        property_languages: vec![],
        property_policies: vec![],
        staff_images: vec![],
        host: Some(Host {
            first_name: "Wanjiru".to_string(),
            last_name: "Kamau".to_string(),
        }),
    }
}

pub fn images(n: usize) -> Vec<PropertyImage> {
    (1..=n)
        .map(|i| PropertyImage {
            images: ImageRef {
                url: format!("https://img.example/{i}.jpg"),
            },
        })
        .collect()
}

pub fn meal(plan: &str) -> MealOption {
    MealOption {
        plan: MealPlan(plan.to_string()),
        description: None,
    }
}

pub fn room(name: &str, prices: &[f64]) -> RoomBooking {
    RoomBooking {
        room_types: RoomType {
            name: name.to_string(),
            description: format!("{name} with en-suite bathroom"),
            pricings: prices
                .iter()
                .enumerate()
                .map(|(i, price)| Pricing {
                    id: i as i64 + 1,
                    price: *price,
                    pricing_mode: PricingMode::PerRoom,
                    occupants: 2,
                    meal_option: meal("BED_AND_BREAKFAST"),
                })
                .collect(),
            room_type_amenities: vec![],
            bed_types: vec![],
        },
    }
}

pub fn amenity(name: &str, category: &str) -> AmenityEntry {
    AmenityEntry {
        amenities: Amenity {
            name: name.to_string(),
            category: category.to_string(),
        },
    }
}

pub fn policy(kind: &str, description: &str) -> PolicyEntry {
    PolicyEntry {
        policies: Policy {
            kind: kind.to_string(),
            description: description.to_string(),
        },
    }
}
