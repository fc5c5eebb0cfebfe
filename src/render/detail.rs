use crate::derived::{
    find_policy, format_price, group_amenities_by_category, header_location, lowest_price,
    review_badge, street_location, AmenityGroup, CHECK_IN_POLICY,
};
use crate::models::{Policy, Property};
use crate::pages::{DetailView, Tab};
use crate::render::{error_panel, spinner};
use askama::Template;

/// Gallery thumbnails come from images 2..=5
const THUMBNAILS: usize = 4;

struct Thumb<'a> {
    index: usize,
    url: &'a str,
    selected: bool,
}

struct TabItem {
    name: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "detail.html")]
struct DetailTemplate<'a> {
    name: &'a str,
    location: String,
    main_image: Option<&'a str>,
    thumbs: Vec<Thumb<'a>>,
    tabs: Vec<TabItem>,
    active_tab: Tab,
    section: String,
    price: String,
    badge: String,
    check_in: Option<&'a str>,
    street: String,
    meal_plans: Vec<String>,
}

#[derive(Template)]
#[template(path = "sections/overview.html")]
struct OverviewTemplate<'a> {
    host: Option<String>,
    staff_count: usize,
    description: &'a str,
    languages: Vec<&'a str>,
    accessibility: Vec<&'a str>,
}

struct RoomItem<'a> {
    name: &'a str,
    description: &'a str,
    price: String,
    features: Vec<&'a str>,
    beds: Vec<String>,
}

#[derive(Template)]
#[template(path = "sections/rooms.html")]
struct RoomsTemplate<'a> {
    rooms: Vec<RoomItem<'a>>,
}

#[derive(Template)]
#[template(path = "sections/amenities.html")]
struct AmenitiesTemplate<'a> {
    groups: Vec<AmenityGroup<'a>>,
}

#[derive(Template)]
#[template(path = "sections/policies.html")]
struct PoliciesTemplate<'a> {
    policies: Vec<&'a Policy>,
}

/// Markup for the detail page in its current state
pub fn render_detail_page(view: &DetailView<'_>) -> askama::Result<String> {
    match view {
        DetailView::Loading => spinner(),
        DetailView::Failed { message } => error_panel("Error loading property", message),
        DetailView::Ready {
            property,
            selected_image_index,
            active_tab,
        } => ready(property, *selected_image_index, *active_tab),
    }
}

fn ready(property: &Property, selected: usize, active_tab: Tab) -> askama::Result<String> {
    let thumbs = property
        .property_images
        .iter()
        .enumerate()
        .skip(1)
        .take(THUMBNAILS)
        .map(|(index, image)| Thumb {
            index,
            url: image.url(),
            selected: index == selected,
        })
        .collect();

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| TabItem {
            name: tab.as_str(),
            active: tab == active_tab,
        })
        .collect();

    DetailTemplate {
        name: &property.name,
        location: header_location(property),
        main_image: property.property_images.get(selected).map(|image| image.url()),
        thumbs,
        tabs,
        active_tab,
        section: section(property, active_tab)?,
        price: format_price(lowest_price(property)),
        badge: review_badge(property).to_string(),
        check_in: find_policy(property, CHECK_IN_POLICY).map(|policy| policy.description.as_str()),
        street: street_location(property),
        meal_plans: property
            .meal_options
            .iter()
            .map(|option| option.plan.lowercase_label())
            .collect(),
    }
    .render()
}

fn section(property: &Property, tab: Tab) -> askama::Result<String> {
    match tab {
        Tab::Overview => OverviewTemplate {
            host: property.host.as_ref().map(|host| host.display_name()),
            staff_count: property.staff_count(),
            description: &property.description,
            languages: property
                .property_languages
                .iter()
                .map(|entry| entry.language.name.as_str())
                .collect(),
            accessibility: property
                .accessibility_features
                .iter()
                .map(|entry| entry.features.feature.as_str())
                .collect(),
        }
        .render(),
        Tab::Rooms => RoomsTemplate {
            rooms: property
                .rooms
                .iter()
                .map(|booking| {
                    let room = &booking.room_types;
                    RoomItem {
                        name: &room.name,
                        description: &room.description,
                        price: format_price(room.lowest_price()),
                        features: room
                            .room_type_amenities
                            .iter()
                            .map(|entry| entry.amenities.name.as_str())
                            .collect(),
                        beds: room
                            .bed_types
                            .iter()
                            .map(|entry| {
                                format!("{} ({})", entry.bed_type.name, entry.bed_type.description)
                            })
                            .collect(),
                    }
                })
                .collect(),
        }
        .render(),
        Tab::Amenities => AmenitiesTemplate {
            groups: group_amenities_by_category(property),
        }
        .render(),
        Tab::Policies => PoliciesTemplate {
            policies: property
                .property_policies
                .iter()
                .map(|entry| &entry.policies)
                .collect(),
        }
        .render(),
    }
}
