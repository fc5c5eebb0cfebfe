use crate::derived::{card_location, format_amount, lowest_price, review_badge};
use crate::pages::{CardView, ListView};
use crate::render::{error_panel, spinner};
use askama::Template;

/// Display fields of one result card
struct CardItem {
    position: usize,
    id: i64,
    href: String,
    image_url: String,
    image_alt: String,
    counter: String,
    name: String,
    description: String,
    location: String,
    badge: String,
    meal_labels: Vec<String>,
    price: Option<String>,
}

impl CardItem {
    fn new(position: usize, card: &CardView<'_>) -> Self {
        let property = card.property;
        let index = card.carousel.index();

        Self {
            position,
            id: property.id,
            href: property.detail_path(),
            image_url: property
                .property_images
                .get(index)
                .map(|image| image.url().to_string())
                .unwrap_or_default(),
            image_alt: format!("{} - Image {}", property.name, index + 1),
            counter: card.carousel.counter(),
            name: property.name.clone(),
            description: property.description.clone(),
            location: card_location(property),
            badge: review_badge(property).to_string(),
            meal_labels: property
                .meal_options
                .iter()
                .map(|option| option.plan.label())
                .collect(),
            price: lowest_price(property).map(format_amount),
        }
    }
}

#[derive(Template)]
#[template(path = "card.html")]
struct CardTemplate<'a> {
    card: &'a CardItem,
}

#[derive(Template)]
#[template(path = "card_grid.html")]
struct CardGridTemplate {
    cards: Vec<CardItem>,
}

#[derive(Template)]
#[template(path = "empty_state.html")]
struct EmptyStateTemplate;

/// Markup for the whole list page in its current state
pub fn render_list_page(view: &ListView<'_>) -> askama::Result<String> {
    match view {
        ListView::Loading => spinner(),
        ListView::Failed { message } => error_panel("Error loading properties", message),
        ListView::Empty => EmptyStateTemplate.render(),
        ListView::Cards(cards) => CardGridTemplate {
            cards: cards
                .iter()
                .enumerate()
                .map(|(position, card)| CardItem::new(position, card))
                .collect(),
        }
        .render(),
    }
}

/// One result card. `position` addresses the card's carousel controls.
pub fn render_card(position: usize, card: &CardView<'_>) -> askama::Result<String> {
    CardTemplate {
        card: &CardItem::new(position, card),
    }
    .render()
}
