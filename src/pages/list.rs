use crate::api::{FetchError, StaySource};
use crate::models::Property;
use crate::pages::{Carousel, FetchState, Lifecycle, Ticket};
use tracing::info;

/// Search results page: `/`
#[derive(Debug, Default)]
pub struct ListPage {
    fetch: Lifecycle<Vec<Property>>,
    carousels: Vec<Carousel>,
}

/// What the list page shows right now
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Failed { message: &'a str },
    Empty,
    Cards(Vec<CardView<'a>>),
}

/// One result card and its carousel position
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub property: &'a Property,
    pub carousel: Carousel,
}

impl ListPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<Vec<Property>> {
        self.fetch.state()
    }

    pub fn mount(&mut self) -> Option<Ticket> {
        self.fetch.mount()
    }

    pub fn retry(&mut self) -> Option<Ticket> {
        self.fetch.retry()
    }

    pub fn unmount(&mut self) {
        self.fetch.unmount();
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<Property>, FetchError>) -> bool {
        if !self.fetch.resolve(ticket, result) {
            return false;
        }
        self.carousels = match self.fetch.state().data() {
            Some(properties) => properties
                .iter()
                .map(|p| Carousel::new(p.image_count()))
                .collect(),
            None => Vec::new(),
        };
        true
    }

    /// Mount and wait for the first response
    pub async fn load<S: StaySource + ?Sized>(&mut self, source: &S) -> bool {
        match self.mount() {
            Some(ticket) => {
                info!("Loading search results from {}", source.source_name());
                let result = source.fetch_list().await;
                self.resolve(ticket, result)
            }
            None => false,
        }
    }

    /// Re-issue the list request after an error
    pub async fn reload<S: StaySource + ?Sized>(&mut self, source: &S) -> bool {
        match self.retry() {
            Some(ticket) => {
                info!("Retrying search results");
                let result = source.fetch_list().await;
                self.resolve(ticket, result)
            }
            None => false,
        }
    }

    pub fn next_image(&mut self, card: usize) {
        if let Some(carousel) = self.carousels.get_mut(card) {
            carousel.next();
        }
    }

    pub fn prev_image(&mut self, card: usize) {
        if let Some(carousel) = self.carousels.get_mut(card) {
            carousel.prev();
        }
    }

    pub fn card_count(&self) -> usize {
        self.carousels.len()
    }

    pub fn view(&self) -> ListView<'_> {
        match self.fetch.state() {
            FetchState::Idle | FetchState::Loading => ListView::Loading,
            FetchState::Error { message, .. } => ListView::Failed {
                message: message.as_str(),
            },
            FetchState::Success { data, .. } if data.is_empty() => ListView::Empty,
            FetchState::Success { data, .. } => ListView::Cards(
                data.iter()
                    .zip(self.carousels.iter())
                    .map(|(property, carousel)| CardView {
                        property,
                        carousel: *carousel,
                    })
                    .collect(),
            ),
        }
    }
}
