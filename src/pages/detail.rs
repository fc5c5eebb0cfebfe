use crate::api::{FetchError, StaySource};
use crate::models::{Property, PropertyImage};
use crate::pages::{clamp_index, FetchState, Lifecycle, Ticket};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Section shown below the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Rooms,
    Amenities,
    Policies,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Rooms, Tab::Amenities, Tab::Policies];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Rooms => "rooms",
            Tab::Amenities => "amenities",
            Tab::Policies => "policies",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown tab '{0}' (expected overview, rooms, amenities or policies)")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Single property page: `/property/:id`
#[derive(Debug)]
pub struct DetailPage {
    id: String,
    fetch: Lifecycle<Property>,
    selected_image_index: usize,
    active_tab: Tab,
}

/// What the detail page shows right now
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    Failed {
        message: &'a str,
    },
    Ready {
        property: &'a Property,
        selected_image_index: usize,
        active_tab: Tab,
    },
}

impl DetailPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fetch: Lifecycle::default(),
            selected_image_index: 0,
            active_tab: Tab::default(),
        }
    }

    /// Route parameter, forwarded verbatim to the fetch
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &FetchState<Property> {
        self.fetch.state()
    }

    pub fn property(&self) -> Option<&Property> {
        self.fetch.state().data()
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

    pub fn resolve(&mut self, ticket: Ticket, result: Result<Property, FetchError>) -> bool {
        if !self.fetch.resolve(ticket, result) {
            return false;
        }
        self.selected_image_index = self.selected_image_index();
        true
    }

    /// Mount and wait for the property
    pub async fn load<S: StaySource + ?Sized>(&mut self, source: &S) -> bool {
        match self.mount() {
            Some(ticket) => {
                info!("Loading property {} from {}", self.id, source.source_name());
                let result = source.fetch_by_id(&self.id).await;
                self.resolve(ticket, result)
            }
            None => false,
        }
    }

    /// Re-issue the same detail request after an error
    pub async fn reload<S: StaySource + ?Sized>(&mut self, source: &S) -> bool {
        match self.retry() {
            Some(ticket) => {
                info!("Retrying property {}", self.id);
                let result = source.fetch_by_id(&self.id).await;
                self.resolve(ticket, result)
            }
            None => false,
        }
    }

    /// Select a gallery image; the index is clamped to the images present
    pub fn select_image(&mut self, index: usize) {
        self.selected_image_index = match self.property() {
            Some(property) => clamp_index(index, property.image_count()),
            None => index,
        };
    }

    /// Selected index, clamped against the current payload
    pub fn selected_image_index(&self) -> usize {
        match self.property() {
            Some(property) => clamp_index(self.selected_image_index, property.image_count()),
            None => 0,
        }
    }

    pub fn selected_image(&self) -> Option<&PropertyImage> {
        self.property()?
            .property_images
            .get(self.selected_image_index())
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn view(&self) -> DetailView<'_> {
        match self.fetch.state() {
            FetchState::Idle | FetchState::Loading => DetailView::Loading,
            FetchState::Error { message, .. } => DetailView::Failed {
                message: message.as_str(),
            },
            FetchState::Success { data, .. } => DetailView::Ready {
                property: data,
                selected_image_index: self.selected_image_index(),
                active_tab: self.active_tab,
            },
        }
    }
}
