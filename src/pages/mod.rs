//! Per-page view state.
//!
//! Each page owns exactly one fetch lifecycle: it starts `Idle`, goes to
//! `Loading` on mount, and settles in `Success` or `Error`. Retry is the only
//! way back to `Loading`. Results are matched against the ticket of the
//! latest request, so a late answer for an abandoned request or an
//! unmounted page is dropped.

pub mod carousel;
pub mod detail;
pub mod list;

pub use carousel::Carousel;
pub use detail::{DetailPage, DetailView, Tab};
pub use list::{CardView, ListPage, ListView};

use crate::api::FetchError;
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success { data: T, loaded_at: DateTime<Utc> },
    Error { message: String, status: Option<u16> },
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Fetch state plus the bookkeeping needed to reject stale results
#[derive(Debug)]
pub struct Lifecycle<T> {
    state: FetchState<T>,
    latest: u64,
    mounted: bool,
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Idle,
            latest: 0,
            mounted: false,
        }
    }
}

impl<T> Lifecycle<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Entry action. Only an idle page issues its first request.
    pub fn mount(&mut self) -> Option<Ticket> {
        if !matches!(self.state, FetchState::Idle) {
            return None;
        }
        self.mounted = true;
        Some(self.issue())
    }

    /// Retry action. Only valid from `Error` on a mounted page.
    pub fn retry(&mut self) -> Option<Ticket> {
        if !self.mounted || !matches!(self.state, FetchState::Error { .. }) {
            return None;
        }
        Some(self.issue())
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Apply a result. Returns `false` when it was discarded.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, FetchError>) -> bool {
        if !self.mounted || ticket.0 != self.latest || !self.state.is_loading() {
            debug!("Discarding result for request {}", ticket.0);
            return false;
        }

        self.state = match result {
            Ok(data) => FetchState::Success {
                data,
                loaded_at: Utc::now(),
            },
            Err(err) => FetchState::Error {
                status: err.status(),
                message: err.to_string(),
            },
        };
        true
    }

    fn issue(&mut self) -> Ticket {
        self.latest += 1;
        self.state = FetchState::Loading;
        Ticket(self.latest)
    }
}

/// Keep `index` inside `[0, len)`; an empty range clamps to 0
pub fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
