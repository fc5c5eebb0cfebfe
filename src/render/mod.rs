//! HTML markup for the two pages.
//!
//! Rendering is a pure function of the page view. Markup lives in askama
//! templates under `templates/`, which escape every interpolated value;
//! controls carry a `data-action` attribute naming the page operation they
//! trigger.

pub mod card;
pub mod detail;

pub use card::{render_card, render_list_page};
pub use detail::render_detail_page;

use askama::Template;

#[derive(Template)]
#[template(path = "spinner.html")]
struct SpinnerTemplate;

/// Inline error panel with the retry control
#[derive(Template)]
#[template(path = "partials/error_panel.html")]
struct ErrorPanelTemplate<'a> {
    heading: &'a str,
    message: &'a str,
}

pub(crate) fn spinner() -> askama::Result<String> {
    SpinnerTemplate.render()
}

pub(crate) fn error_panel(heading: &str, message: &str) -> askama::Result<String> {
    ErrorPanelTemplate { heading, message }.render()
}
