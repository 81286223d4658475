pub mod api;
pub mod builder;
pub mod element;
pub mod events;

#[cfg(test)]
pub mod fake;

pub use api::{BrowserDocument, BrowserElement, DocumentApi, ElementApi};
pub use builder::ElementBuilder;
pub use element::*;
pub use events::{on_change, on_click, on_submit};
