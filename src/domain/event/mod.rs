//! Event domain: the event aggregate and landing-page shapes.

pub mod converter;
#[allow(clippy::module_inception)]
mod event;
mod landing_page;

pub use event::{validate_domain_code, Event};
pub use landing_page::{
    EditorPage, EditorState, FieldContent, FieldRow, PageRecord, COVER_TEMPLATE,
    DEFAULT_TEMPLATE, DEFAULT_VARIANT, PAGE_SLOT_COUNT,
};
