//! # truncation
//!
//! "Show more / show less" for markup content. A [`TruncationController`] holds the full
//! markup captured once and a derived, tag-balanced truncated view; a
//! [`TruncationBinding`] renders the controller into a [`page::Surface`] and flips it on
//! each toggle activation.

mod binding;
mod controller;
mod cut;
mod state;

pub use binding::{
    Bindings, DEFAULT_CONTENT_SELECTOR, DEFAULT_SPLIT_OFFSET, DEFAULT_TOGGLE_SELECTOR,
    TruncationBinding, bind_truncation, bind_truncation_with, on_document_loaded,
};
pub use controller::TruncationController;
pub use cut::{TruncationOptions, safe_cut_index, truncate_markup};
pub use state::{DisplayState, FULL_MARKER, PARTIAL_MARKER};
