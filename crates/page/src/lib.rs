//! # page
//!
//! A small stand-in for a hosting document: elements addressed by simple
//! CSS selectors, each carrying raw markup content and a class list.
//!
//! Bindings only talk to the [`Surface`] trait, so a real host can replace
//! [`Document`] without touching them.

mod document;
mod selector;
mod surface;

pub use document::{Document, Element};
pub use selector::{CompoundSelector, Selector, SelectorError};
pub use surface::{ElementId, Surface};
