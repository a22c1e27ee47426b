//! The presentation surface a binding renders into.
//!
//! Hosts implement [`Surface`] over whatever document model they own; [`crate::Document`]
//! is the in-memory implementation used by the demo binary and the tests.
//!
//! Calls that name an unknown [`ElementId`] are no-ops (setters) or return `None` /
//! `false` (getters). Nothing here reports errors.

/// Opaque handle to one element of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

pub trait Surface {
    /// First element in document order matching `selector`.
    ///
    /// A selector that does not parse matches nothing.
    fn query_selector(&self, selector: &str) -> Option<ElementId>;

    /// Current markup content of the element.
    fn inner_html(&self, id: ElementId) -> Option<&str>;

    /// Replaces the element's markup content.
    fn set_inner_html(&mut self, id: ElementId, html: &str);

    fn has_class(&self, id: ElementId, class: &str) -> bool;

    /// Adds `class` unless already present.
    fn add_class(&mut self, id: ElementId, class: &str);

    /// Removes every occurrence of `class`.
    fn remove_class(&mut self, id: ElementId, class: &str);
}
