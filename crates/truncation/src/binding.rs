//! Wiring a [`TruncationController`] to a presentation surface.
//!
//! A binding owns the controller plus the two element handles it resolved at bind
//! time. The surface is only borrowed for the duration of a single render, so a host
//! delivers one activation at a time by construction.
use crate::controller::TruncationController;
use crate::cut::TruncationOptions;
use crate::state::DisplayState;
use page::{ElementId, Surface};

pub const DEFAULT_SPLIT_OFFSET: usize = 100;
pub const DEFAULT_CONTENT_SELECTOR: &str = ".read-more-text";
pub const DEFAULT_TOGGLE_SELECTOR: &str = ".readmore-btn";

#[derive(Clone, Debug)]
pub struct TruncationBinding {
    content: ElementId,
    toggle: ElementId,
    controller: TruncationController,
}

/// Binds the element matching `content_selector` to the toggle control matching
/// `toggle_selector` and renders the truncated view.
///
/// Returns `None` without touching the surface when either selector matches nothing.
pub fn bind_truncation<S: Surface + ?Sized>(
    surface: &mut S,
    content_selector: &str,
    split_offset: usize,
    toggle_selector: &str,
) -> Option<TruncationBinding> {
    bind_truncation_with(
        surface,
        content_selector,
        split_offset,
        toggle_selector,
        TruncationOptions::default(),
    )
}

pub fn bind_truncation_with<S: Surface + ?Sized>(
    surface: &mut S,
    content_selector: &str,
    split_offset: usize,
    toggle_selector: &str,
    options: TruncationOptions,
) -> Option<TruncationBinding> {
    let (Some(content), Some(toggle)) = (
        surface.query_selector(content_selector),
        surface.query_selector(toggle_selector),
    ) else {
        log::debug!(
            target: "truncation.bind",
            "binding skipped: content {content_selector:?} or toggle {toggle_selector:?} not found"
        );
        return None;
    };
    let full_markup = surface.inner_html(content)?;
    let controller = TruncationController::with_options(full_markup, split_offset, options);
    log::debug!(
        target: "truncation.bind",
        "bound {content_selector:?} ({} bytes, offset {split_offset}) to {toggle_selector:?}",
        controller.full_markup().len()
    );
    let binding = TruncationBinding {
        content,
        toggle,
        controller,
    };
    binding.render(surface);
    Some(binding)
}

/// The default page wiring: `.read-more-text` cut at 100 chars, toggled by
/// `.readmore-btn`.
pub fn on_document_loaded<S: Surface + ?Sized>(surface: &mut S) -> Option<TruncationBinding> {
    bind_truncation(
        surface,
        DEFAULT_CONTENT_SELECTOR,
        DEFAULT_SPLIT_OFFSET,
        DEFAULT_TOGGLE_SELECTOR,
    )
}

impl TruncationBinding {
    pub fn content(&self) -> ElementId {
        self.content
    }

    pub fn toggle(&self) -> ElementId {
        self.toggle
    }

    pub fn state(&self) -> DisplayState {
        self.controller.state()
    }

    pub fn controller(&self) -> &TruncationController {
        &self.controller
    }

    /// Handles one activation of the toggle control.
    pub fn activate<S: Surface + ?Sized>(&mut self, surface: &mut S) -> DisplayState {
        let state = self.controller.toggle();
        self.render(surface);
        state
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let state = self.controller.state();
        surface.set_inner_html(self.content, self.controller.displayed());
        surface.remove_class(self.toggle, state.toggled().marker());
        surface.add_class(self.toggle, state.marker());
    }
}

/// Click routing table for every binding on one surface.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    bindings: Vec<TruncationBinding>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds and registers; returns `false` when the binding was skipped.
    pub fn bind<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        content_selector: &str,
        split_offset: usize,
        toggle_selector: &str,
    ) -> bool {
        match bind_truncation(surface, content_selector, split_offset, toggle_selector) {
            Some(binding) => {
                self.bindings.push(binding);
                true
            }
            None => false,
        }
    }

    pub fn insert(&mut self, binding: TruncationBinding) {
        self.bindings.push(binding);
    }

    /// Delivers a click on `target` to every binding whose toggle it is.
    ///
    /// Returns whether any binding handled it.
    pub fn dispatch_click<S: Surface + ?Sized>(&mut self, surface: &mut S, target: ElementId) -> bool {
        let mut handled = false;
        for binding in self.bindings.iter_mut().filter(|b| b.toggle == target) {
            binding.activate(surface);
            handled = true;
        }
        if !handled {
            log::trace!(target: "truncation.bind", "click on {target:?} has no binding");
        }
        handled
    }

    pub fn get(&self, toggle: ElementId) -> Option<&TruncationBinding> {
        self.bindings.iter().find(|b| b.toggle == toggle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FULL_MARKER, PARTIAL_MARKER};
    use page::Document;

    const SAMPLE: &str = "<p>Hello <b>world, this is bold</b> and more</p>";

    fn page_with(content: &str) -> (Document, ElementId, ElementId) {
        let mut doc = Document::new();
        let text = doc.push_element("div", &[("class", "read-more-text")], content);
        let button = doc.push_element("button", &[("class", "readmore-btn")], "Read more");
        (doc, text, button)
    }

    #[test]
    fn bind_renders_partial_and_marks_toggle() {
        let (mut doc, text, button) = page_with(SAMPLE);
        let binding = bind_truncation(&mut doc, ".read-more-text", 19, ".readmore-btn")
            .expect("both targets exist");
        assert_eq!(binding.state(), DisplayState::Partial);
        assert_eq!(doc.inner_html(text), Some("<p>Hello <b>world,</b></p>"));
        assert_eq!(doc.class_list(button), vec!["readmore-btn", PARTIAL_MARKER]);
    }

    #[test]
    fn missing_targets_are_a_silent_no_op() {
        let (mut doc, text, button) = page_with(SAMPLE);
        assert!(bind_truncation(&mut doc, ".absent", 19, ".readmore-btn").is_none());
        assert!(bind_truncation(&mut doc, ".read-more-text", 19, "#absent").is_none());
        assert!(bind_truncation(&mut doc, "not a selector!", 19, ".readmore-btn").is_none());
        assert_eq!(doc.inner_html(text), Some(SAMPLE));
        assert_eq!(doc.class_list(button), vec!["readmore-btn"]);
    }

    #[test]
    fn activation_alternates_views_and_markers() {
        let (mut doc, text, button) = page_with(SAMPLE);
        let mut binding = bind_truncation(&mut doc, ".read-more-text", 19, ".readmore-btn")
            .expect("bound");
        assert_eq!(binding.activate(&mut doc), DisplayState::Full);
        assert_eq!(doc.inner_html(text), Some(SAMPLE));
        assert!(doc.has_class(button, FULL_MARKER));
        assert!(!doc.has_class(button, PARTIAL_MARKER));

        assert_eq!(binding.activate(&mut doc), DisplayState::Partial);
        assert_eq!(doc.inner_html(text), Some("<p>Hello <b>world,</b></p>"));
        assert!(doc.has_class(button, PARTIAL_MARKER));
        assert!(!doc.has_class(button, FULL_MARKER));
    }

    #[test]
    fn full_view_comes_from_capture_not_surface() {
        let (mut doc, text, _) = page_with(SAMPLE);
        let mut binding = bind_truncation(&mut doc, ".read-more-text", 19, ".readmore-btn")
            .expect("bound");
        // Someone else rewrites the element while it shows the partial view.
        doc.set_inner_html(text, "<p>changed</p>");
        binding.activate(&mut doc);
        assert_eq!(doc.inner_html(text), Some(SAMPLE));
    }

    #[test]
    fn on_document_loaded_uses_default_wiring() {
        let long = format!("<p>{}</p>", "word ".repeat(40));
        let (mut doc, text, _) = page_with(&long);
        let binding = on_document_loaded(&mut doc).expect("default selectors present");
        assert_eq!(binding.controller().split_offset(), DEFAULT_SPLIT_OFFSET);
        let shown = doc.inner_html(text).unwrap_or_default();
        assert!(shown.len() < long.len());
        assert!(shown.ends_with("</p>"));
        assert!(markup::is_balanced(shown));

        let mut empty = Document::new();
        assert!(on_document_loaded(&mut empty).is_none());
    }

    #[test]
    fn bindings_route_clicks_by_toggle() {
        let mut doc = Document::new();
        let a = doc.push_element("div", &[("id", "a")], "<p>alpha beta gamma</p>");
        let a_btn = doc.push_element("button", &[("id", "a-btn")], "");
        let b = doc.push_element("div", &[("id", "b")], "<p>delta epsilon zeta</p>");
        let b_btn = doc.push_element("button", &[("id", "b-btn")], "");

        let mut bindings = Bindings::new();
        assert!(bindings.bind(&mut doc, "#a", 10, "#a-btn"));
        assert!(bindings.bind(&mut doc, "#b", 10, "#b-btn"));
        assert!(!bindings.bind(&mut doc, "#c", 10, "#c-btn"));

        assert!(bindings.dispatch_click(&mut doc, a_btn));
        assert_eq!(doc.inner_html(a), Some("<p>alpha beta gamma</p>"));
        assert_eq!(doc.inner_html(b), Some("<p>delta</p>"));
        assert_eq!(bindings.get(a_btn).map(|b| b.state()), Some(DisplayState::Full));
        assert_eq!(bindings.get(b_btn).map(|b| b.state()), Some(DisplayState::Partial));

        assert!(!bindings.dispatch_click(&mut doc, a));
        assert!(bindings.dispatch_click(&mut doc, a_btn));
        assert_eq!(doc.inner_html(a), Some("<p>alpha</p>"));
    }
}
