use crate::selector::{CompoundSelector, get_attribute};
use crate::surface::{ElementId, Surface};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub attributes: Vec<(String, Option<String>)>,
    pub inner_html: String,
}

impl Element {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        get_attribute(&self.attributes, key)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or_default()
            .split_whitespace()
    }

    fn class_attribute_mut(&mut self) -> &mut String {
        let idx = match self
            .attributes
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case("class"))
        {
            Some(idx) => idx,
            None => {
                self.attributes.push(("class".to_string(), None));
                self.attributes.len() - 1
            }
        };
        self.attributes[idx].1.get_or_insert_with(String::new)
    }
}

/// Flat, insertion-ordered element store implementing [`Surface`].
///
/// Elements do not nest; each carries its own content as raw markup, which is all a
/// truncation binding reads or writes.
#[derive(Clone, Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_element(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        inner_html: &str,
    ) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(Element {
            id,
            name: name.to_ascii_lowercase(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                .collect(),
            inner_html: inner_html.to_string(),
        });
        id
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0 as usize)
    }

    pub fn class_list(&self, id: ElementId) -> Vec<&str> {
        self.element(id)
            .map(|el| el.classes().collect())
            .unwrap_or_default()
    }
}

fn parse_or_log(selector: &str) -> Option<CompoundSelector> {
    match CompoundSelector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::debug!(target: "page.selector", "selector {selector:?} matches nothing: {err}");
            None
        }
    }
}

impl Surface for Document {
    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        let selector = parse_or_log(selector)?;
        self.elements
            .iter()
            .find(|el| selector.matches(&el.name, &el.attributes))
            .map(|el| el.id)
    }

    fn inner_html(&self, id: ElementId) -> Option<&str> {
        self.element(id).map(|el| el.inner_html.as_str())
    }

    fn set_inner_html(&mut self, id: ElementId, html: &str) {
        if let Some(el) = self.element_mut(id) {
            el.inner_html.clear();
            el.inner_html.push_str(html);
        }
    }

    fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|el| el.classes().any(|c| c == class))
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        if class.is_empty() || self.has_class(id, class) {
            return;
        }
        if let Some(el) = self.element_mut(id) {
            let value = el.class_attribute_mut();
            if !value.trim().is_empty() {
                value.push(' ');
            }
            value.push_str(class);
        }
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        if let Some(el) = self.element_mut(id) {
            let value = el.class_attribute_mut();
            let kept = value
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" ");
            *value = kept;
        }
    }
}
