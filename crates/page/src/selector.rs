use std::fmt;

// One simple selector component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Universal,
    Type(String),  // element/tag selector
    Id(String),    // #id selector
    Class(String), // .class selector
}

/// A compound selector such as `div.read-more-text#intro`; every component must match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<Selector>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    Empty,
    /// `#` or `.` with no name after it.
    MissingName { at: usize },
    /// Combinators, lists, attribute and pseudo selectors are not supported.
    Unsupported { found: char, at: usize },
    /// A type or `*` that is not the first component.
    MisplacedType { at: usize },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::Empty => write!(f, "empty selector"),
            SelectorError::MissingName { at } => write!(f, "missing name at byte {at}"),
            SelectorError::Unsupported { found, at } => {
                write!(f, "unsupported selector syntax {found:?} at byte {at}")
            }
            SelectorError::MisplacedType { at } => {
                write!(f, "type selector must come first (byte {at})")
            }
        }
    }
}

impl std::error::Error for SelectorError {}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl CompoundSelector {
    // input: "div.read-more-text", ".readmore-btn", "#id", "*"
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }
        let offset = input.len() - input.trim_start().len();
        let bytes = s.as_bytes();
        let mut parts = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            let at = offset + i;
            let c = bytes[i] as char;
            match c {
                '*' => {
                    if !parts.is_empty() {
                        return Err(SelectorError::MisplacedType { at });
                    }
                    parts.push(Selector::Universal);
                    i += 1;
                }
                '#' | '.' => {
                    let start = i + 1;
                    let end = scan_name(s, start);
                    if end == start {
                        return Err(SelectorError::MissingName { at });
                    }
                    let name = s[start..end].to_string();
                    parts.push(if c == '#' {
                        Selector::Id(name)
                    } else {
                        Selector::Class(name)
                    });
                    i = end;
                }
                c if is_name_char(c) => {
                    if !parts.is_empty() {
                        return Err(SelectorError::MisplacedType { at });
                    }
                    let end = scan_name(s, i);
                    parts.push(Selector::Type(s[i..end].to_ascii_lowercase()));
                    i = end;
                }
                _ => {
                    let found = s[i..].chars().next().unwrap_or(c);
                    return Err(SelectorError::Unsupported { found, at });
                }
            }
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[Selector] {
        &self.parts
    }

    /// Matches an element given its tag name and attribute list.
    pub fn matches(&self, name: &str, attributes: &[(String, Option<String>)]) -> bool {
        self.parts
            .iter()
            .all(|part| matches_selector(name, attributes, part))
    }
}

fn scan_name(s: &str, start: usize) -> usize {
    s[start..]
        .char_indices()
        .find(|&(_, c)| !is_name_char(c))
        .map_or(s.len(), |(idx, _)| start + idx)
}

pub(crate) fn get_attribute<'a>(
    attributes: &'a [(String, Option<String>)],
    key: &str,
) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .and_then(|(_, v)| v.as_deref())
}

// Check if an element matches a single component
fn matches_selector(name: &str, attributes: &[(String, Option<String>)], selector: &Selector) -> bool {
    match selector {
        Selector::Universal => true,
        Selector::Type(t) => name.eq_ignore_ascii_case(t),
        Selector::Id(want) => get_attribute(attributes, "id").is_some_and(|v| v == want),
        Selector::Class(want) => get_attribute(attributes, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == want)),
    }
}
