#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    Open,
    Close,
}

/// One tag occurrence found by the scanner.
///
/// `name` borrows from the scanned input and keeps the spelling as written.
/// `start..end` is the byte span of the whole `<...>` run, including the brackets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagEvent<'a> {
    pub name: &'a str,
    pub kind: TagKind,
    pub start: usize,
    pub end: usize,
}

impl<'a> TagEvent<'a> {
    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    /// The closing-tag text that matches this event's name, e.g. `</b>`.
    pub fn closer(&self) -> String {
        closing_tag(self.name)
    }
}

fn closing_tag(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 3);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// How the balancer compares an opener's name with a pending closer's name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagNameMatching {
    /// Byte-for-byte comparison; `<B>` is not closed by `</b>`.
    #[default]
    Exact,
    /// ASCII case folding; the emitted closer still uses the opener's spelling.
    AsciiCaseInsensitive,
}

impl TagNameMatching {
    pub fn matches(self, a: &str, b: &str) -> bool {
        match self {
            TagNameMatching::Exact => a == b,
            TagNameMatching::AsciiCaseInsensitive => a.eq_ignore_ascii_case(b),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalanceOptions {
    pub tag_name_matching: TagNameMatching,
}

impl BalanceOptions {
    pub fn ignore_ascii_case() -> Self {
        Self {
            tag_name_matching: TagNameMatching::AsciiCaseInsensitive,
        }
    }
}
