pub mod fixtures;
pub mod generate;
pub mod rng;

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Human-readable first-mismatch report for two closer lists or line snapshots.
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    use std::fmt::Write;
    let missing = "<missing>";
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    let mismatch = (0..max).find(|&i| expected.get(i) != actual.get(i));
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(&mut out, "first mismatch at item {}:", i + 1);
        for idx in start..end {
            let left = expected.get(idx).map(String::as_str).unwrap_or(missing);
            let right = actual.get(idx).map(String::as_str).unwrap_or(missing);
            let marker = if idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} items, actual {} items",
        expected.len(),
        actual.len()
    );
    out
}

pub fn parse_u64(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(hex) = trimmed.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        trimmed.parse::<u64>().ok()
    }
}

/// Reads a positive count from `key`, falling back to `ci_default` when `CI` is set
/// and `local_default` otherwise.
pub fn env_count(key: &str, ci_default: usize, local_default: usize) -> usize {
    if let Ok(value) = std::env::var(key)
        && let Some(parsed) = parse_u64(&value)
        && parsed > 0
    {
        return parsed as usize;
    }
    if std::env::var("CI").is_ok() {
        ci_default
    } else {
        local_default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_text_escapes_controls_and_quotes() {
        assert_eq!(escape_text("a\"b\n\u{1}"), "a\\\"b\\n\\u{01}");
    }

    #[test]
    fn diff_lines_points_at_first_mismatch() {
        let expected = vec!["</b>".to_string(), "</p>".to_string()];
        let actual = vec!["</b>".to_string()];
        let report = diff_lines(&expected, &actual);
        assert!(report.contains("first mismatch at item 2"), "{report}");
        assert!(report.contains("<missing>"), "{report}");
    }

    #[test]
    fn parse_u64_accepts_hex_and_decimal() {
        assert_eq!(parse_u64("0x10"), Some(16));
        assert_eq!(parse_u64(" 42 "), Some(42));
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("nope"), None);
    }
}
