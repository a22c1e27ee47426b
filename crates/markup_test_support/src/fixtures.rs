//! Fixture corpora for the balancer and the truncation controller.
//!
//! Files are TOML or JSON (picked by extension) with a `format` header and a `cases`
//! array. Each case may carry `status = "skip"` with a `reason`.
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const BALANCE_FORMAT_V1: &str = "readmore-balance-v1";
pub const TRUNCATE_FORMAT_V1: &str = "readmore-truncate-v1";

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    #[default]
    Active,
    Skip,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BalanceCase {
    pub id: String,
    pub input: String,
    pub unclosed: Vec<String>,
    #[serde(default)]
    pub ignore_case: bool,
    #[serde(default)]
    pub status: FixtureStatus,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TruncateCase {
    pub id: String,
    pub input: String,
    pub offset: usize,
    pub partial: String,
    #[serde(default)]
    pub status: FixtureStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest<T> {
    format: String,
    cases: Vec<T>,
}

pub fn load_balance_cases(path: &Path) -> Vec<BalanceCase> {
    let cases = load_manifest::<BalanceCase>(path, BALANCE_FORMAT_V1);
    ensure_unique_ids(path, cases.iter().map(|c| c.id.as_str()));
    for case in &cases {
        validate_status(path, &case.id, case.status, case.reason.as_deref());
    }
    cases
}

pub fn load_truncate_cases(path: &Path) -> Vec<TruncateCase> {
    let cases = load_manifest::<TruncateCase>(path, TRUNCATE_FORMAT_V1);
    ensure_unique_ids(path, cases.iter().map(|c| c.id.as_str()));
    for case in &cases {
        validate_status(path, &case.id, case.status, case.reason.as_deref());
    }
    cases
}

fn load_manifest<T: DeserializeOwned>(path: &Path, format: &str) -> Vec<T> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture file {path:?}: {err}"));
    let manifest: Manifest<T> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse fixture TOML {path:?}: {err}")),
        Some("json") => serde_json::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse fixture JSON {path:?}: {err}")),
        other => panic!("unsupported fixture extension {other:?} for {path:?}"),
    };
    assert_eq!(
        manifest.format, format,
        "unsupported fixture format in {path:?}"
    );
    assert!(!manifest.cases.is_empty(), "fixture file {path:?} has no cases");
    manifest.cases
}

fn ensure_unique_ids<'a>(path: &Path, ids: impl Iterator<Item = &'a str>) {
    let mut seen = BTreeSet::new();
    for id in ids {
        assert!(!id.trim().is_empty(), "empty case id in {path:?}");
        assert!(seen.insert(id), "duplicate case id in {path:?}: {id}");
    }
}

fn validate_status(path: &Path, id: &str, status: FixtureStatus, reason: Option<&str>) {
    if status == FixtureStatus::Skip {
        assert!(
            reason.is_some_and(|r| !r.trim().is_empty()),
            "skipped case '{id}' in {path:?} needs a reason"
        );
    }
}
