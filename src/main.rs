//! Command-line preview of show-more / show-less truncation.
//!
//! Loads markup into an in-memory page, binds it with the default selectors and prints
//! what the content element holds after the first render and after each toggle.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mimalloc::MiMalloc;
use page::{Document, ElementId, Surface};
use truncation::{
    Bindings, DEFAULT_CONTENT_SELECTOR, DEFAULT_SPLIT_OFFSET, DEFAULT_TOGGLE_SELECTOR,
    DisplayState, TruncationOptions, bind_truncation_with, safe_cut_index,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "readmore", version, about = "Preview tag-balanced truncation of markup")]
struct Cli {
    /// Markup file to truncate, or `-` to read stdin
    input: PathBuf,

    /// Split offset, in characters of raw markup (tags included)
    #[arg(short, long, default_value_t = DEFAULT_SPLIT_OFFSET)]
    offset: usize,

    /// Number of toggle activations to simulate after the first render
    #[arg(short, long, default_value_t = 1)]
    toggles: usize,

    /// Match opening and closing tag names ignoring ASCII case
    #[arg(long)]
    ignore_case: bool,

    /// Also print the closing tags appended to the truncated view
    #[arg(long)]
    show_closers: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let markup = read_input(&cli.input)?;
    let options = if cli.ignore_case {
        TruncationOptions {
            balance: markup::BalanceOptions::ignore_ascii_case(),
        }
    } else {
        TruncationOptions::default()
    };

    let mut doc = Document::new();
    let content = doc.push_element("div", &[("class", "read-more-text")], &markup);
    let toggle = doc.push_element("button", &[("class", "readmore-btn")], "Read more");

    let binding = bind_truncation_with(
        &mut doc,
        DEFAULT_CONTENT_SELECTOR,
        cli.offset,
        DEFAULT_TOGGLE_SELECTOR,
        options,
    )
    .context("binding the in-memory page failed")?;

    if cli.show_closers {
        let cut = safe_cut_index(&markup, cli.offset).unwrap_or(0);
        let partial = binding.controller().truncated_markup();
        let closers = partial.get(cut..).unwrap_or_default();
        println!("cut at byte {cut}; appended closers: {closers:?}");
    }

    let mut bindings = Bindings::new();
    bindings.insert(binding);

    print_view(&doc, &bindings, content, toggle, 0);
    for step in 1..=cli.toggles {
        bindings.dispatch_click(&mut doc, toggle);
        print_view(&doc, &bindings, content, toggle, step);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read markup from stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    log::debug!(target: "readmore", "read {} bytes from {}", bytes.len(), path.display());
    // Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn print_view(doc: &Document, bindings: &Bindings, content: ElementId, toggle: ElementId, step: usize) {
    let state = bindings
        .get(toggle)
        .map(|b| b.state().to_string())
        .unwrap_or_else(|| "unbound".to_string());
    // The marker is read back from the page, not from the binding.
    let marker = doc
        .class_list(toggle)
        .into_iter()
        .find_map(DisplayState::from_marker)
        .map_or("-", DisplayState::marker);
    println!("--- step {step}: {state} [{marker}]");
    println!("{}", doc.inner_html(content).unwrap_or_default());
}
