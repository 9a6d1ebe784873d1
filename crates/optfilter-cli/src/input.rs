use anyhow::{Context as _, Result};
use optfilter_core::Page;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::invalid_input;

/// Reads a page from `path`: a JSON page document when the file ends in
/// `.json`, otherwise one option label per line. `-` reads lines from stdin.
pub fn load_page(path: &Path, container: &str) -> Result<Page> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .with_context(|| "read options from stdin")?;
        return Ok(Page::from_lines(container, &text));
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("read page {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let page: Page = serde_json::from_str(&text)
            .with_context(|| format!("parse page {}", path.display()))?;
        return Ok(page);
    }
    if text.trim().is_empty() {
        return Err(invalid_input(format!(
            "page {} has no options",
            path.display()
        )));
    }
    Ok(Page::from_lines(container, &text))
}
