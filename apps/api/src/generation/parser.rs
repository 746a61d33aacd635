//! Best-effort extraction of description/hashtag pairs from generated copy.
//!
//! The raw text is always what the user sees. Variants are a structured view on
//! top of it; when the model ignores the requested format the list is empty.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One description and the hashtags that follow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVariant {
    pub index: usize,
    pub description: String,
    pub hashtags: Vec<String>,
}

struct PendingVariant {
    index: usize,
    lines: Vec<String>,
    hashtags: Vec<String>,
}

impl PendingVariant {
    fn finish(self) -> ContentVariant {
        let mut seen = HashSet::new();
        ContentVariant {
            index: self.index,
            description: self.lines.join("\n").trim().to_string(),
            hashtags: self
                .hashtags
                .into_iter()
                .filter(|t| seen.insert(t.to_lowercase()))
                .collect(),
        }
    }
}

/// What the line being read belongs to. Positions index into the pending list.
#[derive(Clone, Copy)]
enum Section {
    Outside,
    Description(usize),
    Hashtags(usize),
}

pub fn parse_variants(content: &str) -> Vec<ContentVariant> {
    let mut pending: Vec<PendingVariant> = Vec::new();
    let mut section = Section::Outside;

    for line in content.lines() {
        if let Some((index, rest)) = parse_marker(line, "description") {
            let mut lines = Vec::new();
            if !rest.is_empty() {
                lines.push(rest.to_string());
            }
            pending.push(PendingVariant {
                index,
                lines,
                hashtags: Vec::new(),
            });
            section = Section::Description(pending.len() - 1);
            continue;
        }

        if let Some((index, rest)) = parse_marker(line, "hashtags") {
            // Tags only attach to the description with the same number.
            section = match pending.iter().rposition(|v| v.index == index) {
                Some(pos) => {
                    pending[pos].hashtags.extend(parse_hashtags(rest));
                    Section::Hashtags(pos)
                }
                None => Section::Outside,
            };
            continue;
        }

        if line.trim() == "---" {
            section = Section::Outside;
            continue;
        }

        match section {
            Section::Description(pos) => pending[pos].lines.push(line.to_string()),
            Section::Hashtags(pos) => {
                if line.trim().is_empty() {
                    continue;
                }
                let tags = parse_hashtags(line);
                if tags.is_empty() {
                    section = Section::Outside;
                } else {
                    pending[pos].hashtags.extend(tags);
                }
            }
            Section::Outside => {}
        }
    }

    pending
        .into_iter()
        .map(PendingVariant::finish)
        .filter(|v| !v.description.is_empty() || !v.hashtags.is_empty())
        .collect()
}

/// Matches headers like `**Description 1:** text` or `### Hashtags 2: #a, #b`.
/// Returns the number and whatever follows the colon.
fn parse_marker<'a>(line: &'a str, keyword: &str) -> Option<(usize, &'a str)> {
    let stripped = line.trim().trim_start_matches(['*', '#', ' ']);
    let head = stripped.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let after = stripped[keyword.len()..].trim_start();
    let digits_end = after
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(after.len());
    if digits_end == 0 {
        return None;
    }
    let index: usize = after[..digits_end].parse().ok()?;

    let rest = after[digits_end..].trim_start_matches('*').strip_prefix(':')?;
    Some((index, rest.trim_start_matches('*').trim()))
}

/// Splits on commas and whitespace, keeps `#`-prefixed tokens, drops repeats.
pub fn parse_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(|t| t.trim_matches(|c: char| c == '*' || c == '.' || c == ';'))
        .filter(|t| t.starts_with('#') && t.len() > 1)
        .filter(|t| seen.insert(t.to_lowercase()))
        .map(str::to_string)
        .collect()
}
