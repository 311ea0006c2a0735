//! Asset filename decomposition.
//!
//! Stock-music libraries deliver files named like
//! `apollomedia_gtpm_153_12_thin-margins_oliver-spencer-robin-kent.mp3`:
//! a technical batch prefix, the track title and the author, joined by `_`
//! with `-` standing in for spaces. This is a best-effort classifier, not a
//! grammar: names that do not follow the convention still produce a prefix
//! and a (possibly degenerate) title, never an error.

use super::aggregate::TrackKey;
use regex::Regex;
use std::sync::LazyLock;

/// A filename split into its report fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAsset {
    /// Technical batch identifier, including its trailing `_`. Never empty.
    pub prefix: String,
    /// Human-readable, title-cased track title.
    pub title: String,
    /// Title-cased author, or empty if none was detected.
    pub author: String,
}

impl ParsedAsset {
    /// Aggregation key for this asset.
    pub fn key(&self) -> TrackKey {
        TrackKey {
            prefix: self.prefix.clone(),
            title: self.title.clone(),
        }
    }
}

/// Split an asset filename into prefix, title and author.
///
/// Rules, applied to the name with its final extension removed:
/// - the author is the last `_`-separated segment containing a `-`;
/// - the prefix is the leading `letters_alnum_digits[_digits...]_` run, or
///   failing that the first three segments joined with `_` plus a trailing `_`;
/// - the title is whatever follows the prefix, minus its last `_` segment;
/// - a name without any `_` gets the prefix `_` and is its own title.
pub fn decompose_filename(filename: &str) -> ParsedAsset {
    let name = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
    let segments: Vec<&str> = name.split('_').collect();

    let author = segments
        .iter()
        .rev()
        .find(|segment| segment.contains('-'))
        .map(|raw| title_case(&clean(raw)))
        .unwrap_or_default();

    if segments.len() == 1 {
        return ParsedAsset {
            prefix: "_".to_string(),
            title: title_case(&clean(name)),
            author,
        };
    }

    let prefix = technical_prefix(name).map_or_else(
        || format!("{}_", segments[..segments.len().min(3)].join("_")),
        str::to_string,
    );

    // A fallback prefix built from exactly three segments is one `_` longer
    // than the name, leaving nothing for the title.
    let rest = name.strip_prefix(prefix.as_str()).unwrap_or("");
    let title_core = rest.rsplit_once('_').map_or(rest, |(head, _)| head);

    ParsedAsset {
        prefix,
        title: title_case(&clean(title_core)),
        author,
    }
}

/// Technical batch prefix: letters, an alphanumeric batch id, then a run
/// of digits and underscores ending in `_`.
#[allow(clippy::expect_used)]
static TECHNICAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]+_[a-zA-Z0-9]+_[0-9_]+_)").expect("technical prefix pattern is valid")
});

/// Leading technical prefix of `name`, including its trailing `_`.
fn technical_prefix(name: &str) -> Option<&str> {
    TECHNICAL_PREFIX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Turn separator characters into spaces and trim.
fn clean(raw: &str) -> String {
    raw.replace(['-', '_'], " ").trim().to_string()
}

/// Title-case a string: a cased letter is titlecased at the start of a word
/// and lowercased inside one, where a word is a run of cased letters.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase() || titlecase_digraph(c).is_some();
        if cased && prev_cased {
            out.extend(c.to_lowercase());
        } else if cased {
            match titlecase_digraph(c) {
                Some(title) => out.push(title),
                None => out.extend(c.to_uppercase()),
            }
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}

/// Titlecase form of the Latin digraph letters (`ǅ`, `ǈ`, `ǋ`, `ǲ`), which
/// `char::to_uppercase` would turn into full capitals.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}
