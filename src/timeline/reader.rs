//! Timeline document traversal.
//!
//! Walks every `clipitem` of a Premiere Pro / FCP7 XML export in document
//! order and feeds the countable ones into a [`TrackTally`].
//!
//! Stereo and multichannel audio is exported as several mono clips that
//! reference each other through `link/linkclipref`. Only the first clip of
//! such a group is counted: once a clip is visited, its own id and every id
//! it links to are marked as seen, and any later clip linking to a seen id
//! is skipped.

use super::aggregate::TrackTally;
use super::filename::decompose_filename;
use crate::constants::xml;
use crate::error::{Error, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

/// One timeline entry as read from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawClip<'a> {
    /// Clip `id` attribute.
    pub id: Option<&'a str>,
    /// Ids of sibling clips sharing the same source media.
    pub link_refs: Vec<&'a str>,
    /// Asset filename (`file/name`, falling back to the clip `name`).
    pub filename: Option<&'a str>,
    /// In point, if present and numeric.
    pub in_frame: Option<i64>,
    /// Out point, if present and numeric.
    pub out_frame: Option<i64>,
}

impl<'a> RawClip<'a> {
    /// Extract the fields of a `clipitem` element.
    pub fn from_node(node: Node<'a, '_>) -> Self {
        let link_refs = node
            .children()
            .filter(|child| child.has_tag_name(xml::LINK))
            .flat_map(|link| link.children())
            .filter(|child| child.has_tag_name(xml::LINK_CLIP_REF))
            .filter_map(trimmed_text)
            .collect();

        let filename = child(node, xml::FILE)
            .and_then(|file| child_text(file, xml::NAME))
            .or_else(|| child_text(node, xml::NAME));

        Self {
            id: node.attribute(xml::ID),
            link_refs,
            filename,
            in_frame: child_text(node, xml::IN).and_then(|text| text.parse().ok()),
            out_frame: child_text(node, xml::OUT).and_then(|text| text.parse().ok()),
        }
    }
}

/// What happened to a visited clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOutcome {
    /// Clip contributed to its track's totals.
    Counted,
    /// Clip links to an already-seen clip.
    LinkedDuplicate,
    /// Neither `file/name` nor `name` holds a filename.
    MissingFilename,
    /// `in` or `out` is missing or not an integer.
    MissingMarkers,
    /// `out` is not after `in`.
    EmptyDuration,
}

/// Per-document traversal counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Clip entries visited.
    pub clips: usize,
    /// Clips counted into a track.
    pub counted: usize,
    /// Clips skipped as linked duplicates.
    pub duplicates: usize,
    /// Clips skipped as malformed.
    pub skipped: usize,
}

/// Result of reading one timeline document.
#[derive(Debug, Clone, Default)]
pub struct TimelineScan {
    /// Per-track totals in first-seen order.
    pub tracks: TrackTally,
    /// Traversal counters.
    pub stats: ReadStats,
}

/// Single-pass traversal state for one document.
///
/// The seen-set lives only as long as the reader, so separate documents
/// never suppress each other's clips.
#[derive(Debug, Default)]
pub struct TimelineReader {
    seen: HashSet<String>,
    tally: TrackTally,
    stats: ReadStats,
}

impl TimelineReader {
    /// Create a reader with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit every `clipitem` of a parsed document in document order.
    pub fn read_document(&mut self, doc: &Document<'_>) {
        for node in doc
            .descendants()
            .filter(|node| node.has_tag_name(xml::CLIP_ITEM))
        {
            self.visit(&RawClip::from_node(node));
        }
    }

    /// Apply the dedup rule to one clip and count it if it is valid.
    pub fn visit(&mut self, clip: &RawClip<'_>) -> ClipOutcome {
        let outcome = self.classify(clip);
        let id = clip.id.unwrap_or("");

        self.stats.clips += 1;
        match outcome {
            ClipOutcome::Counted => self.stats.counted += 1,
            ClipOutcome::LinkedDuplicate => {
                trace!("Skipping clip '{id}': linked to an already counted clip");
                self.stats.duplicates += 1;
            }
            ClipOutcome::MissingFilename => {
                trace!("Skipping clip '{id}': no file name");
                self.stats.skipped += 1;
            }
            ClipOutcome::MissingMarkers => {
                trace!("Skipping clip '{id}': missing or invalid in/out");
                self.stats.skipped += 1;
            }
            ClipOutcome::EmptyDuration => {
                trace!("Skipping clip '{id}': out point is not after in point");
                self.stats.skipped += 1;
            }
        }

        outcome
    }

    fn classify(&mut self, clip: &RawClip<'_>) -> ClipOutcome {
        if clip.link_refs.iter().any(|r| self.seen.contains(*r)) {
            return ClipOutcome::LinkedDuplicate;
        }
        self.seen
            .extend(clip.link_refs.iter().map(|r| (*r).to_string()));
        if let Some(id) = clip.id.filter(|id| !id.is_empty()) {
            self.seen.insert(id.to_string());
        }

        let Some(filename) = clip.filename else {
            return ClipOutcome::MissingFilename;
        };
        let asset = decompose_filename(filename);

        let (Some(in_frame), Some(out_frame)) = (clip.in_frame, clip.out_frame) else {
            return ClipOutcome::MissingMarkers;
        };
        if out_frame <= in_frame {
            return ClipOutcome::EmptyDuration;
        }

        self.tally.record(asset, out_frame.abs_diff(in_frame));
        ClipOutcome::Counted
    }

    /// Finish the traversal.
    pub fn finish(self) -> TimelineScan {
        debug!(
            "Visited {} clips: {} counted, {} linked duplicates, {} skipped, {} tracks",
            self.stats.clips,
            self.stats.counted,
            self.stats.duplicates,
            self.stats.skipped,
            self.tally.len()
        );
        TimelineScan {
            tracks: self.tally,
            stats: self.stats,
        }
    }
}

/// Parse a timeline document held in memory.
pub fn read_timeline_str(text: &str) -> Result<TimelineScan> {
    scan(text, "<memory>")
}

/// Read and parse a timeline document from disk.
pub fn read_timeline_file(path: &Path) -> Result<TimelineScan> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::TimelineNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::TimelineRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    scan(&text, &format!("'{}'", path.display()))
}

fn scan(text: &str, origin: &str) -> Result<TimelineScan> {
    // Premiere exports carry a `<!DOCTYPE xmeml>` declaration.
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(text, options).map_err(|e| Error::TimelineParse {
        origin: origin.to_string(),
        source: e,
    })?;

    let mut reader = TimelineReader::new();
    reader.read_document(&doc);
    Ok(reader.finish())
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| child.has_tag_name(name))
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name).and_then(trimmed_text)
}

fn trimmed_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text().map(str::trim).filter(|text| !text.is_empty())
}
