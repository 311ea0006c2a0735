//! Per-track aggregation of counted clip durations.

use super::duration::{FrameRate, format_hms, frames_to_seconds};
use super::filename::ParsedAsset;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Aggregation bucket identity: `(prefix, title)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackKey {
    /// Technical batch prefix.
    pub prefix: String,
    /// Track title.
    pub title: String,
}

/// Running totals for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAggregate {
    /// Bucket identity.
    pub key: TrackKey,
    /// Author from the first counted occurrence.
    pub author: String,
    /// Number of counted clip entries.
    pub occurrences: u64,
    /// Sum of counted clip durations, in frames.
    pub total_frames: u64,
}

/// Finalized report row for one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackSummary {
    /// Technical batch prefix.
    pub prefix: String,
    /// Track title.
    pub track: String,
    /// Track author (may be empty).
    pub author: String,
    /// Number of counted clip entries.
    pub repeats: u64,
    /// Total duration as `HH:MM:SS`.
    pub duration: String,
    /// Total duration in whole seconds.
    pub seconds: u64,
    /// Total duration in frames.
    pub frames: u64,
}

/// Insertion-ordered accumulator of [`TrackAggregate`]s.
///
/// Tracks keep the order in which their key was first recorded, so reports
/// are stable across runs on the same document.
#[derive(Debug, Clone, Default)]
pub struct TrackTally {
    tracks: Vec<TrackAggregate>,
    index: HashMap<TrackKey, usize>,
}

impl TrackTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one clip of `frames` duration for `asset`.
    ///
    /// The first occurrence of a key fixes its author; later occurrences with
    /// a different author only add to the totals.
    pub fn record(&mut self, asset: ParsedAsset, frames: u64) {
        let key = asset.key();
        self.add(key, asset.author, 1, frames);
    }

    /// Fold another tally into this one, keeping this tally's order and
    /// authors for keys present in both.
    ///
    /// Totals saturate at `u64::MAX`.
    pub fn merge(&mut self, other: Self) {
        for track in other.tracks {
            self.add(track.key, track.author, track.occurrences, track.total_frames);
        }
    }

    fn add(&mut self, key: TrackKey, author: String, occurrences: u64, frames: u64) {
        if let Some(&slot) = self.index.get(&key) {
            let track = &mut self.tracks[slot];
            if track.author != author {
                debug!(
                    "Keeping author '{}' for '{}{}', ignoring '{}'",
                    track.author,
                    key.prefix,
                    key.title,
                    author
                );
            }
            track.occurrences = track.occurrences.saturating_add(occurrences);
            track.total_frames = track.total_frames.saturating_add(frames);
        } else {
            self.index.insert(key.clone(), self.tracks.len());
            self.tracks.push(TrackAggregate {
                key,
                author,
                occurrences,
                total_frames: frames,
            });
        }
    }

    /// Look up the running totals for a key.
    pub fn get(&self, key: &TrackKey) -> Option<&TrackAggregate> {
        self.index.get(key).map(|&slot| &self.tracks[slot])
    }

    /// Aggregates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TrackAggregate> {
        self.tracks.iter()
    }

    /// Number of distinct tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether no track has been recorded.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Convert every aggregate to a report row using `rate`.
    pub fn finalize(&self, rate: FrameRate) -> Vec<TrackSummary> {
        self.tracks
            .iter()
            .map(|track| {
                let seconds = frames_to_seconds(track.total_frames, rate);
                TrackSummary {
                    prefix: track.key.prefix.clone(),
                    track: track.key.title.clone(),
                    author: track.author.clone(),
                    repeats: track.occurrences,
                    duration: format_hms(seconds),
                    seconds,
                    frames: track.total_frames,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn asset(prefix: &str, title: &str, author: &str) -> ParsedAsset {
        ParsedAsset {
            prefix: prefix.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_record_accumulates_per_key() {
        let mut tally = TrackTally::new();
        tally.record(asset("a_b_1_", "One", "X"), 100);
        tally.record(asset("a_b_1_", "Two", "Y"), 50);
        tally.record(asset("a_b_1_", "One", "X"), 25);

        assert_eq!(tally.len(), 2);
        let one = tally.get(&asset("a_b_1_", "One", "").key()).unwrap();
        assert_eq!(one.total_frames, 125);
        assert_eq!(one.occurrences, 2);
    }

    #[test]
    fn test_first_author_wins() {
        let mut tally = TrackTally::new();
        tally.record(asset("p_", "Song", "First Author"), 10);
        tally.record(asset("p_", "Song", "Second Author"), 10);

        let track = tally.iter().next().unwrap();
        assert_eq!(track.author, "First Author");
        assert_eq!(track.occurrences, 2);
    }

    #[test]
    fn test_same_title_different_prefix_are_distinct() {
        let mut tally = TrackTally::new();
        tally.record(asset("lib_a_1_", "Song", ""), 10);
        tally.record(asset("lib_b_1_", "Song", ""), 10);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn test_finalize_preserves_first_seen_order() {
        let mut tally = TrackTally::new();
        tally.record(asset("p_", "Zulu", ""), 25);
        tally.record(asset("p_", "Alpha", ""), 50);
        tally.record(asset("p_", "Zulu", ""), 25);

        let rows = tally.finalize(FrameRate::default());
        let titles: Vec<_> = rows.iter().map(|r| r.track.as_str()).collect();
        assert_eq!(titles, ["Zulu", "Alpha"]);
        assert_eq!(rows[0].frames, 50);
        assert_eq!(rows[0].seconds, 2);
        assert_eq!(rows[0].duration, "00:00:02");
        assert_eq!(rows[0].repeats, 2);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let mut tally = TrackTally::new();
        tally.record(asset("p_", "Long", ""), u64::MAX);
        tally.record(asset("p_", "Long", ""), u64::MAX);

        let mut other = TrackTally::new();
        other.record(asset("p_", "Long", ""), 1);
        tally.merge(other);

        let track = tally.iter().next().unwrap();
        assert_eq!(track.total_frames, u64::MAX);
        assert_eq!(track.occurrences, 3);

        let rows = tally.finalize(FrameRate::default());
        assert_eq!(rows[0].frames, u64::MAX);
    }

    #[test]
    fn test_merge_appends_new_and_sums_existing() {
        let mut first = TrackTally::new();
        first.record(asset("p_", "Song", "A"), 10);

        let mut second = TrackTally::new();
        second.record(asset("p_", "Other", "C"), 5);
        second.record(asset("p_", "Song", "B"), 20);
        second.record(asset("p_", "Song", "B"), 20);

        first.merge(second);

        let tracks: Vec<_> = first.iter().collect();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].key.title, "Song");
        assert_eq!(tracks[0].author, "A");
        assert_eq!(tracks[0].occurrences, 3);
        assert_eq!(tracks[0].total_frames, 50);
        assert_eq!(tracks[1].key.title, "Other");
    }

    #[test]
    fn test_empty_tally_finalizes_to_nothing() {
        let tally = TrackTally::new();
        assert!(tally.is_empty());
        assert!(tally.finalize(FrameRate::default()).is_empty());
    }
}
