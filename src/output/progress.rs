//! Progress bar utilities for timeline processing.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for processing multiple timeline files.
///
/// Returns `None` when disabled or for a single file, where a bar adds
/// nothing over the log line.
pub fn create_file_progress(total_files: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_files < 2 {
        return None;
    }

    let pb = ProgressBar::new(total_files as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} timelines {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Show the file currently being processed.
pub fn set_current(pb: Option<&ProgressBar>, name: &str) {
    if let Some(pb) = pb {
        pb.set_message(name.to_string());
    }
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Increment a progress bar.
pub fn inc_progress(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_disabled() {
        assert!(create_file_progress(10, false).is_none());
    }

    #[test]
    fn test_progress_skipped_for_single_file() {
        assert!(create_file_progress(1, true).is_none());
        assert!(create_file_progress(0, true).is_none());
    }

    #[test]
    fn test_progress_counts_files() {
        let pb = create_file_progress(3, true);
        inc_progress(pb.as_ref());
        set_current(pb.as_ref(), "b.xml");
        assert_eq!(pb.as_ref().map(ProgressBar::position), Some(1));
        finish_progress(pb, "Complete");
    }
}
