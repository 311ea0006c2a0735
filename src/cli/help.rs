//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;

/// Print a short usage guide, showing the effective defaults.
pub fn print_smart_help(config: &Config) {
    println!("Usage: tracktally [TIMELINES]... [OPTIONS]");
    println!();
    println!("Export the sequence from Premiere Pro via File > Export > Final Cut Pro XML,");
    println!("then run:");
    println!();
    println!("   tracktally project.xml");
    println!();
    println!("Current defaults:");
    println!("   frame rate: {} fps (override with --fps)", config.defaults.frame_rate);
    println!("   formats:    {}", format_list(config));
    println!();
    println!("Run 'tracktally -h' for all options or 'tracktally config init' to create");
    println!("a configuration file.");
}

fn format_list(config: &Config) -> String {
    config
        .defaults
        .formats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
