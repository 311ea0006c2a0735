//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{
    ProcessCheck, collect_input_files, combined_path_for, ensure_output_dir, output_dir_for,
    output_path_for, should_process,
};
pub use processor::{
    ProcessResult, ReportOptions, process_file, scan_file, write_csv_to_stdout, write_outputs,
};
