use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory under the workspace root where benchmark reports land.
pub const TEMP_RESULTS_PATH: &str = ".apex_benchmarks";

/// Timings gathered from a single benchmark run, serialized into the
/// results directory as JSON.
#[derive(Serialize, Deserialize, Debug)]
pub struct WorkloadReport {
    pub key_type: String,
    pub workload: String,
    pub size: usize,
    pub fill_ns: u128,
    pub drain_ns: u128,
    pub peak_len: usize,
}

/// Get the current path to current workspace
pub fn get_current_workspace() -> PathBuf {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .unwrap()
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output).unwrap().trim());
    cargo_path.parent().unwrap().to_path_buf()
}
