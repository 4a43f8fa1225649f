use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<artifact>.provenance.json`: code revision, library version,
/// callsite, run parameters, inputs and the artifact path.
#[track_caller]
pub fn write_sidecar<P: Serialize>(artifact: &Path, params: &P, inputs: &[&Path]) -> Result<PathBuf> {
    let provenance_path = provenance_path(artifact);
    let callsite = Location::caller();
    let inputs: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
    let params = serde_json::to_value(params).context("serializing run params")?;
    let doc = json!({
        "code_rev": current_git_rev(),
        "inpoly_version": inpoly::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "params": params,
        "inputs": inputs,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
