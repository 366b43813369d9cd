//! JSON artifact writing with provenance sidecars.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Serialize `doc` as pretty JSON to `path` and drop a
/// `<stem>.provenance.json` sidecar next to it recording the build revision,
/// the caller parameters, and the output path.
pub fn write_with_provenance<T: Serialize>(path: &Path, doc: &T, params: Value) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;

    let sidecar = sidecar_path(path);
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let provenance = json!({
        "code_rev": rev,
        "params": params,
        "outputs": [path.to_string_lossy()],
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&provenance)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}
