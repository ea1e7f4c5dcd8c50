use super::{json_pretty, write_atomic, EXIT_SUCCESS};
use pakket_manifest::{format_manifest_str, FormatOptions};
use std::path::Path;

pub fn run(
    path: &Path,
    indent: usize,
    sort_scripts: bool,
    sort_dependencies: bool,
    json: bool,
) -> Result<u8, String> {
    if !path.exists() {
        return Err(format!("manifest not found at {}", path.display()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read manifest file: {e}"))?;

    let options = FormatOptions {
        indent,
        sort_scripts,
        sort_dependencies,
        ..FormatOptions::default()
    };
    let formatted = format_manifest_str(&content, &options).map_err(|e| e.to_string())?;

    let changed = formatted != content;
    if changed {
        write_atomic(path, &formatted)?;
    }
    tracing::debug!(path = %path.display(), changed, "formatted manifest");

    if json {
        let payload = serde_json::json!({
            "status": if changed { "formatted" } else { "unchanged" },
            "path": path,
        });
        println!("{}", json_pretty(&payload)?);
    } else if changed {
        println!("formatted {}", path.display());
    } else {
        println!("{} already formatted", path.display());
    }
    Ok(EXIT_SUCCESS)
}
