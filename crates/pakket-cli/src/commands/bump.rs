use super::{json_pretty, write_atomic, EXIT_SUCCESS};
use pakket_manifest::{bump_version, format_manifest, parse_manifest_file, FormatOptions, ReleaseKind};
use std::path::Path;

pub fn run(path: &Path, kind: ReleaseKind, json: bool) -> Result<u8, String> {
    let manifest = parse_manifest_file(path).map_err(|e| e.to_string())?;
    let old_version = manifest.version().unwrap_or("(none)").to_owned();

    let bumped = bump_version(&manifest, kind);
    let new_version = bumped.version().unwrap_or_default().to_owned();

    // only the version changes; leave the author's field order alone
    let options = FormatOptions {
        sort_fields: false,
        sort_dependencies: false,
        ..FormatOptions::default()
    };
    write_atomic(path, &format_manifest(&bumped, &options))?;

    if json {
        let payload = serde_json::json!({
            "status": "bumped",
            "path": path,
            "level": kind.as_str(),
            "old_version": old_version,
            "new_version": new_version,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("{old_version} -> {new_version}");
    }
    Ok(EXIT_SUCCESS)
}
