use crate::manifest::{parse_manifest_str, Manifest, ManifestError};
use crate::sort::{sort_by_canonical_order, sort_dependencies, sort_scripts};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Options for [`format_manifest`]. The defaults produce the conventional
/// package.json layout: two-space indent, sorted fields and dependencies,
/// scripts left in authored order, trailing newline.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub indent: usize,
    pub trailing_newline: bool,
    pub sort_fields: bool,
    pub sort_scripts: bool,
    pub sort_dependencies: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            trailing_newline: true,
            sort_fields: true,
            sort_scripts: false,
            sort_dependencies: true,
        }
    }
}

/// Apply the configured sort passes and serialize to indented JSON text.
///
/// Idempotent for fixed options: formatting an already-formatted record
/// reproduces the same bytes.
pub fn format_manifest(manifest: &Manifest, options: &FormatOptions) -> String {
    let mut formatted = manifest.clone();
    if options.sort_fields {
        formatted = sort_by_canonical_order(&formatted);
    }
    if options.sort_scripts {
        formatted = sort_scripts(&formatted);
    }
    if options.sort_dependencies {
        formatted = sort_dependencies(&formatted);
    }

    let mut text = render(&formatted, options.indent);
    if options.trailing_newline {
        text.push('\n');
    }
    text
}

/// Parse `text` as JSON, then format. A malformed document is surfaced as
/// [`ManifestError::ParseJson`] carrying the parser's message, never
/// swallowed.
pub fn format_manifest_str(text: &str, options: &FormatOptions) -> Result<String, ManifestError> {
    let manifest = parse_manifest_str(text)?;
    Ok(format_manifest(&manifest, options))
}

/// [`format_manifest`] with the default options.
pub fn prettify_manifest(manifest: &Manifest) -> String {
    format_manifest(manifest, &FormatOptions::default())
}

fn render(manifest: &Manifest, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    // an in-memory JSON tree always serializes
    manifest
        .serialize(&mut serializer)
        .expect("manifest serialization is infallible");
    String::from_utf8(out).expect("serde_json emits UTF-8")
}
