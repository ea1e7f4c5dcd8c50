use crate::format::{format_manifest, FormatOptions};
use crate::manifest::Manifest;
use crate::preset::resolve_preset;
use crate::schema::{ModuleType, DEFAULT_VERSION};
use serde_json::Value;

/// Options for [`create_manifest`]. Fields left as `None` keep whatever the
/// resolved preset provides.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub module_type: Option<ModuleType>,
    pub private: Option<bool>,
    pub preset: Option<String>,
}

/// Project shapes with a recommended preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Library,
    Cli,
    App,
    Monorepo,
}

impl ProjectKind {
    fn preset_name(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Cli => "cli",
            Self::App => "basic",
            Self::Monorepo => "monorepo",
        }
    }
}

/// Build a manifest from a preset template plus explicit overrides.
///
/// The resolved preset is instantiated fresh, so the returned record is
/// structurally independent from the registry. Unknown preset names resolve
/// to `basic`.
pub fn create_manifest(options: &CreateOptions) -> Manifest {
    let preset = resolve_preset(options.preset.as_deref().unwrap_or("basic"));
    let mut manifest = preset.instantiate();

    if let Some(name) = &options.name {
        manifest.insert("name", Value::String(name.clone()));
    }
    if let Some(version) = &options.version {
        manifest.insert("version", Value::String(version.clone()));
    }
    if let Some(description) = &options.description {
        manifest.insert("description", Value::String(description.clone()));
    }
    if let Some(license) = &options.license {
        manifest.insert("license", Value::String(license.clone()));
    }
    if let Some(author) = &options.author {
        manifest.insert("author", Value::String(author.clone()));
    }
    if let Some(module_type) = options.module_type {
        manifest.insert("type", Value::String(module_type.as_str().to_owned()));
    }
    if let Some(private) = options.private {
        manifest.insert("private", Value::Bool(private));
    }

    manifest
}

/// Create and serialize in one step, with a trailing newline.
pub fn create_manifest_string(options: &CreateOptions, indent: usize) -> String {
    let manifest = create_manifest(options);
    let format = FormatOptions {
        indent,
        trailing_newline: true,
        sort_fields: false,
        sort_scripts: false,
        sort_dependencies: false,
    };
    format_manifest(&manifest, &format)
}

/// The smallest valid-shaped record: `version` only, plus `name` if given.
pub fn create_minimal_manifest(name: Option<&str>, version: &str) -> Manifest {
    let mut manifest = Manifest::new();
    let version = if version.is_empty() {
        DEFAULT_VERSION
    } else {
        version
    };
    manifest.insert("version", Value::String(version.to_owned()));
    if let Some(name) = name {
        manifest.insert("name", Value::String(name.to_owned()));
    }
    manifest
}

/// Deep-clone `base`, then shallow-overlay every field of `overrides`.
/// `base` is left untouched.
pub fn clone_manifest(base: &Manifest, overrides: &Manifest) -> Manifest {
    let mut result = base.clone();
    for (field, value) in overrides.as_map() {
        result.insert(field.clone(), value.clone());
    }
    result
}

/// Create a manifest using the preset recommended for a project kind.
pub fn create_by_project_kind(kind: ProjectKind, name: Option<&str>) -> Manifest {
    create_manifest(&CreateOptions {
        name: name.map(str::to_owned),
        preset: Some(kind.preset_name().to_owned()),
        ..CreateOptions::default()
    })
}
