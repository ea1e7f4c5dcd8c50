//! Package manifest model for pakket.
//!
//! This crate defines the transformation core: the open-ended `Manifest`
//! record, preset templates (`BUILTIN_PRESETS`), creation from options
//! (`create_manifest`), pure non-mutating edit operations (`add_dependency`,
//! `bump_version`, ...), canonical sorting (`sort_by_canonical_order`),
//! serialization (`format_manifest`), and validation (`validate_manifest`).
//!
//! Everything is synchronous and side-effect free: records are deep-cloned
//! on edit, so callers can share and retain old values without coordination.

pub mod create;
pub mod format;
pub mod manifest;
pub mod manipulate;
pub mod preset;
pub mod schema;
pub mod sort;
pub mod util;
pub mod validate;

pub use create::{
    clone_manifest, create_by_project_kind, create_manifest, create_manifest_string,
    create_minimal_manifest, CreateOptions, ProjectKind,
};
pub use format::{format_manifest, format_manifest_str, prettify_manifest, FormatOptions};
pub use manifest::{parse_manifest_file, parse_manifest_str, Manifest, ManifestError};
pub use manipulate::{
    add_dependencies, add_dependency, add_keywords, add_script, bump_version, remove_dependencies,
    remove_dependency, remove_field, remove_keywords, remove_script, set_field,
    update_dependency_version, ReleaseKind,
};
pub use preset::{get_preset, list_presets, resolve_preset, Preset, BUILTIN_PRESETS};
pub use schema::{
    DependencyGroup, ModuleType, CANONICAL_FIELD_ORDER, COMMON_LICENSES, DEFAULT_VERSION,
    MODULE_TYPES, NODE_CORE_MODULES, REQUIRED_FIELDS, SCRIPT_EXTENSIONS,
};
pub use sort::{
    sort_by_canonical_order, sort_by_field_order, sort_dependencies, sort_manifest, sort_scripts,
    sort_scripts_by_order, SortOptions,
};
pub use util::{
    clean_manifest, compare_versions, format_dependency_list, is_scoped_package, merge_manifests,
    normalize_package_name, package_scope, sort_object,
};
pub use validate::{
    is_valid_manifest, validate_manifest, validate_name, validate_version, ValidationIssue,
    ValidationResult,
};
