//! Canonical ordering passes. All of them are idempotent and, like the
//! manipulate operations, return a new record.

use crate::manifest::Manifest;
use crate::schema::{DependencyGroup, CANONICAL_FIELD_ORDER};
use crate::util::sort_object;
use serde_json::{Map, Value};

/// Which passes [`sort_manifest`] applies on top of the canonical field order.
#[derive(Debug, Clone)]
pub struct SortOptions {
    pub sort_dependencies: bool,
    pub sort_scripts: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            sort_dependencies: true,
            sort_scripts: false,
        }
    }
}

/// Canonical field order plus the optional dependency/script passes.
pub fn sort_manifest(manifest: &Manifest, options: &SortOptions) -> Manifest {
    let mut result = sort_by_canonical_order(manifest);
    if options.sort_dependencies {
        result = sort_dependencies(&result);
    }
    if options.sort_scripts {
        result = sort_scripts(&result);
    }
    result
}

/// Reorder top-level fields into [`CANONICAL_FIELD_ORDER`].
pub fn sort_by_canonical_order(manifest: &Manifest) -> Manifest {
    sort_by_field_order(manifest, CANONICAL_FIELD_ORDER)
}

/// Stable partition: fields named in `order` first, in that order, then all
/// remaining fields in their original relative order.
pub fn sort_by_field_order(manifest: &Manifest, order: &[&str]) -> Manifest {
    let map = manifest.as_map();
    let mut sorted = Map::new();
    for field in order {
        if let Some(value) = map.get(*field) {
            sorted.insert((*field).to_owned(), value.clone());
        }
    }
    for (field, value) in map {
        if !order.contains(&field.as_str()) {
            sorted.insert(field.clone(), value.clone());
        }
    }
    Manifest::from_map(sorted)
}

/// Alphabetize the key order inside each of the four dependency groups
/// independently. Groups that are absent or not objects are left alone.
pub fn sort_dependencies(manifest: &Manifest) -> Manifest {
    let mut result = manifest.clone();
    for group in DependencyGroup::ALL {
        if let Some(Value::Object(deps)) = result.as_map_mut().get_mut(group.as_str()) {
            *deps = sort_object(deps);
        }
    }
    result
}

/// Alphabetize script keys.
pub fn sort_scripts(manifest: &Manifest) -> Manifest {
    let mut result = manifest.clone();
    if let Some(Value::Object(scripts)) = result.as_map_mut().get_mut("scripts") {
        *scripts = sort_object(scripts);
    }
    result
}

/// Scripts named in `order` first, in that order, then the rest alphabetically.
pub fn sort_scripts_by_order(manifest: &Manifest, order: &[&str]) -> Manifest {
    let mut result = manifest.clone();
    if let Some(Value::Object(scripts)) = result.as_map_mut().get_mut("scripts") {
        let mut sorted = Map::new();
        for name in order {
            if let Some(command) = scripts.get(*name) {
                sorted.insert((*name).to_owned(), command.clone());
            }
        }
        let mut remaining: Vec<&String> = scripts
            .keys()
            .filter(|name| !order.contains(&name.as_str()))
            .collect();
        remaining.sort_unstable();
        for name in remaining {
            sorted.insert(name.clone(), scripts[name.as_str()].clone());
        }
        *scripts = sorted;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parse_manifest_str;

    fn keys(manifest: &Manifest) -> Vec<String> {
        manifest.keys().map(str::to_owned).collect()
    }

    #[test]
    fn canonical_order_puts_known_fields_first() {
        let manifest = parse_manifest_str(
            r#"{"license": "MIT", "name": "demo", "custom": 1, "version": "1.0.0"}"#,
        )
        .unwrap();
        let sorted = sort_by_canonical_order(&manifest);
        assert_eq!(keys(&sorted), ["name", "version", "license", "custom"]);
    }

    #[test]
    fn unknown_fields_keep_relative_order() {
        let manifest = parse_manifest_str(
            r#"{"zzz": 1, "name": "demo", "aaa": 2, "mmm": 3}"#,
        )
        .unwrap();
        let sorted = sort_by_canonical_order(&manifest);
        assert_eq!(keys(&sorted), ["name", "zzz", "aaa", "mmm"]);
    }

    #[test]
    fn canonical_sort_is_idempotent() {
        let manifest = parse_manifest_str(
            r#"{"scripts": {"b": "x", "a": "y"}, "name": "demo", "other": true, "version": "1.0.0"}"#,
        )
        .unwrap();
        let once = sort_by_canonical_order(&manifest);
        let twice = sort_by_canonical_order(&once);
        assert_eq!(keys(&once), keys(&twice));
        assert_eq!(once, twice);
    }

    #[test]
    fn dependencies_sort_alphabetically_per_group() {
        let manifest = parse_manifest_str(
            r#"{
                "dependencies": {"z": "^1.0.0", "a": "^1.0.0"},
                "devDependencies": {"m": "^2.0.0", "b": "^2.0.0"}
            }"#,
        )
        .unwrap();
        let sorted = sort_dependencies(&manifest);
        let deps: Vec<&str> = sorted
            .dependency_group(DependencyGroup::Dependencies)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(deps, ["a", "z"]);
        let dev: Vec<&str> = sorted
            .dependency_group(DependencyGroup::DevDependencies)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(dev, ["b", "m"]);
    }

    #[test]
    fn dependency_sort_is_idempotent() {
        let manifest = parse_manifest_str(
            r#"{"dependencies": {"z": "^1.0.0", "a": "^1.0.0", "k": "*"}}"#,
        )
        .unwrap();
        assert_eq!(
            sort_dependencies(&manifest),
            sort_dependencies(&sort_dependencies(&manifest))
        );
    }

    #[test]
    fn scripts_sort_alphabetically() {
        let manifest =
            parse_manifest_str(r#"{"scripts": {"test": "t", "build": "b", "dev": "d"}}"#).unwrap();
        let sorted = sort_scripts(&manifest);
        let names: Vec<&str> = sorted
            .get("scripts")
            .and_then(Value::as_object)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["build", "dev", "test"]);
    }

    #[test]
    fn scripts_sort_by_explicit_order_then_alphabetical() {
        let manifest = parse_manifest_str(
            r#"{"scripts": {"test": "t", "build": "b", "dev": "d", "lint": "l"}}"#,
        )
        .unwrap();
        let sorted = sort_scripts_by_order(&manifest, &["dev", "build"]);
        let names: Vec<&str> = sorted
            .get("scripts")
            .and_then(Value::as_object)
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["dev", "build", "lint", "test"]);
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let manifest = parse_manifest_str(
            r#"{"version": "1.0.0", "name": "demo", "dependencies": {"z": "*", "a": "*"}}"#,
        )
        .unwrap();
        let snapshot = manifest.clone();
        let _ = sort_manifest(&manifest, &SortOptions::default());
        assert_eq!(keys(&manifest), keys(&snapshot));
        assert_eq!(manifest, snapshot);
    }
}
