//! Small helpers shared across the toolkit: map sorting, merging, version
//! comparison, and package-name utilities.

use crate::manifest::Manifest;
use crate::schema::DependencyGroup;
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Rebuild a JSON object with its keys in ascending code-point order.
pub fn sort_object(map: &Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Merge `overlay` into a deep clone of `base`.
///
/// Dependency groups and `scripts` merge key-wise (overlay entries win);
/// every other field replaces wholesale. `base` is left untouched.
pub fn merge_manifests(base: &Manifest, overlay: &Manifest) -> Manifest {
    let mut result = base.clone();

    for (field, value) in overlay.as_map() {
        let keywise = value.is_object()
            && (field == "scripts"
                || DependencyGroup::ALL.iter().any(|g| g.as_str() == field));
        if keywise {
            let slot = result
                .as_map_mut()
                .entry(field.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            match (slot, value) {
                (Value::Object(existing), Value::Object(incoming)) => {
                    for (key, entry) in incoming {
                        existing.insert(key.clone(), entry.clone());
                    }
                }
                (other, incoming) => *other = incoming.clone(),
            }
        } else {
            result.insert(field.clone(), value.clone());
        }
    }

    result
}

/// Compare two version strings by their numeric components, ignoring any
/// leading range operator (`^1.2.3` compares as `1.2.3`). Missing components
/// count as zero.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = version_components(a);
    let right = version_components(b);
    for i in 0..left.len().max(right.len()) {
        let x = left.get(i).copied().unwrap_or(0);
        let y = right.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

fn version_components(version: &str) -> Vec<u64> {
    version
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .split('.')
        .map(|part| {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}

/// Strip an `@scope/` prefix and lowercase the remainder.
pub fn normalize_package_name(name: &str) -> String {
    if let Some(rest) = name.strip_prefix('@') {
        if let Some((_, bare)) = rest.split_once('/') {
            return bare.to_lowercase();
        }
    }
    name.to_lowercase()
}

/// The scope of a scoped package name, without the `@`, or `None`.
pub fn package_scope(name: &str) -> Option<&str> {
    name.strip_prefix('@')?.split_once('/').map(|(scope, _)| scope)
}

pub fn is_scoped_package(name: &str) -> bool {
    name.starts_with('@') && name.contains('/')
}

/// Recursively drop null, empty-string, empty-object, and empty-array values.
pub fn clean_manifest(manifest: &Manifest) -> Manifest {
    let mut cleaned = Map::new();
    for (field, value) in manifest.as_map() {
        if let Some(kept) = clean_value(value) {
            cleaned.insert(field.clone(), kept);
        }
    }
    Manifest::from_map(cleaned)
}

fn clean_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Object(map) => {
            let cleaned: Map<String, Value> = map
                .iter()
                .filter_map(|(key, entry)| clean_value(entry).map(|kept| (key.clone(), kept)))
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(Value::Object(cleaned))
            }
        }
        Value::Array(items) if items.is_empty() => None,
        other => Some(other.clone()),
    }
}

/// Render a dependency group as `name@range` strings, in map order.
pub fn format_dependency_list(deps: &Map<String, Value>) -> Vec<String> {
    deps.iter()
        .map(|(name, value)| match value.as_str() {
            Some(range) => format!("{name}@{range}"),
            None => format!("{name}@{value}"),
        })
        .collect()
}
