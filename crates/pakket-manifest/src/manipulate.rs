//! Non-mutating edit operations over a manifest.
//!
//! Every operation takes the input by reference, clones it, and edits the
//! clone. The input record, including its nested dependency maps, is never
//! altered in place; callers can keep old records around as history.

use crate::manifest::Manifest;
use crate::schema::{DependencyGroup, DEFAULT_VERSION};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Which of the three leading version components a bump increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    Major,
    Minor,
    Patch,
}

impl ReleaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            other => Err(format!(
                "unknown release kind '{other}' (expected: major, minor, patch)"
            )),
        }
    }
}

fn object_entry<'a>(manifest: &'a mut Manifest, field: &str) -> &'a mut Map<String, Value> {
    let slot = manifest
        .as_map_mut()
        .entry(field.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        // a non-object under a mapping field is out of model; start fresh
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut().expect("slot was just made an object")
}

/// Insert or overwrite a dependency entry, creating the group if absent.
pub fn add_dependency(
    manifest: &Manifest,
    name: &str,
    range: &str,
    group: DependencyGroup,
) -> Manifest {
    let mut result = manifest.clone();
    object_entry(&mut result, group.as_str())
        .insert(name.to_owned(), Value::String(range.to_owned()));
    result
}

/// Remove a dependency from one group, or from all four when `group` is `None`.
pub fn remove_dependency(
    manifest: &Manifest,
    name: &str,
    group: Option<DependencyGroup>,
) -> Manifest {
    let mut result = manifest.clone();
    let groups: &[DependencyGroup] = match group {
        Some(ref g) => std::slice::from_ref(g),
        None => &DependencyGroup::ALL,
    };
    for g in groups {
        if let Some(Value::Object(deps)) = result.as_map_mut().get_mut(g.as_str()) {
            deps.shift_remove(name);
        }
    }
    result
}

/// Rewrite the version range in every group that already contains `name`.
/// No-op when `name` is absent everywhere.
pub fn update_dependency_version(manifest: &Manifest, name: &str, range: &str) -> Manifest {
    let mut result = manifest.clone();
    for group in DependencyGroup::ALL {
        if let Some(Value::Object(deps)) = result.as_map_mut().get_mut(group.as_str()) {
            if deps.contains_key(name) {
                deps.insert(name.to_owned(), Value::String(range.to_owned()));
            }
        }
    }
    result
}

/// Insert or overwrite a script entry, creating `scripts` if absent.
pub fn add_script(manifest: &Manifest, name: &str, command: &str) -> Manifest {
    let mut result = manifest.clone();
    object_entry(&mut result, "scripts")
        .insert(name.to_owned(), Value::String(command.to_owned()));
    result
}

pub fn remove_script(manifest: &Manifest, name: &str) -> Manifest {
    let mut result = manifest.clone();
    if let Some(Value::Object(scripts)) = result.as_map_mut().get_mut("scripts") {
        scripts.shift_remove(name);
    }
    result
}

/// Batch [`add_dependency`]; entries apply left to right.
pub fn add_dependencies(
    manifest: &Manifest,
    entries: &[(&str, &str)],
    group: DependencyGroup,
) -> Manifest {
    let mut result = manifest.clone();
    for (name, range) in entries {
        result = add_dependency(&result, name, range, group);
    }
    result
}

/// Batch [`remove_dependency`]; names apply left to right.
pub fn remove_dependencies(
    manifest: &Manifest,
    names: &[&str],
    group: Option<DependencyGroup>,
) -> Manifest {
    let mut result = manifest.clone();
    for name in names {
        result = remove_dependency(&result, name, group);
    }
    result
}

/// Set an arbitrary top-level field.
pub fn set_field(manifest: &Manifest, field: &str, value: Value) -> Manifest {
    let mut result = manifest.clone();
    result.insert(field, value);
    result
}

/// Delete an arbitrary top-level field.
pub fn remove_field(manifest: &Manifest, field: &str) -> Manifest {
    let mut result = manifest.clone();
    result.remove(field);
    result
}

/// Union keywords into the `keywords` list, preserving insertion order and
/// skipping duplicates.
pub fn add_keywords(manifest: &Manifest, keywords: &[&str]) -> Manifest {
    let mut result = manifest.clone();
    let slot = result
        .as_map_mut()
        .entry("keywords".to_owned())
        .or_insert_with(|| Value::Array(Vec::new()));
    if !slot.is_array() {
        *slot = Value::Array(Vec::new());
    }
    let list = slot.as_array_mut().expect("slot was just made an array");
    for keyword in keywords {
        if !list.iter().any(|v| v.as_str() == Some(keyword)) {
            list.push(Value::String((*keyword).to_owned()));
        }
    }
    result
}

/// Drop the given keywords from the `keywords` list, keeping the rest in order.
pub fn remove_keywords(manifest: &Manifest, keywords: &[&str]) -> Manifest {
    let mut result = manifest.clone();
    if let Some(Value::Array(list)) = result.as_map_mut().get_mut("keywords") {
        list.retain(|v| !matches!(v.as_str(), Some(s) if keywords.contains(&s)));
    }
    result
}

/// Increment the version according to `kind`.
///
/// `major` bumps the first component and zeroes the other two, `minor` bumps
/// the second and zeroes the third, `patch` bumps the third. Only the three
/// leading numeric components participate; a pre-release or build suffix is
/// dropped. An absent or unparsable version resets to `"0.1.0"` rather than
/// failing.
pub fn bump_version(manifest: &Manifest, kind: ReleaseKind) -> Manifest {
    let mut result = manifest.clone();
    let next = match result.version().and_then(version_triple) {
        Some((major, minor, patch)) => match kind {
            ReleaseKind::Major => format!("{}.0.0", major + 1),
            ReleaseKind::Minor => format!("{major}.{}.0", minor + 1),
            ReleaseKind::Patch => format!("{major}.{minor}.{}", patch + 1),
        },
        None => DEFAULT_VERSION.to_owned(),
    };
    result.insert("version", Value::String(next));
    result
}

fn version_triple(version: &str) -> Option<(u64, u64, u64)> {
    let core = version.split(['-', '+']).next().unwrap_or(version);
    let mut parts = core.splitn(3, '.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next()?.parse().ok()?;
    Some((major, minor, patch))
}
