//! Canonical field ordering, required fields, and accepted-value lists.
//!
//! Pure constant data. The field order is used only for display and
//! serialization ordering, never for validation.

use std::fmt;
use std::str::FromStr;

/// Preferred top-level field ordering for display and serialization.
pub const CANONICAL_FIELD_ORDER: &[&str] = &[
    "name",
    "version",
    "description",
    "keywords",
    "homepage",
    "bugs",
    "license",
    "author",
    "contributors",
    "funding",
    "files",
    "main",
    "module",
    "browser",
    "bin",
    "man",
    "types",
    "typings",
    "exports",
    "imports",
    "directories",
    "repository",
    "scripts",
    "config",
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "peerDependenciesMeta",
    "optionalDependencies",
    "bundledDependencies",
    "engines",
    "os",
    "cpu",
    "private",
    "publishConfig",
    "workspaces",
    "type",
    "sideEffects",
    "packageManager",
];

/// Fields every publishable manifest must carry.
pub const REQUIRED_FIELDS: &[&str] = &["name", "version"];

/// Version assigned when an operation needs one and the record has none.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Common license identifiers; anything else is a strict-mode warning.
pub const COMMON_LICENSES: &[&str] = &[
    "MIT",
    "ISC",
    "Apache-2.0",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "GPL-3.0",
    "LGPL-3.0",
    "MPL-2.0",
    "UNLICENSED",
];

/// Accepted values for the `type` field.
pub const MODULE_TYPES: &[&str] = &["module", "commonjs"];

/// Entry points ending in one of these do not trigger a strict-mode warning.
pub const SCRIPT_EXTENSIONS: &[&str] = &[".js", ".mjs", ".cjs"];

/// Node.js core module names a package must not shadow.
pub const NODE_CORE_MODULES: &[&str] = &[
    "assert",
    "buffer",
    "child_process",
    "cluster",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "https",
    "net",
    "os",
    "path",
    "punycode",
    "querystring",
    "readline",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "zlib",
];

/// One of the four named dependency mappings of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyGroup {
    Dependencies,
    DevDependencies,
    PeerDependencies,
    OptionalDependencies,
}

impl DependencyGroup {
    pub const ALL: [Self; 4] = [
        Self::Dependencies,
        Self::DevDependencies,
        Self::PeerDependencies,
        Self::OptionalDependencies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
            Self::PeerDependencies => "peerDependencies",
            Self::OptionalDependencies => "optionalDependencies",
        }
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dependencies" | "prod" => Ok(Self::Dependencies),
            "devDependencies" | "dev" => Ok(Self::DevDependencies),
            "peerDependencies" | "peer" => Ok(Self::PeerDependencies),
            "optionalDependencies" | "optional" => Ok(Self::OptionalDependencies),
            other => Err(format!(
                "unknown dependency group '{other}' (expected: dependencies, devDependencies, peerDependencies, optionalDependencies)"
            )),
        }
    }
}

/// Module system declared by the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
    Module,
    CommonJs,
}

impl ModuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::CommonJs => "commonjs",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(Self::Module),
            "commonjs" => Ok(Self::CommonJs),
            other => Err(format!(
                "unknown module type '{other}' (expected: module, commonjs)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_starts_with_identity_fields() {
        assert_eq!(CANONICAL_FIELD_ORDER[0], "name");
        assert_eq!(CANONICAL_FIELD_ORDER[1], "version");
    }

    #[test]
    fn canonical_order_covers_all_dependency_groups() {
        for group in DependencyGroup::ALL {
            assert!(CANONICAL_FIELD_ORDER.contains(&group.as_str()));
        }
    }

    #[test]
    fn canonical_order_has_no_duplicates() {
        let mut fields: Vec<&str> = CANONICAL_FIELD_ORDER.to_vec();
        fields.sort_unstable();
        fields.dedup();
        assert_eq!(fields.len(), CANONICAL_FIELD_ORDER.len());
    }

    #[test]
    fn dependency_group_parses_field_names_and_aliases() {
        for group in DependencyGroup::ALL {
            assert_eq!(group.as_str().parse::<DependencyGroup>().unwrap(), group);
        }
        assert_eq!(
            "dev".parse::<DependencyGroup>().unwrap(),
            DependencyGroup::DevDependencies
        );
        assert!("bogus".parse::<DependencyGroup>().is_err());
    }

    #[test]
    fn module_type_roundtrips() {
        for raw in MODULE_TYPES {
            let parsed: ModuleType = raw.parse().unwrap();
            assert_eq!(parsed.as_str(), *raw);
        }
        assert!("esm".parse::<ModuleType>().is_err());
    }
}
