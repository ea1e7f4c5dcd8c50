//! Structural and semantic validation.
//!
//! Findings are returned as data, never thrown: errors fail the record,
//! warnings are stylistic notices emitted only in strict mode.

use crate::manifest::Manifest;
use crate::schema::{
    DependencyGroup, COMMON_LICENSES, MODULE_TYPES, NODE_CORE_MODULES, REQUIRED_FIELDS,
    SCRIPT_EXTENSIONS,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

pub const MAX_NAME_LENGTH: usize = 214;

static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(@[a-z0-9\-~][a-z0-9\-._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name pattern compiles")
});

static SEMVER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("semver pattern compiles")
});

// Accepted version-range grammars. Deliberately permissive: range operators
// are validated structurally, not re-checked as full semver.
static RANGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d+\.\d+\.\d+$",
        r"^[\^~]?\d+\.\d+\.\d+",
        r"^\*$",
        r"^>=?\d+\.\d+\.\d+",
        r"^<=?\d+\.\d+\.\d+",
        r"^latest$",
        r"^workspace:",
        r"^(https?|git|file):",
        r"^[a-z-]+/[a-z-]+#",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("range pattern compiles"))
    .collect()
});

/// A single validation finding, attributed to a manifest field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ValidationIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            message: message.into(),
            value: None,
        }
    }

    fn with_value(field: &str, message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            message: message.into(),
            value: Some(value.into()),
        }
    }
}

/// Outcome of [`validate_manifest`]. `valid` is true iff `errors` is empty;
/// warnings never affect validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationIssue>,
}

/// Check the record against the required-field and grammar rules; with
/// `strict`, additionally surface stylistic warnings.
pub fn validate_manifest(manifest: &Manifest, strict: bool) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for field in REQUIRED_FIELDS {
        if !is_present(manifest.get(field)) {
            errors.push(ValidationIssue::new(
                field,
                format!("missing required field: {field}"),
            ));
        }
    }

    if let Some(name) = manifest.name() {
        if !name.is_empty() {
            errors.extend(validate_name(name));
        }
    }

    if let Some(version) = manifest.version() {
        if !version.is_empty() {
            errors.extend(validate_version(version));
        }
    }

    if strict {
        if let Some(license) = manifest.get_str("license") {
            if !license.is_empty() && !COMMON_LICENSES.contains(&license) {
                warnings.push(ValidationIssue::with_value(
                    "license",
                    format!("uncommon license: {license}"),
                    license,
                ));
            }
        }

        if let Some(main) = manifest.get_str("main") {
            if !SCRIPT_EXTENSIONS.iter().any(|ext| main.ends_with(ext)) {
                warnings.push(ValidationIssue::with_value(
                    "main",
                    "main should point to a .js, .mjs or .cjs file",
                    main,
                ));
            }
        }
    }

    if let Some(module_type) = manifest.get_str("type") {
        if !MODULE_TYPES.contains(&module_type) {
            errors.push(ValidationIssue::with_value(
                "type",
                "type must be \"module\" or \"commonjs\"",
                module_type,
            ));
        }
    }

    for group in DependencyGroup::ALL {
        if let Some(deps) = manifest.dependency_group(group) {
            errors.extend(validate_dependencies(deps, group));
        }
    }

    if strict {
        if let Some(Value::Object(scripts)) = manifest.get("scripts") {
            warnings.extend(validate_scripts(scripts));
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Check a package name against the name grammar and reserve list.
pub fn validate_name(name: &str) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(ValidationIssue::new("name", "package name must not be empty"));
        return errors;
    }

    if name.len() > MAX_NAME_LENGTH {
        errors.push(ValidationIssue::with_value(
            "name",
            format!("package name must not exceed {MAX_NAME_LENGTH} characters"),
            name,
        ));
    }

    if name.starts_with('.') || name.starts_with('_') {
        errors.push(ValidationIssue::with_value(
            "name",
            "package name must not start with . or _",
            name,
        ));
    }

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(ValidationIssue::with_value(
            "name",
            "package name must not contain uppercase letters",
            name,
        ));
    }

    if !PACKAGE_NAME.is_match(name) {
        errors.push(ValidationIssue::with_value(
            "name",
            "package name contains invalid characters",
            name,
        ));
    }

    if NODE_CORE_MODULES.contains(&name) {
        errors.push(ValidationIssue::with_value(
            "name",
            "package name must not shadow a Node.js core module",
            name,
        ));
    }

    errors
}

/// Check a version string against the strict semver grammar.
pub fn validate_version(version: &str) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();

    if version.is_empty() {
        errors.push(ValidationIssue::new("version", "version must not be empty"));
        return errors;
    }

    if !SEMVER.is_match(version) {
        errors.push(ValidationIssue::with_value(
            "version",
            "version does not follow the semver format",
            version,
        ));
    }

    errors
}

/// Boolean-only convenience: equivalent to `validate_manifest(m, false).valid`.
pub fn is_valid_manifest(manifest: &Manifest) -> bool {
    validate_manifest(manifest, false).valid
}

fn validate_dependencies(deps: &Map<String, Value>, group: DependencyGroup) -> Vec<ValidationIssue> {
    let mut errors = Vec::new();

    for (name, value) in deps {
        let range = value.as_str().unwrap_or_default();
        if range.is_empty() {
            errors.push(ValidationIssue::with_value(
                group.as_str(),
                format!("dependency {name} is missing a version"),
                name,
            ));
            continue;
        }
        if !is_valid_version_range(range) {
            errors.push(ValidationIssue::with_value(
                group.as_str(),
                format!("dependency {name} has an invalid version range: {range}"),
                range,
            ));
        }
    }

    errors
}

fn validate_scripts(scripts: &Map<String, Value>) -> Vec<ValidationIssue> {
    let mut warnings = Vec::new();

    for (name, command) in scripts {
        let body = command.as_str().unwrap_or_default();
        if body.trim().is_empty() {
            warnings.push(ValidationIssue::with_value(
                "scripts",
                format!("script \"{name}\" is empty"),
                name,
            ));
        }
    }

    warnings
}

fn is_valid_version_range(range: &str) -> bool {
    RANGE_PATTERNS.iter().any(|pattern| pattern.is_match(range))
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parse_manifest_str;

    fn manifest(json: &str) -> Manifest {
        parse_manifest_str(json).unwrap()
    }

    #[test]
    fn minimal_valid_manifest_passes() {
        let result = validate_manifest(
            &manifest(r#"{"name": "valid-name", "version": "1.0.0"}"#),
            false,
        );
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_record_fails_both_required_fields() {
        let result = validate_manifest(&manifest("{}"), false);
        assert!(!result.valid);
        let fields: Vec<&str> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"version"));
    }

    #[test]
    fn uppercase_name_is_an_error() {
        assert!(!is_valid_manifest(&manifest(
            r#"{"name": "Invalid-Caps", "version": "1.0.0"}"#
        )));
    }

    #[test]
    fn name_grammar_accepts_scoped_packages() {
        assert!(validate_name("@scope/my-package").is_empty());
        assert!(validate_name("simple-name").is_empty());
        assert!(validate_name("with.dots_and~tildes").is_empty());
    }

    #[test]
    fn name_grammar_rejects_bad_shapes() {
        assert!(!validate_name(".leading-dot").is_empty());
        assert!(!validate_name("_leading-underscore").is_empty());
        assert!(!validate_name("spaces in name").is_empty());
        assert!(!validate_name("bang!").is_empty());
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(!validate_name(&long).is_empty());
    }

    #[test]
    fn name_must_not_shadow_core_modules() {
        assert!(!validate_name("fs").is_empty());
        assert!(!validate_name("child_process").is_empty());
        assert!(validate_name("fs-extra").is_empty());
    }

    #[test]
    fn version_grammar() {
        assert!(validate_version("1.0.0").is_empty());
        assert!(validate_version("0.0.1").is_empty());
        assert!(validate_version("1.2.3-beta.1").is_empty());
        assert!(validate_version("1.2.3+build.42").is_empty());
        assert!(validate_version("1.2.3-rc.1+sha.abc").is_empty());

        assert!(!validate_version("1.0").is_empty());
        assert!(!validate_version("v1.0.0").is_empty());
        assert!(!validate_version("01.0.0").is_empty());
        assert!(!validate_version("not-a-version").is_empty());
    }

    #[test]
    fn module_type_must_be_a_known_literal() {
        assert!(is_valid_manifest(&manifest(
            r#"{"name": "x", "version": "1.0.0", "type": "module"}"#
        )));
        assert!(is_valid_manifest(&manifest(
            r#"{"name": "x", "version": "1.0.0", "type": "commonjs"}"#
        )));
        let result = validate_manifest(
            &manifest(r#"{"name": "x", "version": "1.0.0", "type": "umd"}"#),
            false,
        );
        assert!(!result.valid);
        assert_eq!(result.errors[0].field, "type");
    }

    #[test]
    fn dependency_range_grammars() {
        let accepted = [
            "1.2.3",
            "^18.0.0",
            "~2.1.0",
            "*",
            ">=1.2.3",
            ">1.2.3",
            "<=4.0.0",
            "<4.0.0",
            "latest",
            "workspace:*",
            "https://example.com/pkg.tgz",
            "git:github.com/user/repo",
            "file:../local-pkg",
            "user/repo#main",
        ];
        for range in accepted {
            assert!(is_valid_version_range(range), "should accept {range}");
        }

        let rejected = ["not-a-version", "", "#branch", "==1.0.0"];
        for range in rejected {
            assert!(!is_valid_version_range(range), "should reject {range}");
        }
    }

    #[test]
    fn invalid_dependency_range_fails_validation() {
        let result = validate_manifest(
            &manifest(r#"{"name": "test", "version": "1.0.0", "dependencies": {"p": "not-a-version"}}"#),
            false,
        );
        assert!(!result.valid);
        assert_eq!(result.errors[0].field, "dependencies");
        assert!(result.errors[0].message.contains('p'));
    }

    #[test]
    fn empty_dependency_value_is_an_error() {
        let result = validate_manifest(
            &manifest(r#"{"name": "test", "version": "1.0.0", "devDependencies": {"p": ""}}"#),
            false,
        );
        assert!(!result.valid);
        assert!(result.errors[0].message.contains("missing a version"));
    }

    #[test]
    fn warnings_only_in_strict_mode() {
        let record = manifest(
            r#"{
                "name": "test",
                "version": "1.0.0",
                "license": "My-Custom-License",
                "main": "index.ts",
                "scripts": {"empty": "   "}
            }"#,
        );

        let relaxed = validate_manifest(&record, false);
        assert!(relaxed.valid);
        assert!(relaxed.warnings.is_empty());

        let strict = validate_manifest(&record, true);
        assert!(strict.valid, "warnings never affect validity");
        let fields: Vec<&str> = strict.warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, ["license", "main", "scripts"]);
    }

    #[test]
    fn common_license_and_js_main_produce_no_warnings() {
        let record = manifest(
            r#"{"name": "test", "version": "1.0.0", "license": "MIT", "main": "index.js"}"#,
        );
        let strict = validate_manifest(&record, true);
        assert!(strict.warnings.is_empty());
    }
}
