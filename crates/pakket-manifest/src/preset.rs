use crate::manifest::{parse_manifest_str, Manifest};

/// A named, immutable manifest template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

impl Preset {
    /// Parse the embedded template into a fresh, independently owned record.
    ///
    /// Every call parses anew, so mutating the result can never affect the
    /// registry.
    pub fn instantiate(&self) -> Manifest {
        parse_manifest_str(self.template).expect("preset template is valid JSON")
    }
}

pub const BUILTIN_PRESETS: &[Preset] = &[
    Preset {
        name: "basic",
        description: "Plain package with a single entry point",
        template: r#"{
  "name": "",
  "version": "0.1.0",
  "description": "",
  "main": "index.js",
  "scripts": {
    "test": "echo \"Error: no test specified\" && exit 1"
  },
  "keywords": [],
  "author": "",
  "license": "MIT"
}
"#,
    },
    Preset {
        name: "library",
        description: "Dual CJS/ESM library with type declarations",
        template: r#"{
  "name": "",
  "version": "0.1.0",
  "description": "",
  "type": "module",
  "main": "./dist/index.cjs",
  "module": "./dist/index.js",
  "types": "./dist/index.d.ts",
  "exports": {
    ".": {
      "types": "./dist/index.d.ts",
      "import": "./dist/index.js",
      "require": "./dist/index.cjs"
    }
  },
  "files": ["dist"],
  "scripts": {
    "build": "tsup src/index.ts --format cjs,esm --dts",
    "dev": "tsup src/index.ts --format cjs,esm --dts --watch",
    "typecheck": "tsc --noEmit"
  },
  "keywords": [],
  "author": "",
  "license": "MIT"
}
"#,
    },
    Preset {
        name: "cli",
        description: "Command-line tool with a bin entry",
        template: r#"{
  "name": "",
  "version": "0.1.0",
  "description": "",
  "type": "module",
  "bin": {
    "": "./cli.js"
  },
  "files": ["dist", "cli.js"],
  "scripts": {
    "build": "tsup src/index.ts --format esm",
    "dev": "tsup src/index.ts --format esm --watch"
  },
  "keywords": ["cli"],
  "author": "",
  "license": "MIT"
}
"#,
    },
    Preset {
        name: "typescript",
        description: "TypeScript package compiled with tsc",
        template: r#"{
  "name": "",
  "version": "0.1.0",
  "description": "",
  "type": "module",
  "main": "./dist/index.js",
  "types": "./dist/index.d.ts",
  "scripts": {
    "build": "tsc",
    "dev": "tsc --watch",
    "typecheck": "tsc --noEmit"
  },
  "keywords": [],
  "author": "",
  "license": "MIT"
}
"#,
    },
    Preset {
        name: "monorepo",
        description: "Private workspace root managing packages/*",
        template: r#"{
  "name": "",
  "version": "0.1.0",
  "description": "",
  "private": true,
  "workspaces": ["packages/*"],
  "scripts": {
    "build": "pnpm -r run build",
    "dev": "pnpm -r run dev",
    "test": "pnpm -r run test"
  },
  "keywords": [],
  "author": "",
  "license": "MIT"
}
"#,
    },
];

pub fn get_preset(name: &str) -> Option<&'static Preset> {
    BUILTIN_PRESETS.iter().find(|p| p.name == name)
}

pub fn list_presets() -> &'static [Preset] {
    BUILTIN_PRESETS
}

/// Look up a preset by name, falling back to `basic` for unknown names.
/// Never fails.
pub fn resolve_preset(name: &str) -> &'static Preset {
    get_preset(name).unwrap_or(&BUILTIN_PRESETS[0])
}
