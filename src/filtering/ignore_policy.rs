// src/filtering/ignore_policy.rs

/// Directory names whose contents are generated, vendored or tool-private.
/// A path with any segment equal to one of these is ignored.
pub const IGNORED_DIRS: &[&str] = &[
    // --- Version control ---
    ".git",
    ".hg",
    ".svn",
    // --- Dependencies / vendored code ---
    "node_modules",
    "bower_components",
    "vendor",
    ".venv",
    "venv",
    "site-packages",
    ".yarn",
    ".pnpm-store",
    // --- Build output ---
    "dist",
    "build",
    "out",
    "target",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".turbo",
    ".output",
    // --- Caches / reports ---
    "coverage",
    ".nyc_output",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".cache",
    ".parcel-cache",
    ".gradle",
    ".terraform",
];

/// File basenames that are never interesting as extraction results:
/// package-manager lockfiles and OS litter.
pub const IGNORED_FILES: &[&str] = &[
    // --- JavaScript/TypeScript ---
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "npm-shrinkwrap.json",
    "bun.lockb",
    "bun.lock",
    "deno.lock",
    // --- PHP ---
    "composer.lock",
    // --- Ruby ---
    "Gemfile.lock",
    // --- Python ---
    "poetry.lock",
    "Pipfile.lock",
    "pdm.lock",
    "uv.lock",
    // --- Go ---
    "go.sum",
    // --- .NET ---
    "packages.lock.json",
    // --- Swift / Objective-C ---
    "Package.resolved",
    "Podfile.lock",
    // --- Elixir / Dart ---
    "mix.lock",
    "pubspec.lock",
    // --- Rust ---
    "Cargo.lock",
    // --- Nix ---
    "flake.lock",
    // --- Infrastructure as Code ---
    ".terraform.lock.hcl",
    // --- OS litter ---
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
];

/// Checks whether a single directory name is in the ignored-directory table.
pub fn is_ignored_dir_name(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

/// Checks if a path points into an ignored directory or names an ignored file.
///
/// Both `/` and `\` delimit segments. Matching is exact and case-sensitive;
/// there are no globs.
pub fn is_ignored(path: &str) -> bool {
    let mut segments = path.split(['/', '\\']).filter(|s| !s.is_empty()).peekable();
    while let Some(segment) = segments.next() {
        if is_ignored_dir_name(segment) {
            return true;
        }
        if segments.peek().is_none() && IGNORED_FILES.contains(&segment) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignored_directory_segments() {
        assert!(is_ignored("node_modules/react/index.js"));
        assert!(is_ignored("packages/app/node_modules/x.js"));
        assert!(is_ignored("/home/me/project/.git/config"));
        assert!(is_ignored("crate\\target\\debug\\build.rs"));
        assert!(is_ignored("dist/bundle.js"));
    }

    #[test]
    fn test_is_ignored_files() {
        assert!(is_ignored("bun.lockb"));
        assert!(is_ignored("path/to/Cargo.lock"));
        assert!(is_ignored("web\\package-lock.json"));
        assert!(is_ignored(".DS_Store"));
    }

    #[test]
    fn test_is_ignored_no_match() {
        assert!(!is_ignored("src/main.rs"));
        assert!(!is_ignored("Cargo.toml"));
        assert!(!is_ignored("README.md"));
        assert!(!is_ignored("src/builder.rs")); // "build" is only a prefix
        assert!(!is_ignored("docs/node_modules.md")); // basename is not a dir segment
    }

    #[test]
    fn test_is_ignored_exact_match_only() {
        // Case-sensitive, no globbing.
        assert!(!is_ignored("cargo.lock"));
        assert!(!is_ignored("Node_Modules/x.js"));
        assert!(!is_ignored("my-dist/app.js"));
    }

    #[test]
    fn test_ignored_file_name_as_directory_is_not_ignored() {
        // Only the final segment is compared against the file table.
        assert!(!is_ignored("yarn.lock/notes.txt"));
    }
}
