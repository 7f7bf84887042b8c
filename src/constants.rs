// src/constants.rs

/// Candidates longer than this (in bytes) are treated as noise.
pub const MAX_CANDIDATE_LEN: usize = 1024;

/// Longest run of ASCII alphanumerics accepted as a file extension on a
/// separator-less dotted token.
pub const MAX_EXTENSION_LEN: usize = 10;

/// Conventional build/manifest filenames that carry no extension but are
/// still recognized as paths when they appear as whole words.
pub const MANIFEST_FILENAMES: &[&str] = &[
    "Makefile",
    "GNUmakefile",
    "Dockerfile",
    "Containerfile",
    "Rakefile",
    "Gemfile",
    "Guardfile",
    "Podfile",
    "Brewfile",
    "Procfile",
    "Jenkinsfile",
    "Vagrantfile",
    "Justfile",
    "Snakefile",
    "Pipfile",
    "Caddyfile",
    "Earthfile",
    "Tiltfile",
];

/// Final dot-segments that look like extensions but almost always come from
/// `object.method` chains or bare domain names in prose.
///
/// This list is a heuristic boundary, not a grammar: anything missing here
/// will be reported as a file.
pub const NON_EXTENSION_SUFFIXES: &[&str] = &[
    // property / method access
    "then", "catch", "finally", "map", "filter", "reduce", "forEach", "find", "some", "every",
    "push", "pop", "shift", "slice", "splice", "concat", "join", "split", "length", "keys",
    "values", "entries", "call", "apply", "bind", "prototype", "exports", "default", "value",
    "error", "warn", "info", "debug", "trace", "unwrap", "expect", "clone", "iter", "collect",
    "into", "self", "this", "foo", "bar", "baz",
    // abbreviations in prose ("e.g", "i.e")
    "e", "g",
    // bare domain names
    "com", "org", "net", "edu", "gov",
];

/// Top-level domains recognized when stripping a `domain.tld/` prefix from a
/// candidate.
pub const DOMAIN_TLDS: &[&str] = &[
    "com", "org", "net", "io", "dev", "app", "co", "ai", "edu", "gov", "info", "xyz", "sh", "me",
    "us", "uk", "de",
];
