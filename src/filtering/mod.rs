// src/filtering/mod.rs

//! Provides the shared ignore policy.
//!
//! Both extractors consult the same fixed tables so that generated and
//! vendored locations never surface, whichever strategy found them.

mod ignore_policy;

pub use ignore_policy::{is_ignored, is_ignored_dir_name, IGNORED_DIRS, IGNORED_FILES};
