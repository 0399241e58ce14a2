// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    built::write_built_file().expect("Failed to acquire build-time information");

    // The `built` crate only provides git information with the git2 feature, which we don't use.
    let version = git_output(&["describe", "--match", "v[0-9]*", "--tags", "HEAD"])
        .map(|v| v.trim_start_matches('v').to_string())
        .or_else(|| git_output(&["rev-parse", "--short", "HEAD"]));
    let dirty = git_output(&["diff-index", "--name-only", "HEAD", "--"]).is_some();

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");
    let content = format!(
        "// Git information generated at build time\n\
         pub const GIT_VERSION: Option<&'static str> = {};\n\
         pub const GIT_DIRTY: Option<bool> = {};\n",
        match version {
            Some(v) => format!("Some(\"{v}\")"),
            None => "None".into(),
        },
        if dirty { "Some(true)" } else { "None" }
    );
    fs::write(Path::new(&out_dir).join("git_built.rs"), content)
        .expect("Failed to write git_built.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
}

/// Run a git command and return its trimmed stdout if it succeeded with a non-empty output.
fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
