use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn trellis() -> Command {
    cargo_bin_cmd!("trellis")
}

/// Write a graph file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write graph fixture");
    path
}

/// Triangle fixture: MST keeps b--c (3) and a--b (4), rejects a--c (8).
#[allow(dead_code)]
pub const TRIANGLE: &str = "strict graph {\n\
    a -- b [weight=4]\n\
    b -- c [weight=3]\n\
    a -- c [weight=8]\n\
}\n";

/// Two-hop fixture plus an isolated pair: d is unreachable from a.
#[allow(dead_code)]
pub const TWO_COMPONENTS: &str = "strict graph {\n\
    a -- b [weight=5]\n\
    b -- c [weight=3]\n\
    d -- e [weight=2]\n\
}\n";
