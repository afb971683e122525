use std::{path::Path, process::Command};

/// `git describe` of the checkout, e.g. `a1b2c3d` or `a1b2c3d-dirty`.
fn describe() -> Option<String> {
    let out = Command::new("git").args(["describe", "--always", "--dirty", "--abbrev=8"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?.trim().to_string();
    (!rev.is_empty()).then_some(rev)
}

fn main() {
    let rev = describe().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=OVERLAPS_BUILD_SHA={}", rev);

    let git = Path::new("../.git");
    for tracked in ["HEAD", "index"] {
        let path = git.join(tracked);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
