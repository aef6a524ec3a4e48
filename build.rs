use std::env;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

fn main() {
    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
    let is_optimized = opt_level != "0";

    let version = if is_optimized {
        match git(&["rev-parse", "HEAD"]) {
            Some(hash) => {
                let dirty = git(&["status", "--porcelain"])
                    .map(|status| !status.trim().is_empty())
                    .unwrap_or(false);
                if dirty {
                    format!("{}-dirty", hash.trim())
                } else {
                    hash.trim().to_string()
                }
            }
            None => env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into()),
        }
    } else {
        "Development build".into()
    };

    println!("cargo:rustc-env=RELEASE={}", version.trim());
}
