use std::path::{Path, PathBuf};
use std::process::Command;
use std::{env, fs};

fn main() {
    println!("cargo:rustc-env=BMPEDIT_GIT_HASH={}", git_hash());

    let Some(git_dir) = git_dir() else {
        return;
    };
    for watched in [git_dir.join("HEAD"), git_dir.join("refs")] {
        if watched.exists()
            && let Some(path) = watched.to_str()
        {
            println!("cargo:rerun-if-changed={path}");
        }
    }
}

/// Short commit hash, or "unknown" outside a git checkout.
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_owned())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(dir));
    }
    let dot_git = Path::new(".git");
    if dot_git.is_dir() {
        return Some(dot_git.to_path_buf());
    }
    // Worktrees store "gitdir: <path>" in a plain file.
    let pointer = fs::read_to_string(dot_git).ok()?;
    let target = PathBuf::from(pointer.strip_prefix("gitdir:")?.trim());
    Some(if target.is_relative() {
        Path::new(".").join(target)
    } else {
        target
    })
}
