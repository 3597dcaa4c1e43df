#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated workspace: config file, log directory and activity database
/// all live inside one temp dir.
pub struct Workspace {
    pub tmp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            tmp: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn config(&self) -> PathBuf {
        self.root().join("dwlog.conf")
    }

    pub fn logs(&self) -> PathBuf {
        self.root().join("logs")
    }

    pub fn db(&self) -> PathBuf {
        self.root().join("dwlog.sqlite")
    }

    pub fn day_file(&self, date: &str) -> PathBuf {
        self.logs().join(format!("{date}.md"))
    }

    /// `dwlog` with every path pointed into the workspace and a frozen clock.
    pub fn cmd_at(&self, now: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("dwlog");
        cmd.env_remove("DWLOG_LOG")
            .arg("--config")
            .arg(self.config())
            .arg("--log-dir")
            .arg(self.logs())
            .arg("--db")
            .arg(self.db())
            .args(["--now", now]);
        cmd
    }

    pub fn write_config(&self, yaml: &str) {
        std::fs::write(self.config(), yaml).expect("write config");
    }
}

/// True when a `git` binary can be executed.
pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir`, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let out = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run git");
    assert!(
        out.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Working repo at `<root>/work` with a bare `origin` at `<root>/origin.git`.
pub fn init_repo_with_remote(root: &Path) -> PathBuf {
    let origin = root.join("origin.git");
    let work = root.join("work");
    std::fs::create_dir_all(&origin).unwrap();
    std::fs::create_dir_all(&work).unwrap();

    git(&origin, &["init", "--bare", "--quiet"]);
    git(&work, &["init", "--quiet"]);
    git(&work, &["config", "user.email", "dev@example.com"]);
    git(&work, &["config", "user.name", "Dev"]);
    git(&work, &["config", "commit.gpgsign", "false"]);
    git(
        &work,
        &["remote", "add", "origin", origin.to_str().unwrap()],
    );
    work
}
