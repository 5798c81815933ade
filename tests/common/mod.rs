//! Test environment builder for isolated wsmirror runs.
//!
//! `TestEnv` owns a temp workspace with a `src/` sync folder, a config file
//! pointing at it, and (on Unix) a fake `scp` on PATH that records its
//! arguments instead of copying anything.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a wsmirror CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    _temp: TempDir,
    /// Canonical root so watcher paths compare equal on macOS
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub bin_dir: PathBuf,
    pub scp_log: PathBuf,
}

impl TestEnv {
    /// Workspace with a complete config and an empty `src/` folder.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().canonicalize().expect("canonical tempdir");
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("bin")).unwrap();

        let env = Self {
            config_path: root.join("config.toml"),
            bin_dir: root.join("bin"),
            scp_log: root.join("scp.log"),
            root,
            _temp: temp,
        };
        env.write_config(&env.default_config());
        env
    }

    pub fn default_config(&self) -> String {
        format!(
            r#"remote_user = "deploy"
remote_host = "example.org"
remote_base_dir = "/srv/app"
local_base_dir = '{root}'
timeout = 10
folders_to_sync = ['{src}']
exclude_patterns = ["*.log", "secret"]
"#,
            root = self.root.display(),
            src = self.root.join("src").display(),
        )
    }

    pub fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).unwrap();
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Install a fake `scp` that appends its argv to `scp.log` and exits
    /// with `exit_code`, printing `message` to stderr on failure.
    #[cfg(unix)]
    pub fn install_fake_scp(&self, exit_code: i32, message: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{log}'\nif [ {code} -ne 0 ]; then echo '{message}' >&2; fi\nexit {code}\n",
            log = self.scp_log.display(),
            code = exit_code,
            message = message,
        );
        let path = self.bin_dir.join("scp");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Install a fake `sshpass` that logs `sshpass <argv>` and succeeds.
    #[cfg(unix)]
    pub fn install_fake_sshpass(&self) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho \"sshpass $@\" >> '{log}'\nexit 0\n",
            log = self.scp_log.display(),
        );
        let path = self.bin_dir.join("sshpass");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    pub fn scp_calls(&self) -> Vec<String> {
        fs::read_to_string(&self.scp_log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Command for the binary with the test config and a clean environment.
    pub fn command(&self, args: &[&str]) -> Command {
        self.command_with_config(&self.config_path, args)
    }

    pub fn command_with_config(&self, config: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wsmirror"));
        cmd.current_dir(&self.root)
            .arg("--config")
            .arg(config)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("WSMIRROR_CONFIG")
            .env_remove("WSMIRROR_ENABLED")
            .env_remove("WSMIRROR_TIMEOUT")
            .env_remove("WSMIRROR_REMOTE_HOST")
            .env_remove("WSMIRROR_REMOTE_USER");

        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.bin_dir.clone()];
        paths.extend(std::env::split_paths(&path));
        cmd.env("PATH", std::env::join_paths(paths).unwrap());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command(args).output().expect("Failed to execute wsmirror");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Parse every NDJSON line of `stdout`
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json line {l:?}: {e}")))
        .collect()
}
