use assert_cmd::Command;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};
use tempfile::TempDir;

#[derive(Debug)]
pub struct CivicRun {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
    pub duration: Duration,
    pub log_path: PathBuf,
}

impl CivicRun {
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as one JSON document.
    pub fn json(&self) -> Value {
        serde_json::from_str(&extract_json_payload(&self.stdout))
            .unwrap_or_else(|err| panic!("stdout is not JSON ({err}): {}", self.stdout))
    }

    /// Parse the structured error printed on stderr.
    pub fn error_json(&self) -> Value {
        serde_json::from_str(&extract_json_payload(&self.stderr))
            .unwrap_or_else(|err| panic!("stderr is not JSON ({err}): {}", self.stderr))
    }
}

pub struct CivicWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub log_dir: PathBuf,
}

impl CivicWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        let log_dir = root.join("logs");
        fs::create_dir_all(&log_dir).expect("log dir");
        Self {
            temp_dir,
            root,
            log_dir,
        }
    }

    /// Write `.civic/config.yaml` in the workspace root.
    pub fn with_project_config(self, yaml: &str) -> Self {
        let dir = self.root.join(".civic");
        fs::create_dir_all(&dir).expect("project dir");
        fs::write(dir.join("config.yaml"), yaml).expect("write project config");
        self
    }

    /// Write `~/.config/civic/config.yaml` under the workspace HOME.
    pub fn with_user_config(self, yaml: &str) -> Self {
        let dir = self.root.join(".config").join("civic");
        fs::create_dir_all(&dir).expect("user config dir");
        fs::write(dir.join("config.yaml"), yaml).expect("write user config");
        self
    }
}

pub fn run_civic<I, S>(workspace: &CivicWorkspace, args: I, label: &str) -> CivicRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_civic_with_env(
        workspace,
        args,
        std::iter::empty::<(String, String)>(),
        label,
    )
}

pub fn run_civic_with_env<I, S, E, K, V>(
    workspace: &CivicWorkspace,
    args: I,
    env_vars: E,
    label: &str,
) -> CivicRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    E: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("civic"));
    cmd.current_dir(&workspace.root);
    cmd.arg("--no-wait");
    cmd.args(args);
    for key in ["CIVIC_ACTOR", "CIVIC_DIR", "CIVIC_EXPLORE_LIMIT", "CIVIC_SHARE_BASE_URL"] {
        cmd.env_remove(key);
    }
    cmd.env("USER", "Test Runner");
    cmd.envs(env_vars);
    cmd.env("NO_COLOR", "1");
    cmd.env("RUST_LOG", "civic_reports=debug");
    cmd.env("RUST_BACKTRACE", "1");
    cmd.env("HOME", &workspace.root);

    let start = Instant::now();
    let output = cmd.output().expect("run civic");
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let log_path = workspace.log_dir.join(format!("{label}.log"));
    let timestamp = SystemTime::now();
    let log_body = format!(
        "label: {label}\nstarted: {:?}\nduration: {:?}\nstatus: {}\nargs: {:?}\ncwd: {}\n\nstdout:\n{}\n\nstderr:\n{}\n",
        timestamp,
        duration,
        output.status,
        cmd.get_args().collect::<Vec<_>>(),
        workspace.root.display(),
        stdout,
        stderr
    );
    fs::write(&log_path, log_body).expect("write log");

    CivicRun {
        stdout,
        stderr,
        status: output.status,
        duration,
        log_path,
    }
}

/// Skip log lines that precede the first JSON token.
pub fn extract_json_payload(output: &str) -> String {
    let lines: Vec<&str> = output.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with('[') || line.starts_with('{') {
            return lines[idx..].join("\n").trim().to_string();
        }
    }
    output.trim().to_string()
}
