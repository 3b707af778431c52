//! Test-only helpers for config files and binary invocation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use anyhow::{Context, Result};

use crate::io::config::DEFAULT_CONFIG_FILE;

/// Write `contents` to `reporter.toml` inside `dir`.
pub fn write_config_file(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Run the reporter binary at `bin` in `dir`, feeding `stdin` if provided.
pub fn run_reporter(
    bin: &Path,
    dir: &Path,
    args: &[&str],
    stdin: Option<&[u8]>,
) -> Result<Output> {
    let mut child = Command::new(bin)
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("spawn {}", bin.display()))?;
    {
        let mut pipe = child.stdin.take().context("reporter stdin")?;
        if let Some(input) = stdin {
            pipe.write_all(input).context("write stdin")?;
        }
    }
    child.wait_with_output().context("wait for reporter")
}
