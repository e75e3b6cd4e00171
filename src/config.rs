//! Configuration discovery and effective settings resolution.
//!
//! Covbadge reads `covbadge.toml|yaml|yml` from the working directory
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `output`: `./coverage`
//! - `input`: `./coverage/coverage-summary.json`
//! - `service`: `https://img.shields.io`
//! - `mode`: `human`
//! - `average`: unset (no averaged badge)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::badge::DEFAULT_SERVICE;
use crate::cli::Cli;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `covbadge.toml|yaml`.
pub struct CovbadgeConfig {
    pub output: Option<String>,
    pub input: Option<String>,
    pub average: Option<String>,
    pub service: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the pipeline after applying
/// precedence.
pub struct Effective {
    pub output_dir: PathBuf,
    pub input: PathBuf,
    pub average: Option<String>,
    pub service: String,
    pub mode: String,
}

/// Walk upward from `start` to find the configuration root.
///
/// Stops when a `covbadge.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("covbadge.toml").exists()
            || cur.join("covbadge.yaml").exists()
            || cur.join("covbadge.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `CovbadgeConfig` from `covbadge.toml` or `covbadge.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<CovbadgeConfig> {
    let toml_path = root.join("covbadge.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: CovbadgeConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["covbadge.yaml", "covbadge.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: CovbadgeConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `start` is the directory to begin config discovery from; the process
/// working directory when `None`.
pub fn resolve_effective(start: Option<&str>, cli: &Cli) -> Effective {
    let start = PathBuf::from(start.unwrap_or("."));
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let output_dir = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "./coverage".to_string());

    let input = cli
        .input
        .clone()
        .or(cfg.input)
        .unwrap_or_else(|| "./coverage/coverage-summary.json".to_string());

    let average = cli.average.clone().or(cfg.average);

    let service = cli
        .service
        .clone()
        .or(cfg.service)
        .unwrap_or_else(|| DEFAULT_SERVICE.to_string());

    let mode = cli
        .mode
        .clone()
        .or(cfg.mode)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        output_dir: PathBuf::from(output_dir),
        input: PathBuf::from(input),
        average,
        service,
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn empty_cli() -> Cli {
        use clap::Parser;
        Cli::parse_from(["covbadge"])
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), &empty_cli());
        assert_eq!(eff.output_dir, PathBuf::from("./coverage"));
        assert_eq!(eff.input, PathBuf::from("./coverage/coverage-summary.json"));
        assert_eq!(eff.service, DEFAULT_SERVICE);
        assert_eq!(eff.mode, "human");
        assert!(eff.average.is_none());
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("covbadge.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "badges"
input = "reports/coverage-summary.json"
average = "all"
mode = "json"
    "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), &empty_cli());
        assert_eq!(eff.output_dir, PathBuf::from("badges"));
        assert_eq!(eff.input, PathBuf::from("reports/coverage-summary.json"));
        assert_eq!(eff.average.as_deref(), Some("all"));
        assert_eq!(eff.mode, "json");
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("covbadge.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output: out/badges
service: http://127.0.0.1:9999
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), &empty_cli());
        assert_eq!(eff.output_dir, PathBuf::from("out/badges"));
        assert_eq!(eff.service, "http://127.0.0.1:9999");
        // untouched keys fall back to defaults
        assert_eq!(eff.input, PathBuf::from("./coverage/coverage-summary.json"));
        assert_eq!(eff.mode, "human");
    }

    #[test]
    fn test_cli_overrides_config() {
        use clap::Parser;
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("covbadge.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "badges"
average = "all"
            "#
        )
        .unwrap();

        let cli = Cli::parse_from(["covbadge", "--output", "elsewhere", "--average", "lines"]);
        let eff = resolve_effective(root.to_str(), &cli);
        assert_eq!(eff.output_dir, PathBuf::from("elsewhere"));
        assert_eq!(eff.average.as_deref(), Some("lines"));
    }

    #[test]
    fn test_detect_root_walks_up_to_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("covbadge.toml"), "output = \"badges\"\n").unwrap();
        let nested = root.join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let eff = resolve_effective(nested.to_str(), &empty_cli());
        assert_eq!(eff.output_dir, PathBuf::from("badges"));
    }
}
