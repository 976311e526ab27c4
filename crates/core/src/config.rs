use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const IMPLEMENTATION_GUIDE: &str = "実装解説書.md";
pub const DEVELOPER_GUIDE: &str = "DEVELOPER_GUIDE.md";
pub const README: &str = "README.md";

/// Everything a verification run needs to know about the documentation set.
///
/// The default value reproduces the stock layout: a `docs` directory holding the
/// implementation guide, the developer guide and a readme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VerifierConfig {
    pub project_name: String,
    pub docs_dir: PathBuf,
    pub required_files: Vec<String>,
    pub marker_checks: Vec<MarkerCheck>,
    pub usage_hints: Vec<UsageHint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerCheck {
    pub file: String,
    pub label: String,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    pub needle: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageHint {
    pub audience: String,
    pub file: String,
    pub action: String,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            project_name: "AI Scientist".to_string(),
            docs_dir: PathBuf::from("docs"),
            required_files: vec![
                IMPLEMENTATION_GUIDE.to_string(),
                DEVELOPER_GUIDE.to_string(),
                README.to_string(),
            ],
            marker_checks: vec![
                MarkerCheck {
                    file: IMPLEMENTATION_GUIDE.to_string(),
                    label: "実装解説書".to_string(),
                    markers: vec![
                        marker("システム全体のアーキテクチャ", "アーキテクチャ説明"),
                        marker("テンプレートシステム", "テンプレートシステム説明"),
                    ],
                },
                MarkerCheck {
                    file: DEVELOPER_GUIDE.to_string(),
                    label: "開発者ガイド".to_string(),
                    markers: vec![
                        marker("Code Architecture", "コードアーキテクチャ説明"),
                        marker("Security Considerations", "セキュリティ考慮事項"),
                    ],
                },
            ],
            usage_hints: vec![
                hint("初心者", IMPLEMENTATION_GUIDE, "から開始"),
                hint("開発者", DEVELOPER_GUIDE, "を参照"),
                hint("概要", README, "を確認"),
            ],
        }
    }
}

fn marker(needle: &str, description: &str) -> Marker {
    Marker {
        needle: needle.to_string(),
        description: description.to_string(),
    }
}

fn hint(audience: &str, file: &str, action: &str) -> UsageHint {
    UsageHint {
        audience: audience.to_string(),
        file: file.to_string(),
        action: action.to_string(),
    }
}

impl VerifierConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).context("failed to parse verifier config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read verifier config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.required_files.is_empty() {
            bail!("required_files must list at least one file");
        }

        let mut seen = HashSet::new();
        for name in &self.required_files {
            if name.trim().is_empty() {
                bail!("required_files contains an empty file name");
            }
            if !seen.insert(name.as_str()) {
                bail!("required file `{name}` is listed more than once");
            }
        }

        for check in &self.marker_checks {
            if !seen.contains(check.file.as_str()) {
                bail!(
                    "marker check targets `{}`, which is not a required file",
                    check.file
                );
            }
            if check.markers.iter().any(|m| m.needle.is_empty()) {
                bail!("marker check for `{}` has an empty needle", check.file);
            }
        }

        Ok(())
    }
}
