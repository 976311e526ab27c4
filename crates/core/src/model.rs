use serde::{Deserialize, Serialize};

pub const REPORT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationReport {
    pub report_version: String,
    pub generated_at: String,
    pub docs_dir: String,
    #[serde(default)]
    pub docs_dir_error: Option<String>,
    pub outcome: VerificationOutcome,
    #[serde(default)]
    pub files: Vec<FileCheck>,
    /// Marker results and read failures, in configured marker-check order.
    #[serde(default)]
    pub content_checks: Vec<ContentCheck>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.outcome == VerificationOutcome::Passed
    }

    /// Names of required files that do not exist, in required-list order.
    pub fn missing_files(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|file| file.status == FileStatus::Missing)
            .map(|file| file.name.as_str())
            .collect()
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerResult> {
        self.content_checks.iter().filter_map(|check| match check {
            ContentCheck::Marker(marker) => Some(marker),
            ContentCheck::ReadFailure(_) => None,
        })
    }

    pub fn found_markers(&self) -> impl Iterator<Item = &MarkerResult> {
        self.markers().filter(|marker| marker.found)
    }

    pub fn read_failures(&self) -> impl Iterator<Item = &ReadFailure> {
        self.content_checks.iter().filter_map(|check| match check {
            ContentCheck::ReadFailure(failure) => Some(failure),
            ContentCheck::Marker(_) => None,
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    Passed,
    MissingDirectory,
    UnreadableDirectory,
    MissingFiles,
    UnreadableFiles,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileCheck {
    pub name: String,
    pub path: String,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FileStatus {
    Present { size_bytes: u64 },
    Missing,
    Unreadable { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentCheck {
    Marker(MarkerResult),
    ReadFailure(ReadFailure),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerResult {
    pub file: String,
    pub label: String,
    pub needle: String,
    pub description: String,
    pub found: bool,
}

/// A required file that existed but could not be read during the marker scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadFailure {
    pub file: String,
    pub reason: String,
}
