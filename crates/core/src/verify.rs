use std::path::Path;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};

use crate::config::VerifierConfig;
use crate::model::{
    ContentCheck, FileCheck, FileStatus, MarkerResult, ReadFailure, VerificationOutcome,
    VerificationReport, REPORT_VERSION,
};
use crate::read::{entry_size, inspect, read_document};

/// Checks the documentation set described by `config`, resolving its directory
/// against `root`.
///
/// Never fails: every problem found on disk ends up in the returned report's
/// outcome. Only the filesystem is read.
pub fn verify(config: &VerifierConfig, root: &Path) -> VerificationReport {
    let docs_dir = config.docs_dir.as_path();
    let mut report = VerificationReport {
        report_version: REPORT_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        docs_dir: docs_dir.to_string_lossy().to_string(),
        docs_dir_error: None,
        outcome: VerificationOutcome::Passed,
        files: Vec::new(),
        content_checks: Vec::new(),
    };

    match inspect(root, docs_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            info!(docs_dir = %docs_dir.display(), "documentation path is not a directory");
            report.outcome = VerificationOutcome::MissingDirectory;
            return report;
        }
        Err(err) if err.is_not_found() => {
            info!(docs_dir = %docs_dir.display(), "documentation directory not found");
            report.outcome = VerificationOutcome::MissingDirectory;
            return report;
        }
        Err(err) => {
            warn!(error = %err, "failed to inspect documentation directory");
            report.docs_dir_error = Some(err.to_string());
            report.outcome = VerificationOutcome::UnreadableDirectory;
            return report;
        }
    }

    for name in &config.required_files {
        let rel = docs_dir.join(name);
        let status = match entry_size(root, &rel) {
            Ok(size_bytes) => FileStatus::Present { size_bytes },
            Err(err) if err.is_not_found() => FileStatus::Missing,
            Err(err) => {
                warn!(error = %err, "failed to inspect required file");
                FileStatus::Unreadable {
                    reason: err.to_string(),
                }
            }
        };
        debug!(file = %name, ?status, "checked required file");
        report.files.push(FileCheck {
            name: name.clone(),
            path: rel.to_string_lossy().to_string(),
            status,
        });
    }

    if report.files.iter().any(|f| f.status == FileStatus::Missing) {
        report.outcome = VerificationOutcome::MissingFiles;
        info!(missing = ?report.missing_files(), "required documentation files missing");
        return report;
    }
    if report
        .files
        .iter()
        .any(|f| matches!(f.status, FileStatus::Unreadable { .. }))
    {
        report.outcome = VerificationOutcome::UnreadableFiles;
        return report;
    }

    for check in &config.marker_checks {
        let content = match read_document(root, &docs_dir.join(&check.file)) {
            Ok(content) => content,
            Err(err) => {
                warn!(error = %err, "failed to read document for marker scan");
                report
                    .content_checks
                    .push(ContentCheck::ReadFailure(ReadFailure {
                        file: check.file.clone(),
                        reason: err.to_string(),
                    }));
                continue;
            }
        };

        for marker in &check.markers {
            let found = content.contains(&marker.needle);
            debug!(file = %check.file, needle = %marker.needle, found, "marker scan");
            report.content_checks.push(ContentCheck::Marker(MarkerResult {
                file: check.file.clone(),
                label: check.label.clone(),
                needle: marker.needle.clone(),
                description: marker.description.clone(),
                found,
            }));
        }
    }

    if report.read_failures().next().is_some() {
        report.outcome = VerificationOutcome::UnreadableFiles;
    }
    info!(outcome = ?report.outcome, "documentation verification finished");
    report
}
