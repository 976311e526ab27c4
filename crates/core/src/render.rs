use crate::config::VerifierConfig;
use crate::model::{ContentCheck, FileStatus, VerificationOutcome, VerificationReport};

const BANNER_WIDTH: usize = 60;

pub fn render_header(config: &VerifierConfig) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!(
        "{rule}\n{} Repository Documentation Verification\n{rule}\n🔍 {} ドキュメンテーション確認中...\n",
        config.project_name, config.project_name
    )
}

/// Renders the body of a verification run, one status line per check.
pub fn render_report(report: &VerificationReport) -> String {
    let mut out = String::new();

    if report.outcome == VerificationOutcome::MissingDirectory {
        out.push_str(&format!(
            "❌ {} ディレクトリが見つかりません\n",
            report.docs_dir
        ));
        return out;
    }
    if let Some(reason) = &report.docs_dir_error {
        out.push_str(&format!(
            "❌ {} を読み込めません: {}\n",
            report.docs_dir, reason
        ));
        return out;
    }

    for file in &report.files {
        match &file.status {
            FileStatus::Present { size_bytes } => out.push_str(&format!(
                "✅ {} - {} bytes\n",
                file.name,
                format_thousands(*size_bytes)
            )),
            FileStatus::Unreadable { reason } => {
                out.push_str(&format!("❌ {} を読み込めません: {}\n", file.name, reason))
            }
            FileStatus::Missing => {}
        }
    }

    let missing = report.missing_files();
    if !missing.is_empty() {
        out.push_str("❌ 以下のファイルが見つかりません:\n");
        for name in missing {
            out.push_str(&format!("   - {name}\n"));
        }
        return out;
    }
    if report
        .files
        .iter()
        .any(|f| matches!(f.status, FileStatus::Unreadable { .. }))
    {
        return out;
    }

    out.push_str("✅ 全てのドキュメンテーションファイルが正常に確認されました\n");
    out.push_str("\n📋 ドキュメント内容の基本確認:\n");
    for check in &report.content_checks {
        match check {
            ContentCheck::Marker(marker) if marker.found => out.push_str(&format!(
                "✅ {}に{}が含まれています\n",
                marker.label, marker.description
            )),
            ContentCheck::Marker(_) => {}
            ContentCheck::ReadFailure(failure) => out.push_str(&format!(
                "❌ {} を読み込めません: {}\n",
                failure.file, failure.reason
            )),
        }
    }

    if report.read_failures().next().is_none() {
        out.push_str("\n🎉 ドキュメンテーション確認完了!\n");
    }
    out
}

pub fn render_footer(config: &VerifierConfig, report: &VerificationReport) -> String {
    if !report.passed() {
        return "\n❌ ドキュメンテーションに問題があります。上記のエラーを確認してください。\n"
            .to_string();
    }

    let mut out = String::new();
    out.push_str(
        "\n✅ 全ての確認が完了しました。ドキュメンテーションは正常に設置されています。\n",
    );
    if !config.usage_hints.is_empty() {
        out.push_str("\n📚 利用方法:\n");
        let docs_dir = config.docs_dir.to_string_lossy();
        for hint in &config.usage_hints {
            out.push_str(&format!(
                "   - {}: {}/{} {}\n",
                hint.audience, docs_dir, hint.file, hint.action
            ));
        }
    }
    out
}

/// Formats a byte count with `,` between groups of three digits.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_thousands, render_footer, render_header, render_report};
    use crate::config::VerifierConfig;
    use crate::model::{
        ContentCheck, FileCheck, FileStatus, MarkerResult, ReadFailure, VerificationOutcome,
        VerificationReport, REPORT_VERSION,
    };

    fn report(outcome: VerificationOutcome, files: Vec<FileCheck>) -> VerificationReport {
        VerificationReport {
            report_version: REPORT_VERSION.to_string(),
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            docs_dir: "docs".to_string(),
            docs_dir_error: None,
            outcome,
            files,
            content_checks: Vec::new(),
        }
    }

    fn file(name: &str, status: FileStatus) -> FileCheck {
        FileCheck {
            name: name.to_string(),
            path: format!("docs/{name}"),
            status,
        }
    }

    fn marker(file: &str, label: &str, needle: &str, found: bool) -> ContentCheck {
        ContentCheck::Marker(MarkerResult {
            file: file.to_string(),
            label: label.to_string(),
            needle: needle.to_string(),
            description: format!("{needle}説明"),
            found,
        })
    }

    #[test]
    fn thousands_separator_groups_digits() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_024), "1,024");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn missing_directory_renders_single_line() {
        let out = render_report(&report(VerificationOutcome::MissingDirectory, Vec::new()));
        assert_eq!(out, "❌ docs ディレクトリが見つかりません\n");
    }

    #[test]
    fn present_files_precede_missing_list() {
        let out = render_report(&report(
            VerificationOutcome::MissingFiles,
            vec![
                file("a.md", FileStatus::Missing),
                file("b.md", FileStatus::Present { size_bytes: 2048 }),
            ],
        ));
        assert_eq!(
            out,
            "✅ b.md - 2,048 bytes\n❌ 以下のファイルが見つかりません:\n   - a.md\n"
        );
    }

    #[test]
    fn only_found_markers_are_confirmed() {
        let mut passed = report(
            VerificationOutcome::Passed,
            vec![file("a.md", FileStatus::Present { size_bytes: 1 })],
        );
        for (needle, found) in [("x", true), ("y", false)] {
            passed.content_checks.push(marker("a.md", "ガイド", needle, found));
        }

        let out = render_report(&passed);
        assert!(out.contains("✅ ガイドにx説明が含まれています\n"));
        assert!(!out.contains("y説明"));
        assert!(out.ends_with("\n🎉 ドキュメンテーション確認完了!\n"));
    }

    #[test]
    fn header_and_footer_follow_config() {
        let config = VerifierConfig::default();
        let header = render_header(&config);
        assert!(header.starts_with(&"=".repeat(60)));
        assert!(header.contains("AI Scientist Repository Documentation Verification"));

        let ok = report(VerificationOutcome::Passed, Vec::new());
        let footer = render_footer(&config, &ok);
        assert!(footer.contains("   - 初心者: docs/実装解説書.md から開始\n"));
        assert!(footer.contains("   - 概要: docs/README.md を確認\n"));

        let failed = report(VerificationOutcome::MissingDirectory, Vec::new());
        assert!(render_footer(&config, &failed).contains("❌ ドキュメンテーションに問題があります"));
    }

    #[test]
    fn unreadable_file_is_listed_inline_without_marker_section() {
        let out = render_report(&report(
            VerificationOutcome::UnreadableFiles,
            vec![
                file("a.md", FileStatus::Present { size_bytes: 5 }),
                file(
                    "b.md",
                    FileStatus::Unreadable {
                        reason: "permission denied: docs/b.md".to_string(),
                    },
                ),
            ],
        ));
        assert_eq!(
            out,
            "✅ a.md - 5 bytes\n❌ b.md を読み込めません: permission denied: docs/b.md\n"
        );
    }

    #[test]
    fn read_failures_render_in_check_order_without_banner() {
        let mut failed = report(
            VerificationOutcome::UnreadableFiles,
            vec![
                file("a.md", FileStatus::Present { size_bytes: 2 }),
                file("b.md", FileStatus::Present { size_bytes: 3 }),
            ],
        );
        failed.content_checks = vec![
            ContentCheck::ReadFailure(ReadFailure {
                file: "a.md".to_string(),
                reason: "docs/a.md is not valid UTF-8 (first invalid byte at offset 0)"
                    .to_string(),
            }),
            marker("b.md", "B", "z", true),
        ];

        let out = render_report(&failed);
        assert!(out.ends_with(
            "📋 ドキュメント内容の基本確認:\n\
             ❌ a.md を読み込めません: docs/a.md is not valid UTF-8 (first invalid byte at offset 0)\n\
             ✅ Bにz説明が含まれています\n"
        ));
        assert!(!out.contains("🎉"));
        assert!(render_footer(&VerifierConfig::default(), &failed)
            .contains("❌ ドキュメンテーションに問題があります"));
    }

    #[test]
    fn unreadable_docs_dir_names_the_cause() {
        let mut failed = report(VerificationOutcome::UnreadableDirectory, Vec::new());
        failed.docs_dir_error = Some("permission denied: docs".to_string());
        assert_eq!(
            render_report(&failed),
            "❌ docs を読み込めません: permission denied: docs\n"
        );
    }
}
