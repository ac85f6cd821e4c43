//! Render a scan as the human-readable report.

use crate::annotation::{InactiveBlock, IrScan};
use colored::Colorize;

/// Width of the `=` banner and `-` divider rules.
const RULE_WIDTH: usize = 100;

/// Format a scan as the full report text.
///
/// The banner is printed once, followed by one section per block in
/// discovery order. Zero blocks produce the banner alone. Output is
/// deterministic; `colored` drops its escape codes automatically when
/// stdout is not a terminal.
pub fn format_report(scan: &IrScan) -> String {
    let banner = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&banner);
    output.push('\n');
    output.push_str(&format!(
        "{}\n",
        "INACTIVE CODE BLOCKS DETECTED IN LLVM IR".bold()
    ));
    output.push_str(&banner);
    output.push('\n');

    for block in &scan.blocks {
        format_block(&mut output, block);
    }

    output
}

fn format_block(output: &mut String, block: &InactiveBlock) {
    output.push('\n');
    output.push_str(&format!(
        "{}\n",
        format!("[Block #{}]", block.index).cyan().bold()
    ));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    output.push_str(&format!("Location: {}\n", block.location));

    if let Some(condition) = &block.condition {
        output.push_str(&format!("Condition: {}\n", condition));
    }

    if let Some(code) = &block.code {
        output.push_str(&format!("Code Content: {}\n", code));
    }

    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn block(index: usize, condition: Option<&str>, code: Option<&str>) -> InactiveBlock {
        InactiveBlock {
            index,
            raw: String::new(),
            location: format!("/tmp/f.c:{}:1-{}:2", index, index + 1),
            condition: condition.map(str::to_string),
            code: code.map(str::to_string),
        }
    }

    fn scan_with(blocks: Vec<InactiveBlock>) -> IrScan {
        IrScan {
            path: PathBuf::from("x.ll"),
            blocks,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_empty_scan_prints_banner_only() {
        colored::control::set_override(false);
        let report = format_report(&scan_with(vec![]));

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(100));
        assert_eq!(lines[1], "INACTIVE CODE BLOCKS DETECTED IN LLVM IR");
        assert_eq!(lines[2], "=".repeat(100));
        assert!(!report.contains("[Block"));
    }

    #[test]
    fn test_block_section_layout() {
        colored::control::set_override(false);
        let report = format_report(&scan_with(vec![block(
            1,
            Some("DEBUG"),
            Some("x = 1;"),
        )]));

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "[Block #1]");
        assert_eq!(lines[5], "-".repeat(100));
        assert_eq!(lines[6], "Location: /tmp/f.c:1:1-2:2");
        assert_eq!(lines[7], "Condition: DEBUG");
        assert_eq!(lines[8], "Code Content: x = 1;");
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_absent_fields_omit_their_lines() {
        colored::control::set_override(false);
        let report = format_report(&scan_with(vec![block(1, None, None)]));

        assert!(report.contains("Location: "));
        assert!(!report.contains("Condition: "));
        assert!(!report.contains("Code Content: "));
    }

    #[test]
    fn test_multiple_blocks_keep_order() {
        colored::control::set_override(false);
        let report = format_report(&scan_with(vec![
            block(1, None, None),
            block(2, None, None),
            block(3, None, None),
        ]));

        let first = report.find("[Block #1]").unwrap();
        let second = report.find("[Block #2]").unwrap();
        let third = report.find("[Block #3]").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_report_is_deterministic() {
        colored::control::set_override(false);
        let scan = scan_with(vec![block(1, Some("A"), Some("y = 2;"))]);
        assert_eq!(format_report(&scan), format_report(&scan));
    }
}
