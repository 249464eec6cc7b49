//! Generation reporting and statistics

use std::fmt::Write as _;

use super::GenerationResult;

/// Generation run reporter
pub struct GenerationReporter;

impl GenerationReporter {
    /// Create a new reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate a summary report for a `generate` run
    #[must_use]
    pub fn generate_summary(result: &GenerationResult) -> String {
        let mut output = String::new();

        output.push_str("\n=== Generation Summary ===\n");
        let _ = writeln!(output, "Written:   {}", result.written);
        let _ = writeln!(output, "Unchanged: {}", result.unchanged);
        let _ = writeln!(output, "Skipped:   {}", result.skipped);
        let _ = writeln!(output, "\nTotal files: {}", result.total_files());

        output
    }

    /// Generate a summary report for a `check` run, including diffs
    #[must_use]
    pub fn check_summary(result: &GenerationResult) -> String {
        let mut output = String::new();

        for (path, diff) in &result.stale {
            let _ = writeln!(output, "--- {path} is stale ---");
            output.push_str(diff);
        }

        output.push_str("\n=== Check Summary ===\n");
        let _ = writeln!(output, "Up to date: {}", result.up_to_date);
        let _ = writeln!(output, "Stale:      {}", result.stale.len());
        let _ = writeln!(output, "Missing:    {}", result.missing.len());

        if !result.missing.is_empty() {
            let _ = writeln!(output, "\nMissing ({}):", result.missing.len());
            for path in &result.missing {
                let _ = writeln!(output, "  - {path}");
            }
        }

        if result.is_up_to_date() {
            output.push_str("Status: ✓ Up to date\n");
        } else {
            output.push_str("Status: ✗ Regeneration needed\n");
        }

        output
    }
}

impl Default for GenerationReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_summary_counts() {
        let result = GenerationResult {
            written: 5,
            unchanged: 2,
            ..GenerationResult::default()
        };

        let summary = GenerationReporter::generate_summary(&result);

        assert!(summary.contains("Written:   5"));
        assert!(summary.contains("Unchanged: 2"));
        assert!(summary.contains("Total files: 7"));
    }

    #[test]
    fn test_check_summary_lists_problems() {
        let result = GenerationResult {
            up_to_date: 5,
            missing: vec!["src/ccasm/Makemodule.am".to_string()],
            stale: vec![(
                "include/casm/Makemodule.am".to_string(),
                "-old\n+new\n".to_string(),
            )],
            ..GenerationResult::default()
        };

        let summary = GenerationReporter::check_summary(&result);

        assert!(summary.contains("--- include/casm/Makemodule.am is stale ---"));
        assert!(summary.contains("  - src/ccasm/Makemodule.am"));
        assert!(summary.contains("Regeneration needed"));
    }

    #[test]
    fn test_check_summary_clean() {
        let result = GenerationResult {
            up_to_date: 7,
            ..GenerationResult::default()
        };

        assert!(GenerationReporter::check_summary(&result).contains("✓ Up to date"));
    }
}
