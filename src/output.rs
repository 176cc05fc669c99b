use eyre::Result;
use log::debug;

/// Fallback text when no summary was produced
pub const NO_SUMMARY: &str = "No summary available";

/// Clean raw model output: collapse runs of three or more newlines down to
/// exactly two, then trim outer whitespace. `None` maps to [`NO_SUMMARY`].
/// Idempotent.
pub fn clean(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return NO_SUMMARY.to_string();
    };

    let re = regex::Regex::new(r"\n{3,}").unwrap();
    re.replace_all(raw, "\n\n").trim().to_string()
}

/// Derive the summary filename: fixed prefix, video ID, and the template
/// name lowercased with spaces replaced by underscores.
pub fn summary_filename(video_id: &str, template_name: &str) -> String {
    format!(
        "summary_{video_id}_{}.txt",
        template_name.replace(' ', "_").to_lowercase()
    )
}

/// Write the summary to its derived filename in the working directory,
/// overwriting any existing file. Returns the filename written.
pub fn save_summary(summary: &str, video_id: &str, template_name: &str) -> Result<String> {
    let filename = summary_filename(video_id, template_name);
    std::fs::write(&filename, summary)?;
    debug!("Summary saved to {filename}");
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_newline_runs() {
        assert_eq!(clean(Some("a\n\n\n\nb")), "a\n\nb");
        assert_eq!(clean(Some("a\n\n\nb\n\n\n\n\nc")), "a\n\nb\n\nc");
    }

    #[test]
    fn test_clean_preserves_double_newlines() {
        assert_eq!(clean(Some("a\n\nb")), "a\n\nb");
        assert_eq!(clean(Some("a\nb")), "a\nb");
    }

    #[test]
    fn test_clean_trims_outer_whitespace() {
        assert_eq!(clean(Some("  \n\nsummary text\n  ")), "summary text");
    }

    #[test]
    fn test_clean_absent() {
        assert_eq!(clean(None), "No summary available");
    }

    #[test]
    fn test_clean_idempotent() {
        let inputs = ["a\n\n\n\nb", "  hello  ", "", "x\n\n\ny\n\n\n\nz\n"];
        for input in inputs {
            let once = clean(Some(input));
            assert_eq!(clean(Some(&once)), once);
        }
    }

    #[test]
    fn test_summary_filename() {
        assert_eq!(
            summary_filename("abc12345678", "Quick Summary"),
            "summary_abc12345678_quick_summary.txt"
        );
    }

    #[test]
    fn test_summary_filename_multiword() {
        assert_eq!(
            summary_filename("dQw4w9WgXcQ", "Business/Professional Summary"),
            "summary_dQw4w9WgXcQ_business/professional_summary.txt"
        );
    }

    #[test]
    fn test_save_summary_overwrites() {
        let filename = save_summary("first", "testsave123", "Quick Summary").unwrap();
        assert_eq!(filename, "summary_testsave123_quick_summary.txt");
        assert_eq!(std::fs::read_to_string(&filename).unwrap(), "first");

        save_summary("second", "testsave123", "Quick Summary").unwrap();
        assert_eq!(std::fs::read_to_string(&filename).unwrap(), "second");

        let _ = std::fs::remove_file(&filename);
    }
}
