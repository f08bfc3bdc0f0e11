//! Minimal `[tracker]`-section INI reader for `defaults.ini`.
//!
//! No crate in reach of this project parses INI, and the format this CLI
//! needs from it is a single flat section of five scalar keys, so this is
//! plain application code rather than a new dependency.

use std::path::Path;

use crate::error::Result;

/// The subset of `defaults.ini`'s `[tracker]` section the CLI consults.
/// Every field is optional: a missing key just falls through to the next
/// layer of built-in defaults.
#[derive(Debug, Default, Clone)]
pub struct IniDefaults {
    pub input: Option<String>,
    pub output: Option<String>,
    pub vis_dir: Option<String>,
    pub max_dist: Option<f64>,
    pub max_age: Option<u32>,
    pub alpha: Option<f64>,
}

impl IniDefaults {
    /// Reads `path` if it exists; returns empty defaults if it doesn't, since
    /// the INI file is itself optional.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    fn parse(contents: &str) -> Self {
        let mut defaults = Self::default();
        let mut in_tracker_section = false;

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(section) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                in_tracker_section = section.trim().eq_ignore_ascii_case("tracker");
                continue;
            }

            if !in_tracker_section {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().to_string();

            match key.as_str() {
                "input" => defaults.input = Some(value),
                "output" => defaults.output = Some(value),
                "vis-dir" => defaults.vis_dir = Some(value),
                "max-dist" => defaults.max_dist = value.parse().ok(),
                "max-age" => defaults.max_age = value.parse().ok(),
                "alpha" => defaults.alpha = value.parse().ok(),
                _ => {}
            }
        }

        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reads_tracker_section() {
        let contents = "\
[tracker]
input = in.json
output = out.json
vis-dir = vis
max-dist = 0.2
max-age = 7
alpha = 0.5
";
        let defaults = IniDefaults::parse(contents);
        assert_eq!(defaults.input.as_deref(), Some("in.json"));
        assert_eq!(defaults.max_age, Some(7));
        assert_eq!(defaults.alpha, Some(0.5));
    }

    #[test]
    fn test_parse_ignores_other_sections() {
        let contents = "\
[other]
input = ignored.json

[tracker]
input = kept.json
";
        let defaults = IniDefaults::parse(contents);
        assert_eq!(defaults.input.as_deref(), Some("kept.json"));
    }

    #[test]
    fn test_parse_ignores_comments_and_blank_lines() {
        let contents = "\
; a comment
[tracker]
# another comment
input = a.json

alpha = 0.6
";
        let defaults = IniDefaults::parse(contents);
        assert_eq!(defaults.input.as_deref(), Some("a.json"));
        assert_eq!(defaults.alpha, Some(0.6));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let defaults = IniDefaults::load(Path::new("/nonexistent/defaults.ini")).unwrap();
        assert!(defaults.input.is_none());
    }
}
