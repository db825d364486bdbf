//! INI settings file behind [`ConfigPort`].
//!
//! Section and key names are case-insensitive; values are returned verbatim.

use crate::domain::error::TourneyError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::fs;
use std::path::Path;

pub struct FileConfigAdapter {
    ini: Ini,
}

impl FileConfigAdapter {
    /// Read and parse a settings file. Both failures are reported against the file.
    pub fn load(path: &Path) -> Result<Self, TourneyError> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| parse_error(&origin, e.to_string()))?;
        Self::parse(&origin, &content)
    }

    pub fn from_string(content: &str) -> Result<Self, TourneyError> {
        Self::parse("<inline>", content)
    }

    fn parse(origin: &str, content: &str) -> Result<Self, TourneyError> {
        let mut ini = Ini::new();
        ini.read(content.to_string())
            .map_err(|reason| parse_error(origin, reason))?;
        Ok(Self { ini })
    }
}

fn parse_error(origin: &str, reason: String) -> TourneyError {
    TourneyError::ConfigParse {
        file: origin.to_string(),
        reason,
    }
}

fn switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.ini.get(section, key)
    }

    /// Unrecognised switch values fall back to `default`.
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_string(section, key)
            .as_deref()
            .and_then(switch)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL: &str = r#"
[input]
mode = summaries
delimiter = semicolon
encoding = utf-8-sig

[filter]
currency = USD
min_date = 2024-01-01
max_date = 2024-06-30

[output]
dir = reports
console_table = no

[logging]
verbose = yes
"#;

    #[test]
    fn reads_every_section() {
        let config = FileConfigAdapter::from_string(FULL).unwrap();
        assert_eq!(config.get_string("input", "delimiter").as_deref(), Some("semicolon"));
        assert_eq!(config.get_string("input", "encoding").as_deref(), Some("utf-8-sig"));
        assert_eq!(config.get_string("filter", "max_date").as_deref(), Some("2024-06-30"));
        assert_eq!(config.get_string("output", "dir").as_deref(), Some("reports"));
        assert!(!config.get_bool("output", "console_table", true));
        assert!(config.get_bool("logging", "verbose", false));
    }

    #[test]
    fn section_and_key_names_ignore_case() {
        let config = FileConfigAdapter::from_string("[Filter]\nCurrency = EUR\n").unwrap();
        assert_eq!(config.get_string("filter", "currency").as_deref(), Some("EUR"));
    }

    #[test]
    fn missing_and_blank_keys() {
        let config = FileConfigAdapter::from_string("[filter]\ncurrency =\n").unwrap();
        assert_eq!(config.get_string("filter", "min_date"), None);
        assert_eq!(config.get_string("output", "dir"), None);
        assert_eq!(config.get_non_empty("filter", "currency"), None);
    }

    #[test]
    fn switch_values() {
        assert_eq!(switch(" On "), Some(true));
        assert_eq!(switch("0"), Some(false));
        assert_eq!(switch("maybe"), None);

        let config = FileConfigAdapter::from_string("[output]\nconsole_table = maybe\n").unwrap();
        assert!(config.get_bool("output", "console_table", true));
        assert!(!config.get_bool("logging", "verbose", false));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndir = /tmp/stats\n").unwrap();
        let config = FileConfigAdapter::load(file.path()).unwrap();
        assert_eq!(config.get_string("output", "dir").as_deref(), Some("/tmp/stats"));
    }

    #[test]
    fn load_failure_names_the_file() {
        let path = Path::new("/nonexistent/tourneystats.ini");
        match FileConfigAdapter::load(path) {
            Err(TourneyError::ConfigParse { file, .. }) => assert_eq!(file, path.display().to_string()),
            Err(other) => panic!("expected ConfigParse, got {other:?}"),
            Ok(_) => panic!("expected an error"),
        }
    }
}
