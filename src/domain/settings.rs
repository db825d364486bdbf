//! Resolved run settings and the small value types they are built from.

use super::error::TourneyError;
use super::filter::RecordFilter;
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Input mode; selects which file extension directory discovery collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Tournament summary CSV exports
    #[default]
    Summaries,
    /// Hand-history text files
    Hh,
}

impl Mode {
    pub fn extension(self) -> &'static str {
        match self {
            Mode::Summaries => ".csv",
            Mode::Hh => ".txt",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summaries" => Ok(Mode::Summaries),
            "hh" => Ok(Mode::Hh),
            other => Err(format!("unknown mode '{other}' (expected summaries or hh)")),
        }
    }
}

/// Text encoding of input files.
///
/// Any WHATWG label (`cp1251`, `windows-1252`, `latin-1`, ...) resolves
/// through `encoding_rs`. Plain `utf-8` keeps a leading byte-order mark as
/// text, so a BOM-prefixed header reads as `\u{feff}Date`; `utf-8-sig`
/// strips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf8Sig,
    Legacy(&'static Encoding),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not valid {encoding} text: {reason}")]
pub struct DecodeError {
    pub encoding: TextEncoding,
    pub reason: String,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl TextEncoding {
    /// Whether a leading BOM survives decoding as a `U+FEFF` character.
    pub fn keeps_bom(self) -> bool {
        self == TextEncoding::Utf8
    }

    /// Decode a whole file; any malformed byte sequence fails the file.
    pub fn decode<'a>(self, bytes: &'a [u8]) -> Result<Cow<'a, str>, DecodeError> {
        let (encoding, body) = match self {
            TextEncoding::Utf8 => (UTF_8, bytes),
            TextEncoding::Utf8Sig => (UTF_8, bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)),
            TextEncoding::Legacy(encoding) => (encoding, bytes),
        };
        encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .ok_or_else(|| DecodeError {
                encoding: self,
                reason: "malformed byte sequence".to_string(),
            })
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => f.write_str("utf-8"),
            TextEncoding::Utf8Sig => f.write_str("utf-8-sig"),
            TextEncoding::Legacy(encoding) => f.write_str(&encoding.name().to_lowercase()),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase().replace('_', "-");
        if label == "utf-8-sig" || label == "utf8-sig" {
            return Ok(TextEncoding::Utf8Sig);
        }
        // Python-style names such as `latin-1` or `cp-1251` lose the dash.
        let encoding = Encoding::for_label(label.as_bytes())
            .or_else(|| Encoding::for_label(label.replace('-', "").as_bytes()))
            .ok_or_else(|| format!("unsupported encoding '{s}'"))?;
        if encoding == UTF_8 {
            Ok(TextEncoding::Utf8)
        } else {
            Ok(TextEncoding::Legacy(encoding))
        }
    }
}

/// Field delimiter for input files; always a single ASCII byte.
///
/// Parses from the character itself or from a name (`tab`, `comma`,
/// `semicolon`, `pipe`, `space`); INI files treat `;` and `#` as comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub fn byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(b',')
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = match s.to_lowercase().as_str() {
            "tab" => Some(b'\t'),
            "comma" => Some(b','),
            "semicolon" => Some(b';'),
            "pipe" => Some(b'|'),
            "space" => Some(b' '),
            _ => None,
        };
        if let Some(byte) = named {
            return Ok(Delimiter(byte));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(Delimiter(c as u8)),
            _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
        }
    }
}

/// Fully resolved settings for one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub mode: Mode,
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub filter: RecordFilter,
    pub delimiter: Delimiter,
    pub encoding: TextEncoding,
    pub verbose: bool,
    pub console_table: bool,
}

pub const DEFAULT_OUTPUT_DIR: &str = "./output";

impl RunSettings {
    pub fn new(input: PathBuf) -> Self {
        Self {
            mode: Mode::default(),
            input,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filter: RecordFilter::default(),
            delimiter: Delimiter::default(),
            encoding: TextEncoding::default(),
            verbose: false,
            console_table: true,
        }
    }
}

/// Parse a settings value, reporting failures against its config key.
pub fn parse_setting<T>(section: &str, key: &str, raw: &str) -> Result<T, TourneyError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| TourneyError::invalid(section, key, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_extensions() {
        assert_eq!(Mode::Summaries.extension(), ".csv");
        assert_eq!(Mode::Hh.extension(), ".txt");
        assert_eq!("HH".parse::<Mode>().unwrap(), Mode::Hh);
        assert!("replay".parse::<Mode>().is_err());
    }

    fn encoding(label: &str) -> TextEncoding {
        label.parse().unwrap()
    }

    #[test]
    fn encoding_names_are_normalized() {
        assert_eq!(encoding("UTF-8"), TextEncoding::Utf8);
        assert_eq!(encoding("utf_8"), TextEncoding::Utf8);
        assert_eq!(encoding("utf_8_sig"), TextEncoding::Utf8Sig);
        assert_eq!(encoding("ISO-8859-1"), encoding("latin-1"));
        assert_eq!(encoding("cp1251"), TextEncoding::Legacy(encoding_rs::WINDOWS_1251));
        assert_eq!(encoding("windows-1251"), encoding("cp-1251"));
        assert!("klingon".parse::<TextEncoding>().is_err());
    }

    #[test]
    fn encoding_display_names() {
        assert_eq!(TextEncoding::Utf8.to_string(), "utf-8");
        assert_eq!(TextEncoding::Utf8Sig.to_string(), "utf-8-sig");
        assert_eq!(encoding("cp1251").to_string(), "windows-1251");
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        let err = TextEncoding::Utf8.decode(b"Date\xff").unwrap_err();
        assert_eq!(err.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn utf8_keeps_bom_but_utf8_sig_strips_it() {
        let bytes = b"\xEF\xBB\xBFDate";
        assert_eq!(TextEncoding::Utf8.decode(bytes).unwrap(), "\u{feff}Date");
        assert_eq!(TextEncoding::Utf8Sig.decode(bytes).unwrap(), "Date");
        assert!(TextEncoding::Utf8.keeps_bom());
        assert!(!TextEncoding::Utf8Sig.keeps_bom());
        assert!(!encoding("cp1251").keeps_bom());
    }

    #[test]
    fn latin1_decodes_high_bytes() {
        assert_eq!(encoding("latin-1").decode(b"caf\xe9").unwrap(), "café");
    }

    #[test]
    fn cp1251_decodes_cyrillic() {
        // "Турнир"
        let bytes = b"\xd2\xf3\xf0\xed\xe8\xf0";
        assert_eq!(encoding("cp1251").decode(bytes).unwrap(), "Турнир");
    }

    #[test]
    fn delimiter_must_be_one_ascii_char() {
        assert_eq!(";".parse::<Delimiter>().unwrap().byte(), b';');
        assert_eq!("\t".parse::<Delimiter>().unwrap().byte(), b'\t');
        assert!("".parse::<Delimiter>().is_err());
        assert!(";;".parse::<Delimiter>().is_err());
        assert!("§".parse::<Delimiter>().is_err());
        assert_eq!("Semicolon".parse::<Delimiter>().unwrap().byte(), b';');
        assert_eq!("tab".parse::<Delimiter>().unwrap().byte(), b'\t');
    }

    #[test]
    fn parse_setting_wraps_errors() {
        let err = parse_setting::<Delimiter>("input", "delimiter", "ab").unwrap_err();
        assert!(matches!(err, TourneyError::ConfigInvalid { key, .. } if key == "delimiter"));
    }

    #[test]
    fn run_settings_defaults() {
        let settings = RunSettings::new(PathBuf::from("data"));
        assert_eq!(settings.mode, Mode::Summaries);
        assert_eq!(settings.output_dir, PathBuf::from("./output"));
        assert_eq!(settings.delimiter.byte(), b',');
        assert_eq!(settings.encoding, TextEncoding::Utf8);
        assert!(settings.console_table);
        assert!(!settings.verbose);
    }
}
