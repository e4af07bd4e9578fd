//! Configuration module - game bounds and attempt count
//!
//! A [`Configuration`] is built once per session from a `key: value` text
//! source. Parsing never fails as a whole: unknown keys, malformed integers and
//! read errors are collected as [`ConfigIssue`]s while every valid line still
//! applies, and [`ConfigurationBuilder::build`] fills in defaults for whatever
//! the source did not set.
//!
//! # Format
//!
//! ```text
//! minimum: 1
//! maximum: 50
//! attempts: 6
//! ```
//!
//! - Lines are split on the first `:`, both sides trimmed
//! - Keys are case-sensitive: `minimum`, `maximum`, `attempts`
//! - Later lines win over earlier ones for the same key
//! - Blank lines and `#` comments are skipped

use std::io::BufRead;

use crate::error::{ConfigIssue, ConfigurationError};
use crate::types::ConfigKey;

/// Immutable bounds and attempt count for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    minimum: i32,
    maximum: i32,
    attempts: i32,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn attempts(&self) -> i32 {
        self.attempts
    }

    /// Whether `guess` lies in `[minimum, maximum]`.
    pub fn contains(&self, guess: i32) -> bool {
        (self.minimum..=self.maximum).contains(&guess)
    }

    /// Check that a game can be played with these values.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.minimum >= self.maximum {
            return Err(ConfigurationError::EmptyRange {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        if self.attempts <= 0 {
            return Err(ConfigurationError::NoAttempts {
                attempts: self.attempts,
            });
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        ConfigurationBuilder::new().build()
    }
}

/// Builder collecting values; unset keys fall back to the defaults on
/// [`build`](ConfigurationBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    minimum: Option<i32>,
    maximum: Option<i32>,
    attempts: Option<i32>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minimum(&mut self, value: i32) -> &mut Self {
        self.minimum = Some(value);
        self
    }

    pub fn maximum(&mut self, value: i32) -> &mut Self {
        self.maximum = Some(value);
        self
    }

    pub fn attempts(&mut self, value: i32) -> &mut Self {
        self.attempts = Some(value);
        self
    }

    /// Route a parsed key to its setter.
    pub fn set(&mut self, key: ConfigKey, value: i32) -> &mut Self {
        match key {
            ConfigKey::Minimum => self.minimum(value),
            ConfigKey::Maximum => self.maximum(value),
            ConfigKey::Attempts => self.attempts(value),
        }
    }

    pub fn build(&self) -> Configuration {
        Configuration {
            minimum: self.minimum.unwrap_or(ConfigKey::Minimum.default_value()),
            maximum: self.maximum.unwrap_or(ConfigKey::Maximum.default_value()),
            attempts: self.attempts.unwrap_or(ConfigKey::Attempts.default_value()),
        }
    }
}

/// Result of reading a configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoad {
    pub configuration: Configuration,
    /// Issues in the order they were found.
    pub issues: Vec<ConfigIssue>,
}

/// Parse a `key: value` source into a configuration.
///
/// Lines that are not valid UTF-8 are decoded lossily and parsed like any
/// other line. A read error stops parsing; lines read before it still apply
/// and the error is returned as a [`ConfigIssue::Io`].
pub fn parse_config<R: BufRead>(mut reader: R) -> ConfigLoad {
    let mut builder = ConfigurationBuilder::new();
    let mut issues = Vec::new();
    let mut raw = Vec::with_capacity(64);
    let mut line_no = 0;

    loop {
        raw.clear();
        match reader.read_until(b'\n', &mut raw) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                issues.push(ConfigIssue::Io {
                    message: e.to_string(),
                });
                break;
            }
        }
        line_no += 1;
        let line = String::from_utf8_lossy(&raw);
        if let Err(issue) = apply_line(&mut builder, line_no, &line) {
            issues.push(issue);
        }
    }

    ConfigLoad {
        configuration: builder.build(),
        issues,
    }
}

/// Parse one line into `builder`.
///
/// `line_no` is 1-based and only used for reporting.
pub fn apply_line(
    builder: &mut ConfigurationBuilder,
    line_no: usize,
    line: &str,
) -> Result<(), ConfigIssue> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }

    let Some((key, value)) = trimmed.split_once(':') else {
        return Err(ConfigIssue::MissingSeparator {
            line: line_no,
            text: trimmed.to_string(),
        });
    };
    let key = key.trim();
    let value = value.trim();

    let Some(config_key) = ConfigKey::from_str(key) else {
        return Err(ConfigIssue::UnknownKey {
            line: line_no,
            key: key.to_string(),
        });
    };

    let parsed = value
        .parse::<i32>()
        .map_err(|_| ConfigIssue::MalformedValue {
            line: line_no,
            key: config_key,
            value: value.to_string(),
        })?;

    builder.set(config_key, parsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_ATTEMPTS, DEFAULT_MAXIMUM, DEFAULT_MINIMUM};
    use std::io::{self, Read};

    fn parse(src: &str) -> ConfigLoad {
        parse_config(src.as_bytes())
    }

    #[test]
    fn test_valid_file_matches_parsed_values() {
        let load = parse("minimum: 5\nmaximum: 42\nattempts: 7\n");
        assert!(load.issues.is_empty());
        assert_eq!(load.configuration.minimum(), 5);
        assert_eq!(load.configuration.maximum(), 42);
        assert_eq!(load.configuration.attempts(), 7);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let load = parse("");
        assert!(load.issues.is_empty());
        assert_eq!(load.configuration, Configuration::default());
        assert_eq!(load.configuration.minimum(), DEFAULT_MINIMUM);
        assert_eq!(load.configuration.maximum(), DEFAULT_MAXIMUM);
        assert_eq!(load.configuration.attempts(), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let load = parse("attempts: 3\nminimum: -5\nmaximum: 5");
        assert!(load.issues.is_empty());
        assert_eq!(load.configuration.minimum(), -5);
        assert_eq!(load.configuration.maximum(), 5);
        assert_eq!(load.configuration.attempts(), 3);
    }

    #[test]
    fn test_malformed_lines_are_reported_and_skipped() {
        let load = parse("minimum: 1\nmaximum: 10\nfoo: 5\nattempts: abc");
        assert_eq!(load.issues.len(), 2);
        assert_eq!(
            load.issues[0],
            ConfigIssue::UnknownKey {
                line: 3,
                key: "foo".to_string()
            }
        );
        assert_eq!(
            load.issues[1],
            ConfigIssue::MalformedValue {
                line: 4,
                key: ConfigKey::Attempts,
                value: "abc".to_string()
            }
        );
        assert_eq!(load.configuration.minimum(), 1);
        assert_eq!(load.configuration.maximum(), 10);
        assert_eq!(load.configuration.attempts(), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn test_whitespace_around_key_and_value_is_trimmed() {
        let load = parse("   minimum   :   3   \n\tmaximum:\t9\t");
        assert!(load.issues.is_empty());
        assert_eq!(load.configuration.minimum(), 3);
        assert_eq!(load.configuration.maximum(), 9);
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let load = parse("maximum: 10\nmaximum: 20\n");
        assert!(load.issues.is_empty());
        assert_eq!(load.configuration.maximum(), 20);
    }

    #[test]
    fn test_bad_duplicate_keeps_earlier_value() {
        let load = parse("maximum: 10\nmaximum: twenty\n");
        assert_eq!(load.issues.len(), 1);
        assert_eq!(load.configuration.maximum(), 10);
    }

    #[test]
    fn test_line_without_separator_is_reported() {
        let load = parse("minimum 4\nmaximum: 8");
        assert_eq!(
            load.issues,
            vec![ConfigIssue::MissingSeparator {
                line: 1,
                text: "minimum 4".to_string()
            }]
        );
        assert_eq!(load.configuration.minimum(), DEFAULT_MINIMUM);
        assert_eq!(load.configuration.maximum(), 8);
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let load = parse("minimum: 1:2");
        assert_eq!(
            load.issues,
            vec![ConfigIssue::MalformedValue {
                line: 1,
                key: ConfigKey::Minimum,
                value: "1:2".to_string()
            }]
        );
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let load = parse("Minimum: 4");
        assert!(matches!(load.issues[0], ConfigIssue::UnknownKey { .. }));
        assert_eq!(load.configuration.minimum(), DEFAULT_MINIMUM);
    }

    #[test]
    fn test_blank_and_comment_lines_are_silent() {
        let load = parse("\n# bounds\n   \nminimum: 2\n\n");
        assert!(load.issues.is_empty());
        assert_eq!(load.configuration.minimum(), 2);
    }

    #[test]
    fn test_empty_value_is_malformed() {
        let load = parse("attempts:");
        assert!(matches!(
            load.issues[0],
            ConfigIssue::MalformedValue { key: ConfigKey::Attempts, .. }
        ));
    }

    #[test]
    fn test_non_utf8_line_does_not_stop_parsing() {
        let load = parse_config(&b"# caf\xE9\nminimum: 1\nmaximum: 10\nattempts: 3\n"[..]);
        assert!(load.issues.is_empty());
        assert_eq!(load.configuration.minimum(), 1);
        assert_eq!(load.configuration.maximum(), 10);
        assert_eq!(load.configuration.attempts(), 3);
    }

    #[test]
    fn test_non_utf8_value_is_malformed_not_fatal() {
        let load = parse_config(&b"maximum: 1\xFF\nattempts: 4\r\n"[..]);
        assert_eq!(load.issues.len(), 1);
        assert!(matches!(
            load.issues[0],
            ConfigIssue::MalformedValue { line: 1, key: ConfigKey::Maximum, .. }
        ));
        assert_eq!(load.configuration.maximum(), DEFAULT_MAXIMUM);
        assert_eq!(load.configuration.attempts(), 4);
    }

    /// Yields one good line, then fails.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "device unplugged"));
            }
            self.served = true;
            let line = b"minimum: 7\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn test_read_error_keeps_lines_parsed_before_it() {
        let reader = io::BufReader::new(FailingReader { served: false });
        let load = parse_config(reader);
        assert_eq!(
            load.issues,
            vec![ConfigIssue::Io {
                message: "device unplugged".to_string()
            }]
        );
        assert_eq!(load.configuration.minimum(), 7);
        assert_eq!(load.configuration.maximum(), DEFAULT_MAXIMUM);
    }

    #[test]
    fn test_validate() {
        assert!(Configuration::default().validate().is_ok());

        let cfg = Configuration::builder().minimum(5).maximum(5).build();
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::EmptyRange {
                minimum: 5,
                maximum: 5
            })
        );

        let cfg = Configuration::builder().attempts(0).build();
        assert_eq!(
            cfg.validate(),
            Err(ConfigurationError::NoAttempts { attempts: 0 })
        );
    }

    #[test]
    fn test_set_routes_keys_and_defaults_the_rest() {
        let mut builder = ConfigurationBuilder::new();
        builder.set(ConfigKey::Maximum, 12);
        let cfg = builder.build();
        assert_eq!(cfg.maximum(), 12);
        assert_eq!(cfg.minimum(), DEFAULT_MINIMUM);
        assert_eq!(cfg.attempts(), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let cfg = Configuration::builder().minimum(1).maximum(3).build();
        assert!(cfg.contains(1));
        assert!(cfg.contains(3));
        assert!(!cfg.contains(0));
        assert!(!cfg.contains(4));
    }
}
