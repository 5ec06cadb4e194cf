// SPDX-FileCopyrightText: 2026 Hosteldesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! source spans, valid key listings, and "did you mean?" suggestions using
//! Jaro-Winkler string similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `base_utl` -> `base_url` while
/// filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(hosteldesk::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the section.
        valid_keys: String,
        /// Source span for the offending key.
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        /// The source file content for context display.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(hosteldesk::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A required configuration key is missing.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(hosteldesk::config::missing_key),
        help("add `{key} = <value>` to your hosteldesk.toml")
    )]
    MissingKey {
        /// The missing key name.
        key: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(hosteldesk::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(hosteldesk::config::other))]
    Other(String),
}

/// Format the help message for unknown key errors.
fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may contain multiple underlying errors; each is mapped
/// to the matching `ConfigError` variant. Unknown-field errors get a fuzzy
/// match suggestion and, when the key can be found in one of the given
/// TOML sources, a source span pointing at it.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => {
                let valid_keys: Vec<&str> = expected.to_vec();
                let section = error.path.first().map(|s| s.to_string());
                let (span, src) = locate_key(toml_sources, section.as_deref(), field);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion: suggest_key(field, &valid_keys),
                    valid_keys: valid_keys.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.clone().into_owned(),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.to_string(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// Search the loaded TOML sources for a key and build a span for it.
///
/// The config is at most three known files deep, so the first source that
/// contains the key wins; the section (if any) scopes the search to the
/// text after its `[section]` header.
fn locate_key(
    toml_sources: &[(String, String)],
    section: Option<&str>,
    key: &str,
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    for (path, content) in toml_sources {
        if let Some(offset) = key_offset(content, section, key) {
            return (
                Some(SourceSpan::new(offset.into(), key.len())),
                Some(NamedSource::new(path, content.clone())),
            );
        }
    }
    (None, None)
}

/// Byte offset of `key` as a TOML key within the given section.
///
/// A match must sit at the start of a line (after indentation) and be
/// followed by `=` or whitespace, so `base_url` never matches inside
/// `other_base_url_thing`.
fn key_offset(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let start = match section {
        Some(name) => {
            let header = format!("[{name}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };
    content[start..].match_indices(key).find_map(|(i, _)| {
        let at = start + i;
        let line_start = content[..at].rfind('\n').map_or(0, |p| p + 1);
        let leading_ok = content[line_start..at].trim().is_empty();
        let trailing_ok = content[at + key.len()..].starts_with([' ', '\t', '=']);
        (leading_ok && trailing_ok).then_some(at)
    })
}

/// Suggest a similar key name using Jaro-Winkler string similarity.
///
/// Returns the closest valid key above the similarity threshold, or
/// `None` if nothing is close enough.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (strsim::jaro_winkler(unknown, key), key))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, key)| key.to_string())
}

/// Render a list of `ConfigError`s to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_base_utl_for_base_url() {
        let valid = &["base_url", "timeout_secs"];
        assert_eq!(suggest_key("base_utl", valid), Some("base_url".to_string()));
    }

    #[test]
    fn suggest_timout_for_timeout() {
        let valid = &["base_url", "timeout_secs"];
        assert_eq!(
            suggest_key("timout_secs", valid),
            Some("timeout_secs".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_typo() {
        let valid = &["base_url", "timeout_secs"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn key_offset_scoped_to_section() {
        let content = "[api]\nbase_utl = \"http://x\"\n";
        let offset = key_offset(content, Some("api"), "base_utl").unwrap();
        assert_eq!(&content[offset..offset + 8], "base_utl");
    }

    #[test]
    fn key_offset_rejects_substring_matches() {
        let content = "[api]\nmy_base_url_note = 1\nbase_url = \"http://x\"\n";
        let offset = key_offset(content, Some("api"), "base_url").unwrap();
        assert_eq!(&content[offset..], "base_url = \"http://x\"\n");
    }

    #[test]
    fn key_offset_misses_absent_section() {
        let content = "[client]\nlog_level = \"info\"\n";
        assert_eq!(key_offset(content, Some("api"), "log_level"), None);
    }

    #[test]
    fn locate_key_takes_the_first_source_containing_it() {
        let sources = vec![
            ("a.toml".to_string(), "[api]\ntimeout_secs = 5\n".to_string()),
            ("b.toml".to_string(), "[api]\nbase_utl = \"x\"\n".to_string()),
        ];
        let (span, src) = locate_key(&sources, Some("api"), "base_utl");
        assert!(span.is_some());
        assert!(src.is_some());
    }
}
