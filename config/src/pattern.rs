//! Date pattern compilation
//!
//! Patterns are written with the familiar `yyyy-MM-dd HH:mm:ss` letter syntax and
//! compiled once into a `chrono` format string.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use crate::ConfigError;

/// A compiled date or date-time formatting pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatePattern {
    pattern: String,
    chrono_format: String,
}

impl DatePattern {
    /// Compile a pattern such as `yyyy-MM-dd` or `dd.MM.yyyy HH:mm:ss.SSS`
    pub fn compile(pattern: &str) -> Result<Self, ConfigError> {
        let chrono_format = translate(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            chrono_format,
        })
    }

    /// Built-in patterns whose translation is known ahead of time
    pub(crate) fn precompiled(pattern: &str, chrono_format: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            chrono_format: chrono_format.to_string(),
        }
    }

    /// The pattern as written by the user
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The equivalent `chrono` strftime format
    pub fn chrono_format(&self) -> &str {
        &self.chrono_format
    }

    /// Format a date-only value
    ///
    /// Fails when the pattern asks for time-of-day fields a date does not have.
    pub fn format_date(&self, date: &NaiveDate) -> Result<String, ConfigError> {
        self.render(date.format(&self.chrono_format))
    }

    /// Format a date-time value
    pub fn format_date_time(&self, date_time: &NaiveDateTime) -> Result<String, ConfigError> {
        self.render(date_time.format(&self.chrono_format))
    }

    fn render(&self, formatted: impl fmt::Display) -> Result<String, ConfigError> {
        let mut out = String::new();
        write!(out, "{}", formatted).map_err(|_| ConfigError::Format {
            pattern: self.pattern.clone(),
        })?;
        Ok(out)
    }
}

impl TryFrom<String> for DatePattern {
    type Error = ConfigError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::compile(&pattern)
    }
}

impl From<DatePattern> for String {
    fn from(pattern: DatePattern) -> Self {
        pattern.pattern
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn translate(pattern: &str) -> Result<String, ConfigError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // '' outside a literal is a single quote
            if chars.get(i + 1) == Some(&'\'') {
                out.push('\'');
                i += 2;
                continue;
            }

            let mut j = i + 1;
            loop {
                match chars.get(j) {
                    None => return Err(invalid(pattern, "unterminated quoted literal")),
                    Some('\'') if chars.get(j + 1) == Some(&'\'') => {
                        out.push('\'');
                        j += 2;
                    }
                    Some('\'') => break,
                    Some(&literal) => {
                        push_literal(&mut out, literal);
                        j += 1;
                    }
                }
            }
            i = j + 1;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.get(i + width) == Some(&c) {
                width += 1;
            }
            out.push_str(field_specifier(pattern, c, width)?);
            i += width;
            continue;
        }

        push_literal(&mut out, c);
        i += 1;
    }

    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

fn field_specifier(pattern: &str, letter: char, width: usize) -> Result<&'static str, ConfigError> {
    let specifier = match (letter, width) {
        ('y' | 'u', 2) => "%y",
        ('y' | 'u', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('D', 1) => "%-j",
        ('D', 3) => "%j",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('S', 3) => "%3f",
        ('S', 6) => "%6f",
        ('S', 9) => "%9f",
        ('a', 1) => "%p",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        _ => {
            return Err(invalid(
                pattern,
                &format!("unsupported field '{}'", letter.to_string().repeat(width)),
            ))
        }
    };
    Ok(specifier)
}

fn invalid(pattern: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
