//! Date patterns for bundled datasets
//!
//! Datasets write dates with letter patterns such as `dd.MM.yyyy`. A
//! [`DatePattern`] translates such a pattern into a chrono format string
//! once, then parses and formats dates with it.
//!
//! Supported letters: `d` (day), `M` (month; `MMM` and `MMMM` for month
//! names) and `y` (year; `yy` for two digits). Month names are always
//! English, whatever locale the pattern is configured for. Text inside single
//! quotes is literal, `''` is an apostrophe. Any other non-letter is
//! literal.

use crate::core::error::DomainError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Pattern used when no locale-specific one is configured.
pub const DEFAULT_DATE_PATTERN: &str = "dd.MM.yyyy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pattern: String,
    chrono_format: String,
    month_names: bool,
}

impl DatePattern {
    pub fn new(pattern: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidDatePattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let mut chrono_format = String::new();
        let (mut has_day, mut has_month, mut has_year) = (false, false, false);
        let mut month_names = false;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        chrono_format.push('\'');
                        continue;
                    }
                    let mut closed = false;
                    while let Some(q) = chars.next() {
                        if q == '\'' {
                            if chars.peek() == Some(&'\'') {
                                chars.next();
                                chrono_format.push('\'');
                                continue;
                            }
                            closed = true;
                            break;
                        }
                        push_literal(&mut chrono_format, q);
                    }
                    if !closed {
                        return Err(invalid("unterminated quote"));
                    }
                }
                'd' | 'M' | 'y' => {
                    let mut run = 1;
                    while chars.peek() == Some(&c) {
                        chars.next();
                        run += 1;
                    }
                    let spec = match (c, run) {
                        ('d', 1) => "%-d",
                        ('d', 2) => "%d",
                        ('M', 1) => "%-m",
                        ('M', 2) => "%m",
                        ('M', 3) => "%b",
                        ('M', 4) => "%B",
                        ('y', 2) => "%y",
                        ('y', _) => "%Y",
                        _ => {
                            let field = c.to_string().repeat(run);
                            return Err(invalid(&format!("unsupported field '{field}'")));
                        }
                    };
                    match c {
                        'd' => has_day = true,
                        'M' => {
                            has_month = true;
                            month_names |= run >= 3;
                        }
                        _ => has_year = true,
                    }
                    chrono_format.push_str(spec);
                }
                c if c.is_ascii_alphabetic() => {
                    return Err(invalid(&format!("unsupported letter '{c}'")));
                }
                c => push_literal(&mut chrono_format, c),
            }
        }

        if !(has_day && has_month && has_year) {
            return Err(invalid("pattern needs day, month and year"));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            chrono_format,
            month_names,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern spells out month names (`MMM`, `MMMM`).
    pub fn uses_month_names(&self) -> bool {
        self.month_names
    }

    pub fn parse_date(&self, value: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(value.trim(), &self.chrono_format).map_err(|_| {
            DomainError::DateMismatch {
                value: value.to_string(),
                pattern: self.pattern.clone(),
            }
        })
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.chrono_format).to_string()
    }
}

fn push_literal(format: &mut String, c: char) {
    if c == '%' {
        format.push_str("%%");
    } else {
        format.push(c);
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_PATTERN.to_string(),
            chrono_format: "%d.%m.%Y".to_string(),
            month_names: false,
        }
    }
}

impl FromStr for DatePattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
