//! Initialization sequence steps.

use std::str::FromStr;

use crate::error::{Error, Result};

/// One step of the initialization sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// `<label>-`: take the lens out of its box.
    Remove { label: String },
    /// `<label>=<focal>`: replace the lens in place, or add it at the back.
    Insert { label: String, focal: u8 },
}

impl Step {
    pub fn label(&self) -> &str {
        match self {
            Step::Remove { label } | Step::Insert { label, .. } => label,
        }
    }
}

fn invalid(step: &str, reason: &'static str) -> Error {
    Error::InvalidStep {
        step: step.to_owned(),
        reason,
    }
}

fn check_label<'a>(step: &str, label: &'a str) -> Result<&'a str> {
    if label.is_empty() {
        return Err(invalid(step, "missing label"));
    }
    if !label.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(invalid(step, "label must be ASCII letters"));
    }
    Ok(label)
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(label) = s.strip_suffix('-') {
            let label = check_label(s, label)?;
            return Ok(Step::Remove {
                label: label.to_owned(),
            });
        }

        let (label, focal) = s
            .split_once('=')
            .ok_or_else(|| invalid(s, "expected '-' or '='"))?;
        let label = check_label(s, label)?;
        let focal = match focal.as_bytes() {
            [d @ b'1'..=b'9'] => d - b'0',
            _ => return Err(invalid(s, "focal length must be a single digit 1-9")),
        };
        Ok(Step::Insert {
            label: label.to_owned(),
            focal,
        })
    }
}

/// Split a comma-separated initialization sequence into its raw steps.
/// Surrounding whitespace and embedded newlines are ignored.
pub fn split_sequence(input: &str) -> Result<Vec<String>> {
    let joined: String = input.trim().chars().filter(|&c| c != '\n' && c != '\r').collect();
    if joined.is_empty() {
        return Err(Error::EmptySequence);
    }
    Ok(joined.split(',').map(str::to_owned).collect())
}

pub fn parse_sequence(input: &str) -> Result<Vec<Step>> {
    split_sequence(input)?.iter().map(|raw| raw.parse()).collect()
}
