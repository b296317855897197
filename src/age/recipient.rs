// classgit: encrypted course sync over Git
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::AgeError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn recipient_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            // Bech32 data alphabet; X25519 recipients are always 62 characters.
            Regex::new(r"^age1[qpzry9x8gf2tvdw0s3jn54khce6mua7l]{58}$").ok()
        })
        .as_ref()
}

/// An age X25519 public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipient(String);

impl Recipient {
    /// Validate `key` after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `AgeError::InvalidRecipient` if the key is not an `age1` recipient.
    pub fn parse(key: &str) -> Result<Self, AgeError> {
        let key = key.trim();
        if recipient_pattern().is_some_and(|re| re.is_match(key)) {
            Ok(Self(key.to_string()))
        } else {
            Err(AgeError::InvalidRecipient {
                key: key.to_string(),
            })
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Recipient {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Recipient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
