use serde::{Deserialize, Serialize};

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Kind of item being learned.
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    Radical,
    Kanji,
    Vocabulary,
    KanaVocabulary,
}

impl SubjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Radical => "radical",
            Self::Kanji => "kanji",
            Self::Vocabulary => "vocabulary",
            Self::KanaVocabulary => "kana_vocabulary",
        }
    }
}

impl FromStr for SubjectType {
    type Err = ParseSubjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = match s {
            "radical" => Self::Radical,
            "kanji" => Self::Kanji,
            "vocabulary" => Self::Vocabulary,
            "kana_vocabulary" => Self::KanaVocabulary,
            _ => return Err(ParseSubjectTypeError(s.to_string())),
        };

        Ok(result)
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown subject type {0:?}")]
pub struct ParseSubjectTypeError(String);
