//! Language selection and output mode definitions

use crate::error::TtxmlError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Languages a batch can be tagged in.
///
/// Serialized as its code (`JP`); read back with the same aliases the
/// command line accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Japanese, analyzed with a vibrato dictionary
    #[default]
    Japanese,
    /// English, analyzed with an nlprule tokenizer
    English,
    /// Placeholder, no tagger exists yet
    French,
}

impl Language {
    /// Code written into `lang` attributes and archive names
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "JP",
            Language::English => "EN",
            Language::French => "FR",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::French => "French",
        }
    }

    /// Default archive file name, e.g. `en_tagged_results_xml_ttformat.zip`
    pub fn archive_file_name(&self) -> String {
        format!(
            "{}_tagged_results_xml_ttformat.zip",
            self.code().to_lowercase()
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TtxmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jp" | "ja" | "japanese" => Ok(Language::Japanese),
            "en" | "english" => Ok(Language::English),
            "fr" | "french" => Ok(Language::French),
            _ => Err(TtxmlError::Config(format!(
                "Invalid language: {}. Must be one of: JP, EN",
                s
            ))),
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_str(&code).map_err(serde::de::Error::custom)
    }
}

/// How each input file is rendered into XML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Keep the input's element structure, retag text regions in place
    #[default]
    Structure,
    /// Tag the whole file into one `<corpus>` element
    Corpus,
}

impl FromStr for OutputMode {
    type Err = TtxmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structure" => Ok(OutputMode::Structure),
            "corpus" => Ok(OutputMode::Corpus),
            _ => Err(TtxmlError::Config(format!(
                "Invalid mode: {}. Must be one of: structure, corpus",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Structure => f.write_str("structure"),
            OutputMode::Corpus => f.write_str("corpus"),
        }
    }
}
