use std::fmt::Display;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The inflectional pattern a verb follows.
///
/// Irregular is recognized in verb data but has no ending tables; conjugating an
/// irregular verb always fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjugationClass {
    First,
    Second,
    Irregular,
}

impl Display for ConjugationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            ConjugationClass::First => "first conjugation",
            ConjugationClass::Second => "second conjugation",
            ConjugationClass::Irregular => "irregular",
        };

        string.fmt(f)
    }
}

// Verb data encodes the class as the integer 1 or 2, or the string "irregular".
impl<'de> Deserialize<'de> for ConjugationClass {
    fn deserialize<D>(deserializer: D) -> Result<ConjugationClass, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClassVisitor;

        impl Visitor<'_> for ClassVisitor {
            type Value = ConjugationClass;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("1, 2, or \"irregular\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<ConjugationClass, E> {
                match value {
                    1 => Ok(ConjugationClass::First),
                    2 => Ok(ConjugationClass::Second),
                    _ => Err(E::custom(format!("unknown conjugation class {value}"))),
                }
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<ConjugationClass, E> {
                u64::try_from(value)
                    .map_err(|_| E::custom(format!("unknown conjugation class {value}")))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ConjugationClass, E> {
                match value {
                    "irregular" => Ok(ConjugationClass::Irregular),
                    _ => Err(E::custom(format!("unknown conjugation class \"{value}\""))),
                }
            }
        }

        deserializer.deserialize_any(ClassVisitor)
    }
}

/// Vowel-harmony classification of a root's final consonant, which selects the
/// ending variant that attaches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Width {
    #[serde(rename = "s")]
    Slender,
    #[serde(rename = "b")]
    Broad,
}

impl Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Width::Slender => "slender",
            Width::Broad => "broad",
        };

        string.fmt(f)
    }
}

/// The dialects the ending tables are keyed by.
///
/// Only Official endings are populated so far; the other dialects resolve to a
/// lookup error rather than falling back.
//TODO populate Connacht, Ulster, and Munster ending tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Official,
    Connacht,
    Ulster,
    Munster,
}

impl Dialect {
    /// Parses the provided string to a `Dialect`. Returns `None` if the string doesn't map to any dialect.
    pub fn parse(input: &str) -> Option<Dialect> {
        match input.to_lowercase().as_str() {
            "o" | "official" => Some(Dialect::Official),
            "c" | "connacht" => Some(Dialect::Connacht),
            "u" | "ulster" => Some(Dialect::Ulster),
            "m" | "munster" => Some(Dialect::Munster),
            _ => None,
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Dialect::Official => "Official",
            Dialect::Connacht => "Connacht",
            Dialect::Ulster => "Ulster",
            Dialect::Munster => "Munster",
        };

        string.fmt(f)
    }
}

/// A single verb's lexical entry, as loaded from the verb data file.
#[derive(Debug, Clone, Deserialize)]
pub struct VerbRecord {
    /// The dictionary form. Also the analytic root of the simple past.
    pub verb: String,
    /// The stem future-like tenses build their synthetic forms on.
    #[serde(default)]
    pub future_root: Option<String>,
    /// Overrides `future_root` in the present tense only.
    #[serde(default)]
    pub present_root: Option<String>,
    /// Overrides the synthetic root of the simple past.
    #[serde(default)]
    pub past_root: Option<String>,
    pub class: ConjugationClass,
    pub width: Width,
    /// Class/width overrides for the future-like tenses.
    #[serde(default)]
    pub future_class: Option<ConjugationClass>,
    #[serde(default)]
    pub future_width: Option<Width>,
    /// Class/width overrides for the simple past.
    #[serde(default)]
    pub past_class: Option<ConjugationClass>,
    #[serde(default)]
    pub past_width: Option<Width>,
    /// English definition, carried through untouched.
    #[serde(default)]
    pub definition: String,
    /// Invariant forms; passed through rather than generated.
    #[serde(default)]
    pub verbal_nouns: Option<Vec<String>>,
    #[serde(default)]
    pub verbal_adjectives: Option<Vec<String>>,
}

impl VerbRecord {
    /// The conjugation class of the future-like tenses.
    pub fn future_class(&self) -> ConjugationClass {
        self.future_class.unwrap_or(self.class)
    }

    /// The width of the future-like tenses.
    pub fn future_width(&self) -> Width {
        self.future_width.unwrap_or(self.width)
    }

    /// The conjugation class of the simple past.
    pub fn past_class(&self) -> ConjugationClass {
        self.past_class.unwrap_or(self.class)
    }

    /// The width of the simple past.
    pub fn past_width(&self) -> Width {
        self.past_width.unwrap_or(self.width)
    }
}
