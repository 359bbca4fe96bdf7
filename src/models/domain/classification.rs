use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A closed set of labels that can be bound from a name or a 1-based ordinal.
pub trait Classification: Sized + Copy + 'static {
    /// Human-readable name of the set, used in error messages.
    const KIND: &'static str;
    /// Every variant in ordinal order.
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;

    /// Extra normalized spellings accepted besides the variant name.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn from_ordinal(ordinal: u64) -> Option<Self> {
        let index = usize::try_from(ordinal).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Matches case-insensitively, ignoring spaces, dashes, underscores and slashes.
    fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if let Ok(ordinal) = trimmed.parse::<u64>() {
            return Self::from_ordinal(ordinal);
        }

        let key = normalize(trimmed);
        if key.is_empty() {
            return None;
        }

        Self::ALL.iter().copied().find(|variant| {
            normalize(variant.name()) == key || variant.aliases().contains(&key.as_str())
        })
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parses every value, splitting comma-separated entries and skipping blanks.
/// On failure returns all the offending values, not just the first.
pub fn parse_classification_list<T, S>(values: &[S]) -> Result<Vec<T>, Vec<String>>
where
    T: Classification,
    S: AsRef<str>,
{
    let mut parsed = Vec::new();
    let mut rejected = Vec::new();

    for raw in values
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        match T::parse(raw) {
            Some(variant) => parsed.push(variant),
            None => rejected.push(raw.to_string()),
        }
    }

    if rejected.is_empty() {
        Ok(parsed)
    } else {
        Err(rejected)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    OpenEnded,
    FillInTheBlank,
    Matching,
    ShortAnswer,
}

impl Classification for QuestionType {
    const KIND: &'static str = "question type";
    const ALL: &'static [Self] = &[
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
        QuestionType::OpenEnded,
        QuestionType::FillInTheBlank,
        QuestionType::Matching,
        QuestionType::ShortAnswer,
    ];

    fn name(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MultipleChoice",
            QuestionType::TrueFalse => "TrueFalse",
            QuestionType::OpenEnded => "OpenEnded",
            QuestionType::FillInTheBlank => "FillInTheBlank",
            QuestionType::Matching => "Matching",
            QuestionType::ShortAnswer => "ShortAnswer",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            QuestionType::FillInTheBlank => &["fillinblank", "fillblank"],
            QuestionType::TrueFalse => &["boolean"],
            _ => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Classification for DifficultyLevel {
    const KIND: &'static str = "difficulty level";
    const ALL: &'static [Self] = &[
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
        DifficultyLevel::Expert,
    ];

    fn name(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
            DifficultyLevel::Expert => "Expert",
        }
    }
}

struct NameOrOrdinal<T>(PhantomData<T>);

impl<'de, T: Classification> Visitor<'de> for NameOrOrdinal<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {} name or 1-based ordinal", T::KIND)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::parse(value).ok_or_else(|| E::custom(format!("unknown {} '{}'", T::KIND, value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        T::from_ordinal(value)
            .ok_or_else(|| E::custom(format!("{} ordinal {} is out of range", T::KIND, value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        match u64::try_from(value) {
            Ok(ordinal) => self.visit_u64(ordinal),
            Err(_) => Err(E::custom(format!(
                "{} ordinal {} is out of range",
                T::KIND,
                value
            ))),
        }
    }
}

macro_rules! classification_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(NameOrOrdinal(PhantomData))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

classification_serde!(QuestionType);
classification_serde!(DifficultyLevel);
