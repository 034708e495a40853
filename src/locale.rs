use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    plural::{PluralRule, PluralTable, WordForms},
    time::TimeUnit,
};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" => Ok(Language::Russian),
            _ => Err(Error::UnknownLanguage(s.to_owned())),
        }
    }
}

/// Fixed strings of a relative time phrase. Templates carry a single `{}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases {
    pub just_now: &'static str,
    pub right_now: &'static str,
    pub past: &'static str,
    pub future: &'static str,
    pub few_seconds: &'static str,
    pub a_minute: &'static str,
    pub an_hour: &'static str,
    pub a_day: &'static str,
    pub over_a_year_past: &'static str,
    pub over_a_year_future: &'static str,
}

impl Phrases {
    pub fn render_past(&self, fragment: &str) -> String {
        self.past.replacen("{}", fragment, 1)
    }

    pub fn render_future(&self, fragment: &str) -> String {
        self.future.replacen("{}", fragment, 1)
    }
}

const ENGLISH_PHRASES: Phrases = Phrases {
    just_now: "just now",
    right_now: "right now",
    past: "{} ago",
    future: "in {}",
    few_seconds: "a few seconds",
    a_minute: "a minute",
    an_hour: "an hour",
    a_day: "a day",
    over_a_year_past: "more than a year ago",
    over_a_year_future: "in more than a year",
};

const RUSSIAN_PHRASES: Phrases = Phrases {
    just_now: "только что",
    right_now: "прямо сейчас",
    past: "{} назад",
    future: "через {}",
    few_seconds: "несколько секунд",
    a_minute: "минуту",
    an_hour: "час",
    a_day: "день",
    over_a_year_past: "более года назад",
    over_a_year_future: "более чем через год",
};

/// Everything needed to phrase a duration in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub rule: PluralRule,
    pub words: PluralTable,
    pub phrases: Phrases,
}

impl Locale {
    pub fn english() -> Self {
        let words = PluralTable::new()
            .with(TimeUnit::Second, WordForms::new("second", "seconds", "seconds"))
            .with(TimeUnit::Minute, WordForms::new("minute", "minutes", "minutes"))
            .with(TimeUnit::Hour, WordForms::new("hour", "hours", "hours"))
            .with(TimeUnit::Day, WordForms::new("day", "days", "days"));

        Self {
            rule: PluralRule::English,
            words,
            phrases: ENGLISH_PHRASES,
        }
    }

    pub fn russian() -> Self {
        let words = PluralTable::new()
            .with(TimeUnit::Second, WordForms::new("секунду", "секунды", "секунд"))
            .with(TimeUnit::Minute, WordForms::new("минуту", "минуты", "минут"))
            .with(TimeUnit::Hour, WordForms::new("час", "часа", "часов"))
            .with(TimeUnit::Day, WordForms::new("день", "дня", "дней"));

        Self {
            rule: PluralRule::Slavic,
            words,
            phrases: RUSSIAN_PHRASES,
        }
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Russian => Self::russian(),
        }
    }

    /// Replaces word forms with the entries of `overrides`, keeping the rest.
    pub fn with_words(mut self, overrides: &PluralTable) -> Self {
        self.words.merge(overrides);
        self
    }

    pub fn pluralize(&self, count: u64, unit: TimeUnit) -> Result<String> {
        self.words.pluralize(count, unit, self.rule)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}
