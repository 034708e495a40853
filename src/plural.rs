use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    time::TimeUnit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Few,
    Many,
}

impl PluralCategory {
    /// Three-form rule used by Russian and most other Slavic languages.
    pub const fn of(count: u64) -> Self {
        match (count % 100, count % 10) {
            (5..=20, _) => PluralCategory::Many,
            (_, 1) => PluralCategory::One,
            (_, 2..=4) => PluralCategory::Few,
            _ => PluralCategory::Many,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralRule {
    /// one / few / many
    Slavic,
    /// one / many
    English,
}

impl PluralRule {
    pub const fn category(self, count: u64) -> PluralCategory {
        match self {
            PluralRule::Slavic => PluralCategory::of(count),
            PluralRule::English if count == 1 => PluralCategory::One,
            PluralRule::English => PluralCategory::Many,
        }
    }
}

/// One word per plural category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordForms {
    pub one: String,
    pub few: String,
    pub many: String,
}

impl WordForms {
    pub fn new(one: &str, few: &str, many: &str) -> Self {
        Self {
            one: one.to_owned(),
            few: few.to_owned(),
            many: many.to_owned(),
        }
    }

    pub fn get(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::One => &self.one,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluralTable {
    units: BTreeMap<TimeUnit, WordForms>,
}

impl PluralTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, unit: TimeUnit, forms: WordForms) -> Self {
        self.units.insert(unit, forms);
        self
    }

    pub fn get(&self, unit: TimeUnit) -> Option<&WordForms> {
        self.units.get(&unit)
    }

    /// Copies every entry of `other` over this table.
    pub fn merge(&mut self, other: &PluralTable) {
        for (unit, forms) in &other.units {
            self.units.insert(*unit, forms.clone());
        }
    }

    /// Renders `"{count} {word}"`, failing when `unit` has no configured forms.
    pub fn pluralize(&self, count: u64, unit: TimeUnit, rule: PluralRule) -> Result<String> {
        let forms = self.get(unit).ok_or(Error::MissingWordForms(unit))?;
        let word = forms.get(rule.category(count));
        Ok(format!("{count} {word}"))
    }
}
