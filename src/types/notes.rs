//! Note-derived condition flags: NoteFlag, NoteFlags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition indicators that can be detected in free-text clinical notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteFlag {
    Pcos,
    Endometriosis,
    IrregularCycles,
    Thyroid,
    MaleFactor,
    Infection,
    Hyperprolactinemia,
}

impl NoteFlag {
    /// Canonical order used for display and iteration.
    pub const ALL: [NoteFlag; 7] = [
        NoteFlag::Pcos,
        NoteFlag::Endometriosis,
        NoteFlag::IrregularCycles,
        NoteFlag::Thyroid,
        NoteFlag::MaleFactor,
        NoteFlag::Infection,
        NoteFlag::Hyperprolactinemia,
    ];

    /// Snake-case key, e.g. `irregular_cycles`.
    pub const fn key(self) -> &'static str {
        match self {
            NoteFlag::Pcos => "pcos",
            NoteFlag::Endometriosis => "endometriosis",
            NoteFlag::IrregularCycles => "irregular_cycles",
            NoteFlag::Thyroid => "thyroid",
            NoteFlag::MaleFactor => "male_factor",
            NoteFlag::Infection => "infection",
            NoteFlag::Hyperprolactinemia => "hyperprolactinemia",
        }
    }

    /// Human label: underscores to spaces, each word capitalised.
    pub fn display_name(self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for NoteFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fully populated flag map. Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFlags {
    pub pcos: bool,
    pub endometriosis: bool,
    pub irregular_cycles: bool,
    pub thyroid: bool,
    pub male_factor: bool,
    pub infection: bool,
    pub hyperprolactinemia: bool,
}

impl NoteFlags {
    pub const fn get(&self, flag: NoteFlag) -> bool {
        match flag {
            NoteFlag::Pcos => self.pcos,
            NoteFlag::Endometriosis => self.endometriosis,
            NoteFlag::IrregularCycles => self.irregular_cycles,
            NoteFlag::Thyroid => self.thyroid,
            NoteFlag::MaleFactor => self.male_factor,
            NoteFlag::Infection => self.infection,
            NoteFlag::Hyperprolactinemia => self.hyperprolactinemia,
        }
    }

    pub fn set(&mut self, flag: NoteFlag, value: bool) {
        let slot = match flag {
            NoteFlag::Pcos => &mut self.pcos,
            NoteFlag::Endometriosis => &mut self.endometriosis,
            NoteFlag::IrregularCycles => &mut self.irregular_cycles,
            NoteFlag::Thyroid => &mut self.thyroid,
            NoteFlag::MaleFactor => &mut self.male_factor,
            NoteFlag::Infection => &mut self.infection,
            NoteFlag::Hyperprolactinemia => &mut self.hyperprolactinemia,
        };
        *slot = value;
    }

    /// Builder-style setter, handy for fixtures.
    #[must_use]
    pub fn with(mut self, flag: NoteFlag) -> Self {
        self.set(flag, true);
        self
    }

    /// Flags that are set, in canonical order.
    pub fn detected(&self) -> Vec<NoteFlag> {
        NoteFlag::ALL.into_iter().filter(|f| self.get(*f)).collect()
    }

    /// Flags that were not detected, in canonical order.
    pub fn blindspots(&self) -> Vec<NoteFlag> {
        NoteFlag::ALL.into_iter().filter(|f| !self.get(*f)).collect()
    }

    pub fn count(&self) -> usize {
        NoteFlag::ALL.iter().filter(|f| self.get(**f)).count()
    }

    pub fn any(&self) -> bool {
        self.count() > 0
    }
}
