use std::collections::HashMap;
use std::fmt::Display;

use log::debug;
use strum::{EnumIter, IntoEnumIterator};

use crate::conjugate::{
    conjugate_conditional, conjugate_future, conjugate_past, conjugate_past_habitual,
    conjugate_present, TenseForms,
};
use crate::{ConjugationError, Dialect, VerbRecord};

/// The tenses a paradigm covers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Tense {
    Present,
    Future,
    Past,
    Conditional,
    PastHabitual,
}

impl Tense {
    /// Conjugates the provided verb in this tense.
    pub fn conjugate(
        &self,
        verb: &VerbRecord,
        dialect: Dialect,
    ) -> Result<TenseForms, ConjugationError> {
        match self {
            Tense::Present => conjugate_present(verb, dialect),
            Tense::Future => conjugate_future(verb, dialect),
            Tense::Past => conjugate_past(verb, dialect),
            Tense::Conditional => conjugate_conditional(verb, dialect),
            Tense::PastHabitual => conjugate_past_habitual(verb, dialect),
        }
    }
}

impl Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Tense::Present => "Present",
            Tense::Future => "Future",
            Tense::Past => "Past",
            Tense::Conditional => "Conditional",
            Tense::PastHabitual => "Past Habitual",
        };

        string.fmt(f)
    }
}

/// Every form of one verb in one dialect, keyed by tense.
///
/// Built fresh on every request; the caller owns it and nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paradigm {
    tenses: HashMap<Tense, TenseForms>,
}

impl Paradigm {
    /// The forms of the provided tense.
    pub fn get(&self, tense: Tense) -> Option<&TenseForms> {
        self.tenses.get(&tense)
    }

    /// Iterates over the tenses in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Tense, &TenseForms)> + '_ {
        Tense::iter().filter_map(|tense| self.tenses.get(&tense).map(|forms| (tense, forms)))
    }
}

/// Generates the full paradigm of the provided verb: every tense, person, and
/// polarity in one structure.
///
/// The first tense that fails aborts the whole generation; no partial paradigm is
/// returned.
pub fn generate_full_paradigm(
    verb: &VerbRecord,
    dialect: Dialect,
) -> Result<Paradigm, ConjugationError> {
    debug!("Generating full paradigm of {:?} ({dialect})", verb.verb);

    let mut tenses = HashMap::new();
    for tense in Tense::iter() {
        tenses.insert(tense, tense.conjugate(verb, dialect)?);
    }

    Ok(Paradigm { tenses })
}
