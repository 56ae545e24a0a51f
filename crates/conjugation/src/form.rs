use std::fmt::Display;

/// A slot in a tense's paradigm.
///
/// Not every tense fills every slot: the future has no synthetic 1sg, the simple
/// past has no 1sg or 2sg, only the present carries the two relative variants,
/// and so on. The ending tables are the source of truth for which slots exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammaticalPerson {
    Analytic,
    FirstSingular,
    SecondSingular,
    FirstPlural,
    ThirdPlural,
    Impersonal,
    Relative,
    Relative1,
    Relative2,
}

impl GrammaticalPerson {
    /// Whether this is one of the relative persons.
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            GrammaticalPerson::Relative | GrammaticalPerson::Relative1 | GrammaticalPerson::Relative2
        )
    }
}

impl Display for GrammaticalPerson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            GrammaticalPerson::Analytic => "analytic",
            GrammaticalPerson::FirstSingular => "1sg",
            GrammaticalPerson::SecondSingular => "2sg",
            GrammaticalPerson::FirstPlural => "1pl",
            GrammaticalPerson::ThirdPlural => "3pl",
            GrammaticalPerson::Impersonal => "impersonal",
            GrammaticalPerson::Relative => "relative",
            GrammaticalPerson::Relative1 => "relative1",
            GrammaticalPerson::Relative2 => "relative2",
        };

        string.fmt(f)
    }
}

/// Whether a form encodes its person in the ending itself, or relies on an
/// explicit subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Synthesis {
    Analytic,
    Synthetic,
}

impl Display for Synthesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Synthesis::Analytic => "analytic",
            Synthesis::Synthetic => "synthetic",
        };

        string.fmt(f)
    }
}

/// The clause-type particle a form is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarityMarker {
    Unmarked,
    Negative,
    Interrogative,
}

impl Display for PolarityMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            PolarityMarker::Unmarked => "unmarked",
            PolarityMarker::Negative => "negative",
            PolarityMarker::Interrogative => "interrogative",
        };

        string.fmt(f)
    }
}

/// A single surface form together with its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugatedForm {
    /// The word(s) as they would be written, particle included.
    pub text: String,
    pub synthesis: Synthesis,
    pub polarity: PolarityMarker,
}

impl ConjugatedForm {
    pub fn new(text: String, synthesis: Synthesis, polarity: PolarityMarker) -> ConjugatedForm {
        ConjugatedForm {
            text,
            synthesis,
            polarity,
        }
    }
}

impl Display for ConjugatedForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.text.fmt(f)
    }
}
