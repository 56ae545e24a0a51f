use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ConjugationClass, ConjugationError, Dialect, GrammaticalPerson, Width};

use ConjugationClass::{First, Second};
use Dialect::Official;
use GrammaticalPerson::{
    Analytic, FirstPlural, FirstSingular, Impersonal, Relative, Relative1, Relative2,
    SecondSingular, ThirdPlural,
};
use Width::{Broad, Slender};

lazy_static! {
    /// Endings of the present tense.
    pub static ref PRESENT_ENDINGS: EndingCatalog = EndingCatalog::present();
    /// Endings of the future tense.
    pub static ref FUTURE_ENDINGS: EndingCatalog = EndingCatalog::future();
    /// Endings of the past habitual tense.
    pub static ref PAST_HABITUAL_ENDINGS: EndingCatalog = EndingCatalog::past_habitual();
    /// Endings of the conditional.
    pub static ref CONDITIONAL_ENDINGS: EndingCatalog = EndingCatalog::conditional();
    /// Endings of the simple past. The analytic suffix is empty; the analytic past
    /// is marked by its fronting particle alone.
    pub static ref PAST_ENDINGS: EndingCatalog = EndingCatalog::past();
}

/// Suffixes of one tense family, keyed by conjugation class, width, and dialect.
///
/// Each populated slice is an ordered list of (person, suffix) pairs lifted
/// verbatim from the standard paradigm; nothing here is derived.
pub struct EndingCatalog {
    endings: HashMap<(ConjugationClass, Width, Dialect), Vec<(GrammaticalPerson, &'static str)>>,
}

impl EndingCatalog {
    /// Looks up the person-to-suffix list for the provided table slice.
    ///
    /// Irregular verbs fail outright; any other unpopulated slice (currently every
    /// dialect but Official) fails with a missing-endings error.
    pub fn get(
        &self,
        class: ConjugationClass,
        width: Width,
        dialect: Dialect,
    ) -> Result<&[(GrammaticalPerson, &'static str)], ConjugationError> {
        if class == ConjugationClass::Irregular {
            return Err(ConjugationError::IrregularUnsupported);
        }

        self.endings
            .get(&(class, width, dialect))
            .map(Vec::as_slice)
            .ok_or(ConjugationError::MissingEndings {
                class,
                width,
                dialect,
            })
    }

    fn present() -> EndingCatalog {
        let mut endings = HashMap::new();
        endings.insert(
            (First, Slender, Official),
            vec![
                (Analytic, "eann"),
                (FirstSingular, "im"),
                (FirstPlural, "imid"),
                (Impersonal, "tear"),
                (Relative1, "eanns"),
                (Relative2, "eas"),
            ],
        );
        endings.insert(
            (First, Broad, Official),
            vec![
                (Analytic, "ann"),
                (FirstSingular, "aim"),
                (FirstPlural, "aimid"),
                (Impersonal, "tar"),
                (Relative1, "anns"),
                (Relative2, "as"),
            ],
        );
        endings.insert(
            (Second, Slender, Official),
            vec![
                (Analytic, "íonn"),
                (FirstSingular, "ím"),
                (FirstPlural, "ímid"),
                (Impersonal, "ítear"),
                (Relative1, "íonns"),
                (Relative2, "íos"),
            ],
        );
        endings.insert(
            (Second, Broad, Official),
            vec![
                (Analytic, "aíonn"),
                (FirstSingular, "aím"),
                (FirstPlural, "aímid"),
                (Impersonal, "aítear"),
                (Relative1, "aíonns"),
                (Relative2, "aíos"),
            ],
        );

        EndingCatalog { endings }
    }

    fn future() -> EndingCatalog {
        let mut endings = HashMap::new();
        endings.insert(
            (First, Slender, Official),
            vec![
                (Analytic, "fidh"),
                (FirstPlural, "fimid"),
                (Impersonal, "fear"),
                (Relative, "feas"),
            ],
        );
        endings.insert(
            (First, Broad, Official),
            vec![
                (Analytic, "faidh"),
                (FirstPlural, "faimid"),
                (Impersonal, "far"),
                (Relative, "fas"),
            ],
        );
        endings.insert(
            (Second, Slender, Official),
            vec![
                (Analytic, "eoidh"),
                (FirstPlural, "eoimid"),
                (Impersonal, "eofar"),
                (Relative, "eos"),
            ],
        );
        endings.insert(
            (Second, Broad, Official),
            vec![
                (Analytic, "óidh"),
                (FirstPlural, "óimid"),
                (Impersonal, "ófar"),
                (Relative, "ós"),
            ],
        );

        EndingCatalog { endings }
    }

    fn past_habitual() -> EndingCatalog {
        let mut endings = HashMap::new();
        endings.insert(
            (First, Slender, Official),
            vec![
                (Analytic, "eadh"),
                (FirstSingular, "inn"),
                (SecondSingular, "teá"),
                (FirstPlural, "imis"),
                (ThirdPlural, "idís"),
                (Impersonal, "tí"),
            ],
        );
        endings.insert(
            (First, Broad, Official),
            vec![
                (Analytic, "adh"),
                (FirstSingular, "ainn"),
                (SecondSingular, "tá"),
                (FirstPlural, "aimis"),
                (ThirdPlural, "aidís"),
                (Impersonal, "taí"),
            ],
        );
        endings.insert(
            (Second, Slender, Official),
            vec![
                (Analytic, "íodh"),
                (FirstSingular, "ínn"),
                (SecondSingular, "íteá"),
                (FirstPlural, "ímis"),
                (ThirdPlural, "ídís"),
                (Impersonal, "ítí"),
            ],
        );
        endings.insert(
            (Second, Broad, Official),
            vec![
                (Analytic, "aíodh"),
                (FirstSingular, "aínn"),
                (SecondSingular, "aíteá"),
                (FirstPlural, "aímis"),
                (ThirdPlural, "aídís"),
                (Impersonal, "aítí"),
            ],
        );

        EndingCatalog { endings }
    }

    fn conditional() -> EndingCatalog {
        let mut endings = HashMap::new();
        endings.insert(
            (First, Slender, Official),
            vec![
                (Analytic, "feadh"),
                (FirstSingular, "finn"),
                (SecondSingular, "feá"),
                (FirstPlural, "fimis"),
                (ThirdPlural, "fidís"),
                (Impersonal, "fí"),
            ],
        );
        endings.insert(
            (First, Broad, Official),
            vec![
                (Analytic, "fadh"),
                (FirstSingular, "fainn"),
                (SecondSingular, "fá"),
                (FirstPlural, "faimis"),
                (ThirdPlural, "faidís"),
                (Impersonal, "faí"),
            ],
        );
        endings.insert(
            (Second, Slender, Official),
            vec![
                (Analytic, "eodh"),
                (FirstSingular, "eoinn"),
                (SecondSingular, "eofá"),
                (FirstPlural, "eoimis"),
                (ThirdPlural, "eoidís"),
                (Impersonal, "eofaí"),
            ],
        );
        endings.insert(
            (Second, Broad, Official),
            vec![
                (Analytic, "ódh"),
                (FirstSingular, "óinn"),
                (SecondSingular, "ófá"),
                (FirstPlural, "óimis"),
                (ThirdPlural, "óidís"),
                (Impersonal, "ófaí"),
            ],
        );

        EndingCatalog { endings }
    }

    fn past() -> EndingCatalog {
        let mut endings = HashMap::new();
        endings.insert(
            (First, Slender, Official),
            vec![
                (Analytic, ""),
                (FirstPlural, "eamar"),
                (ThirdPlural, "eadar"),
                (Impersonal, "eadh"),
            ],
        );
        endings.insert(
            (First, Broad, Official),
            vec![
                (Analytic, ""),
                (FirstPlural, "amar"),
                (ThirdPlural, "adar"),
                (Impersonal, "adh"),
            ],
        );
        endings.insert(
            (Second, Slender, Official),
            vec![
                (Analytic, ""),
                (FirstPlural, "íomar"),
                (ThirdPlural, "íodar"),
                (Impersonal, "íodh"),
            ],
        );
        endings.insert(
            (Second, Broad, Official),
            vec![
                (Analytic, ""),
                (FirstPlural, "aíomar"),
                (ThirdPlural, "aíodar"),
                (Impersonal, "aíodh"),
            ],
        );

        EndingCatalog { endings }
    }
}
