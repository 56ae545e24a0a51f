use std::collections::HashMap;

use log::debug;

use crate::endings::{
    EndingCatalog, CONDITIONAL_ENDINGS, FUTURE_ENDINGS, PAST_ENDINGS, PAST_HABITUAL_ENDINGS,
    PRESENT_ENDINGS,
};
use crate::mutation::{eclipse, lenite, starts_with_vowel_or_f};
use crate::{
    ConjugatedForm, ConjugationClass, ConjugationError, Dialect, GrammaticalPerson, PolarityMarker,
    Synthesis, VerbRecord, Width,
};

/// All the forms of a verb in one tense, keyed by grammatical person.
pub type TenseForms = HashMap<GrammaticalPerson, Vec<ConjugatedForm>>;

/// The fronting particles of do-particled tenses. All of them lenite the root.
enum PastParticle {
    /// Surfaces as "d'" before vowels and "f", and as nothing otherwise.
    Do,
    Nior,
    Ar,
}

/// Attaches the provided past particle to the root, leniting it.
fn with_past_particle(particle: PastParticle, root: &str) -> String {
    match particle {
        PastParticle::Do => {
            if starts_with_vowel_or_f(root) {
                format!("d'{}", lenite(root))
            } else {
                lenite(root)
            }
        }
        PastParticle::Nior => format!("níor {}", lenite(root)),
        PastParticle::Ar => format!("ar {}", lenite(root)),
    }
}

/// Conjugates the provided verb in the present tense.
pub fn conjugate_present(
    verb: &VerbRecord,
    dialect: Dialect,
) -> Result<TenseForms, ConjugationError> {
    let root = verb
        .present_root
        .as_deref()
        .or(verb.future_root.as_deref())
        .ok_or_else(|| missing_future_root(verb))?;

    conjugate_futurelike(
        &PRESENT_ENDINGS,
        root,
        verb.future_class(),
        verb.future_width(),
        dialect,
    )
}

/// Conjugates the provided verb in the future tense.
pub fn conjugate_future(
    verb: &VerbRecord,
    dialect: Dialect,
) -> Result<TenseForms, ConjugationError> {
    let root = verb
        .future_root
        .as_deref()
        .ok_or_else(|| missing_future_root(verb))?;

    conjugate_futurelike(
        &FUTURE_ENDINGS,
        root,
        verb.future_class(),
        verb.future_width(),
        dialect,
    )
}

/// Conjugates the provided verb in the past habitual tense.
pub fn conjugate_past_habitual(
    verb: &VerbRecord,
    dialect: Dialect,
) -> Result<TenseForms, ConjugationError> {
    let root = verb.future_root.as_deref().unwrap_or(&verb.verb);

    conjugate_do_particled(
        &PAST_HABITUAL_ENDINGS,
        root,
        verb.future_class(),
        verb.future_width(),
        dialect,
    )
}

/// Conjugates the provided verb in the conditional.
pub fn conjugate_conditional(
    verb: &VerbRecord,
    dialect: Dialect,
) -> Result<TenseForms, ConjugationError> {
    let root = verb.future_root.as_deref().unwrap_or(&verb.verb);

    conjugate_do_particled(
        &CONDITIONAL_ENDINGS,
        root,
        verb.future_class(),
        verb.future_width(),
        dialect,
    )
}

/// Conjugates the provided verb in the simple past.
pub fn conjugate_past(verb: &VerbRecord, dialect: Dialect) -> Result<TenseForms, ConjugationError> {
    // The analytic past is built on the dictionary form; every synthetic person
    // uses the past root (or its fallbacks).
    let analytic_root = verb.verb.as_str();
    let synthetic_root = verb
        .past_root
        .as_deref()
        .or(verb.future_root.as_deref())
        .unwrap_or(analytic_root);

    let endings = PAST_ENDINGS.get(verb.past_class(), verb.past_width(), dialect)?;

    let mut conjugation = TenseForms::new();
    for (person, ending) in endings {
        let root = if *person == GrammaticalPerson::Analytic {
            analytic_root
        } else {
            synthetic_root
        };
        // The tag is suffix-driven: an empty suffix means the form carries no
        // person of its own, whatever its slot is named.
        let synthesis = if ending.is_empty() {
            Synthesis::Analytic
        } else {
            Synthesis::Synthetic
        };

        // The past impersonal resists lenition; its particles attach to the bare root.
        let forms = if *person == GrammaticalPerson::Impersonal {
            vec![
                ConjugatedForm::new(format!("{root}{ending}"), synthesis, PolarityMarker::Unmarked),
                ConjugatedForm::new(
                    format!("níor {root}{ending}"),
                    synthesis,
                    PolarityMarker::Negative,
                ),
                ConjugatedForm::new(
                    format!("ar {root}{ending}"),
                    synthesis,
                    PolarityMarker::Interrogative,
                ),
            ]
        } else {
            vec![
                ConjugatedForm::new(
                    format!("{}{ending}", with_past_particle(PastParticle::Do, root)),
                    synthesis,
                    PolarityMarker::Unmarked,
                ),
                ConjugatedForm::new(
                    format!("{}{ending}", with_past_particle(PastParticle::Nior, root)),
                    synthesis,
                    PolarityMarker::Negative,
                ),
                ConjugatedForm::new(
                    format!("{}{ending}", with_past_particle(PastParticle::Ar, root)),
                    synthesis,
                    PolarityMarker::Interrogative,
                ),
            ]
        };

        conjugation.insert(*person, forms);
    }

    Ok(conjugation)
}

/// Shared shape of the present and future tenses.
///
/// Every non-relative person gets an unmarked form, a "ní"+lenition negative, and
/// an "an"+eclipsis interrogative. Relative persons get the unmarked form only.
fn conjugate_futurelike(
    catalog: &EndingCatalog,
    root: &str,
    class: ConjugationClass,
    width: Width,
    dialect: Dialect,
) -> Result<TenseForms, ConjugationError> {
    debug!("Conjugating root {root:?} as {class} {width} in the {dialect} dialect");
    let endings = catalog.get(class, width, dialect)?;

    let mut conjugation = TenseForms::new();
    for (person, ending) in endings {
        let synthesis = if *person == GrammaticalPerson::Analytic {
            Synthesis::Analytic
        } else {
            Synthesis::Synthetic
        };

        let mut forms = vec![ConjugatedForm::new(
            format!("{root}{ending}"),
            synthesis,
            PolarityMarker::Unmarked,
        )];

        if !person.is_relative() {
            forms.push(ConjugatedForm::new(
                format!("ní {}{ending}", lenite(root)),
                synthesis,
                PolarityMarker::Negative,
            ));
            forms.push(ConjugatedForm::new(
                format!("an {}{ending}", eclipse(root)),
                synthesis,
                PolarityMarker::Interrogative,
            ));
        }

        conjugation.insert(*person, forms);
    }

    Ok(conjugation)
}

/// Shared shape of the past habitual and conditional.
///
/// The unmarked form takes the "do" particle rule. The negative and interrogative
/// take "ní"+lenition and "an"+eclipsis as in the present and future, but every
/// person gets all three forms; there is no relative exception here.
fn conjugate_do_particled(
    catalog: &EndingCatalog,
    root: &str,
    class: ConjugationClass,
    width: Width,
    dialect: Dialect,
) -> Result<TenseForms, ConjugationError> {
    debug!("Conjugating root {root:?} as {class} {width} in the {dialect} dialect");
    let endings = catalog.get(class, width, dialect)?;

    let mut conjugation = TenseForms::new();
    for (person, ending) in endings {
        let synthesis = if *person == GrammaticalPerson::Analytic {
            Synthesis::Analytic
        } else {
            Synthesis::Synthetic
        };

        let forms = vec![
            ConjugatedForm::new(
                format!("{}{ending}", with_past_particle(PastParticle::Do, root)),
                synthesis,
                PolarityMarker::Unmarked,
            ),
            ConjugatedForm::new(
                format!("ní {}{ending}", lenite(root)),
                synthesis,
                PolarityMarker::Negative,
            ),
            ConjugatedForm::new(
                format!("an {}{ending}", eclipse(root)),
                synthesis,
                PolarityMarker::Interrogative,
            ),
        ];

        conjugation.insert(*person, forms);
    }

    Ok(conjugation)
}

fn missing_future_root(verb: &VerbRecord) -> ConjugationError {
    ConjugationError::MissingFutureRoot {
        verb: verb.verb.clone(),
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn verb(
        dictionary_form: &str,
        future_root: &str,
        class: ConjugationClass,
        width: Width,
    ) -> VerbRecord {
        VerbRecord {
            verb: dictionary_form.to_string(),
            future_root: Some(future_root.to_string()),
            present_root: None,
            past_root: None,
            class,
            width,
            future_class: None,
            future_width: None,
            past_class: None,
            past_width: None,
            definition: String::new(),
            verbal_nouns: None,
            verbal_adjectives: None,
        }
    }

    fn bac() -> VerbRecord {
        verb("bac", "bac", ConjugationClass::First, Width::Broad)
    }

    fn achainigh() -> VerbRecord {
        verb("achainigh", "achain", ConjugationClass::Second, Width::Slender)
    }

    fn texts(forms: &TenseForms, person: GrammaticalPerson) -> Vec<&str> {
        forms[&person].iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn present_of_first_conjugation_broad() {
        let conjugation = conjugate_present(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["bacann", "ní bhacann", "an mbacann"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["bacaim", "ní bhacaim", "an mbacaim"],
            texts(&conjugation, GrammaticalPerson::FirstSingular)
        );
        assert_eq!(
            vec!["bacaimid", "ní bhacaimid", "an mbacaimid"],
            texts(&conjugation, GrammaticalPerson::FirstPlural)
        );
        assert_eq!(
            vec!["bactar", "ní bhactar", "an mbactar"],
            texts(&conjugation, GrammaticalPerson::Impersonal)
        );
    }

    #[test]
    fn present_of_second_conjugation_slender() {
        let conjugation = conjugate_present(&achainigh(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["achainím", "ní achainím", "an achainím"],
            texts(&conjugation, GrammaticalPerson::FirstSingular)
        );
        assert_eq!(
            vec!["achainíonn", "ní achainíonn", "an achainíonn"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["achainítear", "ní achainítear", "an achainítear"],
            texts(&conjugation, GrammaticalPerson::Impersonal)
        );
    }

    #[test]
    fn present_relative_persons_have_single_unmarked_form() {
        let conjugation = conjugate_present(&achainigh(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["achainíonns"],
            texts(&conjugation, GrammaticalPerson::Relative1)
        );
        assert_eq!(
            vec!["achainíos"],
            texts(&conjugation, GrammaticalPerson::Relative2)
        );
        for person in [GrammaticalPerson::Relative1, GrammaticalPerson::Relative2] {
            assert_eq!(
                vec![PolarityMarker::Unmarked],
                conjugation[&person]
                    .iter()
                    .map(|f| f.polarity)
                    .collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn present_analytic_is_the_only_analytic_slot() {
        let conjugation = conjugate_present(&bac(), Dialect::Official).unwrap();

        for (person, forms) in &conjugation {
            let expected = if *person == GrammaticalPerson::Analytic {
                Synthesis::Analytic
            } else {
                Synthesis::Synthetic
            };
            assert!(forms.iter().all(|f| f.synthesis == expected));
        }
    }

    #[test]
    fn present_uses_present_root_override() {
        let mut record = bac();
        record.present_root = Some("blais".to_string());
        let conjugation = conjugate_present(&record, Dialect::Official).unwrap();

        assert_eq!(
            "blaisann",
            conjugation[&GrammaticalPerson::Analytic][0].text
        );
    }

    #[test]
    fn future_of_first_conjugation_broad() {
        let conjugation = conjugate_future(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["bacfaidh", "ní bhacfaidh", "an mbacfaidh"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["bacfaimid", "ní bhacfaimid", "an mbacfaimid"],
            texts(&conjugation, GrammaticalPerson::FirstPlural)
        );
        assert_eq!(
            vec!["bacfar", "ní bhacfar", "an mbacfar"],
            texts(&conjugation, GrammaticalPerson::Impersonal)
        );
        assert_eq!(vec!["bacfas"], texts(&conjugation, GrammaticalPerson::Relative));
    }

    #[test]
    fn future_has_no_first_singular_slot() {
        let conjugation = conjugate_future(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            vec![
                GrammaticalPerson::Analytic,
                GrammaticalPerson::FirstPlural,
                GrammaticalPerson::Impersonal,
                GrammaticalPerson::Relative,
            ],
            conjugation.keys().copied().sorted().collect::<Vec<_>>()
        );
    }

    #[test]
    fn past_of_first_conjugation_broad() {
        let conjugation = conjugate_past(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["bhac", "níor bhac", "ar bhac"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["bhacamar", "níor bhacamar", "ar bhacamar"],
            texts(&conjugation, GrammaticalPerson::FirstPlural)
        );
        assert_eq!(
            vec!["bhacadar", "níor bhacadar", "ar bhacadar"],
            texts(&conjugation, GrammaticalPerson::ThirdPlural)
        );
    }

    #[test]
    fn past_impersonal_is_never_lenited() {
        let conjugation = conjugate_past(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["bacadh", "níor bacadh", "ar bacadh"],
            texts(&conjugation, GrammaticalPerson::Impersonal)
        );
    }

    #[test]
    fn past_of_vowel_initial_verb_takes_d_prefix() {
        let conjugation = conjugate_past(&achainigh(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["d'achainigh", "níor achainigh", "ar achainigh"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["d'achainíomar", "níor achainíomar", "ar achainíomar"],
            texts(&conjugation, GrammaticalPerson::FirstPlural)
        );
        assert_eq!(
            vec!["d'achainíodar", "níor achainíodar", "ar achainíodar"],
            texts(&conjugation, GrammaticalPerson::ThirdPlural)
        );
        assert_eq!(
            vec!["achainíodh", "níor achainíodh", "ar achainíodh"],
            texts(&conjugation, GrammaticalPerson::Impersonal)
        );
    }

    #[test]
    fn past_synthesis_tag_is_suffix_driven() {
        let conjugation = conjugate_past(&bac(), Dialect::Official).unwrap();

        assert!(conjugation[&GrammaticalPerson::Analytic]
            .iter()
            .all(|f| f.synthesis == Synthesis::Analytic));
        assert!(conjugation[&GrammaticalPerson::Impersonal]
            .iter()
            .all(|f| f.synthesis == Synthesis::Synthetic));
    }

    #[test]
    fn past_roots_resolve_independently() {
        let mut record = verb("siúil", "siúl", ConjugationClass::First, Width::Broad);
        record.past_root = Some("siúil".to_string());
        record.past_width = Some(Width::Slender);
        let conjugation = conjugate_past(&record, Dialect::Official).unwrap();

        // Analytic uses the dictionary form; synthetic persons use the past root
        // with the past width override.
        assert_eq!(
            vec!["shiúil", "níor shiúil", "ar shiúil"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["shiúileamar", "níor shiúileamar", "ar shiúileamar"],
            texts(&conjugation, GrammaticalPerson::FirstPlural)
        );
    }

    #[test]
    fn conditional_of_first_conjugation_broad() {
        let conjugation = conjugate_conditional(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["bhacfadh", "ní bhacfadh", "an mbacfadh"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["bhacfainn", "ní bhacfainn", "an mbacfainn"],
            texts(&conjugation, GrammaticalPerson::FirstSingular)
        );
        assert_eq!(
            vec!["bhacfá", "ní bhacfá", "an mbacfá"],
            texts(&conjugation, GrammaticalPerson::SecondSingular)
        );
        assert_eq!(
            vec!["bhacfaí", "ní bhacfaí", "an mbacfaí"],
            texts(&conjugation, GrammaticalPerson::Impersonal)
        );
    }

    #[test]
    fn conditional_of_vowel_initial_verb() {
        let conjugation = conjugate_conditional(&achainigh(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["d'achaineodh", "ní achaineodh", "an achaineodh"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
    }

    #[test]
    fn past_habitual_of_first_conjugation_broad() {
        let conjugation = conjugate_past_habitual(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            vec!["bhacadh", "ní bhacadh", "an mbacadh"],
            texts(&conjugation, GrammaticalPerson::Analytic)
        );
        assert_eq!(
            vec!["bhacainn", "ní bhacainn", "an mbacainn"],
            texts(&conjugation, GrammaticalPerson::FirstSingular)
        );
        assert_eq!(
            vec!["bhactá", "ní bhactá", "an mbactá"],
            texts(&conjugation, GrammaticalPerson::SecondSingular)
        );
        assert_eq!(
            vec!["bhactaí", "ní bhactaí", "an mbactaí"],
            texts(&conjugation, GrammaticalPerson::Impersonal)
        );
    }

    #[test]
    fn past_habitual_impersonal_is_lenited_unlike_the_past() {
        let conjugation = conjugate_past_habitual(&bac(), Dialect::Official).unwrap();

        assert_eq!(
            "bhactaí",
            conjugation[&GrammaticalPerson::Impersonal][0].text
        );
    }

    #[test]
    fn do_particled_tenses_produce_all_polarities_for_every_person() {
        let conjugation = conjugate_conditional(&bac(), Dialect::Official).unwrap();

        for forms in conjugation.values() {
            assert_eq!(
                vec![
                    PolarityMarker::Unmarked,
                    PolarityMarker::Negative,
                    PolarityMarker::Interrogative,
                ],
                forms.iter().map(|f| f.polarity).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn missing_future_root_fails_future_but_not_conditional() {
        let mut record = bac();
        record.future_root = None;

        assert_eq!(
            Err(ConjugationError::MissingFutureRoot {
                verb: "bac".to_string()
            }),
            conjugate_future(&record, Dialect::Official)
        );
        // The do-particled tenses fall back to the dictionary form.
        assert!(conjugate_conditional(&record, Dialect::Official).is_ok());
        assert!(conjugate_past_habitual(&record, Dialect::Official).is_ok());
    }

    #[test]
    fn irregular_verb_fails() {
        let record = verb("téigh", "rach", ConjugationClass::Irregular, Width::Slender);

        for result in [
            conjugate_present(&record, Dialect::Official),
            conjugate_future(&record, Dialect::Official),
            conjugate_past(&record, Dialect::Official),
            conjugate_conditional(&record, Dialect::Official),
            conjugate_past_habitual(&record, Dialect::Official),
        ] {
            assert_eq!(Err(ConjugationError::IrregularUnsupported), result);
        }
    }

    #[test]
    fn unpopulated_dialect_fails() {
        assert_eq!(
            Err(ConjugationError::MissingEndings {
                class: ConjugationClass::First,
                width: Width::Broad,
                dialect: Dialect::Ulster,
            }),
            conjugate_present(&bac(), Dialect::Ulster)
        );
    }
}
