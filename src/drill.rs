use anyhow::{Context, Result};
use rand::seq::{IteratorRandom, SliceRandom};

use conjugation::{ConjugatedForm, Dialect, GrammaticalPerson, Tense, VerbRecord};

/// A randomly chosen form, with the verb it came from.
pub struct DrillPrompt {
    pub verb: VerbRecord,
    pub answer: DrillAnswer,
}

/// The form a drill prompt asks for.
pub enum DrillAnswer {
    Conjugated {
        tense: Tense,
        person: GrammaticalPerson,
        form: ConjugatedForm,
    },
    VerbalNoun(String),
    VerbalAdjective(String),
}

/// What a drill can pick for one verb.
enum Pick {
    Tense(Tense),
    VerbalNoun,
    VerbalAdjective,
}

/// Picks a uniformly random verb from the list, then a random form of it.
///
/// Verbal nouns and adjectives only enter the pool when the record carries them.
pub fn random_form(verbs: &[VerbRecord], dialect: Dialect) -> Result<DrillPrompt> {
    let mut rng = rand::thread_rng();
    let verb = verbs.choose(&mut rng).context("the verb list is empty")?;

    let mut pool = vec![
        Pick::Tense(Tense::Present),
        Pick::Tense(Tense::Future),
        Pick::Tense(Tense::Past),
        Pick::Tense(Tense::Conditional),
    ];
    if verb.verbal_nouns.is_some() {
        pool.push(Pick::VerbalNoun);
    }
    if verb.verbal_adjectives.is_some() {
        pool.push(Pick::VerbalAdjective);
    }

    let answer = match pool.choose(&mut rng).expect("the pick pool is never empty") {
        Pick::Tense(tense) => {
            let conjugation = tense.conjugate(verb, dialect)?;
            let (person, forms) = conjugation
                .iter()
                .choose(&mut rng)
                .expect("every tense has persons");
            let form = forms
                .choose(&mut rng)
                .expect("every person has forms")
                .clone();
            DrillAnswer::Conjugated {
                tense: *tense,
                person: *person,
                form,
            }
        }
        Pick::VerbalNoun => {
            let nouns = verb.verbal_nouns.as_deref().unwrap_or_default();
            let noun = nouns.choose(&mut rng).context("the verbal noun list is empty")?;
            DrillAnswer::VerbalNoun(noun.clone())
        }
        Pick::VerbalAdjective => {
            let adjectives = verb.verbal_adjectives.as_deref().unwrap_or_default();
            let adjective = adjectives
                .choose(&mut rng)
                .context("the verbal adjective list is empty")?;
            DrillAnswer::VerbalAdjective(adjective.clone())
        }
    };

    Ok(DrillPrompt {
        verb: verb.clone(),
        answer,
    })
}
