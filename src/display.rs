use itertools::Itertools;

use conjugation::{Paradigm, VerbRecord};

use crate::drill::{DrillAnswer, DrillPrompt};

const INDENT: &str = "  ";

/// Prints the full paradigm of the provided verb as a read-only listing.
pub fn print_paradigm(verb: &VerbRecord, paradigm: &Paradigm) {
    println!("{}", verb.verb);
    if !verb.definition.is_empty() {
        println!("{INDENT}{}", verb.definition);
    }
    if let Some(nouns) = &verb.verbal_nouns {
        println!("{INDENT}verbal nouns: {}", nouns.iter().join(", "));
    }
    if let Some(adjectives) = &verb.verbal_adjectives {
        println!("{INDENT}verbal adjectives: {}", adjectives.iter().join(", "));
    }

    for (tense, forms) in paradigm.iter() {
        println!();
        println!("{tense}");
        for person in forms.keys().copied().sorted() {
            let line = forms[&person].iter().map(|form| form.text.as_str()).join(" / ");
            println!("{INDENT}{person}: {line}");
        }
    }
}

/// Prints a drill prompt and its answer.
pub fn print_drill(prompt: &DrillPrompt) {
    let verb = &prompt.verb;
    println!("{} ({})", verb.verb, verb.definition);

    match &prompt.answer {
        DrillAnswer::Conjugated {
            tense,
            person,
            form,
        } => {
            println!("{INDENT}{tense}, {person}, {}", form.polarity);
            println!("{INDENT}{} ({})", form.text, form.synthesis);
        }
        DrillAnswer::VerbalNoun(noun) => println!("{INDENT}verbal noun: {noun}"),
        DrillAnswer::VerbalAdjective(adjective) => {
            println!("{INDENT}verbal adjective: {adjective}")
        }
    }
}
