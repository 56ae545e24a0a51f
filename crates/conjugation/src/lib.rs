mod conjugate;
pub use conjugate::conjugate_conditional;
pub use conjugate::conjugate_future;
pub use conjugate::conjugate_past;
pub use conjugate::conjugate_past_habitual;
pub use conjugate::conjugate_present;
pub use conjugate::TenseForms;

mod endings;
pub use endings::EndingCatalog;

mod error;
pub use error::ConjugationError;

mod form;
pub use form::{ConjugatedForm, GrammaticalPerson, PolarityMarker, Synthesis};

mod mutation;
pub use mutation::{eclipse, lenite, starts_with_vowel_or_f};

mod paradigm;
pub use paradigm::{generate_full_paradigm, Paradigm, Tense};

mod verb;
pub use verb::{ConjugationClass, Dialect, VerbRecord, Width};
