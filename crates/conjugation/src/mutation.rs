/// Letters that take lenition by inserting an "h" after them.
const LENITABLE: [char; 9] = ['b', 'c', 'd', 'f', 'g', 'm', 'p', 's', 't'];

/// Letters that can follow an initial "s" and still allow it to lenite.
const LENITABLE_AFTER_S: &str = "aeiouáéíóúlnr";

/// Applies lenition (séimhiú) to the provided root.
///
/// An initial "s" only lenites before a vowel or l/n/r; clusters like "sc" or "sp"
/// resist lenition and the root comes back unchanged. Roots starting with any
/// letter outside the lenitable set also come back unchanged.
pub fn lenite(root: &str) -> String {
    let Some(first) = root.chars().next() else {
        return String::new();
    };

    if !LENITABLE.contains(&first) {
        return root.to_string();
    }

    let rest = &root[1..];
    if first == 's' {
        match rest.chars().next() {
            Some(second) if LENITABLE_AFTER_S.contains(second) => format!("sh{rest}"),
            _ => root.to_string(),
        }
    } else {
        format!("{first}h{rest}")
    }
}

/// Applies eclipsis (urú) to the provided root.
///
/// Only the eclipsable consonants mutate; vowels and other consonants come back
/// unchanged. (Vowel-initial eclipsis with "n-" is not part of the rule set.)
pub fn eclipse(root: &str) -> String {
    let Some(first) = root.chars().next() else {
        return String::new();
    };

    let eclipsed = match first {
        'b' => "mb",
        'c' => "gc",
        'd' => "nd",
        'f' => "bhf",
        'g' => "ng",
        'p' => "bp",
        't' => "dt",
        _ => return root.to_string(),
    };

    format!("{eclipsed}{}", &root[1..])
}

/// Whether the provided word starts with a vowel or "f".
///
/// These are the roots that take the "d'" prefix in do-particled past forms.
pub fn starts_with_vowel_or_f(word: &str) -> bool {
    matches!(
        word.chars().next(),
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'f')
    )
}
