//! Resource name inflection.
//!
//! Turning a resource name into a collection segment and a member parameter
//! is a pure string transform. The router only depends on the [`Inflector`]
//! trait; [`English`] covers the regular suffix rules plus short tables of
//! irregular, uncountable and suffix-exception nouns.

use std::fmt;

/// Pluralize / singularize a resource name.
pub trait Inflector: Send + Sync + fmt::Debug {
    /// Plural form. Already-plural words are returned unchanged.
    fn pluralize(&self, word: &str) -> String;

    /// Singular form. Already-singular words are returned unchanged.
    fn singularize(&self, word: &str) -> String;
}

/// Suffix-rule English inflector.
///
/// A leading capital is carried over to the result; everything else about
/// the output is lowercase for table entries and untouched for rule-based
/// forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    ("quiz", "quizzes"),
];

const UNCOUNTABLE: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "news",
    "information",
    "equipment",
    "rice",
    "money",
];

/// Singulars ending in a single `s`. Their plurals add `es`.
const SINGULAR_S: &[&str] = &[
    "alias", "atlas", "bias", "bonus", "bus", "cactus", "campus", "canvas", "census", "chorus",
    "circus", "corpus", "focus", "gas", "genus", "iris", "lens", "minus", "nexus", "plus",
    "radius", "status", "surplus", "syllabus", "virus",
];

/// Singulars ending in `ie`. Their plurals look like `-y` plurals.
const SINGULAR_IE: &[&str] = &[
    "brownie", "calorie", "cookie", "die", "freebie", "genie", "goalie", "hoodie", "lie",
    "movie", "newbie", "pie", "prairie", "rookie", "selfie", "smoothie", "tie", "zombie",
];

/// Singulars ending in `che`. Their plurals only add `s`.
const SINGULAR_CHE: &[&str] = &[
    "ache", "avalanche", "cache", "cliche", "creche", "headache", "microfiche", "moustache",
    "niche", "quiche",
];

impl Inflector for English {
    fn pluralize(&self, word: &str) -> String {
        let lower = word.to_ascii_lowercase();
        if word.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }
        if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == lower) {
            return match_case(word, plural);
        }
        if IRREGULAR.iter().any(|(_, p)| *p == lower) || looks_plural(&lower) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix('y') {
            if ends_with_consonant(stem) {
                return format!("{stem}ies");
            }
        }
        if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
            return format!("{word}es");
        }
        format!("{word}s")
    }

    fn singularize(&self, word: &str) -> String {
        let lower = word.to_ascii_lowercase();
        if word.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }
        if let Some((singular, _)) = IRREGULAR.iter().find(|(_, p)| *p == lower) {
            return match_case(word, singular);
        }
        if IRREGULAR.iter().any(|(s, _)| *s == lower)
            || lower.ends_with("ss")
            || SINGULAR_S.contains(&lower.as_str())
        {
            return word.to_string();
        }

        let n = word.len();
        if n > 3 && lower.ends_with("ies") {
            if SINGULAR_IE.contains(&&lower[..n - 1]) {
                return word[..n - 1].to_string();
            }
            return format!("{}y", &word[..n - 3]);
        }
        if let Some(stem) = lower.strip_suffix("es") {
            let sibilant = SINGULAR_S.contains(&stem)
                || ["ss", "x", "sh", "zz", "tz"].iter().any(|s| stem.ends_with(s))
                || (stem.ends_with("ch") && !SINGULAR_CHE.contains(&format!("{stem}e").as_str()));
            if sibilant {
                return word[..n - 2].to_string();
            }
        }
        match word.strip_suffix(['s', 'S']) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => word.to_string(),
        }
    }
}

fn looks_plural(lower: &str) -> bool {
    lower.ends_with('s') && !lower.ends_with("ss") && !SINGULAR_S.contains(&lower)
}

fn ends_with_consonant(stem: &str) -> bool {
    stem.chars()
        .last()
        .map(|c| c.is_ascii_alphabetic() && !"aeiouAEIOU".contains(c))
        .unwrap_or(false)
}

/// `form` with the leading capital of `word` applied.
fn match_case(word: &str, form: &str) -> String {
    let capitalized = word.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    let mut chars = form.chars();
    match chars.next() {
        Some(first) if capitalized => first.to_ascii_uppercase().to_string() + chars.as_str(),
        _ => form.to_string(),
    }
}
