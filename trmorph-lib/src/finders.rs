// Lexeme finders: given a prefix of the input, which roots could it be?
//
// Most roots come from the lexicon. Numbers written with digits and proper
// nouns are open classes, so their roots are made up on the spot.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::alphabet::{is_upper, letter_for};
use crate::numbers::digits_to_words;
use crate::phonetics::attributes_of;
use crate::roots::RootMap;
use crate::types::{
    DictionaryItem, PhoneticAttributes, PhoneticExpectations, Root, SecondaryCategory, SyntacticCategory,
};

const APOSTROPHE: char = '\'';

static NUMBER_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"^[-+]?[0-9]+(,[0-9])?[0-9]*$").expect("plain number pattern is valid"),
        Regex::new(r"^[-+]?([0-9]{1,3}\.)+[0-9]{3}(,[0-9])?[0-9]*$").expect("grouped number pattern is valid"),
    ]
});

pub trait LexemeFinder {
    /// Roots spelled exactly `partial`, a prefix of the word `whole`.
    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>>;
}

/// Lexicon roots other than numerals.
pub struct WordRootFinder<'a> {
    roots: &'a RootMap,
}

impl<'a> WordRootFinder<'a> {
    pub fn new(roots: &'a RootMap) -> Self {
        Self { roots }
    }
}

impl LexemeFinder for WordRootFinder<'_> {
    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        self.roots
            .get(partial)
            .iter()
            .filter(|r| r.category() != SyntacticCategory::Numeral)
            .cloned()
            .collect()
    }
}

/// Numerals spelled out in the lexicon ("üç", "üçüncü").
pub struct TextNumeralRootFinder<'a> {
    roots: &'a RootMap,
}

impl<'a> TextNumeralRootFinder<'a> {
    pub fn new(roots: &'a RootMap) -> Self {
        Self { roots }
    }
}

impl LexemeFinder for TextNumeralRootFinder<'_> {
    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        self.roots
            .get(partial)
            .iter()
            .filter(|r| r.category() == SyntacticCategory::Numeral)
            .cloned()
            .collect()
    }
}

/// Numbers written with digits: "3", "-12", "3,5", "1.000.000".
///
/// The root's phonetic attributes are those of the number read aloud, so
/// "3'e" harmonizes like "üçe".
#[derive(Debug, Default)]
pub struct DigitNumeralRootFinder;

impl LexemeFinder for DigitNumeralRootFinder {
    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        if !NUMBER_PATTERNS.iter().any(|p| p.is_match(partial)) {
            return Vec::new();
        }
        let words = match digits_to_words(partial) {
            Ok(words) => words,
            Err(e) => {
                log::debug!("digit root {partial:?} rejected: {e}");
                return Vec::new();
            }
        };
        vec![dynamic_root(
            partial,
            SyntacticCategory::Numeral,
            SecondaryCategory::Digits,
            attributes_of(&words),
        )]
    }
}

/// "Ahmet'e", "TBMM'nin": whatever precedes the apostrophe is a proper
/// noun, or an abbreviation when it is all capitals.
#[derive(Debug, Default)]
pub struct ProperNounFromApostropheRootFinder;

impl LexemeFinder for ProperNounFromApostropheRootFinder {
    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let Some(candidate) = partial.strip_suffix(APOSTROPHE) else {
            return Vec::new();
        };
        let Some(first) = candidate.chars().next() else {
            return Vec::new();
        };
        if is_upper(candidate) {
            vec![abbreviation_root(candidate)]
        } else if first.is_uppercase() {
            vec![proper_noun_root(candidate)]
        } else {
            Vec::new()
        }
    }
}

/// Capitalized words written without an apostrophe ("Ankara"). Every
/// capitalized prefix is a candidate; an all-caps word is an abbreviation.
#[derive(Debug, Default)]
pub struct ProperNounWithoutApostropheRootFinder;

impl LexemeFinder for ProperNounWithoutApostropheRootFinder {
    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        if whole.contains(APOSTROPHE) || partial.contains(APOSTROPHE) {
            return Vec::new();
        }
        match partial.chars().next() {
            Some(first) if first.is_alphabetic() && first.is_uppercase() => {}
            _ => return Vec::new(),
        }
        if partial == whole && is_upper(partial) {
            vec![abbreviation_root(partial)]
        } else {
            vec![proper_noun_root(partial)]
        }
    }
}

/// Every finder, in the order their roots are tried: lexicon words, spelled
/// numerals, digits, then proper nouns.
pub fn default_finders(roots: &RootMap) -> Vec<Box<dyn LexemeFinder + '_>> {
    vec![
        Box::new(WordRootFinder::new(roots)),
        Box::new(TextNumeralRootFinder::new(roots)),
        Box::new(DigitNumeralRootFinder),
        Box::new(ProperNounFromApostropheRootFinder),
        Box::new(ProperNounWithoutApostropheRootFinder),
    ]
}

fn dynamic_root(
    spelling: &str,
    category: SyntacticCategory,
    secondary: SecondaryCategory,
    attributes: PhoneticAttributes,
) -> Arc<Root> {
    Arc::new(Root::new(
        spelling,
        Arc::new(DictionaryItem::new(spelling, spelling, category, Some(secondary))),
        attributes,
        PhoneticExpectations::new(),
    ))
}

fn proper_noun_root(spelling: &str) -> Arc<Root> {
    dynamic_root(
        spelling,
        SyntacticCategory::Noun,
        SecondaryCategory::ProperNoun,
        attributes_of(spelling),
    )
}

/// Abbreviations ending in a consonant are read with a trailing "e"
/// ("TRT'ye", "THY'ye").
fn abbreviation_root(spelling: &str) -> Arc<Root> {
    let ends_in_vowel = spelling.chars().last().is_some_and(|c| letter_for(c).vowel);
    let attributes = if ends_in_vowel {
        attributes_of(spelling)
    } else {
        attributes_of(&format!("{spelling}E"))
    };
    dynamic_root(
        spelling,
        SyntacticCategory::Noun,
        SecondaryCategory::Abbreviation,
        attributes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PhoneticAttribute::*;

    fn single(roots: Vec<Arc<Root>>) -> Arc<Root> {
        assert_eq!(roots.len(), 1, "{roots:?}");
        roots.into_iter().next().unwrap()
    }

    #[test]
    fn test_digit_numeral() {
        let root = single(DigitNumeralRootFinder.find("3,5", "3,5"));
        assert_eq!(root.spelling, "3,5");
        assert_eq!(root.category(), SyntacticCategory::Numeral);
        assert_eq!(root.secondary(), Some(SecondaryCategory::Digits));
        // "üç virgül beş"
        assert!(root.attributes.contains(&LastVowelFrontal));
        assert!(root.attributes.contains(&LastLetterVoiceless));

        assert_eq!(DigitNumeralRootFinder.find("1.000.000", "1.000.000'a").len(), 1);
        assert_eq!(DigitNumeralRootFinder.find("-12", "-12").len(), 1);
        assert!(DigitNumeralRootFinder.find("3a", "3a").is_empty());
        assert!(DigitNumeralRootFinder.find("1.00", "1.00").is_empty());
        assert!(DigitNumeralRootFinder.find("", "").is_empty());
    }

    #[test]
    fn test_proper_noun_from_apostrophe() {
        let root = single(ProperNounFromApostropheRootFinder.find("Ahmet'", "Ahmet'e"));
        assert_eq!(root.spelling, "Ahmet");
        assert_eq!(root.secondary(), Some(SecondaryCategory::ProperNoun));
        assert_eq!(root.attributes, attributes_of("Ahmet"));

        let root = single(ProperNounFromApostropheRootFinder.find("TR'", "TR'ye"));
        assert_eq!(root.spelling, "TR");
        assert_eq!(root.category(), SyntacticCategory::Noun);
        assert_eq!(root.secondary(), Some(SecondaryCategory::Abbreviation));
        assert!(root.attributes.contains(&LastLetterVowel));

        assert!(ProperNounFromApostropheRootFinder.find("'", "'").is_empty());
        assert!(ProperNounFromApostropheRootFinder.find("ahmet'", "ahmet'e").is_empty());
        assert!(ProperNounFromApostropheRootFinder.find("Ahmet", "Ahmet'e").is_empty());
    }

    #[test]
    fn test_proper_noun_without_apostrophe() {
        let root = single(ProperNounWithoutApostropheRootFinder.find("Ankara", "Ankarada"));
        assert_eq!(root.secondary(), Some(SecondaryCategory::ProperNoun));

        let root = single(ProperNounWithoutApostropheRootFinder.find("TBMM", "TBMM"));
        assert_eq!(root.secondary(), Some(SecondaryCategory::Abbreviation));

        let root = single(ProperNounWithoutApostropheRootFinder.find("TB", "TBMM"));
        assert_eq!(root.secondary(), Some(SecondaryCategory::ProperNoun));

        assert!(ProperNounWithoutApostropheRootFinder.find("Ahmet", "Ahmet'e").is_empty());
        assert!(ProperNounWithoutApostropheRootFinder.find("ankara", "ankara").is_empty());
        assert!(ProperNounWithoutApostropheRootFinder.find("3", "3").is_empty());
    }

    #[test]
    fn test_lexicon_finders_split_numerals() {
        let items = [
            DictionaryItem::new("üç", "üç", SyntacticCategory::Numeral, Some(SecondaryCategory::Cardinal)),
            DictionaryItem::new("üç", "üç", SyntacticCategory::Noun, None),
        ];
        let roots = RootMap::from_items(&items).unwrap();

        let words = WordRootFinder::new(&roots).find("üç", "üçe");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].category(), SyntacticCategory::Noun);

        let numerals = TextNumeralRootFinder::new(&roots).find("üç", "üçe");
        assert_eq!(numerals.len(), 1);
        assert_eq!(numerals[0].category(), SyntacticCategory::Numeral);

        assert!(WordRootFinder::new(&roots).find("ü", "üçe").is_empty());
    }
}
