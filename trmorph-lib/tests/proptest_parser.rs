//! Property-based tests for the parser and the root generator.
//!
//! 1. **Totality**: any input parses to a (possibly empty) list without panicking
//! 2. **Coverage**: every result consumed exactly the input, root first
//! 3. **Group exclusivity**: no suffix group repeats between two derivations
//! 4. **Root attributes**: unmodified items keep the phonetics of their spelling

use std::sync::LazyLock;

use proptest::prelude::*;
use trmorph_lib::finders::default_finders;
use trmorph_lib::phonetics::attributes_of;
use trmorph_lib::roots::RootGenerator;
use trmorph_lib::types::{DictionaryItem, LexemeAttribute, PhoneticExpectation, SyntacticCategory};
use trmorph_lib::{Lexicon, ParseToken, Parser, PredefinedPaths, RootMap, SuffixGraph};

static ROOTS: LazyLock<RootMap> = LazyLock::new(|| RootMap::from_lexicon(&Lexicon::bundled().unwrap()).unwrap());
static EXTENDED: LazyLock<SuffixGraph> = LazyLock::new(|| SuffixGraph::extended().unwrap());
static PATHS: LazyLock<PredefinedPaths<'static>> =
    LazyLock::new(|| PredefinedPaths::build(&EXTENDED, &ROOTS).unwrap());

fn parse(input: &str) -> Vec<ParseToken<'static>> {
    Parser::new(&EXTENDED, default_finders(&ROOTS), Some(&PATHS)).parse(input)
}

// Lowercase Turkish words, mostly nonsense but often starting with a root.
fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zçğıöşü]{1,8}").unwrap()
}

// Real roots followed by a few letters that might form suffixes.
fn arb_inflected() -> impl Strategy<Value = String> {
    let roots = prop::sample::select(vec!["kitap", "kitab", "ev", "gel", "yap", "ara", "göz", "masa", "ağz", "ben", "o"]);
    let tail = prop::string::string_regex("[aeıiouüdlmnrsyk]{0,6}").unwrap();
    (roots, tail).prop_map(|(root, tail)| format!("{root}{tail}"))
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\PC{0,12}").unwrap()
}

fn check_coverage(input: &str, token: &ParseToken<'_>) -> Result<(), TestCaseError> {
    prop_assert!(token.remaining().is_empty());
    prop_assert!(token.last_state().is_terminal());
    prop_assert_eq!(token.so_far(), input);

    let spelling = token.root().spelling.as_str();
    prop_assert!(input.starts_with(spelling), "{} does not start with {}", input, spelling);
    let consumed: String = token.transitions().iter().map(|t| t.actual.as_str()).collect();
    prop_assert_eq!(format!("{spelling}{consumed}"), input);
    Ok(())
}

fn check_groups(token: &ParseToken<'_>) -> Result<(), TestCaseError> {
    let mut seen = Vec::new();
    for transition in token.transitions() {
        if transition.is_derivational() {
            seen.clear();
            continue;
        }
        if let Some(group) = transition.suffix.group {
            prop_assert!(!seen.contains(&group), "group repeated in {:?}", token);
            seen.push(group);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parse_is_total(input in arb_text()) {
        let results = parse(&input);
        for token in &results {
            prop_assert!(token.remaining().is_empty());
        }
    }

    #[test]
    fn results_cover_the_input(input in arb_word()) {
        for token in parse(&input) {
            check_coverage(&input, &token)?;
        }
    }

    #[test]
    fn inflected_results_cover_the_input(input in arb_inflected()) {
        for token in parse(&input) {
            check_coverage(&input, &token)?;
            check_groups(&token)?;
        }
    }

    #[test]
    fn groups_do_not_repeat_within_a_derivation(input in arb_word()) {
        for token in parse(&input) {
            check_groups(&token)?;
        }
    }

    #[test]
    fn plain_root_keeps_spelling_attributes(word in "[a-zçğıöşü]{1,8}") {
        let item = DictionaryItem::new(&word, &word, SyntacticCategory::Noun, None)
            .with_attributes([LexemeAttribute::NoVoicing]);
        let roots = RootGenerator::generate(&item).unwrap();
        prop_assert_eq!(roots.len(), 1);
        prop_assert_eq!(&roots[0].spelling, &word);
        prop_assert_eq!(&roots[0].attributes, &attributes_of(&word));
        prop_assert!(roots[0].expectations.is_empty());
    }

    #[test]
    fn doubled_root_splits_expectations(word in "[a-zçğıöşü]{1,6}[bcdfgklmnprstz]") {
        let item = DictionaryItem::new(&word, &word, SyntacticCategory::Noun, None)
            .with_attributes([LexemeAttribute::Doubling, LexemeAttribute::NoVoicing]);
        let roots = RootGenerator::generate(&item).unwrap();
        prop_assert_eq!(roots.len(), 2);
        prop_assert_eq!(&roots[0].spelling, &word);
        prop_assert!(roots[0].expectations.contains(&PhoneticExpectation::ConsonantStart));
        let last = word.chars().last().unwrap();
        prop_assert_eq!(&roots[1].spelling, &format!("{word}{last}"));
        prop_assert!(roots[1].expectations.contains(&PhoneticExpectation::VowelStart));
    }
}
