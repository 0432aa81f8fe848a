// Regression tests for known words, run against the bundled lexicon.

use std::sync::LazyLock;

use trmorph_lib::finders::{default_finders, WordRootFinder};
use trmorph_lib::output::{format_parse, format_simple, format_stem};
use trmorph_lib::{Lexicon, Parser, PredefinedPaths, RootMap, SuffixGraph, UpperCaseSupportingParser};

static ROOTS: LazyLock<RootMap> = LazyLock::new(|| RootMap::from_lexicon(&Lexicon::bundled().unwrap()).unwrap());
static BASIC: LazyLock<SuffixGraph> = LazyLock::new(|| SuffixGraph::basic().unwrap());
static EXTENDED: LazyLock<SuffixGraph> = LazyLock::new(|| SuffixGraph::extended().unwrap());
static EXTENDED_PATHS: LazyLock<PredefinedPaths<'static>> =
    LazyLock::new(|| PredefinedPaths::build(&EXTENDED, &ROOTS).unwrap());

fn parse_basic(word: &str) -> Vec<String> {
    let parser = Parser::new(&BASIC, vec![Box::new(WordRootFinder::new(&ROOTS))], None);
    parser.parse(word).iter().map(format_parse).collect()
}

fn parse_extended(word: &str) -> Vec<String> {
    let parser = UpperCaseSupportingParser::new(Parser::new(
        &EXTENDED,
        default_finders(&ROOTS),
        Some(&EXTENDED_PATHS),
    ));
    parser.parse(word).iter().map(format_parse).collect()
}

#[test]
fn kitaba_has_a_single_analysis() {
    assert_eq!(parse_basic("kitaba"), ["kitap+Noun+A3sg+Pnon+Dat"]);
}

#[test]
fn kitap_takes_consonant_initial_suffixes() {
    let results = parse_basic("kitaplar");
    assert!(
        results.contains(&"kitap+Noun+A3pl+Pnon+Nom".to_string()),
        "{results:?}"
    );
    assert!(parse_basic("kitabler").is_empty());
}

#[test]
fn double_causative_infinitive() {
    let results = parse_extended("yaptırtmayı");
    assert!(
        results.contains(&"yap+Verb+Verb+Caus+Verb+Caus+Pos+Noun+Inf+A3sg+Pnon+Acc".to_string()),
        "{results:?}"
    );
}

#[test]
fn stem_format_separates_root_and_stem_categories() {
    let parser = UpperCaseSupportingParser::new(Parser::new(
        &EXTENDED,
        default_finders(&ROOTS),
        Some(&EXTENDED_PATHS),
    ));
    let stems: Vec<String> = parser.parse("yaptırtmayı").iter().map(format_stem).collect();
    assert!(
        stems.contains(&"yaptırtmayı+Noun[yaptırtma(yap+Verb)+Noun]".to_string()),
        "{stems:?}"
    );
}

#[test]
fn progressive_vowel_drop() {
    let results = parse_basic("arıyor");
    assert!(
        results.contains(&"ara+Verb+Pos+Prog+A3sg".to_string()),
        "{results:?}"
    );
}

#[test]
fn last_vowel_drop_and_doubling() {
    assert!(parse_basic("ağzı").contains(&"ağız+Noun+A3sg+P3sg+Nom".to_string()));
    assert!(parse_basic("hakkı").contains(&"hak+Noun+A3sg+P3sg+Nom".to_string()));
}

#[test]
fn compound_noun_decomposes() {
    let results = parse_basic("akşamsefası");
    assert!(
        results.contains(&"akşamsefa+Noun+A3sg+P3sg+Nom".to_string()),
        "{results:?}"
    );
}

#[test]
fn digits_parse_as_numerals() {
    let results = parse_extended("3,5");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.starts_with("3,5+Num+Digits")), "{results:?}");
}

#[test]
fn proper_nouns_with_apostrophe() {
    let results = parse_extended("Ahmet'e");
    assert!(
        results.contains(&"Ahmet+Noun+Prop+Apos+A3sg+Pnon+Dat".to_string()),
        "{results:?}"
    );

    let results = parse_extended("TR'ye");
    assert!(
        results.contains(&"TR+Noun+Abbr+Apos+A3sg+Pnon+Dat".to_string()),
        "{results:?}"
    );
}

#[test]
fn simple_format_drops_apostrophe() {
    let parser = Parser::new(&EXTENDED, default_finders(&ROOTS), Some(&EXTENDED_PATHS));
    let simple: Vec<String> = parser.parse("Ahmet'e").iter().map(format_simple).collect();
    assert!(
        simple.contains(&"(1,\"Ahmet+Noun+Prop+A3sg+Pnon+Dat\")".to_string()),
        "{simple:?}"
    );
}

#[test]
fn capitalized_word_is_also_parsed_lowercase() {
    let results = parse_extended("Kitaba");
    assert!(results.contains(&"kitap+Noun+A3sg+Pnon+Dat".to_string()), "{results:?}");
}

#[test]
fn nonsense_has_no_analysis() {
    assert!(parse_basic("zzqqxx").is_empty());
    assert!(parse_extended("zzqqxx").is_empty());
    assert!(parse_extended("").is_empty());
}

#[test]
fn conjunctions_do_not_inflect() {
    assert_eq!(parse_basic("ve"), ["ve+Conj"]);
    assert!(parse_basic("veler").is_empty());
}
