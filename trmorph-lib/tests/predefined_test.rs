// Irregular pronoun and verb forms, parsed through the predefined paths.

use std::sync::LazyLock;

use trmorph_lib::finders::WordRootFinder;
use trmorph_lib::output::format_parse;
use trmorph_lib::{Lexicon, Parser, PredefinedPaths, RootMap, SuffixGraph};

static ROOTS: LazyLock<RootMap> = LazyLock::new(|| RootMap::from_lexicon(&Lexicon::bundled().unwrap()).unwrap());
static BASIC: LazyLock<SuffixGraph> = LazyLock::new(|| SuffixGraph::basic().unwrap());
static PATHS: LazyLock<PredefinedPaths<'static>> = LazyLock::new(|| PredefinedPaths::build(&BASIC, &ROOTS).unwrap());

fn parse(word: &str) -> Vec<String> {
    let parser = Parser::new(&BASIC, vec![Box::new(WordRootFinder::new(&ROOTS))], Some(&PATHS));
    parser.parse(word).iter().map(format_parse).collect()
}

#[test]
fn builds_on_both_graphs() {
    let extended = SuffixGraph::extended().unwrap();
    assert!(PredefinedPaths::build(&extended, &ROOTS).is_ok());
    assert!(PredefinedPaths::build(&BASIC, &ROOTS).is_ok());
}

#[test]
fn only_irregular_roots_have_paths() {
    let ben = ROOTS.get("ben").iter().find(|r| r.item.lemma == "ben").unwrap();
    assert!(PATHS.has_paths(ben).unwrap());
    assert!(!PATHS.paths(ben).unwrap().is_empty());

    let kitap = &ROOTS.get("kitap")[0];
    assert!(!PATHS.has_paths(kitap).unwrap());
    assert!(PATHS.paths(kitap).unwrap().is_empty());
}

#[test]
fn personal_pronoun_dative() {
    let results = parse("bana");
    assert!(
        results.contains(&"ben+Pron+Pers+A1sg+Pnon+Dat".to_string()),
        "{results:?}"
    );
    // "ben" itself never takes the dative.
    assert!(parse("bene").is_empty());
}

#[test]
fn third_person_genitive() {
    let results = parse("onun");
    assert!(
        results.contains(&"o+Pron+Pers+A3sg+Pnon+Gen".to_string()),
        "{results:?}"
    );
}

#[test]
fn di_future() {
    let results = parse("diyecek");
    assert!(results.contains(&"de+Verb+Pos+Fut+A3sg".to_string()), "{results:?}");
}

#[test]
fn personal_pronoun_cases() {
    for (word, expected) in [
        ("benim", "ben+Pron+Pers+A1sg+Pnon+Gen"),
        ("bende", "ben+Pron+Pers+A1sg+Pnon+Loc"),
        ("seni", "sen+Pron+Pers+A2sg+Pnon+Acc"),
    ] {
        let results = parse(word);
        assert!(results.contains(&expected.to_string()), "{word}: {results:?}");
    }
}
