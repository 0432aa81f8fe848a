// Root generation: every spelling a dictionary item can surface with.
//
// "kitap" is also written "kitab" before a vowel, "ağız" loses its second
// vowel ("ağz-ı"), "hak" doubles its consonant ("hakk-ı"). Each variant
// carries the phonetic expectations the next suffix has to meet.

use std::collections::HashMap;
use std::sync::Arc;

use crate::alphabet::{fold_circumflex, letter_for, CIRCUMFLEX_LETTERS};
use crate::error::{MorphError, Result};
use crate::lexicon::Lexicon;
use crate::phonetics::attributes_of;
use crate::types::{
    DictionaryItem, LexemeAttribute, PhoneticAttribute, PhoneticExpectation, PhoneticExpectations, Root,
    SyntacticCategory,
};

use LexemeAttribute::*;

const MODIFIERS: [LexemeAttribute; 8] = [
    Voicing,
    VoicingOpt,
    Doubling,
    LastVowelDrop,
    ProgressiveVowelDrop,
    InverseHarmony,
    RootChange,
    CompoundP3sg,
];

/// Irregular stems: lemma and the spellings its roots take.
const ROOT_CHANGES: &[(&str, [&str; 2])] = &[
    ("ben", ["ben", "ban"]),
    ("sen", ["sen", "san"]),
    ("demek", ["di", "de"]),
    ("yemek", ["yi", "ye"]),
    ("hepsi", ["hep", "hepsi"]),
    ("ora", ["or", "ora"]),
    ("bura", ["bur", "bura"]),
    ("şura", ["şur", "şura"]),
    ("nere", ["ner", "nere"]),
    ("içeri", ["içer", "içeri"]),
    ("dışarı", ["dışar", "dışarı"]),
    ("birbiri", ["birbir", "birbiri"]),
];

pub struct RootGenerator;

impl RootGenerator {
    pub fn generate(item: &DictionaryItem) -> Result<Vec<Root>> {
        if item.root.is_empty() {
            return Err(MorphError::config(format!("dictionary item {item} has an empty root")));
        }
        if !MODIFIERS.iter().any(|m| item.has(*m)) {
            let root = Root::new(
                item.root.clone(),
                Arc::new(item.clone()),
                attributes_of(&item.root),
                PhoneticExpectations::new(),
            );
            return Ok(vec![root]);
        }
        if item.has(RootChange) {
            return Self::changed_roots(item);
        }
        Self::modified_roots(item)
    }

    fn changed_roots(item: &DictionaryItem) -> Result<Vec<Root>> {
        let (_, spellings) = ROOT_CHANGES
            .iter()
            .find(|(lemma, _)| *lemma == item.lemma)
            .ok_or_else(|| MorphError::config(format!("unhandled root change for {item}")))?;

        let mut changed = item.clone();
        changed.attributes.remove(&RootChange);
        let changed = Arc::new(changed);

        Ok(spellings
            .iter()
            .map(|s| Root::new(*s, Arc::clone(&changed), attributes_of(s), PhoneticExpectations::new()))
            .collect())
    }

    fn modified_roots(item: &DictionaryItem) -> Result<Vec<Root>> {
        let mut modified: Vec<char> = item.root.chars().collect();
        let mut original_attrs = attributes_of(&item.root);
        let mut modified_attrs = original_attrs.clone();
        let mut original_expectations = PhoneticExpectations::new();
        let mut modified_expectations = PhoneticExpectations::new();

        if item.has(Voicing) || item.has(VoicingOpt) {
            let last = modified.last().copied().map(letter_for);
            let voiced = if item.root.ends_with("nk") {
                letter_for('g')
            } else {
                last.and_then(|l| l.voiced())
                    .ok_or_else(|| MorphError::config(format!("{item} is marked for voicing but cannot be voiced")))?
            };
            modified.pop();
            modified.push(voiced.char);

            modified_attrs.remove(&PhoneticAttribute::LastLetterVoicelessStop);
            if voiced.continuant {
                modified_attrs.remove(&PhoneticAttribute::LastLetterNotContinuant);
                modified_attrs.insert(PhoneticAttribute::LastLetterContinuant);
            } else {
                modified_attrs.remove(&PhoneticAttribute::LastLetterContinuant);
                modified_attrs.insert(PhoneticAttribute::LastLetterNotContinuant);
            }
            if !item.has(VoicingOpt) {
                original_expectations.insert(PhoneticExpectation::ConsonantStart);
            }
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        if item.has(Doubling) {
            if let Some(&last) = modified.last() {
                modified.push(last);
            }
            original_expectations.insert(PhoneticExpectation::ConsonantStart);
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        if item.has(LastVowelDrop) {
            if modified.len() < 2 {
                return Err(MorphError::config(format!("{item} is too short to drop a vowel")));
            }
            modified.remove(modified.len() - 2);
            if item.category != SyntacticCategory::Verb {
                original_expectations.insert(PhoneticExpectation::ConsonantStart);
            }
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        if item.has(InverseHarmony) {
            for attrs in [&mut original_attrs, &mut modified_attrs] {
                attrs.remove(&PhoneticAttribute::LastVowelBack);
                attrs.insert(PhoneticAttribute::LastVowelFrontal);
            }
        }

        if item.has(ProgressiveVowelDrop) {
            modified.pop();
            if modified.iter().any(|&c| letter_for(c).vowel) {
                let spelling: String = modified.iter().collect();
                modified_attrs = attributes_of(&spelling);
            }
            modified_expectations.insert(PhoneticExpectation::VowelStart);
        }

        let shared = Arc::new(item.clone());
        let original = Root::new(item.root.clone(), Arc::clone(&shared), original_attrs, original_expectations);
        let modified = Root::new(modified.into_iter().collect::<String>(), shared, modified_attrs, modified_expectations);

        if original == modified {
            Ok(vec![original])
        } else {
            Ok(vec![original, modified])
        }
    }
}

/// Also emits plain-vowel copies of roots spelled with â, î or û, so that
/// "hala" finds the item written "hâlâ".
pub struct CircumflexConvertingRootGenerator;

impl CircumflexConvertingRootGenerator {
    pub fn generate(item: &DictionaryItem) -> Result<Vec<Root>> {
        let mut roots = RootGenerator::generate(item)?;
        let has_circumflex = item
            .root
            .chars()
            .any(|c| CIRCUMFLEX_LETTERS.iter().any(|(circ, _)| *circ == c));
        if has_circumflex {
            let folded: Vec<Root> = roots
                .iter()
                .map(|root| Root {
                    spelling: fold_circumflex(&root.spelling),
                    ..root.clone()
                })
                .collect();
            roots.extend(folded);
        }
        Ok(roots)
    }
}

/// Spelling to roots multimap, queried once per input prefix.
#[derive(Debug, Clone, Default)]
pub struct RootMap {
    roots: HashMap<String, Vec<Arc<Root>>>,
}

impl RootMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lexicon(lexicon: &Lexicon) -> Result<Self> {
        Self::from_items(lexicon.items())
    }

    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a DictionaryItem>) -> Result<Self> {
        let mut map = Self::new();
        for item in items {
            for root in CircumflexConvertingRootGenerator::generate(item)? {
                map.insert(root);
            }
        }
        log::debug!("root map holds {} spellings", map.roots.len());
        Ok(map)
    }

    pub fn insert(&mut self, root: Root) {
        self.roots
            .entry(root.spelling.clone())
            .or_default()
            .push(Arc::new(root));
    }

    pub fn get(&self, spelling: &str) -> &[Arc<Root>] {
        self.roots.get(spelling).map_or(&[], Vec::as_slice)
    }

    pub fn roots(&self) -> impl Iterator<Item = &Arc<Root>> {
        self.roots.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PhoneticAttribute::*;

    fn noun(root: &str, attrs: &[LexemeAttribute]) -> DictionaryItem {
        DictionaryItem::new(root, root, SyntacticCategory::Noun, None).with_attributes(attrs.iter().copied())
    }

    fn spellings(roots: &[Root]) -> Vec<&str> {
        roots.iter().map(|r| r.spelling.as_str()).collect()
    }

    #[test]
    fn test_plain_root() {
        let roots = RootGenerator::generate(&noun("ev", &[NoVoicing])).unwrap();
        assert_eq!(spellings(&roots), vec!["ev"]);
        assert!(roots[0].expectations.is_empty());
        assert_eq!(roots[0].attributes, attributes_of("ev"));
    }

    #[test]
    fn test_voicing() {
        let roots = RootGenerator::generate(&noun("kapak", &[Voicing])).unwrap();
        assert_eq!(spellings(&roots), vec!["kapak", "kapağ"]);
        assert!(roots[0].expectations.contains(&PhoneticExpectation::ConsonantStart));
        assert!(roots[1].expectations.contains(&PhoneticExpectation::VowelStart));
        assert!(roots[1].attributes.contains(&LastLetterContinuant));
        assert!(!roots[1].attributes.contains(&LastLetterVoicelessStop));
    }

    #[test]
    fn test_voicing_after_n() {
        let roots = RootGenerator::generate(&noun("renk", &[Voicing])).unwrap();
        assert_eq!(spellings(&roots), vec!["renk", "reng"]);
        assert!(roots[1].attributes.contains(&LastLetterNotContinuant));
    }

    #[test]
    fn test_optional_voicing_keeps_original_open() {
        let roots = RootGenerator::generate(&noun("kalp", &[VoicingOpt])).unwrap();
        assert_eq!(spellings(&roots), vec!["kalp", "kalb"]);
        assert!(roots[0].expectations.is_empty());
    }

    #[test]
    fn test_doubling_and_vowel_drop() {
        let roots = RootGenerator::generate(&noun("hak", &[Doubling, NoVoicing])).unwrap();
        assert_eq!(spellings(&roots), vec!["hak", "hakk"]);

        let roots = RootGenerator::generate(&noun("ağız", &[LastVowelDrop])).unwrap();
        assert_eq!(spellings(&roots), vec!["ağız", "ağz"]);
        assert!(roots[0].expectations.contains(&PhoneticExpectation::ConsonantStart));
    }

    #[test]
    fn test_inverse_harmony() {
        let roots = RootGenerator::generate(&noun("saat", &[InverseHarmony, NoVoicing])).unwrap();
        assert_eq!(roots.len(), 1);
        assert!(roots[0].attributes.contains(&LastVowelFrontal));
        assert!(!roots[0].attributes.contains(&LastVowelBack));
    }

    #[test]
    fn test_progressive_vowel_drop() {
        let item = DictionaryItem::new("aramak", "ara", SyntacticCategory::Verb, None)
            .with_attributes([ProgressiveVowelDrop, NoVoicing]);
        let roots = RootGenerator::generate(&item).unwrap();
        assert_eq!(spellings(&roots), vec!["ara", "ar"]);
        assert!(roots[1].attributes.contains(&LastLetterConsonant));
        assert!(roots[1].expectations.contains(&PhoneticExpectation::VowelStart));
    }

    #[test]
    fn test_root_change() {
        let item = DictionaryItem::new("demek", "de", SyntacticCategory::Verb, None).with_attributes([RootChange]);
        let roots = RootGenerator::generate(&item).unwrap();
        assert_eq!(spellings(&roots), vec!["di", "de"]);
        assert!(roots.iter().all(|r| !r.item.has(RootChange)));
        assert!(roots.iter().all(|r| r.expectations.is_empty()));
    }

    #[test]
    fn test_unknown_root_change_is_an_error() {
        let item = noun("kitap", &[RootChange]);
        assert!(matches!(RootGenerator::generate(&item), Err(MorphError::Configuration(_))));
    }

    #[test]
    fn test_circumflex_copies() {
        let item = noun("hâlâ", &[NoVoicing]);
        let roots = CircumflexConvertingRootGenerator::generate(&item).unwrap();
        assert_eq!(spellings(&roots), vec!["hâlâ", "hala"]);
    }

    #[test]
    fn test_root_map_lookup() {
        let items = [noun("kapak", &[Voicing]), noun("kapı", &[NoVoicing])];
        let map = RootMap::from_items(&items).unwrap();
        assert_eq!(map.get("kapağ").len(), 1);
        assert_eq!(map.get("kapı").len(), 1);
        assert!(map.get("kap").is_empty());
    }
}
