// Lexicon loading: the bracketed line format and attribute inference.
//
//   kitap
//   ağız [A:LastVowelDrop]
//   yemek [A:RootChange]
//   ben [P:Pron,Pers; A:RootChange]
//   akşamsefası [A:CompoundP3sg; R:akşamsefa]

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::{letter_for, vowel_count};
use crate::error::{MorphError, Result};
use crate::types::{DictionaryItem, LexemeAttribute, SecondaryCategory, SyntacticCategory};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.json"));

/// A lexicon line split into its parts, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub lemma: String,
    pub root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddedLexicon {
    entries: Vec<RawEntry>,
}

/// Splits one line. Comments and blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<RawEntry>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, meta) = match line.split_once('[') {
        Some((word, rest)) => {
            let meta = rest
                .trim()
                .strip_suffix(']')
                .ok_or_else(|| MorphError::lexicon(line, "missing closing bracket"))?;
            if meta.contains('[') || meta.contains(']') {
                return Err(MorphError::lexicon(line, "nested brackets"));
            }
            (word.trim(), Some(meta.trim()))
        }
        None => (line, None),
    };
    if word.is_empty() {
        return Err(MorphError::lexicon(line, "empty root"));
    }

    let mut entry = RawEntry {
        lemma: word.to_string(),
        root: word.to_string(),
        ..RawEntry::default()
    };

    for part in meta.into_iter().flat_map(|m| m.split(';')).map(str::trim) {
        if part.is_empty() {
            continue;
        }
        if let Some(pos) = part.strip_prefix("P:") {
            let mut tags = pos.splitn(2, ',').map(str::trim);
            entry.category = tags.next().filter(|t| !t.is_empty()).map(String::from);
            entry.secondary = tags.next().filter(|t| !t.is_empty()).map(String::from);
        } else if let Some(attrs) = part.strip_prefix("A:") {
            entry.attributes = attrs
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from)
                .collect();
        } else if let Some(root) = part.strip_prefix("R:") {
            entry.root = root.trim().to_string();
        } else if part.starts_with("S:") {
            // Semantic tags are not used by the analyzer.
        } else {
            return Err(MorphError::lexicon(line, format!("unknown section {part:?}")));
        }
    }

    Ok(Some(entry))
}

impl DictionaryItem {
    /// Validates a raw entry, applies category defaults and infers the
    /// morphophonemic attributes the lexicon leaves implicit.
    pub fn from_raw(raw: &RawEntry) -> Result<Self> {
        let describe = || format!("{} [{:?}]", raw.lemma, raw.category);

        let mut category = match raw.category.as_deref() {
            Some(tag) => Some(
                SyntacticCategory::from_tag(tag)
                    .ok_or_else(|| MorphError::lexicon(&describe(), format!("unknown category {tag}")))?,
            ),
            None => None,
        };
        let mut secondary = match raw.secondary.as_deref() {
            Some(tag) => Some(
                SecondaryCategory::from_tag(tag)
                    .ok_or_else(|| MorphError::lexicon(&describe(), format!("unknown secondary category {tag}")))?,
            ),
            None => None,
        };
        let mut attributes = Vec::with_capacity(raw.attributes.len());
        for name in &raw.attributes {
            let attribute = LexemeAttribute::from_name(name)
                .ok_or_else(|| MorphError::lexicon(&describe(), format!("unknown attribute {name}")))?;
            attributes.push(attribute);
        }

        let mut root = raw.root.clone();
        let starts_upper = root.chars().next().is_some_and(char::is_uppercase);
        if starts_upper {
            category = Some(SyntacticCategory::Noun);
            secondary = Some(SecondaryCategory::ProperNoun);
        } else if category.is_none() && secondary.is_none() {
            if root.ends_with("mak") || root.ends_with("mek") {
                category = Some(SyntacticCategory::Verb);
                let cut = root.char_indices().rev().nth(2).map_or(0, |(i, _)| i);
                root.truncate(cut);
            } else {
                category = Some(SyntacticCategory::Noun);
            }
        }
        let category = category.unwrap_or(SyntacticCategory::Noun);

        if root.is_empty() {
            return Err(MorphError::lexicon(&describe(), "root is empty after removing the infinitive"));
        }

        let mut item = DictionaryItem::new(raw.lemma.clone(), root, category, secondary).with_attributes(attributes);
        infer_attributes(&mut item);
        Ok(item)
    }
}

fn infer_attributes(item: &mut DictionaryItem) {
    use LexemeAttribute::*;

    let vowels = vowel_count(&item.root);
    let Some(last) = item.root.chars().last() else {
        return;
    };
    let last_letter = letter_for(last);
    let attrs = &mut item.attributes;

    match item.category {
        SyntacticCategory::Verb => {
            if last_letter.vowel {
                attrs.insert(ProgressiveVowelDrop);
                attrs.insert(PassiveIn);
            }
            if vowels > 1 && !attrs.contains(&AoristA) {
                attrs.insert(AoristI);
            }
            if vowels == 1 && !attrs.contains(&AoristI) {
                attrs.insert(AoristA);
            }
            if last == 'l' {
                attrs.insert(PassiveIn);
            }
            if LexemeAttribute::CAUSATIVES.iter().all(|c| !attrs.contains(c)) {
                if last_letter.vowel || (matches!(last, 'l' | 'r') && vowels > 1) {
                    attrs.insert(CausativeT);
                } else if last == 't' && vowels < 2 {
                    attrs.insert(CausativeIr);
                } else {
                    attrs.insert(CausativeDIr);
                }
            }
            if attrs.contains(&ProgressiveVowelDrop) {
                attrs.insert(NoVoicing);
            }
            if !attrs.contains(&Voicing) {
                attrs.insert(NoVoicing);
            }
        }
        SyntacticCategory::Noun if attrs.contains(&CompoundP3sg) => {
            if attrs.contains(&VoicingOpt) {
                attrs.remove(&Voicing);
                attrs.remove(&NoVoicing);
            } else if !attrs.contains(&Voicing) {
                attrs.insert(NoVoicing);
            }
        }
        SyntacticCategory::Noun | SyntacticCategory::Adjective => {
            if attrs.contains(&VoicingOpt) {
                attrs.remove(&Voicing);
                attrs.remove(&NoVoicing);
            } else if vowels > 1
                && last_letter.voiceless
                && !last_letter.continuant
                && !attrs.contains(&NoVoicing)
                && !attrs.contains(&InverseHarmony)
            {
                attrs.insert(Voicing);
            } else if ["nk", "og", "rt"].iter().any(|end| item.root.ends_with(end)) {
                attrs.insert(Voicing);
            } else if !attrs.contains(&Voicing) {
                attrs.insert(NoVoicing);
            }
        }
        _ => {}
    }
}

/// The set of dictionary items the analyzer knows about.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    items: Vec<DictionaryItem>,
}

impl Lexicon {
    /// Load the lexicon embedded at compile time from `data/lexicon`.
    pub fn bundled() -> Result<Self> {
        let data: EmbeddedLexicon = serde_json::from_slice(EMBEDDED_JSON)?;
        let items = data
            .entries
            .iter()
            .map(DictionaryItem::from_raw)
            .collect::<Result<Vec<_>>>()?;
        log::debug!("loaded {} bundled lexicon items", items.len());
        Ok(Self { items })
    }

    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = Vec::new();
        for line in lines {
            if let Some(raw) = parse_line(line.as_ref())? {
                items.push(DictionaryItem::from_raw(&raw)?);
            }
        }
        Ok(Self { items })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_lines(content.lines())
    }

    pub fn items(&self) -> &[DictionaryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds items from another lexicon, e.g. a user file on top of the bundled one.
    pub fn extend(&mut self, other: Lexicon) {
        self.items.extend(other.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LexemeAttribute::*;

    fn item(line: &str) -> DictionaryItem {
        let raw = parse_line(line).unwrap().unwrap();
        DictionaryItem::from_raw(&raw).unwrap()
    }

    #[test]
    fn skips_comments_and_blanks() {
        assert!(parse_line("# comment").unwrap().is_none());
        assert!(parse_line("   ").unwrap().is_none());
    }

    #[test]
    fn parses_all_sections() {
        let raw = parse_line("akşamsefası [P:Noun; A:CompoundP3sg; R:akşamsefa; S:flower]")
            .unwrap()
            .unwrap();
        assert_eq!(raw.lemma, "akşamsefası");
        assert_eq!(raw.root, "akşamsefa");
        assert_eq!(raw.category.as_deref(), Some("Noun"));
        assert_eq!(raw.attributes, vec!["CompoundP3sg".to_string()]);
    }

    #[test]
    fn rejects_unknown_section() {
        assert!(parse_line("kitap [X:foo]").is_err());
        assert!(parse_line("kitap [P:Noun").is_err());
    }

    #[test]
    fn rejects_unknown_attribute() {
        let raw = parse_line("kitap [A:Sparkles]").unwrap().unwrap();
        assert!(DictionaryItem::from_raw(&raw).is_err());
    }

    #[test]
    fn infinitive_becomes_verb() {
        let yap = item("yapmak");
        assert_eq!(yap.category, SyntacticCategory::Verb);
        assert_eq!(yap.root, "yap");
        assert_eq!(yap.lemma, "yapmak");
        assert!(yap.has(AoristA));
        assert!(yap.has(CausativeDIr));
        assert!(yap.has(NoVoicing));
    }

    #[test]
    fn vowel_final_verb_drops_progressive_vowel() {
        let ara = item("aramak");
        assert!(ara.has(ProgressiveVowelDrop));
        assert!(ara.has(PassiveIn));
        assert!(ara.has(AoristI));
        assert!(ara.has(CausativeT));
        assert!(ara.has(NoVoicing));
    }

    #[test]
    fn t_final_monosyllable_takes_ir_causative() {
        assert!(item("bitmek").has(CausativeIr));
        assert!(item("gelmek").has(PassiveIn));
    }

    #[test]
    fn voicing_inference_for_nouns() {
        assert!(item("kitap").has(Voicing));
        assert!(item("renk").has(Voicing));
        assert!(item("ev").has(NoVoicing));
        assert!(item("saat [A:InverseHarmony]").has(NoVoicing));
        let opt = item("kalp [A:VoicingOpt]");
        assert!(!opt.has(Voicing) && !opt.has(NoVoicing));
    }

    #[test]
    fn capitalized_root_is_proper_noun() {
        let ankara = item("Ankara");
        assert_eq!(ankara.category, SyntacticCategory::Noun);
        assert_eq!(ankara.secondary, Some(SecondaryCategory::ProperNoun));
    }

    #[test]
    fn bundled_lexicon_loads() {
        let lexicon = Lexicon::bundled().unwrap();
        assert!(lexicon.len() > 100, "bundled lexicon too small");
        assert!(lexicon.items().iter().any(|i| i.lemma == "kitap"));
    }
}
