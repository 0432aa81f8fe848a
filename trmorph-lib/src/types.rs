use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Primary part of speech of a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SyntacticCategory {
    Noun,
    #[serde(rename = "Adj")]
    Adjective,
    #[serde(rename = "Adv")]
    Adverb,
    #[serde(rename = "Conj")]
    Conjunction,
    #[serde(rename = "Interj")]
    Interjection,
    Verb,
    #[serde(rename = "Pron")]
    Pronoun,
    #[serde(rename = "Num")]
    Numeral,
    #[serde(rename = "Det")]
    Determiner,
    #[serde(rename = "Part")]
    Particle,
    #[serde(rename = "Ques")]
    Question,
    #[serde(rename = "Punc")]
    Punctuation,
}

impl SyntacticCategory {
    pub const ALL: [SyntacticCategory; 12] = [
        SyntacticCategory::Noun,
        SyntacticCategory::Adjective,
        SyntacticCategory::Adverb,
        SyntacticCategory::Conjunction,
        SyntacticCategory::Interjection,
        SyntacticCategory::Verb,
        SyntacticCategory::Pronoun,
        SyntacticCategory::Numeral,
        SyntacticCategory::Determiner,
        SyntacticCategory::Particle,
        SyntacticCategory::Question,
        SyntacticCategory::Punctuation,
    ];

    /// The tag used in lexicon files and in formatted parses.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntacticCategory::Noun => "Noun",
            SyntacticCategory::Adjective => "Adj",
            SyntacticCategory::Adverb => "Adv",
            SyntacticCategory::Conjunction => "Conj",
            SyntacticCategory::Interjection => "Interj",
            SyntacticCategory::Verb => "Verb",
            SyntacticCategory::Pronoun => "Pron",
            SyntacticCategory::Numeral => "Num",
            SyntacticCategory::Determiner => "Det",
            SyntacticCategory::Particle => "Part",
            SyntacticCategory::Question => "Ques",
            SyntacticCategory::Punctuation => "Punc",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for SyntacticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary part of speech (a refinement of the primary one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SecondaryCategory {
    #[serde(rename = "Dup")]
    Duplicator,
    #[serde(rename = "Postp")]
    PostPositive,
    #[serde(rename = "Ques")]
    Question,
    #[serde(rename = "Demons")]
    Demonstrative,
    #[serde(rename = "Reflex")]
    Reflexive,
    #[serde(rename = "Pers")]
    Personal,
    Time,
    #[serde(rename = "Prop")]
    ProperNoun,
    #[serde(rename = "Abbr")]
    Abbreviation,
    #[serde(rename = "Card")]
    Cardinal,
    #[serde(rename = "Ord")]
    Ordinal,
    Digits,
}

impl SecondaryCategory {
    pub const ALL: [SecondaryCategory; 12] = [
        SecondaryCategory::Duplicator,
        SecondaryCategory::PostPositive,
        SecondaryCategory::Question,
        SecondaryCategory::Demonstrative,
        SecondaryCategory::Reflexive,
        SecondaryCategory::Personal,
        SecondaryCategory::Time,
        SecondaryCategory::ProperNoun,
        SecondaryCategory::Abbreviation,
        SecondaryCategory::Cardinal,
        SecondaryCategory::Ordinal,
        SecondaryCategory::Digits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SecondaryCategory::Duplicator => "Dup",
            SecondaryCategory::PostPositive => "Postp",
            SecondaryCategory::Question => "Ques",
            SecondaryCategory::Demonstrative => "Demons",
            SecondaryCategory::Reflexive => "Reflex",
            SecondaryCategory::Personal => "Pers",
            SecondaryCategory::Time => "Time",
            SecondaryCategory::ProperNoun => "Prop",
            SecondaryCategory::Abbreviation => "Abbr",
            SecondaryCategory::Cardinal => "Card",
            SecondaryCategory::Ordinal => "Ord",
            SecondaryCategory::Digits => "Digits",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for SecondaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Morphophonemic and morphotactic facts attached to a lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LexemeAttribute {
    Voicing,
    VoicingOpt,
    NoVoicing,
    InverseHarmony,
    LastVowelDrop,
    Doubling,
    /// Irregular stem change handled by a fixed table.
    #[serde(alias = "StemChange")]
    RootChange,
    Plural,
    NoSuffix,
    CompoundP3sg,
    ProgressiveVowelDrop,
    #[serde(rename = "Aorist_I")]
    AoristI,
    #[serde(rename = "Aorist_A")]
    AoristA,
    #[serde(rename = "Causative_t")]
    CausativeT,
    #[serde(rename = "Causative_Ir")]
    CausativeIr,
    #[serde(rename = "Causative_It")]
    CausativeIt,
    #[serde(rename = "Causative_Ar")]
    CausativeAr,
    #[serde(rename = "Causative_dIr")]
    CausativeDIr,
    #[serde(rename = "Passive_Il")]
    PassiveIl,
    #[serde(rename = "Passive_In")]
    PassiveIn,
    #[serde(rename = "Passive_InIl")]
    PassiveInIl,
}

impl LexemeAttribute {
    pub const ALL: [LexemeAttribute; 21] = [
        LexemeAttribute::Voicing,
        LexemeAttribute::VoicingOpt,
        LexemeAttribute::NoVoicing,
        LexemeAttribute::InverseHarmony,
        LexemeAttribute::LastVowelDrop,
        LexemeAttribute::Doubling,
        LexemeAttribute::RootChange,
        LexemeAttribute::Plural,
        LexemeAttribute::NoSuffix,
        LexemeAttribute::CompoundP3sg,
        LexemeAttribute::ProgressiveVowelDrop,
        LexemeAttribute::AoristI,
        LexemeAttribute::AoristA,
        LexemeAttribute::CausativeT,
        LexemeAttribute::CausativeIr,
        LexemeAttribute::CausativeIt,
        LexemeAttribute::CausativeAr,
        LexemeAttribute::CausativeDIr,
        LexemeAttribute::PassiveIl,
        LexemeAttribute::PassiveIn,
        LexemeAttribute::PassiveInIl,
    ];

    pub const CAUSATIVES: [LexemeAttribute; 5] = [
        LexemeAttribute::CausativeT,
        LexemeAttribute::CausativeIr,
        LexemeAttribute::CausativeIt,
        LexemeAttribute::CausativeAr,
        LexemeAttribute::CausativeDIr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LexemeAttribute::Voicing => "Voicing",
            LexemeAttribute::VoicingOpt => "VoicingOpt",
            LexemeAttribute::NoVoicing => "NoVoicing",
            LexemeAttribute::InverseHarmony => "InverseHarmony",
            LexemeAttribute::LastVowelDrop => "LastVowelDrop",
            LexemeAttribute::Doubling => "Doubling",
            LexemeAttribute::RootChange => "RootChange",
            LexemeAttribute::Plural => "Plural",
            LexemeAttribute::NoSuffix => "NoSuffix",
            LexemeAttribute::CompoundP3sg => "CompoundP3sg",
            LexemeAttribute::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            LexemeAttribute::AoristI => "Aorist_I",
            LexemeAttribute::AoristA => "Aorist_A",
            LexemeAttribute::CausativeT => "Causative_t",
            LexemeAttribute::CausativeIr => "Causative_Ir",
            LexemeAttribute::CausativeIt => "Causative_It",
            LexemeAttribute::CausativeAr => "Causative_Ar",
            LexemeAttribute::CausativeDIr => "Causative_dIr",
            LexemeAttribute::PassiveIl => "Passive_Il",
            LexemeAttribute::PassiveIn => "Passive_In",
            LexemeAttribute::PassiveInIl => "Passive_InIl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        if name == "StemChange" {
            return Some(LexemeAttribute::RootChange);
        }
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }
}

/// Facts about the tail of a surface string that drive suffix harmony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhoneticAttribute {
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterNotVoiceless,
    LastLetterContinuant,
    LastLetterNotContinuant,
    LastLetterVoicedStop,
    LastLetterVoicelessStop,
}

/// Constraint on the first sound of the next non-empty suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhoneticExpectation {
    VowelStart,
    ConsonantStart,
}

pub type LexemeAttributes = BTreeSet<LexemeAttribute>;
pub type PhoneticAttributes = BTreeSet<PhoneticAttribute>;
pub type PhoneticExpectations = BTreeSet<PhoneticExpectation>;

/// A lexicon entry after category defaults and attribute inference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DictionaryItem {
    /// Citation form (e.g. "yapmak").
    pub lemma: String,
    /// Spelling the root variants are generated from (e.g. "yap").
    pub root: String,
    pub category: SyntacticCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryCategory>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub attributes: LexemeAttributes,
}

impl DictionaryItem {
    pub fn new(
        lemma: impl Into<String>,
        root: impl Into<String>,
        category: SyntacticCategory,
        secondary: Option<SecondaryCategory>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            root: root.into(),
            category,
            secondary,
            attributes: BTreeSet::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = LexemeAttribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn has(&self, attribute: LexemeAttribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})+{}", self.lemma, self.root, self.category)?;
        if let Some(secondary) = self.secondary {
            write!(f, "+{secondary}")?;
        }
        Ok(())
    }
}

/// One concrete spelling of a dictionary item, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    pub spelling: String,
    pub item: Arc<DictionaryItem>,
    pub attributes: PhoneticAttributes,
    pub expectations: PhoneticExpectations,
}

impl Root {
    pub fn new(
        spelling: impl Into<String>,
        item: Arc<DictionaryItem>,
        attributes: PhoneticAttributes,
        expectations: PhoneticExpectations,
    ) -> Self {
        Self {
            spelling: spelling.into(),
            item,
            attributes,
            expectations,
        }
    }

    pub fn category(&self) -> SyntacticCategory {
        self.item.category
    }

    pub fn secondary(&self) -> Option<SecondaryCategory> {
        self.item.secondary
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}]", self.spelling, self.item)
    }
}
