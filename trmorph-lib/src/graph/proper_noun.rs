// Proper nouns and abbreviations. They take no inflection of their own; an
// apostrophe hands them over to the regular noun states.

use super::{RootRule, StateKind, SuffixForm, SuffixGraphBuilder};
use crate::error::Result;
use crate::types::{SecondaryCategory, SyntacticCategory};

const STATES: &[(&str, StateKind)] = &[
    ("PROPER_NOUN_ROOT", StateKind::Transfer),
    ("PROPER_NOUN_WITH_AGREEMENT", StateKind::Transfer),
    ("PROPER_NOUN_WITH_POSSESSION", StateKind::Transfer),
    ("PROPER_NOUN_WITH_CASE", StateKind::Transfer),
    ("PROPER_NOUN_TERMINAL", StateKind::Terminal),
];

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<()> {
    for &(name, kind) in STATES {
        b.state(name, kind, SyntacticCategory::Noun)?;
    }
    let root = b.get_state("PROPER_NOUN_ROOT")?;
    for secondary in [SecondaryCategory::ProperNoun, SecondaryCategory::Abbreviation] {
        b.default_state(
            RootRule::category(SyntacticCategory::Noun).with_secondary(secondary),
            root,
        );
    }

    let with_case = b.get_state("PROPER_NOUN_WITH_CASE")?;
    let terminal = b.get_state("PROPER_NOUN_TERMINAL")?;
    b.free_transition("Proper_Noun_Free_Transition_1", with_case, terminal)?;

    for (name, pretty) in [
        ("A3Sg_Proper_Noun", "A3sg"),
        ("Pnon_Proper_Noun", "Pnon"),
        ("Nom_Proper_Noun", "Nom"),
        ("Apos_Proper_Noun", "Apos"),
    ] {
        b.suffix(name, None, Some(pretty))?;
    }

    for (from, suffix, to, template) in [
        ("PROPER_NOUN_ROOT", "A3Sg_Proper_Noun", "PROPER_NOUN_WITH_AGREEMENT", ""),
        ("PROPER_NOUN_WITH_AGREEMENT", "Pnon_Proper_Noun", "PROPER_NOUN_WITH_POSSESSION", ""),
        ("PROPER_NOUN_WITH_POSSESSION", "Nom_Proper_Noun", "PROPER_NOUN_WITH_CASE", ""),
        ("PROPER_NOUN_ROOT", "Apos_Proper_Noun", "NOUN_ROOT", "'"),
    ] {
        b.connect(from, suffix, to, vec![SuffixForm::new(template)])?;
    }
    Ok(())
}
