// The copula: nominal predicates ("evdeyim", "güzeldi"), "değil" and the
// copular "-dIr".

use super::{RootRule, StateKind, SuffixForm, SuffixGraphBuilder};
use crate::conditions::{comes_after, doesnt_come_after, SuffixCondition};
use crate::error::Result;
use crate::types::SyntacticCategory;

const STATES: &[(&str, StateKind, SyntacticCategory)] = &[
    ("NOUN_COPULA", StateKind::Derivational, SyntacticCategory::Noun),
    ("ADJECTIVE_COPULA", StateKind::Derivational, SyntacticCategory::Adjective),
    ("ADVERB_COPULA", StateKind::Derivational, SyntacticCategory::Adverb),
    ("PRONOUN_COPULA", StateKind::Derivational, SyntacticCategory::Pronoun),
    ("VERB_DEGIL_ROOT", StateKind::Transfer, SyntacticCategory::Verb),
    ("VERB_COPULA_WITHOUT_TENSE", StateKind::Transfer, SyntacticCategory::Verb),
    ("VERB_COPULA_WITHOUT_TENSE_DERIV", StateKind::Derivational, SyntacticCategory::Verb),
    ("VERB_COPULA_WITH_TENSE", StateKind::Transfer, SyntacticCategory::Verb),
];

const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Cop_Free_Transition", "NOUN_TERMINAL_TRANSFER", "NOUN_COPULA"),
    ("Adjective_Cop_Free_Transition", "ADJECTIVE_TERMINAL_TRANSFER", "ADJECTIVE_COPULA"),
    ("Adverb_Cop_Free_Transition", "ADVERB_TERMINAL_TRANSFER", "ADVERB_COPULA"),
    ("Pronoun_Cop_Free_Transition", "PRONOUN_TERMINAL_TRANSFER", "PRONOUN_COPULA"),
    ("Verb_Degil_Free_Transition", "VERB_DEGIL_ROOT", "VERB_COPULA_WITHOUT_TENSE"),
    ("Copula_Deriv_Free_Transition", "VERB_COPULA_WITHOUT_TENSE", "VERB_COPULA_WITHOUT_TENSE_DERIV"),
];

const ZERO_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Copula_Zero_Transition", "NOUN_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adjective_Copula_Zero_Transition", "ADJECTIVE_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adverb_Copula_Zero_Transition", "ADVERB_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Pronoun_Copula_Zero_Transition", "PRONOUN_COPULA", "VERB_COPULA_WITHOUT_TENSE"),
    ("Adjective_Adverb_Zero_Transition", "ADJECTIVE_DERIV", "ADVERB_ROOT"),
];

/// Suffixes after which the copular "-dIr" cannot follow a verb.
const NO_COPULA_AFTER: &[&str] = &[
    "Aor",
    "Past",
    "Cond",
    "Imp",
    "Opt",
    "Cond_Cop",
    "Cond_Cop_Secondary",
    "Past_Cop",
    "Narr_Cop",
    "Narr_Ques",
    "Past_Ques",
];

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<()> {
    for &(name, kind, category) in STATES {
        b.state(name, kind, category)?;
    }
    let degil = b.get_state("VERB_DEGIL_ROOT")?;
    b.default_state(
        RootRule::category(SyntacticCategory::Verb).with_spelling("değil"),
        degil,
    );

    for &(name, from, to) in FREE_TRANSITIONS {
        let (from, to) = (b.get_state(from)?, b.get_state(to)?);
        b.free_transition(name, from, to)?;
    }
    for &(name, from, to) in ZERO_TRANSITIONS {
        let (from, to) = (b.get_state(from)?, b.get_state(to)?);
        b.zero_transition(name, from, to)?;
    }

    let pres = b.suffix("Pres_Cop", None, Some("Pres"))?;
    b.suffix("Narr_Cop", None, Some("Narr"))?;
    let past = b.suffix("Past_Cop", None, Some("Past"))?;
    let cond = b.suffix("Cond_Cop", None, Some("Cond"))?;
    let cond_secondary = b.suffix("Cond_Cop_Secondary", None, Some("Cond"))?;
    let agreements = b.group("Copula_Agreements_Group")?;
    for (name, pretty) in [
        ("A1Sg_Cop", "A1sg"),
        ("A2Sg_Cop", "A2sg"),
        ("A3Sg_Cop", "A3sg"),
        ("A1Pl_Cop", "A1pl"),
        ("A2Pl_Cop", "A2pl"),
        ("A3Pl_Cop", "A3pl"),
    ] {
        b.suffix(name, Some(agreements), Some(pretty))?;
    }
    b.suffix("While_Cop", None, Some("While"))?;
    b.suffix("Cop_Verb", None, Some("Cop"))?;
    b.suffix("Cop_Ques", None, Some("Cop"))?;

    // tenses
    for (suffix, template) in [
        ("Pres_Cop", ""),
        ("Narr_Cop", "+ymIş"),
        ("Past_Cop", "+ydI"),
        ("Cond_Cop", "+ysA"),
    ] {
        b.connect(
            "VERB_COPULA_WITHOUT_TENSE",
            suffix,
            "VERB_COPULA_WITH_TENSE",
            vec![SuffixForm::new(template)],
        )?;
    }
    b.connect(
        "VERB_COPULA_WITH_TENSE",
        "Cond_Cop_Secondary",
        "VERB_COPULA_WITH_TENSE",
        vec![SuffixForm::new("+ysA").pre(doesnt_come_after(pres))],
    )?;

    // agreement
    let short = comes_after(cond) | comes_after(cond_secondary) | comes_after(past);
    let agreement_forms = [
        ("A1Sg_Cop", "+yIm", Some("m")),
        ("A2Sg_Cop", "sIn", Some("n")),
        ("A3Sg_Cop", "", None),
        ("A1Pl_Cop", "+yIz", Some("k")),
        ("A2Pl_Cop", "sInIz", Some("nIz")),
        ("A3Pl_Cop", "lAr", None),
    ];
    for (suffix, template, short_template) in agreement_forms {
        let mut forms = vec![SuffixForm::new(template)];
        if let Some(short_template) = short_template {
            forms.push(SuffixForm::new(short_template).pre(short.clone()));
        }
        b.connect("VERB_COPULA_WITH_TENSE", suffix, "VERB_TERMINAL_TRANSFER", forms)?;
    }

    b.connect(
        "VERB_COPULA_WITHOUT_TENSE_DERIV",
        "While_Cop",
        "ADVERB_ROOT",
        vec![SuffixForm::new("+yken")],
    )?;

    let mut not_after_finite = Vec::with_capacity(NO_COPULA_AFTER.len());
    for name in NO_COPULA_AFTER {
        not_after_finite.push(doesnt_come_after(b.get_suffix(name)?));
    }
    b.connect(
        "VERB_TERMINAL_TRANSFER",
        "Cop_Verb",
        "VERB_TERMINAL_TRANSFER",
        vec![SuffixForm::new("dIr").pre(SuffixCondition::And(not_after_finite))],
    )?;

    let pres_ques = b.get_suffix("Pres_Ques")?;
    b.connect(
        "QUESTION_WITH_AGREEMENT",
        "Cop_Ques",
        "QUESTION_WITH_AGREEMENT",
        vec![SuffixForm::new("dIr").pre(comes_after(pres_ques))],
    )?;
    Ok(())
}
