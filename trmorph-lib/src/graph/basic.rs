// Core Turkish morphotactics: nouns, verbs, adjectives, adverbs, pronouns,
// question particles and the uninflected closed classes.

use super::{RootRule, StateKind, SuffixForm, SuffixGraphBuilder};
use crate::conditions::{
    applies_to_root, comes_after, comes_after_derivation, comes_after_derivation_form, comes_after_form, comes_after_last_non_blank_derivation,
    doesnt_come_after, doesnt_come_after_derivation, doesnt_have_lexeme_attribute, followed_by,
    followed_by_derivation, followed_by_derivation_form, followed_by_form, followed_by_one_of,
    followed_by_suffix_goes_to, has_lexeme_attribute, root_has_secondary_category,
};
use crate::error::Result;
use crate::types::{LexemeAttribute, SecondaryCategory, SyntacticCategory};

use StateKind::{Derivational, Terminal, Transfer};
use SyntacticCategory::*;

const STATES: &[(&str, StateKind, SyntacticCategory)] = &[
    ("NOUN_ROOT", Transfer, Noun),
    ("NOUN_WITH_AGREEMENT", Transfer, Noun),
    ("NOUN_WITH_POSSESSION", Transfer, Noun),
    ("NOUN_WITH_CASE", Transfer, Noun),
    ("NOUN_TERMINAL_TRANSFER", Transfer, Noun),
    ("NOUN_TERMINAL", Terminal, Noun),
    ("NOUN_NOM_DERIV", Derivational, Noun),
    ("NOUN_POSSESSIVE_NOM_DERIV", Derivational, Noun),
    ("NOUN_DERIV_WITH_CASE", Derivational, Noun),
    ("NOUN_COMPOUND_ROOT", Transfer, Noun),
    ("NOUN_COMPOUND_WITH_AGREEMENT", Transfer, Noun),
    ("NOUN_COMPOUND_WITH_POSSESSION", Transfer, Noun),
    ("VERB_ROOT", Transfer, Verb),
    ("VERB_WITH_POLARITY", Transfer, Verb),
    ("VERB_WITH_TENSE", Transfer, Verb),
    ("VERB_TERMINAL", Terminal, Verb),
    ("VERB_TERMINAL_TRANSFER", Transfer, Verb),
    ("VERB_PLAIN_DERIV", Derivational, Verb),
    ("VERB_POLARITY_DERIV", Derivational, Verb),
    ("VERB_WITH_TENSE_BEFORE_DERIV", Transfer, Verb),
    ("VERB_TENSE_DERIV", Derivational, Verb),
    ("VERB_TENSE_ADJ_DERIV", Derivational, Verb),
    ("ADJECTIVE_ROOT", Transfer, Adjective),
    ("ADJECTIVE_PART_WITHOUT_POSSESSION", Transfer, Adjective),
    ("ADJECTIVE_TERMINAL", Terminal, Adjective),
    ("ADJECTIVE_TERMINAL_TRANSFER", Transfer, Adjective),
    ("ADJECTIVE_DERIV", Derivational, Adjective),
    ("ADVERB_ROOT", Transfer, Adverb),
    ("ADVERB_TERMINAL", Terminal, Adverb),
    ("ADVERB_TERMINAL_TRANSFER", Transfer, Adverb),
    ("ADVERB_DERIV", Derivational, Adverb),
    ("PRONOUN_ROOT", Transfer, Pronoun),
    ("PRONOUN_WITH_AGREEMENT", Transfer, Pronoun),
    ("PRONOUN_WITH_POSSESSION", Transfer, Pronoun),
    ("PRONOUN_WITH_CASE", Transfer, Pronoun),
    ("PRONOUN_NOM_DERIV", Derivational, Pronoun),
    ("PRONOUN_TERMINAL", Terminal, Pronoun),
    ("PRONOUN_TERMINAL_TRANSFER", Transfer, Pronoun),
    ("PRONOUN_DERIV_WITH_CASE", Derivational, Pronoun),
    ("DETERMINER_ROOT_TERMINAL", Terminal, Determiner),
    ("INTERJECTION_ROOT_TERMINAL", Terminal, Interjection),
    ("CONJUNCTION_ROOT_TERMINAL", Terminal, Conjunction),
    ("QUESTION_ROOT", Transfer, Question),
    ("QUESTION_WITH_TENSE", Transfer, Question),
    ("QUESTION_WITH_AGREEMENT", Transfer, Question),
    ("QUESTION_TERMINAL", Terminal, Question),
    ("PUNC_ROOT_TERMINAL", Terminal, Punctuation),
    ("PART_ROOT_TERMINAL", Terminal, Particle),
];

const DEFAULT_STATES: &[(SyntacticCategory, &str)] = &[
    (Noun, "NOUN_ROOT"),
    (Verb, "VERB_ROOT"),
    (Adverb, "ADVERB_ROOT"),
    (Adjective, "ADJECTIVE_ROOT"),
    (Pronoun, "PRONOUN_ROOT"),
    (Determiner, "DETERMINER_ROOT_TERMINAL"),
    (Interjection, "INTERJECTION_ROOT_TERMINAL"),
    (Conjunction, "CONJUNCTION_ROOT_TERMINAL"),
    (Punctuation, "PUNC_ROOT_TERMINAL"),
    (Particle, "PART_ROOT_TERMINAL"),
    (Question, "QUESTION_ROOT"),
];

/// (name, from, to)
const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Free_Transition_1", "NOUN_WITH_CASE", "NOUN_TERMINAL_TRANSFER"),
    ("Noun_Free_Transition_2", "NOUN_TERMINAL_TRANSFER", "NOUN_TERMINAL"),
    ("Noun_Free_Transition_3", "NOUN_WITH_CASE", "NOUN_DERIV_WITH_CASE"),
    ("Verb_Free_Transition_1", "VERB_ROOT", "VERB_PLAIN_DERIV"),
    ("Verb_Free_Transition_2", "VERB_WITH_POLARITY", "VERB_POLARITY_DERIV"),
    ("Verb_Free_Transition_3", "VERB_WITH_TENSE", "VERB_WITH_TENSE_BEFORE_DERIV"),
    ("Verb_Free_Transition_4", "VERB_WITH_TENSE_BEFORE_DERIV", "VERB_TENSE_DERIV"),
    ("Verb_Free_Transition_5", "VERB_TERMINAL_TRANSFER", "VERB_TERMINAL"),
    ("Adj_Free_Transition_1", "ADJECTIVE_ROOT", "ADJECTIVE_TERMINAL_TRANSFER"),
    ("Adj_Free_Transition_2", "ADJECTIVE_TERMINAL_TRANSFER", "ADJECTIVE_TERMINAL"),
    ("Adj_Free_Transition_3", "ADJECTIVE_ROOT", "ADJECTIVE_DERIV"),
    ("Adv_Free_Transition_1", "ADVERB_ROOT", "ADVERB_TERMINAL_TRANSFER"),
    ("Adv_Free_Transition_2", "ADVERB_TERMINAL_TRANSFER", "ADVERB_TERMINAL"),
    ("Adv_Free_Transition_3", "ADVERB_ROOT", "ADVERB_DERIV"),
    ("Pronoun_Free_Transition_1", "PRONOUN_WITH_CASE", "PRONOUN_TERMINAL_TRANSFER"),
    ("Pronoun_Free_Transition_2", "PRONOUN_TERMINAL_TRANSFER", "PRONOUN_TERMINAL"),
    ("Pronoun_Free_Transition_3", "PRONOUN_WITH_CASE", "PRONOUN_DERIV_WITH_CASE"),
    ("Question_Free_Transition_1", "QUESTION_WITH_AGREEMENT", "QUESTION_TERMINAL"),
];

const ZERO_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Adj_to_Noun_Zero_Transition", "ADJECTIVE_DERIV", "NOUN_ROOT"),
    ("Verb_to_Adj_Zero_Transition", "VERB_TENSE_ADJ_DERIV", "ADJECTIVE_ROOT"),
];

/// Groups and their members as (name, pretty name).
const GROUPED_SUFFIXES: &[(&str, &[(&str, &str)])] = &[
    ("Noun_Agreements_Group", &[("A3Sg_Noun", "A3sg"), ("A3Pl_Noun", "A3pl")]),
    (
        "Noun_Possession_Group",
        &[
            ("Pnon_Noun", "Pnon"),
            ("P1Sg_Noun", "P1sg"),
            ("P2Sg_Noun", "P2sg"),
            ("P3Sg_Noun", "P3sg"),
            ("P1Pl_Noun", "P1pl"),
            ("P2Pl_Noun", "P2pl"),
            ("P3Pl_Noun", "P3pl"),
        ],
    ),
    (
        "Noun_Case_Group",
        &[
            ("Nom_Noun", "Nom"),
            ("Nom_Deriv_Noun", "Nom"),
            ("Nom_Deriv_Possessive_Noun", "Nom"),
            ("Acc_Noun", "Acc"),
            ("Dat_Noun", "Dat"),
            ("Loc_Noun", "Loc"),
            ("Abl_Noun", "Abl"),
            ("Gen_Noun", "Gen"),
            ("Ins_Noun", "Ins"),
        ],
    ),
    (
        "Relative_Noun_Pronoun_Group",
        &[("RelPron_A3Sg_Noun", "A3sg"), ("RelPron_A3Pl_Noun", "A3pl")],
    ),
    (
        "Verb_Agreements_Group",
        &[
            ("A1Sg_Verb", "A1sg"),
            ("A2Sg_Verb", "A2sg"),
            ("A3Sg_Verb", "A3sg"),
            ("A1Pl_Verb", "A1pl"),
            ("A2Pl_Verb", "A2pl"),
            ("A3Pl_Verb", "A3pl"),
        ],
    ),
    ("Verb_Conditions_Group", &[("Neg", "Neg"), ("Pos", "Pos")]),
    (
        "Adjective_Possessions_Group",
        &[
            ("Pnon_Adj", "Pnon"),
            ("P1Sg_Adj", "P1sg"),
            ("P2Sg_Adj", "P2sg"),
            ("P3Sg_Adj", "P3sg"),
            ("P1Pl_Adj", "P1pl"),
            ("P2Pl_Adj", "P2pl"),
            ("P3Pl_Adj", "P3pl"),
        ],
    ),
    (
        "Pronoun_Agreements_Group",
        &[
            ("A1Sg_Pron", "A1sg"),
            ("A2Sg_Pron", "A2sg"),
            ("A3Sg_Pron", "A3sg"),
            ("A1Pl_Pron", "A1pl"),
            ("A2Pl_Pron", "A2pl"),
            ("A3Pl_Pron", "A3pl"),
        ],
    ),
    (
        "Pronoun_Possessions_Group",
        &[
            ("Pnon_Pron", "Pnon"),
            ("P1Sg_Pron", "P1sg"),
            ("P2Sg_Pron", "P2sg"),
            ("P3Sg_Pron", "P3sg"),
            ("P1Pl_Pron", "P1pl"),
            ("P2Pl_Pron", "P2pl"),
            ("P3Pl_Pron", "P3pl"),
        ],
    ),
    (
        "Pronoun_Case_Group",
        &[
            ("Nom_Pron", "Nom"),
            ("Nom_Pron_Deriv", "Nom"),
            ("Acc_Pron", "Acc"),
            ("Dat_Pron", "Dat"),
            ("Loc_Pron", "Loc"),
            ("Abl_Pron", "Abl"),
            ("Gen_Pron", "Gen"),
            ("Ins_Pron", "Ins"),
            ("AccordingTo", "AccordingTo"),
        ],
    ),
    (
        "Relative_Pron_Pronoun_Group",
        &[("RelPron_A3Sg_Pron", "A3sg"), ("RelPron_A3Pl_Pron", "A3pl")],
    ),
    (
        "Question_Tense_Group",
        &[("Pres_Ques", "Pres"), ("Past_Ques", "Past"), ("Narr_Ques", "Narr")],
    ),
    (
        "Question_Agreements_Group",
        &[
            ("A1Sg_Ques", "A1sg"),
            ("A2Sg_Ques", "A2sg"),
            ("A3Sg_Ques", "A3sg"),
            ("A1Pl_Ques", "A1pl"),
            ("A2Pl_Ques", "A2pl"),
            ("A3Pl_Ques", "A3pl"),
        ],
    ),
];

/// Suffixes outside any group, with an optional pretty name.
const SUFFIXES: &[(&str, Option<&str>)] = &[
    // noun to noun
    ("Dim", None),
    ("Prof", None),
    ("FitFor", None),
    ("Title", None),
    // noun to verb
    ("Acquire", None),
    // noun to adjective
    ("Agt_Noun_to_Adj", Some("Agt")),
    ("With", None),
    ("Without", None),
    ("PointQual_Noun", Some("PointQual")),
    ("JustLike_Noun", Some("JustLike")),
    ("Equ_Noun", Some("Equ")),
    ("Y", None),
    ("For", None),
    ("DurationOf", None),
    ("OfUnit_Noun", Some("OfUnit")),
    // noun to adverb
    ("InTermsOf", None),
    ("By_Pnon", Some("By")),
    ("By_Possessive", Some("By")),
    ("ManyOf", None),
    ("ForALotOfTime", None),
    // compounds
    ("A3Sg_Noun_Compound", Some("A3sg")),
    ("Pnon_Noun_Compound", Some("Pnon")),
    ("P3Sg_Noun_Compound", Some("P3sg")),
    ("P3Pl_Noun_Compound", Some("P3pl")),
    ("Nom_Noun_Compound_Deriv", Some("Nom")),
    // tenses
    ("Aor", None),
    ("Prog", None),
    ("Fut", None),
    ("Narr", None),
    ("Past", None),
    ("Pres", None),
    ("Cond", None),
    ("Imp", None),
    // modals
    ("Neces", None),
    ("Opt", None),
    ("Desr", None),
    // verb to noun
    ("Inf", None),
    ("PastPart_Noun", Some("PastPart")),
    ("FutPart_Noun", Some("FutPart")),
    // verb to verb
    ("Able", None),
    ("Pass", None),
    ("Recip", None),
    ("Hastily", None),
    // verb to adverb
    ("AfterDoingSo", None),
    ("WithoutHavingDoneSo", None),
    ("AsLongAs", None),
    ("ByDoingSo", None),
    ("When", None),
    ("SinceDoingSo", None),
    ("While", None),
    ("AsIf", None),
    ("A3Pl_Verb_For_Adv", Some("A3pl")),
    // verb to adjective
    ("PresPart", None),
    ("PastPart_Adj", Some("PastPart")),
    ("FutPart_Adj", Some("FutPart")),
    ("Agt_Verb_to_Adj", Some("Agt")),
    ("Aorist_to_Adj", Some("Aor")),
    ("Future_to_Adj", Some("Fut")),
    ("Narr_to_Adj", Some("Narr")),
    // adjective derivations
    ("JustLike_Adj", Some("JustLike")),
    ("Equ_Adj", Some("Equ")),
    ("Quite", None),
    ("Ly", None),
    ("Ness", None),
    ("Become", None),
    // pronoun and adverb derivations
    ("Without_Pron", Some("Without")),
    ("PointQual_Pron", Some("PointQual")),
    ("PointQual_Adv", Some("PointQual")),
];

fn form(template: &'static str) -> SuffixForm {
    SuffixForm::new(template)
}

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<()> {
    for &(name, kind, category) in STATES {
        b.state(name, kind, category)?;
    }
    for &(category, state) in DEFAULT_STATES {
        let state = b.get_state(state)?;
        b.default_state(RootRule::category(category), state);
    }
    let compound_root = b.get_state("NOUN_COMPOUND_ROOT")?;
    b.default_state(
        RootRule::category(Noun).with_attribute(LexemeAttribute::CompoundP3sg),
        compound_root,
    );

    for &(name, from, to) in FREE_TRANSITIONS {
        let (from, to) = (b.get_state(from)?, b.get_state(to)?);
        b.free_transition(name, from, to)?;
    }
    for &(name, from, to) in ZERO_TRANSITIONS {
        let (from, to) = (b.get_state(from)?, b.get_state(to)?);
        b.zero_transition(name, from, to)?;
    }

    for &(group_name, members) in GROUPED_SUFFIXES {
        let group = b.group(group_name)?;
        for &(name, pretty) in members {
            b.suffix(name, Some(group), Some(pretty))?;
        }
    }
    for &(name, pretty) in SUFFIXES {
        b.suffix(name, None, pretty)?;
    }
    b.repeatable_suffix("Caus", None)?;

    noun_suffixes(b)?;
    verb_suffixes(b)?;
    adjective_suffixes(b)?;
    pronoun_suffixes(b)?;
    adverb_suffixes(b)?;
    question_suffixes(b)?;
    Ok(())
}

fn noun_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    let a3sg = b.get_suffix("A3Sg_Noun")?;
    let a3pl = b.get_suffix("A3Pl_Noun")?;
    let pnon = b.get_suffix("Pnon_Noun")?;
    let p3sg = b.get_suffix("P3Sg_Noun")?;
    let p3pl = b.get_suffix("P3Pl_Noun")?;
    let a3sg_compound = b.get_suffix("A3Sg_Noun_Compound")?;
    let p3sg_compound = b.get_suffix("P3Sg_Noun_Compound")?;
    let p3pl_compound = b.get_suffix("P3Pl_Noun_Compound")?;
    let loc = b.get_suffix("Loc_Noun")?;
    let gen = b.get_suffix("Gen_Noun")?;
    let pnon_pron = b.get_suffix("Pnon_Pron")?;
    let point_qual_adv = b.get_suffix("PointQual_Adv")?;
    let point_qual_noun = b.get_suffix("PointQual_Noun")?;
    let point_qual_pron = b.get_suffix("PointQual_Pron")?;

    // agreement
    b.connect("NOUN_ROOT", "A3Sg_Noun", "NOUN_WITH_AGREEMENT", vec![form("")])?;
    b.connect("NOUN_ROOT", "A3Pl_Noun", "NOUN_WITH_AGREEMENT", vec![form("lAr")])?;

    // possession
    let after_point_qual = comes_after_last_non_blank_derivation(point_qual_adv)
        | comes_after_last_non_blank_derivation(point_qual_noun)
        | comes_after_last_non_blank_derivation(point_qual_pron);
    let not_after_point_qual = !after_point_qual.clone();
    b.connect("NOUN_WITH_AGREEMENT", "Pnon_Noun", "NOUN_WITH_POSSESSION", vec![form("")])?;
    for (suffix, template) in [
        ("P1Sg_Noun", "+Im"),
        ("P2Sg_Noun", "+In"),
        ("P3Sg_Noun", "+sI"),
        ("P1Pl_Noun", "+ImIz"),
        ("P2Pl_Noun", "+InIz"),
    ] {
        b.connect(
            "NOUN_WITH_AGREEMENT",
            suffix,
            "NOUN_WITH_POSSESSION",
            vec![form(template).pre(not_after_point_qual.clone())],
        )?;
    }
    b.connect(
        "NOUN_WITH_AGREEMENT",
        "P3Pl_Noun",
        "NOUN_WITH_POSSESSION",
        vec![
            form("lArI!").pre(not_after_point_qual.clone()),
            form("I!").pre(comes_after(a3pl) & not_after_point_qual),
        ],
    )?;

    // case
    let after_p3 = comes_after(p3sg) | comes_after(p3pl) | comes_after(p3sg_compound) | comes_after(p3pl_compound);
    let point_qual_a3sg = after_point_qual.clone() & (comes_after(a3sg) | comes_after(a3sg_compound));
    let point_qual_a3pl = after_point_qual & comes_after(a3pl);
    let plain = (!after_p3.clone() & !point_qual_a3sg.clone()) | point_qual_a3pl;
    let pronominal = after_p3 | point_qual_a3sg;

    b.connect("NOUN_WITH_POSSESSION", "Nom_Noun", "NOUN_WITH_CASE", vec![form("")])?;
    b.connect(
        "NOUN_WITH_POSSESSION",
        "Nom_Deriv_Noun",
        "NOUN_NOM_DERIV",
        vec![form("").pre(comes_after(pnon))],
    )?;
    b.connect(
        "NOUN_WITH_POSSESSION",
        "Nom_Deriv_Possessive_Noun",
        "NOUN_POSSESSIVE_NOM_DERIV",
        vec![form("").pre(doesnt_come_after(pnon))],
    )?;
    for (suffix, plain_template, pronominal_template) in [
        ("Acc_Noun", "+yI", "nI"),
        ("Dat_Noun", "+yA", "nA"),
        ("Loc_Noun", "dA", "ndA"),
        ("Abl_Noun", "dAn", "ndAn"),
    ] {
        b.connect(
            "NOUN_WITH_POSSESSION",
            suffix,
            "NOUN_WITH_CASE",
            vec![
                form(plain_template).pre(plain.clone()),
                form(pronominal_template).pre(pronominal.clone()),
            ],
        )?;
    }
    b.connect("NOUN_WITH_POSSESSION", "Gen_Noun", "NOUN_WITH_CASE", vec![form("+nIn")])?;
    b.connect("NOUN_WITH_POSSESSION", "Ins_Noun", "NOUN_WITH_CASE", vec![form("+ylA")])?;

    // noun to noun
    b.connect("NOUN_NOM_DERIV", "Dim", "NOUN_ROOT", vec![form("cIk")])?;
    b.connect("NOUN_NOM_DERIV", "Prof", "NOUN_ROOT", vec![form("lIk")])?;
    b.connect("NOUN_NOM_DERIV", "FitFor", "NOUN_ROOT", vec![form("lIk")])?;
    b.connect("NOUN_NOM_DERIV", "Title", "NOUN_ROOT", vec![form("lIk")])?;

    // noun to verb
    b.connect("NOUN_NOM_DERIV", "Acquire", "VERB_ROOT", vec![form("lAn")])?;

    // noun to adjective
    b.connect("NOUN_NOM_DERIV", "Agt_Noun_to_Adj", "ADJECTIVE_ROOT", vec![form("cI")])?;
    b.connect("NOUN_NOM_DERIV", "With", "ADJECTIVE_ROOT", vec![form("lI")])?;
    b.connect(
        "NOUN_NOM_DERIV",
        "Without",
        "ADJECTIVE_ROOT",
        vec![form("sIz").pre(doesnt_come_after(a3pl))],
    )?;
    b.connect("NOUN_NOM_DERIV", "JustLike_Noun", "ADJECTIVE_ROOT", vec![form("+ImsI")])?;
    b.connect("NOUN_NOM_DERIV", "Equ_Noun", "ADJECTIVE_ROOT", vec![form("cA")])?;
    for suffix in ["Y", "For", "DurationOf", "OfUnit_Noun"] {
        b.connect("NOUN_NOM_DERIV", suffix, "ADJECTIVE_ROOT", vec![form("lIk")])?;
    }
    b.connect(
        "NOUN_DERIV_WITH_CASE",
        "PointQual_Noun",
        "ADJECTIVE_ROOT",
        vec![form("ki").pre(comes_after(loc))],
    )?;

    // noun to adverb
    b.connect("NOUN_NOM_DERIV", "InTermsOf", "ADVERB_ROOT", vec![form("cA")])?;
    b.connect("NOUN_NOM_DERIV", "By_Pnon", "ADVERB_ROOT", vec![form("cA")])?;
    b.connect("NOUN_POSSESSIVE_NOM_DERIV", "By_Possessive", "ADVERB_ROOT", vec![form("ncA")])?;
    b.connect("NOUN_NOM_DERIV", "ManyOf", "ADVERB_ROOT", vec![form("lArcA")])?;
    b.connect(
        "NOUN_NOM_DERIV",
        "ForALotOfTime",
        "ADVERB_ROOT",
        vec![form("lArcA").pre(root_has_secondary_category(SecondaryCategory::Time))],
    )?;

    // noun to pronoun
    for (suffix, template) in [("RelPron_A3Sg_Noun", "ki"), ("RelPron_A3Pl_Noun", "kiler")] {
        b.connect(
            "NOUN_DERIV_WITH_CASE",
            suffix,
            "PRONOUN_WITH_AGREEMENT",
            vec![form(template).pre(comes_after(gen)).post(followed_by(pnon_pron))],
        )?;
    }

    // compounds
    b.connect(
        "NOUN_COMPOUND_ROOT",
        "A3Sg_Noun_Compound",
        "NOUN_COMPOUND_WITH_AGREEMENT",
        vec![form("")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "P3Sg_Noun_Compound",
        "NOUN_WITH_POSSESSION",
        vec![form("+sI")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "P3Pl_Noun_Compound",
        "NOUN_WITH_POSSESSION",
        vec![form("lArI!")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_AGREEMENT",
        "Pnon_Noun_Compound",
        "NOUN_COMPOUND_WITH_POSSESSION",
        vec![form("")],
    )?;
    b.connect(
        "NOUN_COMPOUND_WITH_POSSESSION",
        "Nom_Noun_Compound_Deriv",
        "NOUN_NOM_DERIV",
        vec![form("")],
    )?;
    Ok(())
}

fn verb_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    let neg = b.get_suffix("Neg")?;
    let aor = b.get_suffix("Aor")?;
    let prog = b.get_suffix("Prog")?;
    let fut = b.get_suffix("Fut")?;
    let narr = b.get_suffix("Narr")?;
    let past = b.get_suffix("Past")?;
    let imp = b.get_suffix("Imp")?;
    let opt = b.get_suffix("Opt")?;
    let able = b.get_suffix("Able")?;
    let caus = b.get_suffix("Caus")?;
    let a1sg = b.get_suffix("A1Sg_Verb")?;
    let a2sg = b.get_suffix("A2Sg_Verb")?;
    let a3sg = b.get_suffix("A3Sg_Verb")?;
    let a1pl = b.get_suffix("A1Pl_Verb")?;
    let a2pl = b.get_suffix("A2Pl_Verb")?;
    let a3pl = b.get_suffix("A3Pl_Verb")?;
    let agreement_group = [a1sg, a2sg, a3sg, a1pl, a2pl, a3pl];

    // polarity
    b.connect(
        "VERB_ROOT",
        "Neg",
        "VERB_WITH_POLARITY",
        vec![
            form("m").post(!followed_by_suffix_goes_to(Derivational)),
            form("mA"),
        ],
    )?;
    b.connect("VERB_ROOT", "Pos", "VERB_WITH_POLARITY", vec![form("")])?;

    // tenses
    let followed_by_a1 = followed_by_form(a1sg, "+Im") | followed_by_form(a1pl, "yIz");
    b.form(
        aor,
        form("+Ir").pre(has_lexeme_attribute(LexemeAttribute::AoristI) & doesnt_come_after(neg)),
    )?;
    b.form(aor, form("+Ar").pre(doesnt_come_after(neg)))?;
    b.form(aor, form("z").pre(comes_after(neg)).post(!followed_by_a1.clone()))?;
    b.form(aor, form("").pre(comes_after(neg)).post(followed_by_a1))?;
    b.form(prog, "Iyor")?;
    b.form(prog, "mAktA")?;
    b.form(fut, "+yAcAk")?;
    b.form(narr, "mIş")?;
    b.form(narr, "ymIş")?;
    b.form(past, "dI")?;
    b.form(past, "ydI")?;
    let cond = b.get_suffix("Cond")?;
    b.form(cond, "+ysA")?;
    b.form(
        imp,
        form("").post(followed_by(a2sg) | followed_by(a3sg) | followed_by(a2pl) | followed_by(a3pl)),
    )?;
    b.form(imp, form("sAnA").post(followed_by(a2sg)))?;
    b.form(imp, form("sAnIzA").post(followed_by(a2pl)))?;
    let pres = b.get_suffix("Pres")?;
    b.form(pres, "")?;

    for tense in ["Aor", "Prog", "Fut", "Narr", "Past", "Cond", "Imp"] {
        b.connect("VERB_WITH_POLARITY", tense, "VERB_WITH_TENSE", vec![])?;
    }
    for tense in ["Cond", "Narr", "Past"] {
        b.connect("VERB_WITH_TENSE", tense, "VERB_WITH_TENSE", vec![])?;
    }

    // agreement
    let after_imp = comes_after(imp);
    let after_empty_imp = comes_after_form(imp, "");
    b.connect(
        "VERB_WITH_TENSE",
        "A1Sg_Verb",
        "VERB_TERMINAL_TRANSFER",
        vec![form("+Im"), form("yIm")],
    )?;
    b.connect(
        "VERB_WITH_TENSE",
        "A2Sg_Verb",
        "VERB_TERMINAL_TRANSFER",
        vec![
            form("n").pre(!after_imp.clone() & doesnt_come_after(opt)),
            form("sIn").pre(!after_imp.clone()),
            form("").pre(after_imp.clone()),
        ],
    )?;
    b.connect(
        "VERB_WITH_TENSE",
        "A3Sg_Verb",
        "VERB_TERMINAL_TRANSFER",
        vec![form("").pre(!after_imp.clone()), form("sIn").pre(after_imp.clone())],
    )?;
    b.connect(
        "VERB_WITH_TENSE",
        "A1Pl_Verb",
        "VERB_TERMINAL_TRANSFER",
        vec![
            form("+Iz").pre(doesnt_come_after(opt)),
            form("k").pre(doesnt_come_after(opt)),
            form("yIz").pre(doesnt_come_after(opt)),
            form("lIm").pre(comes_after(opt)),
        ],
    )?;
    b.connect(
        "VERB_WITH_TENSE",
        "A2Pl_Verb",
        "VERB_TERMINAL_TRANSFER",
        vec![
            form("").pre(after_imp.clone() & !after_empty_imp.clone()),
            form("sInIz").pre(!after_imp.clone()),
            form("nIz").pre(!after_imp.clone()),
            form("+yIn").pre(after_empty_imp.clone()),
            form("+yInIz").pre(after_empty_imp),
        ],
    )?;
    b.connect(
        "VERB_WITH_TENSE",
        "A3Pl_Verb",
        "VERB_TERMINAL_TRANSFER",
        vec![form("lAr").pre(!after_imp.clone()), form("sInlAr").pre(after_imp)],
    )?;

    // modals
    let modal_followers = followed_by(past) | followed_by(narr) | followed_by_one_of(&agreement_group);
    b.connect("VERB_WITH_POLARITY", "Neces", "VERB_WITH_TENSE", vec![form("mAlI!")])?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Opt",
        "VERB_WITH_TENSE",
        vec![
            form("Ay"),
            form("A").pre(doesnt_come_after(neg)).post(modal_followers.clone()),
            form("yAy"),
            form("yA").post(modal_followers),
        ],
    )?;
    b.connect("VERB_WITH_POLARITY", "Desr", "VERB_WITH_TENSE", vec![form("sA")])?;

    // verb to verb
    b.connect(
        "VERB_PLAIN_DERIV",
        "Able",
        "VERB_ROOT",
        vec![
            form("+yAbil").post(!followed_by(neg)),
            form("+yA").post(followed_by(neg)),
        ],
    )?;
    b.connect("VERB_POLARITY_DERIV", "Hastily", "VERB_ROOT", vec![form("+yIver")])?;
    let passive_il = has_lexeme_attribute(LexemeAttribute::PassiveIl)
        | (doesnt_have_lexeme_attribute(LexemeAttribute::PassiveIn)
            & doesnt_have_lexeme_attribute(LexemeAttribute::PassiveInIl));
    b.connect(
        "VERB_PLAIN_DERIV",
        "Pass",
        "VERB_ROOT",
        vec![
            form("+In").pre(has_lexeme_attribute(LexemeAttribute::PassiveIn)),
            form("+nIl").pre(passive_il),
            form("+InIl").pre(has_lexeme_attribute(LexemeAttribute::PassiveInIl)),
        ],
    )?;
    b.connect(
        "VERB_PLAIN_DERIV",
        "Recip",
        "VERB_ROOT",
        vec![form("+Iş")
            .post_derivation(!followed_by_derivation(caus) | followed_by_derivation_form(caus, "dIr"))],
    )?;
    b.connect(
        "VERB_PLAIN_DERIV",
        "Caus",
        "VERB_ROOT",
        vec![
            form("t").pre(
                has_lexeme_attribute(LexemeAttribute::CausativeT)
                    & !comes_after_derivation_form(caus, "t")
                    & !comes_after_derivation_form(caus, "It"),
            ),
            form("Ir").pre(has_lexeme_attribute(LexemeAttribute::CausativeIr) & doesnt_come_after_derivation(able)),
            form("It").pre(has_lexeme_attribute(LexemeAttribute::CausativeIt) & doesnt_come_after_derivation(able)),
            form("Ar").pre(has_lexeme_attribute(LexemeAttribute::CausativeAr) & doesnt_come_after_derivation(able)),
            form("dIr").pre(has_lexeme_attribute(LexemeAttribute::CausativeDIr)),
        ],
    )?;

    // verb to noun
    b.connect(
        "VERB_POLARITY_DERIV",
        "Inf",
        "NOUN_ROOT",
        vec![form("mAk"), form("mA"), form("+yIş")],
    )?;
    b.connect("VERB_POLARITY_DERIV", "PastPart_Noun", "NOUN_ROOT", vec![form("dIk")])?;
    b.connect("VERB_POLARITY_DERIV", "FutPart_Noun", "NOUN_ROOT", vec![form("+yAcAk")])?;

    // verb to adverb
    b.connect("VERB_POLARITY_DERIV", "AfterDoingSo", "ADVERB_ROOT", vec![form("+yIp")])?;
    b.connect(
        "VERB_POLARITY_DERIV",
        "WithoutHavingDoneSo",
        "ADVERB_ROOT",
        vec![form("mAdAn"), form("mAksIzIn")],
    )?;
    b.connect("VERB_POLARITY_DERIV", "AsLongAs", "ADVERB_ROOT", vec![form("dIkçA")])?;
    b.connect("VERB_POLARITY_DERIV", "ByDoingSo", "ADVERB_ROOT", vec![form("+yArAk")])?;
    b.connect("VERB_POLARITY_DERIV", "When", "ADVERB_ROOT", vec![form("+yIncA")])?;
    b.connect("VERB_POLARITY_DERIV", "SinceDoingSo", "ADVERB_ROOT", vec![form("+yAlI!")])?;
    b.connect(
        "VERB_WITH_TENSE_BEFORE_DERIV",
        "A3Pl_Verb_For_Adv",
        "VERB_TENSE_DERIV",
        vec![form("lAr")],
    )?;
    b.connect("VERB_TENSE_DERIV", "While", "ADVERB_ROOT", vec![form("ken")])?;
    b.connect(
        "VERB_TENSE_DERIV",
        "AsIf",
        "ADVERB_ROOT",
        vec![form("cAsI!nA").pre(comes_after(aor) | comes_after(prog) | comes_after(fut) | comes_after(narr))],
    )?;

    // verb to adjective
    b.connect("VERB_POLARITY_DERIV", "PresPart", "ADJECTIVE_ROOT", vec![form("+yAn")])?;
    b.connect(
        "VERB_POLARITY_DERIV",
        "PastPart_Adj",
        "ADJECTIVE_PART_WITHOUT_POSSESSION",
        vec![form("dIk")],
    )?;
    b.connect(
        "VERB_POLARITY_DERIV",
        "FutPart_Adj",
        "ADJECTIVE_PART_WITHOUT_POSSESSION",
        vec![form("+yAcAk")],
    )?;
    b.connect("VERB_POLARITY_DERIV", "Agt_Verb_to_Adj", "ADJECTIVE_ROOT", vec![form("+yIcI")])?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Aorist_to_Adj",
        "VERB_TENSE_ADJ_DERIV",
        vec![
            form("+Ir").pre(has_lexeme_attribute(LexemeAttribute::AoristI)),
            form("+Ar"),
            form("z").pre(comes_after(neg)),
        ],
    )?;
    b.connect("VERB_WITH_POLARITY", "Future_to_Adj", "VERB_TENSE_ADJ_DERIV", vec![form("+yAcAk")])?;
    b.connect(
        "VERB_WITH_POLARITY",
        "Narr_to_Adj",
        "VERB_TENSE_ADJ_DERIV",
        vec![form("mIş"), form("ymIş")],
    )?;
    Ok(())
}

fn adjective_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    b.connect("ADJECTIVE_DERIV", "JustLike_Adj", "ADJECTIVE_ROOT", vec![form("+ImsI")])?;
    b.connect("ADJECTIVE_DERIV", "Equ_Adj", "ADJECTIVE_ROOT", vec![form("cA")])?;
    b.connect("ADJECTIVE_DERIV", "Quite", "ADJECTIVE_ROOT", vec![form("cA")])?;
    b.connect("ADJECTIVE_DERIV", "Ly", "ADVERB_ROOT", vec![form("cA")])?;
    b.connect("ADJECTIVE_DERIV", "Ness", "NOUN_ROOT", vec![form("lIk")])?;
    b.connect("ADJECTIVE_DERIV", "Become", "VERB_ROOT", vec![form("lAş")])?;

    for (suffix, template) in [
        ("Pnon_Adj", ""),
        ("P1Sg_Adj", "+Im"),
        ("P2Sg_Adj", "+In"),
        ("P3Sg_Adj", "+sI"),
        ("P1Pl_Adj", "+ImIz"),
        ("P2Pl_Adj", "+InIz"),
        ("P3Pl_Adj", "lArI!"),
    ] {
        b.connect(
            "ADJECTIVE_PART_WITHOUT_POSSESSION",
            suffix,
            "ADJECTIVE_TERMINAL_TRANSFER",
            vec![form(template)],
        )?;
    }
    Ok(())
}

fn pronoun_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    let a3sg = b.get_suffix("A3Sg_Pron")?;
    let a3pl = b.get_suffix("A3Pl_Pron")?;
    let pnon = b.get_suffix("Pnon_Pron")?;
    let p3sg = b.get_suffix("P3Sg_Pron")?;
    let p3pl = b.get_suffix("P3Pl_Pron")?;
    let loc = b.get_suffix("Loc_Pron")?;
    let gen = b.get_suffix("Gen_Pron")?;
    let rel_noun = b.get_suffix("RelPron_A3Sg_Noun")?;
    let rel_pron = b.get_suffix("RelPron_A3Sg_Pron")?;

    // Personal agreements are only reachable through predefined paths.
    for suffix in ["A1Sg_Pron", "A2Sg_Pron", "A1Pl_Pron", "A2Pl_Pron"] {
        b.connect("PRONOUN_ROOT", suffix, "PRONOUN_WITH_AGREEMENT", vec![])?;
    }
    b.connect("PRONOUN_ROOT", "A3Sg_Pron", "PRONOUN_WITH_AGREEMENT", vec![form("")])?;
    b.connect("PRONOUN_ROOT", "A3Pl_Pron", "PRONOUN_WITH_AGREEMENT", vec![form("lAr")])?;

    for (suffix, template) in [
        ("Pnon_Pron", ""),
        ("P1Sg_Pron", "+Im"),
        ("P2Sg_Pron", "+In"),
        ("P3Sg_Pron", "+sI"),
        ("P1Pl_Pron", "+ImIz"),
        ("P2Pl_Pron", "+InIz"),
    ] {
        b.connect("PRONOUN_WITH_AGREEMENT", suffix, "PRONOUN_WITH_POSSESSION", vec![form(template)])?;
    }
    b.connect(
        "PRONOUN_WITH_AGREEMENT",
        "P3Pl_Pron",
        "PRONOUN_WITH_POSSESSION",
        vec![form("lArI!"), form("I!").pre(comes_after(a3pl))],
    )?;

    let after_p3 = comes_after(p3sg) | comes_after(p3pl) | comes_after_derivation(rel_noun) | comes_after_derivation(rel_pron);
    b.connect("PRONOUN_WITH_POSSESSION", "Nom_Pron", "PRONOUN_WITH_CASE", vec![form("")])?;
    b.connect(
        "PRONOUN_WITH_POSSESSION",
        "Nom_Pron_Deriv",
        "PRONOUN_NOM_DERIV",
        vec![form("").pre(comes_after(pnon))],
    )?;
    for (suffix, plain_template, pronominal_template) in [
        ("Acc_Pron", "+yI", "nI"),
        ("Dat_Pron", "+yA", "nA"),
        ("Loc_Pron", "dA", "ndA"),
        ("Abl_Pron", "dAn", "ndAn"),
    ] {
        b.connect(
            "PRONOUN_WITH_POSSESSION",
            suffix,
            "PRONOUN_WITH_CASE",
            vec![
                form(plain_template).pre(!after_p3.clone()),
                form(pronominal_template).pre(after_p3.clone()),
            ],
        )?;
    }
    b.connect("PRONOUN_WITH_POSSESSION", "Gen_Pron", "PRONOUN_WITH_CASE", vec![form("+nIn")])?;
    b.connect("PRONOUN_WITH_POSSESSION", "Ins_Pron", "PRONOUN_WITH_CASE", vec![form("+ylA")])?;
    b.connect("PRONOUN_WITH_POSSESSION", "AccordingTo", "PRONOUN_WITH_CASE", vec![form("cA")])?;

    // pronoun to adjective
    let demonstrative = applies_to_root("o") | applies_to_root("bu") | applies_to_root("şu");
    let demonstrative_pnon = comes_after(a3sg) & comes_after(pnon) & demonstrative;
    b.connect(
        "PRONOUN_NOM_DERIV",
        "Without_Pron",
        "ADJECTIVE_ROOT",
        vec![
            form("sIz").pre(!demonstrative_pnon.clone()),
            form("nsuz").pre(demonstrative_pnon),
        ],
    )?;
    b.connect(
        "PRONOUN_DERIV_WITH_CASE",
        "PointQual_Pron",
        "ADJECTIVE_ROOT",
        vec![form("ki").pre(comes_after(loc))],
    )?;

    // pronoun to pronoun
    for (suffix, template) in [("RelPron_A3Sg_Pron", "ki"), ("RelPron_A3Pl_Pron", "kiler")] {
        b.connect(
            "PRONOUN_DERIV_WITH_CASE",
            suffix,
            "PRONOUN_WITH_AGREEMENT",
            vec![form(template).pre(comes_after(gen)).post(followed_by(pnon))],
        )?;
    }
    Ok(())
}

fn adverb_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    let takes_ku = applies_to_root("bugün") | applies_to_root("dün") | applies_to_root("gün") | applies_to_root("öbür");
    b.connect(
        "ADVERB_DERIV",
        "PointQual_Adv",
        "ADJECTIVE_ROOT",
        vec![form("ki").pre(!takes_ku.clone()), form("kü").pre(takes_ku)],
    )?;
    Ok(())
}

/// Question particle suffixes have no forms of their own; every surface is
/// a predefined path.
fn question_suffixes(b: &mut SuffixGraphBuilder) -> Result<()> {
    for tense in ["Pres_Ques", "Narr_Ques", "Past_Ques"] {
        b.connect("QUESTION_ROOT", tense, "QUESTION_WITH_TENSE", vec![])?;
    }
    for agreement in ["A1Sg_Ques", "A2Sg_Ques", "A3Sg_Ques", "A1Pl_Ques", "A2Pl_Ques", "A3Pl_Ques"] {
        b.connect("QUESTION_WITH_TENSE", agreement, "QUESTION_WITH_AGREEMENT", vec![])?;
    }
    Ok(())
}
