// Cardinal, ordinal and digit numerals.

use super::{RootRule, StateKind, SuffixForm, SuffixGraphBuilder};
use crate::error::Result;
use crate::types::{SecondaryCategory, SyntacticCategory};

const STATES: &[(&str, StateKind)] = &[
    ("NUMERAL_CARDINAL_ROOT", StateKind::Transfer),
    ("NUMERAL_CARDINAL_DERIV", StateKind::Derivational),
    ("NUMERAL_DIGIT_CARDINAL_ROOT", StateKind::Transfer),
    ("NUMERAL_ORDINAL_ROOT", StateKind::Transfer),
    ("NUMERAL_ORDINAL_DERIV", StateKind::Derivational),
];

pub(super) fn register(b: &mut SuffixGraphBuilder) -> Result<()> {
    for &(name, kind) in STATES {
        b.state(name, kind, SyntacticCategory::Numeral)?;
    }
    for (secondary, state) in [
        (SecondaryCategory::Digits, "NUMERAL_DIGIT_CARDINAL_ROOT"),
        (SecondaryCategory::Cardinal, "NUMERAL_CARDINAL_ROOT"),
        (SecondaryCategory::Ordinal, "NUMERAL_ORDINAL_ROOT"),
    ] {
        let state = b.get_state(state)?;
        b.default_state(
            RootRule::category(SyntacticCategory::Numeral).with_secondary(secondary),
            state,
        );
    }

    let cardinal_root = b.get_state("NUMERAL_CARDINAL_ROOT")?;
    let cardinal_deriv = b.get_state("NUMERAL_CARDINAL_DERIV")?;
    let digit_root = b.get_state("NUMERAL_DIGIT_CARDINAL_ROOT")?;
    let ordinal_root = b.get_state("NUMERAL_ORDINAL_ROOT")?;
    let ordinal_deriv = b.get_state("NUMERAL_ORDINAL_DERIV")?;
    let adjective_root = b.get_state("ADJECTIVE_ROOT")?;

    b.free_transition("Numeral_Free_Transition_1", cardinal_root, cardinal_deriv)?;
    b.free_transition("Numeral_Free_Transition_2", ordinal_root, ordinal_deriv)?;
    b.free_transition("Digits_Free_Transition_1", digit_root, cardinal_deriv)?;
    b.zero_transition("Numeral_Zero_Transition_1", cardinal_deriv, adjective_root)?;
    b.zero_transition("Numeral_Zero_Transition_2", ordinal_deriv, adjective_root)?;

    b.suffix("NumbersOf", None, None)?;
    b.suffix("OfUnit_Number", None, Some("OfUnit"))?;
    b.suffix("Apos_Digit", None, Some("Apos"))?;

    b.connect(
        "NUMERAL_CARDINAL_DERIV",
        "NumbersOf",
        "ADJECTIVE_ROOT",
        vec![SuffixForm::new("lArcA")],
    )?;
    b.connect(
        "NUMERAL_CARDINAL_DERIV",
        "OfUnit_Number",
        "ADJECTIVE_ROOT",
        vec![SuffixForm::new("lIk")],
    )?;
    b.connect(
        "NUMERAL_DIGIT_CARDINAL_ROOT",
        "Apos_Digit",
        "NUMERAL_CARDINAL_DERIV",
        vec![SuffixForm::new("'")],
    )?;
    Ok(())
}
