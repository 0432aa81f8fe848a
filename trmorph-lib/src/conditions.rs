// Conditions attached to suffix forms.
//
// A condition looks at a parse token's history: which suffixes were applied
// since the last derivation, what the last derivation was, what the root
// is. Conditions compose with `&`, `|` and `!`.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::graph::{StateKind, SuffixId};
use crate::token::{ParseToken, Transition};
use crate::types::{LexemeAttribute, LexemeAttributes, SecondaryCategory};

#[derive(Debug, Clone, PartialEq)]
pub enum SuffixCondition {
    AlwaysTrue,
    AlwaysFalse,
    And(Vec<SuffixCondition>),
    Or(Vec<SuffixCondition>),
    Not(Box<SuffixCondition>),
    /// The suffix (optionally with this exact template) was applied since
    /// the last derivation.
    ComesAfter {
        suffix: SuffixId,
        form: Option<&'static str>,
    },
    /// The last derivational transition used this suffix (and template,
    /// when one is given).
    ComesAfterDerivation {
        suffix: SuffixId,
        form: Option<&'static str>,
    },
    /// Like `ComesAfterDerivation`, ignoring derivations with an empty
    /// template.
    HasLastNonBlankDerivation {
        suffix: SuffixId,
        form: Option<&'static str>,
    },
    AppliesToRoot(&'static str),
    /// The last transition ends in a state of this kind.
    LastSuffixGoesTo(StateKind),
    HasLexemeAttributes(LexemeAttributes),
    DoesntHaveLexemeAttributes(LexemeAttributes),
    RootHasSecondaryCategory(SecondaryCategory),
}

impl SuffixCondition {
    pub fn is_satisfied_by(&self, token: &ParseToken<'_>) -> bool {
        match self {
            SuffixCondition::AlwaysTrue => true,
            SuffixCondition::AlwaysFalse => false,
            SuffixCondition::And(conditions) => conditions.iter().all(|c| c.is_satisfied_by(token)),
            SuffixCondition::Or(conditions) => conditions.iter().any(|c| c.is_satisfied_by(token)),
            SuffixCondition::Not(condition) => !condition.is_satisfied_by(token),
            SuffixCondition::ComesAfter { suffix, form } => {
                let since = token.transitions_since_derivation();
                if since.is_empty() {
                    return false;
                }
                since.iter().any(|t| matches_suffix(t, *suffix, *form))
            }
            SuffixCondition::ComesAfterDerivation { suffix, form } => token
                .last_derivation_transition()
                .is_some_and(|t| matches_suffix(t, *suffix, form.filter(|f| !f.is_empty()))),
            SuffixCondition::HasLastNonBlankDerivation { suffix, form } => token
                .last_non_blank_derivation()
                .is_some_and(|t| matches_suffix(t, *suffix, *form)),
            SuffixCondition::AppliesToRoot(spelling) => token.root().spelling == *spelling,
            SuffixCondition::LastSuffixGoesTo(kind) => {
                token.last_transition().is_some_and(|t| t.to.kind == *kind)
            }
            SuffixCondition::HasLexemeAttributes(attributes) => {
                if has_visible_suffix(token) {
                    return true;
                }
                let own = &token.root().item.attributes;
                !own.is_empty() && attributes.iter().all(|a| own.contains(a))
            }
            SuffixCondition::DoesntHaveLexemeAttributes(attributes) => {
                if has_visible_suffix(token) {
                    return true;
                }
                let own = &token.root().item.attributes;
                own.is_empty() || !attributes.iter().any(|a| own.contains(a))
            }
            SuffixCondition::RootHasSecondaryCategory(secondary) => {
                token.root().secondary() == Some(*secondary)
            }
        }
    }
}

fn matches_suffix(transition: &Transition<'_>, suffix: SuffixId, form: Option<&str>) -> bool {
    transition.suffix.id == suffix && form.is_none_or(|f| transition.template == f)
}

/// Lexical attributes stop mattering once a real suffix is written out.
fn has_visible_suffix(token: &ParseToken<'_>) -> bool {
    token.transitions().iter().any(|t| {
        !t.suffix.is_free_transition() && !t.suffix.is_zero_transition() && !t.actual.is_empty()
    })
}

impl BitAnd for SuffixCondition {
    type Output = SuffixCondition;

    fn bitand(self, rhs: SuffixCondition) -> SuffixCondition {
        match self {
            SuffixCondition::And(mut conditions) => {
                conditions.push(rhs);
                SuffixCondition::And(conditions)
            }
            lhs => SuffixCondition::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for SuffixCondition {
    type Output = SuffixCondition;

    fn bitor(self, rhs: SuffixCondition) -> SuffixCondition {
        match self {
            SuffixCondition::Or(mut conditions) => {
                conditions.push(rhs);
                SuffixCondition::Or(conditions)
            }
            lhs => SuffixCondition::Or(vec![lhs, rhs]),
        }
    }
}

impl Not for SuffixCondition {
    type Output = SuffixCondition;

    fn not(self) -> SuffixCondition {
        SuffixCondition::Not(Box::new(self))
    }
}

impl fmt::Display for SuffixCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixCondition::AlwaysTrue => f.write_str("true"),
            SuffixCondition::AlwaysFalse => f.write_str("false"),
            SuffixCondition::And(conditions) => write_joined(f, conditions, "&"),
            SuffixCondition::Or(conditions) => write_joined(f, conditions, "|"),
            SuffixCondition::Not(condition) => write!(f, "~{condition}"),
            SuffixCondition::ComesAfter { suffix, form } => write!(f, "comes_after({suffix:?}, {form:?})"),
            SuffixCondition::ComesAfterDerivation { suffix, form } => {
                write!(f, "comes_after_derivation({suffix:?}, {form:?})")
            }
            SuffixCondition::HasLastNonBlankDerivation { suffix, form } => {
                write!(f, "last_non_blank_derivation({suffix:?}, {form:?})")
            }
            SuffixCondition::AppliesToRoot(spelling) => write!(f, "applies_to_root({spelling})"),
            SuffixCondition::LastSuffixGoesTo(kind) => write!(f, "goes_to({kind:?})"),
            SuffixCondition::HasLexemeAttributes(a) => write!(f, "has_lexeme_attributes({a:?})"),
            SuffixCondition::DoesntHaveLexemeAttributes(a) => write!(f, "doesnt_have_lexeme_attributes({a:?})"),
            SuffixCondition::RootHasSecondaryCategory(s) => write!(f, "root_has_secondary({s})"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, conditions: &[SuffixCondition], op: &str) -> fmt::Result {
    for (i, c) in conditions.iter().enumerate() {
        if i > 0 {
            write!(f, " {op} ")?;
        }
        write!(f, "({c})")?;
    }
    Ok(())
}

// Preconditions.

pub fn comes_after(suffix: SuffixId) -> SuffixCondition {
    SuffixCondition::ComesAfter { suffix, form: None }
}

pub fn comes_after_form(suffix: SuffixId, form: &'static str) -> SuffixCondition {
    SuffixCondition::ComesAfter {
        suffix,
        form: Some(form),
    }
}

pub fn doesnt_come_after(suffix: SuffixId) -> SuffixCondition {
    !comes_after(suffix)
}

pub fn comes_after_derivation(suffix: SuffixId) -> SuffixCondition {
    SuffixCondition::ComesAfterDerivation { suffix, form: None }
}

pub fn comes_after_derivation_form(suffix: SuffixId, form: &'static str) -> SuffixCondition {
    SuffixCondition::ComesAfterDerivation {
        suffix,
        form: Some(form),
    }
}

pub fn doesnt_come_after_derivation(suffix: SuffixId) -> SuffixCondition {
    !comes_after_derivation(suffix)
}

pub fn comes_after_last_non_blank_derivation(suffix: SuffixId) -> SuffixCondition {
    SuffixCondition::HasLastNonBlankDerivation { suffix, form: None }
}

pub fn applies_to_root(spelling: &'static str) -> SuffixCondition {
    SuffixCondition::AppliesToRoot(spelling)
}

pub fn root_has_secondary_category(secondary: SecondaryCategory) -> SuffixCondition {
    SuffixCondition::RootHasSecondaryCategory(secondary)
}

pub fn has_lexeme_attribute(attribute: LexemeAttribute) -> SuffixCondition {
    SuffixCondition::HasLexemeAttributes(LexemeAttributes::from([attribute]))
}

pub fn doesnt_have_lexeme_attribute(attribute: LexemeAttribute) -> SuffixCondition {
    SuffixCondition::DoesntHaveLexemeAttributes(LexemeAttributes::from([attribute]))
}

// Postconditions. These are checked on the token after the next suffix was
// applied, so "comes after" reads as "is followed by".

pub fn followed_by(suffix: SuffixId) -> SuffixCondition {
    comes_after(suffix)
}

pub fn followed_by_form(suffix: SuffixId, form: &'static str) -> SuffixCondition {
    comes_after_form(suffix, form)
}

pub fn followed_by_derivation(suffix: SuffixId) -> SuffixCondition {
    comes_after_derivation(suffix)
}

pub fn followed_by_derivation_form(suffix: SuffixId, form: &'static str) -> SuffixCondition {
    comes_after_derivation_form(suffix, form)
}

pub fn followed_by_one_of(suffixes: &[SuffixId]) -> SuffixCondition {
    suffixes
        .iter()
        .fold(SuffixCondition::AlwaysFalse, |acc, &s| acc | followed_by(s))
}

pub fn followed_by_suffix_goes_to(kind: StateKind) -> SuffixCondition {
    SuffixCondition::LastSuffixGoesTo(kind)
}
