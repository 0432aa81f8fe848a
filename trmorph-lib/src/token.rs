// Parse tokens: a root, the transitions applied to it so far and the part
// of the input still to be consumed.
//
// Tokens are cloned at every branch of the search. Transitions live in an
// Arc-linked list so a clone shares its whole history with its parent and
// only the new tail is allocated.

use std::fmt;
use std::sync::Arc;

use crate::graph::{GroupId, State, Suffix, SuffixForm};
use crate::phonetics::attributes_with_lexeme;
use crate::types::{
    LexemeAttribute, LexemeAttributes, PhoneticAttributes, PhoneticExpectations, Root, SecondaryCategory,
    SyntacticCategory,
};

/// One applied suffix.
#[derive(Debug, Clone)]
pub struct Transition<'g> {
    pub from: &'g State,
    pub to: &'g State,
    pub suffix: &'g Suffix,
    /// The graph form that was applied. `None` for literal forms written
    /// into predefined paths and for intermediate steps they discover.
    pub form: Option<&'g SuffixForm>,
    pub template: &'static str,
    /// The slice of the input this transition consumed.
    pub actual: String,
    /// The template after harmony was resolved.
    pub fitting: String,
}

impl Transition<'_> {
    pub fn is_derivational(&self) -> bool {
        self.from.is_derivational()
    }
}

#[derive(Debug)]
struct Link<'g> {
    transition: Transition<'g>,
    previous: Option<Arc<Link<'g>>>,
}

#[derive(Clone)]
pub struct ParseToken<'g> {
    root: Arc<Root>,
    root_state: &'g State,
    so_far: String,
    remaining: String,
    last: Option<Arc<Link<'g>>>,
    len: usize,
    expectations: PhoneticExpectations,
}

impl<'g> ParseToken<'g> {
    /// A token that has consumed exactly the root's spelling.
    pub fn new(root: Arc<Root>, root_state: &'g State, remaining: &str) -> Self {
        Self {
            so_far: root.spelling.clone(),
            expectations: root.expectations.clone(),
            root,
            root_state,
            remaining: remaining.to_string(),
            last: None,
            len: 0,
        }
    }

    pub fn root(&self) -> &Arc<Root> {
        &self.root
    }

    pub fn root_state(&self) -> &'g State {
        self.root_state
    }

    /// Root spelling plus every consumed suffix.
    pub fn so_far(&self) -> &str {
        &self.so_far
    }

    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    pub fn set_remaining(&mut self, remaining: &str) {
        self.remaining = remaining.to_string();
    }

    pub fn expectations(&self) -> &PhoneticExpectations {
        &self.expectations
    }

    pub fn has_transitions(&self) -> bool {
        self.last.is_some()
    }

    pub fn transition_count(&self) -> usize {
        self.len
    }

    /// Transitions from the newest to the oldest.
    pub fn iter_rev(&self) -> impl Iterator<Item = &Transition<'g>> {
        std::iter::successors(self.last.as_deref(), |link| link.previous.as_deref()).map(|link| &link.transition)
    }

    /// Transitions in the order they were applied.
    pub fn transitions(&self) -> Vec<&Transition<'g>> {
        let mut transitions: Vec<_> = self.iter_rev().collect();
        transitions.reverse();
        transitions
    }

    pub fn last_transition(&self) -> Option<&Transition<'g>> {
        self.last.as_deref().map(|link| &link.transition)
    }

    pub fn last_state(&self) -> &'g State {
        self.last_transition().map_or(self.root_state, |t| t.to)
    }

    /// Is this a complete analysis of the input?
    pub fn is_terminal(&self) -> bool {
        self.last_state().is_terminal() && self.remaining.is_empty()
    }

    pub fn add_transition(&mut self, transition: Transition<'g>) {
        self.so_far.push_str(&transition.actual);
        let consumed: usize = self
            .remaining
            .chars()
            .take(transition.actual.chars().count())
            .map(char::len_utf8)
            .sum();
        self.remaining.drain(..consumed);
        if !transition.template.is_empty() {
            self.expectations.clear();
        }
        self.last = Some(Arc::new(Link {
            transition,
            previous: self.last.take(),
        }));
        self.len += 1;
    }

    pub fn last_derivation_transition(&self) -> Option<&Transition<'g>> {
        self.iter_rev().find(|t| t.is_derivational())
    }

    pub fn last_derivation_suffix(&self) -> Option<&'g Suffix> {
        self.last_derivation_transition().map(|t| t.suffix)
    }

    pub fn last_non_blank_derivation(&self) -> Option<&Transition<'g>> {
        self.iter_rev().find(|t| t.is_derivational() && !t.template.is_empty())
    }

    /// Newest first, stopping before the last derivational transition.
    pub fn transitions_since_derivation(&self) -> Vec<&Transition<'g>> {
        self.iter_rev().take_while(|t| !t.is_derivational()).collect()
    }

    /// Like `transitions_since_derivation`, including the derivational
    /// transition itself.
    pub fn transitions_from_derivation(&self) -> Vec<&Transition<'g>> {
        let mut result = Vec::new();
        for transition in self.iter_rev() {
            result.push(transition);
            if transition.is_derivational() {
                break;
            }
        }
        result
    }

    pub fn suffixes_since_derivation(&self) -> Vec<&'g Suffix> {
        self.iter_rev()
            .take_while(|t| !t.is_derivational())
            .map(|t| t.suffix)
            .collect()
    }

    pub fn groups_since_derivation(&self) -> Vec<GroupId> {
        self.suffixes_since_derivation()
            .into_iter()
            .filter_map(|s| s.group)
            .collect()
    }

    /// Lexical attributes still in effect. Once a suffix is written out the
    /// root's attributes stop applying; a verb that is being derived further
    /// keeps its last consonant unvoiced.
    pub fn lexeme_attributes(&self) -> Option<LexemeAttributes> {
        if self.iter_rev().any(|t| !t.actual.is_empty()) {
            let last_state = self.last_state();
            let last_actual_empty = self.last_transition().is_some_and(|t| t.actual.is_empty());
            if last_state.category == SyntacticCategory::Verb && (last_state.is_derivational() || last_actual_empty) {
                return Some(LexemeAttributes::from([LexemeAttribute::NoVoicing]));
            }
            return None;
        }
        Some(self.root.item.attributes.clone())
    }

    /// Attributes of the surface so far, used to harmonize the next suffix.
    pub fn phonetic_attributes(&self) -> PhoneticAttributes {
        if self.has_transitions() {
            let suffixes = self.so_far.get(self.root.spelling.len()..).unwrap_or_default();
            if !suffixes.is_empty() && suffixes.chars().all(char::is_alphanumeric) {
                return attributes_with_lexeme(&self.so_far, self.lexeme_attributes().as_ref());
            }
        }
        self.root.attributes.clone()
    }

    fn last_derivation_index(&self) -> Option<usize> {
        self.iter_rev()
            .position(|t| t.is_derivational())
            .map(|from_end| self.len - 1 - from_end)
    }

    /// The root plus every suffix up to the last derivation, e.g. "kitaplaş"
    /// for "kitaplaştı". Without a derivation it is the lemma root.
    pub fn stem(&self) -> String {
        match self.last_derivation_index() {
            Some(index) => {
                let mut stem = self.root.spelling.clone();
                for transition in self.transitions().into_iter().take(index + 1) {
                    stem.push_str(&transition.fitting);
                }
                stem
            }
            None => self.root.item.root.clone(),
        }
    }

    pub fn stem_category(&self) -> SyntacticCategory {
        self.last_derivation_transition()
            .map_or(self.root.category(), |t| t.to.category)
    }

    pub fn surface_category(&self) -> SyntacticCategory {
        self.last_state().category
    }

    /// The root's secondary category, lost after any derivation.
    pub fn surface_secondary(&self) -> Option<SecondaryCategory> {
        match self.last_derivation_transition() {
            Some(_) => None,
            None => self.root.secondary(),
        }
    }
}

impl fmt::Debug for ParseToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffixes: Vec<&str> = self.transitions().iter().map(|t| t.suffix.name).collect();
        f.debug_struct("ParseToken")
            .field("root", &self.root.spelling)
            .field("root_state", &self.root_state.name)
            .field("so_far", &self.so_far)
            .field("remaining", &self.remaining)
            .field("suffixes", &suffixes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SuffixGraph;
    use crate::phonetics::attributes_of;
    use crate::types::DictionaryItem;

    fn verb_token<'g>(graph: &'g SuffixGraph, remaining: &str) -> ParseToken<'g> {
        let item = DictionaryItem::new("yapmak", "yap", SyntacticCategory::Verb, None)
            .with_attributes([LexemeAttribute::CausativeDIr, LexemeAttribute::NoVoicing]);
        let root = Root::new("yap", Arc::new(item), attributes_of("yap"), PhoneticExpectations::new());
        ParseToken::new(Arc::new(root), graph.get_state("VERB_ROOT").unwrap(), remaining)
    }

    fn push<'g>(graph: &'g SuffixGraph, token: &mut ParseToken<'g>, suffix: &str, to: &str, template: &'static str, actual: &str) {
        let suffix = graph.get_suffix(suffix).unwrap();
        let transition = Transition {
            from: token.last_state(),
            to: graph.get_state(to).unwrap(),
            suffix,
            form: suffix.forms().iter().find(|f| f.template == template),
            template,
            actual: actual.to_string(),
            fitting: actual.to_string(),
        };
        token.add_transition(transition);
    }

    #[test]
    fn test_add_transition_consumes_input() {
        let graph = SuffixGraph::basic().unwrap();
        let mut token = verb_token(&graph, "tırdı");
        assert!(!token.has_transitions());
        assert_eq!(token.last_state().name, "VERB_ROOT");

        push(&graph, &mut token, "Verb_Free_Transition_1", "VERB_PLAIN_DERIV", "", "");
        push(&graph, &mut token, "Caus", "VERB_ROOT", "dIr", "tır");
        assert_eq!(token.so_far(), "yaptır");
        assert_eq!(token.remaining(), "dı");
        assert_eq!(token.transition_count(), 2);
        assert_eq!(token.last_state().name, "VERB_ROOT");
    }

    #[test]
    fn test_clone_shares_history() {
        let graph = SuffixGraph::basic().unwrap();
        let mut token = verb_token(&graph, "tır");
        push(&graph, &mut token, "Verb_Free_Transition_1", "VERB_PLAIN_DERIV", "", "");
        let mut branch = token.clone();
        push(&graph, &mut branch, "Caus", "VERB_ROOT", "dIr", "tır");
        assert_eq!(token.transition_count(), 1);
        assert_eq!(branch.transition_count(), 2);
        assert_eq!(token.remaining(), "tır");
        assert!(branch.remaining().is_empty());
    }

    #[test]
    fn test_derivation_history() {
        let graph = SuffixGraph::basic().unwrap();
        let mut token = verb_token(&graph, "tırma");
        push(&graph, &mut token, "Verb_Free_Transition_1", "VERB_PLAIN_DERIV", "", "");
        push(&graph, &mut token, "Caus", "VERB_ROOT", "dIr", "tır");
        push(&graph, &mut token, "Neg", "VERB_WITH_POLARITY", "mA", "ma");

        assert_eq!(token.last_derivation_suffix().unwrap().name, "Caus");
        let since: Vec<&str> = token.suffixes_since_derivation().iter().map(|s| s.name).collect();
        assert_eq!(since, ["Neg"]);
        let from: Vec<&str> = token.transitions_from_derivation().iter().map(|t| t.suffix.name).collect();
        assert_eq!(from, ["Neg", "Caus"]);
        assert_eq!(token.groups_since_derivation().len(), 1);
        assert_eq!(token.stem(), "yaptır");
        assert_eq!(token.stem_category(), SyntacticCategory::Verb);
        assert_eq!(token.surface_secondary(), None);
    }

    #[test]
    fn test_lexeme_attributes() {
        let graph = SuffixGraph::basic().unwrap();
        let mut token = verb_token(&graph, "tırma");
        assert!(token.lexeme_attributes().unwrap().contains(&LexemeAttribute::CausativeDIr));

        push(&graph, &mut token, "Verb_Free_Transition_1", "VERB_PLAIN_DERIV", "", "");
        push(&graph, &mut token, "Caus", "VERB_ROOT", "dIr", "tır");
        assert_eq!(token.lexeme_attributes(), None);

        push(&graph, &mut token, "Verb_Free_Transition_1", "VERB_PLAIN_DERIV", "", "");
        assert_eq!(
            token.lexeme_attributes(),
            Some(LexemeAttributes::from([LexemeAttribute::NoVoicing]))
        );
    }

    #[test]
    fn test_phonetic_attributes_follow_surface() {
        let graph = SuffixGraph::basic().unwrap();
        let mut token = verb_token(&graph, "tır");
        assert_eq!(token.phonetic_attributes(), attributes_of("yap"));
        push(&graph, &mut token, "Verb_Free_Transition_1", "VERB_PLAIN_DERIV", "", "");
        assert_eq!(token.phonetic_attributes(), attributes_of("yap"));
        push(&graph, &mut token, "Caus", "VERB_ROOT", "dIr", "tır");
        assert_eq!(token.phonetic_attributes(), attributes_of("yaptır"));
    }

    #[test]
    fn test_stem_without_derivation() {
        let graph = SuffixGraph::basic().unwrap();
        let token = verb_token(&graph, "");
        assert_eq!(token.stem(), "yap");
        assert_eq!(token.surface_category(), SyntacticCategory::Verb);
    }
}
