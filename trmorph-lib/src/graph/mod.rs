// The suffix graph: states a word passes through while it is built and the
// suffixes that move it from one state to the next.
//
// The graph is an arena. States, suffixes and groups refer to each other by
// index and the whole structure is immutable once `SuffixGraphBuilder::build`
// has run. Layers (basic, numeral, proper noun, copula) are registration
// functions run in order against one builder.

mod basic;
mod copula;
mod numeral;
mod proper_noun;

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::conditions::SuffixCondition;
use crate::error::{MorphError, Result};
use crate::token::ParseToken;
use crate::types::{LexemeAttribute, Root, SecondaryCategory, SyntacticCategory};

/// Name of the state a verb enters after a derivation. Phonetic voicing is
/// never allowed on a transition into it.
pub const VERB_ROOT: &str = "VERB_ROOT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuffixId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StateKind {
    /// Inflection continues from here.
    Transfer,
    /// Leaving this state starts a new derivation.
    Derivational,
    /// A word may end here.
    Terminal,
}

#[derive(Debug)]
pub struct State {
    pub id: StateId,
    pub name: &'static str,
    pub kind: StateKind,
    pub category: SyntacticCategory,
    outputs: Vec<(SuffixId, StateId)>,
}

impl State {
    /// Outgoing edges in registration order.
    pub fn outputs(&self) -> &[(SuffixId, StateId)] {
        &self.outputs
    }

    /// The category tag shown in formatted parses.
    pub fn pretty_name(&self) -> &'static str {
        self.category.as_str()
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == StateKind::Terminal
    }

    pub fn is_derivational(&self) -> bool {
        self.kind == StateKind::Derivational
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for State {}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuffixKind {
    Regular,
    /// Moves between states without adding anything; hidden in output.
    FreeTransition,
    /// Changes category without a surface form; shown as `Zero`.
    ZeroTransition,
}

/// One way a suffix can be written, with the conditions under which that
/// form is allowed.
#[derive(Debug, Clone)]
pub struct SuffixForm {
    pub template: &'static str,
    /// Checked on the token before the form is applied.
    pub precondition: Option<SuffixCondition>,
    /// Checked on the token after the next suffix is applied.
    pub postcondition: Option<SuffixCondition>,
    /// Checked when the word leaves the next derivational state.
    pub post_derivation_condition: Option<SuffixCondition>,
}

impl SuffixForm {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            precondition: None,
            postcondition: None,
            post_derivation_condition: None,
        }
    }

    pub fn pre(mut self, condition: SuffixCondition) -> Self {
        self.precondition = Some(condition);
        self
    }

    pub fn post(mut self, condition: SuffixCondition) -> Self {
        self.postcondition = Some(condition);
        self
    }

    pub fn post_derivation(mut self, condition: SuffixCondition) -> Self {
        self.post_derivation_condition = Some(condition);
        self
    }
}

impl From<&'static str> for SuffixForm {
    fn from(template: &'static str) -> Self {
        SuffixForm::new(template)
    }
}

#[derive(Debug)]
pub struct Suffix {
    pub id: SuffixId,
    pub name: &'static str,
    pub pretty: &'static str,
    /// Registration order across all layers.
    pub rank: usize,
    pub kind: SuffixKind,
    pub group: Option<GroupId>,
    pub allow_repetition: bool,
    forms: Vec<SuffixForm>,
}

impl Suffix {
    pub fn forms(&self) -> &[SuffixForm] {
        &self.forms
    }

    pub fn is_free_transition(&self) -> bool {
        self.kind == SuffixKind::FreeTransition
    }

    pub fn is_zero_transition(&self) -> bool {
        self.kind == SuffixKind::ZeroTransition
    }
}

impl PartialEq for Suffix {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Suffix {}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Mutually exclusive suffixes: at most one member may occur between two
/// derivations.
#[derive(Debug)]
pub struct SuffixGroup {
    pub id: GroupId,
    pub name: &'static str,
    members: Vec<SuffixId>,
}

impl SuffixGroup {
    pub fn members(&self) -> &[SuffixId] {
        &self.members
    }
}

/// Selects roots for a default root state.
#[derive(Debug, Clone, Default)]
pub struct RootRule {
    category: Option<SyntacticCategory>,
    secondary: Option<SecondaryCategory>,
    attribute: Option<LexemeAttribute>,
    spelling: Option<&'static str>,
}

impl RootRule {
    pub fn category(category: SyntacticCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    pub fn with_secondary(mut self, secondary: SecondaryCategory) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_attribute(mut self, attribute: LexemeAttribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    pub fn with_spelling(mut self, spelling: &'static str) -> Self {
        self.spelling = Some(spelling);
        self
    }

    pub fn matches(&self, root: &Root) -> bool {
        self.category.is_none_or(|c| c == root.category())
            && self.secondary.is_none_or(|s| Some(s) == root.secondary())
            && self.attribute.is_none_or(|a| root.item.has(a))
            && self.spelling.is_none_or(|s| s == root.spelling)
    }
}

#[derive(Debug, Default)]
pub struct SuffixGraph {
    states: Vec<State>,
    suffixes: Vec<Suffix>,
    groups: Vec<SuffixGroup>,
    state_names: HashMap<&'static str, StateId>,
    suffix_names: HashMap<&'static str, SuffixId>,
    root_rules: Vec<(RootRule, StateId)>,
}

impl SuffixGraph {
    /// Nouns, verbs, adjectives, adverbs, pronouns and the closed classes.
    pub fn basic() -> Result<Self> {
        let mut builder = SuffixGraphBuilder::new();
        basic::register(&mut builder)?;
        let graph = builder.build();
        log::debug!(
            "basic suffix graph: {} states, {} suffixes",
            graph.states.len(),
            graph.suffixes.len()
        );
        Ok(graph)
    }

    /// The basic graph plus numerals, proper nouns and the copula.
    pub fn extended() -> Result<Self> {
        let mut builder = SuffixGraphBuilder::new();
        basic::register(&mut builder)?;
        numeral::register(&mut builder)?;
        proper_noun::register(&mut builder)?;
        copula::register(&mut builder)?;
        let graph = builder.build();
        log::debug!(
            "extended suffix graph: {} states, {} suffixes",
            graph.states.len(),
            graph.suffixes.len()
        );
        Ok(graph)
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    pub fn suffix(&self, id: SuffixId) -> &Suffix {
        &self.suffixes[id.0]
    }

    pub fn group(&self, id: GroupId) -> &SuffixGroup {
        &self.groups[id.0]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn suffixes(&self) -> &[Suffix] {
        &self.suffixes
    }

    pub fn groups(&self) -> &[SuffixGroup] {
        &self.groups
    }

    pub fn find_state(&self, name: &str) -> Option<&State> {
        self.state_names.get(name).map(|&id| self.state(id))
    }

    pub fn get_state(&self, name: &str) -> Result<&State> {
        self.find_state(name)
            .ok_or_else(|| MorphError::config(format!("state {name} not found")))
    }

    pub fn find_suffix(&self, name: &str) -> Option<&Suffix> {
        self.suffix_names.get(name).map(|&id| self.suffix(id))
    }

    pub fn get_suffix(&self, name: &str) -> Result<&Suffix> {
        self.find_suffix(name)
            .ok_or_else(|| MorphError::config(format!("suffix {name} not found")))
    }

    /// The state a freshly found root starts in. Rules registered later
    /// take precedence, so layers can override the basic mapping.
    pub fn default_root_state(&self, root: &Root) -> Result<&State> {
        self.root_rules
            .iter()
            .rev()
            .find(|(rule, _)| rule.matches(root))
            .map(|&(_, id)| self.state(id))
            .ok_or_else(|| MorphError::config(format!("no default root state for root {root}")))
    }

    /// Outgoing edges of `state` still open to `token`: neither the suffix
    /// nor another member of its group was used since the last derivation.
    pub fn applicable_suffixes<'g>(
        &'g self,
        state: &State,
        token: &ParseToken<'g>,
    ) -> Vec<(&'g Suffix, &'g State)> {
        let used: Vec<&Suffix> = token.suffixes_since_derivation();
        state
            .outputs
            .iter()
            .map(|&(suffix, to)| (self.suffix(suffix), self.state(to)))
            .filter(|(suffix, _)| {
                !used.iter().any(|u| u.id == suffix.id)
                    && suffix
                        .group
                        .is_none_or(|g| !used.iter().any(|u| u.group == Some(g)))
            })
            .collect()
    }
}

/// Registers states, suffixes, groups, edges and forms, checking names as
/// it goes.
#[derive(Debug, Default)]
pub struct SuffixGraphBuilder {
    graph: SuffixGraph,
}

impl SuffixGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&mut self, name: &'static str, kind: StateKind, category: SyntacticCategory) -> Result<StateId> {
        if self.graph.state_names.contains_key(name) {
            return Err(MorphError::config(format!("state {name} already exists")));
        }
        let id = StateId(self.graph.states.len());
        self.graph.states.push(State {
            id,
            name,
            kind,
            category,
            outputs: Vec::new(),
        });
        self.graph.state_names.insert(name, id);
        Ok(id)
    }

    pub fn get_state(&self, name: &str) -> Result<StateId> {
        self.graph.get_state(name).map(|s| s.id)
    }

    pub fn get_suffix(&self, name: &str) -> Result<SuffixId> {
        self.graph.get_suffix(name).map(|s| s.id)
    }

    pub fn group(&mut self, name: &'static str) -> Result<GroupId> {
        if self.graph.groups.iter().any(|g| g.name == name) {
            return Err(MorphError::config(format!("suffix group {name} already exists")));
        }
        let id = GroupId(self.graph.groups.len());
        self.graph.groups.push(SuffixGroup {
            id,
            name,
            members: Vec::new(),
        });
        Ok(id)
    }

    /// Members registered so far.
    pub fn group_members(&self, group: GroupId) -> &[SuffixId] {
        self.graph.group(group).members()
    }

    fn put_suffix(
        &mut self,
        name: &'static str,
        pretty: &'static str,
        kind: SuffixKind,
        group: Option<GroupId>,
        allow_repetition: bool,
    ) -> Result<SuffixId> {
        if self.graph.suffix_names.contains_key(name) {
            return Err(MorphError::config(format!("suffix {name} already exists")));
        }
        let id = SuffixId(self.graph.suffixes.len());
        self.graph.suffixes.push(Suffix {
            id,
            name,
            pretty,
            rank: id.0,
            kind,
            group,
            allow_repetition,
            forms: Vec::new(),
        });
        self.graph.suffix_names.insert(name, id);
        if let Some(group) = group {
            self.graph.groups[group.0].members.push(id);
        }
        Ok(id)
    }

    /// A regular suffix. `pretty` defaults to the name.
    pub fn suffix(
        &mut self,
        name: &'static str,
        group: Option<GroupId>,
        pretty: Option<&'static str>,
    ) -> Result<SuffixId> {
        self.put_suffix(name, pretty.unwrap_or(name), SuffixKind::Regular, group, false)
    }

    /// A suffix that may follow itself across a derivation (causatives).
    pub fn repeatable_suffix(&mut self, name: &'static str, pretty: Option<&'static str>) -> Result<SuffixId> {
        self.put_suffix(name, pretty.unwrap_or(name), SuffixKind::Regular, None, true)
    }

    /// Registers a free transition with its single empty form and its edge.
    pub fn free_transition(&mut self, name: &'static str, from: StateId, to: StateId) -> Result<SuffixId> {
        let id = self.put_suffix(name, name, SuffixKind::FreeTransition, None, false)?;
        self.form(id, "")?;
        self.edge(from, id, to);
        Ok(id)
    }

    /// Registers a zero transition with its single empty form and its edge.
    pub fn zero_transition(&mut self, name: &'static str, from: StateId, to: StateId) -> Result<SuffixId> {
        let id = self.put_suffix(name, "Zero", SuffixKind::ZeroTransition, None, false)?;
        self.form(id, "")?;
        self.edge(from, id, to);
        Ok(id)
    }

    pub fn edge(&mut self, from: StateId, suffix: SuffixId, to: StateId) {
        self.graph.states[from.0].outputs.push((suffix, to));
    }

    /// Adds the edge `from --suffix--> to` by name and appends `forms` to
    /// the suffix.
    pub fn connect(&mut self, from: &str, suffix: &str, to: &str, forms: Vec<SuffixForm>) -> Result<SuffixId> {
        let from = self.get_state(from)?;
        let to = self.get_state(to)?;
        let id = self.get_suffix(suffix)?;
        self.edge(from, id, to);
        for form in forms {
            self.form(id, form)?;
        }
        Ok(id)
    }

    pub fn form(&mut self, suffix: SuffixId, form: impl Into<SuffixForm>) -> Result<()> {
        let form = form.into();
        validate_template(form.template)?;
        self.graph.suffixes[suffix.0].forms.push(form);
        Ok(())
    }

    /// Adds a default-root-state rule. The last matching rule wins.
    pub fn default_state(&mut self, rule: RootRule, state: StateId) {
        self.graph.root_rules.push((rule, state));
    }

    pub fn build(self) -> SuffixGraph {
        self.graph
    }
}

fn validate_template(template: &str) -> Result<()> {
    let chars: Vec<char> = template.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c == '+' && i + 1 >= chars.len() {
            return Err(MorphError::config(format!("dangling '+' in suffix form {template:?}")));
        }
        if c == '!' && (i == 0 || chars[i - 1] != 'I') {
            return Err(MorphError::config(format!("'!' must follow 'I' in suffix form {template:?}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::{DictionaryItem, PhoneticAttributes, PhoneticExpectations};

    fn root(spelling: &str, category: SyntacticCategory, secondary: Option<SecondaryCategory>) -> Root {
        Root::new(
            spelling,
            Arc::new(DictionaryItem::new(spelling, spelling, category, secondary)),
            PhoneticAttributes::new(),
            PhoneticExpectations::new(),
        )
    }

    #[test]
    fn test_basic_graph_builds() {
        let graph = SuffixGraph::basic().unwrap();
        assert!(graph.find_state("NOUN_ROOT").is_some());
        assert!(graph.find_state("NUMERAL_CARDINAL_ROOT").is_none());
        assert_eq!(graph.get_suffix("Dat_Noun").unwrap().pretty, "Dat");
        assert!(graph.get_state("NO_SUCH_STATE").is_err());
    }

    #[test]
    fn test_extended_graph_builds() {
        let graph = SuffixGraph::extended().unwrap();
        for name in ["NUMERAL_CARDINAL_ROOT", "PROPER_NOUN_ROOT", "VERB_COPULA_WITH_TENSE"] {
            assert!(graph.find_state(name).is_some(), "{name}");
        }
    }

    #[test]
    fn test_suffix_kinds() {
        let graph = SuffixGraph::basic().unwrap();
        let free = graph.get_suffix("Noun_Free_Transition_1").unwrap();
        assert!(free.is_free_transition());
        assert_eq!(free.pretty, "Noun_Free_Transition_1");
        let zero = graph.get_suffix("Adj_to_Noun_Zero_Transition").unwrap();
        assert!(zero.is_zero_transition());
        assert_eq!(zero.pretty, "Zero");
        assert_eq!(zero.forms().len(), 1);
        assert_eq!(zero.forms()[0].template, "");
    }

    #[test]
    fn test_default_root_state() {
        let graph = SuffixGraph::extended().unwrap();
        let noun = root("kitap", SyntacticCategory::Noun, None);
        assert_eq!(graph.default_root_state(&noun).unwrap().name, "NOUN_ROOT");

        let proper = root("Ahmet", SyntacticCategory::Noun, Some(SecondaryCategory::ProperNoun));
        assert_eq!(graph.default_root_state(&proper).unwrap().name, "PROPER_NOUN_ROOT");

        let digits = root("3", SyntacticCategory::Numeral, Some(SecondaryCategory::Digits));
        assert_eq!(graph.default_root_state(&digits).unwrap().name, "NUMERAL_DIGIT_CARDINAL_ROOT");

        let degil = root("değil", SyntacticCategory::Verb, None);
        assert_eq!(graph.default_root_state(&degil).unwrap().name, "VERB_DEGIL_ROOT");

        let compound = Root::new(
            "akşamsefa",
            Arc::new(
                DictionaryItem::new("akşamsefası", "akşamsefa", SyntacticCategory::Noun, None)
                    .with_attributes([LexemeAttribute::CompoundP3sg]),
            ),
            PhoneticAttributes::new(),
            PhoneticExpectations::new(),
        );
        assert_eq!(graph.default_root_state(&compound).unwrap().name, "NOUN_COMPOUND_ROOT");
    }

    #[test]
    fn test_missing_default_root_state() {
        let graph = SuffixGraph::basic().unwrap();
        let numeral = root("üç", SyntacticCategory::Numeral, Some(SecondaryCategory::Cardinal));
        assert!(matches!(graph.default_root_state(&numeral), Err(MorphError::Configuration(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut builder = SuffixGraphBuilder::new();
        builder.state("A", StateKind::Transfer, SyntacticCategory::Noun).unwrap();
        assert!(builder.state("A", StateKind::Terminal, SyntacticCategory::Noun).is_err());
        builder.suffix("S", None, None).unwrap();
        assert!(builder.suffix("S", None, Some("T")).is_err());
        assert!(builder.get_suffix("Missing").is_err());
    }

    #[test]
    fn test_malformed_template_rejected() {
        let mut builder = SuffixGraphBuilder::new();
        let s = builder.suffix("S", None, None).unwrap();
        assert!(builder.form(s, "lAr+").is_err());
        assert!(builder.form(s, "A!").is_err());
        assert!(builder.form(s, "lArI!").is_ok());
    }

    #[test]
    fn test_group_members() {
        let graph = SuffixGraph::basic().unwrap();
        let group = graph
            .groups()
            .iter()
            .find(|g| g.name == "Noun_Agreements_Group")
            .unwrap();
        let names: Vec<&str> = group.members().iter().map(|&id| graph.suffix(id).name).collect();
        assert_eq!(names, ["A3Sg_Noun", "A3Pl_Noun"]);
    }
}
