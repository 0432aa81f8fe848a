// The contextless morphological parser.
//
// Every prefix of the input is offered to the lexeme finders. Each root
// found becomes a parse token at the root's default state (or one token per
// matching predefined path), and tokens are then pushed through the suffix
// graph until they reach a terminal state with no input left.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::alphabet::to_lower;
use crate::error::{MorphError, Result};
use crate::finders::LexemeFinder;
use crate::graph::{State, Suffix, SuffixForm, SuffixGraph, VERB_ROOT};
use crate::phonetics::{application_matches, apply, expectations_satisfied, is_form_applicable};
use crate::predefined::PredefinedPaths;
use crate::token::{ParseToken, Transition};
use crate::types::{LexemeAttribute, Root, SyntacticCategory};

/// Search limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Tokens expanded per word before the search gives up and returns the
    /// results found so far.
    pub max_steps: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_steps: 100_000 }
    }
}

pub struct Parser<'g> {
    graph: &'g SuffixGraph,
    finders: Vec<Box<dyn LexemeFinder + 'g>>,
    paths: Option<&'g PredefinedPaths<'g>>,
    config: ParserConfig,
}

impl<'g> Parser<'g> {
    pub fn new(
        graph: &'g SuffixGraph,
        finders: Vec<Box<dyn LexemeFinder + 'g>>,
        paths: Option<&'g PredefinedPaths<'g>>,
    ) -> Self {
        Self {
            graph,
            finders,
            paths,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn graph(&self) -> &'g SuffixGraph {
        self.graph
    }

    /// Every complete analysis of `input`. Never fails: a broken
    /// configuration is logged and yields no analyses.
    pub fn parse(&self, input: &str) -> Vec<ParseToken<'g>> {
        self.try_parse(input).unwrap_or_else(|e| {
            log::error!("cannot parse {input:?}: {e}");
            Vec::new()
        })
    }

    /// Like [`Parser::parse`], surfacing configuration errors (a root
    /// without a default state, unbuilt predefined paths, a graph that
    /// cannot take the forced progressive suffixes).
    pub fn try_parse(&self, input: &str) -> Result<Vec<ParseToken<'g>>> {
        log::debug!("parsing {input:?}");
        let mut candidates = Vec::new();
        for token in self.seed(input)? {
            if let Some(token) = self.apply_forced_transitions(token, input)? {
                candidates.push(token);
            }
        }
        log::debug!("{} candidates for {input:?}", candidates.len());
        Ok(self.traverse(candidates, input))
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Vec<std::sync::Arc<Root>> {
        self.finders
            .iter()
            .flat_map(|finder| finder.find(partial, whole))
            .collect()
    }

    fn seed(&self, input: &str) -> Result<Vec<ParseToken<'g>>> {
        let mut candidates = Vec::new();
        for end in input.char_indices().map(|(i, c)| i + c.len_utf8()) {
            let partial = &input[..end];
            for root in self.find_roots(partial, input) {
                log::trace!("root candidate {root} for {partial:?}");
                match self.paths {
                    Some(paths) if paths.has_paths(&root)? => {
                        for path in paths.paths(&root)? {
                            let Some(rest) = input.strip_prefix(path.so_far()) else {
                                continue;
                            };
                            let mut token = path.clone();
                            token.set_remaining(rest);
                            candidates.push(token);
                        }
                    }
                    _ => {
                        let Some(rest) = input.strip_prefix(root.spelling.as_str()) else {
                            log::debug!("root {root} is not a prefix of {input:?}");
                            continue;
                        };
                        let state = self.graph.default_root_state(&root)?;
                        candidates.push(ParseToken::new(root, state, rest));
                    }
                }
            }
        }
        Ok(candidates)
    }

    /// A verb that lost its last vowel to the progressive ("ara" written
    /// "ar-ıyor") can only continue with the progressive, so that path is
    /// taken up front.
    fn apply_forced_transitions(&self, token: ParseToken<'g>, input: &str) -> Result<Option<ParseToken<'g>>> {
        let root = token.root();
        let item = &root.item;
        if item.category != SyntacticCategory::Verb
            || !item.has(LexemeAttribute::ProgressiveVowelDrop)
            || root.spelling.chars().count() + 1 != item.root.chars().count()
        {
            return Ok(Some(token));
        }

        let mut token = token;
        for (suffix, template, to) in [("Pos", "", "VERB_WITH_POLARITY"), ("Prog", "Iyor", "VERB_WITH_TENSE")] {
            let suffix = self.graph.get_suffix(suffix)?;
            if !transition_allowed_for_suffix(&token, suffix) {
                return Err(MorphError::config(format!(
                    "{suffix} cannot follow the progressive vowel drop in {token:?}"
                )));
            }
            let form = suffix
                .forms()
                .iter()
                .find(|f| f.template == template)
                .ok_or_else(|| MorphError::config(format!("suffix {suffix} has no form {template:?}")))?;
            let to = self.graph.get_state(to)?;
            match try_suffix_form(&token, suffix, form, to, input) {
                Some(next) => token = next,
                None => {
                    log::debug!("progressive vowel drop does not fit {input:?} with {token:?}");
                    return Ok(None);
                }
            }
        }
        Ok(Some(token))
    }

    fn traverse(&self, candidates: Vec<ParseToken<'g>>, input: &str) -> Vec<ParseToken<'g>> {
        let mut queue: VecDeque<ParseToken<'g>> = candidates.into();
        let mut results = Vec::new();
        let mut steps = 0;

        while let Some(token) = queue.pop_front() {
            if token.last_state().is_terminal() {
                if token.remaining().is_empty() {
                    log::debug!("result for {input:?}: {token:?}");
                    results.push(token);
                } else {
                    log::trace!("terminal with {:?} left over: {token:?}", token.remaining());
                }
                continue;
            }

            steps += 1;
            if steps > self.config.max_steps {
                log::warn!(
                    "gave up on {input:?} after {} steps with {} results and {} open tokens",
                    self.config.max_steps,
                    results.len(),
                    queue.len() + 1
                );
                break;
            }

            let from = token.last_state();
            for (suffix, to) in self.graph.applicable_suffixes(from, &token) {
                queue.extend(try_suffix(&token, suffix, to, input));
            }
        }
        results
    }
}

/// Parses capitalized words a second time with the first letter lowered,
/// so a sentence-initial "Kitap" still finds "kitap".
pub struct UpperCaseSupportingParser<'g> {
    parser: Parser<'g>,
}

impl<'g> UpperCaseSupportingParser<'g> {
    pub fn new(parser: Parser<'g>) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &Parser<'g> {
        &self.parser
    }

    pub fn parse(&self, input: &str) -> Vec<ParseToken<'g>> {
        let mut results = self.parser.parse(input);
        let mut chars = input.chars();
        if let Some(first) = chars.next().filter(|c| c.is_uppercase()) {
            let lowered: String = std::iter::once(to_lower(first)).chain(chars).collect();
            results.extend(self.parser.parse(&lowered));
        }
        results
    }
}

// ---------------------------------------------------------------------------
// Suffix application
// ---------------------------------------------------------------------------

fn try_suffix<'g>(token: &ParseToken<'g>, suffix: &'g Suffix, to: &'g State, input: &str) -> Vec<ParseToken<'g>> {
    if !transition_allowed_for_suffix(token, suffix) {
        return Vec::new();
    }
    suffix
        .forms()
        .iter()
        .filter_map(|form| try_suffix_form(token, suffix, form, to, input))
        .collect()
}

/// A suffix may not repeat its group since the last derivation, nor follow
/// itself as a derivation unless it allows repetition.
fn transition_allowed_for_suffix(token: &ParseToken<'_>, suffix: &Suffix) -> bool {
    if let Some(group) = suffix.group {
        if token.groups_since_derivation().contains(&group) {
            log::trace!("group of {suffix} already used since the last derivation");
            return false;
        }
    }
    if !suffix.allow_repetition && token.last_derivation_suffix().is_some_and(|s| s == suffix) {
        log::trace!("{suffix} cannot repeat the last derivation");
        return false;
    }
    true
}

fn transition_allowed_for_form(token: &ParseToken<'_>, form: &SuffixForm) -> bool {
    if let Some(precondition) = &form.precondition {
        if !precondition.is_satisfied_by(token) {
            log::trace!("precondition {precondition} of {:?} fails", form.template);
            return false;
        }
    }
    if !form.template.is_empty() && !expectations_satisfied(token.expectations(), form.template) {
        log::trace!("{:?} does not meet expectations {:?}", form.template, token.expectations());
        return false;
    }
    if !is_form_applicable(token.so_far(), form.template) {
        log::trace!("{:?} is not applicable to {:?}", form.template, token.so_far());
        return false;
    }
    true
}

fn try_suffix_form<'g>(
    token: &ParseToken<'g>,
    suffix: &'g Suffix,
    form: &'g SuffixForm,
    to: &'g State,
    input: &str,
) -> Option<ParseToken<'g>> {
    let from = token.last_state();
    if !transition_allowed_for_form(token, form) {
        return None;
    }

    let so_far = token.so_far();
    let lexeme_attributes = token.lexeme_attributes();
    let application = apply(
        so_far,
        &token.phonetic_attributes(),
        form.template,
        lexeme_attributes.as_ref(),
    );
    let applied = application.applied();
    if !application_matches(input, &applied, to.name != VERB_ROOT) {
        log::trace!("{input:?} does not continue with {applied:?}");
        return None;
    }

    let start = so_far.chars().count();
    let len = applied.chars().count().saturating_sub(start);
    let actual: String = input.chars().skip(start).take(len).collect();
    log::trace!("{suffix} {:?} consumes {actual:?}", form.template);

    let mut next = token.clone();
    next.add_transition(Transition {
        from,
        to,
        suffix,
        form: Some(form),
        template: form.template,
        actual,
        fitting: application.form,
    });

    let last_postcondition = token
        .last_transition()
        .and_then(|t| t.form)
        .and_then(|f| f.postcondition.as_ref());
    if let Some(postcondition) = last_postcondition {
        if !postcondition.is_satisfied_by(&next) {
            log::trace!("postcondition {postcondition} of the previous suffix fails");
            return None;
        }
    }

    if token.has_transitions() && from.is_derivational() {
        for transition in token.transitions_from_derivation() {
            let condition = transition.form.and_then(|f| f.post_derivation_condition.as_ref());
            if let Some(condition) = condition {
                if !condition.is_satisfied_by(&next) {
                    log::trace!("post-derivation condition {condition} of {} fails", transition.suffix);
                    return None;
                }
            }
        }
    }
    Some(next)
}
