// Output formatting for parse results.

use serde::{Deserialize, Serialize};

use crate::alphabet::fold_circumflex;
use crate::token::{ParseToken, Transition};
use crate::types::{SecondaryCategory, SyntacticCategory};

fn root_head(token: &ParseToken<'_>, secondary: Option<SecondaryCategory>) -> String {
    let mut head = format!("{}+{}", token.root().item.root, token.root_state().pretty_name());
    if let Some(secondary) = secondary {
        head.push('+');
        head.push_str(secondary.as_str());
    }
    head
}

fn shown_transitions<'t, 'g>(token: &'t ParseToken<'g>) -> impl Iterator<Item = &'t Transition<'g>> {
    token
        .transitions()
        .into_iter()
        .filter(|t| !t.suffix.is_free_transition())
}

/// `[Category+]Suffix`, with the applied form when asked for and the
/// consumed text is alphanumeric.
fn format_transition(transition: &Transition<'_>, include_form: bool) -> String {
    let mut out = String::new();
    if transition.is_derivational() {
        out.push_str(transition.to.pretty_name());
        out.push('+');
    }
    out.push_str(transition.suffix.pretty);
    if include_form && !transition.actual.is_empty() && transition.actual.chars().all(char::is_alphanumeric) {
        out.push_str(&format!("({}[{}])", transition.template, transition.actual));
    }
    out
}

/// Convert a token to the usual analysis notation.
///
/// `kitap+Noun+A3sg+Pnon+Dat` for "kitaba".
pub fn format_parse(token: &ParseToken<'_>) -> String {
    let mut out = root_head(token, token.root().secondary());
    for transition in shown_transitions(token) {
        out.push('+');
        out.push_str(&format_transition(transition, false));
    }
    out
}

/// Like [`format_parse`], with the root spelling, the lemma and every
/// applied form spelled out.
///
/// `kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])` for "kitaba".
pub fn format_for_tests(token: &ParseToken<'_>) -> String {
    let root = token.root();
    let mut out = format!("{}({})+{}", root.spelling, root.item.lemma, token.root_state().pretty_name());
    if let Some(secondary) = root.secondary() {
        out.push('+');
        out.push_str(secondary.as_str());
    }
    for transition in shown_transitions(token) {
        out.push('+');
        out.push_str(&format_transition(transition, true));
    }
    out
}

/// One numbered group per derivation: `(1,"kitap+Noun+A3sg+Pnon+Dat")`.
///
/// Circumflexed letters are folded and apostrophes dropped. Question and
/// time adverbs, and question adjectives, are shown without their
/// secondary category.
pub fn format_simple(token: &ParseToken<'_>) -> String {
    let root = token.root();
    let secondary = match (root.category(), root.secondary()) {
        (SyntacticCategory::Adverb, Some(SecondaryCategory::Question | SecondaryCategory::Time)) => None,
        (SyntacticCategory::Adjective, Some(SecondaryCategory::Question)) => None,
        (_, secondary) => secondary,
    };

    let mut groups: Vec<Vec<&str>> = vec![vec![]];
    for transition in token.transitions() {
        if transition.is_derivational() {
            groups.push(vec![transition.to.pretty_name()]);
        }
        if !transition.suffix.is_free_transition() {
            if let Some(group) = groups.last_mut() {
                group.push(transition.suffix.pretty);
            }
        }
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        let body = if i == 0 {
            let mut first = vec![root_head(token, secondary)];
            first.extend(group.iter().map(|s| s.to_string()));
            first.join("+")
        } else {
            group.join("+")
        };
        out.push_str(&format!("({},\"{}\")", i + 1, body));
    }
    fold_circumflex(&out).replace("+Apos", "")
}

/// `kitaplaştı+Verb[kitaplaş(kitap+Noun)+Verb]`: the surface and the stem
/// left after stripping inflections.
pub fn format_stem(token: &ParseToken<'_>) -> String {
    format!(
        "{}+{}[{}({}+{})+{}]",
        token.so_far(),
        token.surface_category(),
        token.stem(),
        token.root().item.root,
        token.root().category(),
        token.stem_category(),
    )
}

/// One applied suffix in an [`Analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub suffix: String,
    pub pretty: String,
    pub template: String,
    pub actual: String,
    pub derivational: bool,
}

/// Serializable summary of a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub surface: String,
    pub parse: String,
    pub root: String,
    pub lemma: String,
    pub category: SyntacticCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryCategory>,
    pub stem: String,
    pub stem_category: SyntacticCategory,
    pub surface_category: SyntacticCategory,
    pub morphemes: Vec<Morpheme>,
}

impl From<&ParseToken<'_>> for Analysis {
    fn from(token: &ParseToken<'_>) -> Self {
        let root = token.root();
        Self {
            surface: token.so_far().to_string(),
            parse: format_parse(token),
            root: root.spelling.clone(),
            lemma: root.item.lemma.clone(),
            category: root.category(),
            secondary: root.secondary(),
            stem: token.stem(),
            stem_category: token.stem_category(),
            surface_category: token.surface_category(),
            morphemes: shown_transitions(token)
                .map(|t| Morpheme {
                    suffix: t.suffix.name.to_string(),
                    pretty: t.suffix.pretty.to_string(),
                    template: t.template.to_string(),
                    actual: t.actual.clone(),
                    derivational: t.is_derivational(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finders::{LexemeFinder, WordRootFinder};
    use crate::graph::SuffixGraph;
    use crate::parser::Parser;
    use crate::roots::RootMap;
    use crate::types::{DictionaryItem, LexemeAttribute};

    fn roots() -> RootMap {
        let items = [
            DictionaryItem::new("kitap", "kitap", SyntacticCategory::Noun, None)
                .with_attributes([LexemeAttribute::Voicing]),
            DictionaryItem::new("hâl", "hâl", SyntacticCategory::Noun, None)
                .with_attributes([LexemeAttribute::NoVoicing]),
        ];
        RootMap::from_items(&items).unwrap()
    }

    fn parse_one<'g>(graph: &'g SuffixGraph, roots: &'g RootMap, input: &str) -> ParseToken<'g> {
        let finders: Vec<Box<dyn LexemeFinder + 'g>> = vec![Box::new(WordRootFinder::new(roots))];
        let mut results = Parser::new(graph, finders, None).parse(input);
        assert_eq!(results.len(), 1, "{results:?}");
        results.remove(0)
    }

    #[test]
    fn test_formats() {
        let graph = SuffixGraph::basic().unwrap();
        let roots = roots();
        let token = parse_one(&graph, &roots, "kitaba");
        assert_eq!(format_parse(&token), "kitap+Noun+A3sg+Pnon+Dat");
        assert_eq!(format_for_tests(&token), "kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])");
        assert_eq!(format_simple(&token), "(1,\"kitap+Noun+A3sg+Pnon+Dat\")");
        assert_eq!(format_stem(&token), "kitaba+Noun[kitap(kitap+Noun)+Noun]");
    }

    #[test]
    fn test_simple_format_folds_circumflex() {
        let graph = SuffixGraph::basic().unwrap();
        let roots = roots();
        let token = parse_one(&graph, &roots, "hâl");
        assert_eq!(format_parse(&token), "hâl+Noun+A3sg+Pnon+Nom");
        assert_eq!(format_simple(&token), "(1,\"hal+Noun+A3sg+Pnon+Nom\")");
    }

    #[test]
    fn test_analysis() {
        let graph = SuffixGraph::basic().unwrap();
        let roots = roots();
        let token = parse_one(&graph, &roots, "kitaba");
        let analysis = Analysis::from(&token);
        assert_eq!(analysis.surface, "kitaba");
        assert_eq!(analysis.lemma, "kitap");
        assert_eq!(analysis.root, "kitab");
        assert_eq!(analysis.morphemes.len(), 3);
        assert_eq!(analysis.morphemes[2].actual, "a");

        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"parse\":\"kitap+Noun+A3sg+Pnon+Dat\""));
        assert!(!json.contains("secondary"));
        let back: Analysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
