// Predefined paths for irregular closed-class roots.
//
// Pronouns like "ben"/"ban", the question particles and a handful of
// quantifiers inflect in ways the suffix graph cannot derive. Their parses
// are written out here as suffix chains with literal surface forms and
// materialized once into parse tokens; the parser clones them instead of
// searching.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{MorphError, Result};
use crate::graph::{State, Suffix, SuffixGraph};
use crate::roots::RootMap;
use crate::token::{ParseToken, Transition};
use crate::types::{Root, SecondaryCategory, SyntacticCategory};

use SecondaryCategory::{Demonstrative, Personal, Question, Reflexive};
use SyntacticCategory::{Noun, Pronoun, Verb};

/// A suffix name and the literal surface it takes on this path.
pub type PathEdge = (&'static str, &'static str);

const DI_YI: &[&[PathEdge]] = &[
    &[("Pos", ""), ("Fut", "yecek")],
    &[("Pos", ""), ("Fut", "yeceğ")],
    &[("Pos", ""), ("Future_to_Adj", "yecek")],
    &[("Pos", ""), ("Future_to_Adj", "yeceğ")],
    &[("Pos", ""), ("FutPart_Noun", "yecek")],
    &[("Pos", ""), ("FutPart_Noun", "yeceğ")],
    &[("Pos", ""), ("FutPart_Adj", "yecek")],
    &[("Pos", ""), ("FutPart_Adj", "yeceğ")],
    &[("Pos", ""), ("Prog", "yor")],
    &[("Pos", ""), ("PresPart", "yen")],
    &[("Able", "yebil"), ("Pos", "")],
    &[("Able", "ye"), ("Neg", "me")],
    &[("Pos", ""), ("Opt", "ye")],
    &[("Pos", ""), ("ByDoingSo", "yerek")],
];

const BEN_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "i"),
    ("Loc_Pron", "de"),
    ("Abl_Pron", "den"),
    ("Ins_Pron", "le"),
    ("Ins_Pron", "imle"),
    ("Gen_Pron", "im"),
    ("AccordingTo", "ce"),
    ("Nom_Pron_Deriv", ""),
];

const SEN_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "i"),
    ("Loc_Pron", "de"),
    ("Abl_Pron", "den"),
    ("Ins_Pron", "le"),
    ("Ins_Pron", "inle"),
    ("Gen_Pron", "in"),
    ("AccordingTo", "ce"),
    ("Nom_Pron_Deriv", ""),
];

const O_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "nu"),
    ("Dat_Pron", "na"),
    ("Loc_Pron", "nda"),
    ("Abl_Pron", "ndan"),
    ("Ins_Pron", "nla"),
    ("Ins_Pron", "nunla"),
    ("Gen_Pron", "nun"),
    ("AccordingTo", "nca"),
    ("Nom_Pron_Deriv", ""),
];

const BIZ_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "i"),
    ("Dat_Pron", "e"),
    ("Loc_Pron", "de"),
    ("Abl_Pron", "den"),
    ("Ins_Pron", "le"),
    ("Ins_Pron", "imle"),
    ("Gen_Pron", "im"),
    ("AccordingTo", "ce"),
    ("Nom_Pron_Deriv", ""),
];

const SIZ_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "i"),
    ("Dat_Pron", "e"),
    ("Loc_Pron", "de"),
    ("Abl_Pron", "den"),
    ("Ins_Pron", "le"),
    ("Ins_Pron", "inle"),
    ("Gen_Pron", "in"),
    ("AccordingTo", "ce"),
    ("Nom_Pron_Deriv", ""),
];

/// "bizler", "sizler".
const LER_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "i"),
    ("Dat_Pron", "e"),
    ("Loc_Pron", "de"),
    ("Abl_Pron", "den"),
    ("Ins_Pron", "le"),
    ("Gen_Pron", "in"),
    ("AccordingTo", "ce"),
    ("Nom_Pron_Deriv", ""),
];

/// "onlar" as a personal pronoun.
const ONLAR_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "ı"),
    ("Dat_Pron", "a"),
    ("Loc_Pron", "da"),
    ("Abl_Pron", "dan"),
    ("Ins_Pron", "la"),
    ("Gen_Pron", "ın"),
    ("AccordingTo", "ca"),
    ("Nom_Pron_Deriv", ""),
];

const DEMONSTRATIVE_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "nu"),
    ("Dat_Pron", "na"),
    ("Loc_Pron", "nda"),
    ("Abl_Pron", "ndan"),
    ("Ins_Pron", "nla"),
    ("Ins_Pron", "nunla"),
    ("Gen_Pron", "nun"),
    ("Nom_Pron_Deriv", ""),
];

const DEMONSTRATIVE_PLURAL_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "ı"),
    ("Dat_Pron", "a"),
    ("Loc_Pron", "da"),
    ("Abl_Pron", "dan"),
    ("Ins_Pron", "la"),
    ("Gen_Pron", "ın"),
    ("Nom_Pron_Deriv", ""),
];

/// Cases after a possessive ending in a consonant ("kendim-e").
const POSSESSIVE_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "i"),
    ("Dat_Pron", "e"),
    ("Loc_Pron", "de"),
    ("Abl_Pron", "den"),
    ("Ins_Pron", "le"),
    ("Gen_Pron", "in"),
    ("Nom_Pron_Deriv", ""),
];

/// Cases after a third person possessive ("kendisi-ne").
const THIRD_PERSON_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "ni"),
    ("Dat_Pron", "ne"),
    ("Loc_Pron", "nde"),
    ("Abl_Pron", "nden"),
    ("Ins_Pron", "yle"),
    ("Gen_Pron", "nin"),
    ("Nom_Pron_Deriv", ""),
];

const HEP_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "i"),
    ("Dat_Pron", "e"),
    ("Loc_Pron", "de"),
    ("Abl_Pron", "den"),
    ("Ins_Pron", "le"),
    ("Gen_Pron", "in"),
    ("AccordingTo", "ce"),
    ("Nom_Pron_Deriv", ""),
];

const HEPSI_CASES: &[PathEdge] = &[
    ("Nom_Pron", ""),
    ("Acc_Pron", "ni"),
    ("Dat_Pron", "ne"),
    ("Loc_Pron", "nde"),
    ("Abl_Pron", "nden"),
    ("Ins_Pron", "yle"),
    ("Gen_Pron", "nin"),
    ("AccordingTo", "nce"),
    ("Nom_Pron_Deriv", ""),
];

/// Question particle, then the Pres/Past/Narr agreement endings in the
/// particle's own harmony: (particle, Pres endings, Past tense, Past endings,
/// Narr tense, Narr endings). Endings run A1sg, A2sg, A3sg, A1pl, A2pl, A3pl.
type QuestionParadigm = (
    &'static str,
    [&'static str; 6],
    &'static str,
    [&'static str; 6],
    &'static str,
    [&'static str; 6],
);

const QUESTION_PARTICLES: &[QuestionParadigm] = &[
    (
        "mı",
        ["yım", "sın", "", "yız", "sınız", "lar"],
        "ydı",
        ["m", "n", "", "k", "nız", "lar"],
        "ymış",
        ["ım", "sın", "", "ız", "sınız", "lar"],
    ),
    (
        "mi",
        ["yim", "sin", "", "yiz", "siniz", "ler"],
        "ydi",
        ["m", "n", "", "k", "niz", "ler"],
        "ymiş",
        ["im", "sin", "", "iz", "siniz", "ler"],
    ),
    (
        "mu",
        ["yum", "sun", "", "yuz", "sunuz", "lar"],
        "ydu",
        ["m", "n", "", "k", "nuz", "lar"],
        "ymuş",
        ["um", "sun", "", "uz", "sunuz", "lar"],
    ),
    (
        "mü",
        ["yüm", "sün", "", "yüz", "sünüz", "ler"],
        "ydü",
        ["m", "n", "", "k", "nüz", "ler"],
        "ymüş",
        ["üm", "sün", "", "üz", "sünüz", "ler"],
    ),
];

const QUESTION_AGREEMENTS: [&str; 6] = ["A1Sg_Ques", "A2Sg_Ques", "A3Sg_Ques", "A1Pl_Ques", "A2Pl_Ques", "A3Pl_Ques"];

/// Quantifier pronouns that carry their possessive in the lemma, with the
/// first and second person plural possessive endings they also take.
const QUANTIFIERS: &[(&str, Option<(&str, &str)>)] = &[
    ("bazıları", Some(("mız", "nız"))),
    ("bazısı", None),
    ("kimileri", Some(("miz", "niz"))),
    ("kimi", Some(("miz", "niz"))),
    ("kimisi", None),
    ("birileri", Some(("miz", "niz"))),
    ("biri", Some(("miz", "niz"))),
    ("birisi", None),
    ("hiçbiri", Some(("miz", "niz"))),
    ("hiçbirisi", None),
    ("çoğu", Some(("muz", "nuz"))),
    ("birçoğu", Some(("muz", "nuz"))),
    ("birkaçı", Some(("mız", "nız"))),
    ("cümlesi", None),
    ("diğeri", Some(("miz", "niz"))),
];

#[derive(Debug)]
pub struct PredefinedPaths<'g> {
    graph: &'g SuffixGraph,
    paths: Option<HashMap<Arc<Root>, Vec<ParseToken<'g>>>>,
}

impl<'g> PredefinedPaths<'g> {
    /// An empty table. Queries fail until paths are registered.
    pub fn new(graph: &'g SuffixGraph) -> Self {
        Self { graph, paths: None }
    }

    /// The full table for every irregular root in `roots`.
    pub fn build(graph: &'g SuffixGraph, roots: &RootMap) -> Result<Self> {
        let mut paths = Self::new(graph);
        paths.create(roots)?;
        Ok(paths)
    }

    pub fn create(&mut self, roots: &RootMap) -> Result<()> {
        for spelling in ["di", "yi"] {
            let root = find_root(roots, spelling, Verb, None)?;
            for path in DI_YI {
                self.register(&root, path)?;
            }
        }
        let yi = find_root(roots, "yi", Verb, None)?;
        self.register(&yi, &[("Pos", ""), ("AfterDoingSo", "yip")])?;

        self.personal_pronouns(roots)?;
        self.demonstrative_pronouns(roots)?;
        self.reflexive_pronoun(roots)?;

        let hep = find_root(roots, "hep", Pronoun, None)?;
        self.register_cases(&hep, &[("A1Pl_Pron", ""), ("P1Pl_Pron", "imiz")], HEP_CASES)?;
        self.register_cases(&hep, &[("A2Pl_Pron", ""), ("P2Pl_Pron", "iniz")], HEP_CASES)?;
        let hepsi = find_root(roots, "hepsi", Pronoun, None)?;
        self.register_cases(&hepsi, &[("A3Pl_Pron", ""), ("P3Pl_Pron", "")], HEPSI_CASES)?;

        let herkes = find_root(roots, "herkes", Pronoun, None)?;
        self.register(&herkes, &[("A3Sg_Pron", ""), ("Pnon_Pron", "")])?;

        self.question_particles(roots)?;
        self.ne(roots)?;
        self.place_pronouns(roots)?;
        self.quantifiers(roots)?;

        log::debug!(
            "created predefined paths for {} roots",
            self.paths.as_ref().map_or(0, HashMap::len)
        );
        Ok(())
    }

    fn personal_pronouns(&mut self, roots: &RootMap) -> Result<()> {
        let ben = find_root(roots, "ben", Pronoun, Some(Personal))?;
        let ban = find_root(roots, "ban", Pronoun, Some(Personal))?;
        self.register_cases(&ben, &[("A1Sg_Pron", ""), ("Pnon_Pron", "")], BEN_CASES)?;
        self.register(&ban, &[("A1Sg_Pron", ""), ("Pnon_Pron", ""), ("Dat_Pron", "a")])?;

        let sen = find_root(roots, "sen", Pronoun, Some(Personal))?;
        let san = find_root(roots, "san", Pronoun, Some(Personal))?;
        self.register_cases(&sen, &[("A2Sg_Pron", ""), ("Pnon_Pron", "")], SEN_CASES)?;
        self.register(&san, &[("A2Sg_Pron", ""), ("Pnon_Pron", ""), ("Dat_Pron", "a")])?;

        let o = find_root(roots, "o", Pronoun, Some(Personal))?;
        self.register_cases(&o, &[("A3Sg_Pron", ""), ("Pnon_Pron", "")], O_CASES)?;

        let biz = find_root(roots, "biz", Pronoun, Some(Personal))?;
        self.register_cases(&biz, &[("A1Pl_Pron", ""), ("Pnon_Pron", "")], BIZ_CASES)?;
        self.register_cases(&biz, &[("A1Pl_Pron", "ler"), ("Pnon_Pron", "")], LER_CASES)?;

        let siz = find_root(roots, "siz", Pronoun, Some(Personal))?;
        self.register_cases(&siz, &[("A2Pl_Pron", ""), ("Pnon_Pron", "")], SIZ_CASES)?;
        self.register_cases(&siz, &[("A2Pl_Pron", "ler"), ("Pnon_Pron", "")], LER_CASES)?;

        self.register_cases(&o, &[("A3Pl_Pron", "nlar"), ("Pnon_Pron", "")], ONLAR_CASES)
    }

    fn demonstrative_pronouns(&mut self, roots: &RootMap) -> Result<()> {
        for spelling in ["bu", "şu", "o"] {
            let root = find_root(roots, spelling, Pronoun, Some(Demonstrative))?;
            self.register_cases(&root, &[("A3Sg_Pron", ""), ("Pnon_Pron", "")], DEMONSTRATIVE_CASES)?;
        }
        for spelling in ["bu", "şu", "o"] {
            let root = find_root(roots, spelling, Pronoun, Some(Demonstrative))?;
            self.register_cases(
                &root,
                &[("A3Pl_Pron", "nlar"), ("Pnon_Pron", "")],
                DEMONSTRATIVE_PLURAL_CASES,
            )?;
        }
        Ok(())
    }

    fn reflexive_pronoun(&mut self, roots: &RootMap) -> Result<()> {
        let kendi = find_root(roots, "kendi", Pronoun, Some(Reflexive))?;
        let prefixes: [(&[PathEdge], &[PathEdge]); 9] = [
            (&[("A1Sg_Pron", ""), ("P1Sg_Pron", "m")], POSSESSIVE_CASES),
            (&[("A2Sg_Pron", ""), ("P2Sg_Pron", "n")], POSSESSIVE_CASES),
            (&[("A3Sg_Pron", ""), ("P3Sg_Pron", "")], THIRD_PERSON_CASES),
            (&[("A3Sg_Pron", ""), ("P3Sg_Pron", "si")], THIRD_PERSON_CASES),
            (&[("A1Pl_Pron", ""), ("P1Pl_Pron", "miz")], POSSESSIVE_CASES),
            (&[("A1Pl_Pron", "ler"), ("P1Pl_Pron", "imiz")], POSSESSIVE_CASES),
            (&[("A2Pl_Pron", ""), ("P2Pl_Pron", "niz")], POSSESSIVE_CASES),
            (&[("A2Pl_Pron", "ler"), ("P2Pl_Pron", "iniz")], POSSESSIVE_CASES),
            (&[("A3Pl_Pron", "leri"), ("P3Pl_Pron", "")], THIRD_PERSON_CASES),
        ];
        for (prefix, cases) in prefixes {
            self.register_cases(&kendi, prefix, cases)?;
        }
        Ok(())
    }

    fn question_particles(&mut self, roots: &RootMap) -> Result<()> {
        for &(particle, present, past, past_endings, narrative, narrative_endings) in QUESTION_PARTICLES {
            let root = find_root(roots, particle, SyntacticCategory::Question, None)?;
            for (agreement, ending) in QUESTION_AGREEMENTS.into_iter().zip(present) {
                self.register(&root, &[("Pres_Ques", ""), (agreement, ending)])?;
            }
            for (agreement, ending) in QUESTION_AGREEMENTS.into_iter().zip(past_endings) {
                self.register(&root, &[("Past_Ques", past), (agreement, ending)])?;
            }
            for (agreement, ending) in QUESTION_AGREEMENTS.into_iter().zip(narrative_endings) {
                self.register(&root, &[("Narr_Ques", narrative), (agreement, ending)])?;
            }
        }
        Ok(())
    }

    fn ne(&mut self, roots: &RootMap) -> Result<()> {
        let ne = find_root(roots, "ne", Pronoun, Some(Question))?;
        for possessive in [
            ("P1Sg_Pron", "m"),
            ("P1Sg_Pron", "yim"),
            ("P2Sg_Pron", "n"),
            ("P2Sg_Pron", "yin"),
            ("P3Sg_Pron", "yi"),
            ("P3Sg_Pron", "si"),
            ("P1Pl_Pron", "yimiz"),
            ("P2Pl_Pron", "yiniz"),
            ("P3Pl_Pron", "leri"),
        ] {
            self.register(&ne, &[("A3Sg_Pron", ""), possessive])?;
        }
        self.register(&ne, &[("A3Sg_Pron", ""), ("Pnon_Pron", ""), ("Gen_Pron", "yin")])?;
        self.register(&ne, &[("A3Sg_Pron", ""), ("Pnon_Pron", "")])?;
        self.register(&ne, &[("A3Pl_Pron", "ler"), ("Pnon_Pron", "")])
    }

    /// "orda", "burdan", "nerde", "içerde", "dışarısı".
    fn place_pronouns(&mut self, roots: &RootMap) -> Result<()> {
        let places = [
            ("or", None, "da", "dan"),
            ("bur", None, "da", "dan"),
            ("şur", None, "da", "dan"),
            ("ner", Some(Question), "de", "den"),
        ];
        for (spelling, secondary, locative, ablative) in places {
            let root = find_root(roots, spelling, Pronoun, secondary)?;
            let prefix = [("A3Sg_Pron", ""), ("Pnon_Pron", "")];
            self.register_cases(&root, &prefix, &[("Loc_Pron", locative), ("Abl_Pron", ablative)])?;
        }

        for (spelling, locative, ablative, possessive) in [("içer", "de", "den", "si"), ("dışar", "da", "dan", "sı")] {
            let root = find_root(roots, spelling, Noun, None)?;
            let prefix = [("A3Sg_Noun", ""), ("Pnon_Noun", "")];
            self.register_cases(&root, &prefix, &[("Loc_Noun", locative), ("Abl_Noun", ablative)])?;
            self.register(&root, &[("A3Sg_Noun", ""), ("P3Sg_Noun", possessive)])?;
        }
        Ok(())
    }

    fn quantifiers(&mut self, roots: &RootMap) -> Result<()> {
        for &(spelling, plural_possessives) in QUANTIFIERS {
            let root = find_root(roots, spelling, Pronoun, None)?;
            self.register(&root, &[("A3Sg_Pron", ""), ("P3Sg_Pron", "")])?;
            if let Some((first, second)) = plural_possessives {
                self.register(&root, &[("A3Sg_Pron", ""), ("P1Pl_Pron", first)])?;
                self.register(&root, &[("A3Sg_Pron", ""), ("P2Pl_Pron", second)])?;
            }
        }

        let birbiri = find_root(roots, "birbiri", Pronoun, None)?;
        self.register(&birbiri, &[("A3Sg_Pron", ""), ("P3Sg_Pron", "")])?;
        self.register(&birbiri, &[("A1Pl_Pron", ""), ("P1Pl_Pron", "miz")])?;
        self.register(&birbiri, &[("A2Pl_Pron", ""), ("P2Pl_Pron", "niz")])?;
        let birbir = find_root(roots, "birbir", Pronoun, None)?;
        self.register(&birbir, &[("A3Pl_Pron", ""), ("P3Pl_Pron", "leri")])?;

        for spelling in ["çokları", "birçokları"] {
            let root = find_root(roots, spelling, Pronoun, None)?;
            self.register(&root, &[("A3Sg_Pron", ""), ("P3Pl_Pron", "")])?;
        }
        let digerleri = find_root(roots, "diğerleri", Pronoun, None)?;
        self.register(&digerleri, &[("A3Sg_Pron", ""), ("P3Pl_Pron", "")])?;
        self.register(&digerleri, &[("A3Sg_Pron", ""), ("P1Pl_Pron", "miz")])
    }

    fn register_cases(&mut self, root: &Arc<Root>, prefix: &[PathEdge], cases: &[PathEdge]) -> Result<()> {
        for &case in cases {
            let mut path = prefix.to_vec();
            path.push(case);
            self.register(root, &path)?;
        }
        Ok(())
    }

    /// Walks `edges` from the root's default state and stores the resulting
    /// token. When a suffix is not an output of the current state, the one
    /// state in between is discovered and entered with an empty form.
    pub fn register(&mut self, root: &Arc<Root>, edges: &[PathEdge]) -> Result<()> {
        let graph = self.graph;
        let mut token = ParseToken::new(Arc::clone(root), graph.default_root_state(root)?, "");
        for &(name, surface) in edges {
            let suffix = graph.get_suffix(name)?;
            let state = token.last_state();
            let to = match target(graph, state, suffix) {
                Some(to) => to,
                None => {
                    let (via, intermediate) = intermediate(graph, state, suffix)?;
                    push(&mut token, state, via, intermediate, "");
                    target(graph, intermediate, suffix).ok_or_else(|| {
                        MorphError::config(format!("{intermediate} has no output for {suffix}"))
                    })?
                }
            };
            let from = token.last_state();
            push(&mut token, from, suffix, to, surface);
        }
        log::trace!("predefined path {:?} for {root}", token.so_far());
        self.paths
            .get_or_insert_with(HashMap::new)
            .entry(Arc::clone(root))
            .or_default()
            .push(token);
        Ok(())
    }

    pub fn has_paths(&self, root: &Root) -> Result<bool> {
        let paths = self.paths.as_ref().ok_or(MorphError::PathsNotCreated)?;
        Ok(paths.contains_key(root))
    }

    /// Every path registered for `root`; empty for ordinary roots.
    pub fn paths(&self, root: &Root) -> Result<&[ParseToken<'g>]> {
        let paths = self.paths.as_ref().ok_or(MorphError::PathsNotCreated)?;
        Ok(paths.get(root).map_or(&[], Vec::as_slice))
    }
}

fn find_root(
    roots: &RootMap,
    spelling: &str,
    category: SyntacticCategory,
    secondary: Option<SecondaryCategory>,
) -> Result<Arc<Root>> {
    roots
        .get(spelling)
        .iter()
        .find(|r| r.category() == category && r.secondary() == secondary)
        .cloned()
        .ok_or_else(|| {
            let secondary = secondary.map_or(String::new(), |s| format!("+{s}"));
            MorphError::config(format!("no root {spelling}+{category}{secondary} for predefined paths"))
        })
}

fn target<'g>(graph: &'g SuffixGraph, state: &State, suffix: &Suffix) -> Option<&'g State> {
    state
        .outputs()
        .iter()
        .find(|&&(s, _)| s == suffix.id)
        .map(|&(_, to)| graph.state(to))
}

/// The single output of `state` whose target has `suffix` as an output.
fn intermediate<'g>(graph: &'g SuffixGraph, state: &State, suffix: &Suffix) -> Result<(&'g Suffix, &'g State)> {
    let mut found = None;
    for &(via, to) in state.outputs() {
        let to = graph.state(to);
        if target(graph, to, suffix).is_some() {
            if let Some((_, first)) = found {
                return Err(MorphError::config(format!(
                    "{suffix} is reachable from {state} through both {first} and {to}"
                )));
            }
            found = Some((graph.suffix(via), to));
        }
    }
    found.ok_or_else(|| MorphError::config(format!("{suffix} is not reachable from {state}")))
}

fn push<'g>(token: &mut ParseToken<'g>, from: &'g State, suffix: &'g Suffix, to: &'g State, surface: &'static str) {
    token.add_transition(Transition {
        from,
        to,
        suffix,
        form: None,
        template: surface,
        actual: surface.to_string(),
        fitting: surface.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DictionaryItem, PhoneticAttributes, PhoneticExpectations};

    fn root(spelling: &str, lemma: &str, category: SyntacticCategory, secondary: Option<SecondaryCategory>) -> Arc<Root> {
        Arc::new(Root::new(
            spelling,
            Arc::new(DictionaryItem::new(lemma, lemma, category, secondary)),
            PhoneticAttributes::new(),
            PhoneticExpectations::new(),
        ))
    }

    fn names(token: &ParseToken<'_>) -> Vec<&'static str> {
        token.transitions().iter().map(|t| t.suffix.name).collect()
    }

    #[test]
    fn test_query_before_creation_fails() {
        let graph = SuffixGraph::basic().unwrap();
        let paths = PredefinedPaths::new(&graph);
        let ben = root("ben", "ben", Pronoun, Some(Personal));
        assert!(matches!(paths.has_paths(&ben), Err(MorphError::PathsNotCreated)));
        assert!(matches!(paths.paths(&ben), Err(MorphError::PathsNotCreated)));
    }

    #[test]
    fn test_register_direct_edges() {
        let graph = SuffixGraph::basic().unwrap();
        let mut paths = PredefinedPaths::new(&graph);
        let ban = root("ban", "ben", Pronoun, Some(Personal));
        paths
            .register(&ban, &[("A1Sg_Pron", ""), ("Pnon_Pron", ""), ("Dat_Pron", "a")])
            .unwrap();

        assert!(paths.has_paths(&ban).unwrap());
        let tokens = paths.paths(&ban).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].so_far(), "bana");
        assert_eq!(names(&tokens[0]), ["A1Sg_Pron", "Pnon_Pron", "Dat_Pron"]);
        assert_eq!(tokens[0].last_state().name, "PRONOUN_WITH_CASE");

        let sen = root("sen", "sen", Pronoun, Some(Personal));
        assert!(!paths.has_paths(&sen).unwrap());
        assert!(paths.paths(&sen).unwrap().is_empty());
    }

    #[test]
    fn test_register_discovers_intermediate_state() {
        let graph = SuffixGraph::basic().unwrap();
        let mut paths = PredefinedPaths::new(&graph);
        let di = root("di", "de", Verb, None);
        paths.register(&di, &[("Able", "ye"), ("Neg", "me")]).unwrap();
        paths.register(&di, &[("Pos", ""), ("FutPart_Noun", "yecek")]).unwrap();

        let tokens = paths.paths(&di).unwrap();
        assert_eq!(names(&tokens[0]), ["Verb_Free_Transition_1", "Able", "Neg"]);
        assert_eq!(tokens[0].so_far(), "diyeme");
        assert!(tokens[0].transitions()[0].form.is_none());
        assert_eq!(names(&tokens[1]), ["Pos", "Verb_Free_Transition_2", "FutPart_Noun"]);
        assert_eq!(tokens[1].so_far(), "diyecek");
        assert_eq!(tokens[1].last_state().name, "NOUN_ROOT");
    }

    #[test]
    fn test_unreachable_suffix_is_a_configuration_error() {
        let graph = SuffixGraph::basic().unwrap();
        let mut paths = PredefinedPaths::new(&graph);
        let ben = root("ben", "ben", Pronoun, Some(Personal));
        let result = paths.register(&ben, &[("Dat_Noun", "e")]);
        assert!(matches!(result, Err(MorphError::Configuration(_))));
        assert!(paths.register(&ben, &[("No_Such_Suffix", "")]).is_err());
    }

    #[test]
    fn test_missing_root_is_a_configuration_error() {
        let graph = SuffixGraph::basic().unwrap();
        let result = PredefinedPaths::build(&graph, &RootMap::new());
        assert!(matches!(result, Err(MorphError::Configuration(_))));
    }
}
