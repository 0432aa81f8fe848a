// Phonetic attribute derivation and suffix template expansion.
//
// Templates are written with harmony placeholders: `A` (a/e), `I`
// (ı/i/u/ü), `O` (o/ö). A leading `+X` marks X as optional: a `+C` keeps
// its consonant only after a vowel, a `+V` keeps its vowel only after a
// consonant. `!` after `I` forces the unrounded reading and is never
// written out.

use crate::alphabet::{letter_for, Letter};
use crate::types::{
    LexemeAttribute, LexemeAttributes, PhoneticAttribute, PhoneticAttributes, PhoneticExpectation,
    PhoneticExpectations,
};

use PhoneticAttribute::*;

/// Result of applying a template to the surface seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// The surface so far, possibly with its last consonant voiced.
    pub word: String,
    /// The expanded suffix form.
    pub form: String,
}

impl Application {
    pub fn applied(&self) -> String {
        format!("{}{}", self.word, self.form)
    }
}

/// Attributes of a plain character sequence.
pub fn attributes_of(text: &str) -> PhoneticAttributes {
    debug_assert!(!text.is_empty(), "phonetic attributes of an empty string");
    let mut attrs = PhoneticAttributes::new();
    let Some(last) = text.chars().last().map(letter_for) else {
        return attrs;
    };

    if let Some(last_vowel) = text.chars().rev().map(letter_for).find(|l| l.vowel) {
        attrs.insert(if last_vowel.rounded { LastVowelRounded } else { LastVowelUnrounded });
        attrs.insert(if last_vowel.frontal { LastVowelFrontal } else { LastVowelBack });
    }

    attrs.insert(if last.vowel { LastLetterVowel } else { LastLetterConsonant });

    if last.voiceless {
        attrs.insert(LastLetterVoiceless);
        if !last.continuant {
            attrs.insert(LastLetterVoicelessStop);
        }
    } else {
        attrs.insert(LastLetterNotVoiceless);
        if !last.continuant && !last.vowel {
            attrs.insert(LastLetterVoicedStop);
        }
    }

    attrs.insert(if last.continuant { LastLetterContinuant } else { LastLetterNotContinuant });
    attrs
}

/// Attributes of a sequence, taking lexical exceptions into account.
/// InverseHarmony flips the frontness of the last vowel.
pub fn attributes_with_lexeme(text: &str, lexeme_attrs: Option<&LexemeAttributes>) -> PhoneticAttributes {
    let mut attrs = attributes_of(text);
    let inverse = lexeme_attrs.is_some_and(|a| a.contains(&LexemeAttribute::InverseHarmony));
    if inverse {
        if attrs.remove(&LastVowelBack) {
            attrs.insert(LastVowelFrontal);
        } else if attrs.remove(&LastVowelFrontal) {
            attrs.insert(LastVowelBack);
        }
    }
    attrs
}

fn ends_with_vowel(word: &str) -> bool {
    word.chars().last().is_some_and(|c| letter_for(c).vowel)
}

/// Splits `+Xrest` into `(X, rest)`.
fn optional_letter(form: &[char]) -> Option<(Letter, &[char])> {
    match form {
        ['+', optional, rest @ ..] => Some((letter_for(*optional), rest)),
        _ => None,
    }
}

/// Cheap pre-filter: can this template follow `word` at all?
pub fn is_form_applicable(word: &str, form: &str) -> bool {
    let form: Vec<char> = form.trim().chars().collect();
    applicable(word.trim(), &form)
}

fn applicable(word: &str, form: &[char]) -> bool {
    if form.is_empty() {
        return true;
    }
    if word.is_empty() {
        return false;
    }
    let word_vowel_final = ends_with_vowel(word);

    if let Some((optional, rest)) = optional_letter(form) {
        return match (optional.vowel, word_vowel_final) {
            (true, true) => applicable(word, rest),
            (true, false) => true,
            (false, true) => true,
            (false, false) => applicable(word, rest),
        };
    }

    if letter_for(form[0]).vowel {
        !word_vowel_final
    } else {
        true
    }
}

/// Expands `form` against the surface `word` with the given attributes.
pub fn apply(
    word: &str,
    attrs: &PhoneticAttributes,
    form: &str,
    lexeme_attrs: Option<&LexemeAttributes>,
) -> Application {
    let form: Vec<char> = form.trim().chars().collect();
    apply_chars(word, attrs, &form, lexeme_attrs)
}

fn apply_chars(
    word: &str,
    attrs: &PhoneticAttributes,
    form: &[char],
    lexeme_attrs: Option<&LexemeAttributes>,
) -> Application {
    if form.is_empty() {
        return Application {
            word: word.to_string(),
            form: String::new(),
        };
    }

    match optional_letter(form) {
        Some((optional, rest)) => {
            let after_vowel = attrs.contains(&LastLetterVowel);
            if optional.vowel == after_vowel {
                apply_chars(word, attrs, rest, lexeme_attrs)
            } else {
                handle_phonetics(word, attrs, &form[1..], lexeme_attrs)
            }
        }
        None => handle_phonetics(word, attrs, form, lexeme_attrs),
    }
}

fn handle_phonetics(
    word: &str,
    attrs: &PhoneticAttributes,
    form: &[char],
    lexeme_attrs: Option<&LexemeAttributes>,
) -> Application {
    let mut word = word.to_string();
    let Some(&first) = form.first() else {
        return Application { word, form: String::new() };
    };
    let first_letter = letter_for(first);

    let no_voicing = lexeme_attrs.is_some_and(|a| a.contains(&LexemeAttribute::NoVoicing));
    if !no_voicing && attrs.contains(&LastLetterVoicelessStop) && first_letter.vowel {
        if let Some(voiced) = word.chars().last().and_then(|c| letter_for(c).voiced()) {
            word.pop();
            word.push(voiced.char);
        }
    }

    let mut form = form.to_vec();
    if attrs.contains(&LastLetterVoiceless) {
        if let Some(devoiced) = first_letter.devoiced() {
            form[0] = devoiced.char;
        }
    }

    let back = attrs.contains(&LastVowelBack);
    let unrounded = attrs.contains(&LastVowelUnrounded);
    let mut expanded = String::with_capacity(form.len());
    for (i, &c) in form.iter().enumerate() {
        if c == '!' {
            continue;
        }
        let forced_unrounded = form.get(i + 1) == Some(&'!');
        let out = match c {
            'A' => if back { 'a' } else { 'e' },
            'I' => match (back, unrounded || forced_unrounded) {
                (true, true) => 'ı',
                (true, false) => 'u',
                (false, true) => 'i',
                (false, false) => 'ü',
            },
            'O' => if back { 'o' } else { 'ö' },
            other => other,
        };
        expanded.push(out);
    }

    Application { word, form: expanded }
}

/// Does the input really continue with `applied`? When voicing is allowed,
/// the input may carry the voiced counterpart of the last applied letter
/// (kitapçık + a is written kitapçığa).
pub fn application_matches(word: &str, applied: &str, voicing_allowed: bool) -> bool {
    if applied.is_empty() || applied.chars().count() > word.chars().count() {
        return false;
    }
    if word.starts_with(applied) {
        return true;
    }
    if !voicing_allowed {
        return false;
    }

    let mut applied_chars = applied.chars();
    let Some(last) = applied_chars.next_back() else {
        return false;
    };
    let head = applied_chars.as_str();
    if !word.starts_with(head) {
        return false;
    }
    let actual = word[head.len()..].chars().next();
    match (letter_for(last).voiced(), actual) {
        (Some(voiced), Some(actual)) => voiced.char == actual,
        _ => false,
    }
}

/// Checks the onset of `form` against the active expectations.
pub fn expectations_satisfied(expectations: &PhoneticExpectations, form: &str) -> bool {
    if expectations.is_empty() {
        return true;
    }
    let form: Vec<char> = form.trim().chars().collect();
    if form.is_empty() {
        return false;
    }
    expectations.iter().all(|&e| expectation_satisfied(e, &form))
}

fn expectation_satisfied(expectation: PhoneticExpectation, form: &[char]) -> bool {
    match form {
        [] => false,
        ['+', ..] => {
            expectation_satisfied(expectation, &form[1..])
                || expectation_satisfied(expectation, form.get(2..).unwrap_or(&[]))
        }
        [first, ..] => {
            let vowel = letter_for(*first).vowel;
            match expectation {
                PhoneticExpectation::VowelStart => vowel,
                PhoneticExpectation::ConsonantStart => !vowel,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(word: &str, form: &str) -> String {
        apply(word, &attributes_of(word), form, None).applied()
    }

    #[test]
    fn attributes_of_consonant_final_word() {
        let attrs = attributes_of("kitap");
        for expected in [
            LastVowelBack,
            LastVowelUnrounded,
            LastLetterConsonant,
            LastLetterVoiceless,
            LastLetterVoicelessStop,
            LastLetterNotContinuant,
        ] {
            assert!(attrs.contains(&expected), "kitap should have {expected:?}");
        }
    }

    #[test]
    fn attributes_of_vowel_final_word() {
        let attrs = attributes_of("göz");
        assert!(attrs.contains(&LastVowelFrontal));
        assert!(attrs.contains(&LastVowelRounded));
        assert!(attrs.contains(&LastLetterContinuant));
        assert!(!attrs.contains(&LastLetterVoicedStop));

        let attrs = attributes_of("masa");
        assert!(attrs.contains(&LastLetterVowel));
        assert!(!attrs.contains(&LastLetterVoicedStop));
    }

    #[test]
    fn inverse_harmony_flips_frontness() {
        let lexeme: LexemeAttributes = [LexemeAttribute::InverseHarmony].into();
        let attrs = attributes_with_lexeme("saat", Some(&lexeme));
        assert!(attrs.contains(&LastVowelFrontal));
        assert!(!attrs.contains(&LastVowelBack));
    }

    #[test]
    fn vowel_harmony() {
        assert_eq!(applied("ev", "lAr"), "evler");
        assert_eq!(applied("kız", "lAr"), "kızlar");
        assert_eq!(applied("göz", "+Im"), "gözüm");
        assert_eq!(applied("okul", "+Im"), "okulum");
        assert_eq!(applied("masa", "+Im"), "masam");
    }

    #[test]
    fn optional_consonant() {
        assert_eq!(applied("masa", "+yA"), "masaya");
        assert_eq!(applied("ev", "+yA"), "eve");
        assert_eq!(applied("masa", "+sI"), "masası");
    }

    #[test]
    fn voicing_and_devoicing() {
        assert_eq!(applied("kitap", "+yA"), "kitaba");
        assert_eq!(applied("kitap", "dA"), "kitapta");
        assert_eq!(applied("ağaç", "cI"), "ağaççı");
    }

    #[test]
    fn no_voicing_blocks_mutation() {
        let lexeme: LexemeAttributes = [LexemeAttribute::NoVoicing].into();
        let app = apply("at", &attributes_of("at"), "+yI", Some(&lexeme));
        assert_eq!(app.applied(), "atı");
    }

    #[test]
    fn bang_forces_unrounded_vowel() {
        assert_eq!(applied("kol", "lArI!"), "kolları");
        assert_eq!(applied("göz", "mAlI!"), "gözmeli");
    }

    #[test]
    fn form_applicability() {
        assert!(is_form_applicable("masa", "+yA"));
        assert!(is_form_applicable("masa", ""));
        assert!(!is_form_applicable("masa", "Iyor"));
        assert!(is_form_applicable("gel", "Iyor"));
        assert!(!is_form_applicable("", "lAr"));
    }

    #[test]
    fn matches_with_voicing() {
        assert!(application_matches("kitapçığa", "kitapçık", true));
        assert!(!application_matches("kitapçığa", "kitapçık", false));
        assert!(application_matches("kitaba", "kitaba", false));
        assert!(!application_matches("kitap", "kitaba", true));
        assert!(!application_matches("kitap", "", true));
    }

    #[test]
    fn expectations() {
        let vowel: PhoneticExpectations = [PhoneticExpectation::VowelStart].into();
        let consonant: PhoneticExpectations = [PhoneticExpectation::ConsonantStart].into();
        assert!(expectations_satisfied(&vowel, "+yA"));
        assert!(expectations_satisfied(&vowel, "Im"));
        assert!(!expectations_satisfied(&vowel, "lAr"));
        assert!(expectations_satisfied(&consonant, "lAr"));
        assert!(!expectations_satisfied(&consonant, "Im"));
        assert!(!expectations_satisfied(&consonant, ""));
        assert!(expectations_satisfied(&PhoneticExpectations::new(), ""));
    }
}
