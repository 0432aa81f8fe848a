// The Turkish alphabet and its consonant mutation tables.
//
// Suffix templates use uppercase vowels (A, I, O) as harmony placeholders,
// so lookups fall back to the uppercase column: `letter_for('A')` is the
// letter `a` and therefore a vowel.

/// One letter with the phonological features the engine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    pub char: char,
    pub upper: char,
    pub vowel: bool,
    pub frontal: bool,
    pub rounded: bool,
    pub voiceless: bool,
    pub continuant: bool,
    /// Whether the letter exists in plain ASCII.
    pub ascii: bool,
    /// q, w and x only appear in loanwords.
    pub foreign: bool,
}

const fn letter(char: char, upper: char) -> Letter {
    Letter {
        char,
        upper,
        vowel: false,
        frontal: false,
        rounded: false,
        voiceless: false,
        continuant: false,
        ascii: true,
        foreign: false,
    }
}

const fn vowel(char: char, upper: char, frontal: bool, rounded: bool, ascii: bool) -> Letter {
    Letter {
        vowel: true,
        frontal,
        rounded,
        ascii,
        ..letter(char, upper)
    }
}

const fn consonant(char: char, upper: char, voiceless: bool, continuant: bool, ascii: bool) -> Letter {
    Letter {
        voiceless,
        continuant,
        ascii,
        ..letter(char, upper)
    }
}

const fn foreign(char: char, upper: char) -> Letter {
    Letter {
        foreign: true,
        ..letter(char, upper)
    }
}

pub const LETTERS: &[Letter] = &[
    vowel('a', 'A', false, false, true),
    consonant('b', 'B', false, false, true),
    consonant('c', 'C', false, false, true),
    consonant('ç', 'Ç', true, false, false),
    consonant('d', 'D', false, false, true),
    vowel('e', 'E', true, false, true),
    consonant('f', 'F', true, true, true),
    consonant('g', 'G', false, false, true),
    consonant('ğ', 'Ğ', false, true, false),
    consonant('h', 'H', true, true, true),
    vowel('ı', 'I', false, false, false),
    vowel('i', 'İ', true, false, true),
    consonant('j', 'J', false, true, true),
    consonant('k', 'K', true, false, true),
    consonant('l', 'L', false, true, true),
    consonant('m', 'M', false, true, true),
    consonant('n', 'N', false, true, true),
    vowel('o', 'O', false, true, true),
    vowel('ö', 'Ö', true, true, false),
    consonant('p', 'P', true, false, true),
    consonant('r', 'R', false, true, true),
    consonant('s', 'S', true, true, true),
    consonant('ş', 'Ş', true, true, false),
    consonant('t', 'T', true, false, true),
    vowel('u', 'U', false, true, true),
    vowel('ü', 'Ü', true, true, false),
    consonant('v', 'V', false, true, true),
    consonant('y', 'Y', false, true, true),
    consonant('z', 'Z', false, true, true),
    foreign('q', 'Q'),
    foreign('w', 'W'),
    foreign('x', 'X'),
    vowel('â', 'Â', false, false, false),
    vowel('î', 'Î', true, false, false),
    vowel('û', 'Û', false, true, false),
];

/// Circumflexed vowels and their plain spellings.
pub const CIRCUMFLEX_LETTERS: &[(char, char)] = &[
    ('â', 'a'),
    ('î', 'i'),
    ('û', 'u'),
    ('Â', 'A'),
    ('Î', 'İ'),
    ('Û', 'U'),
];

/// Total lookup. Unknown characters get a letter with every feature off.
pub fn letter_for(c: char) -> Letter {
    LETTERS
        .iter()
        .find(|l| l.char == c)
        .or_else(|| LETTERS.iter().find(|l| l.upper == c))
        .copied()
        .unwrap_or(Letter {
            ascii: c.is_ascii(),
            ..letter(c, c)
        })
}

impl Letter {
    /// The voiced counterpart used before vowel-initial suffixes.
    pub fn voiced(&self) -> Option<Letter> {
        let c = match self.char {
            'p' => 'b',
            'ç' => 'c',
            't' => 'd',
            'g' | 'k' => 'ğ',
            _ => return None,
        };
        Some(letter_for(c))
    }

    /// The voiceless counterpart used after voiceless consonants.
    pub fn devoiced(&self) -> Option<Letter> {
        let c = match self.char {
            'b' => 'p',
            'c' => 'ç',
            'd' => 't',
            'g' => 'k',
            _ => return None,
        };
        Some(letter_for(c))
    }
}

/// Turkish-aware lowercasing of a single character (I → ı, İ → i).
pub fn to_lower(c: char) -> char {
    match LETTERS.iter().find(|l| l.upper == c) {
        Some(l) => l.char,
        None => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Mirrors the usual "all cased characters are uppercase" test: at least
/// one cased character and no lowercase ones.
pub fn is_upper(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

pub fn vowel_count(text: &str) -> usize {
    text.chars().filter(|&c| letter_for(c).vowel).count()
}

/// Replaces circumflexed vowels with their plain spellings.
pub fn fold_circumflex(text: &str) -> String {
    text.chars()
        .map(|c| {
            CIRCUMFLEX_LETTERS
                .iter()
                .find(|(circ, _)| *circ == c)
                .map_or(c, |(_, plain)| *plain)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_classify_as_vowels() {
        assert!(letter_for('A').vowel);
        assert!(letter_for('I').vowel);
        assert!(!letter_for('I').frontal);
        assert!(letter_for('İ').frontal);
    }

    #[test]
    fn unknown_characters_fall_back() {
        let l = letter_for('3');
        assert_eq!(l.char, '3');
        assert!(!l.vowel && !l.voiceless && !l.continuant);
    }

    #[test]
    fn voicing_tables() {
        assert_eq!(letter_for('k').voiced().map(|l| l.char), Some('ğ'));
        assert_eq!(letter_for('p').voiced().map(|l| l.char), Some('b'));
        assert_eq!(letter_for('d').devoiced().map(|l| l.char), Some('t'));
        assert!(letter_for('m').voiced().is_none());
        assert!(letter_for('ğ').devoiced().is_none());
    }

    #[test]
    fn turkish_lowercase() {
        assert_eq!(to_lower('I'), 'ı');
        assert_eq!(to_lower('İ'), 'i');
        assert_eq!(to_lower('Ş'), 'ş');
    }

    #[test]
    fn uppercase_detection() {
        assert!(is_upper("TR"));
        assert!(is_upper("TBMM2"));
        assert!(!is_upper("Ahmet"));
        assert!(!is_upper("123"));
    }

    #[test]
    fn circumflex_folding() {
        assert_eq!(fold_circumflex("hâlâ"), "hala");
        assert_eq!(vowel_count("kitap"), 2);
    }
}
