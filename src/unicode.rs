//! Character-level classification for mixed CJK / Latin / numeric text.

/// What the knife does at a cursor depends only on the class of the
/// character under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Cjk,
    Latin,
    Digit,
    Whitespace,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> CharClass {
        if is_cjk(c) {
            CharClass::Cjk
        } else if is_latin(c) {
            CharClass::Latin
        } else if is_digit(c) {
            CharClass::Digit
        } else if c.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Other
        }
    }

    /// Latin and digit runs are consumed whole.
    pub fn is_run(self) -> bool {
        matches!(self, CharClass::Latin | CharClass::Digit)
    }
}

/// CJK unified ideographs (base block, extensions A and B, compatibility
/// ideographs) plus the ideographic zero 〇.
pub fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || c == '\u{3007}'
}

/// ASCII and fullwidth Latin letters.
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{FF21}'..='\u{FF3A}').contains(&c)
        || ('\u{FF41}'..='\u{FF5A}').contains(&c)
}

/// ASCII and fullwidth decimal digits.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// Length of the maximal same-class run starting at `start`.
///
/// Digit runs may carry interior `.` characters, each sandwiched between
/// two digits ("0.01", "1.2.3"). Returns 0 for non-run classes.
pub fn run_len(chars: &[char], start: usize) -> usize {
    let class = CharClass::of(chars[start]);
    if !class.is_run() {
        return 0;
    }
    let mut end = start + 1;
    while end < chars.len() {
        let c = chars[end];
        if CharClass::of(c) == class {
            end += 1;
        } else if class == CharClass::Digit
            && c == '.'
            && chars.get(end + 1).is_some_and(|&n| is_digit(n))
        {
            end += 2;
        } else {
            break;
        }
    }
    end - start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_char_classification() {
        assert_eq!(CharClass::of('汉'), CharClass::Cjk);
        assert_eq!(CharClass::of('〇'), CharClass::Cjk);
        assert_eq!(CharClass::of('\u{20000}'), CharClass::Cjk);
        assert_eq!(CharClass::of('a'), CharClass::Latin);
        assert_eq!(CharClass::of('Ｘ'), CharClass::Latin);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('７'), CharClass::Digit);
        assert_eq!(CharClass::of(' '), CharClass::Whitespace);
        assert_eq!(CharClass::of('\u{3000}'), CharClass::Whitespace);
        assert_eq!(CharClass::of('μ'), CharClass::Other);
        assert_eq!(CharClass::of('，'), CharClass::Other);
        assert_eq!(CharClass::of('あ'), CharClass::Other);
    }

    #[test]
    fn test_run_len() {
        assert_eq!(run_len(&chars("Domnick Hunter"), 0), 7);
        assert_eq!(run_len(&chars("0.01μm"), 0), 4);
        assert_eq!(run_len(&chars("1.2.3x"), 0), 5);
        assert_eq!(run_len(&chars("12.x"), 0), 2);
        assert_eq!(run_len(&chars("OIL-X"), 0), 3);
        assert_eq!(run_len(&chars("3D"), 0), 1);
        assert_eq!(run_len(&chars("汉文"), 0), 0);
    }
}
