/// Characters that end a line. "\r\n" counts as a single break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

pub struct LexerContext<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LexerContext<'a> {
    pub fn lex(source: &'a str) -> LexerContext<'a> {
        let mut lines = Vec::<&str>::default();

        let mut rest = source;
        while !rest.is_empty() {
            match rest.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
                Some((i, c)) => {
                    lines.push(rest[..i].trim());
                    let terminator_len = if rest[i..].starts_with("\r\n") {
                        2
                    } else {
                        c.len_utf8()
                    };
                    rest = &rest[i + terminator_len..];
                }
                None => {
                    lines.push(rest.trim());
                    break;
                }
            }
        }

        LexerContext { lines }
    }

    pub fn lines(self: &LexerContext<'a>) -> &[&'a str] {
        &self.lines
    }
}

pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parses a base-10 integer that fits in 32 bits, signed or unsigned. Values
/// above `i32::MAX` keep their bit pattern.
pub fn parse_word(token: &str) -> Option<i32> {
    let value = token.parse::<i64>().ok()?;
    if value < i64::from(i32::MIN) || value > i64::from(u32::MAX) {
        return None;
    }

    Some(value as u32 as i32)
}
