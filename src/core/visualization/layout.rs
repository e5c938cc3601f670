// src/core/visualization/layout.rs
//
// Width-bounded text layouts: nibble dumps of a state vector and the
// positional symbol table.

use super::symbols::{encode_symbol, SYMBOL_COUNT};

const NIBBLE: usize = 4;
const NIBBLE_PAD: char = '_';

/// Flow short tokens into lines of at most `width` columns.
///
/// Every token is followed by one space; a token that would push the line
/// past `width` starts a new line instead. A token wider than `width` still
/// gets a line of its own.
pub fn wrap_tokens<I, S>(tokens: I, width: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut col = 0;

    for token in tokens {
        let token = token.as_ref();
        let len = token.chars().count();

        if col > 0 && col + len + 1 > width {
            lines.push(line.trim_end().to_string());
            line.clear();
            col = 0;
        }

        line.push_str(token);
        line.push(' ');
        col += len + 1;
    }

    if col > 0 {
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Group a state vector into 4-bit chunks; a short final chunk is padded with `_`.
pub fn nibbles(bits: &[u8]) -> Vec<String> {
    bits.chunks(NIBBLE)
        .map(|chunk| {
            let mut nibble: String = chunk.iter().map(|b| b.to_string()).collect();
            while nibble.len() < NIBBLE {
                nibble.push(NIBBLE_PAD);
            }
            nibble
        })
        .collect()
}

/// Heading plus wrapped nibble lines for one state.
pub fn state_dump(state_num: usize, bits: &[u8], width: usize) -> Vec<String> {
    let mut lines = vec![format!("showing state {}, one nibble at a time", state_num)];
    lines.extend(wrap_tokens(nibbles(bits), width));
    lines
}

/// `symbol: value` pairs for every non-digit symbol, wrapped, with a footer.
pub fn symbol_table(width: usize) -> Vec<String> {
    let entries = (10..SYMBOL_COUNT).filter_map(|n| {
        encode_symbol(n)
            .ok()
            .map(|symbol| format!("{}: {}", symbol, n))
    });

    let mut lines = wrap_tokens(entries, width);
    lines.push("base 10 digits have been omitted".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_tokens(["aaaa", "bbbb", "cccc"], 10);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc"]);

        let lines = wrap_tokens(["aaaa", "bbbb", "cccc"], 15);
        assert_eq!(lines, vec!["aaaa bbbb cccc"]);
    }

    #[test]
    fn test_wrap_oversized_token() {
        let lines = wrap_tokens(["abcdefgh", "ij"], 4);
        assert_eq!(lines, vec!["abcdefgh", "ij"]);
        assert!(wrap_tokens(Vec::<String>::new(), 10).is_empty());
    }

    #[test]
    fn test_nibbles_pad_last_group() {
        assert_eq!(nibbles(&[1, 0, 1, 1, 0, 0]), vec!["1011", "00__"]);
        assert_eq!(nibbles(&[1, 1, 1, 1]), vec!["1111"]);
        assert!(nibbles(&[]).is_empty());
    }

    #[test]
    fn test_state_dump() {
        let bits = [0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1];
        let lines = state_dump(3, &bits, 10);
        assert_eq!(
            lines,
            vec![
                "showing state 3, one nibble at a time",
                "0101 1111",
                "0000 1___",
            ]
        );
    }

    #[test]
    fn test_symbol_table_lists_non_digits() {
        let lines = symbol_table(56);
        assert!(lines.iter().all(|l| l.len() <= 56));
        assert_eq!(lines.last().unwrap(), "base 10 digits have been omitted");

        let body = lines[..lines.len() - 1].join(" ");
        assert!(body.starts_with("a: 10 b: 11"));
        assert!(body.ends_with("@: 83"));
        assert!(!body.contains("9: 9"));
        assert_eq!(body.matches(": ").count(), 74);
    }
}
