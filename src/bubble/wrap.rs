//! Greedy word wrapping

/// Wrap `text` into lines of at most `max_width` characters.
///
/// Words are never split: a word longer than `max_width` gets a line of
/// its own and that line exceeds the limit.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("Cats are great.", 50), vec!["Cats are great."]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap("  Cats \t are\n great.  ", 50), vec!["Cats are great."]);
    }

    #[test]
    fn test_wrap_breaks_at_limit() {
        // "aaa bbb" is exactly 7 wide and stays together
        assert_eq!(wrap("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
        assert_eq!(wrap("aaa bbb ccc", 6), vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let lines = wrap("a supercalifragilistic word", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn test_wrap_long_first_word() {
        assert_eq!(wrap("abcdefgh ij", 4), vec!["abcdefgh", "ij"]);
    }

    #[test]
    fn test_wrap_blank_input() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_no_line_over_limit_unless_single_word() {
        let text = "A cat can jump up to six times its length which is very impressive.";
        for line in wrap(text, 30) {
            assert!(line.len() <= 30 || !line.contains(' '), "too long: {line}");
        }
    }
}
