/// Collapses runs of two or more spaces into one and removes spaces that directly precede a
/// newline.
///
/// Only the ASCII space is affected. Tabs and other whitespace are left as they are.
pub fn normalize_filler_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_spaces = 0usize;

    for ch in text.chars() {
        match ch {
            ' ' => pending_spaces += 1,
            '\n' => {
                // Trailing spaces before a newline are dropped entirely
                pending_spaces = 0;
                normalized.push('\n');
            }
            _ => {
                if pending_spaces > 0 {
                    normalized.push(' ');
                    pending_spaces = 0;
                }
                normalized.push(ch);
            }
        }
    }

    if pending_spaces > 0 {
        normalized.push(' ');
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_space_runs() {
        assert_eq!(normalize_filler_whitespace("a   b"), "a b");
        assert_eq!(normalize_filler_whitespace(",  "), ", ");
    }

    #[test]
    fn test_removes_spaces_before_newline() {
        assert_eq!(normalize_filler_whitespace(".  \n"), ".\n");
        assert_eq!(normalize_filler_whitespace(" \n \n"), "\n\n");
    }

    #[test]
    fn test_leaves_other_whitespace() {
        assert_eq!(normalize_filler_whitespace("\t\t"), "\t\t");
        assert_eq!(normalize_filler_whitespace(" \t "), " \t ");
    }
}
