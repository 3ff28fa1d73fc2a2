//! Line splitting
//!
//! Splits one CSV line into fields on unquoted commas. A `"` toggles the
//! in-quotes state and is dropped from the field; quotes are never
//! unescaped, so `""` toggles twice and contributes nothing.

/// Remove one trailing line terminator (`\n`, `\r` or `\r\n`)
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Cut a raw line at its first `\r` or `\n`
pub fn cut_at_terminator(line: &str) -> &str {
    line.find(['\r', '\n']).map_or(line, |idx| &line[..idx])
}

/// Fields of one line plus whether the field bound swallowed extra columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    pub fields: Vec<String>,
    /// True when an unquoted comma ended up inside the last field
    pub folded: bool,
}

/// Split a line into owned fields
///
/// # Arguments
///
/// * `line` - One line of input, with or without its terminator
/// * `max_fields` - Field bound. Once reached, further unquoted commas
///   stay in the last field as text. `0` behaves like `1`.
///
/// # Returns
///
/// At least one field; an empty line yields a single empty field.
pub fn split_line(line: &str, max_fields: usize) -> Vec<String> {
    split_fields(line, max_fields).fields
}

/// Split a line, also reporting whether the bound folded columns
///
/// Once the last allowed field is reached, unquoted commas are kept as
/// literal text in that field. Quotes keep toggling and are dropped as usual.
pub fn split_fields(line: &str, max_fields: usize) -> SplitLine {
    let line = strip_line_terminator(line);
    let max_fields = max_fields.max(1);

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut folded = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                if fields.len() + 1 < max_fields {
                    fields.push(std::mem::take(&mut current));
                } else {
                    folded = true;
                    current.push(ch);
                }
            }
            _ => current.push(ch),
        }
    }

    // Unterminated quotes are not an error
    fields.push(current);
    SplitLine { fields, folded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fields() {
        assert_eq!(split_line("a,bb,ccc", usize::MAX), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_quoted_comma_is_kept() {
        assert_eq!(split_line("\"a,b\",c", usize::MAX), vec!["a,b", "c"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_field() {
        assert_eq!(split_line("", usize::MAX), vec![""]);
        assert_eq!(split_line("\n", usize::MAX), vec![""]);
    }

    #[test]
    fn test_empty_fields_between_commas() {
        assert_eq!(split_line(",,", usize::MAX), vec!["", "", ""]);
        assert_eq!(split_line("a,", usize::MAX), vec!["a", ""]);
    }

    #[test]
    fn test_strips_trailing_terminator() {
        assert_eq!(split_line("x,y\n", usize::MAX), vec!["x", "y"]);
        assert_eq!(split_line("x,y\r\n", usize::MAX), vec!["x", "y"]);
        assert_eq!(split_line("x,y\r", usize::MAX), vec!["x", "y"]);
    }

    #[test]
    fn test_doubled_quotes_are_not_unescaped() {
        // "he said ""hi""" toggles six times and keeps no quote characters
        assert_eq!(
            split_line("\"he said \"\"hi\"\"\",x", usize::MAX),
            vec!["he said hi", "x"]
        );
    }

    #[test]
    fn test_unterminated_quote_absorbs_commas() {
        assert_eq!(split_line("a,\"b,c,d", usize::MAX), vec!["a", "b,c,d"]);
    }

    #[test]
    fn test_bound_folds_remainder_into_last_field() {
        assert_eq!(split_line("a,b,c,d", 2), vec!["a", "b,c,d"]);
        assert_eq!(split_line("a,b,c,d", 3), vec!["a", "b", "c,d"]);
    }

    #[test]
    fn test_bound_drops_quotes_in_folded_field() {
        assert_eq!(split_line("a,\"b\",c", 2), vec!["a", "b,c"]);
    }

    #[test]
    fn test_bound_of_one_keeps_whole_line() {
        assert_eq!(split_line("\"a\",b\n", 1), vec!["a,b"]);
        assert_eq!(split_line("a,b", 0), vec!["a,b"]);
    }

    #[test]
    fn test_bound_exactly_met_matches_unbounded() {
        assert_eq!(split_line("a,\"b,c\"", 2), vec!["a", "b,c"]);
        assert_eq!(
            split_line("a,\"b,c\"", 2),
            split_line("a,\"b,c\"", usize::MAX)
        );
        assert!(!split_fields("a,\"b,c\"", 2).folded);
    }

    #[test]
    fn test_bound_not_reached() {
        assert_eq!(split_line("a,b", 5), vec!["a", "b"]);
    }

    #[test]
    fn test_folded_flag() {
        assert!(split_fields("a,b,c", 2).folded);
        assert!(!split_fields("a,b", 2).folded);
        assert!(!split_fields("a,\"b,c\"", 2).folded);
        assert!(split_fields("a,b", 1).folded);
        assert!(!split_fields("a,b,c", usize::MAX).folded);
    }

    #[test]
    fn test_cut_at_terminator() {
        assert_eq!(cut_at_terminator("a,b\r\n"), "a,b");
        assert_eq!(cut_at_terminator("a\rb\n"), "a");
        assert_eq!(cut_at_terminator("plain"), "plain");
    }

    #[test]
    fn test_multibyte_fields() {
        assert_eq!(split_line("é,\"ü,ö\"", usize::MAX), vec!["é", "ü,ö"]);
    }
}
