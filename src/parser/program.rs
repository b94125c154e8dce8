//! Program line parsing.

/// Split a `<row> = <items>` line into its row number and item text.
///
/// Returns `None` when the line does not have the program shape: no `=`, or
/// a left side that is not an integer.
pub fn parse_program_line(line: &str) -> Option<(i64, &str)> {
    let (row, items) = line.split_once('=')?;
    let row = row.trim().parse::<i64>().ok()?;
    Some((row, items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_program_line() {
        assert_eq!(parse_program_line("1 = 2a 1b"), Some((1, " 2a 1b")));
        assert_eq!(parse_program_line("12=a"), Some((12, "a")));
        assert_eq!(parse_program_line("-3 = a"), Some((-3, " a")));
        assert_eq!(parse_program_line("4 ="), Some((4, "")));
    }

    #[test]
    fn test_non_program_shapes() {
        assert_eq!(parse_program_line("2a 1b"), None);
        assert_eq!(parse_program_line("a = red"), None);
        assert_eq!(parse_program_line("1.5 = a"), None);
        assert_eq!(parse_program_line(" = a"), None);
    }
}
