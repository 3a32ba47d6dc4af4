/// One comma separated unit of a logical line, surrounding whitespace
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'line> {
    pub text: &'line str,
    /// The line ended inside a double quoted string that began in this
    /// clause. Such a clause swallows every comma up to the end of the line.
    pub unterminated_quote: bool,
}

impl<'line> Clause<'line> {
    fn new(raw: &'line str, unterminated_quote: bool) -> Self {
        Clause {
            text: raw.trim(),
            unterminated_quote,
        }
    }
}

/// Splits a logical line on the commas that are not inside a double quoted
/// string. Within quotes `\` escapes the next character, outside it is a
/// plain character. Empty clauses from stray commas are kept.
pub fn split_clauses(line: &str) -> Vec<Clause<'_>> {
    let mut clauses = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    let mut chars = line.char_indices();

    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => in_quote = !in_quote,
            '\\' if in_quote => {
                chars.next();
            }
            ',' if !in_quote => {
                clauses.push(Clause::new(&line[start..idx], false));
                start = idx + 1;
            }
            _ => {}
        }
    }
    clauses.push(Clause::new(&line[start..], in_quote));

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts<'a>(clauses: &[Clause<'a>]) -> Vec<&'a str> {
        clauses.iter().map(|c| c.text).collect()
    }

    #[rstest]
    #[case(r#"SUBSYSTEM=="usb""#, vec![r#"SUBSYSTEM=="usb""#])]
    #[case(
        r#"SUBSYSTEM=="usb", ATTR{power/control}="auto""#,
        vec![r#"SUBSYSTEM=="usb""#, r#"ATTR{power/control}="auto""#]
    )]
    #[case(r#"ENV{ID}=="a,b""#, vec![r#"ENV{ID}=="a,b""#])]
    #[case(
        r#"ENV{ID}=="a\",b", NAME="c""#,
        vec![r#"ENV{ID}=="a\",b""#, r#"NAME="c""#]
    )]
    #[case(r#"NAME="a",  ,GOTO="b""#, vec![r#"NAME="a""#, "", r#"GOTO="b""#])]
    #[case(r#"NAME="a","#, vec![r#"NAME="a""#, ""])]
    #[case(r#"RUN+="x\\", NAME="y""#, vec![r#"RUN+="x\\""#, r#"NAME="y""#])]
    #[case(r#"KERNEL==sd\,a"#, vec![r#"KERNEL==sd\"#, "a"])]
    fn test_split_clauses(#[case] line: &str, #[case] expected: Vec<&str>) {
        let clauses = split_clauses(line);
        assert_eq!(texts(&clauses), expected);
        assert!(clauses.iter().all(|c| !c.unterminated_quote));
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        let clauses = split_clauses(r#"NAME="a", ATTR{power/control}=="auto, GOTO="end""#);
        assert_eq!(
            clauses,
            vec![
                Clause {
                    text: r#"NAME="a""#,
                    unterminated_quote: false
                },
                Clause {
                    text: r#"ATTR{power/control}=="auto, GOTO="end""#,
                    unterminated_quote: true
                },
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_is_flagged() {
        let clauses = split_clauses(r#"NAME="a", ATTR{power/control}=="auto"#);
        assert_eq!(clauses.len(), 2);
        assert!(!clauses[0].unterminated_quote);
        assert!(clauses[1].unterminated_quote);
        assert_eq!(clauses[1].text, r#"ATTR{power/control}=="auto"#);
    }

    #[test]
    fn test_escaped_quote_at_end_is_unterminated() {
        let clauses = split_clauses(r#"NAME="a\""#);
        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].unterminated_quote);
    }
}
