/// A run of reply text. Replies use `**...**` for bold and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Bold(&'a str),
}

/// Splits reply text into lines of spans. An unmatched `**` stays literal.
pub fn parse(text: &str) -> Vec<Vec<Span<'_>>> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        if open > 0 {
            spans.push(Span::Plain(&rest[..open]));
        }
        if close > 0 {
            spans.push(Span::Bold(&after[..close]));
        }
        rest = &after[close + 2..];
    }
    if !rest.is_empty() {
        spans.push(Span::Plain(rest));
    }
    spans
}

/// Reply text with the bold markers removed.
pub fn plain_text(text: &str) -> String {
    parse(text)
        .iter()
        .map(|line| {
            line.iter()
                .map(|span| match span {
                    Span::Plain(s) | Span::Bold(s) => *s,
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_runs() {
        assert_eq!(
            parse("Take **Bus 42** to **Barsur**."),
            vec![vec![
                Span::Plain("Take "),
                Span::Bold("Bus 42"),
                Span::Plain(" to "),
                Span::Bold("Barsur"),
                Span::Plain("."),
            ]]
        );
    }

    #[test]
    fn test_lines_split() {
        let lines = parse("**Title**\n\n• item");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], vec![Span::Bold("Title")]);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2], vec![Span::Plain("• item")]);
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        assert_eq!(
            parse("a **b** c **d"),
            vec![vec![
                Span::Plain("a "),
                Span::Bold("b"),
                Span::Plain(" c **d"),
            ]]
        );
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text("**Bus 10** runs\nevery **30** min"), "Bus 10 runs\nevery 30 min");
    }
}
