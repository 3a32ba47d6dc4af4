use std::iter::Enumerate;
use std::str::SplitInclusive;

const CONTINUATION: &str = "\\\n";

/// One rule after continuation lines have been joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the first physical line of the group.
    pub line_number: usize,
    pub text: String,
}

impl LogicalLine {
    fn new(line_number: usize, raw: &str) -> Option<LogicalLine> {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            return None;
        }
        Some(LogicalLine {
            line_number,
            text: text.to_string(),
        })
    }
}

/// Iterates over the logical lines of one rules file. Comments and blank
/// lines are skipped.
///
/// A physical line ending in `\` directly followed by `\n` is glued to the
/// next one. When the content runs out in the middle of such a group the
/// pending text is not yielded, it is kept for [`LineJoiner::dangling`].
#[derive(Debug, Clone)]
pub struct LineJoiner<'buffer> {
    physical: Enumerate<SplitInclusive<'buffer, char>>,
    pending: Option<(usize, String)>,
}

impl<'buffer> LineJoiner<'buffer> {
    pub fn new(content: &'buffer str) -> LineJoiner<'buffer> {
        LineJoiner {
            physical: content.split_inclusive('\n').enumerate(),
            pending: None,
        }
    }

    /// Continuation group left open at end of input, if it holds anything
    /// other than whitespace or a comment. Only meaningful once the iterator
    /// is exhausted.
    pub fn dangling(&self) -> Option<LogicalLine> {
        self.pending
            .as_ref()
            .and_then(|(line_number, buffer)| LogicalLine::new(*line_number, buffer))
    }
}

impl<'buffer> Iterator for LineJoiner<'buffer> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.physical.next()?;
            let line_number = index + 1;

            if let Some(content) = raw.strip_suffix(CONTINUATION) {
                match &mut self.pending {
                    Some((_, buffer)) => buffer.push_str(content),
                    None => self.pending = Some((line_number, content.to_string())),
                }
                continue;
            }

            let logical = match self.pending.take() {
                Some((first, mut buffer)) => {
                    buffer.push_str(raw);
                    LogicalLine::new(first, &buffer)
                }
                None => LogicalLine::new(line_number, raw),
            };

            if logical.is_some() {
                return logical;
            }
        }
    }
}
