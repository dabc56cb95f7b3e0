//! Live counting: every line read from stdin is an edit to the text.

use std::io::{self, BufRead, Write};

use console::Term;
use log::debug;
use textstatlib::{Edit, EditBuffer, EmptyInput, StatsLabels, StatsSurface, TextWatcher};

use crate::render::OutputFormat;

/// Shows the labels on a terminal, redrawing them in place.
pub struct TermSurface {
    term: Term,
    drawn: usize,
}

impl TermSurface {
    pub fn new(term: Term) -> Self {
        Self { term, drawn: 0 }
    }
}

impl StatsSurface for TermSurface {
    fn show(&mut self, labels: &StatsLabels) -> io::Result<()> {
        if self.drawn > 0 {
            self.term.clear_last_lines(self.drawn)?;
        }
        for line in labels.lines() {
            self.term.write_line(line)?;
        }
        self.drawn = labels.lines().len();
        self.term.flush()
    }
}

/// Writes one JSON object per change.
pub struct JsonLinesSurface<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> StatsSurface for JsonLinesSurface<W> {
    fn show(&mut self, labels: &StatsLabels) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, labels)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Keeps only the latest labels, for output that is not a terminal.
#[derive(Default)]
pub struct LatestSurface {
    pub latest: Option<StatsLabels>,
}

impl StatsSurface for LatestSurface {
    fn show(&mut self, labels: &StatsLabels) -> io::Result<()> {
        self.latest = Some(labels.clone());
        Ok(())
    }
}

/// Feed every line of `input` into a buffer watched by `watcher`.
///
/// The initial empty value is shown before the first line arrives. Lines
/// are appended with their terminator as read, so the buffer ends up equal
/// to the input.
pub fn feed_lines<R: BufRead, S: StatsSurface>(
    mut input: R,
    watcher: &mut TextWatcher<S>,
) -> io::Result<EditBuffer> {
    let mut buffer = EditBuffer::new();
    watcher.on_change(buffer.as_str())?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        buffer.apply(Edit::Append(line.clone()), watcher)?;
    }

    debug!("live input closed after {} chars", buffer.as_str().len());
    Ok(buffer)
}

/// Run live mode over stdin, writing to stdout.
///
/// Returns whatever still needs printing once input ends.
pub fn run(format: OutputFormat, empty_input: EmptyInput) -> anyhow::Result<String> {
    let stdin = io::stdin().lock();

    if format == OutputFormat::Json {
        let mut watcher =
            TextWatcher::new(JsonLinesSurface::new(io::stdout())).with_empty_input(empty_input);
        feed_lines(stdin, &mut watcher)?;
        return Ok(String::new());
    }

    let term = Term::stdout();
    if term.is_term() {
        let mut watcher = TextWatcher::new(TermSurface::new(term)).with_empty_input(empty_input);
        feed_lines(stdin, &mut watcher)?;
        return Ok(String::new());
    }

    let mut watcher = TextWatcher::new(LatestSurface::default()).with_empty_input(empty_input);
    feed_lines(stdin, &mut watcher)?;
    Ok(watcher
        .into_surface()
        .latest
        .map(|labels| format!("{labels}\n"))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_lines_notifies_per_line() {
        let mut watcher = TextWatcher::new(Vec::<StatsLabels>::new());
        let buffer = feed_lines("hello\nbig world\n".as_bytes(), &mut watcher).unwrap();

        assert_eq!(buffer.as_str(), "hello\nbig world\n");
        let shown = watcher.into_surface();
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[0].word_count, "Word count: 0");
        assert_eq!(shown[1].word_count, "Word count: 1");
        assert_eq!(shown[2].word_count, "Word count: 3");
        assert_eq!(
            shown[2].letter_count_including_spaces,
            "Letter count (including spaces): 16"
        );
    }

    #[test]
    fn test_feed_lines_keeps_input_verbatim() {
        for input in ["ab", "a\r\nb\r\n", "one\n\ntwo", ""] {
            let mut watcher = TextWatcher::new(Vec::<StatsLabels>::new());
            let buffer = feed_lines(input.as_bytes(), &mut watcher).unwrap();

            assert_eq!(buffer.as_str(), input);
            assert_eq!(watcher.last(), Some(textstatlib::compute(input)));
        }
    }

    #[test]
    fn test_json_lines_surface() {
        let mut out = Vec::new();
        {
            let mut watcher = TextWatcher::new(JsonLinesSurface::new(&mut out));
            feed_lines("a b\n".as_bytes(), &mut watcher).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["word_count"], "Word count: 2");
    }

    #[test]
    fn test_latest_surface_keeps_last() {
        let mut watcher = TextWatcher::new(LatestSurface::default());
        feed_lines("one\ntwo three\n".as_bytes(), &mut watcher).unwrap();
        let latest = watcher.into_surface().latest.unwrap();
        assert_eq!(latest.word_count, "Word count: 3");
    }
}
