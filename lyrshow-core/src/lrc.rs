use std::time::Duration;

/// A single lyric line with its offset from the start of the track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    pub offset: Duration,
    pub text: String,
}

/// Parsed lyrics for one song, ordered by offset
///
/// Lines are sorted ascending by offset; lines with equal offsets keep
/// their input order. An empty timeline is a valid value and means no
/// synchronized lyrics are available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    lines: Vec<LyricLine>,
}

impl Timeline {
    /// Parse LRC markup into a timeline
    ///
    /// Recognized lines look like `[mm:ss.xx]text`. Metadata tags such as
    /// `[ar:Artist]`, timestamped lines with no text, and lines that do not
    /// parse are skipped; a malformed line never aborts the whole pass.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut lines: Vec<LyricLine> = input.lines().filter_map(parse_lyric_line).collect();
        lines.sort_by_key(|l| l.offset);
        Self { lines }
    }

    /// Build a timeline from plain, unsynchronized lyric text
    ///
    /// Every non-blank line becomes an entry at offset zero, which displays
    /// as an unsynchronized full list rather than nothing at all.
    #[must_use]
    pub fn from_plain(input: &str) -> Self {
        let lines = input
            .lines()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| LyricLine {
                offset: Duration::ZERO,
                text: text.to_string(),
            })
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LyricLine> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a LyricLine;
    type IntoIter = std::slice::Iter<'a, LyricLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Parse one line like `[00:12.34]Hello world`
fn parse_lyric_line(raw: &str) -> Option<LyricLine> {
    let trimmed = raw.trim();
    let rest = trimmed.strip_prefix('[')?;
    let close = rest.find(']')?;
    let tag = &rest[..close];
    let text = rest[close + 1..].trim();

    if text.is_empty() {
        return None;
    }
    // Metadata tags like [ar:...] or [ti:...] start with a letter
    if tag.chars().next()?.is_alphabetic() {
        return None;
    }

    let offset = parse_offset(tag)?;
    Some(LyricLine {
        offset,
        text: text.to_string(),
    })
}

/// Parse a `mm:ss`-style tag into an offset
///
/// Only the first two colon-separated fields count; anything after them is
/// ignored. Returns `None` unless both fields are numeric and the combined
/// offset is a finite, non-negative number of seconds.
fn parse_offset(tag: &str) -> Option<Duration> {
    let mut fields = tag.split(':');
    let minutes: f64 = fields.next()?.trim().parse().ok()?;
    let seconds: f64 = fields.next()?.trim().parse().ok()?;
    Duration::try_from_secs_f64(minutes * 60.0 + seconds).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let timeline = Timeline::parse("[00:12.34] Hello world");
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().offset, Duration::from_millis(12340));
        assert_eq!(timeline.get(0).unwrap().text, "Hello world");
    }

    #[test]
    fn test_parse_sorts_by_offset_keeping_ties_in_input_order() {
        let input = r#"
[00:10.00] a
[00:05.00] b
[ar:Somebody]
[00:05.00] c
"#;
        let timeline = Timeline::parse(input);
        let entries: Vec<(Duration, &str)> = timeline
            .lines()
            .iter()
            .map(|l| (l.offset, l.text.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![
                (Duration::from_secs(5), "b"),
                (Duration::from_secs(5), "c"),
                (Duration::from_secs(10), "a"),
            ]
        );
    }

    #[test]
    fn test_metadata_tags_ignored() {
        let input = r#"
[ti:Song Title]
[ar:Artist Name]
[al:Album Name]
[offset:500]
[00:05.00] Lyrics here
"#;
        let timeline = Timeline::parse(input);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().offset, Duration::from_secs(5));
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let input = r#"
not a lyric line
[12] no colon in tag
[aa:bb] words where numbers should be
[1:xx] bad seconds field
[]: empty tag
[00:05.00] the only good line
"#;
        let timeline = Timeline::parse(input);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().text, "the only good line");
    }

    #[test]
    fn test_timestamped_line_without_text_skipped() {
        let timeline = Timeline::parse("[00:05.00]\n[00:06.00]   \n[00:07.00] x");
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().text, "x");
    }

    #[test]
    fn test_negative_and_non_finite_offsets_skipped() {
        let input = r#"
[-1:30] negative minutes
[0:-90] negative seconds
[nan:0] not a number
[inf:0] unbounded
[00:05.00] kept
"#;
        let timeline = Timeline::parse(input);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().offset, Duration::from_secs(5));
    }

    #[test]
    fn test_extra_colon_fields_ignored() {
        // Third and later fields carry no weight, unlike mm:ss:xx dialects
        let timeline = Timeline::parse("[00:12:34] Hello");
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().offset, Duration::from_secs(12));
    }

    #[test]
    fn test_fractional_minutes_accepted() {
        let timeline = Timeline::parse("[1.5:00] halfway through the second minute");
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().offset, Duration::from_secs(90));
    }

    #[test]
    fn test_text_after_first_closing_bracket_is_kept_verbatim() {
        // A second timestamp is text, not a repeated line marker
        let timeline = Timeline::parse("[00:05.00][00:15.00] Repeated lyric");
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.get(0).unwrap().offset, Duration::from_secs(5));
        assert_eq!(timeline.get(0).unwrap().text, "[00:15.00] Repeated lyric");
    }

    #[test]
    fn test_parse_cjk_text() {
        let timeline = Timeline::parse("[00:05.00]你好世界");
        assert_eq!(timeline.get(0).unwrap().text, "你好世界");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(Timeline::parse("").is_empty());
        assert!(Timeline::parse("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_arbitrary_garbage_never_panics() {
        let timeline = Timeline::parse("[[[:]]]\n[:::]\n[]\n]\n[\n\u{0}[1:2\u{7f}");
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_offsets_non_decreasing_after_parse() {
        let input = "[02:00.00] d\n[00:30.00] a\n[01:00.00] b\n[01:00.00] c";
        let timeline = Timeline::parse(input);
        let offsets: Vec<Duration> = timeline.lines().iter().map(|l| l.offset).collect();
        let mut sorted = offsets.clone();
        sorted.sort();
        assert_eq!(offsets, sorted);
    }

    #[test]
    fn test_from_plain_zero_offsets_and_blank_lines_dropped() {
        let timeline = Timeline::from_plain("First line\n\n  Second line  \n\t\n");
        assert_eq!(timeline.len(), 2);
        assert!(timeline.lines().iter().all(|l| l.offset == Duration::ZERO));
        assert_eq!(timeline.get(0).unwrap().text, "First line");
        assert_eq!(timeline.get(1).unwrap().text, "Second line");
    }

    #[test]
    fn test_from_plain_empty_input() {
        assert!(Timeline::from_plain("").is_empty());
    }
}
