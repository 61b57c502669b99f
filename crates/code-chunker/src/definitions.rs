use crate::lines::is_blank;
use crate::types::Segment;
use regex::Regex;

/// Split `lines` on every line matching the boundary `pattern`.
///
/// Lines before the first boundary form a preamble segment, kept only if one
/// of them is non-blank. Each boundary opens a segment running up to the next
/// boundary or the end of the file, so the segments are contiguous and never
/// overlap. Returns `None` when no line matches.
pub fn split_definitions(lines: &[&str], pattern: &Regex) -> Option<Vec<Segment>> {
    let boundaries: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(idx, _)| idx)
        .collect();

    let first = *boundaries.first()?;
    let mut segments = Vec::with_capacity(boundaries.len() + 1);

    if first > 0 && lines[..first].iter().any(|line| !is_blank(line)) {
        segments.push(Segment::from_lines(lines, 0, first));
    }

    for (idx, &start) in boundaries.iter().enumerate() {
        let end = boundaries.get(idx + 1).copied().unwrap_or(lines.len());
        segments.push(Segment::from_lines(lines, start, end));
    }

    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::boundary_pattern;
    use crate::language::Language;
    use pretty_assertions::assert_eq;

    fn python() -> &'static Regex {
        boundary_pattern(Language::Python).unwrap()
    }

    fn ranges(segments: &[Segment]) -> Vec<(usize, usize)> {
        segments.iter().map(|s| (s.start_line, s.end_line)).collect()
    }

    #[test]
    fn splits_preamble_and_definitions() {
        let lines = [
            "import os\n",
            "\n",
            "def a():\n",
            "    return 1\n",
            "\n",
            "class B:\n",
            "    def m(self):\n",
            "        pass\n",
        ];

        let segments = split_definitions(&lines, python()).unwrap();
        assert_eq!(ranges(&segments), vec![(1, 2), (3, 5), (6, 8)]);
        assert_eq!(segments[0].content, "import os\n\n");
        assert!(segments[2].content.contains("def m(self)"));
        assert_eq!(
            segments.iter().map(|s| s.content.as_str()).collect::<String>(),
            lines.concat()
        );
    }

    #[test]
    fn blank_preamble_is_dropped() {
        let lines = ["\n", "   \n", "def a():\n", "    pass\n", "def b():\n", "    pass\n"];

        let segments = split_definitions(&lines, python()).unwrap();
        assert_eq!(ranges(&segments), vec![(3, 4), (5, 6)]);
    }

    #[test]
    fn boundary_on_first_line_has_no_preamble() {
        let lines = ["def a():\n", "    pass\n", "def b():\n"];

        let segments = split_definitions(&lines, python()).unwrap();
        assert_eq!(ranges(&segments), vec![(1, 2), (3, 3)]);
    }

    #[test]
    fn single_boundary_yields_at_most_two_segments() {
        let lines = ["import sys\n", "def only():\n", "    pass\n"];
        let segments = split_definitions(&lines, python()).unwrap();
        assert_eq!(ranges(&segments), vec![(1, 1), (2, 3)]);

        let lines = ["def only():\n", "    pass\n"];
        let segments = split_definitions(&lines, python()).unwrap();
        assert_eq!(ranges(&segments), vec![(1, 2)]);
    }

    #[test]
    fn no_match_reports_failure() {
        let lines = ["x = 1\n", "    def nested():\n"];
        assert!(split_definitions(&lines, python()).is_none());
    }
}
