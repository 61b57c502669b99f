use crate::config::ChunkerConfig;
use crate::types::Segment;
use crate::window::split_windows;

/// Re-split every segment longer than `config.max_chunk_chars` characters.
///
/// An oversized segment is first re-windowed over its own line range with the
/// fallback window/overlap, and the windows are re-anchored to file lines.
/// A window that is still too long (very long lines) is packed greedily into
/// runs of whole lines, and a single line above the ceiling is cut at
/// character boundaries. Returns the segments and the number that were
/// re-split.
pub fn enforce_max_size(
    lines: &[&str],
    segments: Vec<Segment>,
    config: &ChunkerConfig,
) -> (Vec<Segment>, usize) {
    let max_chars = config.max_chunk_chars;
    let mut out = Vec::with_capacity(segments.len());
    let mut oversized = 0;

    for segment in segments {
        if segment.char_len() <= max_chars {
            out.push(segment);
            continue;
        }

        oversized += 1;
        log::debug!(
            "Re-splitting lines {}-{} ({} chars > {max_chars})",
            segment.start_line,
            segment.end_line,
            segment.char_len()
        );

        let offset = segment.start_line - 1;
        let local = &lines[offset..segment.end_line];
        for window in split_windows(
            local,
            config.fallback_window_lines,
            config.fallback_overlap_lines,
        ) {
            let window = window.shifted(offset);
            if window.char_len() <= max_chars {
                out.push(window);
            } else {
                pack_lines(lines, window.start_line, window.end_line, max_chars, &mut out);
            }
        }
    }

    (out, oversized)
}

/// Greedily pack the 1-indexed inclusive range `first..=last` into runs of
/// whole lines no longer than `max_chars`.
fn pack_lines(
    lines: &[&str],
    first: usize,
    last: usize,
    max_chars: usize,
    out: &mut Vec<Segment>,
) {
    let mut run_start = first - 1;
    let mut run_chars = 0;

    for idx in (first - 1)..last {
        let line_chars = lines[idx].chars().count();

        if run_chars + line_chars > max_chars && idx > run_start {
            out.push(Segment::from_lines(lines, run_start, idx));
            run_start = idx;
            run_chars = 0;
        }

        if line_chars > max_chars {
            split_long_line(lines[idx], idx + 1, max_chars, out);
            run_start = idx + 1;
            run_chars = 0;
            continue;
        }

        run_chars += line_chars;
    }

    if run_start < last {
        out.push(Segment::from_lines(lines, run_start, last));
    }
}

/// Cut one line into pieces of at most `max_chars` characters
fn split_long_line(line: &str, line_no: usize, max_chars: usize, out: &mut Vec<Segment>) {
    let mut piece_start = 0;
    let mut count = 0;

    for (byte_idx, _) in line.char_indices() {
        if count == max_chars {
            out.push(line_piece(&line[piece_start..byte_idx], line_no));
            piece_start = byte_idx;
            count = 0;
        }
        count += 1;
    }

    if piece_start < line.len() {
        out.push(line_piece(&line[piece_start..], line_no));
    }
}

fn line_piece(content: &str, line_no: usize) -> Segment {
    Segment {
        start_line: line_no,
        end_line: line_no,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::split_windows;
    use pretty_assertions::assert_eq;

    fn config(max_chunk_chars: usize) -> ChunkerConfig {
        ChunkerConfig {
            max_chunk_chars,
            ..ChunkerConfig::default()
        }
    }

    fn ranges(segments: &[Segment]) -> Vec<(usize, usize)> {
        segments.iter().map(|s| (s.start_line, s.end_line)).collect()
    }

    #[test]
    fn segments_within_ceiling_pass_through() {
        let lines = ["a\n", "b\n", "c\n"];
        let segments = vec![Segment::from_lines(&lines, 0, 3)];

        let (out, oversized) = enforce_max_size(&lines, segments.clone(), &config(100));
        assert_eq!(out, segments);
        assert_eq!(oversized, 0);
    }

    #[test]
    fn oversized_function_is_rewindowed_and_reanchored() {
        let mut owned = vec!["import sys\n".to_string(), "def mega_function():\n".to_string()];
        owned.extend((0..200).map(|i| format!("    x_{i} = {}\n", "a".repeat(40))));
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let segments = vec![
            Segment::from_lines(&lines, 0, 1),
            Segment::from_lines(&lines, 1, lines.len()),
        ];
        let (out, oversized) = enforce_max_size(&lines, segments, &ChunkerConfig::default());

        assert_eq!(oversized, 1);
        assert_eq!(
            ranges(&out),
            vec![(1, 1), (2, 61), (52, 111), (102, 161), (152, 202), (202, 202)]
        );
        assert!(out.iter().all(|s| s.char_len() <= 6000));
        assert!(out[1].content.starts_with("def mega_function():\n"));
        assert_eq!(out[2].content, lines[51..111].concat());
    }

    #[test]
    fn long_lines_are_packed_under_ceiling() {
        let owned: Vec<String> = (0..10).map(|i| format!("{i}{}\n", "x".repeat(48))).collect();
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let segments = split_windows(&lines, 60, 10);
        let (out, oversized) = enforce_max_size(&lines, segments, &config(120));

        assert_eq!(oversized, 1);
        assert!(out.iter().all(|s| s.char_len() <= 120));
        assert_eq!(ranges(&out), vec![(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)]);
        let rebuilt: String = out.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(rebuilt, lines.concat());
    }

    #[test]
    fn single_huge_line_is_cut_at_char_boundaries() {
        let huge = format!("{}\n", "é".repeat(25));
        let lines = ["short\n", huge.as_str(), "tail\n"];

        let segments = vec![Segment::from_lines(&lines, 0, 3)];
        let (out, _) = enforce_max_size(&lines, segments, &config(10));

        assert!(out.iter().all(|s| s.char_len() <= 10));
        assert_eq!(out[0].content, "short\n");
        assert!(out[1..4].iter().all(|s| s.start_line == 2 && s.end_line == 2));
        assert_eq!(out.last().map(|s| s.content.as_str()), Some("tail\n"));
        let rebuilt: String = out.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(rebuilt, lines.concat());
    }
}
