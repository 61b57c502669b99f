use crate::types::Segment;

/// Split `lines` into windows of up to `window` lines, each starting
/// `window - overlap` lines after the previous one (at least one line).
///
/// Line numbers are local to `lines` (first line is 1); callers working on a
/// sub-range re-anchor them with [`Segment::shifted`]. A window starts at
/// every step offset below the line count, so the tail windows may be
/// shorter than `window` and may lie inside their predecessor.
pub fn split_windows(lines: &[&str], window: usize, overlap: usize) -> Vec<Segment> {
    let total = lines.len();
    let window = window.max(1);
    let step = window.saturating_sub(overlap).max(1);

    let mut segments = Vec::with_capacity(total.div_ceil(step));
    let mut start = 0;

    while start < total {
        let end = (start + window).min(total);
        segments.push(Segment::from_lines(lines, start, end));
        start += step;
    }

    segments
}
