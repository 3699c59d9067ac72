//! Positional edit application.
//!
//! Offsets and lengths count UTF-16 code units, matching what the grammar
//! service reports. Edits are applied from the highest offset down so that
//! every pending edit still refers to untouched text.

use std::ops::Range;

use tracing::debug;

/// Replace `length` units starting at `offset` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub offset: usize,
    pub length: usize,
    pub replacement: String,
}

/// Applies non-overlapping edits to `text`.
///
/// Edits are sorted by descending offset (stable for equal offsets). An edit is
/// skipped when it runs past the end of the text, splits a character, or
/// reaches into a range an earlier-applied edit already replaced. Edits that
/// merely touch (one ends where the next begins) are all applied.
pub fn apply_edits(text: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.offset.cmp(&a.offset));

    let mut result = text.to_string();
    // Lowest offset already rewritten; everything before it is still original text.
    let mut floor = usize::MAX;

    for edit in ordered {
        let end = edit.offset.saturating_add(edit.length);
        if end > floor {
            debug!(
                "Skipping edit at {}..{}: overlaps an applied edit",
                edit.offset, end
            );
            continue;
        }
        let Some(range) = byte_range(text, edit.offset, end) else {
            debug!("Skipping edit at {}..{}: outside the text", edit.offset, end);
            continue;
        };
        result.replace_range(range, &edit.replacement);
        floor = edit.offset;
    }

    result
}

/// Maps a UTF-16 unit range onto byte indices of `text`, if both ends fall on
/// character boundaries inside the string.
fn byte_range(text: &str, start: usize, end: usize) -> Option<Range<usize>> {
    let mut start_byte = None;
    let mut end_byte = None;
    let mut units = 0;

    let boundaries = text
        .char_indices()
        .map(|(byte, c)| (byte, c.len_utf16()))
        .chain(std::iter::once((text.len(), 0)));

    for (byte, width) in boundaries {
        if units == start {
            start_byte = Some(byte);
        }
        if units == end {
            end_byte = Some(byte);
            break;
        }
        if units > end {
            break;
        }
        units += width;
    }

    Some(start_byte?..end_byte?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(offset: usize, length: usize, replacement: &str) -> Edit {
        Edit {
            offset,
            length,
            replacement: replacement.to_string(),
        }
    }

    #[test]
    fn test_no_edits_returns_original() {
        assert_eq!(apply_edits("as is ", &[]), "as is ");
    }

    #[test]
    fn test_applies_in_descending_order_regardless_of_input_order() {
        let text = "the report need to be done by friday";
        let edits = [
            edit(0, 3, "The"),
            edit(30, 6, "Friday"),
            edit(11, 4, "needs"),
        ];
        assert_eq!(
            apply_edits(text, &edits),
            "The report needs to be done by Friday"
        );
    }

    #[test]
    fn test_length_changing_edits_keep_earlier_offsets_valid() {
        // Growing the later word must not shift the earlier one.
        let edits = [edit(0, 1, "A"), edit(2, 1, "very long word")];
        assert_eq!(apply_edits("a b c", &edits), "A very long word c");
    }

    #[test]
    fn test_adjacent_edits_both_apply() {
        let edits = [edit(0, 3, "one"), edit(3, 3, "two")];
        assert_eq!(apply_edits("abcdef", &edits), "onetwo");
    }

    #[test]
    fn test_edit_ending_at_text_end() {
        assert_eq!(apply_edits("abc", &[edit(2, 1, "Z")]), "abZ");
    }

    #[test]
    fn test_insertion_at_text_end() {
        assert_eq!(apply_edits("done", &[edit(4, 0, ".")]), "done.");
    }

    #[test]
    fn test_overlapping_lower_edit_is_skipped() {
        // 3..7 overlaps the already-applied 5..9.
        let edits = [edit(3, 4, "XXXX"), edit(5, 4, "YY")];
        assert_eq!(apply_edits("0123456789", &edits), "01234YY9");
    }

    #[test]
    fn test_edit_contained_in_applied_edit_is_skipped() {
        let edits = [edit(2, 6, "-"), edit(4, 1, "?")];
        // Descending order applies 4..5 first; 2..8 then overlaps it and is skipped.
        assert_eq!(apply_edits("0123456789", &edits), "0123?56789");
    }

    #[test]
    fn test_out_of_range_edit_is_skipped() {
        let edits = [edit(10, 2, "nope"), edit(0, 1, "H")];
        assert_eq!(apply_edits("hello", &edits), "Hello");
    }

    #[test]
    fn test_offsets_count_utf16_units() {
        // "😀" is two UTF-16 units, so "teh" starts at unit 3.
        let text = "😀 teh cat";
        assert_eq!(apply_edits(text, &[edit(3, 3, "the")]), "😀 the cat");
    }

    #[test]
    fn test_edit_splitting_a_surrogate_pair_is_skipped() {
        let text = "😀 ok";
        assert_eq!(apply_edits(text, &[edit(1, 2, "x")]), text);
    }

    #[test]
    fn test_multibyte_text_before_edit() {
        let text = "café is closd";
        assert_eq!(apply_edits(text, &[edit(8, 5, "closed")]), "café is closed");
    }
}
