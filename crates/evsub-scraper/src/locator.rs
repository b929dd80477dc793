//! Region and label windows inside unstructured page text.
//!
//! Source pages have no stable markup, so matching is plain substring search
//! and the result is a bounded slice of the text around the hit. Radii are in
//! characters; slices always land on UTF-8 boundaries.

use crate::extract::NotFoundReason;

/// Characters kept on each side of the region mention.
pub const REGION_RADIUS: usize = 80_000;

/// Characters kept before a trim/model label.
pub const LABEL_BEFORE: usize = 2_000;

/// Characters kept after a trim/model label. Totals usually follow the label.
pub const LABEL_AFTER: usize = 4_000;

/// Finds the first case-sensitive occurrence of `region` and returns the text
/// within [`REGION_RADIUS`] characters of it.
///
/// # Errors
///
/// Returns [`NotFoundReason::RegionNotFound`] when `region` is empty or does
/// not occur in `page`.
pub fn locate_window<'a>(page: &'a str, region: &str) -> Result<&'a str, NotFoundReason> {
    if region.is_empty() {
        return Err(NotFoundReason::RegionNotFound);
    }
    let at = page.find(region).ok_or(NotFoundReason::RegionNotFound)?;
    Ok(char_window(page, at, REGION_RADIUS, REGION_RADIUS))
}

/// Finds the first case-insensitive occurrence of `label` inside
/// `region_window` and returns [`LABEL_BEFORE`] characters before it through
/// [`LABEL_AFTER`] characters after its start.
///
/// `label` is matched literally. Case folding covers ASCII only; Hangul has
/// no case.
#[must_use]
pub fn locate_label<'a>(region_window: &'a str, label: &str) -> Option<&'a str> {
    let at = find_ignore_ascii_case(region_window, label)?;
    Some(char_window(region_window, at, LABEL_BEFORE, LABEL_AFTER))
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
///
/// Non-ASCII bytes compare exactly, so a hit always starts on the lead byte
/// of a character.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Slice of `text` from `before` characters ahead of byte offset `at` to
/// `after` characters past it, clamped to the text.
///
/// `at` must be a char boundary.
fn char_window(text: &str, at: usize, before: usize, after: usize) -> &str {
    let start = if before == 0 {
        at
    } else {
        text[..at]
            .char_indices()
            .rev()
            .nth(before - 1)
            .map_or(0, |(i, _)| i)
    };
    let end = text[at..]
        .char_indices()
        .nth(after)
        .map_or(text.len(), |(i, _)| at + i);
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_window_contains_match() {
        let page = "부산 100만원 | 서울 200만원 | 대구 300만원";
        let window = locate_window(page, "서울").expect("region present");
        assert!(window.contains("서울 200만원"));
    }

    #[test]
    fn missing_region_is_not_found() {
        let page = "부산 100만원 | 대구 300만원";
        assert_eq!(
            locate_window(page, "서울"),
            Err(NotFoundReason::RegionNotFound)
        );
    }

    #[test]
    fn empty_region_is_not_found() {
        assert_eq!(
            locate_window("서울 200만원", ""),
            Err(NotFoundReason::RegionNotFound)
        );
    }

    #[test]
    fn region_match_is_case_sensitive() {
        assert_eq!(
            locate_window("SEOUL 200만원", "Seoul"),
            Err(NotFoundReason::RegionNotFound)
        );
    }

    #[test]
    fn region_window_is_bounded_on_long_pages() {
        let filler = "가".repeat(REGION_RADIUS + 500);
        let page = format!("{filler}서울{filler}");
        let window = locate_window(&page, "서울").expect("region present");
        assert_eq!(window.chars().count(), REGION_RADIUS * 2);
        assert!(window.contains("서울"));
    }

    #[test]
    fn label_match_is_case_insensitive() {
        let window = locate_label("... MODEL 3 LONG RANGE 총 보조금 336만원", "Model 3 Long Range")
            .expect("label present");
        assert!(window.starts_with("... MODEL 3"));
    }

    #[test]
    fn label_is_matched_literally() {
        assert!(locate_label("Model 3 (AWD)", "(AWD)").is_some());
        assert!(locate_label("Model 3 AWD", "M.del").is_none());
    }

    #[test]
    fn label_window_keeps_more_text_after_than_before() {
        let before = "a".repeat(LABEL_BEFORE + 10);
        let after = "b".repeat(LABEL_AFTER + 10);
        let text = format!("{before}롱레인지{after}");
        let window = locate_label(&text, "롱레인지").expect("label present");
        let (head, tail) = window.split_once("롱레인지").expect("label inside window");
        assert_eq!(head.chars().count(), LABEL_BEFORE);
        assert_eq!(tail.chars().count(), LABEL_AFTER - "롱레인지".chars().count());
    }

    #[test]
    fn label_after_hangul_keeps_char_aligned_window() {
        let text = "서울특별시 모델 Y model y rwd 총 보조금 290만원";
        let window = locate_label(text, "Model Y RWD").expect("label present");
        assert!(window.starts_with("서울특별시"));
        assert!(window.ends_with("290만원"));

        let at = find_ignore_ascii_case(text, "MODEL Y").expect("label present");
        assert!(text.is_char_boundary(at));
        assert!(text[at..].starts_with("model y"));
    }

    #[test]
    fn empty_label_is_none() {
        assert!(locate_label("Model 3", "").is_none());
    }

    #[test]
    fn missing_label_is_none() {
        assert!(locate_label("Model Y RWD 200만원", "퍼포먼스").is_none());
    }

    #[test]
    fn char_window_clamps_to_text_bounds() {
        let text = "서울시 보조금";
        let at = text.find("보조금").expect("present");
        assert_eq!(char_window(text, at, 100, 100), text);
        assert_eq!(char_window(text, at, 1, 1), " 보");
    }
}
