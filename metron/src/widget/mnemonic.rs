use unicode_segmentation::UnicodeSegmentation;

/// Marker preceding the mnemonic character in a label. Doubled, it stands for itself.
const MNEMONIC_MARKER: &str = "&";

/// Extracts the mnemonic of a label: the grapheme following the first lone `&`.
///
/// `"&Open"` has mnemonic `"O"`, `"Save && Quit"` has none.
pub fn mnemonic_from_text(text: &str) -> Option<String> {
    let mut graphemes = text.graphemes(true);
    while let Some(g) = graphemes.next() {
        if g != MNEMONIC_MARKER {
            continue;
        }
        match graphemes.next() {
            Some(MNEMONIC_MARKER) => continue,
            Some(next) => return Some(next.to_string()),
            None => return None,
        }
    }
    None
}

/// Removes mnemonic markers, turning `&&` into `&`.
pub fn strip_mnemonic_markers(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut graphemes = text.graphemes(true);
    while let Some(g) = graphemes.next() {
        if g == MNEMONIC_MARKER {
            if let Some(next) = graphemes.next() {
                result.push_str(next);
            }
        } else {
            result.push_str(g);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_marked_grapheme() {
        assert_eq!(mnemonic_from_text("&Open").as_deref(), Some("O"));
        assert_eq!(mnemonic_from_text("Save &As").as_deref(), Some("A"));
        assert_eq!(mnemonic_from_text("Plain"), None);
    }

    #[test]
    fn doubled_marker_is_literal() {
        assert_eq!(mnemonic_from_text("Save && Quit"), None);
        assert_eq!(mnemonic_from_text("A && &B").as_deref(), Some("B"));
        assert_eq!(mnemonic_from_text("trailing &"), None);
    }

    #[test]
    fn combining_characters_stay_together() {
        assert_eq!(mnemonic_from_text("&e\u{301}cole").as_deref(), Some("e\u{301}"));
    }

    #[test]
    fn strip() {
        assert_eq!(strip_mnemonic_markers("&Open"), "Open");
        assert_eq!(strip_mnemonic_markers("Save && Quit"), "Save & Quit");
    }
}
