use textwrap::Options;

/// Wraps a category label to `width` characters for display, breaking at word
/// boundaries only. Presentation-only: the unwrapped name stays the data key.
pub fn wrap_label(name: &str, width: usize) -> Vec<String> {
    textwrap::wrap(name, Options::new(width).break_words(false))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_labels_stay_on_one_line() {
        assert_eq!(wrap_label("parserA", 30), vec!["parserA"]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        assert_eq!(
            wrap_label("tree sitter parser", 11),
            vec!["tree sitter", "parser"]
        );
    }

    #[test]
    fn test_never_breaks_inside_a_word() {
        assert_eq!(
            wrap_label("supercalifragilistic parser", 10),
            vec!["supercalifragilistic", "parser"]
        );
    }
}
