//! Title and unparsed-residue slicing once the boundary is fixed.

use crate::parser::patterns::PatternCatalog;
use crate::parser::scanner::is_separator;

/// Cleans the text left of `boundary` into a display title.
pub fn title(catalog: &PatternCatalog, work: &str, boundary: usize) -> String {
    let head = work[..boundary].trim_end_matches(is_separator);
    clean_title(catalog, head)
}

/// Dots and underscores become spaces; bracketed and trailing parenthetical
/// content is dropped; whitespace is collapsed.
pub fn clean_title(catalog: &PatternCatalog, raw: &str) -> String {
    let spaced = raw.replace(['.', '_'], " ");
    let unbracketed = catalog.re_brackets.replace_all(&spaced, "");
    let trimmed = catalog.re_trailing_paren.replace(&unbracketed, "");
    collapse_whitespace(&trimmed)
}

/// Text right of `boundary` that no pattern recognized, or `None`.
///
/// Every character that is not a letter or digit becomes a word break.
pub fn unparsed(
    catalog: &PatternCatalog,
    work: &str,
    boundary: usize,
    latest_year: u16,
) -> Option<String> {
    let tail = &work[boundary..];
    let mut recognized = vec![false; tail.len()];
    for span in catalog.all_spans(tail, latest_year) {
        recognized[span].fill(true);
    }

    let blanked: String = tail
        .char_indices()
        .map(|(i, c)| if recognized[i] { ' ' } else { c })
        .collect();
    let blanked = catalog.re_leftover_episode.replace_all(&blanked, " ");

    let words: String = blanked
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let residue = collapse_whitespace(&words);

    (!residue.is_empty()).then_some(residue)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PatternCatalog {
        PatternCatalog::new().unwrap()
    }

    #[test]
    fn title_trims_trailing_separators() {
        let c = catalog();
        assert_eq!(title(&c, "The.Daily.Show..1080p", 16), "The Daily Show");
        assert_eq!(title(&c, "Some_Movie - 1080p", 13), "Some Movie");
    }

    #[test]
    fn title_drops_bracketed_noise() {
        let c = catalog();
        assert_eq!(clean_title(&c, "[HorribleSubs] Show Name"), "Show Name");
        assert_eq!(clean_title(&c, "Movie (Extended)"), "Movie");
        assert_eq!(clean_title(&c, "Movie (Part 1) Returns"), "Movie (Part 1) Returns");
    }

    #[test]
    fn title_keeps_dotted_numbers_as_words() {
        let c = catalog();
        assert_eq!(clean_title(&c, "Godzilla 2.0"), "Godzilla 2 0");
    }

    #[test]
    fn unparsed_isolates_episode_title() {
        let c = catalog();
        let work = "Breaking.Bad.S01E01.Pilot.1080p.BluRay.x264-ROVERS";
        assert_eq!(unparsed(&c, work, 13, 2025).as_deref(), Some("Pilot"));
    }

    #[test]
    fn unparsed_removes_leftover_episode_codes() {
        let c = catalog();
        let work = "Show.S02E01.E08.Finale.2160p";
        assert_eq!(unparsed(&c, work, 5, 2025).as_deref(), Some("Finale"));
    }

    #[test]
    fn fully_recognized_tail_is_none() {
        let c = catalog();
        let work = "Game.of.Thrones.S08.Complete.1080p.BluRay.x264-ROVERS[rartv]";
        assert_eq!(unparsed(&c, work, 16, 2025), None);
        assert_eq!(unparsed(&c, "Some Movie", 10, 2025), None);
    }

    #[test]
    fn unparsed_splits_on_apostrophes() {
        let c = catalog();
        let work = "Show.S01E01.Tom's.Diner.720p";
        assert_eq!(unparsed(&c, work, 5, 2025).as_deref(), Some("Tom s Diner"));
    }

    #[test]
    fn unparsed_long_tail_of_tags() {
        let c = catalog();
        let work = format!("Movie.{}Extras.1080p", "5.1.".repeat(5_000));
        assert_eq!(unparsed(&c, &work, 5, 2025).as_deref(), Some("Extras"));
    }
}
