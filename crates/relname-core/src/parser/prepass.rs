//! Container and air-date extraction, run once before boundary scanning.

use tracing::trace;

use crate::parser::extract::format_date;
use crate::parser::patterns::{PatternCatalog, is_plausible_year};
use crate::types::ParsedRelease;

/// Strips a trailing container extension and the first embedded date from
/// `name`, recording both on `release`. Returns the working string every
/// later phase operates on.
///
/// The container goes first so the date search never sees extension text.
pub fn pre_extract(
    catalog: &PatternCatalog,
    name: &str,
    latest_year: u16,
    release: &mut ParsedRelease,
) -> String {
    let mut work = name.to_string();

    if let Some(caps) = catalog.re_container.captures(name) {
        if let Some(whole) = caps.get(0) {
            release.container = Some(caps[1].to_lowercase());
            work.truncate(whole.start());
        }
    }

    let date = catalog.re_date.captures(&work).and_then(|caps| {
        let year = caps[1].parse::<u16>().ok();
        Some((caps.get(0)?.range(), format_date(&caps), year))
    });

    if let Some((range, date, year)) = date {
        trace!(%date, "extracted air date");
        if let Some(year) = year.filter(|&y| is_plausible_year(y, latest_year)) {
            release.year = Some(year);
        }
        release.date = Some(date);
        work.replace_range(range, "");
    }

    work
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str) -> (String, ParsedRelease) {
        let catalog = PatternCatalog::new().unwrap();
        let mut release = ParsedRelease::new(name);
        let work = pre_extract(&catalog, name, 2025, &mut release);
        (work, release)
    }

    #[test]
    fn strips_trailing_container() {
        let (work, r) = run("Avengers.Endgame.2019.1080p.BluRay.x264-SPARKS.MP4");
        assert_eq!(work, "Avengers.Endgame.2019.1080p.BluRay.x264-SPARKS");
        assert_eq!(r.container.as_deref(), Some("mp4"));
    }

    #[test]
    fn container_must_end_the_name() {
        let (work, r) = run("Movie.mkv.Sample.1080p");
        assert_eq!(work, "Movie.mkv.Sample.1080p");
        assert!(r.container.is_none());
    }

    #[test]
    fn extracts_daily_date_and_year() {
        let (work, r) = run("The.Daily.Show.2023-10-15.1080p.WEB");
        assert_eq!(work, "The.Daily.Show..1080p.WEB");
        assert_eq!(r.date.as_deref(), Some("2023.10.15"));
        assert_eq!(r.year, Some(2023));
    }

    #[test]
    fn implausible_date_year_keeps_date_only() {
        let (_, r) = run("Future.Show.2099.01.02.720p");
        assert_eq!(r.date.as_deref(), Some("2099.01.02"));
        assert!(r.year.is_none());
    }

    #[test]
    fn only_first_date_is_removed() {
        let (work, r) = run("News.2023.10.15.2023.10.16");
        assert_eq!(r.date.as_deref(), Some("2023.10.15"));
        assert_eq!(work, "News..2023.10.16");
    }

    #[test]
    fn plain_name_is_untouched() {
        let (work, r) = run("Some Movie");
        assert_eq!(work, "Some Movie");
        assert_eq!(r, ParsedRelease::new("Some Movie"));
    }
}
