use crate::models::{FilterSpec, Show};

const ARTICLES: [&str; 3] = ["the ", "an ", "a "];

/// Removes a leading "the", "a" or "an" so titles sort by their first real word
pub fn strip_article(title: &str) -> &str {
    let trimmed = title.trim_start();
    for article in ARTICLES {
        let has_article = trimmed
            .get(..article.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(article));
        if has_article {
            let rest = trimmed[article.len()..].trim_start();
            if !rest.is_empty() {
                return rest;
            }
        }
    }
    trimmed
}

fn sort_key(show: &Show) -> (u8, String) {
    (show.watch_status.rank(), strip_article(&show.title).to_lowercase())
}

/// Filtered and ordered view of a profile's shows.
///
/// Shows are ordered by watch status (not watched, watching, watched) and then
/// by title, ignoring case and a leading article. The sort is stable, so shows
/// with equal keys keep their input order.
pub fn apply(shows: &[Show], filter: &FilterSpec) -> Vec<Show> {
    let mut view: Vec<Show> = shows.iter().filter(|s| filter.matches(s)).cloned().collect();
    view.sort_by_cached_key(sort_key);
    view
}
