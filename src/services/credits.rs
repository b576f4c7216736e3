use crate::models::{MovieCredit, PersonCredits};

/// How many filmography entries the person page shows
const KNOWN_FOR_CAP: usize = 24;

/// Shapes a person's combined credits into the "Known For" filmography:
/// cast and crew credits merged, deduplicated by movie id (a director who
/// also acts appears once), entries without a poster dropped, newest first,
/// capped.
pub fn known_for(credits: PersonCredits) -> Vec<MovieCredit> {
    let mut seen = std::collections::HashSet::new();
    let mut merged: Vec<MovieCredit> = credits
        .cast
        .into_iter()
        .chain(credits.crew)
        .filter(|credit| seen.insert(credit.id))
        .filter(|credit| credit.poster_path.is_some())
        .collect();

    merged.sort_by(|a, b| {
        let date_a = a.release_date.as_deref().filter(|d| !d.is_empty()).unwrap_or("0000");
        let date_b = b.release_date.as_deref().filter(|d| !d.is_empty()).unwrap_or("0000");
        date_b.cmp(date_a)
    });
    merged.truncate(KNOWN_FOR_CAP);
    merged
}
