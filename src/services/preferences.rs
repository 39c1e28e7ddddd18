use crate::{
    error::{AppError, AppResult},
    models::{PreferenceProfile, ReadBook},
};

/// Derives the dominant author and category from a reading history
///
/// Author and category fields may hold several comma-separated values; each
/// value is trimmed and counted separately, case-sensitively. The dominant
/// entry is the one with the strictly highest count; on a tie the first
/// value to reach the maximum (in first-seen order) wins.
///
/// An empty history, or one whose fields contain no usable value at all,
/// is reported as `EmptyHistory` rather than producing a garbage profile.
pub fn compute_profile(books: &[ReadBook]) -> AppResult<PreferenceProfile> {
    if books.is_empty() {
        return Err(AppError::EmptyHistory);
    }

    let favorite_author =
        dominant_value(books.iter().map(|b| b.author.as_str())).ok_or(AppError::EmptyHistory)?;
    let favorite_category =
        dominant_value(books.iter().map(|b| b.category.as_str())).ok_or(AppError::EmptyHistory)?;

    Ok(PreferenceProfile {
        favorite_author,
        favorite_category,
    })
}

/// Most frequent split-and-trimmed value across the given fields
///
/// The tally preserves first-seen order, which makes the tie-break
/// deterministic. Values that are empty after trimming are skipped.
fn dominant_value<'a>(fields: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();

    for field in fields {
        for value in field.split(',') {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match tally.iter_mut().find(|(seen, _)| *seen == value) {
                Some((_, count)) => *count += 1,
                None => tally.push((value, 1)),
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in tally {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.to_string())
}
