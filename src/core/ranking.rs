use crate::domain::model::Lawyer;
use rand::seq::SliceRandom;
use rand::Rng;

/// Listings ordered by review count, then rating, both descending.
///
/// Missing values count as zero. The sort is stable, so listings with equal
/// keys keep their input order. The input slice is left untouched.
pub fn sort_by_popularity(lawyers: &[Lawyer]) -> Vec<&Lawyer> {
    let mut sorted: Vec<&Lawyer> = lawyers.iter().collect();
    sorted.sort_by(|a, b| {
        b.review_count_or_zero()
            .cmp(&a.review_count_or_zero())
            .then_with(|| b.rating_or_zero().total_cmp(&a.rating_or_zero()))
    });
    sorted
}

/// Up to `count` randomly chosen listings, never the one with `exclude_slug`.
pub fn sample_random<'a>(lawyers: &'a [Lawyer], exclude_slug: &str, count: usize) -> Vec<&'a Lawyer> {
    sample_random_with(&mut rand::thread_rng(), lawyers, exclude_slug, count)
}

pub fn sample_random_with<'a, R: Rng + ?Sized>(
    rng: &mut R,
    lawyers: &'a [Lawyer],
    exclude_slug: &str,
    count: usize,
) -> Vec<&'a Lawyer> {
    let mut candidates: Vec<&Lawyer> = lawyers
        .iter()
        .filter(|lawyer| lawyer.slug != exclude_slug)
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(count);

    tracing::debug!(
        "Sampled {} of {} listings (excluding '{}')",
        candidates.len(),
        lawyers.len(),
        exclude_slug
    );

    candidates
}
