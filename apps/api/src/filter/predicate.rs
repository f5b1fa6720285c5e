use tracing::warn;

use crate::filter::facets::FacetKind;
use crate::filter::salary::{BucketUnits, OPEN_ENDED_BUCKET};
use crate::filter::selection::SelectionState;
use crate::models::job::JobPosting;

/// Postings that satisfy every active facet of `selection`, in input order.
///
/// Facets combine with AND; the values selected within one facet combine with
/// OR. An empty selection returns the whole collection.
pub fn filter_jobs<'a>(
    jobs: &'a [JobPosting],
    selection: &SelectionState,
    units: BucketUnits,
) -> Vec<&'a JobPosting> {
    if selection.is_empty() {
        return jobs.iter().collect();
    }

    if selection
        .selected(FacetKind::Salary)
        .iter()
        .any(|b| b == OPEN_ENDED_BUCKET)
    {
        warn!(
            "Salary bucket '{}' has no upper bound and matches no posting",
            OPEN_ENDED_BUCKET
        );
    }

    let active: Vec<(FacetKind, &[String])> = selection.active().collect();
    jobs.iter()
        .filter(|job| {
            active
                .iter()
                .all(|(kind, selected)| kind.matches(job, selected, units))
        })
        .collect()
}
