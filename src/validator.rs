use tracing::debug;

use crate::attr::{Attribute, AttributeSet, parse_attribute_list};
use crate::error::ValidationError;
use crate::fd::FunctionalDependency;
use crate::store::FdStore;

pub const DETERMINANT_LABEL: &str = "Determinant";
pub const DEPENDENT_LABEL: &str = "Dependent";

/// Run the full rule pipeline for one submission.
///
/// Field errors from both sides are reported together. Once both fields
/// parse, the trivial, duplicate and overlap checks run in that order and
/// the first failure is returned on its own.
pub fn validate_dependency(
    det_raw: &str,
    dep_raw: &str,
    store: &FdStore,
) -> Result<FunctionalDependency, Vec<ValidationError>> {
    let det = parse_attribute_list(det_raw, DETERMINANT_LABEL);
    let dep = parse_attribute_list(dep_raw, DEPENDENT_LABEL);

    let (det, dep) = match (det, dep) {
        (Ok(det), Ok(dep)) => (det, dep),
        (det, dep) => {
            let errors: Vec<ValidationError> =
                det.err().into_iter().chain(dep.err()).collect();
            debug!(count = errors.len(), "field errors");
            return Err(errors);
        }
    };

    let candidate = FunctionalDependency::new(det, dep);
    check_candidate(&candidate, store).map_err(|e| vec![e])?;
    Ok(candidate)
}

fn check_candidate(candidate: &FunctionalDependency, store: &FdStore) -> Result<(), ValidationError> {
    let det = candidate.determinant();
    let dep = candidate.dependent();

    let shared: Vec<String> = det.shared_with(dep).map(Attribute::to_string).collect();
    if !shared.is_empty() {
        debug!(?shared, "trivial dependency");
        return Err(ValidationError::TrivialDependency { shared });
    }

    if store.iter().any(|e| e.same_sides(candidate)) {
        debug!(%candidate, "duplicate dependency");
        return Err(ValidationError::DuplicateFd);
    }

    if let Some(existing) = store.iter().find(|e| overlaps(e, det, dep)) {
        debug!(%candidate, %existing, "determinant overlap");
        return Err(ValidationError::DeterminantOverlapViolation {
            existing: existing.clone(),
        });
    }

    Ok(())
}

/// Heuristic redundancy test between a stored dependency and a candidate.
///
/// This only catches a determinant covering another determinant while a
/// dependent leaks into it. It is not a closure computation: dependencies
/// implied through chains of other dependencies are not detected.
fn overlaps(existing: &FunctionalDependency, det: &AttributeSet, dep: &AttributeSet) -> bool {
    let e_det = existing.determinant();
    let e_dep = existing.dependent();
    (e_det.is_subset(det) && e_dep.intersects(det)) || (det.is_subset(e_det) && dep.intersects(e_det))
}
