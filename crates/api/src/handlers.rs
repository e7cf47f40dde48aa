pub mod availability;
pub mod schedule;

use uuid::Uuid;
use workhours_core::{HoursError, Owner, OwnerKind};

use crate::middleware::error_handling::AppError;

/// Resolves the `/api/:kind/:id` path prefix into a schedule owner.
pub(crate) fn owner_from_path(kind: &str, id: Uuid) -> Result<Owner, AppError> {
    let kind = OwnerKind::from_path_segment(kind)
        .ok_or_else(|| HoursError::NotFound(format!("Unknown owner collection: {}", kind)))?;
    Ok(Owner { kind, id })
}
