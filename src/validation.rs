//! Supplier request validation. Runs before any write; failures surface as
//! 422 through the error mapper.

use crate::error::AppError;
use crate::model::SupplierDraft;

/// Create rejects an explicitly empty name. An absent name passes and is
/// stored as null.
pub fn validate_create(draft: &SupplierDraft) -> Result<(), AppError> {
    if draft.name.as_deref() == Some("") {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(())
}

/// Update requires a name. The remaining fields may be anything, including
/// absent (they overwrite with null).
pub fn validate_update(draft: &SupplierDraft) -> Result<(), AppError> {
    if draft.name.is_none() {
        return Err(AppError::Validation("name is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_name(name: Option<&str>) -> SupplierDraft {
        SupplierDraft {
            name: name.map(String::from),
            ..SupplierDraft::default()
        }
    }

    #[test]
    fn create_rejects_empty_name() {
        let err = validate_create(&draft_with_name(Some(""))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn create_accepts_absent_name() {
        assert!(validate_create(&draft_with_name(None)).is_ok());
    }

    #[test]
    fn create_accepts_nonempty_name() {
        assert!(validate_create(&draft_with_name(Some("Acme Co"))).is_ok());
    }

    #[test]
    fn update_rejects_absent_name() {
        let err = validate_update(&draft_with_name(None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn update_accepts_empty_name() {
        // Only absence is checked on update, matching create's asymmetry.
        assert!(validate_update(&draft_with_name(Some(""))).is_ok());
    }
}
