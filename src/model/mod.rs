pub mod contact;
pub mod quote;

use validator::ValidationError;

/// Both submission forms require explicit terms acceptance.
pub(crate) fn validate_terms_accepted(agree: &bool) -> Result<(), ValidationError> {
    if *agree {
        Ok(())
    } else {
        let mut err = ValidationError::new("terms_not_accepted");
        err.message = Some("terms must be accepted".into());
        Err(err)
    }
}
