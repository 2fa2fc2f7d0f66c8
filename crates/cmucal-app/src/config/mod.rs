use chrono_tz::Tz;
pub use cmucal_core::config::*;
use cmucal_recurrence::recurrence::resolve_timezone;

use crate::error::AppResult;

/// ## Summary
/// Resolves the configured fallback timezone for requests without one.
///
/// ## Errors
/// Returns an error if `recurrence.default_timezone` is not a known IANA name.
pub fn default_timezone(settings: &Settings) -> AppResult<Tz> {
    Ok(resolve_timezone(&settings.recurrence.default_timezone)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn resolves_configured_timezone() {
        let settings = Settings::from_toml_str(
            r#"
            [recurrence]
            default_timezone = "Asia/Tokyo"
            "#,
        )
        .unwrap();

        assert_eq!(default_timezone(&settings).unwrap(), Tz::Asia__Tokyo);
    }

    #[test]
    fn rejects_unknown_configured_timezone() {
        let settings = Settings::from_toml_str(
            r#"
            [recurrence]
            default_timezone = "Nowhere/Special"
            "#,
        )
        .unwrap();

        assert!(matches!(
            default_timezone(&settings),
            Err(AppError::RecurrenceError(_))
        ));
    }
}
