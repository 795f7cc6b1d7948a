//! Error handling and exit codes.

use profitcalc_core::constants::exit_codes;
use profitcalc_core::ProfitError;

/// Map an application error to its process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ProfitError>() {
        Some(ProfitError::Io(_) | ProfitError::Csv(_)) => exit_codes::ERROR_INPUT,
        Some(
            ProfitError::Config(_)
            | ProfitError::UnknownField(_)
            | ProfitError::UnknownCategory(_)
            | ProfitError::UnknownRow(_),
        ) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
