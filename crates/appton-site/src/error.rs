//! Site-level errors.

use appton_data::DataError;
use thiserror::Error;

/// Errors surfaced by the site runtime.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Loading the static data failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// A snapshot was requested before the viewport was measured
    #[error("cannot render before the viewport has been measured")]
    NotMeasured,
}
