//! Error types with diagnostics using miette
//!
//! The house mapper and the layout engine never fail; errors only come from
//! the edges of the crate: parsing an upstream payload and validating the
//! drawing size handed to the renderer.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while turning an upstream chart payload into a drawing
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("invalid chart payload: {source}")]
    #[diagnostic(
        code(kundali::payload::invalid_json),
        help("the payload must be a JSON object with `planets` and `aspects` arrays")
    )]
    Payload {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid chart size {value}: {reason}")]
    #[diagnostic(
        code(kundali::size::invalid),
        help("the drawing size must be a positive, finite number of pixels")
    )]
    InvalidSize { value: f64, reason: NumericError },

    #[error("invalid chart margin {value}: {reason}")]
    #[diagnostic(
        code(kundali::size::invalid_margin),
        help("the margin must be finite, non-negative and less than half the size")
    )]
    InvalidMargin { value: f64, reason: NumericError },
}
