use thiserror::Error;

/// A recognized inline-style property carried a value outside its grammar.
///
/// Unknown properties are never errors; they are reported as warnings and
/// skipped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// `color` accepts exactly `#RRGGBB`.
    #[error("invalid color '{value}': expected #RRGGBB")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },

    /// `font-size` value is not an unsigned integer percentage.
    #[error("invalid font-size '{value}': expected an integer percentage such as 120%")]
    InvalidFontSize {
        /// The rejected value.
        value: String,
    },

    /// `font-size` value is a bare integer without the `%` unit.
    #[error("font-size '{value}' is missing the '%' unit")]
    MissingPercent {
        /// The rejected value.
        value: String,
    },

    /// A keyword property got a keyword it does not accept.
    #[error("invalid value '{value}' for property '{property}'")]
    InvalidKeyword {
        /// Name of the property, e.g. `font-weight`.
        property: &'static str,
        /// The rejected value.
        value: String,
    },
}
