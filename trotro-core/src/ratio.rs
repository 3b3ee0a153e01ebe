//! A typed ratio that makes division by zero explicit.
//!
//! Profit margin and return on investment divide by revenue and cost
//! respectively, and an empty or unpaid route makes either denominator
//! zero. Rather than letting `NaN` or infinity propagate silently, the
//! undefined case is a distinct variant callers must branch on.

/// A ratio that is either a finite value or explicitly undefined.
///
/// # Examples
/// ```
/// use trotro_core::Ratio;
///
/// assert_eq!(Ratio::of(3.0, 2.0), Ratio::Defined(1.5));
/// assert_eq!(Ratio::of(3.0, 0.0), Ratio::Undefined);
/// assert_eq!(Ratio::Undefined.or_sentinel(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ratio {
    /// The ratio evaluated to a finite value.
    Defined(f64),
    /// The denominator was zero; no value exists.
    Undefined,
}

impl Ratio {
    /// Divide `numerator` by `denominator`, yielding [`Ratio::Undefined`]
    /// when the denominator is zero or the quotient is not finite.
    #[must_use]
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Self::Undefined;
        }
        let value = numerator / denominator;
        if value.is_finite() {
            Self::Defined(value)
        } else {
            Self::Undefined
        }
    }

    /// The value, if defined.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(*value),
            Self::Undefined => None,
        }
    }

    /// Whether the ratio has a value.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// The value, or the `-1.0` reporting sentinel used by legacy
    /// consumers that cannot represent an absent ratio.
    #[must_use]
    pub const fn or_sentinel(&self) -> f64 {
        match self {
            Self::Defined(value) => *value,
            Self::Undefined => -1.0,
        }
    }
}
