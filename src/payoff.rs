//! Payoff profiles bound into option argument payloads.
//!
//! The generic exchange treats the payoff as an opaque shared handle: the
//! base validation only checks that one is bound, and nothing else is
//! invoked on it. An engine that prices a specific contract form recovers
//! the concrete type through [`Payoff::as_any`].

use std::any::Any;

use crate::core::OptionType;

/// Payoff profile evaluated at exercise.
///
/// Implementations are immutable value objects shared between an instrument
/// and the argument payloads built from it, so they travel as
/// `Arc<dyn Payoff>` and are never solely owned by a payload.
pub trait Payoff: std::fmt::Debug + Send + Sync {
    /// Returns a short type identifier for diagnostics.
    fn payoff_type(&self) -> &str;

    /// Payoff value at the given underlying level.
    fn value(&self, underlying: f64) -> f64;

    /// Concrete-type access for engines that demand a specific contract form.
    fn as_any(&self) -> &dyn Any;
}

/// Fixed-strike payoff in the plain call/put/straddle family.
///
/// # Examples
/// ```
/// use openargent::core::OptionType;
/// use openargent::payoff::{Payoff, PlainVanillaPayoff};
///
/// let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
/// assert_eq!(call.value(105.0), 5.0);
/// assert_eq!(call.value(95.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Payoff side.
    pub option_type: OptionType,
    /// Strike level in spot units.
    pub strike: f64,
}

impl PlainVanillaPayoff {
    /// Builds a payoff with the given side and strike.
    pub fn new(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn payoff_type(&self) -> &str {
        "PlainVanillaPayoff"
    }

    fn value(&self, underlying: f64) -> f64 {
        match self.option_type {
            OptionType::Call => (underlying - self.strike).max(0.0),
            OptionType::Put => (self.strike - underlying).max(0.0),
            OptionType::Straddle => (underlying - self.strike).abs(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
