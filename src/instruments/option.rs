//! Shared arguments/results vocabulary for the option family.
//!
//! Every option-family instrument exchanges the same payloads with its
//! pricing engine: [`OptionArguments`] going in, [`OptionResults`] coming
//! back. Variant instruments extend the arguments side (see
//! [`crate::instruments::barrier`]) but keep this results side unchanged.
//! Greeks conventions follow Hull (2018), Ch. 19.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use crate::core::{Arguments, ExerciseType, PricingEngine, PricingError, Results, ValidationError};
use crate::payoff::Payoff;

/// Engine trait object over the shared option vocabulary.
pub type OptionEngine = dyn PricingEngine<OptionArguments, OptionResults>;

/// Inputs shared by every option-family pricing engine.
///
/// Gathers what any option-style engine needs regardless of the concrete
/// contract being priced, and polices the minimal preconditions every such
/// engine relies on. Build one fresh per pricing cycle, by hand or through
/// an instrument's `setup_arguments`.
///
/// # Examples
/// ```
/// use openargent::core::Arguments;
/// use openargent::instruments::OptionArguments;
///
/// let arguments = OptionArguments::default();
/// let err = arguments.validate().unwrap_err();
/// assert_eq!(err.message(), "no payoff given");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionArguments {
    /// Payoff handle, shared with the instrument. `None` until bound.
    pub payoff: Option<Arc<dyn Payoff>>,
    /// Exercise rights tag. Copied through, never checked by validation.
    pub exercise_type: ExerciseType,
    /// Exercise schedule as ascending year fractions.
    pub stopping_times: Vec<f64>,
    /// Time to maturity in year fractions. `None` until assigned.
    pub maturity: Option<f64>,
}

impl Arguments for OptionArguments {
    /// Checks payoff binding, then maturity presence, then maturity sign,
    /// surfacing the first failure; a NaN maturity fails the sign check.
    /// The exercise tag and the stopping times are outside the contract;
    /// variant payloads layer their own checks on top of this one.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.payoff.is_none() {
            return Err(ValidationError::new("no payoff given"));
        }
        let maturity = self
            .maturity
            .ok_or_else(|| ValidationError::new("no maturity given"))?;
        // negated comparison so NaN lands in the failure branch
        if !(maturity >= 0.0) {
            return Err(ValidationError::new("negative maturity"));
        }
        Ok(())
    }
}

/// Bag of sensitivities written back by option pricing engines.
///
/// Every field starts unset and stays independent: an engine fills what it
/// can compute and leaves the rest `None`, so `Some(0.0)` always means
/// "computed as zero" rather than "not computed".
///
/// # Examples
/// ```
/// use openargent::instruments::Greeks;
///
/// let greeks = Greeks::new();
/// assert!(greeks.delta.is_none());
/// assert!(greeks.strike_sensitivity.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: Option<f64>,
    /// Second derivative to spot.
    pub gamma: Option<f64>,
    /// First derivative to time.
    pub theta: Option<f64>,
    /// First derivative to volatility.
    pub vega: Option<f64>,
    /// First derivative to rate.
    pub rho: Option<f64>,
    /// First derivative to dividend yield.
    pub dividend_rho: Option<f64>,
    /// First derivative to strike.
    pub strike_sensitivity: Option<f64>,
}

impl Greeks {
    /// Builds a container with every field unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Results for Greeks {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Unified results payload for the option family.
///
/// Pairs the present value and its sampling error with the [`Greeks`] bag.
/// Lives in an instrument's resident slot and is cleared in place, not
/// reallocated, between pricing cycles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OptionResults {
    /// Present value.
    pub value: Option<f64>,
    /// Standard error (typically Monte Carlo only).
    pub error_estimate: Option<f64>,
    /// Greeks, filled to whatever extent the engine supports.
    pub greeks: Greeks,
}

impl OptionResults {
    /// Builds a payload with every field unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Results for OptionResults {
    fn reset(&mut self) {
        self.value = None;
        self.error_estimate = None;
        self.greeks.reset();
    }
}

/// Attached engine plus the resident results slot of one instrument.
///
/// The slot is the reuse point of the exchange: results are cleared in place
/// before every cycle instead of being reallocated. A calculated flag keeps
/// repeated accessor calls from re-running the engine until
/// [`EngineSlot::invalidate`] or an engine swap.
#[derive(Debug, Clone)]
pub struct EngineSlot<A: Arguments> {
    engine: Option<Arc<dyn PricingEngine<A, OptionResults>>>,
    results: RefCell<OptionResults>,
    calculated: Cell<bool>,
}

impl<A: Arguments> EngineSlot<A> {
    /// Builds an empty slot with no engine attached.
    pub fn new() -> Self {
        Self {
            engine: None,
            results: RefCell::new(OptionResults::new()),
            calculated: Cell::new(false),
        }
    }

    /// Attaches or replaces the pricing engine and drops cached results.
    pub fn set_engine(&mut self, engine: Arc<dyn PricingEngine<A, OptionResults>>) {
        self.engine = Some(engine);
        self.calculated.set(false);
    }

    /// True when an engine is attached.
    #[inline]
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Marks cached results stale so the next access reprices.
    #[inline]
    pub fn invalidate(&self) {
        self.calculated.set(false);
    }

    /// Runs one pricing cycle unless cached results are current.
    ///
    /// Expired instruments bypass the engine entirely: the slot is reset and
    /// value and error estimate are written as zero. Otherwise a fresh
    /// arguments payload is requested from `build_arguments` and handed to
    /// the attached engine through [`PricingEngine::price`], which validates
    /// it and clears the slot before calculating.
    pub fn ensure_calculated(
        &self,
        instrument_type: &str,
        expired: bool,
        build_arguments: impl FnOnce() -> A,
    ) -> Result<(), PricingError> {
        if self.calculated.get() {
            return Ok(());
        }
        let mut results = self.results.borrow_mut();
        if expired {
            results.reset();
            results.value = Some(0.0);
            results.error_estimate = Some(0.0);
        } else {
            let engine = self
                .engine
                .as_deref()
                .ok_or_else(|| PricingError::MissingEngine(instrument_type.to_string()))?;
            let arguments = build_arguments();
            engine.price(&arguments, &mut results)?;
        }
        self.calculated.set(true);
        Ok(())
    }

    /// Copy of the resident results.
    #[inline]
    pub fn results(&self) -> OptionResults {
        *self.results.borrow()
    }
}

impl<A: Arguments> Default for EngineSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionType;
    use crate::payoff::PlainVanillaPayoff;

    #[test]
    fn default_arguments_start_unset() {
        let arguments = OptionArguments::default();
        assert!(arguments.payoff.is_none());
        assert_eq!(arguments.exercise_type, ExerciseType::European);
        assert!(arguments.stopping_times.is_empty());
        assert_eq!(arguments.maturity, None);
    }

    #[test]
    fn greeks_construction_implies_reset() {
        let greeks = Greeks::new();
        assert_eq!(greeks, Greeks::default());
        assert!(greeks.delta.is_none());
        assert!(greeks.gamma.is_none());
        assert!(greeks.theta.is_none());
        assert!(greeks.vega.is_none());
        assert!(greeks.rho.is_none());
        assert!(greeks.dividend_rho.is_none());
        assert!(greeks.strike_sensitivity.is_none());
    }

    #[test]
    fn greeks_reset_is_idempotent() {
        let mut greeks = Greeks {
            delta: Some(0.5),
            gamma: Some(0.02),
            theta: Some(-6.4),
            vega: Some(37.5),
            rho: Some(53.2),
            dividend_rho: Some(-63.7),
            strike_sensitivity: Some(-0.53),
        };
        for _ in 0..3 {
            greeks.reset();
            assert_eq!(greeks, Greeks::default());
        }
    }

    #[test]
    fn results_reset_clears_nested_greeks() {
        let mut results = OptionResults {
            value: Some(10.45),
            error_estimate: Some(0.01),
            greeks: Greeks {
                delta: Some(0.64),
                ..Greeks::default()
            },
        };
        results.reset();
        assert_eq!(results, OptionResults::default());
    }

    #[test]
    fn computed_zero_is_distinct_from_unset() {
        let mut greeks = Greeks::new();
        greeks.delta = Some(0.0);
        assert_ne!(greeks.delta, None);
        greeks.reset();
        assert_eq!(greeks.delta, None);
    }

    #[test]
    fn validate_leaves_arguments_untouched() {
        let payoff: Arc<dyn Payoff> = Arc::new(PlainVanillaPayoff::new(OptionType::Call, 100.0));
        let arguments = OptionArguments {
            payoff: Some(Arc::clone(&payoff)),
            exercise_type: ExerciseType::European,
            stopping_times: vec![1.0],
            maturity: Some(1.0),
        };
        assert!(arguments.validate().is_ok());
        assert!(arguments.validate().is_ok());
        assert_eq!(arguments.stopping_times, vec![1.0]);
        assert_eq!(arguments.maturity, Some(1.0));
        // the payload shares the payoff, it never takes sole ownership
        assert_eq!(Arc::strong_count(&payoff), 2);
    }
}
