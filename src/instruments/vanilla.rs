//! Canonical plain option contract wired to a pricing engine.
//!
//! [`VanillaOption`] stores a payoff handle, exercise rights, and the engine
//! attachment through which pricing runs. The numerical method is whatever
//! engine is attached; swapping engines never touches the contract terms.
//! References: Hull (2018), Ch. 10-13 for payoff and exercise conventions.

use std::sync::Arc;

use crate::core::{Instrument, OptionType, PricingError};
use crate::exercise::Exercise;
use crate::instruments::option::{EngineSlot, Greeks, OptionArguments, OptionEngine, OptionResults};
use crate::payoff::{Payoff, PlainVanillaPayoff};

/// Vanilla option instrument.
///
/// # Examples
/// ```
/// use openargent::instruments::VanillaOption;
///
/// let call = VanillaOption::european_call(100.0, 1.0);
/// let arguments = call.setup_arguments();
/// assert_eq!(arguments.maturity, Some(1.0));
/// assert_eq!(arguments.stopping_times, vec![1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct VanillaOption {
    payoff: Arc<dyn Payoff>,
    exercise: Exercise,
    code: String,
    description: String,
    slot: EngineSlot<OptionArguments>,
}

impl VanillaOption {
    /// Builds an option from a payoff and exercise rights, with no engine.
    ///
    /// Attach an engine with [`VanillaOption::with_engine`] or
    /// [`VanillaOption::set_pricing_engine`] before pricing.
    pub fn new(payoff: Arc<dyn Payoff>, exercise: Exercise) -> Self {
        Self {
            payoff,
            exercise,
            code: String::new(),
            description: String::new(),
            slot: EngineSlot::new(),
        }
    }

    /// Builds a European call on a plain-vanilla payoff.
    pub fn european_call(strike: f64, expiry: f64) -> Self {
        Self::new(
            Arc::new(PlainVanillaPayoff::new(OptionType::Call, strike)),
            Exercise::european(expiry),
        )
    }

    /// Builds a European put on a plain-vanilla payoff.
    pub fn european_put(strike: f64, expiry: f64) -> Self {
        Self::new(
            Arc::new(PlainVanillaPayoff::new(OptionType::Put, strike)),
            Exercise::european(expiry),
        )
    }

    /// Builds an American call on a plain-vanilla payoff.
    pub fn american_call(strike: f64, expiry: f64) -> Self {
        Self::new(
            Arc::new(PlainVanillaPayoff::new(OptionType::Call, strike)),
            Exercise::american(expiry),
        )
    }

    /// Builds an American put on a plain-vanilla payoff.
    pub fn american_put(strike: f64, expiry: f64) -> Self {
        Self::new(
            Arc::new(PlainVanillaPayoff::new(OptionType::Put, strike)),
            Exercise::american(expiry),
        )
    }

    /// Attaches a pricing engine at construction time.
    ///
    /// Registers the engine through [`VanillaOption::set_pricing_engine`];
    /// supplying it here or afterwards is equivalent.
    pub fn with_engine(mut self, engine: Arc<OptionEngine>) -> Self {
        self.set_pricing_engine(engine);
        self
    }

    /// Sets an identifying code, e.g. an ISIN.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets a free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attaches or replaces the pricing engine, invalidating cached results.
    pub fn set_pricing_engine(&mut self, engine: Arc<OptionEngine>) {
        self.slot.set_engine(engine);
    }

    /// True when an engine is attached.
    #[inline]
    pub fn has_engine(&self) -> bool {
        self.slot.has_engine()
    }

    /// Identifying code, empty when unset.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Free-text description, empty when unset.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Payoff handle shared with argument payloads.
    #[inline]
    pub fn payoff(&self) -> &Arc<dyn Payoff> {
        &self.payoff
    }

    /// Exercise rights.
    #[inline]
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Builds a fresh arguments payload from the contract terms.
    ///
    /// Called once per pricing cycle. The payload shares the payoff handle
    /// and copies the schedule, so it can be discarded when the cycle ends.
    pub fn setup_arguments(&self) -> OptionArguments {
        OptionArguments {
            payoff: Some(Arc::clone(&self.payoff)),
            exercise_type: self.exercise.exercise_type(),
            stopping_times: self.exercise.stopping_times().to_vec(),
            maturity: Some(self.exercise.last_time()),
        }
    }

    /// Present value from the attached engine.
    ///
    /// Results are cached until [`VanillaOption::set_pricing_engine`] or
    /// [`VanillaOption::recalculate`]. Expired contracts report zero without
    /// consulting an engine.
    ///
    /// # Errors
    /// [`PricingError::MissingEngine`] when nothing is attached,
    /// [`PricingError::Validation`] when the arguments payload fails its
    /// checks, [`PricingError::MissingResult`] when the engine wrote no
    /// value, or whatever the engine itself reports.
    pub fn npv(&self) -> Result<f64, PricingError> {
        self.calculate()?;
        self.slot
            .results()
            .value
            .ok_or_else(|| PricingError::MissingResult("value".to_string()))
    }

    /// Standard error of the present value, for sampling engines.
    ///
    /// # Errors
    /// [`PricingError::MissingResult`] when the attached engine does not
    /// report one, plus everything [`VanillaOption::npv`] reports.
    pub fn error_estimate(&self) -> Result<f64, PricingError> {
        self.calculate()?;
        self.slot
            .results()
            .error_estimate
            .ok_or_else(|| PricingError::MissingResult("error estimate".to_string()))
    }

    /// Greeks written in the last cycle; fields the engine skipped stay `None`.
    pub fn greeks(&self) -> Result<Greeks, PricingError> {
        self.calculate()?;
        Ok(self.slot.results().greeks)
    }

    /// Copy of the full resident results payload.
    pub fn results(&self) -> Result<OptionResults, PricingError> {
        self.calculate()?;
        Ok(self.slot.results())
    }

    /// Discards cached results and reprices.
    pub fn recalculate(&self) -> Result<(), PricingError> {
        self.slot.invalidate();
        self.calculate()
    }

    fn calculate(&self) -> Result<(), PricingError> {
        self.slot
            .ensure_calculated(self.instrument_type(), self.is_expired(), || {
                self.setup_arguments()
            })
    }
}

impl Instrument for VanillaOption {
    fn instrument_type(&self) -> &str {
        "VanillaOption"
    }

    fn is_expired(&self) -> bool {
        self.exercise.last_time() < 0.0
    }
}
