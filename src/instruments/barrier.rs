//! Barrier option contract and its extended arguments payload.
//!
//! [`BarrierOptionArguments`] is the variant-extension pattern of the
//! exchange: it embeds the shared [`OptionArguments`] payload and layers
//! barrier checks on top, delegating to the base `validate()` first so the
//! short-circuit order stays fixed across variants.

use std::sync::Arc;

use crate::core::{
    Arguments, BarrierDirection, BarrierSpec, BarrierStyle, Instrument, OptionType, PricingEngine,
    PricingError, ValidationError,
};
use crate::exercise::Exercise;
use crate::instruments::option::{EngineSlot, Greeks, OptionArguments, OptionResults};
use crate::payoff::{Payoff, PlainVanillaPayoff};

/// Engine trait object over the barrier vocabulary.
pub type BarrierEngine = dyn PricingEngine<BarrierOptionArguments, OptionResults>;

/// Inputs for barrier-aware pricing engines.
#[derive(Debug, Clone, Default)]
pub struct BarrierOptionArguments {
    /// Shared option-family inputs.
    pub base: OptionArguments,
    /// Barrier terms. `None` until bound.
    pub barrier: Option<BarrierSpec>,
}

impl Arguments for BarrierOptionArguments {
    /// Runs the base checks first, then the barrier ones. NaN terms fail
    /// the same checks as out-of-range ones.
    fn validate(&self) -> Result<(), ValidationError> {
        self.base.validate()?;
        let barrier = self
            .barrier
            .as_ref()
            .ok_or_else(|| ValidationError::new("no barrier given"))?;
        if !(barrier.level > 0.0) {
            return Err(ValidationError::new("non-positive barrier level"));
        }
        if !(barrier.rebate >= 0.0) {
            return Err(ValidationError::new("negative barrier rebate"));
        }
        Ok(())
    }
}

/// Barrier option instrument.
///
/// Same lifecycle as [`crate::instruments::VanillaOption`], with the barrier
/// terms carried into the extended arguments payload.
#[derive(Debug, Clone)]
pub struct BarrierOption {
    payoff: Arc<dyn Payoff>,
    exercise: Exercise,
    barrier: BarrierSpec,
    code: String,
    description: String,
    slot: EngineSlot<BarrierOptionArguments>,
}

impl BarrierOption {
    /// Starts a barrier option builder.
    pub fn builder() -> BarrierOptionBuilder {
        BarrierOptionBuilder::default()
    }

    /// Builds a barrier option from its parts, with no engine attached.
    ///
    /// Performs no term checks; those run through arguments validation at
    /// pricing time or through [`BarrierOptionBuilder::build`].
    pub fn new(payoff: Arc<dyn Payoff>, exercise: Exercise, barrier: BarrierSpec) -> Self {
        Self {
            payoff,
            exercise,
            barrier,
            code: String::new(),
            description: String::new(),
            slot: EngineSlot::new(),
        }
    }

    /// Attaches a pricing engine at construction time.
    pub fn with_engine(mut self, engine: Arc<BarrierEngine>) -> Self {
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
    pub fn set_pricing_engine(&mut self, engine: Arc<BarrierEngine>) {
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

    /// Barrier terms.
    #[inline]
    pub fn barrier(&self) -> &BarrierSpec {
        &self.barrier
    }

    /// Exercise rights.
    #[inline]
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Builds a fresh arguments payload from the contract terms.
    pub fn setup_arguments(&self) -> BarrierOptionArguments {
        BarrierOptionArguments {
            base: OptionArguments {
                payoff: Some(Arc::clone(&self.payoff)),
                exercise_type: self.exercise.exercise_type(),
                stopping_times: self.exercise.stopping_times().to_vec(),
                maturity: Some(self.exercise.last_time()),
            },
            barrier: Some(self.barrier.clone()),
        }
    }

    /// Present value from the attached engine. See
    /// [`crate::instruments::VanillaOption::npv`] for caching and errors.
    pub fn npv(&self) -> Result<f64, PricingError> {
        self.calculate()?;
        self.slot
            .results()
            .value
            .ok_or_else(|| PricingError::MissingResult("value".to_string()))
    }

    /// Standard error of the present value, for sampling engines.
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

impl Instrument for BarrierOption {
    fn instrument_type(&self) -> &str {
        "BarrierOption"
    }

    fn is_expired(&self) -> bool {
        self.exercise.last_time() < 0.0
    }
}

/// Builder for [`BarrierOption`].
#[derive(Debug, Clone, Default)]
pub struct BarrierOptionBuilder {
    option_type: Option<OptionType>,
    strike: Option<f64>,
    exercise: Option<Exercise>,
    direction: Option<BarrierDirection>,
    style: Option<BarrierStyle>,
    level: Option<f64>,
    rebate: Option<f64>,
}

impl BarrierOptionBuilder {
    /// Sets option side to call.
    pub fn call(mut self) -> Self {
        self.option_type = Some(OptionType::Call);
        self
    }

    /// Sets option side to put.
    pub fn put(mut self) -> Self {
        self.option_type = Some(OptionType::Put);
        self
    }

    /// Sets strike.
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets European exercise at `expiry` in years.
    pub fn expiry(mut self, expiry: f64) -> Self {
        self.exercise = Some(Exercise::european(expiry));
        self
    }

    /// Sets explicit exercise rights, overriding [`BarrierOptionBuilder::expiry`].
    pub fn exercise(mut self, exercise: Exercise) -> Self {
        self.exercise = Some(exercise);
        self
    }

    /// Sets up-and-out barrier.
    pub fn up_and_out(mut self, level: f64) -> Self {
        self.direction = Some(BarrierDirection::Up);
        self.style = Some(BarrierStyle::Out);
        self.level = Some(level);
        self
    }

    /// Sets up-and-in barrier.
    pub fn up_and_in(mut self, level: f64) -> Self {
        self.direction = Some(BarrierDirection::Up);
        self.style = Some(BarrierStyle::In);
        self.level = Some(level);
        self
    }

    /// Sets down-and-out barrier.
    pub fn down_and_out(mut self, level: f64) -> Self {
        self.direction = Some(BarrierDirection::Down);
        self.style = Some(BarrierStyle::Out);
        self.level = Some(level);
        self
    }

    /// Sets down-and-in barrier.
    pub fn down_and_in(mut self, level: f64) -> Self {
        self.direction = Some(BarrierDirection::Down);
        self.style = Some(BarrierStyle::In);
        self.level = Some(level);
        self
    }

    /// Sets cash rebate.
    pub fn rebate(mut self, rebate: f64) -> Self {
        self.rebate = Some(rebate);
        self
    }

    /// Validates and builds a barrier option.
    ///
    /// Missing required fields surface as [`PricingError::InvalidInput`];
    /// term checks run through the arguments validation path, so a negative
    /// expiry fails here with the same "negative maturity" diagnostic it
    /// would produce at pricing time.
    pub fn build(self) -> Result<BarrierOption, PricingError> {
        let option_type = self.option_type.ok_or_else(|| {
            PricingError::InvalidInput("barrier option type is required".to_string())
        })?;
        let strike = self
            .strike
            .ok_or_else(|| PricingError::InvalidInput("barrier strike is required".to_string()))?;
        let exercise = self
            .exercise
            .ok_or_else(|| PricingError::InvalidInput("barrier expiry is required".to_string()))?;
        let direction = self.direction.ok_or_else(|| {
            PricingError::InvalidInput("barrier direction is required".to_string())
        })?;
        let style = self
            .style
            .ok_or_else(|| PricingError::InvalidInput("barrier style is required".to_string()))?;
        let level = self
            .level
            .ok_or_else(|| PricingError::InvalidInput("barrier level is required".to_string()))?;
        let rebate = self.rebate.unwrap_or(0.0);

        let option = BarrierOption::new(
            Arc::new(PlainVanillaPayoff::new(option_type, strike)),
            exercise,
            BarrierSpec {
                direction,
                style,
                level,
                rebate,
            },
        );
        option.setup_arguments().validate()?;
        Ok(option)
    }
}
