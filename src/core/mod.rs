//! Exchange-contract traits, shared contract tags, and library-wide error types.

pub mod types;

pub use types::*;

/// Capability marker for engine input payloads.
///
/// An arguments payload gathers everything one pricing request needs. It is
/// built fresh for each pricing cycle, owned by the component that built it,
/// and discarded when the cycle ends; the same instrument may be revalued
/// under changed conditions, so payloads never survive across cycles.
pub trait Arguments: std::fmt::Debug {
    /// Checks that the payload is ready for consumption by a pricing engine.
    ///
    /// Runs after an engine obtains the payload and before any numerical
    /// work. Read-only: a pure predicate over the payload's own fields with
    /// a fixed diagnostic message per failing check, short-circuiting on the
    /// first failure.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Capability marker for engine output payloads.
///
/// A results payload lives in its instrument's resident slot and is reused
/// across pricing cycles without reallocation.
pub trait Results: std::fmt::Debug {
    /// Clears every field back to its unset state.
    ///
    /// Total and idempotent. Runs before each computation so no stale value
    /// from a previous cycle can leak into the next.
    fn reset(&mut self);
}

/// Common trait implemented by every engine-priced instrument.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics.
    fn instrument_type(&self) -> &str;

    /// True once no exercise right remains.
    fn is_expired(&self) -> bool;
}

/// Pricing engine abstraction over an arguments/results payload pair.
///
/// [`Arguments::validate`] and [`Results::reset`] are the only operations an
/// engine can rely on without knowing the concrete payload types; everything
/// else it demands from the concrete pair it is written against.
pub trait PricingEngine<A: Arguments, R: Results>: std::fmt::Debug + Send + Sync {
    /// Runs the numerical algorithm for an already validated payload.
    ///
    /// Implementations may assume `arguments` passed [`Arguments::validate`]
    /// and that `results` is in its reset state.
    fn calculate(&self, arguments: &A, results: &mut R) -> Result<(), PricingError>;

    /// Runs one full pricing cycle: validate, clear the slot, calculate.
    ///
    /// # Errors
    /// Propagates the [`ValidationError`] of a failing precondition check
    /// unmodified (as [`PricingError::Validation`]), or whatever
    /// [`PricingEngine::calculate`] reports.
    fn price(&self, arguments: &A, results: &mut R) -> Result<(), PricingError> {
        arguments.validate()?;
        results.reset();
        self.calculate(arguments, results)
    }
}

/// Precondition failure raised by [`Arguments::validate`].
///
/// The message set is fixed per payload type; the first failing check of the
/// short-circuit chain selects which one is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    /// Creates a validation error carrying a fixed diagnostic message.
    #[inline]
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// The diagnostic message, e.g. `"no payoff given"`.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Exchange and engine errors surfaced by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// An arguments payload failed its precondition checks.
    Validation(ValidationError),
    /// Engine-side rejection of an input the generic contract admits.
    InvalidInput(String),
    /// No pricing engine is attached to the instrument.
    MissingEngine(String),
    /// The engine finished without writing the requested output.
    MissingResult(String),
    /// Numerical issue (overflow, invalid state, etc.).
    NumericalError(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid arguments: {err}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::MissingEngine(msg) => write!(f, "no pricing engine attached: {msg}"),
            Self::MissingResult(msg) => write!(f, "result not provided by engine: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

impl From<ValidationError> for PricingError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
