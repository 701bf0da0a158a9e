//! OpenArgent defines the exchange contracts between financial instruments and the
//! pricing engines that value them: validated argument payloads going in, resettable
//! result payloads coming back, and the engine attachment that wires the two together.
//!
//! The crate contains no numerical engine. It is the seam a pricing library plugs
//! into: an instrument hands a fresh [`core::Arguments`] payload to whatever engine
//! is attached, the engine validates it, runs its algorithm, and writes a
//! [`core::Results`] payload into the instrument's resident slot. Neither side
//! needs the other's concrete type, yet an engine can still demand exactly the
//! contract form it prices (see [`payoff::Payoff::as_any`]) and every payload is
//! checked before numerical work begins.
//!
//! References used across modules:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 10-13 for
//!   contract conventions and Ch. 19 for the greeks carried by results payloads.
//!
//! When to use this crate vs alternatives:
//! - Use `openargent` when you are building or hosting pricing engines and want
//!   the instrument/engine boundary (payload validation, result-slot reuse,
//!   engine swapping) handled by one shared vocabulary.
//! - Use a full pricing library instead if you want closed forms, lattices, or
//!   Monte Carlo shipped in the same crate; those live on the other side of this
//!   boundary by design.
//!
//! # Quick Start
//! Validate an arguments payload:
//! ```rust
//! use std::sync::Arc;
//!
//! use openargent::core::{Arguments, OptionType};
//! use openargent::instruments::OptionArguments;
//! use openargent::payoff::PlainVanillaPayoff;
//!
//! let mut arguments = OptionArguments::default();
//! assert_eq!(arguments.validate().unwrap_err().message(), "no payoff given");
//!
//! arguments.payoff = Some(Arc::new(PlainVanillaPayoff::new(OptionType::Call, 100.0)));
//! assert_eq!(arguments.validate().unwrap_err().message(), "no maturity given");
//!
//! arguments.maturity = Some(1.5);
//! arguments.stopping_times = vec![1.5];
//! assert!(arguments.validate().is_ok());
//! ```
//!
//! Price through an attached engine:
//! ```rust
//! use std::sync::Arc;
//!
//! use openargent::core::{PricingEngine, PricingError};
//! use openargent::instruments::{OptionArguments, OptionResults, VanillaOption};
//!
//! #[derive(Debug)]
//! struct IntrinsicEngine {
//!     spot: f64,
//! }
//!
//! impl PricingEngine<OptionArguments, OptionResults> for IntrinsicEngine {
//!     fn calculate(
//!         &self,
//!         arguments: &OptionArguments,
//!         results: &mut OptionResults,
//!     ) -> Result<(), PricingError> {
//!         let payoff = arguments
//!             .payoff
//!             .as_ref()
//!             .ok_or_else(|| PricingError::InvalidInput("no payoff bound".to_string()))?;
//!         results.value = Some(payoff.value(self.spot));
//!         Ok(())
//!     }
//! }
//!
//! let option = VanillaOption::european_call(100.0, 1.0)
//!     .with_engine(Arc::new(IntrinsicEngine { spot: 105.0 }));
//! assert_eq!(option.npv().unwrap(), 5.0);
//! ```
//!
//! Reuse a results payload across cycles:
//! ```rust
//! use openargent::core::Results;
//! use openargent::instruments::OptionResults;
//!
//! let mut results = OptionResults::new();
//! results.value = Some(10.45);
//! results.greeks.delta = Some(0.64);
//! results.reset();
//! assert!(results.value.is_none());
//! assert!(results.greeks.delta.is_none());
//! ```

pub mod core;
pub mod exercise;
pub mod instruments;
pub mod payoff;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::exercise::*;
    pub use crate::instruments::*;
    pub use crate::payoff::*;
}
