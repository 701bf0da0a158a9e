//! Walkthrough of the instrument/engine exchange: attach an engine, price
//! lazily, swap engines, and watch validation stop malformed payloads.

use std::sync::Arc;

use openargent::core::{Arguments, Instrument, PricingEngine, PricingError};
use openargent::instruments::{BarrierOption, OptionArguments, OptionResults, VanillaOption};

/// Values the option at its immediate exercise value.
#[derive(Debug)]
struct IntrinsicEngine {
    spot: f64,
}

impl PricingEngine<OptionArguments, OptionResults> for IntrinsicEngine {
    fn calculate(
        &self,
        arguments: &OptionArguments,
        results: &mut OptionResults,
    ) -> Result<(), PricingError> {
        let payoff = arguments
            .payoff
            .as_ref()
            .ok_or_else(|| PricingError::InvalidInput("no payoff bound".to_string()))?;
        results.value = Some(payoff.value(self.spot));
        Ok(())
    }
}

/// Discounts the exercise value back from maturity.
#[derive(Debug)]
struct DiscountedIntrinsicEngine {
    spot: f64,
    rate: f64,
}

impl PricingEngine<OptionArguments, OptionResults> for DiscountedIntrinsicEngine {
    fn calculate(
        &self,
        arguments: &OptionArguments,
        results: &mut OptionResults,
    ) -> Result<(), PricingError> {
        let payoff = arguments
            .payoff
            .as_ref()
            .ok_or_else(|| PricingError::InvalidInput("no payoff bound".to_string()))?;
        let maturity = arguments
            .maturity
            .ok_or_else(|| PricingError::InvalidInput("no maturity bound".to_string()))?;
        results.value = Some((-self.rate * maturity).exp() * payoff.value(self.spot));
        Ok(())
    }
}

fn main() {
    // 1. Attach an engine at construction and price lazily
    let mut option = VanillaOption::european_call(100.0, 1.0)
        .with_engine(Arc::new(IntrinsicEngine { spot: 108.0 }))
        .with_code("DEMO-CALL")
        .with_description("European call, strike 100, one year out");
    let npv = option.npv().unwrap();
    println!("{}: npv = {npv:.4}", option.code());

    // 2. Swap the engine; cached results are dropped, not reused
    option.set_pricing_engine(Arc::new(DiscountedIntrinsicEngine {
        spot: 108.0,
        rate: 0.05,
    }));
    let npv = option.npv().unwrap();
    println!("after engine swap: npv = {npv:.4}");

    // 3. Validation rejects a payload with no payoff bound
    let empty = OptionArguments::default();
    println!("empty payload: {}", empty.validate().unwrap_err());

    // 4. Expired instruments settle at zero without consulting any engine
    let expired = VanillaOption::european_put(100.0, -0.5);
    let npv = expired.npv().unwrap();
    println!("expired put: npv = {npv:.4}");

    // 5. Barrier terms ride on the same exchange and the same validation
    let barrier = BarrierOption::builder()
        .put()
        .strike(100.0)
        .expiry(2.0)
        .down_and_in(80.0)
        .rebate(1.5)
        .build()
        .unwrap();
    println!(
        "{}: barrier level {:.1}, rebate {:.1}",
        barrier.instrument_type(),
        barrier.barrier().level,
        barrier.barrier().rebate
    );

    let err = BarrierOption::builder()
        .put()
        .strike(100.0)
        .expiry(2.0)
        .down_and_in(-80.0)
        .build()
        .unwrap_err();
    println!("rejected terms: {err}");
}
