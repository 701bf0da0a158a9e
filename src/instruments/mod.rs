//! Instrument definitions and the option-family exchange payloads.

pub mod barrier;
pub mod option;
pub mod vanilla;

pub use barrier::{BarrierEngine, BarrierOption, BarrierOptionArguments, BarrierOptionBuilder};
pub use option::{EngineSlot, Greeks, OptionArguments, OptionEngine, OptionResults};
pub use vanilla::VanillaOption;
