/// Option payoff side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
    /// Combined call-plus-put profile around a single strike.
    Straddle,
}

/// Exercise rights tag carried by option argument payloads.
///
/// Only the tag travels with a payload; the schedule it induces is carried
/// separately as plain stopping times, so synthesized time grids with no
/// exercise object behind them price the same way as calendar-backed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExerciseType {
    /// Exercise only at expiry.
    #[default]
    European,
    /// Exercise at any time up to expiry.
    American,
    /// Exercise at scheduled times only.
    Bermudan,
}

impl ExerciseType {
    /// True when the tag admits exercise before the final stopping time.
    #[inline]
    pub fn allows_early_exercise(self) -> bool {
        !matches!(self, Self::European)
    }
}

/// Barrier crossing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierDirection {
    /// Breached when spot rises through the level.
    Up,
    /// Breached when spot falls through the level.
    Down,
}

/// Barrier knock behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierStyle {
    /// Contract activates once the barrier is hit.
    In,
    /// Contract deactivates once the barrier is hit.
    Out,
}

/// Barrier contract parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BarrierSpec {
    /// Barrier direction.
    pub direction: BarrierDirection,
    /// Knock-in or knock-out.
    pub style: BarrierStyle,
    /// Barrier level in spot units.
    pub level: f64,
    /// Cash rebate paid on the knock event or at maturity, model-dependent.
    pub rebate: f64,
}
