use anchor_lang::prelude::*;

/**
 * Unlock curve applied to every allotment in a distribution
 *
 * The schedule is a pure function of elapsed time since the TGE timestamp:
 * non-decreasing in `now`, bounded above by the allotment, and independent
 * of how often it is evaluated. The curve is chosen once at creation.
 *
 * Variants:
 * - `Instant`: the whole allotment unlocks at the TGE timestamp. This is the
 *   default policy and matches a distribution configured with only
 *   (token, merkle_root, tge_timestamp).
 * - `Linear { duration }`: the allotment ramps piecewise-linearly from 0 at
 *   the TGE to the full amount at TGE + duration, then holds.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnlockSchedule {
    /// Fully unlocked at the TGE timestamp
    Instant,
    /// Linear ramp from the TGE over `duration` seconds
    Linear { duration: i64 },
}

impl Default for UnlockSchedule {
    fn default() -> Self {
        UnlockSchedule::Instant
    }
}

impl UnlockSchedule {
    /// A schedule is well-formed iff any ramp duration is positive.
    pub fn is_valid(&self) -> bool {
        match self {
            UnlockSchedule::Instant => true,
            UnlockSchedule::Linear { duration } => *duration > 0,
        }
    }

    /// Amount of `allotment` unlocked at `now`, given the distribution's
    /// TGE timestamp. A zero timestamp means the distribution has not
    /// launched, so nothing is unlocked.
    ///
    /// Linear unlocking rounds down and therefore never exceeds the
    /// allotment; the full amount is reachable exactly at TGE + duration.
    pub fn unlocked(&self, allotment: u64, tge_timestamp: i64, now: i64) -> u64 {
        if tge_timestamp == 0 || now < tge_timestamp {
            return 0;
        }
        match self {
            UnlockSchedule::Instant => allotment,
            UnlockSchedule::Linear { duration } => {
                let elapsed = now - tge_timestamp;
                if elapsed >= *duration {
                    allotment
                } else {
                    // u128 intermediate so allotment * elapsed cannot overflow
                    ((allotment as u128 * elapsed as u128) / *duration as u128) as u64
                }
            }
        }
    }
}
