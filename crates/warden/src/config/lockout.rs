use std::time::Duration;

use iso8601_timestamp::Timestamp;

use crate::models::Lockout;
use crate::util::{offset_timestamp, time_until};

/// How long an account stays locked once the threshold is reached
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum LockoutDuration {
    /// Lock out for the same period every time
    Fixed { seconds: u64 },
    /// Lock out for a longer period on each attempt past the threshold
    ///
    /// The last step repeats once the schedule is exhausted.
    Escalating { seconds: Vec<u64> },
}

impl Default for LockoutDuration {
    fn default() -> LockoutDuration {
        LockoutDuration::Fixed { seconds: 300 }
    }
}

impl LockoutDuration {
    /// Length of the lockout engaged by the given attempt past the threshold
    pub fn for_step(&self, step: u32) -> Duration {
        match self {
            LockoutDuration::Fixed { seconds } => Duration::from_secs(*seconds),
            LockoutDuration::Escalating { seconds } => Duration::from_secs(
                seconds
                    .get(step as usize)
                    .or_else(|| seconds.last())
                    .copied()
                    .unwrap_or_default(),
            ),
        }
    }
}

/// Account lockout policy
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LockoutConfig {
    /// Consecutive failures allowed before the account is locked
    pub max_attempts: u32,
    /// Lockout period
    pub duration: LockoutDuration,
}

impl Default for LockoutConfig {
    fn default() -> LockoutConfig {
        LockoutConfig {
            max_attempts: 5,
            duration: Default::default(),
        }
    }
}

impl LockoutConfig {
    /// Time left until the lockout lapses
    pub fn remaining(&self, lockout: &Lockout, now: Timestamp) -> Option<Duration> {
        lockout.expiry.and_then(|expiry| time_until(now, expiry))
    }

    /// State after a failed sign-in
    pub fn record_failure(&self, lockout: &Lockout, now: Timestamp) -> Lockout {
        let attempts = lockout.attempts.saturating_add(1);
        let expiry = if attempts >= self.max_attempts {
            let period = self.duration.for_step(attempts - self.max_attempts);
            if period.is_zero() {
                None
            } else {
                Some(offset_timestamp(now, period))
            }
        } else {
            lockout.expiry
        };

        Lockout { attempts, expiry }
    }

    /// State after a successful sign-in
    pub fn record_success(&self, _lockout: &Lockout) -> Lockout {
        Lockout::default()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iso8601_timestamp::{Duration as Span, Timestamp};

    use super::{LockoutConfig, LockoutDuration};
    use crate::models::Lockout;

    fn at(ms: i64) -> Timestamp {
        Timestamp::UNIX_EPOCH + Span::milliseconds(ms)
    }

    fn ms(timestamp: Timestamp) -> i64 {
        timestamp.duration_since(Timestamp::UNIX_EPOCH).whole_milliseconds() as i64
    }

    #[test]
    fn it_counts_failures_below_threshold() {
        let policy = LockoutConfig::default();
        let mut lockout = Lockout::default();

        for expected in 1..5 {
            lockout = policy.record_failure(&lockout, at(1_000));
            assert_eq!(lockout.attempts, expected);
            assert!(lockout.expiry.is_none());
            assert!(policy.remaining(&lockout, at(1_000)).is_none());
        }
    }

    #[test]
    fn it_locks_at_threshold() {
        let policy = LockoutConfig::default();
        let lockout = Lockout {
            attempts: 4,
            expiry: None,
        };

        let lockout = policy.record_failure(&lockout, at(1_000));
        assert_eq!(lockout.attempts, 5);
        assert_eq!(
            lockout.expiry.map(ms),
            Some(301_000)
        );

        assert!(policy.remaining(&lockout, at(1_000)).is_some());
        assert_eq!(
            policy.remaining(&lockout, at(241_000)),
            Some(Duration::from_secs(60))
        );
    }

    #[test]
    fn it_lapses_lazily() {
        let policy = LockoutConfig::default();
        let lockout = Lockout {
            attempts: 5,
            expiry: Some(at(301_000)),
        };

        assert!(policy.remaining(&lockout, at(300_999)).is_some());
        assert!(policy.remaining(&lockout, at(301_000)).is_none());
        assert!(policy.remaining(&lockout, at(900_000)).is_none());
        assert_eq!(policy.remaining(&lockout, at(301_000)), None);
    }

    #[test]
    fn it_resets_on_success() {
        let policy = LockoutConfig::default();
        let lockout = Lockout {
            attempts: 7,
            expiry: Some(at(301_000)),
        };

        let lockout = policy.record_success(&lockout);
        assert_eq!(lockout.attempts, 0);
        assert!(lockout.expiry.is_none());
    }

    #[test]
    fn it_escalates() {
        let policy = LockoutConfig {
            max_attempts: 3,
            duration: LockoutDuration::Escalating {
                seconds: vec![60, 300, 3600],
            },
        };

        let mut lockout = Lockout::default();
        let mut periods = vec![];
        for _ in 0..6 {
            lockout = policy.record_failure(&lockout, at(0));
            periods.push(lockout.expiry.map(ms));
        }

        assert_eq!(
            periods,
            vec![
                None,
                None,
                Some(60_000),
                Some(300_000),
                Some(3_600_000),
                Some(3_600_000)
            ]
        );
    }

    #[test]
    fn it_survives_huge_periods() {
        let policy = LockoutConfig {
            max_attempts: 1,
            duration: LockoutDuration::Fixed {
                seconds: u64::MAX,
            },
        };

        let lockout = policy.record_failure(&Lockout::default(), at(1_000));
        assert!(lockout.expiry.is_some());
        assert!(policy.remaining(&lockout, at(1_000)).is_some());
    }
}
