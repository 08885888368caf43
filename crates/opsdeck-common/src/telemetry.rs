//! OpsDeck Telemetry - Synthetic Middleware Stats
//!
//! Produces the hourly series behind the project detail charts. The series is
//! regenerated on every visit and carries no meaning across loads; the random
//! source is injected so tests can seed it.
//!
//! Key Features:
//! - 24 hourly points ending at the current time, oldest first
//! - Fixed value ranges for CPU, memory, requests and errors
//! - Windowing of the most recent points for analysis prompts
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::types::MiddlewareStat;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::ops::Range;

/// Number of hourly points in a generated series.
pub const SERIES_LEN: usize = 24;

pub const CPU_RANGE: Range<u32> = 10..70;
pub const MEMORY_RANGE: Range<u32> = 20..60;
pub const REQUESTS_RANGE: Range<u32> = 100..1100;
pub const ERRORS_RANGE: Range<u32> = 0..10;

/// Generate 24 hourly points ending at `now`, oldest first.
pub fn generate_middleware_stats<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<MiddlewareStat> {
    let mut stats: Vec<MiddlewareStat> = (0..SERIES_LEN as i64)
        .map(|i| MiddlewareStat {
            timestamp: now - Duration::hours(i),
            cpu: rng.gen_range(CPU_RANGE),
            memory: rng.gen_range(MEMORY_RANGE),
            requests: rng.gen_range(REQUESTS_RANGE),
            errors: rng.gen_range(ERRORS_RANGE),
        })
        .collect();

    stats.reverse();
    stats
}

/// The `n` most recent points, oldest first.
pub fn recent(stats: &[MiddlewareStat], n: usize) -> &[MiddlewareStat] {
    &stats[stats.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_series_shape() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let stats = generate_middleware_stats(&mut rng, now());

            assert_eq!(stats.len(), SERIES_LEN);
            assert!(stats.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
            assert_eq!(stats.last().unwrap().timestamp, now());
            assert_eq!(stats[0].timestamp, now() - Duration::hours(23));

            for s in &stats {
                assert!(CPU_RANGE.contains(&s.cpu));
                assert!(MEMORY_RANGE.contains(&s.memory));
                assert!(REQUESTS_RANGE.contains(&s.requests));
                assert!(ERRORS_RANGE.contains(&s.errors));
            }
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = generate_middleware_stats(&mut StdRng::seed_from_u64(7), now());
        let b = generate_middleware_stats(&mut StdRng::seed_from_u64(7), now());
        assert_eq!(a, b);
    }

    #[test]
    fn test_recent() {
        let stats = generate_middleware_stats(&mut StdRng::seed_from_u64(1), now());
        let tail = recent(&stats, 5);
        assert_eq!(tail.len(), 5);
        assert_eq!(tail[4], stats[23]);
        assert_eq!(recent(&stats[..3], 5).len(), 3);
        assert!(recent(&[], 5).is_empty());
    }
}
