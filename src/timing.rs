use std::time::{Duration, Instant};

/// Run `f` and return its result with the wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Elapsed time as fractional microseconds.
pub fn as_micros_f64(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_value() {
        let (value, elapsed) = timed(|| 2 + 2);
        assert_eq!(value, 4);
        assert!(as_micros_f64(elapsed) >= 0.0);
    }

    #[test]
    fn test_micros_conversion() {
        assert_eq!(as_micros_f64(Duration::from_millis(3)), 3000.0);
        assert_eq!(as_micros_f64(Duration::from_nanos(1500)), 1.5);
    }
}
