use std::time::{Duration, Instant};

/// Runs `f` and returns its result together with the elapsed wall-clock time
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_passes_the_closure_result_through() {
        let (value, elapsed) = timed(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed <= Duration::from_secs(1));
    }
}
