/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took, and evaluates to the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!(
            $log_level,
            "{} took {} µs",
            $label,
            elapsed.as_micros()
        );
        value
    }};
}

/// Round to the nearest integer, with halves going towards positive infinity.
/// [f64::round] sends halves away from zero instead, which would make `-0.5`
/// and `0.5` land in mirrored cells and break symmetry across the origin.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
