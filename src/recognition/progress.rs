//! Progress reporting for long-running recognition.

/// Forwards recognition progress as whole percentages.
///
/// Values are clamped to `0..=100` and never go backwards; repeated values
/// are not re-sent.
pub struct ProgressReporter<'a> {
    callback: &'a mut dyn FnMut(u8),
    last: Option<u8>,
}

impl<'a> ProgressReporter<'a> {
    /// Wrap a percentage callback.
    pub fn new(callback: &'a mut dyn FnMut(u8)) -> Self {
        Self {
            callback,
            last: None,
        }
    }

    /// Report progress as a fraction in `0.0..=1.0`.
    pub fn report_fraction(&mut self, fraction: f32) {
        let percent = if fraction.is_finite() {
            (fraction * 100.0).round().clamp(0.0, 100.0) as u8
        } else {
            0
        };
        self.report(percent);
    }

    /// Report progress as a percentage.
    pub fn report(&mut self, percent: u8) {
        let percent = percent.min(100);
        if self.last.is_some_and(|last| percent <= last) {
            return;
        }
        self.last = Some(percent);
        (self.callback)(percent);
    }

    /// Last value forwarded, if any.
    pub fn last(&self) -> Option<u8> {
        self.last
    }
}
