/// Match count readout on a bank of discrete LEDs.
///
/// LED `i` is on when `i < count`. A count larger than the bank lights every
/// LED and nothing more: the readout saturates on purpose, it is a presence
/// indicator rather than an exact display. Rendering holds no state, so
/// rendering the same count twice leaves the pins unchanged.
use embedded_hal::digital::{OutputPin, PinState};

/// Whether LED `index` is lit for `count` matches.
pub fn line_state(index: usize, count: usize) -> bool {
    index < count
}

/// Drive `lines` to show `count`.
///
/// Every line is written on every call. Stops at the first pin error.
pub fn render<P: OutputPin>(count: usize, lines: &mut [P]) -> Result<(), P::Error> {
    for (index, line) in lines.iter_mut().enumerate() {
        line.set_state(PinState::from(line_state(index, count)))?;
    }
    Ok(())
}

/// Fixed LED bank plus the display enable toggle.
pub struct IndicatorBank<P, const N: usize> {
    lines: [P; N],
    enabled: bool,
}

impl<P: OutputPin, const N: usize> IndicatorBank<P, N> {
    /// Take ownership of the pins and switch them all off.
    pub fn new(lines: [P; N], enabled: bool) -> Result<Self, P::Error> {
        let mut bank = Self { lines, enabled };
        render(0, &mut bank.lines)?;
        Ok(bank)
    }

    /// Show `count`, or do nothing when the display is disabled.
    pub fn show(&mut self, count: usize) -> Result<(), P::Error> {
        if self.enabled {
            render(count, &mut self.lines)
        } else {
            Ok(())
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
