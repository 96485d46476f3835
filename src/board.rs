/// Hardware abstraction for supported boards.
///
/// Each board module defines the indicator LED pins selected at compile
/// time via feature flags. LEDs light up in the order they are listed.

#[cfg(feature = "board-xiao")]
mod hw {
    /// D0, D1, D2 on the XIAO header
    pub const LED_PINS: [u8; 3] = [1, 2, 3];
    pub const BOARD_NAME: &str = "xiao_esp32s3";
}

#[cfg(feature = "board-m5stickc")]
mod hw {
    /// Grove and hat header GPIOs
    pub const LED_PINS: [u8; 3] = [32, 33, 25];
    pub const BOARD_NAME: &str = "m5stickc_plus2";
}

#[cfg(not(any(feature = "board-xiao", feature = "board-m5stickc")))]
mod hw {
    pub const LED_PINS: [u8; 3] = [32, 33, 25];
    pub const BOARD_NAME: &str = "unknown";
}

pub use hw::*;

/// Number of indicator LEDs on the selected board
pub const NUM_LEDS: usize = LED_PINS.len();
