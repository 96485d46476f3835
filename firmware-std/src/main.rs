//! MacCount — ESP-IDF std firmware
//!
//! Blocking implementation on the main FreeRTOS thread. Each iteration runs
//! one synchronous WiFi scan through `EspWifiScanner`, aggregates it with the
//! library, renders the count on the LEDs, and sleeps.

use std::thread;
use std::time::Duration;

use esp_idf_svc::hal::gpio::{AnyOutputPin, Output, OutputPin, PinDriver};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::sys::EspError;
use esp_idf_svc::wifi::{AccessPointInfo, BlockingWifi, EspWifi};
use esp_idf_svc::{eventloop::EspSystemEventLoop, nvs::EspDefaultNvsPartition};

use maccount::aggregator::run_cycle;
use maccount::config::{self, ReportConfig};
use maccount::indicator::IndicatorBank;
use maccount::protocol::{DeviceMessage, MacString, VERSION};
use maccount::scanner::{format_mask, DiscoveredDevice, ScanResults, WifiScanner};
use maccount::table::SignalTable;
use maccount::{board, comm};

// ── WiFi scanner adapter ─────────────────────────────────────────────

/// Station-mode WiFi driver performing blocking active scans.
struct EspWifiScanner<'d> {
    wifi: BlockingWifi<EspWifi<'d>>,
}

impl WifiScanner for EspWifiScanner<'_> {
    type Error = EspError;

    fn scan(&mut self) -> Result<ScanResults, Self::Error> {
        let aps = self.wifi.scan()?;
        Ok(aps.iter().map(to_device).collect())
    }
}

fn to_device(ap: &AccessPointInfo) -> DiscoveredDevice {
    DiscoveredDevice::new(
        ap.ssid.as_str(),
        ap.bssid,
        i32::from(ap.signal_strength),
        ap.channel,
    )
}

type LedDriver = PinDriver<'static, AnyOutputPin, Output>;

fn led(pin: impl OutputPin + 'static) -> Result<LedDriver, EspError> {
    let mut driver = PinDriver::output(pin.downgrade_output())?;
    driver.set_low()?;
    Ok(driver)
}

fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();

    // Bind the ESP-IDF logger to the `log` facade
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("MacCount v{} starting on {} (std)", VERSION, board::BOARD_NAME);

    let mut filter = MacString::new();
    format_mask(&config::ADDRESS_MASK, &mut filter);
    log::info!("MAC filter: {}", filter);

    if config::REPORT_JSON {
        comm::emit(&DeviceMessage::Status {
            filter: &filter,
            leds: board::NUM_LEDS as u8,
            board: board::BOARD_NAME,
            version: VERSION,
        });
    }

    // ── Peripherals ──────────────────────────────────────────────────

    let peripherals = Peripherals::take()?;
    let sys_loop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    // ── Indicator LEDs (order matches board::LED_PINS) ───────────────

    #[cfg(feature = "m5stickc")]
    let pins = [
        led(peripherals.pins.gpio32)?,
        led(peripherals.pins.gpio33)?,
        led(peripherals.pins.gpio25)?,
    ];
    #[cfg(feature = "xiao")]
    let pins = [
        led(peripherals.pins.gpio1)?,
        led(peripherals.pins.gpio2)?,
        led(peripherals.pins.gpio3)?,
    ];

    let mut leds = IndicatorBank::new(pins, config::DISPLAY_LEDS)?;
    log::info!("{} indicator LEDs on GPIO {:?}", leds.len(), board::LED_PINS);

    // ── WiFi station for scanning ────────────────────────────────────

    let mut wifi = BlockingWifi::wrap(
        EspWifi::new(peripherals.modem, sys_loop.clone(), Some(nvs))?,
        sys_loop,
    )?;
    wifi.set_configuration(&esp_idf_svc::wifi::Configuration::Client(Default::default()))?;
    wifi.start()?;
    log::info!("WiFi started in station mode");

    let mut scanner = EspWifiScanner { wifi };

    // ── Scan loop ────────────────────────────────────────────────────

    let report = ReportConfig::new();
    let mut table = SignalTable::new();

    loop {
        match run_cycle(&mut scanner, &config::ADDRESS_MASK, &mut table, &report) {
            Ok(result) => {
                if let Err(e) = leds.show(result.match_count as usize) {
                    log::error!("LED update failed: {:?}", e);
                }
            }
            Err(e) => log::warn!("WiFi scan failed: {:?}", e),
        }

        thread::sleep(Duration::from_millis(config::SCAN_INTERVAL_MS));
    }
}
