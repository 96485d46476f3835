//! MacCount — WiFi access point counter
//!
//! Scans for access points, counts the ones whose BSSID passes the
//! configured MAC filter, tracks their signal strength, and lights one
//! indicator LED per match.
//!
//! Embassy firmware: a single task runs the scan loop. The WiFi scan is
//! awaited here and the completed result set is handed to the library.

#![no_std]
#![no_main]

extern crate alloc;

use esp_backtrace as _;

esp_bootloader_esp_idf::esp_app_desc!();

use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::timg::TimerGroup;
use esp_radio::wifi::{AccessPointInfo, ClientConfig, ModeConfig, ScanConfig};

use maccount::aggregator::aggregate;
use maccount::config::{self, ReportConfig};
use maccount::indicator::IndicatorBank;
use maccount::protocol::{DeviceMessage, MacString, VERSION};
use maccount::scanner::{format_mask, DiscoveredDevice, ScanResults};
use maccount::table::SignalTable;
use maccount::{board, comm};

fn to_device(ap: &AccessPointInfo) -> DiscoveredDevice {
    DiscoveredDevice::new(
        ap.ssid.as_str(),
        ap.bssid,
        i32::from(ap.signal_strength),
        ap.channel,
    )
}

// ── Entry point ──────────────────────────────────────────────────────

#[esp_rtos::main]
async fn main(_spawner: embassy_executor::Spawner) {
    esp_println::logger::init_logger_from_env();

    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Heap for the WiFi stack and the signal table.
    #[cfg(feature = "esp32")]
    {
        esp_alloc::heap_allocator!(size: 64 * 1024);
    }
    #[cfg(not(feature = "esp32"))]
    {
        esp_alloc::heap_allocator!(size: 96 * 1024);
    }

    // Start the RTOS — requires timer + software interrupt
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);

    log::info!("MacCount v{} starting on {}", VERSION, board::BOARD_NAME);

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

    // ── Indicator LEDs ───────────────────────────────────────────────
    // Order matches board::LED_PINS.

    #[cfg(feature = "m5stickc")]
    let pins = [
        Output::new(peripherals.GPIO32, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO33, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO25, Level::Low, OutputConfig::default()),
    ];
    #[cfg(feature = "xiao")]
    let pins = [
        Output::new(peripherals.GPIO1, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO3, Level::Low, OutputConfig::default()),
    ];

    // esp-hal outputs are infallible
    let mut leds = IndicatorBank::new(pins, config::DISPLAY_LEDS).unwrap();
    log::info!("{} indicator LEDs on GPIO {:?}", leds.len(), board::LED_PINS);

    // ── WiFi station for scanning ────────────────────────────────────

    let (mut controller, _interfaces) =
        esp_radio::wifi::new(peripherals.WIFI, Default::default()).expect("WiFi init failed");
    controller
        .set_config(&ModeConfig::Client(ClientConfig::default()))
        .expect("WiFi config failed");
    controller.start_async().await.expect("WiFi start failed");

    log::info!("WiFi started in station mode");

    // ── Scan loop ────────────────────────────────────────────────────

    let report = ReportConfig::new();
    let mut table = SignalTable::new();

    loop {
        match controller.scan_with_config_async(ScanConfig::default()).await {
            Ok(aps) => {
                let results: ScanResults = aps.iter().map(to_device).collect();
                drop(aps);
                let result = aggregate(&results, &config::ADDRESS_MASK, &mut table, &report);
                if let Err(e) = leds.show(result.match_count as usize) {
                    log::error!("LED update failed: {:?}", e);
                }
            }
            Err(e) => log::warn!("WiFi scan failed: {:?}", e),
        }

        Timer::after(Duration::from_millis(config::SCAN_INTERVAL_MS)).await;
    }
}
