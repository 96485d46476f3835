/// One scan → filter → aggregate cycle.
///
/// Runs a scan, checks every access point against the address mask in scan
/// order, records the signal magnitude of each match in the caller's
/// [`SignalTable`], and returns how many matched. Scan results are dropped
/// when the cycle ends. Scanner failures are returned to the caller; the
/// cycle does not retry.
use crate::comm;
use crate::config::ReportConfig;
use crate::mask::AddressMask;
use crate::protocol::DeviceMessage;
use crate::scanner::{DiscoveredDevice, WifiScanner};
use crate::table::SignalTable;

/// Outcome of a single cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleResult {
    /// Access points returned by the scan
    pub found: u16,
    /// Access points whose address passed the mask
    pub match_count: u16,
}

/// Scan with `scanner` and aggregate the results into `table`.
pub fn run_cycle<S: WifiScanner>(
    scanner: &mut S,
    mask: &AddressMask,
    table: &mut SignalTable,
    report: &ReportConfig,
) -> Result<CycleResult, S::Error> {
    let results = scanner.scan()?;
    Ok(aggregate(&results, mask, table, report))
}

/// Filter an already completed scan and update `table`.
pub fn aggregate(
    devices: &[DiscoveredDevice],
    mask: &AddressMask,
    table: &mut SignalTable,
    report: &ReportConfig,
) -> CycleResult {
    let mut result = CycleResult {
        found: devices.len().min(u16::MAX as usize) as u16,
        match_count: 0,
    };

    if devices.is_empty() {
        log::info!("No WiFi devices found");
    } else {
        log::info!("Found {} devices", devices.len());
    }

    for (i, device) in devices.iter().enumerate() {
        let mac = device.mac_string();
        let matched = mask.matches(&device.address);

        if report.print_found_devices {
            log::info!(
                "{}: {} - {} ({})",
                i + 1,
                device.name,
                mac,
                device.signal
            );
        }
        if report.json {
            comm::emit(&DeviceMessage::Device {
                idx: (i + 1).min(u16::MAX as usize) as u16,
                ssid: &device.name,
                mac: &mac,
                rssi: device.signal,
                ch: device.channel,
                matched,
            });
        }

        if matched {
            table.record(mac, device.signal);
            result.match_count = result.match_count.saturating_add(1);
        }
    }

    log::info!(
        "Counted {} devices that passed the MAC filter",
        result.match_count
    );

    if report.json {
        let nearest = table.strongest();
        comm::emit(&DeviceMessage::Cycle {
            found: result.found,
            matched: result.match_count,
            tracked: table.len().min(u32::MAX as usize) as u32,
            nearest: nearest.map(|(mac, _)| mac),
            nearest_rssi: nearest.map(|(_, value)| value),
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::ScanResults;
    use std::collections::VecDeque;

    const OUI_MASK: AddressMask = AddressMask::new(
        [0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x00],
        [true, true, true, false, false, false],
    );

    #[derive(Debug, PartialEq)]
    struct RadioDown;

    /// Scanner returning queued result sets, then failing.
    struct ScriptedScanner {
        rounds: VecDeque<Vec<DiscoveredDevice>>,
        calls: usize,
    }

    impl ScriptedScanner {
        fn new(rounds: Vec<Vec<DiscoveredDevice>>) -> Self {
            Self {
                rounds: rounds.into(),
                calls: 0,
            }
        }
    }

    impl WifiScanner for ScriptedScanner {
        type Error = RadioDown;

        fn scan(&mut self) -> Result<ScanResults, Self::Error> {
            self.calls += 1;
            let round = self.rounds.pop_front().ok_or(RadioDown)?;
            Ok(round.into_iter().collect())
        }
    }

    fn device(address: [u8; 6], signal: i32) -> DiscoveredDevice {
        DiscoveredDevice::new("test-ap", address, signal, 6)
    }

    fn cycle(scanner: &mut ScriptedScanner, table: &mut SignalTable) -> CycleResult {
        run_cycle(scanner, &OUI_MASK, table, &ReportConfig::quiet()).unwrap()
    }

    #[test]
    fn matching_device_is_counted_and_tracked() {
        let mut scanner =
            ScriptedScanner::new(vec![vec![device([0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x01], -42)]]);
        let mut table = SignalTable::new();

        let result = cycle(&mut scanner, &mut table);

        assert_eq!(result.match_count, 1);
        assert_eq!(result.found, 1);
        assert_eq!(table.get("AC:A3:1E:00:00:01"), Some(42));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn non_matching_device_is_ignored() {
        let mut scanner =
            ScriptedScanner::new(vec![vec![device([0xAC, 0xA3, 0x1F, 0x00, 0x00, 0x01], -42)]]);
        let mut table = SignalTable::new();

        let result = cycle(&mut scanner, &mut table);

        assert_eq!(result.match_count, 0);
        assert_eq!(result.found, 1);
        assert!(table.is_empty());
    }

    #[test]
    fn empty_scan_is_not_an_error() {
        let mut scanner = ScriptedScanner::new(vec![vec![]]);
        let mut table = SignalTable::new();

        let result = run_cycle(&mut scanner, &OUI_MASK, &mut table, &ReportConfig::new());

        assert_eq!(result, Ok(CycleResult::default()));
        assert!(table.is_empty());
    }

    #[test]
    fn repeated_device_updates_signal() {
        let addr = [0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x01];
        let mut scanner =
            ScriptedScanner::new(vec![vec![device(addr, -42)], vec![device(addr, -50)]]);
        let mut table = SignalTable::new();

        assert_eq!(cycle(&mut scanner, &mut table).match_count, 1);
        assert_eq!(table.get("AC:A3:1E:00:00:01"), Some(42));

        assert_eq!(cycle(&mut scanner, &mut table).match_count, 1);
        assert_eq!(table.get("AC:A3:1E:00:00:01"), Some(50));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn table_never_shrinks() {
        let a = [0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x01];
        let b = [0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x02];
        let mut scanner = ScriptedScanner::new(vec![
            vec![device(a, -40), device(b, -60)],
            vec![],
            vec![device(b, -55)],
        ]);
        let mut table = SignalTable::new();

        let mut sizes = Vec::new();
        for _ in 0..3 {
            cycle(&mut scanner, &mut table);
            sizes.push(table.len());
        }

        assert_eq!(sizes, vec![2, 2, 2]);
        // Absent device keeps its last value
        assert_eq!(table.get("AC:A3:1E:00:00:01"), Some(40));
        assert_eq!(table.get("AC:A3:1E:00:00:02"), Some(55));
    }

    #[test]
    fn mixed_scan_counts_only_matches() {
        let mut scanner = ScriptedScanner::new(vec![vec![
            device([0xAC, 0xA3, 0x1E, 0x01, 0x02, 0x03], -30),
            device([0x00, 0x11, 0x22, 0x33, 0x44, 0x55], -20),
            device([0xAC, 0xA3, 0x1E, 0x0A, 0x0B, 0x0C], -70),
            device([0xAC, 0xA2, 0x1E, 0x01, 0x02, 0x03], -10),
        ]]);
        let mut table = SignalTable::new();

        let result = cycle(&mut scanner, &mut table);

        assert_eq!(result.found, 4);
        assert_eq!(result.match_count, 2);
        assert_eq!(table.len(), 2);
        assert!(!table.contains("00:11:22:33:44:55"));
        assert_eq!(table.strongest(), Some(("AC:A3:1E:01:02:03", 30)));
    }

    #[test]
    fn duplicate_address_in_one_scan_counts_twice_last_value_wins() {
        let addr = [0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x09];
        let mut scanner =
            ScriptedScanner::new(vec![vec![device(addr, -40), device(addr, -65)]]);
        let mut table = SignalTable::new();

        let result = cycle(&mut scanner, &mut table);

        assert_eq!(result.match_count, 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("AC:A3:1E:00:00:09"), Some(65));
    }

    #[test]
    fn accept_all_mask_counts_everything() {
        let devices = [
            device([0x01, 0x02, 0x03, 0x04, 0x05, 0x06], -50),
            device([0xFF, 0xFE, 0xFD, 0xFC, 0xFB, 0xFA], -80),
        ];
        let mut table = SignalTable::new();

        let result = aggregate(
            &devices,
            &AddressMask::accept_all(),
            &mut table,
            &ReportConfig::quiet(),
        );

        assert_eq!(result.match_count, 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn json_reporting_does_not_change_outcome() {
        let devices = [device([0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x01], -42)];
        let report = ReportConfig {
            print_found_devices: true,
            json: true,
        };
        let mut table = SignalTable::new();

        let result = aggregate(&devices, &OUI_MASK, &mut table, &report);

        assert_eq!(result.match_count, 1);
        assert_eq!(table.get("AC:A3:1E:00:00:01"), Some(42));
    }

    #[test]
    fn large_scan_checks_every_access_point() {
        let mut round: Vec<DiscoveredDevice> = (0..66u8)
            .map(|i| device([0x00, 0x11, 0x22, 0x33, 0x44, i], -40))
            .collect();
        round.push(device([0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x01], -88));
        round.push(device([0xAC, 0xA3, 0x1E, 0x00, 0x00, 0x02], -91));
        let mut scanner = ScriptedScanner::new(vec![round]);
        let mut table = SignalTable::new();

        let result = cycle(&mut scanner, &mut table);

        assert_eq!(result.found, 68);
        assert_eq!(result.match_count, 2);
        assert_eq!(table.get("AC:A3:1E:00:00:01"), Some(88));
        assert_eq!(table.get("AC:A3:1E:00:00:02"), Some(91));
    }

    #[test]
    fn scanner_failure_is_propagated() {
        let mut scanner = ScriptedScanner::new(vec![]);
        let mut table = SignalTable::new();

        let result = run_cycle(&mut scanner, &OUI_MASK, &mut table, &ReportConfig::quiet());

        assert_eq!(result, Err(RadioDown));
        assert_eq!(scanner.calls, 1);
        assert!(table.is_empty());
    }
}
