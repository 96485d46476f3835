//! MacCount library — portable access point counting engine.
//!
//! Scans are filtered by a hardware-address mask, matching devices are
//! tracked in a signal table, and the match count is rendered onto a bank
//! of indicator LEDs. Everything here is `no_std` and testable on any host
//! with `cargo test`. The firmware binaries (Embassy in `src/main.rs`,
//! ESP-IDF in `firmware-std/`) only provide the radio adapter, the LED pins
//! and the outer timed loop.
//!
//! Modules, leaf first:
//! - `mask` — the segment-mask address predicate
//! - `scanner` — scan result type and the `WifiScanner` seam
//! - `table` — per-address signal strength tracking
//! - `aggregator` — one scan → filter → aggregate cycle
//! - `indicator` — count-to-LED rendering
//! - `protocol`, `comm` — NDJSON diagnostic records
//! - `config`, `board` — compile-time configuration

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod aggregator;
pub mod board;
pub mod comm;
pub mod config;
pub mod indicator;
pub mod mask;
pub mod protocol;
pub mod scanner;
pub mod table;
