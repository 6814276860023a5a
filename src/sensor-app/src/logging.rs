// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Level used when none is configured. Decoded output goes to stdout, so
/// anything chattier than warnings stays opt-in.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Parse a level name. Only the exact lowercase names are accepted.
pub fn parse_level(name: &str) -> Option<Level> {
    match name {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Initialize logging on stderr with optional level from CLI or config.
/// Falls back to WARN if level is None or invalid. Colour is only used when
/// stderr is a terminal.
pub fn init_logging(log_level: Option<&str>) {
    let level = log_level.and_then(parse_level).unwrap_or(DEFAULT_LEVEL);

    FmtSubscriber::builder()
        .with_target(false)
        .with_max_level(level)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
