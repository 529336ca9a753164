//! Browser console output.
//!
//! Everything the page reports goes through here so the tags and colours stay
//! consistent. `tracing` events from `vis_core` are routed here too, one
//! console call per formatted line.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

const TAG_STYLE: &str = "color: #F28C28; font-weight: bold;";
const WARN_STYLE: &str = "color: #ff6b6b; font-weight: bold;";

/// `[vis][scope] message`, styled.
pub fn info(scope: &str, message: &str) {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c[vis][{scope}] {message}")),
        &JsValue::from_str(TAG_STYLE),
    );
}

pub fn warn(scope: &str, message: &str) {
    web_sys::console::warn_2(
        &JsValue::from_str(&format!("%c[vis][{scope}] {message}")),
        &JsValue::from_str(WARN_STYLE),
    );
}

/// Printed once on mount.
pub fn banner(section_count: usize) {
    web_sys::console::log_2(
        &JsValue::from_str(&format!(
            "%c\n  ВИС — стройматериалы с 2003 года\n  г. Артём, ул. Вокзальная 114\n  {section_count} sections | built with Rust + Leptos\n"
        )),
        &JsValue::from_str("color: #1E3A5F; font-family: monospace; font-size: 11px;"),
    );
}

/// Install the global `tracing` subscriber. Call once, before mounting.
pub fn install_tracing() {
    let level = if cfg!(debug_assertions) { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        warn("log", &format!("tracing subscriber not installed: {err}"));
    }
}

/// Hands the fmt layer a writer bound to the event's level.
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and prints it when dropped.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = event_line(&self.buf) else {
            return;
        };
        let line = JsValue::from_str(&line);
        match console_method(self.level) {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Log => web_sys::console::log_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
    Debug,
}

fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::ERROR => ConsoleMethod::Error,
        Level::WARN => ConsoleMethod::Warn,
        Level::INFO => ConsoleMethod::Log,
        _ => ConsoleMethod::Debug,
    }
}

/// The formatted event without its trailing newline; `None` when blank.
fn event_line(buf: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buf);
    let line = text.trim_end();
    (!line.is_empty()).then(|| format!("[vis] {line}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn warnings_go_to_console_warn() {
        assert_eq!(console_method(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::INFO), ConsoleMethod::Log);
        assert_eq!(console_method(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn event_line_strips_newline_and_skips_blank_output() {
        let formatted = b" WARN invalid site config, using defaults err=site config lists 2 sections, the page has 9\n";
        assert_eq!(
            event_line(formatted).as_deref(),
            Some("[vis]  WARN invalid site config, using defaults err=site config lists 2 sections, the page has 9")
        );
        assert_eq!(event_line(b"\n"), None);
    }
}
