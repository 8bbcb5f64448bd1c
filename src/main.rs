use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};

use muse_decode::decoder::{DecoderConfig, NotificationDecoder};
use muse_decode::protocol::{Channel, EEG_CHANNEL_NAMES};
use muse_decode::types::MuseEvent;

/// Replay recorded Muse BLE notifications through the decoders.
///
/// Each input line is `<channel> <hex payload>`, e.g.
/// `tp9 00 2a 80 08 00 …` or `telemetry 002a04000064beef012c`.
/// Blank lines and lines starting with `#` are ignored.
#[derive(Parser)]
#[command(name = "muse-decode", version)]
struct Cli {
    /// Notification dump to read (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reject EEG payloads that are not a whole number of 3-byte groups
    #[arg(long)]
    strict: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging ───────────────────────────────────────────────────────────────
    // Without -v, RUST_LOG decides, e.g. RUST_LOG=muse_decode=debug
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match cli.verbose {
        0 => {}
        1 => {
            logger.filter_level(log::LevelFilter::Info);
        }
        2 => {
            logger.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            logger.filter_level(log::LevelFilter::Trace);
        }
    }
    logger.format_timestamp(None).init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let decoder = NotificationDecoder::new(DecoderConfig {
        strict_eeg_length: cli.strict,
    });

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let (mut decoded, mut skipped) = (0usize, 0usize);

    for (n, line) in reader.lines().enumerate() {
        let line_no = n + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (channel, payload) = match parse_line(line) {
            Ok(v) => v,
            Err(e) => {
                warn!("line {line_no}: {e:#}");
                skipped += 1;
                continue;
            }
        };

        match decoder.decode(channel, &payload) {
            Ok(Some(event)) => {
                write_event(&mut out, &event, cli.format)?;
                decoded += 1;
            }
            Ok(None) => {
                debug!("line {line_no}: {channel} notification has no decoder");
                skipped += 1;
            }
            Err(e) => {
                warn!("line {line_no}: {channel}: {e}");
                skipped += 1;
            }
        }
    }

    out.flush()?;
    info!("{decoded} notifications decoded, {skipped} skipped");
    Ok(())
}

/// Split a dump line into its channel tag and payload bytes.
///
/// Hex bytes may be written contiguously or separated by spaces or colons.
fn parse_line(line: &str) -> Result<(Channel, Vec<u8>)> {
    let (tag, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let channel: Channel = tag.parse()?;
    let digits: String = rest
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let payload = hex::decode(&digits).with_context(|| format!("bad hex payload '{digits}'"))?;
    Ok((channel, payload))
}

fn write_event(out: &mut impl Write, event: &MuseEvent, format: Format) -> Result<()> {
    if let Format::Json = format {
        serde_json::to_writer(&mut *out, event)?;
        writeln!(out)?;
        return Ok(());
    }

    match event {
        MuseEvent::Eeg(reading) => {
            let ch_name = EEG_CHANNEL_NAMES
                .get(reading.electrode)
                .copied()
                .unwrap_or("?");
            let first = reading.samples.first().copied().unwrap_or(f64::NAN);
            writeln!(
                out,
                "[EEG] ch={ch_name:4} idx={:5}  n={:2} ({:.1} ms)  sample[0]={first:+8.3} µV",
                reading.index,
                reading.samples.len(),
                reading.duration_ms()
            )?;
        }
        MuseEvent::Telemetry(t) => {
            writeln!(
                out,
                "[TELEMETRY] seq={:5}  battery={:.3}  fuel_gauge={:.1}  temp={}",
                t.sequence_id, t.battery_level, t.fuel_gauge_voltage, t.temperature
            )?;
        }
        MuseEvent::Accelerometer(a) => {
            for s in &a.samples {
                writeln!(
                    out,
                    "[ACCEL] seq={:5}  x={:+.5}g  y={:+.5}g  z={:+.5}g",
                    a.sequence_id, s.x, s.y, s.z
                )?;
            }
        }
        MuseEvent::Gyroscope(g) => {
            for s in &g.samples {
                writeln!(
                    out,
                    "[GYRO]  seq={:5}  x={:+.5}°/s  y={:+.5}°/s  z={:+.5}°/s",
                    g.sequence_id, s.x, s.y, s.z
                )?;
            }
        }
    }
    Ok(())
}
