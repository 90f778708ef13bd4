use std::process::exit;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use libc::EXIT_FAILURE;
use libwifi::frame::components::MacAddress;

use fake_ap::descriptor::parse_bssid;
use fake_ap::rawsocks::open_socket_tx;
use fake_ap::status::MessageLog;
use fake_ap::tx::DEFAULT_DATA_RATE;
use fake_ap::{build_beacon_frame, parse_channel, transmit, AccessPointDescriptor};

#[derive(Parser)]
#[command(name = "fake_ap")]
#[command(about = "Broadcasts beacons for an access point that doesn't exist.", long_about = None)]
#[command(version)]
struct Arguments {
    /// Monitor-mode interface to inject on.
    interface: String,

    /// Channel announced in the beacon (1-255).
    channel: String,

    #[arg(long)]
    /// Network name to announce instead of the built-in one.
    ssid: Option<String>,

    #[arg(long, value_parser = parse_mac)]
    /// BSSID to announce instead of the built-in one.
    mac: Option<MacAddress>,

    #[arg(long, default_value_t = DEFAULT_DATA_RATE, value_parser = parse_rate)]
    /// Radiotap rate code in 500 kbps units, decimal or 0x-prefixed hex.
    rate: u8,
}

fn parse_rate(input: &str) -> Result<u8, String> {
    let parsed = match input.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => input.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid rate code {input}: {e}"))
}

fn parse_mac(input: &str) -> Result<MacAddress, String> {
    parse_bssid(input).map_err(|e| e.to_string())
}

fn run(args: Arguments, log: &mut MessageLog) -> Result<u64> {
    let channel = parse_channel(&args.channel)?;

    let mut ap = AccessPointDescriptor::default();
    if let Some(ssid) = args.ssid {
        ap = ap.with_ssid(ssid);
    }
    if let Some(mac) = args.mac {
        ap = ap.with_mac(mac);
    }

    let mut socket = open_socket_tx(&args.interface)
        .with_context(|| format!("Error opening socket: {}", args.interface))?;
    log.info(format!("Socket was created on {}", socket.interface()));

    let frame = build_beacon_frame(args.rate, channel, &ap)?;
    log.info(format!("Beacon Length: {}", frame.len()));
    log.info(format!(
        "Created Beacon Frame: {} ({}) on channel {}",
        ap.ssid_string(),
        ap.mac_address,
        channel
    ));

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let sent = transmit(&mut socket, &frame, &running, log)?;
    Ok(sent)
}

fn main() {
    let args = Arguments::parse();
    let mut log = MessageLog::new(true, Some(100));

    match run(args, &mut log) {
        Ok(sent) => log.info(format!("Stopped after {sent} beacons.")),
        Err(e) => {
            log.error(format!("{e:#}"));
            exit(EXIT_FAILURE);
        }
    }
}
