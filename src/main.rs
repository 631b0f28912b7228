use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use lora_toa::logging::{log_debug, log_error};
use lora_toa::{
    config, init_logger, log_info, CodingRate, FskParameters, Packet, RadioParameters, ToaError,
};

#[derive(Parser)]
#[command(name = "lora-toa")]
#[command(about = "Compute LoRa and FSK packet time on air")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// LoRa packet from radio parameters
    Lora {
        #[command(flatten)]
        radio: LoraArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// FSK packet from bitrate and frame layout
    Fsk {
        #[command(flatten)]
        frame: FskArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Packet described by a JSON file
    File {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct LoraArgs {
    #[arg(short, long, default_value_t = 7)]
    spreading_factor: u8,
    /// Bandwidth in Hz
    #[arg(short, long, default_value_t = 125_000)]
    bandwidth: u32,
    /// 4/5, 4/6, 4/7 or 4/8
    #[arg(short, long, default_value_t = CodingRate::CR4_5)]
    coding_rate: CodingRate,
    /// Preamble length in symbols
    #[arg(long, default_value_t = 8)]
    preamble: u16,
    #[arg(long)]
    implicit_header: bool,
    #[arg(long)]
    low_data_rate_optimize: bool,
    /// Payload length in bytes
    #[arg(short, long, default_value_t = 0)]
    payload: u32,
    #[arg(long)]
    no_crc: bool,
}

impl From<LoraArgs> for RadioParameters {
    fn from(args: LoraArgs) -> Self {
        Self {
            spreading_factor: args.spreading_factor,
            bandwidth_hz: args.bandwidth,
            coding_rate: args.coding_rate,
            preamble_symbols: args.preamble,
            header_enabled: !args.implicit_header,
            low_data_rate_optimize: args.low_data_rate_optimize,
            payload_bytes: args.payload,
            crc_enabled: !args.no_crc,
        }
    }
}

#[derive(Args)]
struct FskArgs {
    /// Bitrate in bits per second
    #[arg(short, long)]
    datarate: u32,
    /// Payload length in bytes
    #[arg(short, long, default_value_t = 0)]
    payload: u32,
    /// Preamble length in bytes
    #[arg(long, default_value_t = 5)]
    preamble: u16,
    /// Sync word length in bytes
    #[arg(long, default_value_t = 3)]
    sync_word: u8,
    #[arg(long)]
    no_crc: bool,
}

impl From<FskArgs> for FskParameters {
    fn from(args: FskArgs) -> Self {
        Self {
            datarate_bps: args.datarate,
            preamble_bytes: args.preamble,
            sync_word_bytes: args.sync_word,
            payload_bytes: args.payload,
            crc_enabled: !args.no_crc,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Unit {
    S,
    Ms,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(short, long, value_enum, default_value_t = Unit::S)]
    unit: Unit,
    /// Print the full breakdown as JSON
    #[arg(long)]
    json: bool,
}

fn print_packet(packet: &Packet, output: &OutputArgs) -> anyhow::Result<()> {
    let report = packet.report()?;
    log_debug(&format!("{report:?}"));

    let mut stdout = io::stdout().lock();
    if output.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        writeln!(stdout, "{json}")?;
    } else {
        match output.unit {
            Unit::S => writeln!(stdout, "{:.6}", report.time_on_air_s)?,
            Unit::Ms => writeln!(stdout, "{:.3}", report.time_on_air_s * 1000.0)?,
        }
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Lora { radio, output } => print_packet(&Packet::Lora(radio.into()), &output),
        Commands::Fsk { frame, output } => print_packet(&Packet::Fsk(frame.into()), &output),
        Commands::File { path, output } => {
            let packet = config::load_packet(&path)
                .with_context(|| format!("loading {}", path.display()))?;
            log_info(&format!(
                "Loaded {} packet from {}",
                packet.modulation(),
                path.display()
            ));
            print_packet(&packet, &output)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error(&format!("{err:#}"));
            let code = err
                .downcast_ref::<ToaError>()
                .map_or(1, ToaError::exit_code);
            ExitCode::from(code)
        }
    }
}
