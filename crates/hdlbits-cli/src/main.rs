// crates/hdlbits-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "hdlbits-cli")]
#[command(about = "Bit-exact fixed-point and bit-field reference values for HDL benches", long_about = None)]
pub struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Saturate values to a signed width
    Clip(cmd::quant::ClipArgs),

    /// Wrap values to a signed width (drop MSBs)
    Wrap(cmd::quant::WrapArgs),

    /// Round away LSBs with a tie-break policy
    Round(cmd::quant::RoundArgs),

    /// Truncate LSBs (shift right)
    Truncate(cmd::quant::TruncateArgs),

    /// Interpret value[w-1:0] as unsigned
    ToUnsigned(cmd::quant::ConvertArgs),

    /// Interpret value[w-1:0] as two's complement
    ToSigned(cmd::quant::ConvertArgs),

    /// Run the requantization pipeline (round/truncate LSBs, clip/wrap MSBs, gain)
    Requantize(cmd::requantize::RequantizeArgs),

    /// Inspect and edit a bit-field
    Bits(cmd::bits::BitsArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Clip(args) => cmd::quant::run_clip(args),
        Commands::Wrap(args) => cmd::quant::run_wrap(args),
        Commands::Round(args) => cmd::quant::run_round(args),
        Commands::Truncate(args) => cmd::quant::run_truncate(args),
        Commands::ToUnsigned(args) => cmd::quant::run_to_unsigned(args),
        Commands::ToSigned(args) => cmd::quant::run_to_signed(args),
        Commands::Requantize(args) => cmd::requantize::run(args),
        Commands::Bits(args) => cmd::bits::run(args),
    }
}
