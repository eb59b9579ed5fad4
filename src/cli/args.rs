use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use qrgen::types::{EcLevelArg, OutputFormat};

#[derive(Parser)]
#[command(name = "qrgen", version, about = "QRGEN CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode a URL into a QR code image with explicit options
    Encode(EncodeArgs),
    /// Prompt for a URL and write the default PNG/SVG pair
    Quick(QuickArgs),
}

#[derive(Args)]
pub struct EncodeArgs {
    /// URL to encode (must include http:// or https://)
    #[arg(short, long)]
    pub url: String,

    /// Output image path
    #[arg(short, long, default_value = "output/qr.png")]
    pub out: PathBuf,

    /// Output format (png, svg, or both siblings next to --out)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Error correction level: L ~7%, M ~15%, Q ~25%, H ~30% recovery
    #[arg(long, value_enum, ignore_case = true, default_value_t = EcLevelArg::M)]
    pub ec: EcLevelArg,

    /// Pixel size of each QR box/module
    #[arg(long, default_value_t = 10)]
    pub box_size: u32,

    /// Quiet-zone width in modules
    #[arg(long, default_value_t = 4)]
    pub border: u32,
}

#[derive(Args)]
pub struct QuickArgs {
    /// URL to encode; prompts interactively when omitted
    pub url: Option<String>,

    /// Directory for the generated qrcode.png / qrcode.svg pair
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}
