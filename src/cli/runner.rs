use tracing::info;

use qrgen::api::{generate_pair, generate_to_path};
use qrgen::core::params::QrParams;
use qrgen::core::url::normalize;
use qrgen::types::EcLevelArg;

use super::args::{CliArgs, Command, EncodeArgs, QuickArgs};
use super::errors::AppError;
use super::prompt::prompt_for_url;

/// Module pixel size for the one-shot PNG artifact.
const QUICK_PNG_SCALE: u32 = 10;
/// Module pixel size for the one-shot SVG artifact.
const QUICK_SVG_SCALE: u32 = 5;
/// Quiet-zone width for the one-shot pair, in modules.
const QUICK_BORDER: u32 = 4;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match args.command {
        Command::Encode(cmd) => run_encode(cmd),
        Command::Quick(cmd) => run_quick(cmd),
    }
}

fn run_encode(cmd: EncodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    if cmd.box_size == 0 {
        return Err(AppError::ZeroBoxSize { size: cmd.box_size }.into());
    }

    let params = QrParams {
        ec_level: cmd.ec,
        module_size: cmd.box_size,
        border: cmd.border,
    };

    info!("Encoding URL: {}", cmd.url);

    let written = generate_to_path(&cmd.url, &cmd.out, cmd.format, &params)?;
    for path in written {
        println!("QR code saved to: {}", path.display());
    }

    Ok(())
}

fn run_quick(cmd: QuickArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = match cmd.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };
    let url = normalize(&raw);

    info!("Encoding URL: {}", url);

    let (png, svg) = generate_pair(
        &url,
        &cmd.out_dir,
        EcLevelArg::H,
        QUICK_PNG_SCALE,
        QUICK_SVG_SCALE,
        QUICK_BORDER,
    )?;

    println!("QR code saved to: {}", png.display());
    println!("QR code saved to: {}", svg.display());

    Ok(())
}
