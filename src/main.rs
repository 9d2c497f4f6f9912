//! Command-line front end: builds a render model for a molecule JSON file
//! and prints it as JSON.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ligview::element::ElementTable;
use ligview::error::LigviewError;
use ligview::model::Molecule;
use ligview::options::{Options, OverlayMode, RenderStyle};
use ligview::scene::RenderModel;

const USAGE: &str = "Usage: ligview <molecule.json> [--style sphere|cube|space_filling] \
                     [--overlay none|h_bonds|exposure] [--preset file.toml]";

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    style: Option<RenderStyle>,
    overlay: Option<OverlayMode>,
    preset: Option<PathBuf>,
}

fn parse_style(value: &str) -> Option<RenderStyle> {
    match value {
        "sphere" => Some(RenderStyle::Sphere),
        "cube" => Some(RenderStyle::Cube),
        "space_filling" => Some(RenderStyle::SpaceFilling),
        _ => None,
    }
}

fn parse_overlay(value: &str) -> Option<OverlayMode> {
    match value {
        "none" => Some(OverlayMode::None),
        "h_bonds" => Some(OverlayMode::HBonds),
        "exposure" => Some(OverlayMode::Exposure),
        _ => None,
    }
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--style" => {
                let value = raw.next().ok_or("--style needs a value")?;
                args.style = Some(
                    parse_style(&value).ok_or_else(|| format!("unknown style: {value}"))?,
                );
            }
            "--overlay" => {
                let value = raw.next().ok_or("--overlay needs a value")?;
                args.overlay = Some(
                    parse_overlay(&value)
                        .ok_or_else(|| format!("unknown overlay: {value}"))?,
                );
            }
            "--preset" => {
                args.preset = Some(raw.next().ok_or("--preset needs a value")?.into());
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag: {flag}")),
            _ if args.input.is_none() => args.input = Some(PathBuf::from(&arg)),
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }
    Ok(args)
}

fn run(args: &Args, input: &Path) -> Result<(), LigviewError> {
    let mut options = match &args.preset {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(style) = args.style {
        options.display.style = style;
    }
    if let Some(overlay) = args.overlay {
        options.display.overlay = overlay;
    }

    let json = std::fs::read_to_string(input)?;
    let molecule = Molecule::from_json(&json)?;
    log::info!(
        "loaded {} atoms and {} bonds from {}",
        molecule.len(),
        molecule.bonds().len(),
        input.display()
    );

    let elements = ElementTable::with_color_overrides(&options.colors);
    let model = RenderModel::build(&molecule, &options, &elements);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &model)
        .map_err(|e| LigviewError::Io(e.into()))?;
    writeln!(out)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            log::error!("{msg}");
            log::error!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let Some(input) = args.input.clone() else {
        log::error!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(&args, &input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
