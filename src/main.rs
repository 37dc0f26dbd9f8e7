use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{error, info};

use boardkit::{
    init_logging, load_design, plot_sheets, ExportOptions, SettingsManager, BUILD_DATE, VERSION,
};

fn usage() -> ! {
    eprintln!("boardkit {VERSION} ({BUILD_DATE})");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  boardkit themes                        List available color themes");
    eprintln!("  boardkit plot <design> <out-dir>       Export every sheet to DXF");
    eprintln!("          [--theme NAME] [--mono]");
    std::process::exit(2);
}

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("themes") => list_themes(),
        Some("plot") => plot(&args[1..]),
        _ => usage(),
    }
}

fn settings() -> Result<SettingsManager> {
    let mut manager = SettingsManager::new().context("Could not locate configuration")?;
    manager.load().context("Could not load settings")?;
    Ok(manager)
}

fn list_themes() -> Result<()> {
    let manager = settings()?;
    for name in manager.theme_names() {
        let marker = if name == manager.active_name() { "*" } else { " " };
        println!("{marker} {name}");
    }
    Ok(())
}

fn plot(args: &[String]) -> Result<()> {
    let mut design_path: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut theme_name: Option<String> = None;
    let mut options = ExportOptions::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--theme" => match iter.next() {
                Some(name) => theme_name = Some(name.clone()),
                None => usage(),
            },
            "--mono" => options.monochrome = true,
            _ if design_path.is_none() => design_path = Some(PathBuf::from(arg)),
            _ if out_dir.is_none() => out_dir = Some(PathBuf::from(arg)),
            _ => usage(),
        }
    }
    let (Some(design_path), Some(out_dir)) = (design_path, out_dir) else {
        usage();
    };

    let manager = settings()?;
    let theme = match theme_name {
        Some(name) => {
            if !manager.theme_names().contains(&name.as_str()) {
                bail!("Unknown theme \"{name}\"");
            }
            manager.theme(&name)
        }
        None => manager.active_theme(),
    };

    let design = load_design(&design_path)?;
    info!(
        "Plotting {} sheet(s) from {} with theme \"{}\"",
        design.sheets.len(),
        design_path.display(),
        theme.name
    );

    let report = plot_sheets(&design.sheets, &out_dir, &theme, &options);
    for sheet in &report.sheets {
        match &sheet.error {
            None => info!("Plotted {}", sheet.path.display()),
            Some(err) => error!("Failed to plot {}: {err}", sheet.path.display()),
        }
    }
    if report.aborted {
        bail!("Export aborted before all sheets were plotted");
    }
    if report.sheets.iter().any(|s| s.error.is_some()) {
        bail!("Export finished with errors");
    }
    Ok(())
}
