mod archive;
mod args;
mod config;
mod context;
mod error;
mod manifest;
mod result;
mod utils;

use args::Args;
use config::PackConfig;
use context::Context;
use std::path::Path;

const STORE_LINKS: &str = "\
Microsoft Edge Add-ons: https://partner.microsoft.com/dashboard/microsoftedge/addons
Chrome Web Store: https://chrome.google.com/webstore/devconsole";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    let Args {
        verbose,
        path,
        output,
        config,
    } = Args::parse();

    let ctx = Context::new(path.as_deref(), verbose)?;
    let config = PackConfig::load(&ctx, config.as_deref())?;

    cliclack::intro("extpack")?;

    let output = ctx.resolve(output.as_deref().unwrap_or(Path::new(&config.archive)));
    let report = archive::package(&ctx, &config, &output)?;

    println!("Package created at: {}", report.archive_path.display());
    println!("Size: {} KB", report.size_kb());
    cliclack::log::success("Package created")?;

    if !report.missing.is_empty() {
        cliclack::log::warning(format!(
            "{} file(s) not found: {}",
            report.missing.len(),
            report.missing.join(", ")
        ))?;
    }

    cliclack::note("Ready to publish", STORE_LINKS)?;
    cliclack::outro(format!("Packaged {} files", report.added.len()))?;
    Ok(())
}
