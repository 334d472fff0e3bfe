//! Writes the static site into `DIST_DIR`.

use anyhow::{Context, Result};
use tracing::{error, info};

use resume::config::Config;
use resume::loader::load_resume;
use resume::render::PrintPdfBackend;
use resume::site::{build_static_site, StaticSiteOptions};
use resume::telemetry;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init(&config.rust_log)?;

    let resume = match load_resume(&config.resume_path) {
        Ok(resume) => resume,
        Err(e) => {
            error!("Failed to load resume: {e}");
            return Err(e.into());
        }
    };

    let options = StaticSiteOptions::from_config(&config);
    let report = build_static_site(&resume, &options, &PrintPdfBackend::default())
        .context("static build failed")
        .inspect_err(|e| error!("{e:#}"))?;

    info!(
        index = %report.index.display(),
        assets = report.assets_copied,
        pdf = report.pdf.is_some(),
        "Static site written to {}",
        options.dist_dir.display()
    );
    Ok(())
}
