//! Static build: writes a self-contained copy of the site into `dist/` for
//! hosting on GitHub Pages or any file server.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::models::ResumeData;
use crate::render::{render_html, render_pdf, PdfBackend};

/// Link used by the download button in a static build.
pub const STATIC_PDF_LINK: &str = "static/resume.pdf";

#[derive(Debug, Clone)]
pub struct StaticSiteOptions {
    pub static_dir: PathBuf,
    pub dist_dir: PathBuf,
    /// Render `static/resume.pdf` and show the download button.
    pub render_pdf: bool,
}

impl StaticSiteOptions {
    pub fn from_config(config: &Config) -> Self {
        StaticSiteOptions {
            static_dir: config.static_dir.clone(),
            dist_dir: config.dist_dir.clone(),
            render_pdf: config.static_pdf,
        }
    }
}

/// What a static build wrote.
#[derive(Debug, Default)]
pub struct SiteReport {
    pub index: PathBuf,
    /// Number of files copied from the static directory.
    pub assets_copied: usize,
    pub pdf: Option<PathBuf>,
    pub nojekyll: PathBuf,
}

pub fn build_static_site(
    resume: &ResumeData,
    options: &StaticSiteOptions,
    backend: &dyn PdfBackend,
) -> Result<SiteReport> {
    let dist = &options.dist_dir;
    fs::create_dir_all(dist)
        .with_context(|| format!("failed to create output directory {}", dist.display()))?;

    let pdf_link = options.render_pdf.then_some(STATIC_PDF_LINK);
    let html = render_html(resume, pdf_link).context("failed to render index.html")?;
    let index = dist.join("index.html");
    fs::write(&index, html).with_context(|| format!("failed to write {}", index.display()))?;
    info!(path = %index.display(), "Wrote index.html");

    if !options.static_dir.is_dir() {
        bail!(
            "static directory {} does not exist",
            options.static_dir.display()
        );
    }
    let static_out = dist.join("static");
    let assets_copied = copy_dir(&options.static_dir, &static_out)?;
    info!(files = assets_copied, dest = %static_out.display(), "Copied static assets");

    let pdf = if options.render_pdf {
        let bytes = render_pdf(resume, backend).context("failed to generate resume.pdf")?;
        let path = static_out.join("resume.pdf");
        fs::write(&path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "Wrote resume.pdf");
        Some(path)
    } else {
        None
    };

    let nojekyll = dist.join(".nojekyll");
    fs::write(&nojekyll, b"").with_context(|| format!("failed to write {}", nojekyll.display()))?;

    Ok(SiteReport {
        index,
        assets_copied,
        pdf,
        nojekyll,
    })
}

/// Recursively copies `src` into `dest`, returning the number of files copied.
fn copy_dir(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest).with_context(|| format!("failed to create {}", dest.display()))?;

    let mut copied = 0;
    let entries = fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", src.display()))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copied += copy_dir(&from, &to)?;
        } else {
            fs::copy(&from, &to).with_context(|| {
                format!("failed to copy {} to {}", from.display(), to.display())
            })?;
            debug!(file = %to.display(), "Copied asset");
            copied += 1;
        }
    }
    Ok(copied)
}
