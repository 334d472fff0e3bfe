use std::fs;
use std::path::PathBuf;

use resume::loader::load_resume;
use resume::models::ResumeData;
use resume::render::PrintPdfBackend;
use resume::site::{build_static_site, StaticSiteOptions};

fn manifest_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn fixture() -> ResumeData {
    load_resume(manifest_path("tests/fixtures/resume.yaml")).unwrap()
}

#[test]
fn build_writes_index_assets_pdf_and_nojekyll() {
    let out = tempfile::tempdir().unwrap();
    let dist = out.path().join("dist");
    let options = StaticSiteOptions {
        static_dir: manifest_path("static"),
        dist_dir: dist.clone(),
        render_pdf: true,
    };

    let report = build_static_site(&fixture(), &options, &PrintPdfBackend::default()).unwrap();

    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("Alex Morgan"));
    assert!(html.contains(r#"href="static/resume.pdf""#));
    assert!(html.contains(r#"href="static/css/style.css""#));

    assert!(dist.join("static/css/style.css").is_file());
    assert!(dist.join("static/js/main.js").is_file());
    assert!(report.assets_copied >= 2);

    let pdf = fs::read(dist.join("static/resume.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    assert_eq!(report.pdf, Some(dist.join("static/resume.pdf")));

    assert_eq!(fs::read(dist.join(".nojekyll")).unwrap().len(), 0);
}

#[test]
fn build_without_pdf_hides_download() {
    let out = tempfile::tempdir().unwrap();
    let options = StaticSiteOptions {
        static_dir: manifest_path("static"),
        dist_dir: out.path().to_path_buf(),
        render_pdf: false,
    };

    let report = build_static_site(&fixture(), &options, &PrintPdfBackend::default()).unwrap();

    assert!(report.pdf.is_none());
    assert!(!out.path().join("static/resume.pdf").exists());
    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(!html.contains(r#"id="export-pdf""#));
}

#[test]
fn missing_static_dir_is_an_error() {
    let out = tempfile::tempdir().unwrap();
    let options = StaticSiteOptions {
        static_dir: out.path().join("does-not-exist"),
        dist_dir: out.path().join("dist"),
        render_pdf: false,
    };

    let err = build_static_site(&fixture(), &options, &PrintPdfBackend::default()).unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}
