//! `actimg render` – filter HTML against a course snapshot.

use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::Path;

use actimg_core::annotate::decode_html;
use actimg_core::config::FilterConfig;
use actimg_core::filter::{ActivityFilter, FilterOptions};
use actimg_core::snapshot::CourseSnapshot;

pub(crate) fn render_html(
    cfg: FilterConfig,
    snapshot: &CourseSnapshot,
    options: &FilterOptions,
    bytes: &[u8],
) -> String {
    let html = decode_html(bytes);
    ActivityFilter::new(snapshot, cfg).filter(&html, options)
}

pub fn run_render(
    cfg: FilterConfig,
    snapshot_path: &Path,
    user: Option<i64>,
    options: FilterOptions,
    input: Option<&Path>,
) -> Result<()> {
    let mut snapshot = CourseSnapshot::load(snapshot_path)?;
    if let Some(user) = user {
        snapshot = snapshot.with_user(user);
    }

    let bytes = match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("read HTML input: {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("read HTML from stdin")?;
            buf
        }
    };

    let out = render_html(cfg, &snapshot, &options, &bytes);
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
