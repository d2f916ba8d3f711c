use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::Portfolio;

const TITLE_WIDTH: usize = 50;

/// Write the document as 2-space indented UTF-8 JSON, creating parent directories.
pub fn write_portfolio(path: &Path, portfolio: &Portfolio) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, portfolio)?;
    writer.flush()?;
    log::info!("wrote {}", path.display());
    Ok(())
}

pub fn summary_lines(portfolio: &Portfolio, path: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Saved {} projects to {}",
        portfolio.projects.len(),
        path.display()
    )];
    for (i, p) in portfolio.projects.iter().enumerate() {
        let title: String = p.title.chars().take(TITLE_WIDTH).collect();
        let title = if title.is_empty() { "(no title)".to_string() } else { title };
        lines.push(format!(
            "  {}. {} ... ({} images)",
            i + 1,
            title,
            p.images.len()
        ));
    }
    lines
}
