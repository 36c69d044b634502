use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::Profile;

/// One CSV row of the exported view.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: u32,
    name: &'a str,
    role: &'a str,
    area: &'a str,
    location: &'a str,
    /// Technical skills joined with `;`.
    technologies: String,
    recommendations: u32,
}

/// Write `profiles` as CSV. `recommendations` supplies the session count for
/// each profile id.
pub fn write_csv<W: Write>(
    writer: W,
    profiles: &[&Profile],
    recommendations: impl Fn(u32) -> u32,
) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for p in profiles {
        out.serialize(ExportRow {
            id: p.id,
            name: &p.name,
            role: &p.role,
            area: &p.area,
            location: &p.location,
            technologies: p.technical_skills.join(";"),
            recommendations: recommendations(p.id),
        })
        .with_context(|| format!("writing profile {}", p.id))?;
    }
    out.flush().context("flushing CSV output")?;
    Ok(())
}

/// Export to a file, replacing it if present.
pub fn export_file(
    path: &Path,
    profiles: &[&Profile],
    recommendations: impl Fn(u32) -> u32,
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, profiles, recommendations)
}
