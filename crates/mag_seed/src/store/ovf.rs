//! OVF 2.0 writers for sampled states.
//!
//! Emits OOMMF OVF 2.0 rectangular-mesh segments with either a text or a
//! binary4 data section, the interchange format of the micromagnetics
//! toolchain. Binary4 data is little-endian f32 and opens with the
//! format's 1234567.0 check value. Extents are corner-based (mins at 0,
//! bases at half a cell); data runs x fastest, then y, then z, matching
//! the sample buffer layout.
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::mesh::MeshGeometry;
use crate::sample::SampleBuffer;

use super::StateStore;

/// Header metadata for an OVF segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct OvfMeta {
    pub title: String,
    pub desc: Vec<String>,
    pub value_labels: [String; 3],
    pub value_units: [String; 3],
}

impl OvfMeta {
    /// Metadata for a unit magnetization state titled `m`.
    pub fn magnetization() -> Self {
        Self {
            title: "m".to_owned(),
            desc: Vec::new(),
            value_labels: ["m_x".into(), "m_y".into(), "m_z".into()],
            value_units: ["1".into(), "1".into(), "1".into()],
        }
    }

    pub fn push_desc<S: Into<String>>(&mut self, line: S) {
        self.desc.push(line.into());
    }
}

fn check_shape(mesh: &MeshGeometry, buffer: &SampleBuffer) -> Result<()> {
    mesh.validate()?;
    if buffer.cells() != mesh.cells {
        return Err(Error::ShapeMismatch {
            expected: mesh.cell_count(),
            got: buffer.len(),
        });
    }
    Ok(())
}

fn write_header<W: Write>(w: &mut W, mesh: &MeshGeometry, meta: &OvfMeta) -> Result<()> {
    let [nx, ny, nz] = mesh.cells;
    let d = mesh.cell_size;
    let max = mesh.world_size();

    writeln!(w, "# OOMMF OVF 2.0")?;
    writeln!(w, "# Segment count: 1")?;
    writeln!(w, "# Begin: Segment")?;
    writeln!(w, "# Begin: Header")?;
    writeln!(w, "# Title: {}", meta.title)?;
    for line in &meta.desc {
        writeln!(w, "# Desc: {}", line)?;
    }
    writeln!(w, "# meshtype: rectangular")?;
    writeln!(w, "# meshunit: m")?;
    writeln!(w, "# xmin: 0")?;
    writeln!(w, "# ymin: 0")?;
    writeln!(w, "# zmin: 0")?;
    writeln!(w, "# xmax: {:.16e}", max.x)?;
    writeln!(w, "# ymax: {:.16e}", max.y)?;
    writeln!(w, "# zmax: {:.16e}", max.z)?;
    writeln!(w, "# valuedim: 3")?;
    writeln!(
        w,
        "# valuelabels: {} {} {}",
        meta.value_labels[0], meta.value_labels[1], meta.value_labels[2]
    )?;
    writeln!(
        w,
        "# valueunits: {} {} {}",
        meta.value_units[0], meta.value_units[1], meta.value_units[2]
    )?;
    writeln!(w, "# xbase: {:.16e}", 0.5 * d.x)?;
    writeln!(w, "# ybase: {:.16e}", 0.5 * d.y)?;
    writeln!(w, "# zbase: {:.16e}", 0.5 * d.z)?;
    writeln!(w, "# xnodes: {}", nx)?;
    writeln!(w, "# ynodes: {}", ny)?;
    writeln!(w, "# znodes: {}", nz)?;
    writeln!(w, "# xstepsize: {:.16e}", d.x)?;
    writeln!(w, "# ystepsize: {:.16e}", d.y)?;
    writeln!(w, "# zstepsize: {:.16e}", d.z)?;
    writeln!(w, "# End: Header")?;
    Ok(())
}

/// Writes one OVF 2.0 segment with a text data section.
pub fn write_ovf2_text<W: Write>(
    w: &mut W,
    mesh: &MeshGeometry,
    buffer: &SampleBuffer,
    meta: &OvfMeta,
) -> Result<()> {
    check_shape(mesh, buffer)?;
    write_header(w, mesh, meta)?;
    writeln!(w, "# Begin: Data Text")?;
    for m in buffer.data() {
        writeln!(w, "{:.10e} {:.10e} {:.10e}", m.x, m.y, m.z)?;
    }
    writeln!(w, "# End: Data Text")?;
    writeln!(w, "# End: Segment")?;
    Ok(())
}

/// Writes one OVF 2.0 segment with a binary4 data section.
///
/// Values are little-endian f32; the data section opens with the
/// 1234567.0 check value readers use to verify byte order.
pub fn write_ovf2_binary4<W: Write>(
    w: &mut W,
    mesh: &MeshGeometry,
    buffer: &SampleBuffer,
    meta: &OvfMeta,
) -> Result<()> {
    check_shape(mesh, buffer)?;
    write_header(w, mesh, meta)?;
    writeln!(w, "# Begin: Data Binary 4")?;
    let check: f32 = 1_234_567.0;
    w.write_all(&check.to_le_bytes())?;
    for m in buffer.data() {
        w.write_all(&(m.x as f32).to_le_bytes())?;
        w.write_all(&(m.y as f32).to_le_bytes())?;
        w.write_all(&(m.z as f32).to_le_bytes())?;
    }
    writeln!(w)?;
    writeln!(w, "# End: Data Binary 4")?;
    writeln!(w, "# End: Segment")?;
    Ok(())
}

/// Persists a text segment through `store`, flushing before returning.
pub fn save_ovf2_text(
    store: &dyn StateStore,
    path: &str,
    mesh: &MeshGeometry,
    buffer: &SampleBuffer,
    meta: &OvfMeta,
) -> Result<()> {
    let mut w = store.create(path)?;
    write_ovf2_text(&mut w, mesh, buffer, meta)?;
    w.flush()?;
    info!("Saved OVF text state '{}' ({} cells).", path, buffer.len());
    Ok(())
}

/// Persists a binary4 segment through `store`, flushing before returning.
pub fn save_ovf2_binary4(
    store: &dyn StateStore,
    path: &str,
    mesh: &MeshGeometry,
    buffer: &SampleBuffer,
    meta: &OvfMeta,
) -> Result<()> {
    let mut w = store.create(path)?;
    write_ovf2_binary4(&mut w, mesh, buffer, meta)?;
    w.flush()?;
    info!("Saved OVF binary4 state '{}' ({} cells).", path, buffer.len());
    Ok(())
}
