use std::io::Write;

use itertools::Itertools;

use crate::mesh::Panel;
use crate::misc::FloatingPoint;

/// File-level metadata of a GDF panel export.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdfMetadata<T: FloatingPoint> {
    /// Free-form header, written as the first line.
    pub header: String,
    /// Unit length scalar.
    pub unit_length: T,
    /// Gravitational constant.
    pub gravity: T,
    /// Symmetry about the x plane.
    pub symmetry_x: bool,
    /// Symmetry about the y plane.
    pub symmetry_y: bool,
}

impl<T: FloatingPoint> Default for GdfMetadata<T> {
    fn default() -> Self {
        Self {
            header: "panelmesh output".into(),
            unit_length: T::one(),
            gravity: T::from_f64(9.81).unwrap(),
            symmetry_x: false,
            symmetry_y: false,
        }
    }
}

fn scalar<T: FloatingPoint>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Serialize panels to the line-oriented GDF format: header line,
/// `ulen grav` line, `isx isy` line (as 0/1), panel count, then one line
/// per panel carrying the 12 vertex coordinates in signed exponential
/// notation.
pub fn write_gdf<T: FloatingPoint, W: Write>(
    mut writer: W,
    metadata: &GdfMetadata<T>,
    panels: &[Panel<T>],
) -> anyhow::Result<()> {
    writeln!(writer, "{}", metadata.header)?;
    writeln!(
        writer,
        "{} {}",
        scalar(metadata.unit_length),
        scalar(metadata.gravity)
    )?;
    writeln!(
        writer,
        "{} {}",
        metadata.symmetry_x as u8, metadata.symmetry_y as u8
    )?;
    writeln!(writer, "{}", panels.len())?;
    for panel in panels {
        let row = panel
            .flattened()
            .iter()
            .map(|v| format!("{:+.6E}", scalar(*v)))
            .join(" ");
        writeln!(writer, "{row}")?;
    }
    Ok(())
}

/// [`write_gdf`] into an owned string.
pub fn gdf_string<T: FloatingPoint>(
    metadata: &GdfMetadata<T>,
    panels: &[Panel<T>],
) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    write_gdf(&mut buffer, metadata, panels)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn unit_panel() -> Panel<f64> {
        Panel::new([
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn single_panel_layout() {
        let metadata = GdfMetadata {
            header: "test mesh".into(),
            unit_length: 1.0,
            gravity: 9.81,
            symmetry_x: true,
            symmetry_y: false,
        };
        let text = gdf_string(&metadata, &[unit_panel()]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "test mesh");
        assert_eq!(lines[1], "1 9.81");
        assert_eq!(lines[2], "1 0");
        assert_eq!(lines[3], "1");

        let fields: Vec<&str> = lines[4].split(' ').collect();
        assert_eq!(fields.len(), 12);
        assert!(fields[0].starts_with('+') || fields[0].starts_with('-'));
        assert_eq!(fields[3].parse::<f64>().unwrap(), 1.0);
        assert_eq!(fields[10].parse::<f64>().unwrap(), 1.0);
    }

    #[test]
    fn panel_count_line_matches() {
        let metadata = GdfMetadata::default();
        let panels = vec![unit_panel(); 7];
        let text = gdf_string(&metadata, &panels).unwrap();
        assert_eq!(text.lines().nth(3).unwrap(), "7");
        assert_eq!(text.lines().count(), 4 + 7);
    }
}
