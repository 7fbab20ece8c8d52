//! Text input and output for the command-line driver.
//!
//! Input holds one `latitude,longitude` record per line in decimal degrees;
//! blank lines are ignored. Output holds an optional header line, the tour
//! length rounded to the nearest integer, and the comma-separated 1-based
//! labels.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{AcoError, Result};
use crate::models::{NormalizedTour, Point};

/// Parses points from a reader.
///
/// # Examples
///
/// ```
/// use geo_aco::io::parse_points;
///
/// let input = "55.75,37.61\n\n59.93, 30.33\n";
/// let points = parse_points(input.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].longitude(), 30.33);
/// ```
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        points.push(parse_record(record, i + 1)?);
    }
    Ok(points)
}

fn parse_record(record: &str, line: usize) -> Result<Point> {
    let parse_error = |message: String| AcoError::Parse { line, message };

    let mut fields = record.split(',');
    let (Some(lat), Some(lon), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(parse_error(format!(
            "expected `latitude,longitude`, got `{record}`"
        )));
    };
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|e| parse_error(format!("invalid latitude `{}`: {e}", lat.trim())))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|e| parse_error(format!("invalid longitude `{}`: {e}", lon.trim())))?;
    if !latitude.is_finite() || latitude.abs() > 90.0 {
        return Err(parse_error(format!(
            "latitude `{}` is outside [-90, 90]",
            lat.trim()
        )));
    }
    if !longitude.is_finite() {
        return Err(parse_error(format!(
            "longitude `{}` is not a finite number",
            lon.trim()
        )));
    }
    Ok(Point::new(latitude, longitude))
}

/// Reads points from a file.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let file = File::open(path)?;
    parse_points(BufReader::new(file))
}

/// Writes a tour in the plain text result format.
///
/// # Examples
///
/// ```
/// use geo_aco::io::write_result;
/// use geo_aco::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1, 2], 1234.6).normalize();
/// let mut out = Vec::new();
/// write_result(&mut out, &tour, Some("Route")).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Route\n1235\n1,2,3,1");
/// ```
pub fn write_result<W: Write>(
    mut writer: W,
    tour: &NormalizedTour,
    header: Option<&str>,
) -> Result<()> {
    if let Some(header) = header {
        writeln!(writer, "{header}")?;
    }
    writeln!(writer, "{}", tour.length().round())?;
    let labels: Vec<String> = tour.labels().iter().map(|l| l.to_string()).collect();
    write!(writer, "{}", labels.join(","))?;
    writer.flush()?;
    Ok(())
}

/// Writes a tour as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, tour: &NormalizedTour) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, tour)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
