//! Point ingestion from WKT and CSV text.
use std::fs;
use std::path::Path;

use wkt::types::Coord;
use wkt::{Geometry, Wkt};

use crate::{Error, Point, Result};

/// Read points from a file: `.wkt` files as WKT, anything else as CSV.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let is_wkt = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("wkt"));
    let points = if is_wkt {
        parse_wkt_points(&contents)?
    } else {
        parse_csv_points(&contents)?
    };
    log::debug!("Read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Parse the points of every `POINT`, `MULTIPOINT` and `GEOMETRYCOLLECTION`
/// in `text`.
///
/// A geometry starts on a line beginning with its keyword and may continue
/// over the following lines. Empty points are dropped and other geometry
/// kinds are skipped.
pub fn parse_wkt_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for record in wkt_records(text) {
        let parsed: Wkt<f64> = Wkt::from_str(&record)
            .map_err(|e| Error::Parse(format!("{}: {}", e, record)))?;
        for geometry in parsed.items {
            collect_points(geometry, &mut points);
        }
    }
    Ok(points)
}

fn wkt_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current = String::new();
    for line in text.lines().map(str::trim) {
        let starts_geometry = line.chars().next().map_or(false, char::is_alphabetic);
        if line.is_empty() || starts_geometry {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
        } else {
            current.push(' ');
        }
        current.push_str(line);
    }
    if !current.trim().is_empty() {
        records.push(current);
    }
    records
}

fn collect_points(geometry: Geometry<f64>, points: &mut Vec<Point>) {
    match geometry {
        Geometry::Point(point) => points.extend(point.0.map(to_point)),
        Geometry::MultiPoint(multi) => {
            points.extend(multi.0.into_iter().filter_map(|p| p.0).map(to_point))
        }
        Geometry::GeometryCollection(collection) => {
            for inner in collection.0 {
                collect_points(inner, points);
            }
        }
        _ => log::debug!("Skipping non-point WKT geometry"),
    }
}

fn to_point(coord: Coord<f64>) -> Point {
    Point::new(coord.x, coord.y)
}

/// Parse one `x,y` pair per line. Blank lines are ignored, and so is the
/// first line when it is not numeric (a header).
pub fn parse_csv_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    let mut seen_line = false;
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let is_first = !seen_line;
        seen_line = true;
        match parse_csv_line(line) {
            Some(point) => points.push(point),
            None if is_first => log::debug!("Skipping CSV header {:?}", line),
            None => {
                return Err(Error::Parse(format!(
                    "line {}: expected x,y but found {:?}",
                    number + 1,
                    line
                )))
            }
        }
    }
    Ok(points)
}

fn parse_csv_line(line: &str) -> Option<Point> {
    let mut fields = line.split(',').map(str::trim);
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wkt_points_one_per_line() {
        let text = "POINT (1 2)\nPOINT(3.5 -4)\nMULTIPOINT ((5 6), (7 8))\n";
        let points = parse_wkt_points(text).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(1., 2.),
                Point::new(3.5, -4.),
                Point::new(5., 6.),
                Point::new(7., 8.)
            ]
        );
    }

    #[test]
    fn test_wkt_geometry_spanning_lines() {
        let text = "MULTIPOINT (\n  (0 0),\n  (1 1)\n)\n\nPOINT (2 2)";
        let points = parse_wkt_points(text).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point::new(2., 2.));
    }

    #[test]
    fn test_wkt_skips_other_geometries() {
        let text = "LINESTRING (0 0, 1 1)\nPOINT (4 4)";
        assert_eq!(parse_wkt_points(text).unwrap(), vec![Point::new(4., 4.)]);
    }

    #[test]
    fn test_wkt_invalid() {
        assert!(matches!(
            parse_wkt_points("POINT (1 nope)"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_csv_points() {
        let text = "x,y\n1,2\n\n 3.5 , -4 \n";
        assert_eq!(
            parse_csv_points(text).unwrap(),
            vec![Point::new(1., 2.), Point::new(3.5, -4.)]
        );
    }

    #[test]
    fn test_csv_without_header() {
        assert_eq!(
            parse_csv_points("0,0\n1e5,6e6").unwrap(),
            vec![Point::new(0., 0.), Point::new(1e5, 6e6)]
        );
    }

    #[test]
    fn test_csv_malformed_line() {
        let result = parse_csv_points("1,2\n3\n");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_points("/nonexistent/points.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
