//! Plain-text instance reader and writer.
//!
//! The first non-blank line holds `n`, the second `p`, followed by `n`
//! lines of `n` whitespace-separated distances.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use super::Instance;

/// Reads an instance file from disk.
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<Instance> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("error reading instance file {}", path.display()))?;
    parse_instance(&text).with_context(|| format!("malformed instance file {}", path.display()))
}

/// Parses an instance from its text representation.
///
/// # Examples
///
/// ```
/// use u_pmedian::instance::io::parse_instance;
///
/// let inst = parse_instance("2\n1\n0 4\n4 0\n").unwrap();
/// assert_eq!(inst.n(), 2);
/// assert_eq!(inst.distance(1, 0), 4.0);
/// ```
pub fn parse_instance(text: &str) -> Result<Instance> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let n = parse_header(lines.next(), "point count n")?;
    let p = parse_header(lines.next(), "median count p")?;

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| anyhow!("missing distance row {i} (expected {n} rows)"))?;
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| anyhow!("line {line_no}: invalid distance {tok:?}"))
            })
            .collect::<Result<Vec<f64>>>()?;
        if row.len() != n {
            bail!("line {line_no}: expected {n} distances, found {}", row.len());
        }
        rows.push(row);
    }

    Instance::new(p, rows)
}

fn parse_header(line: Option<(usize, &str)>, what: &str) -> Result<usize> {
    let (line_no, line) = line.ok_or_else(|| anyhow!("missing {what}"))?;
    line.parse::<usize>()
        .map_err(|_| anyhow!("line {line_no}: invalid {what} {line:?}"))
}

/// Writes an instance in the text format accepted by [`parse_instance`].
pub fn write_instance<W: Write>(instance: &Instance, mut out: W) -> Result<()> {
    writeln!(out, "{}", instance.n())?;
    writeln!(out, "{}", instance.p())?;
    for i in 0..instance.n() {
        let row: Vec<String> = instance.row(i).iter().map(|d| d.to_string()).collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let text = "3\n2\n0 1 2\n1 0 3\n2 3 0\n";
        let inst = parse_instance(text).unwrap();
        assert_eq!(inst.n(), 3);
        assert_eq!(inst.p(), 2);
        assert_eq!(inst.distance(1, 2), 3.0);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_reals() {
        let text = "\n2\n\n1\n0 1.5\n\n2.25 0\n";
        let inst = parse_instance(text).unwrap();
        assert_eq!(inst.distance(0, 1), 1.5);
        assert_eq!(inst.distance(1, 0), 2.25);
    }

    #[test]
    fn test_parse_missing_row() {
        let err = parse_instance("2\n1\n0 1\n").unwrap_err();
        assert!(err.to_string().contains("missing distance row 1"), "got: {err}");
    }

    #[test]
    fn test_parse_bad_token() {
        let err = parse_instance("2\n1\n0 x\n1 0\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "got: {err}");
    }

    #[test]
    fn test_parse_short_row() {
        let err = parse_instance("2\n1\n0\n1 0\n").unwrap_err();
        assert!(err.to_string().contains("expected 2 distances"), "got: {err}");
    }

    #[test]
    fn test_parse_bad_header() {
        assert!(parse_instance("").is_err());
        assert!(parse_instance("two\n1\n").is_err());
        assert!(parse_instance("2\n-1\n0 1\n1 0\n").is_err());
    }

    #[test]
    fn test_parse_negative_distance_rejected() {
        assert!(parse_instance("2\n1\n0 -3\n1 0\n").is_err());
    }

    #[test]
    fn test_write_then_parse() {
        let inst = Instance::new(1, vec![vec![0.0, 2.5], vec![7.0, 0.0]]).unwrap();
        let mut buf = Vec::new();
        write_instance(&inst, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "2\n1\n0 2.5\n7 0\n");
        assert_eq!(parse_instance(&text).unwrap(), inst);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_instance("/nonexistent/instance.txt").unwrap_err();
        assert!(err.to_string().contains("error reading instance file"));
    }
}
