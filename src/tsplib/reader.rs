//! Line-oriented TSPLIB parser.

use std::fs;
use std::path::Path;

use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::models::{Instance, Node};

/// A parsed TSPLIB file.
#[derive(Debug, Clone)]
pub struct TsplibDocument {
    /// Nodes in file order, named after the `NAME` header.
    pub instance: Instance,
    /// `EDGE_WEIGHT_TYPE` header value, if present.
    pub edge_weight_type: Option<String>,
}

impl TsplibDocument {
    /// Metric implied by `EDGE_WEIGHT_TYPE`: `EUC_2D` / `CEIL_2D` → Euclidean,
    /// `MAX_2D` → Chebyshev. `None` for other or missing types.
    pub fn metric(&self) -> Option<Metric> {
        match self.edge_weight_type.as_deref() {
            Some("EUC_2D") | Some("CEIL_2D") => Some(Metric::Euclidean),
            Some("MAX_2D") => Some(Metric::Chebyshev),
            _ => None,
        }
    }
}

/// Parses TSPLIB text.
///
/// Header lines before `NODE_COORD_SECTION` are `KEY : value` pairs; only
/// `NAME` and `EDGE_WEIGHT_TYPE` are kept. Each record after the section
/// marker is `id x y` (extra columns ignored) until `EOF` or end of input.
/// Blank lines are skipped. A file without a coordinate section yields an
/// empty instance.
///
/// # Examples
///
/// ```
/// use u_tsp::tsplib::parse;
///
/// let doc = parse("NAME : tiny\nTYPE : TSP\nEDGE_WEIGHT_TYPE : EUC_2D\n\
///                  NODE_COORD_SECTION\n1 0 0\n2 3 4\nEOF\n").unwrap();
/// assert_eq!(doc.instance.name(), "tiny");
/// assert_eq!(doc.instance.len(), 2);
/// assert_eq!(doc.instance.nodes()[1].x(), 3.0);
/// ```
pub fn parse(text: &str) -> Result<TsplibDocument> {
    let mut name = String::new();
    let mut edge_weight_type = None;
    let mut nodes = Vec::new();
    let mut in_coords = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("EOF") {
            break;
        }
        if line.starts_with("NODE_COORD_SECTION") {
            in_coords = true;
            continue;
        }

        if in_coords {
            nodes.push(parse_record(line, line_no)?);
        } else if let Some((key, value)) = line.split_once(':') {
            match key.trim() {
                "NAME" => name = value.trim().to_owned(),
                "EDGE_WEIGHT_TYPE" => edge_weight_type = Some(value.trim().to_owned()),
                _ => {}
            }
        }
    }

    let instance = Instance::new(name, nodes)?;
    Ok(TsplibDocument {
        instance,
        edge_weight_type,
    })
}

/// Reads and parses a TSPLIB file.
pub fn read_file(path: impl AsRef<Path>) -> Result<TsplibDocument> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

fn parse_record(line: &str, line_no: usize) -> Result<Node> {
    let mut fields = line.split_whitespace();
    let (Some(id), Some(x), Some(y)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::parse(line_no, format!("expected `id x y`, got `{line}`")));
    };
    let id = id
        .parse::<usize>()
        .map_err(|e| Error::parse(line_no, format!("invalid node id `{id}`: {e}")))?;
    let x = x
        .parse::<f64>()
        .map_err(|e| Error::parse(line_no, format!("invalid x coordinate `{x}`: {e}")))?;
    let y = y
        .parse::<f64>()
        .map_err(|e| Error::parse(line_no, format!("invalid y coordinate `{y}`: {e}")))?;
    Ok(Node::new(id, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "NAME: sample5
COMMENT : five cities
TYPE : TSP
DIMENSION : 5
EDGE_WEIGHT_TYPE : MAX_2D
NODE_COORD_SECTION
1 0.0 0.0
2 1.5e1 2
3 4 4

4 -3 7.25
5 9 1
EOF
6 100 100
";

    #[test]
    fn test_parse_sample() {
        let doc = parse(SAMPLE).expect("well-formed");
        assert_eq!(doc.instance.name(), "sample5");
        assert_eq!(doc.instance.len(), 5);
        assert_eq!(doc.instance.nodes()[1].x(), 15.0);
        assert_eq!(doc.instance.nodes()[3].y(), 7.25);
        assert_eq!(doc.edge_weight_type.as_deref(), Some("MAX_2D"));
        assert_eq!(doc.metric(), Some(Metric::Chebyshev));
    }

    #[test]
    fn test_stops_at_eof() {
        let doc = parse(SAMPLE).expect("well-formed");
        assert!(doc.instance.index_of(6).is_err());
    }

    #[test]
    fn test_missing_section_is_empty() {
        let doc = parse("NAME : nothing\nTYPE : TSP\n").expect("well-formed");
        assert!(doc.instance.is_empty());
        assert_eq!(doc.metric(), None);
    }

    #[test]
    fn test_short_record() {
        let err = parse("NODE_COORD_SECTION\n1 0 0\n2 5\n").expect_err("malformed");
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_number() {
        let err = parse("NODE_COORD_SECTION\nx 0 0\n").expect_err("malformed");
        assert!(matches!(err, Error::Parse { line: 2, .. }));
        let err = parse("NODE_COORD_SECTION\n1 0 abc\n").expect_err("malformed");
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_id() {
        let err = parse("NODE_COORD_SECTION\n1 0 0\n1 1 1\n").expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateNode(1)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/definitely/not/here.tsp").expect_err("missing");
        assert!(matches!(err, Error::Io(_)));
    }
}
