//! Text exchange format for point lists and scaling-vector matrices.
//!
//! - Point lists are nested bracket lists, `[[0,2],[1,0],[3,1]]`, read as JSON.
//!   Entries are JSON integers or strings holding `p` or `p/q`.
//! - Result matrices are `"<rows> <cols>"` followed by the row-major entries,
//!   whitespace separated, rationals written `p/q`.

use std::fmt::Write as _;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{AsyError, Result};
use crate::exact::{IntoExact, Rat};
use crate::extract::ScalingVectors;

/// Parse a nested point list into exact rows (no shape validation).
pub fn parse_point_list(text: &str) -> Result<Vec<Vec<Rat>>> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(rows) = value else {
        return Err(AsyError::parse("point list must be an array of rows"));
    };
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let Value::Array(entries) = row else {
                return Err(AsyError::parse(format!("row {index} is not an array")));
            };
            entries.iter().map(|e| exact_entry(index, e)).collect()
        })
        .collect()
}

fn exact_entry(index: usize, e: &Value) -> Result<Rat> {
    let not_exact = || AsyError::NotExact {
        index,
        value: e.to_string(),
    };
    match e {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.into_exact())
            } else if let Some(u) = n.as_u64() {
                Ok(u.into_exact())
            } else {
                Err(not_exact())
            }
        }
        Value::String(s) => Rat::from_str(s.trim()).map_err(|_| not_exact()),
        _ => Err(not_exact()),
    }
}

/// Render a result set as `"<rows> <cols>"` plus one line per row.
pub fn format_vectors(vectors: &ScalingVectors) -> String {
    let mut out = format!("{} {}\n", vectors.len(), vectors.dim());
    for row in vectors {
        let line: Vec<String> = row.iter().map(|x| x.to_string()).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// Inverse of `format_vectors`. Repeated rows collapse.
pub fn parse_vectors(text: &str) -> Result<ScalingVectors> {
    let mut tokens = text.split_whitespace();
    let mut header = |what: &str| -> Result<usize> {
        let tok = tokens
            .next()
            .ok_or_else(|| AsyError::parse(format!("missing {what}")))?;
        tok.parse::<usize>()
            .map_err(|_| AsyError::parse(format!("bad {what} `{tok}`")))
    };
    let rows = header("row count")?;
    let cols = header("column count")?;
    let entries = tokens
        .map(|tok| Rat::from_str(tok).map_err(|_| AsyError::parse(format!("bad entry `{tok}`"))))
        .collect::<Result<Vec<Rat>>>()?;
    if entries.len() != rows * cols {
        return Err(AsyError::parse(format!(
            "expected {} entries, found {}",
            rows * cols,
            entries.len()
        )));
    }
    let mut out = ScalingVectors::new(cols);
    if cols == 0 {
        // Zero-length rows are all equal.
        if rows > 0 {
            out.insert(Vec::new())?;
        }
        return Ok(out);
    }
    for chunk in entries.chunks(cols) {
        out.insert(chunk.to_vec())?;
    }
    Ok(out)
}
