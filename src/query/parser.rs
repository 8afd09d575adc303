//! Command parser
//!
//! Line-oriented text syntax for `Command`.
//!
//! ## Grammar
//! ```text
//! insert <ts> <tag>=<value>...     skipped if <ts> exists
//! upsert <ts> <tag>=<value>...     insert, overwriting
//! update <ts> <tag>=<value>...     skipped if <ts> is absent
//! erase  <ts> [<tag>...]
//! get    <ts> [<tag>]
//! raw    <ts>
//! range  <start> <end> [asc|desc]
//! tags   <ts>
//! len    [<ts>]
//! ```
//!
//! ## Values
//! - `"..."` → text (quotes may enclose spaces)
//! - parses as `i64` → integer
//! - parses as `f64` → decimal (`nan` is rejected)
//! - anything else → text
//!
//! Blank lines and lines starting with `#` parse to `None`.

use crate::cell::ValueCell;
use crate::error::{CellStoreError, Result};

use super::Command;

/// Parse one line into a command
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let Some((keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "insert" | "upsert" => {
            let (timestamp, rest) = split_timestamp(keyword, args)?;
            Command::Insert {
                timestamp,
                cells: parse_cells(rest)?,
                update_if_exist: keyword.eq_ignore_ascii_case("upsert"),
            }
        }
        "update" => {
            let (timestamp, rest) = split_timestamp(keyword, args)?;
            Command::Update {
                timestamp,
                cells: parse_cells(rest)?,
            }
        }
        "erase" => {
            let (timestamp, rest) = split_timestamp(keyword, args)?;
            if rest.is_empty() {
                Command::Erase { timestamp }
            } else {
                Command::EraseTags {
                    timestamp,
                    tags: rest.to_vec(),
                }
            }
        }
        "get" => {
            let (timestamp, rest) = split_timestamp(keyword, args)?;
            expect_at_most(keyword, rest, 1)?;
            Command::Get {
                timestamp,
                tag: rest.first().cloned(),
            }
        }
        "raw" => {
            let (timestamp, rest) = split_timestamp(keyword, args)?;
            expect_at_most(keyword, rest, 0)?;
            Command::Raw { timestamp }
        }
        "range" => {
            let (start, rest) = split_timestamp(keyword, args)?;
            let (end, rest) = split_timestamp(keyword, rest)?;
            expect_at_most(keyword, rest, 1)?;
            let ascending = match rest.first().map(|order| order.to_ascii_lowercase()) {
                None => true,
                Some(order) if order == "asc" => true,
                Some(order) if order == "desc" => false,
                Some(order) => {
                    return Err(CellStoreError::InvalidCommand(format!(
                        "range: expected 'asc' or 'desc', got '{}'",
                        order
                    )))
                }
            };
            Command::Range { start, end, ascending }
        }
        "tags" => {
            let (timestamp, rest) = split_timestamp(keyword, args)?;
            expect_at_most(keyword, rest, 0)?;
            Command::Tags { timestamp }
        }
        "len" => {
            expect_at_most(keyword, args, 1)?;
            let timestamp = match args.first() {
                Some(raw) => Some(parse_timestamp(keyword, raw)?),
                None => None,
            };
            Command::Len { timestamp }
        }
        other => {
            return Err(CellStoreError::InvalidCommand(format!(
                "unknown command '{}'",
                other
            )))
        }
    };

    Ok(Some(command))
}

/// Parse a `tag=value` pair into a cell
pub fn parse_cell(pair: &str) -> Result<ValueCell> {
    let (tag, literal) = pair.split_once('=').ok_or_else(|| {
        CellStoreError::InvalidCommand(format!("expected <tag>=<value>, got '{}'", pair))
    })?;

    if tag.is_empty() {
        return Err(CellStoreError::InvalidCommand(format!(
            "empty tag in '{}'",
            pair
        )));
    }

    if let Some(text) = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return Ok(ValueCell::text(tag, text));
    }
    if let Ok(integer) = literal.parse::<i64>() {
        return Ok(ValueCell::integer(tag, integer));
    }
    if let Ok(decimal) = literal.parse::<f64>() {
        return ValueCell::decimal(tag, decimal);
    }
    Ok(ValueCell::text(tag, literal))
}

// =============================================================================
// Private Helpers
// =============================================================================

/// Split on whitespace outside double quotes; quotes are kept in the token
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(CellStoreError::InvalidCommand(format!(
            "unterminated quote in '{}'",
            line
        )));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_timestamp(keyword: &str, raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| {
        CellStoreError::InvalidCommand(format!("{}: invalid timestamp '{}'", keyword, raw))
    })
}

fn split_timestamp<'t>(keyword: &str, args: &'t [String]) -> Result<(i64, &'t [String])> {
    let (raw, rest) = args.split_first().ok_or_else(|| {
        CellStoreError::InvalidCommand(format!("{}: missing timestamp", keyword))
    })?;
    Ok((parse_timestamp(keyword, raw)?, rest))
}

fn expect_at_most(keyword: &str, args: &[String], max: usize) -> Result<()> {
    if args.len() > max {
        return Err(CellStoreError::InvalidCommand(format!(
            "{}: unexpected argument '{}'",
            keyword, args[max]
        )));
    }
    Ok(())
}

fn parse_cells(pairs: &[String]) -> Result<Vec<ValueCell>> {
    pairs.iter().map(|pair| parse_cell(pair)).collect()
}
