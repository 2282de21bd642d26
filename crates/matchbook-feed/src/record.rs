//! Comma-delimited order records.
//!
//! One record per line, six fields in fixed order:
//!
//! ```text
//! id,party,price,quantity,timestamp,side
//! 70000001,Mal,73.21,100,100001,BUY
//! ```
//!
//! Parsing is strict: exactly six fields, numeric fields must parse
//! cleanly, the side token must be exactly `BUY` or `SELL`, and the party
//! must be non-empty.

use matchbook_types::{MatchbookError, Order, OrderId, Party, Result, Side};
use rust_decimal::Decimal;

fn malformed(line: u64, reason: impl Into<String>) -> MatchbookError {
    MatchbookError::MalformedRecord {
        line,
        reason: reason.into(),
    }
}

/// Parse one record. `line` is the 1-based line number, used only for
/// error reporting.
pub fn parse_record(line: u64, text: &str) -> Result<Order> {
    let fields: Vec<&str> = text.split(',').collect();
    let [id, party, price, quantity, timestamp, side] = fields.as_slice() else {
        return Err(malformed(
            line,
            format!("expected 6 fields, got {}", fields.len()),
        ));
    };

    let id = id
        .parse::<u64>()
        .map_err(|e| malformed(line, format!("bad id `{id}`: {e}")))?;
    if party.is_empty() {
        return Err(malformed(line, "empty party"));
    }
    let price = price
        .parse::<Decimal>()
        .map_err(|e| malformed(line, format!("bad price `{price}`: {e}")))?;
    let quantity = quantity
        .parse::<i64>()
        .map_err(|e| malformed(line, format!("bad quantity `{quantity}`: {e}")))?;
    let timestamp = timestamp
        .parse::<u64>()
        .map_err(|e| malformed(line, format!("bad timestamp `{timestamp}`: {e}")))?;
    let side = side
        .parse::<Side>()
        .map_err(|e| malformed(line, e.to_string()))?;

    Ok(Order {
        id: OrderId(id),
        side,
        party: Party::new(*party),
        price,
        quantity,
        timestamp,
    })
}
