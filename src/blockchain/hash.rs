//! Canonical block hashing.
//!
//! A block is encoded to a single canonical JSON text before hashing:
//! object keys sorted at every level, `", "` / `": "` separators, ASCII-only
//! string escapes and shortest round-trip floats. For integers that fit in
//! `u64`/`i64` and for finite floats, the output is byte-for-byte what
//! `json.dumps(obj, sort_keys=True)` emits, so digests computed by other nodes
//! following the same convention line up with ours.
//!
//! Outside that domain the parsed value is already a float: `-0` encodes as
//! `-0.0`, and integers beyond 64 bits lose precision (`1.8446744073709552e+19`).

use serde_json::{Number, Value};
use sha2::{Digest, Sha256};

use super::Block;

/// SHA-256 of the block's canonical encoding, as 64 lowercase hex chars.
pub fn hash(block: &Block) -> String {
    let value = serde_json::to_value(block).expect("block is always representable as JSON");
    hash_value(&value)
}

/// Same as [`hash`] but over an arbitrary JSON value.
pub fn hash_value(value: &Value) -> String {
    sha256_hex(canonical_json(value).as_bytes())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Encode `value` canonically. Key order in the input never affects the output.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(out, key);
                out.push_str(": ");
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

fn write_number(out: &mut String, n: &Number) {
    if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
    } else if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
    } else if let Some(f) = n.as_f64() {
        out.push_str(&format_float(f));
    }
}

/// Shortest round-trip representation; positional for decimal exponents in
/// `-4..16`, otherwise `d.ddde+XX`. Integral values keep a trailing `.0`.
fn format_float(f: f64) -> String {
    // `{:e}` yields the shortest digits that round-trip, e.g. "1.7000000005e9".
    let sci = format!("{:e}", f);
    let (sign, unsigned) = match sci.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", sci.as_str()),
    };
    let (mantissa, exp) = unsigned.split_once('e').unwrap_or((unsigned, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
            } else {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            }
        } else {
            format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let exp_sign = if exp < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{}e{}{:02}", lead, exp_sign, exp.abs())
        } else {
            format!("{}.{}e{}{:02}", lead, rest, exp_sign, exp.abs())
        }
    };
    format!("{sign}{body}")
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::{canonical_json, format_float, hash, hash_value};
    use crate::blockchain::{Block, PreviousHash};
    use crate::transaction::Transaction;
    use serde_json::{Value, json};

    #[test]
    fn keys_are_sorted_recursively() {
        let v = json!({"b": 1, "a": [{"z": true, "y": null}]});
        assert_eq!(
            canonical_json(&v),
            r#"{"a": [{"y": null, "z": true}], "b": 1}"#
        );
    }

    #[test]
    fn field_order_does_not_change_digest() {
        let one: Value =
            serde_json::from_str(r#"{"proof": 7, "index": 3, "tx": {"b": "x", "a": 1}}"#).unwrap();
        let two: Value =
            serde_json::from_str(r#"{"tx": {"a": 1, "b": "x"}, "index": 3, "proof": 7}"#).unwrap();
        assert_eq!(hash_value(&one), hash_value(&two));
    }

    #[test]
    fn strings_are_escaped_ascii_only() {
        let v = json!("Zoë \"q\" \\ \n \u{1F600} \u{7f}");
        assert_eq!(
            canonical_json(&v),
            r#""Zo\u00eb \"q\" \\ \n \ud83d\ude00 \u007f""#
        );
    }

    #[test]
    fn floats_match_shortest_repr() {
        assert_eq!(format_float(1700000000.0), "1700000000.0");
        assert_eq!(format_float(1700000000.5), "1700000000.5");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e17), "1.5e+17");
        assert_eq!(format_float(123456789012345.6), "123456789012345.6");
    }

    #[test]
    fn numbers_outside_integer_range_encode_as_floats() {
        let neg_zero: Value = serde_json::from_str("-0").unwrap();
        assert_eq!(canonical_json(&neg_zero), "-0.0");

        let huge: Value = serde_json::from_str("18446744073709551616").unwrap();
        assert_eq!(canonical_json(&huge), "1.8446744073709552e+19");

        let max: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(canonical_json(&max), "18446744073709551615");
        let min: Value = serde_json::from_str("-9223372036854775808").unwrap();
        assert_eq!(canonical_json(&min), "-9223372036854775808");
    }

    #[test]
    fn genesis_digest_matches_reference_vector() {
        let genesis = Block {
            index: 1,
            timestamp: 1700000000.5,
            transactions: vec![],
            proof: 100,
            previous_hash: PreviousHash::Sentinel(1),
        };
        let value = serde_json::to_value(&genesis).unwrap();
        assert_eq!(
            canonical_json(&value),
            r#"{"index": 1, "previous_hash": 1, "proof": 100, "timestamp": 1700000000.5, "transactions": []}"#
        );
        assert_eq!(
            hash(&genesis),
            "34e9b643e6d862c44dc8ecb6771d9988000143a71c54d8939eec051706e03b13"
        );
    }

    #[test]
    fn block_with_transactions_matches_reference_vector() {
        let amount = serde_json::Number::from_f64(2.5).unwrap();
        let block = Block {
            index: 2,
            timestamp: 1700000123.25,
            transactions: vec![
                Transaction::new("A", "B", 5u64),
                Transaction::new("B", "Zoë", amount),
            ],
            proof: 35293,
            previous_hash: PreviousHash::Digest(
                "34e9b643e6d862c44dc8ecb6771d9988000143a71c54d8939eec051706e03b13".into(),
            ),
        };
        assert_eq!(
            hash(&block),
            "97a1bbc066bd82694a4cf72604f128297819b7da98467d21ea0e9fa7fb95efe6"
        );
    }

    #[test]
    fn any_field_change_changes_digest() {
        let mut block = Block {
            index: 2,
            timestamp: 1.0,
            transactions: vec![Transaction::new("A", "B", 1u64)],
            proof: 1,
            previous_hash: PreviousHash::Digest("ab".into()),
        };
        let before = hash(&block);
        block.transactions[0].amount = 2u64.into();
        assert_ne!(before, hash(&block));
        assert_eq!(hash(&block).len(), 64);
    }
}
