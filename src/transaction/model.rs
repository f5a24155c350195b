use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A pending or sealed value transfer. No signature, no balance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    /// Kept as submitted (integer or float) so the block digest reproduces it.
    pub amount: Number,
}

impl Transaction {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: impl Into<Number>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;

    #[test]
    fn integer_amount_serializes_without_fraction() {
        let tx = Transaction::new("A", "B", 5u64);
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(json, r#"{"sender":"A","recipient":"B","amount":5}"#);
    }

    #[test]
    fn float_amount_survives_round_trip() {
        let tx: Transaction =
            serde_json::from_str(r#"{"sender":"A","recipient":"B","amount":2.5}"#).unwrap();
        assert!(tx.amount.is_f64());
        assert_eq!(tx.amount.as_f64(), Some(2.5));
    }
}
