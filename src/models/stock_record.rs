use serde::{Deserialize, Serialize};

/// One watchlist row's extracted metrics
///
/// # Null Convention
/// **IMPORTANT**: `None` means the feed showed no data for that cell
/// (the `-` placeholder or unparsable text). It is NOT zero — a stock
/// with no foreign activity data is different from one with exactly
/// zero net flow, and the rule evaluator treats them differently
/// (a null operand fails every predicate).
///
/// Every present value is a finite `f64`; the normalizer never stores
/// NaN or infinity.
///
/// A record with an empty `symbol` is invalid by convention. `parse_row`
/// still returns it (totality), but `parse_all` drops it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockRecord {
    /// Instrument identifier (e.g. "BBCA"); empty means the row is invalid
    pub symbol: String,

    /// Last traded price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Today's net foreign buy/sell value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_foreign_flow: Option<f64>,

    /// 10-day moving average of net foreign flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_foreign_flow_ma10: Option<f64>,

    /// 20-day moving average of net foreign flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_foreign_flow_ma20: Option<f64>,

    /// Net foreign flow accumulated over one week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_week_foreign_flow: Option<f64>,

    /// Net foreign flow accumulated over one month
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_month_foreign_flow: Option<f64>,

    /// Consecutive days of positive foreign net buying
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_buy_streak: Option<f64>,

    /// Accumulation/distribution index (positive = institutional buying)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accum_dist_index: Option<f64>,

    /// "Bandar value" buy-pressure metric (opaque signed indicator)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_value: Option<f64>,

    /// 10-day moving average of flow value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_value_ma10: Option<f64>,

    /// 20-day moving average of flow value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_value_ma20: Option<f64>,
}

/// Logical numeric field of a [`StockRecord`]
///
/// Rule predicates and the header dictionary address metrics through
/// this enum rather than struct fields, which keeps rule sets pure data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Price,
    NetForeignFlow,
    NetForeignFlowMa10,
    NetForeignFlowMa20,
    OneWeekForeignFlow,
    OneMonthForeignFlow,
    ForeignBuyStreak,
    AccumDistIndex,
    FlowValue,
    FlowValueMa10,
    FlowValueMa20,
}

impl StockRecord {
    /// Create an empty (invalid) record; the parser fills it in cell by cell
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a metric by logical field
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Price => self.price,
            Field::NetForeignFlow => self.net_foreign_flow,
            Field::NetForeignFlowMa10 => self.net_foreign_flow_ma10,
            Field::NetForeignFlowMa20 => self.net_foreign_flow_ma20,
            Field::OneWeekForeignFlow => self.one_week_foreign_flow,
            Field::OneMonthForeignFlow => self.one_month_foreign_flow,
            Field::ForeignBuyStreak => self.foreign_buy_streak,
            Field::AccumDistIndex => self.accum_dist_index,
            Field::FlowValue => self.flow_value,
            Field::FlowValueMa10 => self.flow_value_ma10,
            Field::FlowValueMa20 => self.flow_value_ma20,
        }
    }

    /// Write a metric by logical field
    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::Price => self.price = value,
            Field::NetForeignFlow => self.net_foreign_flow = value,
            Field::NetForeignFlowMa10 => self.net_foreign_flow_ma10 = value,
            Field::NetForeignFlowMa20 => self.net_foreign_flow_ma20 = value,
            Field::OneWeekForeignFlow => self.one_week_foreign_flow = value,
            Field::OneMonthForeignFlow => self.one_month_foreign_flow = value,
            Field::ForeignBuyStreak => self.foreign_buy_streak = value,
            Field::AccumDistIndex => self.accum_dist_index = value,
            Field::FlowValue => self.flow_value = value,
            Field::FlowValueMa10 => self.flow_value_ma10 = value,
            Field::FlowValueMa20 => self.flow_value_ma20 = value,
        }
    }

    /// A record is valid once it carries a non-empty symbol
    pub fn is_valid(&self) -> bool {
        !self.symbol.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut record = StockRecord::new();
        record.set(Field::NetForeignFlow, Some(177.65e9));
        record.set(Field::ForeignBuyStreak, Some(2.0));
        record.set(Field::FlowValue, None);

        assert_eq!(record.get(Field::NetForeignFlow), Some(177.65e9));
        assert_eq!(record.get(Field::ForeignBuyStreak), Some(2.0));
        assert_eq!(record.get(Field::FlowValue), None);
        assert_eq!(record.get(Field::Price), None);
    }

    #[test]
    fn test_validity_requires_symbol() {
        let mut record = StockRecord::new();
        assert!(!record.is_valid());
        record.symbol = "BBCA".to_string();
        assert!(record.is_valid());
    }

    #[test]
    fn test_serialize_skips_absent_metrics() {
        let record = StockRecord {
            symbol: "TLKM".to_string(),
            price: Some(3600.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""symbol":"TLKM""#));
        assert!(json.contains(r#""price":3600.0"#));
        assert!(!json.contains("net_foreign_flow"));
    }
}
