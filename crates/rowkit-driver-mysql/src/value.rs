use mysql_async::{consts::ColumnType, prelude::ToValue};
use rowkit_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Renders a MySQL result value as text.
    ///
    /// The binary protocol sends `DATE`, `DATETIME` and `TIMESTAMP` values
    /// alike, so `column_type` decides whether the time of day is printed.
    /// Dates and times use MySQL's own `YYYY-MM-DD HH:MM:SS[.ffffff]`
    /// formatting so values read back the way the server prints them.
    pub fn text_from_sql(value: &mysql_async::Value, column_type: ColumnType) -> Option<String> {
        use mysql_async::Value::*;

        match value {
            NULL => None,
            Bytes(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            Int(v) => Some(v.to_string()),
            UInt(v) => Some(v.to_string()),
            Float(v) => Some(v.to_string()),
            Double(v) => Some(v.to_string()),
            Date(year, month, day, hour, minute, second, micros) => {
                let mut text = format!("{year:04}-{month:02}-{day:02}");
                if !matches!(
                    column_type,
                    ColumnType::MYSQL_TYPE_DATE | ColumnType::MYSQL_TYPE_NEWDATE
                ) {
                    text.push_str(&format!(" {hour:02}:{minute:02}:{second:02}"));
                    if *micros != 0 {
                        text.push_str(&format!(".{micros:06}"));
                    }
                }
                Some(text)
            }
            Time(negative, days, hours, minutes, seconds, micros) => {
                let sign = if *negative { "-" } else { "" };
                let hours = u32::from(*hours) + days * 24;
                let mut text = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
                if *micros != 0 {
                    text.push_str(&format!(".{micros:06}"));
                }
                Some(text)
            }
        }
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::I64(value) => value.to_value(),
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::String(value) => value.to_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: mysql_async::Value, column_type: ColumnType) -> Option<String> {
        Value::text_from_sql(&value, column_type)
    }

    #[test]
    fn renders_scalars() {
        assert_eq!(
            text(mysql_async::Value::Int(-3), ColumnType::MYSQL_TYPE_LONG).as_deref(),
            Some("-3")
        );
        assert_eq!(
            text(
                mysql_async::Value::Bytes(b"Ana".to_vec()),
                ColumnType::MYSQL_TYPE_VAR_STRING
            )
            .as_deref(),
            Some("Ana")
        );
        assert_eq!(text(mysql_async::Value::NULL, ColumnType::MYSQL_TYPE_NULL), None);
    }

    #[test]
    fn renders_dates() {
        let midnight = mysql_async::Value::Date(2024, 3, 9, 0, 0, 0, 0);
        assert_eq!(
            text(midnight.clone(), ColumnType::MYSQL_TYPE_DATE).as_deref(),
            Some("2024-03-09")
        );
        assert_eq!(
            text(midnight.clone(), ColumnType::MYSQL_TYPE_DATETIME).as_deref(),
            Some("2024-03-09 00:00:00")
        );
        assert_eq!(
            text(midnight, ColumnType::MYSQL_TYPE_TIMESTAMP).as_deref(),
            Some("2024-03-09 00:00:00")
        );

        let datetime = mysql_async::Value::Date(2024, 3, 9, 14, 5, 7, 120);
        assert_eq!(
            text(datetime, ColumnType::MYSQL_TYPE_DATETIME2).as_deref(),
            Some("2024-03-09 14:05:07.000120")
        );
    }

    #[test]
    fn renders_times_past_a_day() {
        let time = mysql_async::Value::Time(true, 1, 2, 3, 4, 0);
        assert_eq!(
            text(time, ColumnType::MYSQL_TYPE_TIME).as_deref(),
            Some("-26:03:04")
        );
    }
}
