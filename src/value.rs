// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! 松散类型的属性输入。
//!
//! `Expires`、`Max-Age`、`Path` 的取值既可能来自强类型的调用方，也可能来自配置文件里
//! 任意类型的 TOML 值。两种来源都先转换为 [`AttributeValue`]，再由 `Cookie` 的 setter
//! 统一做类型检查，类型不符时在错误里带上实际收到的类型名。

use chrono::{DateTime, NaiveDateTime, Utc};

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    /// 超出 chrono 可表示范围的日期时间
    DateOutOfRange,
    Array,
    Table,
}

impl AttributeValue {
    /// 用于错误信息的类型名
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Text(_) => "String",
            AttributeValue::Integer(_) => "Number",
            AttributeValue::Float(_) => "Float",
            AttributeValue::Boolean(_) => "Boolean",
            AttributeValue::Date(_) | AttributeValue::DateOutOfRange => "Date",
            AttributeValue::Array => "Array",
            AttributeValue::Table => "Table",
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<&String> for AttributeValue {
    fn from(s: &String) -> Self {
        AttributeValue::Text(s.clone())
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        AttributeValue::Integer(n as i64)
    }
}

impl From<u32> for AttributeValue {
    fn from(n: u32) -> Self {
        AttributeValue::Integer(n as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Float(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(date: DateTime<Utc>) -> Self {
        AttributeValue::Date(date)
    }
}

impl From<SystemTime> for AttributeValue {
    fn from(time: SystemTime) -> Self {
        match system_time_to_utc(time) {
            Some(date) => AttributeValue::Date(date),
            None => AttributeValue::DateOutOfRange,
        }
    }
}

// chrono 自带的 From<SystemTime> 在越界时会 panic，这里逐段换算并在越界时返回 None。
fn system_time_to_utc(time: SystemTime) -> Option<DateTime<Utc>> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => DateTime::from_timestamp(i64::try_from(d.as_secs()).ok()?, d.subsec_nanos()),
        Err(e) => {
            let d = e.duration();
            let secs = i64::try_from(d.as_secs()).ok()?;
            if d.subsec_nanos() == 0 {
                DateTime::from_timestamp(-secs, 0)
            } else {
                DateTime::from_timestamp(-secs - 1, 1_000_000_000 - d.subsec_nanos())
            }
        }
    }
}

impl From<toml::Value> for AttributeValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => AttributeValue::Text(s),
            toml::Value::Integer(n) => AttributeValue::Integer(n),
            toml::Value::Float(n) => AttributeValue::Float(n),
            toml::Value::Boolean(b) => AttributeValue::Boolean(b),
            toml::Value::Datetime(dt) => from_toml_datetime(&dt.to_string()),
            toml::Value::Array(_) => AttributeValue::Array,
            toml::Value::Table(_) => AttributeValue::Table,
        }
    }
}

impl From<&toml::Value> for AttributeValue {
    fn from(value: &toml::Value) -> Self {
        AttributeValue::from(value.clone())
    }
}

// 带偏移的时间按偏移换算；不带偏移的本地时间按 UTC 理解；只有日期或只有时间的值保留原文。
fn from_toml_datetime(s: &str) -> AttributeValue {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return AttributeValue::Date(date.with_timezone(&Utc));
    }
    match s.parse::<NaiveDateTime>() {
        Ok(naive) => AttributeValue::Date(naive.and_utc()),
        Err(_) => AttributeValue::Text(s.to_string()),
    }
}
