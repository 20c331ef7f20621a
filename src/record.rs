use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// A year as found in the `date` (or legacy `year`) field of a record.
///
/// Integers and strings holding an integer are the same year. Anything else is
/// kept as text and sorts after every numeric year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Year {
    Numeric(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl RawYear {
    fn into_year(self) -> Option<Year> {
        match self {
            RawYear::Int(i) => Some(Year::Numeric(i)),
            RawYear::Float(f) if f.fract() == 0.0 => Some(Year::Numeric(f as i64)),
            RawYear::Float(f) => Some(Year::Text(f.to_string())),
            RawYear::Text(s) => Some(Year::from(s.as_str())),
            RawYear::Other(_) => None,
        }
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Year::Numeric(i64::from(year))
    }
}

impl From<&str> for Year {
    fn from(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(i) => Year::Numeric(i),
            Err(_) => Year::Text(s.to_string()),
        }
    }
}

impl Year {
    /// Empty text and zero do not count as a year when bucketing prices.
    pub fn is_blank(&self) -> bool {
        match self {
            Year::Numeric(i) => *i == 0,
            Year::Text(s) => s.trim().is_empty(),
        }
    }
}

impl Serialize for Year {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Year::Numeric(i) => serializer.serialize_i64(*i),
            Year::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Year::Numeric(i) => write!(f, "{}", i),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One price point as returned by the API.
///
/// Fields of an unexpected type never fail the whole response: a bad year or
/// price is read as missing, a non-string name as its JSON text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_year")]
    date: Option<Year>,
    #[serde(default, deserialize_with = "lenient_year")]
    year: Option<Year>, // legacy name of `date`
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<Year>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawYear::deserialize(deserializer)?.into_year())
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl Record {
    #[cfg(test)]
    pub fn new<Y: Into<Year>>(name: &str, year: Y, price: Option<f64>) -> Record {
        Record {
            name: name.to_string(),
            date: Some(year.into()),
            year: None,
            price,
        }
    }

    /// `date` if present, else the legacy `year` field.
    pub fn year(&self) -> Option<&Year> {
        self.date.as_ref().or_else(|| self.year.as_ref())
    }
}
