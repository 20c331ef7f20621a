use crate::charts::Color;
use crate::record::{Record, Year};
use std::collections::{BTreeSet, HashMap};

/// Varieties drawn on the chart, in legend order, with their line color.
pub const CATEGORIES: [(&str, Color); 3] = [
    ("西瓜(大粒)", Color::Red),
    ("西瓜(小粒)", Color::Blue),
    ("西瓜(無子)", Color::Green),
];

/// One category's prices aligned on the year axis, `None` being a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub values: Vec<Option<f64>>,
}

/// Records reshaped into a shared year axis plus one series per category.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    pub years: Vec<Year>,
    pub series: Vec<Series>,
}

impl Pivot {
    pub fn from_records(records: &[Record]) -> Pivot {
        let mut buckets: Vec<HashMap<&Year, f64>> = vec![HashMap::new(); CATEGORIES.len()];

        for record in records {
            let index = match CATEGORIES.iter().position(|(name, _)| *name == record.name) {
                Some(index) => index,
                None => continue,
            };
            if let (Some(year), Some(price)) = (record.year(), record.price) {
                if !year.is_blank() {
                    buckets[index].insert(year, price);
                }
            }
        }

        // every record counts for the axis, recognized or not
        let years: Vec<Year> = records
            .iter()
            .filter_map(Record::year)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let series = CATEGORIES
            .iter()
            .zip(buckets.iter())
            .map(|((label, color), bucket)| Series {
                label: label.to_string(),
                color: *color,
                values: years.iter().map(|year| bucket.get(year).cloned()).collect(),
            })
            .collect();

        Pivot { years, series }
    }

    #[cfg(test)]
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }
}
