use crate::record::Record;
use maud::{html, Markup};

pub const TABLE_BODY_ID: &str = "data-table-body";

const MISSING: &str = "-";

/// One row of the data table: year, price, name.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub year: String,
    pub price: String,
    pub name: String,
}

impl From<&Record> for TableRow {
    fn from(record: &Record) -> Self {
        TableRow {
            year: record
                .year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            price: record
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            name: record.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

impl TableBody {
    /// Replace every row with one per record, in input order.
    pub fn populate(&mut self, records: &[Record]) {
        self.rows.clear();
        self.rows.extend(records.iter().map(TableRow::from));
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn to_html(&self) -> Markup {
        html! {
            table {
                thead {
                    tr { th { "年份" } th { "價格" } th { "種類" } }
                }
                tbody id=(TABLE_BODY_ID) {
                    @for row in self.rows.iter() {
                        tr {
                            td { (row.year) }
                            td { (row.price) }
                            td { (row.name) }
                        }
                    }
                }
            }
        }
    }
}
