use crate::record::Year;
use log::error;
use maud::Markup;
use maud::{html, PreEscaped};
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Kind {
    #[serde(rename = "line")]
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Red,
    Blue,
    Green,
}

impl Color {
    fn components(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 99, 132),
            Color::Blue => (54, 162, 235),
            Color::Green => (75, 192, 192),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.components();
        write!(f, "rgb({}, {}, {})", r, g, b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Chart.js configuration object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(rename = "type")]
    kind: Kind,
    data: ChartData,
    options: Options,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Options {
    responsive: bool,
    plugins: Plugins,
    scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Plugins {
    title: Title,
    tooltip: Tooltip,
    legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Title {
    display: bool,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tooltip {
    mode: &'static str,
    intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Legend {
    position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Scales {
    x: Axis,
    y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Axis {
    title: Title,
}

impl Axis {
    fn titled(text: &str) -> Axis {
        Axis {
            title: Title {
                display: true,
                text: text.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartData {
    labels: Vec<Year>,
    datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: Color,
    pub background_color: Color,
    pub tension: f64,
    pub fill: bool,
}

impl Chart {
    pub fn new(
        title: String,
        kind: Kind,
        labels: Vec<Year>,
        x_title: &str,
        y_title: &str,
    ) -> Chart {
        Chart {
            kind,
            data: ChartData {
                labels,
                datasets: vec![],
            },
            options: Options {
                responsive: true,
                plugins: Plugins {
                    title: Title {
                        display: true,
                        text: title,
                    },
                    tooltip: Tooltip {
                        mode: "index",
                        intersect: false,
                    },
                    legend: Legend { position: "top" },
                },
                scales: Scales {
                    x: Axis::titled(x_title),
                    y: Axis::titled(y_title),
                },
            },
        }
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.data.datasets.push(dataset)
    }

    #[cfg(test)]
    pub fn labels(&self) -> &[Year] {
        &self.data.labels
    }

    #[cfg(test)]
    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    pub fn to_json_dict(&self) -> String {
        match serde_json::to_string(&self) {
            // keep data from closing the surrounding <script>
            Ok(s) => s.replace("</", "<\\/"),
            Err(e) => {
                error!("can't serialize chart: {}", e);
                "{}".to_string()
            }
        }
    }

    /// Canvas plus the script drawing this chart on it. A chart previously
    /// drawn on the same canvas is destroyed first.
    pub fn to_html(&self, canvas_id: &str) -> Markup {
        let handle = format!("{}Instance", canvas_id);
        let script = format!(
            "if (window.{h}) {{ window.{h}.destroy(); }}\n\
             window.{h} = new Chart(document.getElementById('{id}').getContext('2d'), {json});",
            h = handle,
            id = canvas_id,
            json = self.to_json_dict(),
        );

        html! {
            canvas id=(canvas_id) {
            }
            script {
                (PreEscaped(script))
            }
        }
    }
}
