use crate::charts::{Chart, Dataset, Kind};
use crate::pivot::Pivot;
use crate::record::Record;
use log::debug;
use maud::Markup;

pub const CANVAS_ID: &str = "priceChart";

const TITLE: &str = "2004-2024年西瓜價格趨勢圖";
const X_AXIS: &str = "年份";
const Y_AXIS: &str = "價格 (元/公斤)";
const TENSION: f64 = 0.1;

/// Something able to draw a chart configuration on a canvas.
pub trait ChartBackend {
    type Instance;

    fn create(&mut self, canvas_id: &str, chart: Chart) -> Self::Instance;

    /// Release everything held by `instance`.
    fn destroy(&mut self, instance: Self::Instance);
}

/// Owns the one live chart, replacing it on every render.
pub struct ChartRenderer<B: ChartBackend> {
    backend: B,
    current: Option<B::Instance>,
}

impl<B: ChartBackend> ChartRenderer<B> {
    pub fn new(backend: B) -> Self {
        ChartRenderer {
            backend,
            current: None,
        }
    }

    pub fn render(&mut self, records: &[Record]) {
        let pivot = Pivot::from_records(records);
        debug!(
            "rendering {} records on {} years",
            records.len(),
            pivot.years.len()
        );
        let chart = price_chart(&pivot);

        if let Some(previous) = self.current.take() {
            self.backend.destroy(previous);
        }
        self.current = Some(self.backend.create(CANVAS_ID, chart));
    }

    pub fn current(&self) -> Option<&B::Instance> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

pub fn price_chart(pivot: &Pivot) -> Chart {
    let mut chart = Chart::new(
        TITLE.to_string(),
        Kind::Line,
        pivot.years.clone(),
        X_AXIS,
        Y_AXIS,
    );
    for series in pivot.series.iter() {
        chart.add_dataset(Dataset {
            label: series.label.clone(),
            data: series.values.clone(),
            border_color: series.color,
            background_color: series.color,
            tension: TENSION,
            fill: false,
        });
    }
    chart
}

/// A chart emitted as a Chart.js script on the generated page.
#[derive(Debug)]
pub struct ChartJs {
    canvas_id: String,
    chart: Chart,
}

impl ChartJs {
    #[cfg(test)]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn to_html(&self) -> Markup {
        self.chart.to_html(&self.canvas_id)
    }
}

#[derive(Debug, Default)]
pub struct ScriptBackend;

impl ChartBackend for ScriptBackend {
    type Instance = ChartJs;

    fn create(&mut self, canvas_id: &str, chart: Chart) -> ChartJs {
        ChartJs {
            canvas_id: canvas_id.to_string(),
            chart,
        }
    }

    fn destroy(&mut self, instance: ChartJs) {
        debug!("dropping chart on {}", instance.canvas_id);
    }
}
