use crate::api::{RecordSource, SearchParams};
use crate::record::Record;
use crate::renderer::{ChartBackend, ChartRenderer, ScriptBackend};
use crate::table::TableBody;
use crate::templates::page;
use crate::view::{
    active_class, toggle_script, View, ViewToggle, CHART_BUTTON_ID, CHART_CONTAINER_ID,
    TABLE_BUTTON_ID, TABLE_CONTAINER_ID,
};
use log::{error, info};
use maud::{html, Markup, PreEscaped};

/// The page state plus one handler per page event.
pub struct Dashboard<S: RecordSource, B: ChartBackend> {
    source: S,
    view: ViewToggle,
    table: TableBody,
    renderer: ChartRenderer<B>,
    filters: Option<SearchParams>,
}

impl<S: RecordSource, B: ChartBackend> Dashboard<S, B> {
    pub fn new(source: S, backend: B) -> Self {
        Dashboard {
            source,
            view: ViewToggle::setup(),
            table: TableBody::default(),
            renderer: ChartRenderer::new(backend),
            filters: None,
        }
    }

    pub fn on_load(&mut self) {
        match self.source.fetch_all() {
            Ok(records) => {
                self.filters = None;
                self.show(&records);
            }
            Err(e) => error!("Failed to fetch data: {}", e),
        }
    }

    pub fn on_search(&mut self, params: &SearchParams) {
        match self.source.search(params) {
            Ok(records) => {
                self.filters = Some(params.clone());
                self.show(&records);
            }
            Err(e) => error!("Failed to fetch search data: {}", e),
        }
    }

    pub fn on_view_click(&mut self, view: View) {
        self.view.click(view);
    }

    fn show(&mut self, records: &[Record]) {
        info!("showing {} records", records.len());
        self.table.populate(records);
        self.renderer.render(records);
    }

    pub fn view(&self) -> &ViewToggle {
        &self.view
    }

    pub fn table(&self) -> &TableBody {
        &self.table
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &ChartRenderer<B> {
        &self.renderer
    }
}

fn container_class(active: bool) -> &'static str {
    if active {
        "view active"
    } else {
        "view"
    }
}

impl<S: RecordSource> Dashboard<S, ScriptBackend> {
    pub fn to_html(&self) -> Markup {
        let view = &self.view;
        let content = html! {
            @if let Some(filters) = &self.filters {
                p {
                    "Search: "
                    @for (key, value) in filters.pairs() {
                        code { (key) "=" (value) } " "
                    }
                }
            }
            div {
                button id=(CHART_BUTTON_ID) class=[active_class(view.chart_button)] { "圖表" }
                " "
                button id=(TABLE_BUTTON_ID) class=[active_class(view.table_button)] { "表格" }
            }
            div id=(CHART_CONTAINER_ID) class=(container_class(view.chart_container)) {
                @if let Some(chart) = self.renderer.current() {
                    (chart.to_html())
                }
            }
            div id=(TABLE_CONTAINER_ID) class=(container_class(view.table_container)) {
                (self.table.to_html())
            }
            script {
                (PreEscaped(toggle_script()))
            }
        };
        page(content)
    }
}

#[cfg(test)]
mod test {
    use super::Dashboard;
    use crate::api::{RecordSource, SearchParams};
    use crate::error::{Error, Result};
    use crate::record::{Record, Year};
    use crate::renderer::test::CountingBackend;
    use crate::renderer::ScriptBackend;
    use crate::view::View;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeSource {
        all: Vec<Record>,
        found: Vec<Record>,
        fail: bool,
        searches: RefCell<Vec<SearchParams>>,
    }

    impl RecordSource for FakeSource {
        fn fetch_all(&self) -> Result<Vec<Record>> {
            if self.fail {
                return Err(Error::Url("unreachable".to_string()));
            }
            Ok(self.all.clone())
        }

        fn search(&self, params: &SearchParams) -> Result<Vec<Record>> {
            self.searches.borrow_mut().push(params.clone());
            if self.fail {
                return Err(Error::Url("unreachable".to_string()));
            }
            Ok(self.found.clone())
        }
    }

    fn source() -> FakeSource {
        FakeSource {
            all: vec![
                Record::new("西瓜(大粒)", 2020, Some(10.0)),
                Record::new("西瓜(小粒)", 2020, None),
                Record::new("西瓜(無子)", 2021, Some(15.0)),
                Record::new("other", 2020, Some(99.0)),
            ],
            found: vec![Record::new("西瓜(無子)", 2022, Some(18.0))],
            ..Default::default()
        }
    }

    #[test]
    fn test_load_then_search() {
        let mut dashboard = Dashboard::new(source(), CountingBackend::default());
        dashboard.on_load();

        // unrecognized categories still get a table row
        assert_eq!(dashboard.table().rows().len(), 4);
        assert_eq!(dashboard.table().rows()[3].name, "other");
        let (_, chart) = dashboard.renderer().current().unwrap();
        assert_eq!(chart.labels(), &[Year::Numeric(2020), Year::Numeric(2021)]);

        let params = SearchParams {
            kind: "西瓜(無子)".to_string(),
            ..Default::default()
        };
        dashboard.on_search(&params);
        assert_eq!(dashboard.table().rows().len(), 1);
        assert_eq!(dashboard.renderer().backend().live(), 1);
        assert_eq!(dashboard.renderer().backend().created, 2);
        let (_, chart) = dashboard.renderer().current().unwrap();
        assert_eq!(chart.labels(), &[Year::Numeric(2022)]);
    }

    #[test]
    fn test_failed_fetch_keeps_state() {
        let mut dashboard = Dashboard::new(source(), CountingBackend::default());
        dashboard.on_load();
        dashboard.source.fail = true;

        dashboard.on_load();
        dashboard.on_search(&SearchParams::default());

        assert_eq!(dashboard.table().rows().len(), 4);
        assert_eq!(dashboard.renderer().backend().created, 1);
        assert_eq!(dashboard.source.searches.borrow().len(), 1);
    }

    #[test]
    fn test_view_click() {
        let mut dashboard = Dashboard::new(FakeSource::default(), CountingBackend::default());
        assert_eq!(dashboard.view().active_view(), View::Chart);
        dashboard.on_view_click(View::Table);
        assert_eq!(dashboard.view().active_view(), View::Table);
        dashboard.on_view_click(View::Table);
        assert_eq!(dashboard.view().active_view(), View::Table);
    }

    #[test]
    fn test_html() {
        let mut dashboard = Dashboard::new(source(), ScriptBackend);
        dashboard.on_search(&SearchParams {
            start_year: "2020".to_string(),
            ..Default::default()
        });
        dashboard.on_view_click(View::Table);
        let html = dashboard.to_html().into_string();

        assert!(html.contains("<button id=\"table-view-btn\" class=\"active\">"));
        assert!(html.contains("<button id=\"chart-view-btn\">"));
        assert!(html.contains("<div id=\"table-container\" class=\"view active\">"));
        assert!(html.contains("<div id=\"chart-container\" class=\"view\">"));
        assert!(html.contains("<canvas id=\"priceChart\">"));
        assert!(html.contains("<code>startYear=2020</code>"));
        assert!(html.contains("<td>西瓜(無子)</td>"));
    }
}
