use clap::ValueEnum;

pub const CHART_BUTTON_ID: &str = "chart-view-btn";
pub const TABLE_BUTTON_ID: &str = "table-view-btn";
pub const CHART_CONTAINER_ID: &str = "chart-container";
pub const TABLE_CONTAINER_ID: &str = "table-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    Chart,
    Table,
}

/// "active" markers of the two view buttons and the two containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewToggle {
    pub chart_button: bool,
    pub table_button: bool,
    pub chart_container: bool,
    pub table_container: bool,
}

impl ViewToggle {
    /// Chart view is shown first.
    pub fn setup() -> ViewToggle {
        let mut toggle = ViewToggle {
            chart_button: false,
            table_button: false,
            chart_container: false,
            table_container: false,
        };
        toggle.click(View::Chart);
        toggle
    }

    pub fn click(&mut self, view: View) {
        let chart = view == View::Chart;
        self.chart_button = chart;
        self.chart_container = chart;
        self.table_button = !chart;
        self.table_container = !chart;
    }

    pub fn active_view(&self) -> View {
        if self.table_container {
            View::Table
        } else {
            View::Chart
        }
    }
}

pub fn active_class(active: bool) -> Option<&'static str> {
    if active {
        Some("active")
    } else {
        None
    }
}

/// Browser side of [`ViewToggle::click`], wired on the generated page.
pub fn toggle_script() -> String {
    format!(
        "function setupViewToggle() {{\n\
         const pairs = [['{cb}', '{cc}'], ['{tb}', '{tc}']];\n\
         pairs.forEach(([button, container], i) => {{\n\
         document.getElementById(button).addEventListener('click', () => {{\n\
         const [otherButton, otherContainer] = pairs[1 - i];\n\
         document.getElementById(button).classList.add('active');\n\
         document.getElementById(container).classList.add('active');\n\
         document.getElementById(otherButton).classList.remove('active');\n\
         document.getElementById(otherContainer).classList.remove('active');\n\
         }});\n\
         }});\n\
         }}\n\
         setupViewToggle();",
        cb = CHART_BUTTON_ID,
        cc = CHART_CONTAINER_ID,
        tb = TABLE_BUTTON_ID,
        tc = TABLE_CONTAINER_ID,
    )
}

#[cfg(test)]
mod test {
    use super::{View, ViewToggle};

    #[test]
    fn test_setup_shows_chart() {
        let toggle = ViewToggle::setup();
        assert!(toggle.chart_button && toggle.chart_container);
        assert!(!toggle.table_button && !toggle.table_container);
        assert_eq!(toggle.active_view(), View::Chart);
    }

    #[test]
    fn test_click_is_exclusive_and_idempotent() {
        let mut toggle = ViewToggle::setup();
        toggle.click(View::Table);
        assert!(toggle.table_button && toggle.table_container);
        assert!(!toggle.chart_button && !toggle.chart_container);

        let before = toggle;
        toggle.click(View::Table);
        assert_eq!(toggle, before);

        toggle.click(View::Chart);
        assert_eq!(toggle, ViewToggle::setup());
    }
}
