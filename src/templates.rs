use chrono::Utc;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = ".view { display: none; } .view.active { display: block; } \
                     button.active { font-weight: bold; } \
                     table { border-collapse: collapse; } td, th { padding: 0.2em 1em; }";

pub fn now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Pages headers.
fn header() -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            script src="https://cdn.jsdelivr.net/npm/chart.js" { }
            style { (PreEscaped(STYLE)) }

            title { "西瓜價格" }
        }
    }
}

/// A static footer.
fn footer() -> Markup {
    html! {
        footer {
            p { "Page created " (now()) }
        }
    }
}

/// The final Markup, including `header` and `footer`.
pub fn page(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang = "zh-Hant" {
            (header())
            body style="font-family: Arial, Helvetica, sans-serif;" {
                h1 { "西瓜價格" }
                (content)
                (footer())
            }
        }
    }
}
