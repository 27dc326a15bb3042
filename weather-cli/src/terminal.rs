//! Plain-text rendering of the view controller's output.

use weather_core::{DisplayUnit, WeatherView, WeatherViewModel};

/// Prints every view update to stdout.
#[derive(Debug, Default)]
pub struct TerminalView {
    search: String,
}

impl TerminalView {
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }
}

impl WeatherView for TerminalView {
    fn search_text(&self) -> String {
        self.search.clone()
    }

    fn show_loading(&mut self, query: &str) {
        println!("{}", format_loading(query));
    }

    fn show_weather(&mut self, view: &WeatherViewModel) {
        print!("{}", format_weather(view));
    }

    fn show_error(&mut self, message: &str) {
        println!("{}", format_error(message));
    }

    fn show_unit(&mut self, unit: DisplayUnit) {
        println!("Showing temperatures in {unit} (°{})", unit.symbol());
    }
}

pub fn format_weather(view: &WeatherViewModel) -> String {
    let current = &view.current;
    let mut out = String::from("\n");

    out.push_str(&format!("{}\n", current.location));
    if let Some(date) = &current.date {
        out.push_str(&format!("{date}\n"));
    }
    out.push_str(&format!("{}  {}\n", current.temperature, current.condition));
    out.push_str(&format!(
        "Feels like {} · Humidity {} · Wind {} · Pressure {}\n",
        current.feels_like, current.humidity, current.wind, current.pressure
    ));
    out.push_str(&format!("Icon: {}\n", current.icon_url));

    if !view.forecast.is_empty() {
        out.push('\n');
        for card in &view.forecast {
            out.push_str(&format!(
                "{:<4} {:>5} {:<28} H: {:>4}  L: {:>4}\n",
                card.weekday,
                card.average.as_deref().unwrap_or("--"),
                card.condition,
                card.max,
                card.min
            ));
        }
    }

    out
}

pub fn format_loading(query: &str) -> String {
    format!("Loading weather for {query}...")
}

pub fn format_error(message: &str) -> String {
    format!("⚠ {message}")
}
