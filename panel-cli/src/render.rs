//! Plain-text rendering of the panel's view state.
//!
//! Mirrors the panel layout: optional loading line, optional error line,
//! a current-conditions block, then a horizontal row of day cards.

use panel_core::{ViewState, classify_condition, day_label};

const CARD_WIDTH: usize = 8;

pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    if state.loading {
        out.push_str("Loading...\n");
    }

    if let Some(error) = &state.error {
        out.push_str(error);
        out.push('\n');
    }

    if let Some(current) = &state.current {
        let shown = classify_condition(&current.description);
        out.push_str(&format!(
            "{}°C  {} {}\n",
            current.temperature_c,
            shown.icon.glyph(),
            shown.label
        ));
    }

    if let Some(forecast) = &state.forecast {
        out.push_str("\nWeekly Forecast\n");

        let mut days = String::new();
        let mut icons = String::new();
        let mut temps = String::new();

        for entry in forecast.entries() {
            let shown = classify_condition(&entry.description);
            push_card(&mut days, day_label(&entry.timestamp_txt).unwrap_or("---"));
            push_card(&mut icons, shown.icon.glyph());
            push_card(&mut temps, &format!("{}°C", entry.temperature_c));
        }

        for row in [days, icons, temps] {
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }

    out
}

fn push_card(row: &mut String, cell: &str) {
    row.push_str(cell);
    // Wide cells still need a gap before the next card.
    let pad = CARD_WIDTH.saturating_sub(cell.chars().count()).max(1);
    for _ in 0..pad {
        row.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_core::{CurrentWeather, ForecastEntry, ForecastSeries};

    fn current(temp: f64, description: &str) -> CurrentWeather {
        CurrentWeather {
            temperature_c: temp,
            description: description.to_string(),
            wind_speed_mps: 0.0,
            pressure_hpa: 0.0,
        }
    }

    #[test]
    fn empty_state_renders_nothing() {
        assert_eq!(render(&ViewState::default()), "");
    }

    #[test]
    fn loading_state_renders_loading_line() {
        let state = ViewState { loading: true, ..Default::default() };
        assert_eq!(render(&state), "Loading...\n");
    }

    #[test]
    fn error_line_shows_the_message() {
        let state = ViewState {
            error: Some("Error fetching weather data".to_string()),
            ..Default::default()
        };
        assert_eq!(render(&state), "Error fetching weather data\n");
    }

    #[test]
    fn current_block_shows_temperature_and_label() {
        let state = ViewState {
            current: Some(current(18.3, "few clouds")),
            ..Default::default()
        };

        let text = render(&state);
        assert!(text.contains("18.3°C"), "got: {text}");
        assert!(text.contains("Partly Cloudy"), "got: {text}");
    }

    #[test]
    fn forecast_row_shows_day_cards() {
        let series = ForecastSeries::from_list(vec![
            ForecastEntry {
                timestamp_txt: "2024-01-07 12:00:00".to_string(),
                temperature_c: 12.0,
                description: "light rain".to_string(),
            },
            ForecastEntry {
                timestamp_txt: "2024-01-08 12:00:00".to_string(),
                temperature_c: 9.5,
                description: "clear sky".to_string(),
            },
        ]);
        let state = ViewState { forecast: Some(series), ..Default::default() };

        let text = render(&state);
        assert!(text.contains("Weekly Forecast"));
        assert!(text.contains("SUN"));
        assert!(text.contains("MON"));
        assert!(text.contains("12°C"));
        assert!(text.contains("9.5°C"));
    }

    #[test]
    fn wide_temperatures_keep_cards_separated() {
        let series = ForecastSeries::from_list(vec![
            ForecastEntry {
                timestamp_txt: "2024-01-07 12:00:00".to_string(),
                temperature_c: -10.55,
                description: "snow".to_string(),
            },
            ForecastEntry {
                timestamp_txt: "2024-01-08 12:00:00".to_string(),
                temperature_c: 12.0,
                description: "clear sky".to_string(),
            },
        ]);
        let state = ViewState { forecast: Some(series), ..Default::default() };

        let text = render(&state);
        // "-10.55°C" fills a whole card and must not touch its neighbour.
        assert!(text.contains("-10.55°C 12°C"), "got: {text}");
    }

    #[test]
    fn partial_data_renders_error_and_current_together() {
        let state = ViewState {
            current: Some(current(3.0, "mist")),
            error: Some("Error getting location".to_string()),
            ..Default::default()
        };

        let text = render(&state);
        assert!(text.contains("Error getting location"));
        assert!(text.contains("3°C"));
        assert!(text.contains("Clear"));
    }
}
