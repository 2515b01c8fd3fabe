//! Human-readable rendering of a telemetry payload.

use crate::prelude::*;

/// Render the readings with their units for the log and list views.
pub fn human_readings(metrics: &Metrics) -> String {
    match *metrics {
        Metrics::Flow {
            water_flow,
            pressure,
            temperature,
        }
        | Metrics::Level {
            water_flow,
            pressure,
            temperature,
        }
        | Metrics::Pressure {
            water_flow,
            pressure,
            temperature,
        } => format!("{:.1} L/min, {:.1} bar, {:.1} °C", water_flow, pressure, temperature),
        Metrics::Quality {
            water_flow,
            pressure,
            temperature,
            ph,
            turbidity,
        } => format!(
            "{:.1} L/min, {:.1} bar, {:.1} °C, pH {:.1}, {:.1} NTU",
            water_flow, pressure, temperature, ph, turbidity,
        ),
    }
}
