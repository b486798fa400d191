use super::types::*;
use crate::utils::title_case;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;

pub const SAMPLE_COUNTRY: &str = "Sample Country";
pub const DATA_SOURCE: &str = "Sample Weather API";
pub const SAMPLE_NOTE: &str = "This is sample weather data for demonstration purposes";

pub const FORECAST_DAYS: i64 = 5;

/// Generate a sample report for `city_name` as of `now`, drawing from the
/// thread-local generator.
pub fn generate_sample_weather(city_name: &str, now: NaiveDateTime) -> WeatherReport {
    generate_sample_weather_with(city_name, now, &mut rand::thread_rng())
}

/// Same as [`generate_sample_weather`] with a caller-supplied generator.
///
/// Forecast highs and lows are drawn independently around the current
/// temperature, so a day's `low_temp` may exceed its `high_temp`.
pub fn generate_sample_weather_with<R: Rng + ?Sized>(
    city_name: &str,
    now: NaiveDateTime,
    rng: &mut R,
) -> WeatherReport {
    let current_temp: i32 = rng.gen_range(-10..=35); // Celsius
    let feels_like = current_temp + rng.gen_range(-3..=3);
    let humidity: u32 = rng.gen_range(30..=90);
    let wind_speed: u32 = rng.gen_range(0..=25); // km/h
    let pressure: u32 = rng.gen_range(1000..=1030); // hPa
    let visibility: u32 = rng.gen_range(5..=15); // km

    let forecast = (0..FORECAST_DAYS)
        .map(|offset| {
            let date = now + Duration::days(offset);
            ForecastDay {
                date: date.format("%Y-%m-%d").to_string(),
                day: date.format("%A").to_string(),
                high_temp: current_temp + rng.gen_range(-5..=10),
                low_temp: current_temp + rng.gen_range(-10..=5),
                condition: rng.gen(),
                precipitation_chance: rng.gen_range(0..=80),
            }
        })
        .collect();

    WeatherReport {
        city: title_case(city_name),
        country: SAMPLE_COUNTRY.to_string(),
        current_weather: CurrentWeather {
            temperature: current_temp,
            feels_like,
            condition: rng.gen(),
            humidity: format!("{}%", humidity),
            wind_speed: format!("{} km/h", wind_speed),
            pressure: format!("{} hPa", pressure),
            visibility: format!("{} km", visibility),
            last_updated: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        },
        forecast,
        data_source: DATA_SOURCE.to_string(),
        note: SAMPLE_NOTE.to_string(),
    }
}
