use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub current_weather: CurrentWeather,
    pub forecast: Vec<ForecastDay>,
    pub data_source: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: Condition,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub visibility: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: String,
    pub high_temp: i32,
    pub low_temp: i32,
    pub condition: Condition,
    pub precipitation_chance: u32,
}

/// Sky condition label, serialized as its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorm,
    Snowy,
    Foggy,
    Windy,
    Clear,
    Overcast,
}

impl Condition {
    pub const ALL: [Condition; 10] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Thunderstorm,
        Condition::Snowy,
        Condition::Foggy,
        Condition::Windy,
        Condition::Clear,
        Condition::Overcast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snowy => "Snowy",
            Condition::Foggy => "Foggy",
            Condition::Windy => "Windy",
            Condition::Clear => "Clear",
            Condition::Overcast => "Overcast",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Uniform over all labels
impl Distribution<Condition> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Condition {
        Condition::ALL[rng.gen_range(0..Condition::ALL.len())]
    }
}
