use clap::ValueEnum;

/// 온도 입력 단위. 증기표와 모델은 °C를 기준으로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

pub const KELVIN_OFFSET: f64 = 273.15;

/// 주어진 온도를 °C로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}
