//! 단위 정의 및 변환 모듈 모음.
//! 모델 내부 기준: 압력 bar(abs), 증기표 MPa, 온도 °C, 길이 m, 유량 kg/s.

pub mod energy;
pub mod length;
pub mod mass_flow;
pub mod pressure;
pub mod temperature;

pub use energy::kj_to_j;
pub use length::mm_to_m;
pub use mass_flow::tonnes_per_hour_to_kg_per_s;
pub use pressure::{bar_from_mpa, bar_to_mpa, to_bar, PressureUnit};
pub use temperature::{to_celsius, TemperatureUnit, KELVIN_OFFSET};
