//! 과열기 동특성 계산 로직을 라이브러리로 분리하여 CLI 외의 도구에서도 재사용한다.

pub mod app;
pub mod boiler;
pub mod config;
pub mod error;
pub mod response;
pub mod steam;
pub mod superheater;
pub mod ui_cli;
pub mod units;

pub use error::{ModelResult, ThermalModelError};
