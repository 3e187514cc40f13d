//! 증기 물성 관련 모듈 모음.

pub mod if97;
pub mod provider;
pub mod saturation;

pub use if97::If97Provider;
pub use provider::{SteamPropertyError, SteamPropertyProvider};
pub use saturation::{saturation_temperature_c, superheat_k};
