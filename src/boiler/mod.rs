//! 보일러 효율·감온 분무 관련 간이 계산 모듈 모음.

pub mod efficiency;
pub mod spray;

pub use efficiency::{boiler_efficiency, spray_spread, BoilerEfficiencyResult, BoilerModelInput};
pub use spray::{simulate_spread, spray_pattern, SprayInput};
