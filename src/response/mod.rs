//! FOPDT 계단 응답 계산. 과열기 종류와 무관하게 이득/지연/시정수만으로 동작한다.

pub mod curve;
pub mod fopdt;

pub use curve::{time_axis, StepResponseCurve};
pub use fopdt::{fopdt_step_response, FopdtParams};
