//! 과열기(플래튼/최종) 열역학 모델.
//! 형상 상수 → 단면적/전열면적 → 운전 조건별 물성·θ·τ → FOPDT 응답 순으로 계산한다.

pub mod dynamics;
pub mod kind;
pub mod loader;
pub mod spec;
pub mod unit;

pub use dynamics::{evaluate_dynamics, DerivedDynamics, OperatingPoint};
pub use kind::UnitKind;
pub use loader::{load_unit_config, parse_unit_config, ConfigurationError, UnitConfig};
pub use spec::{DerivedGeometry, ThermalUnitSpec};
pub use unit::SuperheaterUnit;
