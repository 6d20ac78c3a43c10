//! 원형 직관의 마찰 손실 계산(Darcy-Weisbach).
//!
//! 모든 계산은 SI 단위로만 이뤄지며 표시 단위는 [`crate::units::display`]가 담당한다.

pub mod calculator;
pub mod friction;

pub use calculator::{compute, CalculationResult, FluidSpec, PipeSpec, ProfilePoint};
pub use friction::{friction_factor, swamee_jain, FlowRegime};

/// 중력가속도 [m/s2]
pub const GRAVITY: f64 = 9.81;
pub const PA_PER_BAR: f64 = 100_000.0;
/// 압력 프로파일 구간 수. 점 개수는 이보다 하나 많다.
pub const PROFILE_SEGMENTS: usize = 100;
