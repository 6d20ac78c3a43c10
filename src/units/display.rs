//! 결과 표시용 SI → 표시 단위 환산.
//!
//! 입력 계열 테이블과 달리 결과 물리량마다 SI 단위 하나, 표시 단위 하나만 둔다.

use super::UnitSystem;

const M_TO_FT: f64 = 3.28084;
const BAR_TO_PSI: f64 = 14.5038;
const PA_TO_PSI: f64 = 0.000145038;

/// 계산 결과 중 단위가 있는 물리량.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultQuantity {
    /// 유속 [m/s]
    Velocity,
    /// 손실수두 [m]
    HeadLoss,
    /// 압력강하 [bar]
    PressureBar,
    /// 압력강하 [Pa]
    PressurePascal,
    /// 프로파일 거리축 [m]
    Distance,
}

fn imperial_factor(quantity: ResultQuantity) -> f64 {
    match quantity {
        ResultQuantity::Velocity | ResultQuantity::HeadLoss | ResultQuantity::Distance => M_TO_FT,
        ResultQuantity::PressureBar => BAR_TO_PSI,
        ResultQuantity::PressurePascal => PA_TO_PSI,
    }
}

/// SI 결과값을 표시 단위 시스템 값으로 바꾼다. SI 시스템에서는 그대로 반환한다.
pub fn display_value(si_value: f64, system: UnitSystem, quantity: ResultQuantity) -> f64 {
    match system {
        UnitSystem::SI => si_value,
        UnitSystem::Imperial => si_value * imperial_factor(quantity),
    }
}

/// 결과 표시용 단위 라벨.
pub fn display_unit(system: UnitSystem, quantity: ResultQuantity) -> &'static str {
    match (system, quantity) {
        (UnitSystem::SI, ResultQuantity::Velocity) => "m/s",
        (UnitSystem::SI, ResultQuantity::HeadLoss | ResultQuantity::Distance) => "m",
        (UnitSystem::SI, ResultQuantity::PressureBar) => "bar",
        (UnitSystem::SI, ResultQuantity::PressurePascal) => "Pa",
        (UnitSystem::Imperial, ResultQuantity::Velocity) => "ft/s",
        (UnitSystem::Imperial, ResultQuantity::HeadLoss | ResultQuantity::Distance) => "ft",
        (UnitSystem::Imperial, ResultQuantity::PressureBar | ResultQuantity::PressurePascal) => {
            "psi"
        }
    }
}
