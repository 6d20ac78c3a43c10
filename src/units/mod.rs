//! 단위 정의 및 변환 모듈 모음.
//!
//! 각 물리량 계열은 자기만의 단위 enum을 가지므로, 서로 다른 계열 사이의 변환은
//! 컴파일 단계에서 막힌다. 문자열로 단위를 받는 경계(CLI)는 [`crate::conversion`]을 쓴다.

pub mod density;
pub mod display;
pub mod flow_rate;
pub mod length;
pub mod tables;
pub mod viscosity;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use density::DensityUnit;
pub use display::{display_unit, display_value, ResultQuantity};
pub use flow_rate::FlowRateUnit;
pub use length::LengthUnit;
pub use tables::{default_units, units_available, InputUnits, QuantityFamily, UnitSystem};
pub use viscosity::ViscosityUnit;

/// 한 물리량 계열 안에서 선형 배율로 환산되는 단위.
pub trait Unit: Copy + PartialEq + fmt::Debug {
    /// 계열 기준 단위로 바꾸는 배율 (`value * factor = 기준값`).
    fn factor(self) -> f64;

    /// 화면 표시용 기호.
    fn symbol(self) -> &'static str;
}

/// 같은 계열의 두 단위 사이에서 값을 변환한다.
///
/// 단위가 같으면 값을 그대로 돌려준다. 반올림은 하지 않는다.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    let base = value * from.factor();
    base / to.factor()
}

/// 단위가 붙은 값. 단위 타입 `U`가 물리량 계열을 고정한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitQuantity<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: Unit> UnitQuantity<U> {
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// 지정 단위로 환산한 수치.
    pub fn value_in(self, unit: U) -> f64 {
        convert(self.value, self.unit, unit)
    }

    /// 같은 양을 다른 단위로 다시 표현한다.
    pub fn to(self, unit: U) -> Self {
        Self::new(self.value_in(unit), unit)
    }
}

impl<U: Unit> fmt::Display for UnitQuantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// 계열을 가리지 않고 입력 단위를 담는 태그. 단위 목록 테이블과 문자열 파싱에서 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyUnit {
    Length(LengthUnit),
    FlowRate(FlowRateUnit),
    Density(DensityUnit),
    Viscosity(ViscosityUnit),
}

impl AnyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            AnyUnit::Length(u) => u.symbol(),
            AnyUnit::FlowRate(u) => u.symbol(),
            AnyUnit::Density(u) => u.symbol(),
            AnyUnit::Viscosity(u) => u.symbol(),
        }
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
