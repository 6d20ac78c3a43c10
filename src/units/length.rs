use serde::{Deserialize, Serialize};

use super::Unit;

/// 길이 단위. 내부 기준은 미터이다.
///
/// 배관 길이, 내경, 거칠기가 모두 이 단위를 공유하며, 계열별로 노출되는 단위 목록만 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Micrometer,
    Foot,
    Inch,
}

impl Unit for LengthUnit {
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Micrometer => 1e-6,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }
}
