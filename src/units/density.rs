use serde::{Deserialize, Serialize};

use super::Unit;

/// 밀도 단위. 내부 기준은 kg/m³ 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerCubicMeter,
    PoundPerCubicFoot,
}

impl Unit for DensityUnit {
    fn factor(self) -> f64 {
        match self {
            DensityUnit::KgPerCubicMeter => 1.0,
            DensityUnit::PoundPerCubicFoot => 16.0185,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerCubicMeter => "kg/m³",
            DensityUnit::PoundPerCubicFoot => "lb/ft³",
        }
    }
}
