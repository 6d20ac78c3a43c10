use serde::{Deserialize, Serialize};

use super::Unit;

/// 체적 유량 단위. 내부 기준은 L/s 이다.
///
/// `CubicMeterPerSecond`는 계산기로 넘길 SI 값을 만들 때만 쓰며 입력 단위 목록에는 나오지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowRateUnit {
    LiterPerSecond,
    CubicMeterPerHour,
    CubicMeterPerSecond,
    /// 미국 갤런/분
    UsGallonPerMinute,
    CubicFootPerSecond,
}

impl Unit for FlowRateUnit {
    fn factor(self) -> f64 {
        match self {
            FlowRateUnit::LiterPerSecond => 1.0,
            FlowRateUnit::CubicMeterPerHour => 1000.0 / 3600.0,
            FlowRateUnit::CubicMeterPerSecond => 1000.0,
            FlowRateUnit::UsGallonPerMinute => 0.0630902,
            FlowRateUnit::CubicFootPerSecond => 28.3168,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            FlowRateUnit::LiterPerSecond => "L/s",
            FlowRateUnit::CubicMeterPerHour => "m³/h",
            FlowRateUnit::CubicMeterPerSecond => "m³/s",
            FlowRateUnit::UsGallonPerMinute => "GPM",
            FlowRateUnit::CubicFootPerSecond => "ft³/s",
        }
    }
}
