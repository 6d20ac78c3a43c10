use serde::{Deserialize, Serialize};

use super::Unit;

/// 동점도(kinematic viscosity) 단위. 내부 기준은 cSt 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViscosityUnit {
    Centistoke,
    SquareMeterPerSecond,
}

impl Unit for ViscosityUnit {
    fn factor(self) -> f64 {
        match self {
            ViscosityUnit::Centistoke => 1.0,
            ViscosityUnit::SquareMeterPerSecond => 1e6,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::Centistoke => "cSt",
            ViscosityUnit::SquareMeterPerSecond => "m²/s",
        }
    }
}
