use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::{default_units, InputUnits, UnitSystem};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 언어 코드(auto/en/es/ko)
    pub language: String,
    /// 기준 유체 코드
    pub default_fluid: String,
    /// 배관 재질 코드
    pub default_material: String,
    /// 계열별 입력 단위. 단위 시스템을 바꾸면 해당 시스템 기본값으로 초기화된다.
    pub input_units: InputUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::SI,
            language: "auto".to_string(),
            default_fluid: "water".to_string(),
            default_material: "steel".to_string(),
            input_units: default_units(UnitSystem::SI),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// 단위 시스템을 바꾸고 입력 단위를 그 시스템의 기본값으로 맞춘다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.input_units = default_units(system);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{FlowRateUnit, LengthUnit, ViscosityUnit};

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let cfg = load_or_default(&path).expect("load");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pipe.toml");
        let mut cfg = Config::default();
        cfg.set_unit_system(UnitSystem::Imperial);
        cfg.language = "es".into();
        cfg.save(&path).expect("save");
        let loaded = load_or_default(&path).expect("reload");
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.input_units.flow_rate, FlowRateUnit::UsGallonPerMinute);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("partial.toml");
        fs::write(&path, "unit_system = \"Imperial\"\n").expect("write");
        let cfg = load_or_default(&path).expect("load");
        assert_eq!(cfg.unit_system, UnitSystem::Imperial);
        // 파일에 없는 필드는 기본값을 쓴다.
        assert_eq!(cfg.input_units.length, LengthUnit::Meter);
        assert_eq!(cfg.default_fluid, "water");
    }

    #[test]
    fn switching_system_resets_units() {
        let mut cfg = Config::default();
        cfg.input_units.diameter = LengthUnit::Centimeter;
        cfg.set_unit_system(UnitSystem::Imperial);
        assert_eq!(cfg.input_units.diameter, LengthUnit::Inch);
        assert_eq!(cfg.input_units.kinematic_viscosity, ViscosityUnit::Centistoke);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "unit_system = [").expect("write");
        assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
    }
}
