use sys_locale::get_locale;

use crate::hydraulics::FlowRegime;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const NOT_COMPUTABLE: &str = "general.not_computable";
    pub const CUSTOM_FLUID: &str = "general.custom_fluid";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_FLUID: &str = "report.fluid";
    pub const REPORT_VELOCITY: &str = "report.velocity";
    pub const REPORT_REYNOLDS: &str = "report.reynolds";
    pub const REPORT_FRICTION_FACTOR: &str = "report.friction_factor";
    pub const REPORT_REGIME: &str = "report.regime";
    pub const REPORT_HEAD_LOSS: &str = "report.head_loss";
    pub const REPORT_PRESSURE_DROP: &str = "report.pressure_drop";
    pub const REPORT_PROFILE_SAVED: &str = "report.profile_saved";

    pub const REGIME_LAMINAR: &str = "regime.laminar";
    pub const REGIME_TRANSITIONAL: &str = "regime.transitional";
    pub const REGIME_TURBULENT: &str = "regime.turbulent";

    pub const MATERIALS_HEADING: &str = "catalog.materials_heading";
    pub const FLUIDS_HEADING: &str = "catalog.fluids_heading";
    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNITS_DEFAULT: &str = "units.default";

    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("es") {
            Language::Es
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 내장 문자열 테이블로 번역을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(en/es/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 해당 언어에 없으면 영어, 영어에도 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let found = match self.lang {
            Language::En => en(key),
            Language::Es => es(key).or_else(|| en(key)),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        found.unwrap_or(key)
    }

    /// 유동 영역 라벨.
    pub fn regime(&self, regime: FlowRegime) -> &'static str {
        let key = match regime {
            FlowRegime::Laminar => keys::REGIME_LAMINAR,
            FlowRegime::Transitional => keys::REGIME_TRANSITIONAL,
            FlowRegime::Turbulent => keys::REGIME_TURBULENT,
        };
        self.t(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("es") => Some("es".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    matches!(lang.as_str(), "en" | "es" | "ko").then_some(lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn en(key: &str) -> Option<&'static str> {
    let s = match key {
        keys::ERROR_PREFIX => "Error",
        keys::NOT_COMPUTABLE => {
            "Not computable yet: length, diameter and flow rate must be greater than zero."
        }
        keys::CUSTOM_FLUID => "Custom fluid",
        keys::REPORT_TITLE => "Head loss (Darcy-Weisbach)",
        keys::REPORT_FLUID => "Fluid",
        keys::REPORT_VELOCITY => "Velocity",
        keys::REPORT_REYNOLDS => "Reynolds number",
        keys::REPORT_FRICTION_FACTOR => "Friction factor",
        keys::REPORT_REGIME => "Flow regime",
        keys::REPORT_HEAD_LOSS => "Head loss",
        keys::REPORT_PRESSURE_DROP => "Pressure drop",
        keys::REPORT_PROFILE_SAVED => "Pressure profile written to",
        keys::REGIME_LAMINAR => "Laminar",
        keys::REGIME_TRANSITIONAL => "Transitional",
        keys::REGIME_TURBULENT => "Turbulent",
        keys::MATERIALS_HEADING => "Pipe materials (absolute roughness)",
        keys::FLUIDS_HEADING => "Reference fluids",
        keys::UNITS_HEADING => "Input units",
        keys::UNITS_DEFAULT => "default",
        keys::SETTINGS_CURRENT_UNIT_SYSTEM => "Unit system",
        keys::SETTINGS_SAVED => "Settings saved to",
        _ => return None,
    };
    Some(s)
}

fn es(key: &str) -> Option<&'static str> {
    let s = match key {
        keys::ERROR_PREFIX => "Error",
        keys::NOT_COMPUTABLE => {
            "Aún no calculable: longitud, diámetro y caudal deben ser mayores que cero."
        }
        keys::CUSTOM_FLUID => "Fluido personalizado",
        keys::REPORT_TITLE => "Pérdida de carga (Darcy-Weisbach)",
        keys::REPORT_FLUID => "Fluido",
        keys::REPORT_VELOCITY => "Velocidad",
        keys::REPORT_REYNOLDS => "Número de Reynolds",
        keys::REPORT_FRICTION_FACTOR => "Factor de fricción",
        keys::REPORT_REGIME => "Régimen de flujo",
        keys::REPORT_HEAD_LOSS => "Pérdida de carga",
        keys::REPORT_PRESSURE_DROP => "Caída de presión",
        keys::REPORT_PROFILE_SAVED => "Perfil de presión guardado en",
        keys::REGIME_LAMINAR => "Laminar",
        keys::REGIME_TRANSITIONAL => "Transición",
        keys::REGIME_TURBULENT => "Turbulento",
        keys::MATERIALS_HEADING => "Materiales de tubería (rugosidad absoluta)",
        keys::FLUIDS_HEADING => "Fluidos de referencia",
        keys::UNITS_HEADING => "Unidades de entrada",
        keys::UNITS_DEFAULT => "predeterminada",
        keys::SETTINGS_CURRENT_UNIT_SYSTEM => "Sistema de unidades",
        keys::SETTINGS_SAVED => "Configuración guardada en",
        _ => return None,
    };
    Some(s)
}

fn ko(key: &str) -> Option<&'static str> {
    let s = match key {
        keys::ERROR_PREFIX => "오류",
        keys::NOT_COMPUTABLE => "아직 계산할 수 없습니다: 길이, 내경, 유량은 0보다 커야 합니다.",
        keys::CUSTOM_FLUID => "사용자 정의 유체",
        keys::REPORT_TITLE => "마찰 손실 (Darcy-Weisbach)",
        keys::REPORT_FLUID => "유체",
        keys::REPORT_VELOCITY => "유속",
        keys::REPORT_REYNOLDS => "레이놀즈수",
        keys::REPORT_FRICTION_FACTOR => "마찰계수",
        keys::REPORT_REGIME => "유동 영역",
        keys::REPORT_HEAD_LOSS => "손실수두",
        keys::REPORT_PRESSURE_DROP => "압력강하",
        keys::REPORT_PROFILE_SAVED => "압력 프로파일 저장 위치",
        keys::REGIME_LAMINAR => "층류",
        keys::REGIME_TRANSITIONAL => "천이",
        keys::REGIME_TURBULENT => "난류",
        keys::MATERIALS_HEADING => "배관 재질 (절대 거칠기)",
        keys::FLUIDS_HEADING => "기준 유체",
        keys::UNITS_HEADING => "입력 단위",
        keys::UNITS_DEFAULT => "기본",
        keys::SETTINGS_CURRENT_UNIT_SYSTEM => "단위 시스템",
        keys::SETTINGS_SAVED => "설정 저장 위치",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_regime_labels() {
        let tr = Translator::new("es-ES");
        assert_eq!(tr.language(), Language::Es);
        assert_eq!(tr.regime(FlowRegime::Transitional), "Transición");
        assert_eq!(tr.regime(FlowRegime::Turbulent), "Turbulento");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.t(keys::REPORT_VELOCITY), "유속");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("es", Some("ko")), "es");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("es_AR.UTF-8").as_deref(), Some("es"));
        assert_eq!(normalize_locale_string("fr_FR"), None);
    }
}
