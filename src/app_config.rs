use std::cell::RefCell;
use std::fmt;

use shuriken_stadium_core::visual::DEFAULT_SPRITE_SRC;
use web_sys::UrlSearchParams;

const DEBUG_KEY: &str = "debug";
const SPRITE_KEY: &str = "sprite";

thread_local! {
    static WIDGET_CONFIG: RefCell<Option<WidgetConfig>> = RefCell::new(None);
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WidgetConfig {
    pub(crate) debug: bool,
    pub(crate) sprite_src: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debug: false,
            sprite_src: DEFAULT_SPRITE_SRC.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigError {
    InvalidFlag { key: &'static str, value: String },
    EmptyValue { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFlag { key, value } => {
                write!(f, "'{value}' is not a valid value for '{key}'")
            }
            ConfigError::EmptyValue { key } => write!(f, "'{key}' must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Config for this page, read from the query string on first use.
pub(crate) fn widget_config() -> WidgetConfig {
    if let Some(config) = WIDGET_CONFIG.with(|slot| slot.borrow().clone()) {
        return config;
    }
    let config = load_widget_config();
    set_widget_config(config.clone());
    config
}

pub(crate) fn set_widget_config(config: WidgetConfig) {
    WIDGET_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

fn load_widget_config() -> WidgetConfig {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let (config, errors) = parse_widget_config(&search);
    for err in errors {
        gloo::console::warn!("ignoring query setting:", err.to_string());
    }
    config
}

pub(crate) fn parse_widget_config(search: &str) -> (WidgetConfig, Vec<ConfigError>) {
    let mut config = WidgetConfig::default();
    let mut errors = Vec::new();
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return (config, errors);
    };
    if let Some(raw) = params.get(DEBUG_KEY) {
        match parse_flag(DEBUG_KEY, &raw) {
            Ok(value) => config.debug = value,
            Err(err) => errors.push(err),
        }
    }
    if let Some(raw) = params.get(SPRITE_KEY) {
        let src = raw.trim();
        if src.is_empty() {
            errors.push(ConfigError::EmptyValue { key: SPRITE_KEY });
        } else {
            config.sprite_src = src.to_string();
        }
    }
    (config, errors)
}

/// A bare `?debug` counts as on.
pub(crate) fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_query_gives_defaults() {
        let (config, errors) = parse_widget_config("");
        assert_eq!(config, WidgetConfig::default());
        assert!(errors.is_empty());
    }

    #[wasm_bindgen_test]
    fn flag_spellings() {
        for raw in ["1", "true", "ON", " yes ", ""] {
            assert_eq!(parse_flag(DEBUG_KEY, raw), Ok(true), "{raw:?}");
        }
        for raw in ["0", "False", "off", "no"] {
            assert_eq!(parse_flag(DEBUG_KEY, raw), Ok(false), "{raw:?}");
        }
    }

    #[wasm_bindgen_test]
    fn invalid_debug_falls_back_with_error() {
        let (config, errors) = parse_widget_config("?debug=maybe&sprite=frog.png");
        assert!(!config.debug);
        assert_eq!(config.sprite_src, "frog.png");
        assert_eq!(
            errors,
            vec![ConfigError::InvalidFlag {
                key: DEBUG_KEY,
                value: "maybe".to_string(),
            }]
        );
    }

    #[wasm_bindgen_test]
    fn blank_sprite_is_rejected() {
        let (config, errors) = parse_widget_config("?debug=1&sprite=%20");
        assert!(config.debug);
        assert_eq!(config.sprite_src, DEFAULT_SPRITE_SRC);
        assert_eq!(errors, vec![ConfigError::EmptyValue { key: SPRITE_KEY }]);
        assert_eq!(errors[0].to_string(), "'sprite' must not be empty");
    }
}
