use super::{Config, ExportConfig, GeneratorConfig, LogConfig, UiConfig};

/// Config written out on first run
pub fn defaults() -> Config {
    Config {
        generator: GeneratorConfig::default(),
        export: ExportConfig::default(),
        ui: UiConfig::default(),
        log: LogConfig::default(),
    }
}
