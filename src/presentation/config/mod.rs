mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DefaultsSettings, ENVIRONMENT_VAR, LoggingSettings, ServerSettings, Settings,
    StorageSettings, SynthesisProviderSetting, SynthesisSettings, TranscriptionProviderSetting,
    TranscriptionSettings, TranslationProviderSetting, TranslationSettings,
};
