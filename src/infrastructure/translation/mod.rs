mod google_translator;
mod mock_translator;
mod openai_translator;
mod translator_factory;

pub use google_translator::{GOOGLE_TRANSLATE_DEFAULT_BASE_URL, GoogleTranslator};
pub use mock_translator::MockTranslator;
pub use openai_translator::OpenAiTranslator;
pub use translator_factory::TranslatorFactory;
