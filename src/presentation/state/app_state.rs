use std::sync::Arc;

use crate::application::ports::ScratchStore;
use crate::application::services::TranslationPipeline;
use crate::domain::LanguageCode;

#[derive(Clone)]
pub struct AppState {
    pub translation_pipeline: Arc<TranslationPipeline>,
    pub scratch_store: Arc<dyn ScratchStore>,
    pub default_target_language: LanguageCode,
}

impl AppState {
    pub fn new(
        translation_pipeline: Arc<TranslationPipeline>,
        default_target_language: LanguageCode,
    ) -> Self {
        let scratch_store = Arc::clone(translation_pipeline.scratch_store());
        Self {
            translation_pipeline,
            scratch_store,
            default_target_language,
        }
    }
}
