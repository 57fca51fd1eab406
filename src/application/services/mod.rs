mod scratch_guard;
mod translation_pipeline;

pub use scratch_guard::ScratchGuard;
pub use translation_pipeline::{PipelineError, TranslationPipeline};
