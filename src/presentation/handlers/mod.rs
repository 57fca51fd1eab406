mod audio;
mod error_response;
mod health;
mod translate;

pub use audio::audio_handler;
pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use translate::{NO_AUDIO_MESSAGE, TranslateResponse, translate_handler};
