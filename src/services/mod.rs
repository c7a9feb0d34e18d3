// Shelfmark services
// Services hold stateless logic and ambient concerns: projection, prompts, settings, logging.

pub mod logging;
pub mod settings_engine;
pub mod user_prompt;
pub mod view_projector;
