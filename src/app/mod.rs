//! Application layer: the option catalog, the panel state machine and the
//! host-side plumbing around them.
//!
//! - `article` - option catalog and the `ArticleState` selection record
//! - `params_form` - draft/baseline state machine for the settings panel
//! - `article_source` - loads the displayed article text
//! - `messages` - channel messages handled by the dispatch loop in main
//! - `state` - main application coordinator

pub mod article;
pub mod article_source;
pub mod error;
pub mod messages;
pub mod params_form;
pub mod state;

pub use article::{
    ArticleState, BackgroundColor, ContentWidth, FontColor, FontFamily, FontSize, ParamChange,
};
pub use error::{AppError, Result};
pub use messages::Message;
pub use params_form::ParamsForm;
