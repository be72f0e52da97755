//! WAD reader core: pure drop classification and the loading-indicator state machine.
mod effect;
mod msg;
mod source;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use source::{
    carries_files, carries_link, classify, is_classifiable, DropPayload, DropSource, FILES_TYPE,
    HTML_TYPE, URI_LIST_TYPE, URL_TYPE, URL_TYPE_LEGACY,
};
pub use state::{AppState, GestureId, TargetState};
pub use update::update;
pub use view_model::{AppViewModel, TargetView, LABEL_DISPLAY_LIMIT, TICK_PERIOD_MS};
