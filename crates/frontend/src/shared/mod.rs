pub mod api_utils;
pub mod components;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod submit;
pub mod upload;
pub mod workflow_gate;
