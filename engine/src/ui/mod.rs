//! UI Module
//!
//! Logic-only observers of the locomotion state. Nothing here renders or
//! mutates the core; these models turn the public read surface into
//! widget-ready values.

pub mod pause;
pub mod stamina_bar;

pub use pause::PauseState;
pub use stamina_bar::StaminaBarModel;
