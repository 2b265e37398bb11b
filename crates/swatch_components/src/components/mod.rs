//! Per-kind view-models and style resolvers
//!
//! Every view-model is a plain value with builder methods and a `resolve`
//! method producing the concrete style for one render.

pub mod badge;
pub mod button;
pub mod card;
pub mod countdown;
pub mod input_field;
pub mod loading;
pub mod modal;
pub mod progress_bar;
pub mod radio_group;
pub mod segmented_control;
pub mod slider;
pub mod text_input;

pub use badge::{BadgeStyle, BadgeVm, ResolvedBadgeStyle};
pub use button::{ButtonStyle, ButtonVm, ImageLocation, ImageSource, ResolvedButtonStyle};
pub use card::{CardVm, ResolvedCardStyle, ResolvedShadow};
pub use countdown::{
    countdown_breakdown, CountdownBreakdown, CountdownStyle, CountdownVm,
    ResolvedCountdownStyle, UnitsStyle,
};
pub use input_field::{
    title_position, InputFieldState, InputFieldVm, ResolvedInputFieldStyle, TitlePosition,
};
pub use loading::{LoadingVm, ResolvedLoadingStyle};
pub use modal::{
    BottomModalVm, CenterModalVm, ModalSize, ModalStyle, ModalTransition, OverlayStyle,
    ResolvedModalStyle, ResolvedOverlay,
};
pub use progress_bar::{
    ProgressBarLayout, ProgressBarStyle, ProgressBarVm, ResolvedProgressBarStyle,
};
pub use radio_group::{RadioGroupVm, ResolvedRadioGroupStyle, ResolvedRadioItemStyle};
pub use segmented_control::{
    ResolvedSegmentStyle, ResolvedSegmentedControlStyle, SegmentedControlVm,
};
pub use slider::{ResolvedSliderStyle, SliderLayout, SliderStyle, SliderVm};
pub use text_input::{ResolvedTextInputStyle, TextInputVm};
