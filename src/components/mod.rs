//! UI Components
//!
//! Reusable Leptos components.

mod api_settings_form;
mod back_button;
mod checkbox;
mod day_view;
mod habit_empty;
mod loading;
mod new_habit_form;
mod progress_bar;

pub use api_settings_form::ApiSettingsForm;
pub use back_button::BackButton;
pub use checkbox::Checkbox;
pub use day_view::DayView;
pub use habit_empty::HabitEmpty;
pub use loading::Loading;
pub use new_habit_form::NewHabitForm;
pub use progress_bar::ProgressBar;
