mod decor;
mod home;
mod play;
mod progress;
mod settings;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use play::PlayView;
pub use progress::ProgressView;
pub use settings::SettingsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use welcome::WelcomeView;
