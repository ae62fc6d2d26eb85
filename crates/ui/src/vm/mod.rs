mod countdown;
mod play_vm;
mod progress_vm;
mod time_fmt;

pub use countdown::{CountdownGuard, TICK_INTERVAL};
pub use play_vm::{PlayIntent, PlayOutcome, PlayVm, start_play};
pub use progress_vm::{GameRowVm, ProgressVm, map_progress};
pub use time_fmt::{format_datetime, format_ticks};
