//! UI Adapter - 界面能力实现

mod recording_ui;
mod ref_counted;
mod tracing_ui;

pub use recording_ui::{RecordingUi, UiEvent};
pub use ref_counted::RefCountedIndicator;
pub use tracing_ui::TracingUi;
