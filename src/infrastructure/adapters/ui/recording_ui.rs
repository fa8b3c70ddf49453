//! Recording UI - 记录所有界面调用的宿主

use std::sync::{Mutex, MutexGuard};

use crate::application::ports::{LoadingIndicatorPort, NavigatorPort, NotifierPort};

/// 界面事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ShowLoading { title: String, mask: bool },
    HideLoading,
    Toast(String),
    NavigateTo(String),
}

/// 按调用顺序记录界面事件
#[derive(Debug, Default)]
pub struct RecordingUi {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UiEvent>> {
        // 记录器不持有需要回滚的状态，中毒后继续使用
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, event: UiEvent) {
        self.lock().push(event);
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.lock().clone()
    }

    pub fn show_count(&self) -> usize {
        self.count(|e| matches!(e, UiEvent::ShowLoading { .. }))
    }

    pub fn hide_count(&self) -> usize {
        self.count(|e| matches!(e, UiEvent::HideLoading))
    }

    pub fn toasts(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                UiEvent::Toast(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                UiEvent::NavigateTo(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn count(&self, predicate: impl Fn(&UiEvent) -> bool) -> usize {
        self.lock().iter().filter(|e| predicate(e)).count()
    }
}

impl LoadingIndicatorPort for RecordingUi {
    fn show(&self, title: &str, mask: bool) {
        self.record(UiEvent::ShowLoading {
            title: title.to_string(),
            mask,
        });
    }

    fn hide(&self) {
        self.record(UiEvent::HideLoading);
    }
}

impl NotifierPort for RecordingUi {
    fn toast(&self, message: &str) {
        self.record(UiEvent::Toast(message.to_string()));
    }
}

impl NavigatorPort for RecordingUi {
    fn navigate_to(&self, path: &str) {
        self.record(UiEvent::NavigateTo(path.to_string()));
    }
}
