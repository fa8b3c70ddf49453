//! Tracing UI - 无界面宿主
//!
//! 把加载提示、轻提示、页面跳转输出为日志，用于命令行与服务端环境

use crate::application::ports::{LoadingIndicatorPort, NavigatorPort, NotifierPort};

#[derive(Debug, Default)]
pub struct TracingUi;

impl TracingUi {
    pub fn new() -> Self {
        Self
    }
}

impl LoadingIndicatorPort for TracingUi {
    fn show(&self, title: &str, mask: bool) {
        tracing::debug!(title = %title, mask = mask, "Loading shown");
    }

    fn hide(&self) {
        tracing::debug!("Loading hidden");
    }
}

impl NotifierPort for TracingUi {
    fn toast(&self, message: &str) {
        tracing::info!(message = %message, "Toast");
    }
}

impl NavigatorPort for TracingUi {
    fn navigate_to(&self, path: &str) {
        tracing::info!(path = %path, "Navigate");
    }
}
