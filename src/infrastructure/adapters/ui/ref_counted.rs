//! Ref-Counted Loading Indicator
//!
//! 网关按调用显示 / 隐藏加载提示，并发调用时先结束的调用会隐藏仍在进行的调用的提示。
//! 该装饰器把重叠的调用合并：第一个 show 才显示，最后一个 hide 才隐藏。

use std::sync::{Arc, Mutex};

use crate::application::ports::LoadingIndicatorPort;

pub struct RefCountedIndicator {
    inner: Arc<dyn LoadingIndicatorPort>,
    active: Mutex<usize>,
}

impl RefCountedIndicator {
    pub fn new(inner: Arc<dyn LoadingIndicatorPort>) -> Self {
        Self {
            inner,
            active: Mutex::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 当前未结束的调用数
    pub fn active(&self) -> usize {
        *self.active.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LoadingIndicatorPort for RefCountedIndicator {
    fn show(&self, title: &str, mask: bool) {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if *active == 0 {
            self.inner.show(title, mask);
        }
        *active += 1;
    }

    fn hide(&self) {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        match *active {
            0 => tracing::debug!("Unbalanced loading hide ignored"),
            1 => {
                *active = 0;
                self.inner.hide();
            }
            _ => *active -= 1,
        }
    }
}
