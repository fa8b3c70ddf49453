//! UI Ports - 宿主界面能力抽象
//!
//! 加载提示、轻提示、页面跳转。网关只依赖这些接口，不依赖具体 UI 宿主

/// 加载提示
pub trait LoadingIndicatorPort: Send + Sync {
    /// 显示加载提示；`mask` 为 true 时阻止用户操作
    fn show(&self, title: &str, mask: bool);

    fn hide(&self);
}

/// 轻提示（toast）
pub trait NotifierPort: Send + Sync {
    fn toast(&self, message: &str);
}

/// 页面导航
pub trait NavigatorPort: Send + Sync {
    fn navigate_to(&self, path: &str);
}
