//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod persistence;

pub use adapters::{ReqwestTransport, ReqwestTransportConfig, RefCountedIndicator, TracingUi};
pub use persistence::{open_credential_store, InMemoryCredentialStore, SledCredentialStore};
