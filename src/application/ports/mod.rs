//! Application Ports - 出站端口定义
//!
//! 定义网关与宿主环境（存储、界面、网络）之间的抽象接口

mod credential_store;
mod transport;
mod ui;

pub use credential_store::{CredentialStorePort, StorageError};
pub use transport::{HttpTransportPort, TransportError, TransportRequest, TransportResponse};
pub use ui::{LoadingIndicatorPort, NavigatorPort, NotifierPort};
