pub mod credential_provider;
pub mod notice_sink;
pub mod product_gateway;

pub use credential_provider::CredentialProvider;
pub use notice_sink::NoticeSink;
pub use product_gateway::ProductGateway;
