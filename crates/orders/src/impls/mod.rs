mod none;
pub use none::NoProvider;

mod rpc;
pub use rpc::RpcReader;
