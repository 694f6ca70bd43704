pub mod dispatcher;
pub mod dispatcher_tests;

pub use dispatcher::CallReport;
pub use dispatcher::Dispatcher;
pub use dispatcher::EngineError;
