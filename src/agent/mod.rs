mod client;
mod normalize;
mod session;
mod types;

pub use client::{AgentCoreClient, AgentRuntimeClient};
pub use normalize::{EMPTY_RESPONSE_PLACEHOLDER, RESPONSE_FIELDS, normalize_response};
pub use session::generate_session_id;
pub use types::{JSON_CONTENT_TYPE, RuntimeInvocation};
