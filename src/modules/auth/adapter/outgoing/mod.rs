pub mod security;
pub mod session_store_memory;
pub mod session_store_redis;

pub use session_store_memory::InMemorySessionStore;
pub use session_store_redis::RedisSessionStore;
