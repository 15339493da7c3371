pub mod credential;
pub mod memory;
pub mod post;

pub use credential::PostgresCredentialRepository;
pub use memory::InMemoryCredentialRepository;
pub use memory::InMemoryPostRepository;
pub use post::PostgresPostRepository;
