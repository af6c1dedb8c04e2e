pub mod errors;
pub mod node_id;
pub mod timestamp;

pub use errors::*;
pub use node_id::*;
pub use timestamp::*;
