pub mod batch_state;
pub mod claim_state;
pub mod drop_state;
pub mod nonce_state;
pub mod token_state;

pub use batch_state::*;
pub use claim_state::*;
pub use drop_state::*;
pub use nonce_state::*;
pub use token_state::*;
