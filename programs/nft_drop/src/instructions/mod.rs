pub mod claim;
pub mod claim_and_create_tba;
pub mod close_wallet_claim_status;
pub mod create_drop;
pub mod lazy_mint;
pub mod set_claim_conditions;
pub mod set_global_base_uri;
pub mod set_quantity_per_claim;

pub use claim::*;
pub use claim_and_create_tba::*;
pub use close_wallet_claim_status::*;
pub use create_drop::*;
pub use lazy_mint::*;
pub use set_claim_conditions::*;
pub use set_global_base_uri::*;
pub use set_quantity_per_claim::*;
