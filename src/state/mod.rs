
pub mod accounts;     // instruction payload structs + parse
pub mod oracle_info;  // AppInfo, GroupPubKey, SchnorrSign, OracleInfo
pub mod state;        // OracleState

// Re-export the types so everyone can `use crate::state::{...}`.
pub use accounts::{InitializeData, SetOutcomeData, SetVerifierData};
pub use oracle_info::{AppInfo, GroupPubKey, OracleInfo, RequestId, SchnorrSign};
pub use state::OracleState;
