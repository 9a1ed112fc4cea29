use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod initialize;
pub use initialize::*;

pub mod set_outcome;
pub use set_outcome::*;

pub mod set_verifier;
pub use set_verifier::*;

pub mod transfer_ownership;
pub use transfer_ownership::*;

#[cfg(feature = "std")]
pub mod wire;

#[repr(u8)]
#[derive(ShankInstruction)]
pub enum OracleInstruction {
    /// Create and populate the state and oracle info PDAs.
    #[account(0, writable, name = "state_account", desc = "Admin state PDA")]
    #[account(1, writable, name = "oracle_info", desc = "Oracle info PDA")]
    #[account(2, writable, signer, name = "owner", desc = "Funding signer")]
    #[account(3, name = "system_program", desc = "System program")]
    Initialize,

    /// Record an outcome after the verifier program accepts the signature.
    #[account(0, name = "oracle_info", desc = "Oracle info PDA")]
    #[account(1, writable, signer, name = "user", desc = "Fee payer for verification")]
    #[account(2, name = "verifier_program", desc = "Schnorr verifier program")]
    #[account(3, name = "system_program", desc = "System program")]
    SetOutcome,

    /// Owner-gated replacement of the app info and verifier binding.
    #[account(0, name = "state_account", desc = "Admin state PDA")]
    #[account(1, writable, name = "oracle_info", desc = "Oracle info PDA")]
    #[account(2, signer, name = "owner", desc = "Current owner")]
    SetVerifier,

    /// Owner-gated replacement of the stored owner key.
    #[account(0, writable, name = "state_account", desc = "Admin state PDA")]
    #[account(1, signer, name = "owner", desc = "Current owner")]
    TransferOwnership,
}

impl TryFrom<&u8> for OracleInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(OracleInstruction::Initialize),
            1 => Ok(OracleInstruction::SetOutcome),
            2 => Ok(OracleInstruction::SetVerifier),
            3 => Ok(OracleInstruction::TransferOwnership),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
