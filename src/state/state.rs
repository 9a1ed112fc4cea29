use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

/// Admin state, held at the `b"state_account"` PDA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleState {
    pub initialized: bool,
    pub owner: Pubkey,
}

impl OracleState {
    /// The fixed number of bytes used to serialize the state account
    pub const fn size_of() -> usize {
        1 + 32
    }

    pub fn deserialize(data: &[u8]) -> Result<Self, ProgramError> {
        // state accounts are created at exactly this size
        if data.len() != Self::size_of() {
            return Err(ProgramError::InvalidAccountData);
        }
        let initialized = match data[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };
        let owner =
            Pubkey::try_from(&data[1..33]).map_err(|_| ProgramError::InvalidAccountData)?;
        Ok(Self { initialized, owner })
    }

    pub fn serialize(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        if data.len() < Self::size_of() {
            return Err(ProgramError::AccountDataTooSmall);
        }
        data[0] = self.initialized as u8;
        data[1..33].copy_from_slice(&self.owner);
        Ok(())
    }
}
