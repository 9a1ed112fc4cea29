use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::{to_program_error, OracleError};

/// Opaque identifier of an oracle request.
pub type RequestId = [u8; 32];

/// Compressed secp256k1 group key of the signing oracle network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPubKey {
    /// x coordinate, big-endian
    pub x: [u8; 32],
    /// y parity, 0 or 1
    pub parity: u8,
}

/// Oracle application identity: signing group plus big-endian 256-bit app id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub group_pub_key: GroupPubKey,
    pub app_id: [u8; 32],
}

/// Schnorr attestation over an outcome message.
///
/// `nonce` is the nonce commitment address, left-padded to 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchnorrSign {
    pub signature: [u8; 32],
    pub nonce: [u8; 32],
}

/// Verifier binding, held at the `b"oracle_info"` PDA.
///
/// Layout: initialized flag, group x, parity, app id, verifier program key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleInfo {
    pub initialized: bool,
    pub app_info: AppInfo,
    pub verifier_program: Pubkey,
}

impl OracleInfo {
    /// The fixed number of bytes used to serialize the oracle info account
    pub const fn size_of() -> usize {
        1 + 32 + 1 + 32 + 32
    }

    pub fn deserialize(data: &[u8]) -> Result<Self, ProgramError> {
        // oracle info accounts are created at exactly this size
        if data.len() != Self::size_of() {
            return Err(ProgramError::InvalidAccountData);
        }
        let initialized = match data[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };
        let mut x = [0u8; 32];
        x.copy_from_slice(&data[1..33]);
        let parity = data[33];
        if parity > 1 {
            return Err(to_program_error(OracleError::InvalidParity));
        }
        let mut app_id = [0u8; 32];
        app_id.copy_from_slice(&data[34..66]);
        let verifier_program =
            Pubkey::try_from(&data[66..98]).map_err(|_| ProgramError::InvalidAccountData)?;
        Ok(Self {
            initialized,
            app_info: AppInfo {
                group_pub_key: GroupPubKey { x, parity },
                app_id,
            },
            verifier_program,
        })
    }

    pub fn serialize(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        if data.len() < Self::size_of() {
            return Err(ProgramError::AccountDataTooSmall);
        }
        data[0] = self.initialized as u8;
        data[1..33].copy_from_slice(&self.app_info.group_pub_key.x);
        data[33] = self.app_info.group_pub_key.parity;
        data[34..66].copy_from_slice(&self.app_info.app_id);
        data[66..98].copy_from_slice(&self.verifier_program);
        Ok(())
    }
}
