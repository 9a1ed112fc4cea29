//! Host-side bincode wire format for `OracleInstruction`.
//!
//! On-chain (`sbf`) builds only accept the single-byte discriminator
//! format; this module backs the std-only decode attempt in the
//! entrypoint.

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use serde::{Deserialize, Serialize};

use crate::error::{to_program_error, OracleError};
use crate::state;
use crate::state::{InitializeData, SetOutcomeData, SetVerifierData};

pub type WirePubkey = [u8; 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPubKey {
    pub x: [u8; 32],
    pub parity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub group_pub_key: GroupPubKey,
    pub app_id: [u8; 32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchnorrSign {
    pub signature: [u8; 32],
    pub nonce: [u8; 32],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleInstruction {
    Initialize {
        owner: WirePubkey,
        app_info: AppInfo,
        verifier_program: WirePubkey,
    },
    SetOutcome {
        outcome: bool,
        request_id: [u8; 32],
        sign: SchnorrSign,
    },
    SetVerifier {
        app_info: AppInfo,
        verifier_program: WirePubkey,
    },
    TransferOwnership {
        new_owner: WirePubkey,
    },
}

/// Handler arguments shared by the raw and wire decoders.
#[derive(Debug, PartialEq, Eq)]
pub enum Decoded {
    Initialize(InitializeData),
    SetOutcome(SetOutcomeData),
    SetVerifier(SetVerifierData),
    TransferOwnership(Pubkey),
}

pub fn try_decode(instruction_data: &[u8]) -> Option<OracleInstruction> {
    bincode::deserialize(instruction_data).ok()
}

impl OracleInstruction {
    pub fn into_args(self) -> Result<Decoded, ProgramError> {
        match self {
            OracleInstruction::Initialize {
                owner,
                app_info,
                verifier_program,
            } => Ok(Decoded::Initialize(InitializeData {
                owner,
                app_info: convert_app_info(app_info)?,
                verifier_program,
            })),
            OracleInstruction::SetOutcome {
                outcome,
                request_id,
                sign,
            } => Ok(Decoded::SetOutcome(SetOutcomeData {
                outcome,
                request_id,
                sign: state::SchnorrSign {
                    signature: sign.signature,
                    nonce: sign.nonce,
                },
            })),
            OracleInstruction::SetVerifier {
                app_info,
                verifier_program,
            } => Ok(Decoded::SetVerifier(SetVerifierData {
                app_info: convert_app_info(app_info)?,
                verifier_program,
            })),
            OracleInstruction::TransferOwnership { new_owner } => {
                Ok(Decoded::TransferOwnership(new_owner))
            }
        }
    }
}

fn convert_app_info(w: AppInfo) -> Result<state::AppInfo, ProgramError> {
    if w.group_pub_key.parity > 1 {
        return Err(to_program_error(OracleError::InvalidParity));
    }
    Ok(state::AppInfo {
        group_pub_key: state::GroupPubKey {
            x: w.group_pub_key.x,
            parity: w.group_pub_key.parity,
        },
        app_id: w.app_id,
    })
}
