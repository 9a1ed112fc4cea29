use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::{to_program_error, OracleError};
use crate::state::oracle_info::{AppInfo, GroupPubKey, RequestId, SchnorrSign};

/// Initialize instruction data
///
/// Raw layout: owner (32) || group x (32) || parity (1) || app id (32)
/// || verifier program (32)
#[derive(Debug, PartialEq, Eq)]
pub struct InitializeData {
    pub owner: Pubkey,
    pub app_info: AppInfo,
    pub verifier_program: Pubkey,
}

impl InitializeData {
    pub const LEN: usize = 32 + 33 + 32 + 32;

    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        if payload.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let owner =
            Pubkey::try_from(&payload[0..32]).map_err(|_| ProgramError::InvalidInstructionData)?;
        let app_info = parse_app_info(&payload[32..97])?;
        let verifier_program = Pubkey::try_from(&payload[97..129])
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        Ok(Self {
            owner,
            app_info,
            verifier_program,
        })
    }
}

/// SetOutcome instruction data
///
/// Raw layout: outcome (1) || request id (32) || signature (32) || nonce (32)
#[derive(Debug, PartialEq, Eq)]
pub struct SetOutcomeData {
    pub outcome: bool,
    pub request_id: RequestId,
    pub sign: SchnorrSign,
}

impl SetOutcomeData {
    pub const LEN: usize = 1 + 32 + 32 + 32;

    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        if payload.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let outcome = match payload[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidInstructionData),
        };
        let mut request_id = [0u8; 32];
        request_id.copy_from_slice(&payload[1..33]);
        let mut signature = [0u8; 32];
        signature.copy_from_slice(&payload[33..65]);
        let mut nonce = [0u8; 32];
        nonce.copy_from_slice(&payload[65..97]);
        Ok(Self {
            outcome,
            request_id,
            sign: SchnorrSign { signature, nonce },
        })
    }
}

/// SetVerifier instruction data
///
/// Raw layout: group x (32) || parity (1) || app id (32) || verifier program (32)
#[derive(Debug, PartialEq, Eq)]
pub struct SetVerifierData {
    pub app_info: AppInfo,
    pub verifier_program: Pubkey,
}

impl SetVerifierData {
    pub const LEN: usize = 33 + 32 + 32;

    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        if payload.len() != Self::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let app_info = parse_app_info(&payload[0..65])?;
        let verifier_program = Pubkey::try_from(&payload[65..97])
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        Ok(Self {
            app_info,
            verifier_program,
        })
    }
}

// 65 bytes: group x || parity || app id
fn parse_app_info(data: &[u8]) -> Result<AppInfo, ProgramError> {
    debug_assert_eq!(data.len(), 65);
    let mut x = [0u8; 32];
    x.copy_from_slice(&data[0..32]);
    let parity = data[32];
    if parity > 1 {
        return Err(to_program_error(OracleError::InvalidParity));
    }
    let mut app_id = [0u8; 32];
    app_id.copy_from_slice(&data[33..65]);
    Ok(AppInfo {
        group_pub_key: GroupPubKey { x, parity },
        app_id,
    })
}
