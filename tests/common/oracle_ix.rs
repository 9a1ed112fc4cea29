use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

pub const STATE_SEED: &[u8] = b"state_account";
pub const ORACLE_INFO_SEED: &[u8] = b"oracle_info";

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_fact_oracle::ID)
}

pub fn state_pda() -> Pubkey {
    Pubkey::find_program_address(&[STATE_SEED], &program_id()).0
}

pub fn oracle_info_pda() -> Pubkey {
    Pubkey::find_program_address(&[ORACLE_INFO_SEED], &program_id()).0
}

/// Sample app identity used across tests.
pub fn sample_app_info() -> ([u8; 32], u8, [u8; 32]) {
    let group_x = [0x42u8; 32];
    let parity = 1u8;
    let mut app_id = [0u8; 32];
    app_id[31] = 7; // big-endian app id 7
    (group_x, parity, app_id)
}

pub fn initialize(
    payer: &Pubkey,
    owner: &Pubkey,
    group_x: [u8; 32],
    parity: u8,
    app_id: [u8; 32],
    verifier_program: &Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(1 + 129);
    data.push(0);
    data.extend_from_slice(&owner.to_bytes());
    data.extend_from_slice(&group_x);
    data.push(parity);
    data.extend_from_slice(&app_id);
    data.extend_from_slice(&verifier_program.to_bytes());

    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(state_pda(), false),
            AccountMeta::new(oracle_info_pda(), false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(solana_system_interface::program::id(), false),
        ],
        data,
    }
}

pub fn set_outcome(
    user: &Pubkey,
    verifier_program: &Pubkey,
    outcome: bool,
    request_id: [u8; 32],
    signature: [u8; 32],
    nonce: [u8; 32],
) -> Instruction {
    let mut data = Vec::with_capacity(1 + 97);
    data.push(1);
    data.push(outcome as u8);
    data.extend_from_slice(&request_id);
    data.extend_from_slice(&signature);
    data.extend_from_slice(&nonce);

    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(oracle_info_pda(), false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(*verifier_program, false),
            AccountMeta::new_readonly(solana_system_interface::program::id(), false),
        ],
        data,
    }
}

pub fn set_verifier(
    owner: &Pubkey,
    group_x: [u8; 32],
    parity: u8,
    app_id: [u8; 32],
    verifier_program: &Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(1 + 97);
    data.push(2);
    data.extend_from_slice(&group_x);
    data.push(parity);
    data.extend_from_slice(&app_id);
    data.extend_from_slice(&verifier_program.to_bytes());

    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(state_pda(), false),
            AccountMeta::new(oracle_info_pda(), false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data,
    }
}

pub fn transfer_ownership(owner: &Pubkey, new_owner: &Pubkey) -> Instruction {
    let mut data = Vec::with_capacity(1 + 32);
    data.push(3);
    data.extend_from_slice(&new_owner.to_bytes());

    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(state_pda(), false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data,
    }
}
