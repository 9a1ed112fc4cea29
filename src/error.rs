use pinocchio::program_error::ProgramError;

// internal error enum; discriminants are ABI, do not reorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum OracleError {
    AlreadyInitialized = 0x10,
    NotInitialized = 0x11,
    OwnerMismatch = 0x12,
    VerifierMismatch = 0x13,
    InvalidParity = 0x14,
}

// map internal errors to standard program error
pub fn to_program_error(err: OracleError) -> ProgramError {
    ProgramError::Custom(err as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            to_program_error(OracleError::AlreadyInitialized),
            ProgramError::Custom(0x10)
        );
        assert_eq!(
            to_program_error(OracleError::VerifierMismatch),
            ProgramError::Custom(0x13)
        );
    }
}
