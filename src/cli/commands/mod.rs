//! CLI command implementations
//!
//! This module contains all CLI command implementations plus the shared
//! error-to-exit-code mapping.

pub mod export;
pub mod extract;
pub mod init;
pub mod settings;

use crate::domain::{PartexError, ServiceError};

/// Maps an error to the process exit code
///
/// 2 = input/configuration problem, 4 = service unreachable, 5 = service
/// or fatal failure.
pub fn exit_code(err: &PartexError) -> i32 {
    match err {
        PartexError::Input(_) | PartexError::Configuration(_) => 2,
        PartexError::Service(ServiceError::Transport(_)) => 4,
        PartexError::Service(_) => 5,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InputError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&PartexError::Input(InputError::EmptyInput)), 2);
        assert_eq!(
            exit_code(&PartexError::Configuration("bad".to_string())),
            2
        );
        assert_eq!(
            exit_code(&PartexError::Service(ServiceError::Transport(
                "down".to_string()
            ))),
            4
        );
        assert_eq!(
            exit_code(&PartexError::Service(ServiceError::Rejected(
                "bad id".to_string()
            ))),
            5
        );
        assert_eq!(exit_code(&PartexError::Io("x".to_string())), 5);
    }
}
