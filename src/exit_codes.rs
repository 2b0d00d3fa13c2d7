//! Exit code constants for the promptflow CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, name collision, unknown prompt)
//! - 2: Validation failure (missing step values)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, name collision, or unknown prompt.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a step was submitted with blank or absent values.
pub const VALIDATION_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
