use uuid::Uuid;

use crate::error::{Error, ErrorCode, Result};
use crate::validation::ID_LENGTH;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const MAX_ATTEMPTS: usize = 8;

pub fn generate_id() -> String {
    encode_base36(Uuid::new_v4().as_u128())
}

pub fn generate_unique_id(mut exists: impl FnMut(&str) -> Result<bool>) -> Result<String> {
    for _ in 0..MAX_ATTEMPTS {
        let id = generate_id();
        if !exists(&id)? {
            return Ok(id);
        }
        log::warn!("identifier collision on {id}, retrying");
    }
    Err(Error::new(ErrorCode::SystemError, "Could not allocate a unique identifier"))
}

fn encode_base36(mut value: u128) -> String {
    let mut id = String::with_capacity(ID_LENGTH);
    for _ in 0..ID_LENGTH {
        id.push(char::from(ALPHABET[(value % 36) as usize]));
        value /= 36;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_valid_id;

    #[test]
    fn test_generated_ids_are_well_formed() {
        for _ in 0..100 {
            assert!(is_valid_id(&generate_id()));
        }
    }

    #[test]
    fn test_encode_base36() {
        assert_eq!(encode_base36(0), "00000000");
        assert_eq!(encode_base36(35), "z0000000");
        assert_eq!(encode_base36(36), "01000000");
    }

    #[test]
    fn test_unique_id_retries_on_collision() {
        let mut calls = 0;
        let id = generate_unique_id(|_| {
            calls += 1;
            Ok(calls < 3)
        }).unwrap();
        assert_eq!(calls, 3);
        assert!(is_valid_id(&id));
    }

    #[test]
    fn test_unique_id_gives_up() {
        let err = generate_unique_id(|_| Ok(true)).unwrap_err();
        assert!(err.is(ErrorCode::SystemError));
    }
}
