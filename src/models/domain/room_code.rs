use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const ROOM_CODE_LENGTH: usize = 6;
const ROOM_CODE_MIN: u32 = 100_000;
const ROOM_CODE_MAX: u32 = 999_999;

/// Six-digit code students type to join a quiz.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Draws a code uniformly from 100000..=999999.
    pub fn random() -> Self {
        let value = rand::thread_rng().gen_range(ROOM_CODE_MIN..=ROOM_CODE_MAX);
        RoomCode(value.to_string())
    }

    /// Accepts only six ASCII digits without a leading zero.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let well_formed = raw.len() == ROOM_CODE_LENGTH
            && raw.bytes().all(|b| b.is_ascii_digit())
            && !raw.starts_with('0');
        well_formed.then(|| RoomCode(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_codes_are_six_digits_in_range() {
        for _ in 0..1_000 {
            let code = RoomCode::random();
            assert_eq!(code.as_str().len(), ROOM_CODE_LENGTH);
            let value: u32 = code.as_str().parse().expect("code should be numeric");
            assert!((ROOM_CODE_MIN..=ROOM_CODE_MAX).contains(&value));
        }
    }

    #[test]
    fn parse_accepts_well_formed_codes() {
        assert_eq!(RoomCode::parse("123456").map(|c| c.to_string()), Some("123456".to_string()));
        assert_eq!(RoomCode::parse(" 654321 ").map(|c| c.to_string()), Some("654321".to_string()));
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert!(RoomCode::parse("12345").is_none());
        assert!(RoomCode::parse("1234567").is_none());
        assert!(RoomCode::parse("12a456").is_none());
        assert!(RoomCode::parse("012345").is_none());
        assert!(RoomCode::parse("").is_none());
    }

    #[test]
    fn room_code_serializes_as_plain_string() {
        let code = RoomCode::parse("246810").expect("valid code");
        assert_eq!(serde_json::to_string(&code).expect("serialize"), "\"246810\"");
    }
}
