use super::{Artifact, ArtifactSet, ArtifactSlot};

/// Last two ASCII digits of `reg_no` read as a decimal number.
///
/// Non-digits are ignored. With a single digit that digit is the value; with no
/// digits the value is `0`.
pub fn trailing_number(reg_no: &str) -> u8 {
    let digits: Vec<u8> = reg_no
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let tail = &digits[digits.len().saturating_sub(2)..];
    tail.iter().fold(0u8, |acc, d| acc * 10 + d)
}

pub fn select_slot(reg_no: &str) -> ArtifactSlot {
    if trailing_number(reg_no) % 2 == 1 {
        ArtifactSlot::A
    } else {
        ArtifactSlot::B
    }
}

pub fn select_artifact(reg_no: &str, artifacts: &ArtifactSet) -> Artifact {
    artifacts.get(select_slot(reg_no))
}
