use thiserror::Error;

pub const MASK_CHAR: char = '*';
const VISIBLE_SUFFIX: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    #[error("card number must be at least 4 characters, got {0}")]
    InvalidInput(usize),
}

pub fn mask_card_number(card_number: &str) -> Result<String, MaskError> {
    let len = card_number.chars().count();
    if len < VISIBLE_SUFFIX {
        return Err(MaskError::InvalidInput(len));
    }

    let hidden = len - VISIBLE_SUFFIX;
    Ok(card_number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { MASK_CHAR } else { c })
        .collect())
}
