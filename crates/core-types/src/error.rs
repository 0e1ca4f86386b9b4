use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid month number {0}: must be in 1..=12")]
    InvalidMonth(u32),
}
