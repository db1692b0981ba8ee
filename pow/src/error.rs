use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowError {
    #[error("mining cancelled before a solution was found")]
    Cancelled,

    #[error("difficulty {difficulty} demands more set bits than a 256-bit digest has")]
    UnsatisfiableDifficulty { difficulty: u32 },

    #[error("config error: {0}")]
    Config(String),
}
