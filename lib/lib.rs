/// Chess domain types.
pub mod chess;
/// Material scoring.
pub mod score;
