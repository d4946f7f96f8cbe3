pub mod brush;
pub mod pointer;
pub mod rules;
