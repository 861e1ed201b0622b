pub mod apixaban;
pub mod dabigatran;
pub mod edoxaban;
pub mod rivaroxaban;
