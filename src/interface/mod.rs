//! 사용자 입출력 계층.

pub mod cli;
