//! 사용자 동작 하나당 하나의 유스케이스.
//! 모든 유스케이스는 포트 참조를 빌려 `execute`로 실행한다.

pub mod auth;
pub mod catalog;
pub mod detail;
pub mod favorites;
pub mod inspect_config;
pub mod profile;

#[cfg(test)]
pub(crate) mod fakes;
