//! Domain layer
//! 카탈로그 엔티티, 세션/폼 값 객체, 레이아웃 상태 머신을 외부 의존성 없이 표현한다.

pub mod anime;
pub mod policy;
pub mod search;
pub mod session;
pub mod view;
