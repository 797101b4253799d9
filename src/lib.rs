//! anishelf library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::usecases::inspect_config::InspectConfigUseCase;
use infrastructure::adapters::JsonConfigRepository;

/// 설정 점검 JSON 출력용 함수.
/// HTTP 클라이언트를 만들지 않으므로 잘못된 base URL도 그대로 확인할 수 있다.
pub fn inspect_config_pretty_json() -> Result<String> {
    let config_repo = JsonConfigRepository;
    InspectConfigUseCase {
        config_repo: &config_repo,
    }
    .execute()
}
