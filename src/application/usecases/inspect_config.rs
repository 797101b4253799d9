//! `config` 명령: 탐색 경로와 적용 설정 확인.

use anyhow::Result;

use crate::application::ports::ConfigRepository;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 탐색/로딩 경로, 원본 값, 기본값을 채운 적용 값을 pretty JSON으로 돌려준다.
    pub fn execute(&self) -> Result<String> {
        self.config_repo.inspect_pretty_json()
    }
}
