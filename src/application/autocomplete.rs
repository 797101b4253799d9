//! 검색어 자동완성 컨트롤러.
//!
//! 입력 변경마다 디바운서를 재예약하고, 결과는 채널로 입력기에 전달한다.
//! 늦게 도착한 이전 응답이 최신 입력을 덮어쓸 수 있다(진행 중 요청은 취소하지 않음).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::application::debounce::Debouncer;
use crate::application::ports::CatalogApi;
use crate::domain::search::SuggestPolicy;

/// 추천 목록 갱신 이벤트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionUpdate {
    Show(Vec<String>),
    Hide,
}

pub struct Autocomplete {
    api: Arc<dyn CatalogApi>,
    policy: SuggestPolicy,
    debouncer: Debouncer,
    tx: UnboundedSender<SuggestionUpdate>,
}

impl Autocomplete {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        policy: SuggestPolicy,
        delay: Duration,
    ) -> (Self, UnboundedReceiver<SuggestionUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            api,
            policy,
            debouncer: Debouncer::new(delay),
            tx,
        };
        (controller, rx)
    }

    /// 키 입력 핸들러. 길이 검사까지 포함해 전체가 디바운스된다.
    pub fn input_changed(&mut self, raw: &str) {
        let raw = raw.to_string();
        let api = Arc::clone(&self.api);
        let policy = self.policy;
        let tx = self.tx.clone();

        self.debouncer.schedule(async move {
            let update = fetch_update(api.as_ref(), policy, &raw).await;
            // 입력기가 이미 닫혔으면 결과는 버린다.
            let _ = tx.send(update);
        });
    }

    /// 대기 중인 요청을 취소한다(입력 종료 시).
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

async fn fetch_update(api: &dyn CatalogApi, policy: SuggestPolicy, raw: &str) -> SuggestionUpdate {
    let Some(query) = policy.accept(raw) else {
        return SuggestionUpdate::Hide;
    };

    match api.suggest(query).await {
        Ok(titles) => {
            let titles = policy.limit(titles);
            if titles.is_empty() {
                SuggestionUpdate::Hide
            } else {
                SuggestionUpdate::Show(titles)
            }
        }
        Err(err) => {
            debug!(error = %err, "suggest request failed");
            SuggestionUpdate::Hide
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::error::ApiError;
    use crate::application::ports::ApiResult;
    use crate::domain::anime::{AnimeDetail, AnimeSummary, Character};
    use crate::domain::search::SearchQuery;
    use crate::domain::session::SessionToken;

    #[derive(Default)]
    struct SuggestOnly {
        calls: Mutex<Vec<String>>,
        titles: Vec<String>,
        fail: bool,
    }

    #[async_trait]
    impl CatalogApi for SuggestOnly {
        async fn trending(&self) -> ApiResult<Vec<AnimeSummary>> {
            unreachable!()
        }
        async fn search(
            &self,
            _query: &SearchQuery,
            _token: Option<&SessionToken>,
        ) -> ApiResult<Vec<AnimeSummary>> {
            unreachable!()
        }
        async fn suggest(&self, query: &str) -> ApiResult<Vec<String>> {
            self.calls.lock().unwrap().push(query.to_string());
            if self.fail {
                return Err(ApiError::Connection("down".into()));
            }
            Ok(self.titles.clone())
        }
        async fn anime(&self, _mal_id: u64) -> ApiResult<AnimeDetail> {
            unreachable!()
        }
        async fn characters(&self, _mal_id: u64) -> ApiResult<Vec<Character>> {
            unreachable!()
        }
    }

    fn titles(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Title {i}")).collect()
    }

    #[tokio::test]
    async fn short_input_hides_without_request() {
        let api = SuggestOnly::default();
        let update = fetch_update(&api, SuggestPolicy::default(), "  ab  ").await;
        assert_eq!(update, SuggestionUpdate::Hide);
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn shows_at_most_five_titles() {
        let api = SuggestOnly {
            titles: titles(8),
            ..Default::default()
        };
        let update = fetch_update(&api, SuggestPolicy::default(), " naruto ").await;
        assert_eq!(update, SuggestionUpdate::Show(titles(5)));
        assert_eq!(*api.calls.lock().unwrap(), vec!["naruto".to_string()]);
    }

    #[tokio::test]
    async fn empty_or_failed_response_hides() {
        let empty = SuggestOnly::default();
        assert_eq!(
            fetch_update(&empty, SuggestPolicy::default(), "zzz").await,
            SuggestionUpdate::Hide
        );

        let failing = SuggestOnly {
            fail: true,
            ..Default::default()
        };
        assert_eq!(
            fetch_update(&failing, SuggestPolicy::default(), "zzz").await,
            SuggestionUpdate::Hide
        );
    }

    #[tokio::test(start_paused = true)]
    async fn keystrokes_within_window_issue_one_request() {
        let api = Arc::new(SuggestOnly {
            titles: titles(2),
            ..Default::default()
        });
        let (mut autocomplete, mut rx) = Autocomplete::new(
            api.clone(),
            SuggestPolicy::default(),
            Duration::from_millis(300),
        );

        for typed in ["one", "one ", "one p", "one pi"] {
            autocomplete.input_changed(typed);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        let update = rx.recv().await.unwrap();
        assert_eq!(update, SuggestionUpdate::Show(titles(2)));
        assert_eq!(*api.calls.lock().unwrap(), vec!["one pi".to_string()]);
    }
}
