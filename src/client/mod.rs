//! Remote access to Make scenario listings and interfaces
//!
//! Pages are requested strictly one after another: the offset of the next
//! page is only known once the previous page has arrived.

pub mod make;

pub use make::MakeClient;

use crate::config::FetchOptions;
use crate::error::{Make2OasError, Result};
use crate::models::{Scenario, ScenarioInterface};
use std::future::Future;

/// Anything that can serve scenario pages and interfaces
pub trait ScenarioSource {
    /// Fetch at most `limit` scenarios starting at `offset`, newest first
    fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Scenario>>> + Send;

    /// Fetch the declared inputs and outputs of one scenario
    fn fetch_interface(
        &self,
        scenario_id: i64,
    ) -> impl Future<Output = Result<ScenarioInterface>> + Send;
}

/// Fetch every scenario reachable from the listing endpoint.
///
/// Stops on the first page shorter than `page_size`. Any failed page aborts
/// the whole fetch and nothing accumulated so far is returned.
pub async fn fetch_all_scenarios<S: ScenarioSource>(
    source: &S,
    options: FetchOptions,
) -> Result<Vec<Scenario>> {
    if options.page_size == 0 {
        return Err(Make2OasError::ValidationError(
            "Page size must be at least 1".to_string(),
        ));
    }
    if options.max_pages == 0 {
        return Err(Make2OasError::ValidationError(
            "Page limit must be at least 1".to_string(),
        ));
    }

    let mut scenarios = Vec::new();
    let mut offset = 0;
    let mut pages = 0;

    loop {
        let page = source.fetch_page(offset, options.page_size).await?;
        pages += 1;

        let received = page.len();
        tracing::debug!(offset, received, "Fetched scenario page");

        scenarios.extend(page);
        offset += received;

        if received < options.page_size {
            break;
        }
        if pages >= options.max_pages {
            return Err(Make2OasError::FetchExhausted {
                pages,
                page_size: options.page_size,
            });
        }
    }

    tracing::info!(pages, total = scenarios.len(), "Fetched scenario listing");
    Ok(scenarios)
}

/// Fetch every scenario and keep the on-demand ones
pub async fn list_on_demand_scenarios<S: ScenarioSource>(
    source: &S,
    options: FetchOptions,
) -> Result<Vec<Scenario>> {
    let scenarios = fetch_all_scenarios(source, options).await?;
    Ok(scenarios
        .into_iter()
        .filter(Scenario::is_on_demand)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serves pages of the given sizes in order, then empty pages
    struct FakeSource {
        page_sizes: Vec<usize>,
        fail_at_request: Option<usize>,
        offsets: Mutex<Vec<usize>>,
    }

    impl FakeSource {
        fn new(page_sizes: Vec<usize>) -> Self {
            Self {
                page_sizes,
                fail_at_request: None,
                offsets: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<usize> {
            self.offsets.lock().unwrap().clone()
        }
    }

    impl ScenarioSource for FakeSource {
        async fn fetch_page(&self, offset: usize, _limit: usize) -> Result<Vec<Scenario>> {
            let request = {
                let mut offsets = self.offsets.lock().unwrap();
                offsets.push(offset);
                offsets.len() - 1
            };

            if self.fail_at_request == Some(request) {
                return Err(Make2OasError::RemoteListingFailed {
                    status: 500,
                    offset,
                    message: "boom".to_string(),
                });
            }

            let size = self.page_sizes.get(request).copied().unwrap_or(0);
            Ok((0..size)
                .map(|i| {
                    let id = (offset + i) as i64;
                    let scheduling = if id % 2 == 0 { "on-demand" } else { "indefinitely" };
                    Scenario::new(id, format!("Scenario {id}")).with_scheduling(scheduling)
                })
                .collect())
        }

        async fn fetch_interface(&self, _scenario_id: i64) -> Result<ScenarioInterface> {
            Ok(ScenarioInterface::default())
        }
    }

    fn options(page_size: usize) -> FetchOptions {
        FetchOptions {
            page_size,
            max_pages: 10,
        }
    }

    #[tokio::test]
    async fn test_accumulates_until_short_page() {
        let source = FakeSource::new(vec![100, 100, 37]);
        let scenarios = fetch_all_scenarios(&source, options(100)).await.unwrap();

        assert_eq!(scenarios.len(), 237);
        assert_eq!(source.requests(), vec![0, 100, 200]);
        assert_eq!(scenarios[236].id, 236);
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let source = FakeSource::new(vec![]);
        let scenarios = fetch_all_scenarios(&source, options(100)).await.unwrap();

        assert!(scenarios.is_empty());
        assert_eq!(source.requests(), vec![0]);
    }

    #[tokio::test]
    async fn test_exact_multiple_needs_trailing_empty_page() {
        let source = FakeSource::new(vec![5, 5]);
        let scenarios = fetch_all_scenarios(&source, options(5)).await.unwrap();

        assert_eq!(scenarios.len(), 10);
        assert_eq!(source.requests(), vec![0, 5, 10]);
    }

    #[tokio::test]
    async fn test_failure_discards_partial_results() {
        let mut source = FakeSource::new(vec![5, 5, 5]);
        source.fail_at_request = Some(1);

        let err = fetch_all_scenarios(&source, options(5)).await.unwrap_err();
        match err {
            Make2OasError::RemoteListingFailed { status, offset, .. } => {
                assert_eq!(status, 500);
                assert_eq!(offset, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(source.requests(), vec![0, 5]);
    }

    #[tokio::test]
    async fn test_never_ending_listing_is_exhausted() {
        let source = FakeSource::new(vec![2; 50]);
        let err = fetch_all_scenarios(
            &source,
            FetchOptions {
                page_size: 2,
                max_pages: 3,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Make2OasError::FetchExhausted {
                pages: 3,
                page_size: 2
            }
        ));
        assert_eq!(source.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_zero_page_size_is_rejected() {
        let source = FakeSource::new(vec![]);
        assert!(fetch_all_scenarios(&source, options(0)).await.is_err());
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_zero_page_limit_is_rejected() {
        let source = FakeSource::new(vec![5]);
        let err = fetch_all_scenarios(
            &source,
            FetchOptions {
                page_size: 5,
                max_pages: 0,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Make2OasError::ValidationError(_)));
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_on_demand_filter_runs_after_pagination() {
        let source = FakeSource::new(vec![4, 3]);
        let scenarios = list_on_demand_scenarios(&source, options(4)).await.unwrap();

        let ids: Vec<i64> = scenarios.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 2, 4, 6]);
    }
}
