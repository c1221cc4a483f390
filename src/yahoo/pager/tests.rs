//! Unit tests for players pagination

use super::*;
use crate::yahoo::xml::YAHOO_NS;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Serves canned pages in order and records the offsets requested.
struct FakePages {
    pages: Mutex<VecDeque<Result<String>>>,
    starts: Mutex<Vec<u32>>,
}

impl FakePages {
    fn new(pages: Vec<Result<String>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            starts: Mutex::new(Vec::new()),
        }
    }

    fn starts(&self) -> Vec<u32> {
        self.starts.lock().unwrap().clone()
    }
}

impl PageSource for &FakePages {
    async fn fetch_page(&self, start: u32) -> Result<String> {
        self.starts.lock().unwrap().push(start);
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request for start={start}"))
    }
}

fn page(names: &[&str]) -> Result<String> {
    let players: String = names
        .iter()
        .map(|n| {
            format!(
                "<player><name><full>{n}</full></name>\
                 <editorial_team_full_name>T</editorial_team_full_name>\
                 <display_position>C</display_position>\
                 <player_stats><stats><stat><stat_id>1</stat_id><value>5</value></stat></stats></player_stats>\
                 </player>"
            )
        })
        .collect();
    Ok(format!(
        r#"<fantasy_content xmlns="{YAHOO_NS}"><league><players>{players}</players></league></fantasy_content>"#
    ))
}

fn failure() -> Result<String> {
    Err(YahooError::UnexpectedStatus {
        status: 999,
        url: "page".to_string(),
    })
}

fn schema() -> StatSchema {
    [("Goals", "1")].into_iter().collect()
}

#[cfg(test)]
mod pagination_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_offsets_advance_until_empty_page() {
        let source = FakePages::new(vec![page(&["A", "B"]), page(&["C"]), page(&[])]);
        let schema = schema();

        let harvest = collect_rows(PlayerPager::new(&source, &schema)).await;

        assert_eq!(source.starts(), vec![0, 25, 50]);
        assert_eq!(harvest.rows, vec!["A,T,C,5", "B,T,C,5", "C,T,C,5"]);
        assert_eq!(harvest.requests, 3);
        assert!(harvest.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_first_page() {
        let source = FakePages::new(vec![page(&[])]);
        let schema = schema();

        let harvest = collect_rows(PlayerPager::new(&source, &schema)).await;

        assert_eq!(source.starts(), vec![0]);
        assert!(harvest.rows.is_empty());
        assert!(harvest.is_complete());
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_keeps_earlier_pages() {
        let source = FakePages::new(vec![page(&["A"]), page(&["B"]), failure()]);
        let schema = schema();

        let harvest = collect_rows(PlayerPager::new(&source, &schema)).await;

        assert_eq!(source.starts(), vec![0, 25, 50]);
        assert_eq!(harvest.rows, vec!["A,T,C,5", "B,T,C,5"]);
        assert!(matches!(
            harvest.error,
            Some(YahooError::UnexpectedStatus { status: 999, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_page_ends_pagination() {
        let source = FakePages::new(vec![page(&["A"]), Ok("<fantasy_content>".to_string())]);
        let schema = schema();

        let harvest = collect_rows(PlayerPager::new(&source, &schema)).await;

        assert_eq!(harvest.rows, vec!["A,T,C,5"]);
        assert!(matches!(harvest.error, Some(YahooError::Xml(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pager_is_fused_after_end() {
        let source = FakePages::new(vec![page(&[])]);
        let schema = schema();
        let mut pager = PlayerPager::new(&source, &schema);

        assert!(pager.next_page().await.is_none());
        assert!(pager.next_page().await.is_none());
        assert_eq!(source.starts(), vec![0]);
        assert_eq!(pager.start(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pager_is_fused_after_error() {
        let source = FakePages::new(vec![failure()]);
        let schema = schema();
        let mut pager = PlayerPager::new(&source, &schema);

        assert!(matches!(pager.next_page().await, Some(Err(_))));
        assert!(pager.next_page().await.is_none());
        assert_eq!(pager.requests(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_between_requests() {
        let source = FakePages::new(vec![page(&["A"]), page(&["B"]), page(&[])]);
        let schema = schema();
        let started = tokio::time::Instant::now();

        collect_rows(PlayerPager::new(&source, &schema)).await;

        assert!(started.elapsed() >= PAGE_DELAY * 2);
        assert!(started.elapsed() < PAGE_DELAY * 3);
    }
}
