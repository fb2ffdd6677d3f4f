//! The application's route table.
//!
//! Declared once at startup; paths and names must be unique (checked at
//! router construction). Every loader defers view construction until the
//! first navigation to its path.

use super::{RouteEntry, View, ViewFuture};
use crate::store::HistoryKind;
use crate::ui::views::history::HistoryOverview;
use crate::ui::views::home::HomeView;
use crate::ui::views::info::InfoView;
use crate::ui::views::transcript::TranscriptView;

pub fn routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", "home", false, || {
            boxed(async { Ok(Box::new(HomeView::new()) as Box<dyn View>) })
        }),
        RouteEntry::new("/make-prompt", "make-prompt", true, || {
            boxed(async {
                Ok(Box::new(TranscriptView::new(HistoryKind::MakePrompt)) as Box<dyn View>)
            })
        }),
        RouteEntry::new("/ai-answer", "ai-answer", true, || {
            boxed(async {
                Ok(Box::new(TranscriptView::new(HistoryKind::AiAnswer)) as Box<dyn View>)
            })
        }),
        RouteEntry::new("/ai-talk", "ai-talk", true, || {
            boxed(async {
                Ok(Box::new(TranscriptView::new(HistoryKind::AiTalk)) as Box<dyn View>)
            })
        }),
        RouteEntry::new("/chatgpt", "chatgpt", true, || {
            boxed(async { Ok(Box::new(InfoView::chatgpt()) as Box<dyn View>) })
        }),
        RouteEntry::new("/ai-rag", "ai-rag", true, || {
            boxed(async { Ok(Box::new(InfoView::ai_rag()) as Box<dyn View>) })
        }),
        RouteEntry::new("/history", "history", true, || {
            boxed(async { Ok(Box::new(HistoryOverview::new()) as Box<dyn View>) })
        }),
        // Drill-down into one list, e.g. /history/ai-talk.
        RouteEntry::new("/history/:kind", "history-detail", true, || {
            boxed(async { Ok(Box::new(HistoryOverview::new()) as Box<dyn View>) })
        }),
    ]
}

fn boxed(
    fut: impl std::future::Future<Output = Result<Box<dyn View>, super::ViewLoadError>>
        + Send
        + 'static,
) -> ViewFuture {
    Box::pin(fut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;

    #[test]
    fn table_satisfies_router_invariants() {
        let router = Router::new(routes()).unwrap();
        assert_eq!(router.entries().len(), 8);
    }

    #[test]
    fn every_declared_path_resolves() {
        let router = Router::new(routes()).unwrap();
        for path in [
            "/",
            "/make-prompt",
            "/ai-answer",
            "/ai-talk",
            "/chatgpt",
            "/ai-rag",
            "/history",
        ] {
            assert!(router.resolve(path).is_ok(), "path {} must resolve", path);
        }
    }

    #[test]
    fn every_route_but_home_forwards_params() {
        for entry in routes() {
            let expect = entry.name != "home";
            assert_eq!(entry.pass_params, expect, "route {}", entry.name);
        }
    }

    #[test]
    fn history_detail_forwards_the_kind() {
        let router = Router::new(routes()).unwrap();
        // The static overview wins over the pattern.
        assert_eq!(router.resolve("/history").unwrap().name, "history");

        let resolved = router.resolve("/history/ai-talk").unwrap();
        assert_eq!(resolved.name, "history-detail");
        assert_eq!(
            resolved.params.get("kind").map(String::as_str),
            Some("ai-talk")
        );
    }
}
