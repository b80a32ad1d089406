//! Pure mapping from fetch state to what a panel shows.

use crate::fetch::FetchState;
use crate::resources::{Content, Resource};

/// Exactly one of the views a panel can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// Nothing requested yet, or a successful payload with nothing to show.
    Blank,
    Loading {
        message: &'static str,
    },
    /// Same for every error kind.
    Error {
        headline: &'static str,
        detail: &'static str,
        retry_label: &'static str,
    },
    Content {
        content: Content,
        retry_label: &'static str,
    },
}

impl PanelView {
    pub fn for_state<T: Resource>(state: &FetchState<T>) -> Self {
        let copy = T::copy();
        match state {
            FetchState::Idle => PanelView::Blank,
            FetchState::Loading => PanelView::Loading {
                message: copy.loading,
            },
            FetchState::Error(_) => PanelView::Error {
                headline: copy.error_headline,
                detail: copy.error_detail,
                retry_label: copy.error_retry,
            },
            FetchState::Success(data) => match data.content() {
                Some(content) => PanelView::Content {
                    content,
                    retry_label: copy.content_retry,
                },
                None => PanelView::Blank,
            },
        }
    }

    /// Label of the retry button, if this view offers one.
    pub fn retry_label(&self) -> Option<&'static str> {
        match self {
            PanelView::Error { retry_label, .. } | PanelView::Content { retry_label, .. } => {
                Some(retry_label)
            }
            PanelView::Blank | PanelView::Loading { .. } => None,
        }
    }

    /// Plain-text rendering for non-interactive output.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self {
            PanelView::Blank => {}
            PanelView::Loading { message } => lines.push((*message).to_string()),
            PanelView::Error {
                headline, detail, ..
            } => {
                lines.push((*headline).to_string());
                lines.push((*detail).to_string());
            }
            PanelView::Content { content, .. } => {
                lines.push(content.headline.clone());
                lines.extend(content.details.iter().cloned());
            }
        }
        if let Some(label) = self.retry_label() {
            lines.push(format!("[{}]", label));
        }
        lines
    }
}
