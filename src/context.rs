//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::title::{DocumentTitle, TitleService};

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    title: TitleService<DocumentTitle>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            title: TitleService::new(config.title_prefix.clone(), DocumentTitle),
        }
    }

    /// Set the page title to the configured prefix followed by `text`
    pub fn set_title(&self, text: &str) {
        self.title.set_title(text);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
