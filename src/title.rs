//! Page Title
//!
//! Sets the document title with a fixed prefix.

/// Anything that can display a page title
pub trait TitleSink {
    fn set_title(&self, title: &str);
}

/// Writes `document.title`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTitle;

impl TitleSink for DocumentTitle {
    fn set_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

#[derive(Debug, Clone)]
pub struct TitleService<S: TitleSink> {
    prefix: String,
    sink: S,
}

impl<S: TitleSink> TitleService<S> {
    pub fn new(prefix: impl Into<String>, sink: S) -> Self {
        Self {
            prefix: prefix.into(),
            sink,
        }
    }

    pub fn set_title(&self, text: &str) {
        self.sink.set_title(&format!("{}{}", self.prefix, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        titles: RefCell<Vec<String>>,
    }

    impl TitleSink for &RecordingSink {
        fn set_title(&self, title: &str) {
            self.titles.borrow_mut().push(title.to_string());
        }
    }

    #[test]
    fn test_prefix_is_prepended() {
        let sink = RecordingSink::default();
        let service = TitleService::new("Pokemon : ", &sink);
        service.set_title("Pikachu");
        service.set_title("");
        assert_eq!(*sink.titles.borrow(), ["Pokemon : Pikachu", "Pokemon : "]);
    }
}
