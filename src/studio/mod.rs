//! Connection-configuration and generation-request flow for the studio page.
//!
//! The UI lives in `pages::create`; everything here is plain Rust so the flow
//! can be exercised without a browser.

pub mod endpoint;
pub mod generate;

/// The two studio views. Transitions: saving a valid endpoint moves to
/// `Create`; a generation attempt with no stored endpoint moves back to
/// `Connection`.
#[derive(Clone, PartialEq)]
pub enum StudioTab {
    Connection,
    Create,
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::endpoint::EndpointStore;

    /// In-memory stand-in for localStorage.
    #[derive(Default)]
    pub struct FakeStore {
        saved: RefCell<Option<String>>,
        writes: RefCell<u32>,
    }

    impl FakeStore {
        pub fn with(url: &str) -> Self {
            Self {
                saved: RefCell::new(Some(url.to_string())),
                writes: RefCell::new(0),
            }
        }

        pub fn saved(&self) -> Option<String> {
            self.saved.borrow().clone()
        }

        pub fn writes(&self) -> u32 {
            *self.writes.borrow()
        }
    }

    impl EndpointStore for FakeStore {
        fn load(&self) -> Option<String> {
            self.saved.borrow().clone()
        }

        fn save(&self, url: &str) {
            *self.saved.borrow_mut() = Some(url.to_string());
            *self.writes.borrow_mut() += 1;
        }
    }
}
