// Loading state for page data.
// Tracks a fetch from Idle to Loaded or Error and drops results of superseded requests.

/// Loading state for async data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadingState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one load started by [`PageState::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Loading state owned by a page, guarded by a generation counter.
///
/// Each `begin` issues a new ticket and invalidates earlier ones, so a slow
/// response that arrives after a newer request, or after the page is
/// detached, is discarded instead of overwriting newer state.
#[derive(Debug, Clone)]
pub struct PageState<T> {
    state: LoadingState<T>,
    generation: u64,
    attached: bool,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            state: LoadingState::Idle,
            generation: 0,
            attached: true,
        }
    }
}

impl<T> PageState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadingState<T> {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start a load. Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.attached = true;
        self.state = LoadingState::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.attached && ticket.generation == self.generation
    }

    /// Apply the result of the load identified by `ticket`.
    ///
    /// Returns false, leaving state untouched, when the ticket is stale.
    pub fn complete<E: std::fmt::Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<T, E>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale load result"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => LoadingState::Loaded(data),
            Err(err) => LoadingState::Error(err.to_string()),
        };
        true
    }

    /// The consuming view is gone; results still in flight are dropped.
    pub fn detach(&mut self) {
        self.attached = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_then_complete() {
        let mut page: PageState<u32> = PageState::new();
        assert_eq!(page.state(), &LoadingState::Idle);

        let ticket = page.begin();
        assert!(page.state().is_loading());

        assert!(page.complete(ticket, Ok::<_, String>(7)));
        assert_eq!(page.state().data(), Some(&7));
    }

    #[test]
    fn test_error_result() {
        let mut page: PageState<u32> = PageState::new();
        let ticket = page.begin();
        assert!(page.complete(ticket, Err("Unable to load profile.")));
        assert_eq!(page.state().error(), Some("Unable to load profile."));
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut page: PageState<&str> = PageState::new();
        let first = page.begin();
        let second = page.begin();

        assert!(page.complete(second, Ok::<_, String>("new")));
        assert!(!page.complete(first, Ok::<_, String>("old")));
        assert_eq!(page.state().data(), Some(&"new"));
    }

    #[test]
    fn test_detach_drops_in_flight_result() {
        let mut page: PageState<u32> = PageState::new();
        let ticket = page.begin();
        page.detach();

        assert!(!page.is_current(ticket));
        assert!(!page.complete(ticket, Ok::<_, String>(1)));
        assert!(page.state().is_loading());
    }

    #[test]
    fn test_begin_after_detach_reattaches() {
        let mut page: PageState<u32> = PageState::new();
        page.detach();
        let ticket = page.begin();
        assert!(page.is_attached());
        assert!(page.complete(ticket, Ok::<_, String>(2)));
    }
}
