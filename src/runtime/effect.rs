use crate::task::FetchRequest;

/// Side effects requested by the autocomplete state; the runtime performs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)arm the debounce timer with this request.
    ScheduleFetch(FetchRequest),
    /// Drop any request still waiting for its quiet period.
    CancelFetch,
}
