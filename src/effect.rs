//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch current conditions for a trimmed, non-empty location query.
    /// `request_id` is unique per submission so overlapping fetches never share a task.
    FetchWeather { request_id: u64, query: String },
}
