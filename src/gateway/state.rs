use crate::scheduling::SchedulingService;

/// Gateway shared state
#[derive(Clone)]
pub struct AppState {
    /// Scheduling operations (clock and repository behind it)
    pub scheduling: SchedulingService,
}

impl AppState {
    pub fn new(scheduling: SchedulingService) -> Self {
        Self { scheduling }
    }
}
