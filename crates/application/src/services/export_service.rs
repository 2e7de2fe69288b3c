//! Export Service - Saves route reports

use std::{path::PathBuf, sync::Arc};

use tracing::{info, instrument};

use super::{route_report, route_service::RoutePlan};
use crate::{error::ApplicationError, ports::RouteExportPort};

/// Service that renders a plan and hands it to the export store
pub struct ExportService {
    store: Arc<dyn RouteExportPort>,
}

impl std::fmt::Debug for ExportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportService").finish_non_exhaustive()
    }
}

impl ExportService {
    /// Create a new export service
    pub fn new(store: Arc<dyn RouteExportPort>) -> Self {
        Self { store }
    }

    /// Save the plan's report, returning the path written
    #[instrument(skip(self, plan))]
    pub async fn save(&self, plan: &RoutePlan) -> Result<PathBuf, ApplicationError> {
        let stem = route_report::file_stem(plan);
        let contents = route_report::render(plan);
        let path = self.store.save(&stem, &contents).await?;
        info!(path = %path.display(), "Route saved");
        Ok(path)
    }
}
