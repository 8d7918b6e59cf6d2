use crate::FamiliaClient;
use familia_core::error::Result;
use familia_core::rooms::StatusResponse;
use familia_core::safety::{ReportRequest, SeverBondRequest};

impl FamiliaClient {
    pub async fn report_user(&self, request: &ReportRequest) -> Result<StatusResponse> {
        self.api.post("/safety/report", request).await
    }

    /// Ends a bond. The relationship disappears from the next refresh.
    pub async fn sever_bond(&self, request: &SeverBondRequest) -> Result<StatusResponse> {
        self.api.post("/safety/sever", request).await
    }
}
