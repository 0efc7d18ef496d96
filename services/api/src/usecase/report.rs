use chrono::Utc;

use crate::domain::repository::ReportRepository;
use crate::domain::types::{Inform2Report, Inform4Report, Submission};
use crate::error::ApiError;

pub struct SubmitInform2UseCase<R: ReportRepository> {
    pub reports: R,
}

impl<R: ReportRepository> SubmitInform2UseCase<R> {
    pub async fn execute(&self, report: Inform2Report, username: String) -> Result<i32, ApiError> {
        let submission = Submission {
            report,
            username,
            created_at: Utc::now(),
        };
        self.reports.insert_inform2(&submission).await
    }
}

pub struct SubmitInform4UseCase<R: ReportRepository> {
    pub reports: R,
}

impl<R: ReportRepository> SubmitInform4UseCase<R> {
    pub async fn execute(&self, report: Inform4Report, username: String) -> Result<i32, ApiError> {
        let submission = Submission {
            report,
            username,
            created_at: Utc::now(),
        };
        self.reports.insert_inform4(&submission).await
    }
}
