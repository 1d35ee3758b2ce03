use super::EligibilityService;
use crate::{
    dto::{Assignability, Job, JobVisibility, User, UserRole, UserStatus},
    error::Error,
    repository::JobStore,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct EligibilityServiceImpl {
    store: Arc<dyn JobStore>,
}

impl EligibilityServiceImpl {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Checks that need no store access; role and status short-circuit
    /// before any preference is looked at
    fn passes_candidate_checks(job: &Job, user: &User, exclude_user_id: Option<Uuid>) -> bool {
        if user.role != UserRole::Translator || user.status != UserStatus::Active {
            return false;
        }
        if exclude_user_id == Some(user.id) {
            return false;
        }
        if user.preferences.suppress_all_notifications {
            return false;
        }
        if job.immediate && user.preferences.suppress_emergency_notifications {
            return false;
        }

        true
    }
}

#[async_trait]
impl EligibilityService for EligibilityServiceImpl {
    async fn eligible_translators(
        &self,
        job: &Job,
        exclude_user_id: Option<Uuid>,
    ) -> Result<Vec<User>, Error> {
        let users = self.store.list_users().await?;
        self.filter_candidates(job, users, exclude_user_id).await
    }

    async fn filter_candidates(
        &self,
        job: &Job,
        candidates: Vec<User>,
        exclude_user_id: Option<Uuid>,
    ) -> Result<Vec<User>, Error> {
        let mut eligible = Vec::new();

        for user in candidates {
            if !Self::passes_candidate_checks(job, &user, exclude_user_id) {
                continue;
            }

            // Only translators with a resolved particular-job relation are
            // pushed to; open visibility or a not-acceptable outcome is not
            // enough.
            let assignments = self.store.potential_assignments(user.id).await?;
            let acceptable = assignments.iter().any(|assignment| {
                assignment.job_id == job.id
                    && assignment.visibility == JobVisibility::SpecificToTranslator
                    && assignment.outcome == Assignability::Acceptable
            });
            if !acceptable {
                continue;
            }

            eligible.push(user);
        }

        tracing::debug!(
            job_id = job.id,
            count = eligible.len(),
            "resolved eligible translators"
        );

        Ok(eligible)
    }
}
