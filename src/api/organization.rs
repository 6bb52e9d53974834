use reqwest::Method;

use super::ORGANIZATIONS;
use crate::akerun_client::{AkerunClient, Params};
use crate::context::CallContext;
use crate::encode::to_values;
use crate::error::AkerunError;
use crate::models::{Organization, OrganizationSummary, OrganizationsParameter, Token};

impl AkerunClient {
    /// Lists the organizations the token can access.
    ///
    /// Only IDs are returned; pass `limit`, `id_after` and `id_before` to
    /// page through them.
    pub async fn list_organizations(
        &self,
        ctx: &CallContext,
        token: &Token,
        params: OrganizationsParameter,
    ) -> Result<Vec<OrganizationSummary>, AkerunError> {
        let values = to_values(&params)?;
        self.call_many(
            ctx,
            Method::GET,
            &[ORGANIZATIONS],
            token,
            Params::Query(&values),
        )
        .await
    }

    /// Gets the details of one organization.
    pub async fn get_organization(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
    ) -> Result<Organization, AkerunError> {
        self.call_one(
            ctx,
            Method::GET,
            &[ORGANIZATIONS, organization_id],
            token,
            Params::None,
        )
        .await
    }
}
