use reqwest::Method;

use super::{AKERUNS, AKERUN_GROUPS, ORGANIZATIONS};
use crate::akerun_client::{AkerunClient, Params};
use crate::context::CallContext;
use crate::encode::to_values;
use crate::error::AkerunError;
use crate::models::{
    AkerunGroup, AkerunGroupCreateParameter, AkerunGroupDetailed, AkerunGroupUpdateParameter,
    AkerunIdsParameter, Token,
};

impl AkerunClient {
    /// Lists the device groups of an organization.
    pub async fn list_akerun_groups(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
    ) -> Result<Vec<AkerunGroup>, AkerunError> {
        self.call_many(
            ctx,
            Method::GET,
            &[ORGANIZATIONS, organization_id, AKERUN_GROUPS],
            token,
            Params::None,
        )
        .await
    }

    /// Gets a device group with its member devices.
    pub async fn get_akerun_group(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        akerun_group_id: &str,
    ) -> Result<AkerunGroupDetailed, AkerunError> {
        self.call_one(
            ctx,
            Method::GET,
            &[ORGANIZATIONS, organization_id, AKERUN_GROUPS, akerun_group_id],
            token,
            Params::None,
        )
        .await
    }

    /// Creates a device group.
    pub async fn create_akerun_group(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        params: AkerunGroupCreateParameter,
    ) -> Result<AkerunGroup, AkerunError> {
        let values = to_values(&params)?;
        self.call_one(
            ctx,
            Method::POST,
            &[ORGANIZATIONS, organization_id, AKERUN_GROUPS],
            token,
            Params::Form(&values),
        )
        .await
    }

    /// Renames a device group or changes its memo.
    pub async fn update_akerun_group(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        akerun_group_id: &str,
        params: AkerunGroupUpdateParameter,
    ) -> Result<AkerunGroup, AkerunError> {
        let values = to_values(&params)?;
        self.call_one(
            ctx,
            Method::PUT,
            &[ORGANIZATIONS, organization_id, AKERUN_GROUPS, akerun_group_id],
            token,
            Params::Form(&values),
        )
        .await
    }

    /// Deletes a device group. The devices themselves are untouched.
    pub async fn delete_akerun_group(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        akerun_group_id: &str,
    ) -> Result<(), AkerunError> {
        self.call_empty(
            ctx,
            Method::DELETE,
            &[ORGANIZATIONS, organization_id, AKERUN_GROUPS, akerun_group_id],
            token,
            Params::None,
        )
        .await
    }

    /// Adds devices to a group.
    ///
    /// IDs are sent as repeated `akerun_ids[]` form fields in the order
    /// given. Returns the updated group when the response carries one and
    /// `None` for an empty body.
    pub async fn add_akerun_to_group(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        akerun_group_id: &str,
        akerun_ids: &[&str],
    ) -> Result<Option<AkerunGroupDetailed>, AkerunError> {
        self.change_members(ctx, Method::POST, token, organization_id, akerun_group_id, akerun_ids)
            .await
    }

    /// Removes devices from a group.
    ///
    /// IDs are sent as repeated `akerun_ids[]` form fields in the order
    /// given. Returns the updated group when the response carries one.
    pub async fn remove_akerun_from_group(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        akerun_group_id: &str,
        akerun_ids: &[&str],
    ) -> Result<Option<AkerunGroupDetailed>, AkerunError> {
        self.change_members(
            ctx,
            Method::DELETE,
            token,
            organization_id,
            akerun_group_id,
            akerun_ids,
        )
        .await
    }

    async fn change_members(
        &self,
        ctx: &CallContext,
        method: Method,
        token: &Token,
        organization_id: &str,
        akerun_group_id: &str,
        akerun_ids: &[&str],
    ) -> Result<Option<AkerunGroupDetailed>, AkerunError> {
        let values = to_values(&AkerunIdsParameter::new(akerun_ids.iter().copied()))?;
        self.call_optional(
            ctx,
            method,
            &[
                ORGANIZATIONS,
                organization_id,
                AKERUN_GROUPS,
                akerun_group_id,
                AKERUNS,
            ],
            token,
            Params::Form(&values),
        )
        .await
    }
}
