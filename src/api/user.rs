use reqwest::Method;

use super::{ORGANIZATIONS, USERS};
use crate::akerun_client::{AkerunClient, Params};
use crate::context::CallContext;
use crate::encode::to_values;
use crate::error::AkerunError;
use crate::models::{
    InviteUserParameter, RegisterUserParameter, Token, UpdateUserParameter, User, UsersParameter,
};

impl AkerunClient {
    /// Lists the users of an organization.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let params = UsersParameter { limit: 10, ..Default::default() };
    /// let users = client.list_users(&ctx, &token, "O-123", params).await?;
    /// ```
    pub async fn list_users(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        params: UsersParameter,
    ) -> Result<Vec<User>, AkerunError> {
        let values = to_values(&params)?;
        self.call_many(
            ctx,
            Method::GET,
            &[ORGANIZATIONS, organization_id, USERS],
            token,
            Params::Query(&values),
        )
        .await
    }

    /// Gets one user.
    ///
    /// # Errors
    ///
    /// Returns `AkerunError::Api` with status 404 if the user is not a
    /// member of the organization.
    pub async fn get_user(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        user_id: &str,
    ) -> Result<User, AkerunError> {
        self.call_one(
            ctx,
            Method::GET,
            &[ORGANIZATIONS, organization_id, USERS, user_id],
            token,
            Params::None,
        )
        .await
    }

    /// Registers a new user under `name`.
    pub async fn register_user(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        name: &str,
        params: RegisterUserParameter,
    ) -> Result<User, AkerunError> {
        let mut values = to_values(&params)?;
        values.add("user_name", name);
        self.call_one(
            ctx,
            Method::POST,
            &[ORGANIZATIONS, organization_id, USERS],
            token,
            Params::Form(&values),
        )
        .await
    }

    /// Invites an existing Akerun user into the organization.
    pub async fn invite_user(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        user_id: &str,
        params: InviteUserParameter,
    ) -> Result<User, AkerunError> {
        let mut values = to_values(&params)?;
        values.add("user_id", user_id);
        self.call_one(
            ctx,
            Method::POST,
            &[ORGANIZATIONS, organization_id, USERS, user_id],
            token,
            Params::Form(&values),
        )
        .await
    }

    /// Updates a user's profile within the organization.
    pub async fn update_user(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        user_id: &str,
        params: UpdateUserParameter,
    ) -> Result<User, AkerunError> {
        let mut values = to_values(&params)?;
        values.add("user_id", user_id);
        self.call_one(
            ctx,
            Method::PUT,
            &[ORGANIZATIONS, organization_id, USERS, user_id],
            token,
            Params::Form(&values),
        )
        .await
    }

    /// Removes a user from the organization.
    pub async fn exit_user(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        user_id: &str,
    ) -> Result<(), AkerunError> {
        self.call_empty(
            ctx,
            Method::DELETE,
            &[ORGANIZATIONS, organization_id, USERS, user_id],
            token,
            Params::None,
        )
        .await
    }
}
