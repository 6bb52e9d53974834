use reqwest::Method;

use super::{KEYS, ORGANIZATIONS};
use crate::akerun_client::{AkerunClient, Params};
use crate::context::CallContext;
use crate::encode::to_values;
use crate::error::AkerunError;
use crate::models::{CreateKeyParameter, Key, KeysParameter, Token, UpdateKeyParameter};

impl AkerunClient {
    /// Lists the keys issued in an organization.
    pub async fn list_keys(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        params: KeysParameter,
    ) -> Result<Vec<Key>, AkerunError> {
        let values = to_values(&params)?;
        self.call_many(
            ctx,
            Method::GET,
            &[ORGANIZATIONS, organization_id, KEYS],
            token,
            Params::Query(&values),
        )
        .await
    }

    /// Gets one key.
    pub async fn get_key(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        key_id: &str,
    ) -> Result<Key, AkerunError> {
        self.call_one(
            ctx,
            Method::GET,
            &[ORGANIZATIONS, organization_id, KEYS, key_id],
            token,
            Params::None,
        )
        .await
    }

    /// Issues a key to a user for a device.
    pub async fn create_key(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        params: CreateKeyParameter,
    ) -> Result<Key, AkerunError> {
        let values = to_values(&params)?;
        self.call_one(
            ctx,
            Method::POST,
            &[ORGANIZATIONS, organization_id, KEYS],
            token,
            Params::Form(&values),
        )
        .await
    }

    /// Changes the schedule of a key.
    pub async fn update_key(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        key_id: &str,
        params: UpdateKeyParameter,
    ) -> Result<Key, AkerunError> {
        let values = to_values(&params)?;
        self.call_one(
            ctx,
            Method::PUT,
            &[ORGANIZATIONS, organization_id, KEYS, key_id],
            token,
            Params::Form(&values),
        )
        .await
    }

    /// Revokes a key.
    pub async fn delete_key(
        &self,
        ctx: &CallContext,
        token: &Token,
        organization_id: &str,
        key_id: &str,
    ) -> Result<(), AkerunError> {
        self.call_empty(
            ctx,
            Method::DELETE,
            &[ORGANIZATIONS, organization_id, KEYS, key_id],
            token,
            Params::None,
        )
        .await
    }
}
