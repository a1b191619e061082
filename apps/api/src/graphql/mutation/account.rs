//! Account mutations for the nosh GraphQL API
//!
//! This module provides mutations for the account lifecycle:
//! - createAccount: Register a new user
//! - login: Authenticate and get a token
//! - editProfile: Change email and/or password
//! - deleteAccount: Permanently delete the account
//! - verifyEmail: Confirm an emailed verification code
//!
//! Domain failures (duplicate email, wrong password, unknown code) are
//! reported in the payload, not as GraphQL errors.

use async_graphql::{Context, InputObject, Object, Result};

use crate::graphql::guards::current_user;
use crate::graphql::types::{
    CreateAccountPayload, DeleteAccountPayload, EditProfilePayload, LoginPayload, UserRole,
    VerifyEmailPayload,
};
use crate::services::AccountService;

/// Input for creating an account
#[derive(Debug, InputObject)]
pub struct CreateAccountInput {
    /// User's email address (must be unique)
    pub email: String,
    /// Password (minimum 4 characters)
    pub password: String,
    /// Role the account is created with
    pub role: UserRole,
}

/// Input for user login
#[derive(Debug, InputObject)]
pub struct LoginInput {
    /// User's email address
    pub email: String,
    /// User's password
    pub password: String,
}

/// Input for editing the authenticated user's profile
///
/// Include only the fields you want to change. Changing the email marks
/// the account unverified and sends a fresh verification code.
#[derive(Debug, InputObject)]
pub struct EditProfileInput {
    /// New email address (optional)
    pub email: Option<String>,
    /// New password (minimum 4 characters, optional)
    pub password: Option<String>,
}

/// Input for deleting the authenticated user's account
#[derive(Debug, InputObject)]
pub struct DeleteAccountInput {
    /// Current password for verification
    pub password: String,
}

/// Input for verifying an email address
#[derive(Debug, InputObject)]
pub struct VerifyEmailInput {
    /// Verification code from the email
    pub code: String,
}

/// Account lifecycle mutations
#[derive(Default)]
pub struct AccountMutation;

#[Object]
impl AccountMutation {
    /// Register a new user account
    ///
    /// Creates a new unverified user and emails a verification code.
    /// Duplicate emails and invalid input are reported in the payload.
    async fn create_account(
        &self,
        ctx: &Context<'_>,
        input: CreateAccountInput,
    ) -> Result<CreateAccountPayload> {
        let accounts = ctx.data::<AccountService>()?;

        let payload = match accounts
            .create_account(&input.email, &input.password, input.role.into())
            .await
        {
            Ok(_) => CreateAccountPayload::ok(),
            Err(e) => CreateAccountPayload::err(&e),
        };
        Ok(payload)
    }

    /// Authenticate a user and get a signed token
    ///
    /// Validates the credentials and returns a JWT on success. Unknown
    /// emails and wrong passwords are reported in the payload.
    async fn login(&self, ctx: &Context<'_>, input: LoginInput) -> Result<LoginPayload> {
        let accounts = ctx.data::<AccountService>()?;

        let payload = match accounts.login(&input.email, &input.password).await {
            Ok(token) => LoginPayload::ok(token),
            Err(e) => LoginPayload::err(&e),
        };
        Ok(payload)
    }

    /// Change the authenticated user's email and/or password
    ///
    /// # Errors
    /// - Returns error if not authenticated
    async fn edit_profile(
        &self,
        ctx: &Context<'_>,
        input: EditProfileInput,
    ) -> Result<EditProfilePayload> {
        let current = current_user(ctx)?;
        let accounts = ctx.data::<AccountService>()?;

        let payload = match accounts
            .edit_profile(current.id(), input.email.as_deref(), input.password.as_deref())
            .await
        {
            Ok(()) => EditProfilePayload::ok(),
            Err(e) => EditProfilePayload::err(&e),
        };
        Ok(payload)
    }

    /// Permanently delete the authenticated user's account
    ///
    /// Requires the current password for verification.
    ///
    /// # Errors
    /// - Returns error if not authenticated
    async fn delete_account(
        &self,
        ctx: &Context<'_>,
        input: DeleteAccountInput,
    ) -> Result<DeleteAccountPayload> {
        let current = current_user(ctx)?;
        let accounts = ctx.data::<AccountService>()?;

        let payload = match accounts.delete_account(current.id(), &input.password).await {
            Ok(()) => DeleteAccountPayload::ok(),
            Err(e) => DeleteAccountPayload::err(&e),
        };
        Ok(payload)
    }

    /// Confirm an email address using the emailed code
    ///
    /// Marks the owning account verified and consumes the code. Does not
    /// require authentication; possession of the code is the proof.
    async fn verify_email(
        &self,
        ctx: &Context<'_>,
        input: VerifyEmailInput,
    ) -> Result<VerifyEmailPayload> {
        let accounts = ctx.data::<AccountService>()?;

        let payload = match accounts.verify_email(&input.code).await {
            Ok(()) => VerifyEmailPayload::ok(),
            Err(e) => VerifyEmailPayload::err(&e),
        };
        Ok(payload)
    }
}
