//! Default stand-ins for every use case in `AppState`. Handler tests build
//! the state from these and override only the use case under test.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::admin_login::{
    AdminLoginCommand, AdminLoginError, AdminLoginResponse, IAdminLoginUseCase,
};
use crate::modules::auth::application::use_cases::approve_signup::{
    ApproveSignupCommand, ApproveSignupError, ApproveSignupResponse, IApproveSignupUseCase,
};
use crate::modules::auth::application::use_cases::delete_signup_request::{
    DeleteSignupRequestError, IDeleteSignupRequestUseCase,
};
use crate::modules::auth::application::use_cases::forgot_password::{
    ForgotPasswordCommand, ForgotPasswordError, ForgotPasswordOutcome, IForgotPasswordUseCase,
};
use crate::modules::auth::application::use_cases::list_pending_signups::{
    IListPendingSignupsUseCase, ListPendingSignupsError, PendingSignup,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginCommand, LoginError, LoginResponse,
};
use crate::modules::auth::application::use_cases::reject_signup::{
    IRejectSignupUseCase, RejectSignupCommand, RejectSignupError, RejectSignupResponse,
};
use crate::modules::auth::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordCommand, ResetPasswordError,
};
use crate::modules::auth::application::use_cases::submit_signup::{
    ISubmitSignupUseCase, SubmitSignupCommand, SubmitSignupError, SubmitSignupResponse,
};
use crate::modules::orders::application::domain::entities::Order;
use crate::modules::orders::application::use_cases::create_order::{
    CreateOrderCommand, CreateOrderError, ICreateOrderUseCase,
};
use crate::modules::orders::application::use_cases::delete_order::{
    DeleteOrderError, IDeleteOrderUseCase,
};
use crate::modules::orders::application::use_cases::list_all_orders::{
    IListAllOrdersUseCase, ListAllOrdersError,
};
use crate::modules::orders::application::use_cases::list_my_orders::{
    IListMyOrdersUseCase, ListMyOrdersError,
};
use crate::modules::orders::application::use_cases::update_order::{
    IUpdateOrderUseCase, UpdateOrderCommand, UpdateOrderError,
};
use crate::modules::users::application::use_cases::delete_user::{
    DeleteUserError, IDeleteUserUseCase,
};
use crate::modules::users::application::use_cases::list_users::{
    IListUsersUseCase, ListUsersError, UserAccount,
};
use crate::modules::auth::application::domain::entities::PublicUser;

pub struct StubSubmitSignupUseCase;

#[async_trait]
impl ISubmitSignupUseCase for StubSubmitSignupUseCase {
    async fn execute(
        &self,
        _command: SubmitSignupCommand,
    ) -> Result<SubmitSignupResponse, SubmitSignupError> {
        Ok(SubmitSignupResponse {
            request_id: Uuid::new_v4(),
        })
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubAdminLoginUseCase;

#[async_trait]
impl IAdminLoginUseCase for StubAdminLoginUseCase {
    async fn execute(
        &self,
        _command: AdminLoginCommand,
    ) -> Result<AdminLoginResponse, AdminLoginError> {
        Err(AdminLoginError::AccessDenied)
    }
}

pub struct StubForgotPasswordUseCase;

#[async_trait]
impl IForgotPasswordUseCase for StubForgotPasswordUseCase {
    async fn execute(
        &self,
        _command: ForgotPasswordCommand,
    ) -> Result<ForgotPasswordOutcome, ForgotPasswordError> {
        Ok(ForgotPasswordOutcome::UnknownEmail)
    }
}

pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        Err(ResetPasswordError::InvalidOrExpiredToken)
    }
}

pub struct StubListPendingSignupsUseCase;

#[async_trait]
impl IListPendingSignupsUseCase for StubListPendingSignupsUseCase {
    async fn execute(&self) -> Result<Vec<PendingSignup>, ListPendingSignupsError> {
        Ok(vec![])
    }
}

pub struct StubApproveSignupUseCase;

#[async_trait]
impl IApproveSignupUseCase for StubApproveSignupUseCase {
    async fn execute(
        &self,
        _command: ApproveSignupCommand,
    ) -> Result<ApproveSignupResponse, ApproveSignupError> {
        Err(ApproveSignupError::RequestNotFound)
    }
}

pub struct StubRejectSignupUseCase;

#[async_trait]
impl IRejectSignupUseCase for StubRejectSignupUseCase {
    async fn execute(
        &self,
        _command: RejectSignupCommand,
    ) -> Result<RejectSignupResponse, RejectSignupError> {
        Err(RejectSignupError::RequestNotFound)
    }
}

pub struct StubDeleteSignupRequestUseCase;

#[async_trait]
impl IDeleteSignupRequestUseCase for StubDeleteSignupRequestUseCase {
    async fn execute(&self, _request_id: Uuid) -> Result<(), DeleteSignupRequestError> {
        Err(DeleteSignupRequestError::RequestNotFound)
    }
}

pub struct StubCreateOrderUseCase;

#[async_trait]
impl ICreateOrderUseCase for StubCreateOrderUseCase {
    async fn execute(&self, _command: CreateOrderCommand) -> Result<Order, CreateOrderError> {
        Err(CreateOrderError::OwnerNotFound)
    }
}

pub struct StubListAllOrdersUseCase;

#[async_trait]
impl IListAllOrdersUseCase for StubListAllOrdersUseCase {
    async fn execute(&self) -> Result<Vec<Order>, ListAllOrdersError> {
        Ok(vec![])
    }
}

pub struct StubListMyOrdersUseCase;

#[async_trait]
impl IListMyOrdersUseCase for StubListMyOrdersUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<Order>, ListMyOrdersError> {
        Ok(vec![])
    }
}

pub struct StubUpdateOrderUseCase;

#[async_trait]
impl IUpdateOrderUseCase for StubUpdateOrderUseCase {
    async fn execute(&self, _command: UpdateOrderCommand) -> Result<Order, UpdateOrderError> {
        Err(UpdateOrderError::OrderNotFound)
    }
}

pub struct StubDeleteOrderUseCase;

#[async_trait]
impl IDeleteOrderUseCase for StubDeleteOrderUseCase {
    async fn execute(&self, _order_id: Uuid) -> Result<Order, DeleteOrderError> {
        Err(DeleteOrderError::OrderNotFound)
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserAccount>, ListUsersError> {
        Ok(vec![])
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublicUser, DeleteUserError> {
        Err(DeleteUserError::UserNotFound)
    }
}
