use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    admin_login::IAdminLoginUseCase, approve_signup::IApproveSignupUseCase,
    delete_signup_request::IDeleteSignupRequestUseCase, forgot_password::IForgotPasswordUseCase,
    list_pending_signups::IListPendingSignupsUseCase, login_user::ILoginUserUseCase,
    reject_signup::IRejectSignupUseCase, reset_password::IResetPasswordUseCase,
    submit_signup::ISubmitSignupUseCase,
};
use crate::modules::orders::application::use_cases::{
    create_order::ICreateOrderUseCase, delete_order::IDeleteOrderUseCase,
    list_all_orders::IListAllOrdersUseCase, list_my_orders::IListMyOrdersUseCase,
    update_order::IUpdateOrderUseCase,
};
use crate::modules::users::application::use_cases::{
    delete_user::IDeleteUserUseCase, list_users::IListUsersUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    submit_signup: Arc<dyn ISubmitSignupUseCase>,
    login_user: Arc<dyn ILoginUserUseCase>,
    admin_login: Arc<dyn IAdminLoginUseCase>,
    forgot_password: Arc<dyn IForgotPasswordUseCase>,
    reset_password: Arc<dyn IResetPasswordUseCase>,
    list_pending_signups: Arc<dyn IListPendingSignupsUseCase>,
    approve_signup: Arc<dyn IApproveSignupUseCase>,
    reject_signup: Arc<dyn IRejectSignupUseCase>,
    delete_signup_request: Arc<dyn IDeleteSignupRequestUseCase>,
    create_order: Arc<dyn ICreateOrderUseCase>,
    list_all_orders: Arc<dyn IListAllOrdersUseCase>,
    list_my_orders: Arc<dyn IListMyOrdersUseCase>,
    update_order: Arc<dyn IUpdateOrderUseCase>,
    delete_order: Arc<dyn IDeleteOrderUseCase>,
    list_users: Arc<dyn IListUsersUseCase>,
    delete_user: Arc<dyn IDeleteUserUseCase>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            submit_signup: Arc::new(StubSubmitSignupUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            admin_login: Arc::new(StubAdminLoginUseCase),
            forgot_password: Arc::new(StubForgotPasswordUseCase),
            reset_password: Arc::new(StubResetPasswordUseCase),
            list_pending_signups: Arc::new(StubListPendingSignupsUseCase),
            approve_signup: Arc::new(StubApproveSignupUseCase),
            reject_signup: Arc::new(StubRejectSignupUseCase),
            delete_signup_request: Arc::new(StubDeleteSignupRequestUseCase),
            create_order: Arc::new(StubCreateOrderUseCase),
            list_all_orders: Arc::new(StubListAllOrdersUseCase),
            list_my_orders: Arc::new(StubListMyOrdersUseCase),
            update_order: Arc::new(StubUpdateOrderUseCase),
            delete_order: Arc::new(StubDeleteOrderUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_submit_signup(mut self, uc: impl ISubmitSignupUseCase + 'static) -> Self {
        self.submit_signup = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_admin_login(mut self, uc: impl IAdminLoginUseCase + 'static) -> Self {
        self.admin_login = Arc::new(uc);
        self
    }

    pub fn with_forgot_password(mut self, uc: impl IForgotPasswordUseCase + 'static) -> Self {
        self.forgot_password = Arc::new(uc);
        self
    }

    pub fn with_reset_password(mut self, uc: impl IResetPasswordUseCase + 'static) -> Self {
        self.reset_password = Arc::new(uc);
        self
    }

    pub fn with_list_pending_signups(
        mut self,
        uc: impl IListPendingSignupsUseCase + 'static,
    ) -> Self {
        self.list_pending_signups = Arc::new(uc);
        self
    }

    pub fn with_approve_signup(mut self, uc: impl IApproveSignupUseCase + 'static) -> Self {
        self.approve_signup = Arc::new(uc);
        self
    }

    pub fn with_reject_signup(mut self, uc: impl IRejectSignupUseCase + 'static) -> Self {
        self.reject_signup = Arc::new(uc);
        self
    }

    pub fn with_delete_signup_request(
        mut self,
        uc: impl IDeleteSignupRequestUseCase + 'static,
    ) -> Self {
        self.delete_signup_request = Arc::new(uc);
        self
    }

    pub fn with_create_order(mut self, uc: impl ICreateOrderUseCase + 'static) -> Self {
        self.create_order = Arc::new(uc);
        self
    }

    pub fn with_list_all_orders(mut self, uc: impl IListAllOrdersUseCase + 'static) -> Self {
        self.list_all_orders = Arc::new(uc);
        self
    }

    pub fn with_list_my_orders(mut self, uc: impl IListMyOrdersUseCase + 'static) -> Self {
        self.list_my_orders = Arc::new(uc);
        self
    }

    pub fn with_update_order(mut self, uc: impl IUpdateOrderUseCase + 'static) -> Self {
        self.update_order = Arc::new(uc);
        self
    }

    pub fn with_delete_order(mut self, uc: impl IDeleteOrderUseCase + 'static) -> Self {
        self.delete_order = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + 'static) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            submit_signup_use_case: self.submit_signup,
            login_user_use_case: self.login_user,
            admin_login_use_case: self.admin_login,
            forgot_password_use_case: self.forgot_password,
            reset_password_use_case: self.reset_password,
            list_pending_signups_use_case: self.list_pending_signups,
            approve_signup_use_case: self.approve_signup,
            reject_signup_use_case: self.reject_signup,
            delete_signup_request_use_case: self.delete_signup_request,
            create_order_use_case: self.create_order,
            list_all_orders_use_case: self.list_all_orders,
            list_my_orders_use_case: self.list_my_orders,
            update_order_use_case: self.update_order,
            delete_order_use_case: self.delete_order,
            list_users_use_case: self.list_users,
            delete_user_use_case: self.delete_user,
        })
    }
}
