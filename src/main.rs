pub mod modules;
pub use modules::auth;
pub use modules::email;
pub use modules::orders;
pub use modules::users;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::signup_request_repository_postgres::SignupRequestRepositoryPostgres;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::use_cases::{
    admin_login::{AdminLoginUseCase, IAdminLoginUseCase},
    approve_signup::{ApproveSignupUseCase, IApproveSignupUseCase},
    delete_signup_request::{DeleteSignupRequestUseCase, IDeleteSignupRequestUseCase},
    forgot_password::{ForgotPasswordUseCase, IForgotPasswordUseCase},
    list_pending_signups::{IListPendingSignupsUseCase, ListPendingSignupsUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    reject_signup::{IRejectSignupUseCase, RejectSignupUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    submit_signup::{ISubmitSignupUseCase, SubmitSignupUseCase},
};

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::PasswordResetNotifier;
use crate::email::application::services::UserEmailService;

use crate::orders::adapter::outgoing::order_repository_postgres::OrderRepositoryPostgres;
use crate::orders::application::policy::OrderPolicy;
use crate::orders::application::use_cases::{
    create_order::{CreateOrderUseCase, ICreateOrderUseCase},
    delete_order::{DeleteOrderUseCase, IDeleteOrderUseCase},
    list_all_orders::{IListAllOrdersUseCase, ListAllOrdersUseCase},
    list_my_orders::{IListMyOrdersUseCase, ListMyOrdersUseCase},
    update_order::{IUpdateOrderUseCase, UpdateOrderUseCase},
};

use crate::users::application::use_cases::{
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
};

use crate::shared::rate_limit::AuthRateLimit;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub submit_signup_use_case: Arc<dyn ISubmitSignupUseCase>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase>,
    pub admin_login_use_case: Arc<dyn IAdminLoginUseCase>,
    pub forgot_password_use_case: Arc<dyn IForgotPasswordUseCase>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase>,
    pub list_pending_signups_use_case: Arc<dyn IListPendingSignupsUseCase>,
    pub approve_signup_use_case: Arc<dyn IApproveSignupUseCase>,
    pub reject_signup_use_case: Arc<dyn IRejectSignupUseCase>,
    pub delete_signup_request_use_case: Arc<dyn IDeleteSignupRequestUseCase>,
    pub create_order_use_case: Arc<dyn ICreateOrderUseCase>,
    pub list_all_orders_use_case: Arc<dyn IListAllOrdersUseCase>,
    pub list_my_orders_use_case: Arc<dyn IListMyOrdersUseCase>,
    pub update_order_use_case: Arc<dyn IUpdateOrderUseCase>,
    pub delete_order_use_case: Arc<dyn IDeleteOrderUseCase>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

    // SMTP setup
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if environment == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let signup_request_repo = SignupRequestRepositoryPostgres::new(Arc::clone(&db_arc));
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);

    let password_hasher: Arc<dyn PasswordHasher> = if environment == "production" {
        Arc::new(BcryptHasher::new())
    } else {
        Arc::new(BcryptHasher::fast_env())
    };

    let email_service = UserEmailService::new(Arc::new(smtp_sender), frontend_url);
    let reset_notifier_arc: Arc<dyn PasswordResetNotifier> = Arc::new(email_service);

    let order_policy = OrderPolicy::from_env();

    // Auth use cases
    let submit_signup_use_case = SubmitSignupUseCase::new(
        user_query.clone(),
        signup_request_repo.clone(),
        Arc::clone(&password_hasher),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        signup_request_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider_arc),
    );
    let admin_login_use_case = AdminLoginUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider_arc),
    );
    let forgot_password_use_case = ForgotPasswordUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&reset_notifier_arc),
    );
    let reset_password_use_case = ResetPasswordUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&password_hasher),
    );
    let list_pending_signups_use_case =
        ListPendingSignupsUseCase::new(signup_request_repo.clone());
    let approve_signup_use_case =
        ApproveSignupUseCase::new(signup_request_repo.clone(), user_repo.clone());
    let reject_signup_use_case = RejectSignupUseCase::new(signup_request_repo.clone());
    let delete_signup_request_use_case =
        DeleteSignupRequestUseCase::new(signup_request_repo.clone());

    // Order use cases
    let create_order_use_case = CreateOrderUseCase::new(user_query.clone(), order_repo.clone());
    let list_all_orders_use_case = ListAllOrdersUseCase::new(order_repo.clone());
    let list_my_orders_use_case = ListMyOrdersUseCase::new(order_repo.clone());
    let update_order_use_case = UpdateOrderUseCase::new(order_repo.clone(), order_policy);
    let delete_order_use_case = DeleteOrderUseCase::new(order_repo.clone());

    // User administration use cases
    let list_users_use_case = ListUsersUseCase::new(user_query.clone());
    let delete_user_use_case = DeleteUserUseCase::new(
        user_query.clone(),
        user_repo,
        order_repo,
        signup_request_repo,
    );

    let state = AppState {
        submit_signup_use_case: Arc::new(submit_signup_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        admin_login_use_case: Arc::new(admin_login_use_case),
        forgot_password_use_case: Arc::new(forgot_password_use_case),
        reset_password_use_case: Arc::new(reset_password_use_case),
        list_pending_signups_use_case: Arc::new(list_pending_signups_use_case),
        approve_signup_use_case: Arc::new(approve_signup_use_case),
        reject_signup_use_case: Arc::new(reject_signup_use_case),
        delete_signup_request_use_case: Arc::new(delete_signup_request_use_case),
        create_order_use_case: Arc::new(create_order_use_case),
        list_all_orders_use_case: Arc::new(list_all_orders_use_case),
        list_my_orders_use_case: Arc::new(list_my_orders_use_case),
        update_order_use_case: Arc::new(update_order_use_case),
        delete_order_use_case: Arc::new(delete_order_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
    };

    // The extractors resolve identities through these
    let user_query_arc: Arc<dyn UserQuery> = Arc::new(user_query);

    let rate_limit = AuthRateLimit::new();
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(rate_limit.clone())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&user_query_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::pending_signups_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::approve_signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reject_signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_signup_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_email_otp_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::resend_otp_handler);
    // Orders
    cfg.service(crate::orders::adapter::incoming::web::routes::create_order_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::list_orders_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::my_orders_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::update_order_handler);
    cfg.service(crate::orders::adapter::incoming::web::routes::delete_order_handler);
    // Users
    cfg.service(crate::users::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
