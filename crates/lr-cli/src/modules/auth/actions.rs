use crate::cli_args::LoginArgs;
use crate::modules::auth::session::{Session, SessionState};
use crate::modules::system::http::ApiClient;
use crate::{prompt_line, prompt_password};

pub(crate) async fn handle_login_command(args: LoginArgs, api: &ApiClient) -> anyhow::Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => prompt_line("Username: ")?,
    };
    if username.trim().is_empty() {
        anyhow::bail!("username is required");
    }
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    let mut session = Session::new(api.clone());
    session.login(&username, &password).await?;
    println!("Logged in as {username}");
    Ok(())
}

pub(crate) fn handle_logout_command(api: &ApiClient) -> anyhow::Result<()> {
    let mut session = Session::new(api.clone());
    session.logout();
    println!("Logged out");
    Ok(())
}

pub(crate) async fn handle_session_command(api: &ApiClient) -> anyhow::Result<()> {
    let mut session = Session::new(api.clone());
    session.bootstrap().await?;
    match session.state() {
        SessionState::Authenticated {
            user_id,
            expires_at,
        } => {
            println!("Authenticated");
            if let Some(user_id) = user_id {
                println!("User id: {user_id}");
            }
            if let Some(expires_at) = expires_at {
                println!("Access token expires: {}", expires_at.to_rfc3339());
            }
        }
        SessionState::Unauthenticated => println!("Unauthenticated"),
        SessionState::Bootstrapping => unreachable!(),
    }
    Ok(())
}
