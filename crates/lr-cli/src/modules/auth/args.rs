use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long, help = "Username, prompted for when omitted")]
    pub username: Option<String>,
    #[arg(long, help = "Password, prompted for when omitted")]
    pub password: Option<String>,
}
