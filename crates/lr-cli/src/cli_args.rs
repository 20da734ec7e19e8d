use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::asistencias::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::grupos::args::*;
pub use crate::modules::pagos::args::*;
pub use crate::modules::session_days::args::*;
pub use crate::modules::shared::args::*;
pub use crate::modules::system::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "lr")]
#[command(about = "La Roca administration CLI")]
pub struct Cli {
    #[arg(long, env = "LR_ADDR")]
    pub addr: Option<String>,
    #[arg(long, env = "LR_TOKEN")]
    pub token: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Logout,
    Session,
    Users(UserArgs),
    Grupos(GrupoArgs),
    Pagos(PagoArgs),
    Asistencias(AsistenciaArgs),
    SessionDays(SessionDayArgs),
    Stats(StatsArgs),
    Config(ConfigArgs),
}
