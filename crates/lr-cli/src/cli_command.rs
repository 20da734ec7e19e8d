use crate::cli_args::*;
use crate::modules::system::CommandContext;

use crate::modules::asistencias::handle_asistencia;
use crate::modules::grupos::handle_grupo;
use crate::modules::pagos::handle_pago;
use crate::modules::session_days::handle_session_day;
use crate::modules::system::handle_stats_command;
use crate::modules::users::handle_user;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Users(args) => handle_user(args, ctx).await?,
        Command::Grupos(args) => handle_grupo(args, ctx).await?,
        Command::Pagos(args) => handle_pago(args, ctx).await?,
        Command::Asistencias(args) => handle_asistencia(args, ctx).await?,
        Command::SessionDays(args) => handle_session_day(args, ctx).await?,
        Command::Stats(args) => handle_stats_command(args, ctx).await?,
        Command::Config(_) | Command::Login(_) | Command::Logout | Command::Session => {
            unreachable!()
        }
    }

    Ok(())
}
