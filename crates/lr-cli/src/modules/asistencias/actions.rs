use super::http::{
    create_asistencia, delete_asistencia, get_asistencia, list_asistencias, update_asistencia,
};
use crate::cli_args::*;
use crate::modules::asistencias::{CreateAsistenciaRequest, UpdateAsistenciaRequest};
use crate::modules::shared::print_asistencias_table;
use crate::modules::system::http::{parse_json, print_empty_response, print_json_response};
use crate::modules::system::CommandContext;

use lr_core::{Asistencia, Page};

pub(crate) async fn handle_asistencia(
    args: AsistenciaArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        AsistenciaCommand::List(args) => {
            let page_size = args.page.page_size.or(ctx.config.default_page_size);
            let response = list_asistencias(ctx, args.page.page, page_size).await?;
            if args.page.json {
                print_json_response(response).await?;
            } else {
                let page: Page<Asistencia> = parse_json(response).await?;
                print_asistencias_table(&page);
            }
        }
        AsistenciaCommand::Get(args) => {
            let response = get_asistencia(ctx, args.id).await?;
            print_json_response(response).await?;
        }
        AsistenciaCommand::Create(args) => {
            let payload = CreateAsistenciaRequest {
                alumno: args.alumno,
                fecha: args.fecha,
                presente: args.presente.then_some(true),
                nota: args.nota,
            };
            let response = create_asistencia(ctx, payload).await?;
            print_json_response(response).await?;
        }
        AsistenciaCommand::Update(args) => {
            let payload = UpdateAsistenciaRequest {
                alumno: args.alumno,
                fecha: args.fecha,
                presente: args.presente,
                nota: args.nota,
            };
            let response = update_asistencia(ctx, args.id, payload).await?;
            print_json_response(response).await?;
        }
        AsistenciaCommand::Delete(args) => {
            let response = delete_asistencia(ctx, args.id).await?;
            print_empty_response(response, "Asistencia deleted").await?;
        }
    }
    Ok(())
}
