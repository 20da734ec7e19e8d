use super::http::{create_grupo, delete_grupo, get_grupo, list_grupos, update_grupo};
use crate::cli_args::*;
use crate::modules::grupos::{CreateGrupoRequest, UpdateGrupoRequest};
use crate::modules::shared::print_grupos_table;
use crate::modules::system::http::{parse_json, print_empty_response, print_json_response};
use crate::modules::system::CommandContext;

use lr_core::{Grupo, Page};

pub(crate) async fn handle_grupo(args: GrupoArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        GrupoCommand::List(args) => {
            let page_size = args.page.page_size.or(ctx.config.default_page_size);
            let response = list_grupos(ctx, args.page.page, page_size).await?;
            if args.page.json {
                print_json_response(response).await?;
            } else {
                let page: Page<Grupo> = parse_json(response).await?;
                print_grupos_table(&page);
            }
        }
        GrupoCommand::Get(args) => {
            let response = get_grupo(ctx, args.id).await?;
            print_json_response(response).await?;
        }
        GrupoCommand::Create(args) => {
            let payload = CreateGrupoRequest {
                nombre: args.nombre,
                descripcion: args.descripcion,
            };
            let response = create_grupo(ctx, payload).await?;
            print_json_response(response).await?;
        }
        GrupoCommand::Update(args) => {
            let payload = UpdateGrupoRequest {
                nombre: args.nombre,
                descripcion: args.descripcion,
            };
            let response = update_grupo(ctx, args.id, payload).await?;
            print_json_response(response).await?;
        }
        GrupoCommand::Delete(args) => {
            let response = delete_grupo(ctx, args.id).await?;
            print_empty_response(response, "Grupo deleted").await?;
        }
    }
    Ok(())
}
