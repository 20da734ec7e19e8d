use super::http::{create_user, delete_user, get_user, list_users, update_user};
use crate::cli_args::*;
use crate::modules::shared::print_users_table;
use crate::modules::system::http::{parse_json, print_empty_response, print_json_response};
use crate::modules::system::CommandContext;
use crate::modules::users::{CreateUserRequest, UpdateUserRequest};

use lr_core::{Page, Usuario};

pub(crate) async fn handle_user(args: UserArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        UserCommand::List(args) => {
            let page_size = args.page.page_size.or(ctx.config.default_page_size);
            let response = list_users(ctx, args.page.page, page_size).await?;
            if args.page.json {
                print_json_response(response).await?;
            } else {
                let page: Page<Usuario> = parse_json(response).await?;
                print_users_table(&page);
            }
        }
        UserCommand::Get(args) => {
            let response = get_user(ctx, args.id).await?;
            print_json_response(response).await?;
        }
        UserCommand::Create(args) => {
            let payload = CreateUserRequest {
                username: args.username,
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                rol: args.rol,
                grupo: args.grupo,
                exento_pago: args.exento_pago.then_some(true),
                inactivo_desde: args.inactivo_desde,
            };
            let response = create_user(ctx, payload).await?;
            print_json_response(response).await?;
        }
        UserCommand::Update(args) => {
            let payload = UpdateUserRequest {
                username: args.username,
                first_name: args.first_name,
                last_name: args.last_name,
                email: args.email,
                rol: args.rol,
                grupo: args.grupo,
                exento_pago: args.exento_pago,
                inactivo_desde: args.inactivo_desde,
                is_active: args.is_active,
            };
            let response = update_user(ctx, args.id, payload).await?;
            print_json_response(response).await?;
        }
        UserCommand::Delete(args) => {
            let response = delete_user(ctx, args.id).await?;
            print_empty_response(response, "User deleted").await?;
        }
    }
    Ok(())
}
