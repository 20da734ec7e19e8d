use super::http::{
    activate_session_day, create_session_day, deactivate_session_day, delete_session_day,
    get_session_day, list_session_days, update_session_day,
};
use crate::cli_args::*;
use crate::modules::session_days::{CreateSessionDayRequest, UpdateSessionDayRequest};
use crate::modules::shared::print_session_days_table;
use crate::modules::system::http::{parse_json, print_empty_response, print_json_response};
use crate::modules::system::CommandContext;

use lr_core::{Page, SessionDay};

pub(crate) async fn handle_session_day(
    args: SessionDayArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        SessionDayCommand::List(args) => {
            let page_size = args.page.page_size.or(ctx.config.default_page_size);
            let response = list_session_days(ctx, args.page.page, page_size).await?;
            if args.page.json {
                print_json_response(response).await?;
            } else {
                let page: Page<SessionDay> = parse_json(response).await?;
                print_session_days_table(&page);
            }
        }
        SessionDayCommand::Get(args) => {
            let response = get_session_day(ctx, args.id).await?;
            print_json_response(response).await?;
        }
        SessionDayCommand::Create(args) => {
            let payload = CreateSessionDayRequest {
                grupo: args.grupo,
                fecha: args.fecha,
                active: args.active.then_some(true),
            };
            let response = create_session_day(ctx, payload).await?;
            print_json_response(response).await?;
        }
        SessionDayCommand::Update(args) => {
            let payload = UpdateSessionDayRequest {
                grupo: args.grupo,
                fecha: args.fecha,
                active: args.active,
            };
            let response = update_session_day(ctx, args.id, payload).await?;
            print_json_response(response).await?;
        }
        SessionDayCommand::Delete(args) => {
            let response = delete_session_day(ctx, args.id).await?;
            print_empty_response(response, "Session day deleted").await?;
        }
        SessionDayCommand::Activate(args) => {
            let response = activate_session_day(ctx, args.id).await?;
            print_json_response(response).await?;
        }
        SessionDayCommand::Deactivate(args) => {
            let response = deactivate_session_day(ctx, args.id).await?;
            print_json_response(response).await?;
        }
    }
    Ok(())
}
