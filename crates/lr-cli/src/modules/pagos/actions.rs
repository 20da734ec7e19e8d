use std::path::Path;

use super::http::{create_pago, delete_pago, get_pago, list_pagos, update_pago};
use crate::cli_args::*;
use crate::modules::shared::print_pagos_table;
use crate::modules::system::http::{
    parse_json, print_empty_response, print_json_response, FilePart, MultipartFields,
};
use crate::modules::system::CommandContext;

use lr_core::{Page, Pago};

pub(crate) async fn handle_pago(args: PagoArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        PagoCommand::List(args) => {
            let page_size = args.page.page_size.or(ctx.config.default_page_size);
            let response = list_pagos(ctx, args.page.page, page_size).await?;
            if args.page.json {
                print_json_response(response).await?;
            } else {
                let page: Page<Pago> = parse_json(response).await?;
                print_pagos_table(&page);
            }
        }
        PagoCommand::Get(args) => {
            let response = get_pago(ctx, args.id).await?;
            print_json_response(response).await?;
        }
        PagoCommand::Create(args) => {
            let mut fields = MultipartFields::default();
            fields
                .text
                .push(("alumno".to_string(), args.alumno.to_string()));
            fields
                .text
                .push(("fecha_pago".to_string(), args.fecha_pago.to_string()));
            fields
                .text
                .push(("numero_referencia".to_string(), args.numero_referencia));
            if let Some(tipo) = args.tipo_transaccion {
                fields
                    .text
                    .push(("tipo_transaccion".to_string(), tipo.as_str().to_string()));
            }
            if let Some(banco) = args.banco_emisor {
                fields.text.push(("banco_emisor".to_string(), banco));
            }
            if let Some(path) = args.comprobante.as_deref() {
                fields.file = Some(read_comprobante(path)?);
            }
            let response = create_pago(ctx, fields).await?;
            print_json_response(response).await?;
        }
        PagoCommand::Update(args) => {
            let mut fields = MultipartFields::default();
            if let Some(alumno) = args.alumno {
                fields.text.push(("alumno".to_string(), alumno.to_string()));
            }
            if let Some(fecha) = args.fecha_pago {
                fields
                    .text
                    .push(("fecha_pago".to_string(), fecha.to_string()));
            }
            if let Some(referencia) = args.numero_referencia {
                fields
                    .text
                    .push(("numero_referencia".to_string(), referencia));
            }
            if let Some(tipo) = args.tipo_transaccion {
                fields
                    .text
                    .push(("tipo_transaccion".to_string(), tipo.as_str().to_string()));
            }
            if let Some(banco) = args.banco_emisor {
                fields.text.push(("banco_emisor".to_string(), banco));
            }
            if let Some(path) = args.comprobante.as_deref() {
                fields.file = Some(read_comprobante(path)?);
            }
            let response = update_pago(ctx, args.id, fields).await?;
            print_json_response(response).await?;
        }
        PagoCommand::Delete(args) => {
            let response = delete_pago(ctx, args.id).await?;
            print_empty_response(response, "Pago deleted").await?;
        }
    }
    Ok(())
}

fn read_comprobante(path: &Path) -> anyhow::Result<FilePart> {
    let bytes = std::fs::read(path)
        .map_err(|err| anyhow::anyhow!("failed to read {}: {err}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("comprobante")
        .to_string();
    let mime = guess_mime(&file_name).to_string();
    Ok(FilePart {
        field_name: "captura_comprobante".to_string(),
        file_name,
        mime,
        bytes,
    })
}

fn guess_mime(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
