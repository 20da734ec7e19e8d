use lr_core::{Asistencia, Grupo, Page, Pago, SessionDay, Usuario};

fn opt_cell(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn text_cell(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub(crate) fn print_users_table(page: &Page<Usuario>) {
    let mut rows = Vec::new();
    let mut id_width = "ID".len();
    let mut username_width = "USERNAME".len();
    let mut nombre_width = "NOMBRE".len();
    let mut rol_width = "ROL".len();
    let mut grupo_width = "GRUPO".len();

    for usuario in &page.results {
        let id = usuario.id.to_string();
        let nombre = text_cell(format!("{} {}", usuario.first_name, usuario.last_name).trim());
        let rol = usuario.rol.as_str().to_string();
        let grupo = opt_cell(usuario.grupo.map(|grupo| grupo.to_string()));
        id_width = id_width.max(id.len());
        username_width = username_width.max(usuario.username.len());
        nombre_width = nombre_width.max(nombre.len());
        rol_width = rol_width.max(rol.len());
        grupo_width = grupo_width.max(grupo.len());
        rows.push((id, usuario.username.clone(), nombre, rol, grupo, usuario.is_active));
    }

    println!(
        "{:<id_width$}  {:<username_width$}  {:<nombre_width$}  {:<rol_width$}  {:<grupo_width$}  ACTIVE",
        "ID",
        "USERNAME",
        "NOMBRE",
        "ROL",
        "GRUPO",
        id_width = id_width,
        username_width = username_width,
        nombre_width = nombre_width,
        rol_width = rol_width,
        grupo_width = grupo_width,
    );
    for (id, username, nombre, rol, grupo, active) in rows {
        println!(
            "{:<id_width$}  {:<username_width$}  {:<nombre_width$}  {:<rol_width$}  {:<grupo_width$}  {}",
            id,
            username,
            nombre,
            rol,
            grupo,
            active,
            id_width = id_width,
            username_width = username_width,
            nombre_width = nombre_width,
            rol_width = rol_width,
            grupo_width = grupo_width,
        );
    }
    println!("Total: {}", page.count);
}

pub(crate) fn print_grupos_table(page: &Page<Grupo>) {
    let mut rows = Vec::new();
    let mut id_width = "ID".len();
    let mut nombre_width = "NOMBRE".len();

    for grupo in &page.results {
        let id = grupo.id.to_string();
        id_width = id_width.max(id.len());
        nombre_width = nombre_width.max(grupo.nombre.len());
        rows.push((id, grupo.nombre.clone(), text_cell(&grupo.descripcion)));
    }

    println!(
        "{:<id_width$}  {:<nombre_width$}  DESCRIPCION",
        "ID",
        "NOMBRE",
        id_width = id_width,
        nombre_width = nombre_width,
    );
    for (id, nombre, descripcion) in rows {
        println!(
            "{:<id_width$}  {:<nombre_width$}  {}",
            id,
            nombre,
            descripcion,
            id_width = id_width,
            nombre_width = nombre_width,
        );
    }
    println!("Total: {}", page.count);
}

pub(crate) fn print_pagos_table(page: &Page<Pago>) {
    let mut rows = Vec::new();
    let mut id_width = "ID".len();
    let mut alumno_width = "ALUMNO".len();
    let mut fecha_width = "FECHA".len();
    let mut referencia_width = "REFERENCIA".len();
    let mut tipo_width = "TIPO".len();

    for pago in &page.results {
        let id = pago.id.to_string();
        let alumno = pago.alumno.to_string();
        let fecha = pago.fecha_pago.to_string();
        let tipo = pago.tipo_transaccion.as_str().to_string();
        let banco = opt_cell(pago.banco_emisor.clone());
        id_width = id_width.max(id.len());
        alumno_width = alumno_width.max(alumno.len());
        fecha_width = fecha_width.max(fecha.len());
        referencia_width = referencia_width.max(pago.numero_referencia.len());
        tipo_width = tipo_width.max(tipo.len());
        rows.push((id, alumno, fecha, pago.numero_referencia.clone(), tipo, banco));
    }

    println!(
        "{:<id_width$}  {:<alumno_width$}  {:<fecha_width$}  {:<referencia_width$}  {:<tipo_width$}  BANCO",
        "ID",
        "ALUMNO",
        "FECHA",
        "REFERENCIA",
        "TIPO",
        id_width = id_width,
        alumno_width = alumno_width,
        fecha_width = fecha_width,
        referencia_width = referencia_width,
        tipo_width = tipo_width,
    );
    for (id, alumno, fecha, referencia, tipo, banco) in rows {
        println!(
            "{:<id_width$}  {:<alumno_width$}  {:<fecha_width$}  {:<referencia_width$}  {:<tipo_width$}  {}",
            id,
            alumno,
            fecha,
            referencia,
            tipo,
            banco,
            id_width = id_width,
            alumno_width = alumno_width,
            fecha_width = fecha_width,
            referencia_width = referencia_width,
            tipo_width = tipo_width,
        );
    }
    println!("Total: {}", page.count);
}

pub(crate) fn print_asistencias_table(page: &Page<Asistencia>) {
    let mut rows = Vec::new();
    let mut id_width = "ID".len();
    let mut alumno_width = "ALUMNO".len();
    let mut fecha_width = "FECHA".len();
    let mut presente_width = "PRESENTE".len();

    for asistencia in &page.results {
        let id = asistencia.id.to_string();
        let alumno = asistencia.alumno.to_string();
        let fecha = asistencia.fecha.to_string();
        let presente = asistencia.presente.to_string();
        id_width = id_width.max(id.len());
        alumno_width = alumno_width.max(alumno.len());
        fecha_width = fecha_width.max(fecha.len());
        presente_width = presente_width.max(presente.len());
        rows.push((id, alumno, fecha, presente, text_cell(&asistencia.nota)));
    }

    println!(
        "{:<id_width$}  {:<alumno_width$}  {:<fecha_width$}  {:<presente_width$}  NOTA",
        "ID",
        "ALUMNO",
        "FECHA",
        "PRESENTE",
        id_width = id_width,
        alumno_width = alumno_width,
        fecha_width = fecha_width,
        presente_width = presente_width,
    );
    for (id, alumno, fecha, presente, nota) in rows {
        println!(
            "{:<id_width$}  {:<alumno_width$}  {:<fecha_width$}  {:<presente_width$}  {}",
            id,
            alumno,
            fecha,
            presente,
            nota,
            id_width = id_width,
            alumno_width = alumno_width,
            fecha_width = fecha_width,
            presente_width = presente_width,
        );
    }
    println!("Total: {}", page.count);
}

pub(crate) fn print_session_days_table(page: &Page<SessionDay>) {
    let mut rows = Vec::new();
    let mut id_width = "ID".len();
    let mut grupo_width = "GRUPO".len();
    let mut fecha_width = "FECHA".len();

    for day in &page.results {
        let id = day.id.to_string();
        let grupo = day.grupo.to_string();
        let fecha = day.fecha.to_string();
        id_width = id_width.max(id.len());
        grupo_width = grupo_width.max(grupo.len());
        fecha_width = fecha_width.max(fecha.len());
        rows.push((id, grupo, fecha, day.active));
    }

    println!(
        "{:<id_width$}  {:<grupo_width$}  {:<fecha_width$}  ACTIVE",
        "ID",
        "GRUPO",
        "FECHA",
        id_width = id_width,
        grupo_width = grupo_width,
        fecha_width = fecha_width,
    );
    for (id, grupo, fecha, active) in rows {
        println!(
            "{:<id_width$}  {:<grupo_width$}  {:<fecha_width$}  {}",
            id,
            grupo,
            fecha,
            active,
            id_width = id_width,
            grupo_width = grupo_width,
            fecha_width = fecha_width,
        );
    }
    println!("Total: {}", page.count);
}
