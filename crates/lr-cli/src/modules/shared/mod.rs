pub(crate) mod args;
mod format_table;

pub(crate) use format_table::{
    print_asistencias_table, print_grupos_table, print_pagos_table, print_session_days_table,
    print_users_table,
};
