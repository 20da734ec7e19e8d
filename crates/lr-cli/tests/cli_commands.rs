use assert_cmd::Command;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lr"));
    cmd.env("HOME", home);
    cmd
}

// Unsigned token; only the claims segment is ever decoded.
fn token_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp},"user_id":7}}"#));
    format!("{header}.{claims}.sig")
}

fn usuario_body(id: i64, username: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": username,
        "first_name": "Maria",
        "last_name": "Perez",
        "email": "maria@example.com",
        "rol": "ALUMNO",
        "grupo": 2,
        "uuid": "00000000-0000-0000-0000-000000000001",
        "exento_pago": false,
        "inactivo_desde": null,
        "is_active": true
    })
}

#[test]
fn users_list_renders_a_table() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let list_body = json!({
        "count": 2,
        "next": null,
        "previous": null,
        "results": [usuario_body(1, "maria"), usuario_body(2, "jose")]
    });
    server
        .mock("GET", "/users/")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(list_body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "users",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("USERNAME"))
        .stdout(predicate::str::contains("maria"))
        .stdout(predicate::str::contains("jose"))
        .stdout(predicate::str::contains("Total: 2"));
}

#[test]
fn users_list_forwards_page_params_and_prints_json() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let list_body = json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [usuario_body(1, "maria")]
    });
    server
        .mock("GET", "/users/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("page_size".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(list_body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "users",
            "list",
            "--page",
            "2",
            "--page-size",
            "5",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("\"username\": \"maria\""));
}

#[test]
fn users_get_prints_the_user() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/users/9/")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(usuario_body(9, "maria").to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "users",
            "get",
            "9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"maria\""));
}

#[test]
fn users_create_sends_explicit_null_grupo() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/users/")
        .match_body(Matcher::Json(json!({
            "username": "ana",
            "grupo": null,
        })))
        .with_status(201)
        .with_body(usuario_body(3, "ana").to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "users",
            "create",
            "--username",
            "ana",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 3"));
}

#[test]
fn users_update_patches_only_the_given_fields() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("PATCH", "/users/9/")
        .match_body(Matcher::Json(json!({ "grupo": 4 })))
        .with_status(200)
        .with_body(usuario_body(9, "maria").to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "users",
            "update",
            "9",
            "--grupo",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"maria\""));
}

#[test]
fn users_delete_reports_success() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("DELETE", "/users/9/")
        .match_header("authorization", "Bearer token")
        .with_status(204)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "users",
            "delete",
            "9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted"));
}

#[test]
fn grupos_list_renders_a_table() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let list_body = json!({
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "id": 2,
            "nombre": "Juvenil",
            "descripcion": "Lunes y miercoles"
        }]
    });
    server
        .mock("GET", "/grupos/")
        .with_status(200)
        .with_body(list_body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "grupos",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("NOMBRE"))
        .stdout(predicate::str::contains("Juvenil"))
        .stdout(predicate::str::contains("Total: 1"));
}

#[test]
fn grupos_get_prints_the_grupo() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/grupos/2/")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(
            json!({
                "id": 2,
                "nombre": "Juvenil",
                "descripcion": "Lunes y miercoles"
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "grupos",
            "get",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nombre\": \"Juvenil\""));
}

#[test]
fn asistencia_create_surfaces_duplicate_rejection() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/asistencias/")
        .match_body(Matcher::Json(json!({
            "alumno": 3,
            "fecha": "2025-06-01",
            "presente": true,
        })))
        .with_status(400)
        .with_body(json!({ "detail": "Asistencia ya existe" }).to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "asistencias",
            "create",
            "--alumno",
            "3",
            "--fecha",
            "2025-06-01",
            "--presente",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Asistencia ya existe"));
}

#[test]
fn session_day_activate_posts_to_the_action_endpoint() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/session-days/5/activate/")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(
            json!({
                "id": 5,
                "grupo": 2,
                "fecha": "2025-06-01",
                "active": true
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "session-days",
            "activate",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"active\": true"));
}

#[test]
fn session_day_deactivate_posts_to_the_action_endpoint() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/session-days/5/deactivate/")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(
            json!({
                "id": 5,
                "grupo": 2,
                "fecha": "2025-06-01",
                "active": false
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "session-days",
            "deactivate",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"active\": false"));
}

#[test]
fn pago_create_uploads_a_multipart_form() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    let captura = home_dir.path().join("recibo.png");
    fs::write(&captura, b"png-bytes").expect("write comprobante");

    server
        .mock("POST", "/pagos/")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("REF-9".to_string()),
            Matcher::Regex("PAGO_MOVIL".to_string()),
            Matcher::Regex("captura_comprobante".to_string()),
            Matcher::Regex("png-bytes".to_string()),
        ]))
        .with_status(201)
        .with_body(
            json!({
                "id": 1,
                "alumno": 3,
                "fecha_pago": "2025-06-01",
                "numero_referencia": "REF-9",
                "banco_emisor": null,
                "tipo_transaccion": "PAGO_MOVIL",
                "captura_comprobante": "/media/capturas/recibo.png"
            })
            .to_string(),
        )
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "pagos",
            "create",
            "--alumno",
            "3",
            "--fecha-pago",
            "2025-06-01",
            "--numero-referencia",
            "REF-9",
            "--tipo-transaccion",
            "pago_movil",
            "--comprobante",
            captura.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 1"));
}

#[test]
fn stats_users_count_prints_the_number() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("GET", "/stats/users-count/")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(json!({ "athletes_count": 42 }).to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "token",
            "--insecure",
            "stats",
            "users-count",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn login_command_exchanges_credentials() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();

    server
        .mock("POST", "/token/")
        .match_body(Matcher::Json(json!({
            "username": "admin",
            "password": "secret",
        })))
        .with_status(200)
        .with_body(json!({ "access": "acc-1", "refresh": "ref-1" }).to_string())
        .create();

    // --token keeps token storage in memory for the process lifetime.
    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--token",
            "seed",
            "--insecure",
            "login",
            "--username",
            "admin",
            "--password",
            "secret",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"));
}

#[test]
fn logout_command_succeeds_without_a_server() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args([
            "--addr",
            "https://127.0.0.1:1",
            "--token",
            "tok",
            "logout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
}

#[test]
fn session_command_reports_a_live_token() {
    let home_dir = tempdir().expect("tempdir");
    let exp = (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            "https://127.0.0.1:1",
            "--token",
            &token_with_exp(exp),
            "session",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("User id: 7"))
        .stdout(predicate::str::contains("Access token expires:"));
}

#[test]
fn session_command_reports_an_opaque_token_as_unauthenticated() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args([
            "--addr",
            "https://127.0.0.1:1",
            "--token",
            "opaque",
            "session",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unauthenticated"));
}

#[test]
fn config_set_addr_persists_to_the_config_file() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args(["config", "set-addr", "https://gym.example.com/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Address saved"));

    let contents = fs::read_to_string(home_dir.path().join(".lr").join("config.json"))
        .expect("config file");
    assert!(contents.contains("https://gym.example.com/api"));

    base_cmd(home_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://gym.example.com/api"));
}
