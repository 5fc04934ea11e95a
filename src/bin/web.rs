//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_files::Files;
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use kd_tracker::{
    GameMap, MatchResult, PlayerId, PlayerOverview, Roster, RosterError, Selection, SelectionMode,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// In-memory state: one process-wide roster, seeded with sample players at startup.
type AppState = Data<RwLock<Roster>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Snapshot the presentation layer renders from: per-player overviews with
/// derived stats, plus the selection and add-player panel state.
#[derive(Serialize)]
struct RosterView {
    players: Vec<PlayerOverview>,
    selection: Option<Selection>,
    show_add_player: bool,
}

impl RosterView {
    fn snapshot(roster: &Roster) -> Self {
        Self {
            players: roster.players.iter().map(PlayerOverview::from_player).collect(),
            selection: roster.selection,
            show_add_player: roster.show_add_player,
        }
    }
}

#[derive(Deserialize)]
struct AddPlayerBody {
    gamertag: String,
    #[serde(default)]
    image: String,
    kd_goal: f64,
}

#[derive(Deserialize)]
struct EditPlayerBody {
    gamertag: Option<String>,
    image: Option<String>,
    kd_goal: Option<f64>,
}

#[derive(Deserialize)]
struct RecordMatchBody {
    map: GameMap,
    kd: f64,
    result: MatchResult,
}

#[derive(Deserialize)]
struct SelectBody {
    player_id: PlayerId,
    mode: SelectionMode,
}

/// Path segment: player id (e.g. /api/players/{id}/matches)
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

fn error_response(e: &RosterError) -> HttpResponse {
    match e {
        RosterError::PlayerNotFound(_) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "kd-tracker",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current roster snapshot with derived stats.
#[get("/api/roster")]
async fn api_get_roster(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(RosterView::snapshot(&g))
}

/// The fixed map list for the update-stats dropdown.
#[get("/api/maps")]
async fn api_maps() -> HttpResponse {
    let names: Vec<&'static str> = GameMap::ALL.iter().map(|m| m.name()).collect();
    HttpResponse::Ok().json(names)
}

/// Add a player (add-player form submit).
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_player(&body.gamertag, &body.image, body.kd_goal) {
        Ok(id) => {
            log::info!("Added player {} ({})", body.gamertag.trim(), id);
            HttpResponse::Ok().json(RosterView::snapshot(&g))
        }
        Err(e) => error_response(&e),
    }
}

/// Edit a player's profile (edit form submit). Blank fields keep their
/// previous value; the match history is untouched.
#[put("/api/players/{id}")]
async fn api_edit_player(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<EditPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.edit_player(
        path.id,
        body.gamertag.as_deref(),
        body.image.as_deref(),
        body.kd_goal,
    ) {
        Ok(()) => HttpResponse::Ok().json(RosterView::snapshot(&g)),
        Err(e) => error_response(&e),
    }
}

/// Record a match for a player (update-stats form submit).
#[post("/api/players/{id}/matches")]
async fn api_record_match(
    state: AppState,
    path: Path<PlayerPath>,
    body: Json<RecordMatchBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.record_match(path.id, body.map, body.kd, body.result) {
        Ok(match_id) => {
            log::info!("Recorded match {} on {} for player {}", match_id, body.map, path.id);
            HttpResponse::Ok().json(RosterView::snapshot(&g))
        }
        Err(e) => error_response(&e),
    }
}

/// View-stats panel: a player's match history in insertion order.
#[get("/api/players/{id}/matches")]
async fn api_player_matches(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_player(path.id) {
        Some(p) => HttpResponse::Ok().json(serde_json::json!({
            "gamertag": p.gamertag,
            "matches": p.matches,
        })),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" })),
    }
}

/// Select a (player, panel) pair; selecting the active pair again closes it.
#[post("/api/selection")]
async fn api_select(state: AppState, body: Json<SelectBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.select(body.player_id, body.mode) {
        Ok(()) => HttpResponse::Ok().json(RosterView::snapshot(&g)),
        Err(e) => error_response(&e),
    }
}

/// Show/hide the add-player form (clears any selection).
#[post("/api/add-player/toggle")]
async fn api_toggle_add_player(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.toggle_add_player();
    HttpResponse::Ok().json(RosterView::snapshot(&g))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Roster::seeded()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_roster)
            .service(api_maps)
            .service(api_add_player)
            .service(api_edit_player)
            .service(api_record_match)
            .service(api_player_matches)
            .service(api_select)
            .service(api_toggle_add_player)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
