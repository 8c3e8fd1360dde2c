//! Single binary web server: REST API for the ranking ladder, static front-end from /static.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set DATA_FILE to persist players as JSON; otherwise they live in memory.

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    delete,
    error::{InternalError, JsonPayloadError},
    get, http::header, middleware::Logger, patch, post,
    web::{self, Data, Json, Path},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::RwLock;
use table_tennis_ranking::{
    apply_match, create_player, delete_player_by_name, export, get_player_by_id, list_rankings,
    update_player_details, Config, JsonFileStore, MemoryStore, NewPlayer, PlayerPatch, PlayerStore,
    RankingError, StoreError,
};

type DynStore = dyn PlayerStore + Send + Sync;

/// Shared record store. Every mutation holds the write guard for its whole
/// read-modify-write, so concurrent match submissions cannot interleave.
type Store = RwLock<Box<DynStore>>;
type AppState = Data<Store>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct MatchResultBody {
    p1_name: String,
    p2_name: String,
    set1: i32,
    set2: i32,
}

#[derive(Deserialize)]
struct DeletePlayerBody {
    name: String,
}

/// Path segment: player id as sent by the client (validated by the engine).
#[derive(Deserialize)]
struct PlayerPath {
    id: String,
}

/// Map an engine error to its HTTP status with a JSON `{ "error": ... }` body.
fn error_response(e: &RankingError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        RankingError::Persistence(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
        RankingError::NameTaken(_) => {
            log::warn!("{}", e);
            HttpResponse::Conflict().json(body)
        }
        RankingError::PlayerNotFound(_) | RankingError::PlayersNotFound(_) | RankingError::IdNotFound(_) => {
            log::warn!("{}", e);
            HttpResponse::NotFound().json(body)
        }
        RankingError::Validation(_) | RankingError::InvalidId(_) | RankingError::InvalidScore(_) => {
            log::warn!("{}", e);
            HttpResponse::BadRequest().json(body)
        }
    }
}

/// Malformed or incomplete JSON bodies are validation errors with the usual `{ "error" }` shape.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let resp = error_response(&RankingError::Validation(err.to_string()));
    InternalError::from_response(err, resp).into()
}

/// Run a mutating store operation on the blocking pool (file writes must not stall a worker).
async fn run_mut<T, F>(state: &AppState, op: F) -> Result<T, RankingError>
where
    T: Send + 'static,
    F: FnOnce(&mut DynStore) -> Result<T, RankingError> + Send + 'static,
{
    let state = state.clone();
    web::block(move || {
        let mut g = state.write().map_err(|_| StoreError::LockPoisoned("write"))?;
        op(&mut **g)
    })
    .await
    .map_err(|e| RankingError::Persistence(StoreError::Worker(e.to_string())))?
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "table-tennis-ranking",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Rankings: all players, highest total first.
#[get("/api/scores")]
async fn api_rankings(state: AppState) -> HttpResponse {
    let result = state
        .read()
        .map_err(|_| RankingError::from(StoreError::LockPoisoned("read")))
        .and_then(|g| list_rankings(&**g));
    match result {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => error_response(&e),
    }
}

/// Create a player (rank derived from the starting total).
#[post("/api/scores/create")]
async fn api_create_player(state: AppState, body: Json<NewPlayer>) -> HttpResponse {
    let new = body.into_inner();
    match run_mut(&state, move |s| create_player(s, new)).await {
        Ok(player) => HttpResponse::Created().json(serde_json::json!({
            "message": format!("Player \"{}\" created with rank {}", player.name, player.rank),
            "player": player,
        })),
        Err(e) => error_response(&e),
    }
}

/// Submit a match result; updates both players' totals and ranks.
#[post("/api/scores/update")]
async fn api_submit_match(state: AppState, body: Json<MatchResultBody>) -> HttpResponse {
    let m = body.into_inner();
    match run_mut(&state, move |s| apply_match(s, &m.p1_name, &m.p2_name, m.set1, m.set2)).await {
        Ok(update) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Match result applied",
            "p1_update": { "points": update.p1_update.points, "new_rank": update.p1_update.new_rank },
            "p2_update": { "points": update.p2_update.points, "new_rank": update.p2_update.new_rank },
        })),
        Err(e) => error_response(&e),
    }
}

/// Delete a player by name.
#[delete("/api/scores/delete")]
async fn api_delete_player(state: AppState, body: Json<DeletePlayerBody>) -> HttpResponse {
    let name = body.into_inner().name;
    let message = format!("Player \"{}\" deleted", name.trim());
    match run_mut(&state, move |s| delete_player_by_name(s, &name)).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "message": message })),
        Err(e) => error_response(&e),
    }
}

/// Get one player by id (400 if the id is malformed, 404 if unknown).
#[get("/api/scores/id/{id}")]
async fn api_get_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let result = state
        .read()
        .map_err(|_| RankingError::from(StoreError::LockPoisoned("read")))
        .and_then(|g| get_player_by_id(&**g, &path.id));
    match result {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

/// Edit name, total points or phone number. A new total recomputes the rank.
#[patch("/api/scores/id/{id}")]
async fn api_update_player(state: AppState, path: Path<PlayerPath>, body: Json<PlayerPatch>) -> HttpResponse {
    let id = path.into_inner().id;
    let patch = body.into_inner();
    match run_mut(&state, move |s| update_player_details(s, &id, patch)).await {
        Ok(player) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Player \"{}\" updated", player.name),
            "player": player,
        })),
        Err(e) => error_response(&e),
    }
}

/// Download the current rankings as CSV.
#[get("/api/scores/export")]
async fn api_export_rankings(state: AppState) -> HttpResponse {
    let players = match state
        .read()
        .map_err(|_| RankingError::from(StoreError::LockPoisoned("read")))
        .and_then(|g| list_rankings(&**g))
    {
        Ok(players) => players,
        Err(e) => return error_response(&e),
    };
    match export::rankings_csv(&players) {
        Ok(csv) => {
            let filename = format!("rankings-{}.csv", chrono::Local::now().format("%Y-%m-%d"));
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(csv)
        }
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": "export failed" }))
        }
    }
}

/// API routes plus the JSON body error handler.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(api_health)
        .service(favicon)
        .service(api_rankings)
        .service(api_create_player)
        .service(api_submit_match)
        .service(api_delete_player)
        .service(api_export_rankings)
        .service(api_get_player)
        .service(api_update_player);
}

/// Any origin may call the API (the front-end is often served from elsewhere).
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn open_store(config: &Config) -> std::io::Result<Box<DynStore>> {
    match &config.data_file {
        Some(path) => {
            let store = JsonFileStore::open(path).map_err(|e| {
                log::error!("Cannot open player data: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            log::info!("Loaded {} player(s) from {}", store.len(), store.path().display());
            Ok(Box::new(store))
        }
        None => {
            log::info!("DATA_FILE not set; players are kept in memory only");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let state: AppState = Data::new(RwLock::new(open_store(&config)?));

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if !serve_static {
        log::info!("{} is not a directory; not serving /static", static_dir.display());
    }
    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
            .configure(move |cfg| {
                if serve_static {
                    cfg.service(Files::new("/static", static_dir).index_file("index.html"));
                }
            })
    })
    .bind(bind)?
    .run()
    .await
}
