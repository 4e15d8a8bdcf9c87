// Route handlers, server setup
use crate::config::Settings;
use crate::error::Result;
use crate::models::{HistoryParams, HistoryResponse, Period, QuoteParams, QuoteResponse};
use crate::providers::awesome_api::AwesomeApiProvider;
use crate::providers::twelve_data::TwelveDataProvider;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};

pub struct AppState {
    pub awesome_api: AwesomeApiProvider,
    pub twelve_data: TwelveDataProvider,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let timeout = settings.upstream_timeout();
        Ok(Self {
            awesome_api: AwesomeApiProvider::new(&settings.awesome_api.base_url, timeout)?,
            twelve_data: TwelveDataProvider::new(
                &settings.twelve_data.base_url,
                settings.twelve_data.api_key.clone(),
                timeout,
            )?,
        })
    }
}

pub async fn get_quote(
    data: web::Data<AppState>,
    params: web::Query<QuoteParams>,
) -> Result<HttpResponse> {
    let (de, para) = params.pair()?;

    println!("Fetching latest {}-{} quote...", de, para);
    match data.awesome_api.latest_bid(&de, &para).await {
        Ok(cotacao) => Ok(HttpResponse::Ok().json(QuoteResponse { cotacao })),
        Err(e) => {
            println!("Error fetching {}-{} quote: {}", de, para, e);
            Err(e)
        }
    }
}

pub async fn get_history(
    data: web::Data<AppState>,
    params: web::Query<HistoryParams>,
) -> Result<HttpResponse> {
    let (de, para) = params.pair()?;

    println!("Fetching {}-{} history...", de, para);
    let series = match params.period() {
        Period::Intraday => data.twelve_data.intraday_series(&de, &para).await,
        Period::Daily(limit) => data.awesome_api.daily_series(&de, &para, limit).await,
    };

    match series {
        Ok(dados) => Ok(HttpResponse::Ok().json(HistoryResponse { dados })),
        Err(e) => {
            println!("Error fetching {}-{} history: {}", de, para, e);
            Err(e)
        }
    }
}

pub async fn start_server(settings: Settings) -> std::io::Result<()> {
    // Build the upstream clients once; handlers share them read-only
    let state = AppState::from_settings(&settings).expect("Failed to create upstream clients");
    let app_state = web::Data::new(state);
    let addr = settings.server_addr();

    println!("Listening on {}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .route("/cotacao", web::get().to(get_quote))
            .route("/historico", web::get().to(get_history))
    })
    .bind(addr)?
    .run()
    .await
}
